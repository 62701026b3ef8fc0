//! Coffee Shop MCP Server Library
//!
//! This library provides a line-delimited JSON-RPC (MCP) server over
//! stdin/stdout that exposes a fixed coffee shop menu through tools
//! and resources.

// Domain modules
pub mod mcp;
pub mod menu;

// Infrastructure
pub mod server;
