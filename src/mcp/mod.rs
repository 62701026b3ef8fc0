//! Model Context Protocol (MCP) Module
//!
//! This module contains the MCP protocol implementation, including:
//! - Protocol models (envelopes, descriptors, constants, catalogs)
//! - RPC helpers (response envelopes, result payloads)
//! - Method dispatch (initialize, tools/list, tools/call, etc.)

pub mod handlers;
pub mod helpers;
pub mod models;

// Re-export the dispatch entry point
pub use handlers::dispatch;
