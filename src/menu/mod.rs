//! Coffee Shop Menu Domain Module
//!
//! This module contains the menu domain, including:
//! - Domain models (MenuItem, tool inputs)
//! - Application state (menu table, advertised catalogs)
//! - Tool execution bodies (drink listing and lookup)

pub mod handlers;
pub mod models;
pub mod state;

// Re-export commonly used types for convenience
pub use state::{AppState, SharedState};
