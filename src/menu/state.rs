//! Application State
//!
//! This module holds the immutable state the dispatcher works against:
//! the seeded menu table and the advertised tool/resource catalogs. All
//! of it is constructed once at startup and never mutated, so sharing is
//! a plain `Arc` with no locking.

use std::sync::Arc;

use super::models::MenuItem;
use crate::mcp::models::{resource_catalog, tool_catalog, ResourceDefinition, ToolDefinition};

/// Shared application state that can be safely passed between tasks
pub type SharedState = Arc<AppState>;

/// Read-only state backing every request
pub struct AppState {
    /// The menu, in advertisement order
    pub menu: Vec<MenuItem>,

    /// Tool descriptors served by `tools/list`
    pub tools: Vec<ToolDefinition>,

    /// Resource descriptors served by `resources/list`
    pub resources: Vec<ResourceDefinition>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    /// Creates the state with the seeded menu and the fixed catalogs
    pub fn new() -> Self {
        Self {
            menu: seed_menu(),
            tools: tool_catalog(),
            resources: resource_catalog(),
        }
    }

    /// Exact-name, case-sensitive lookup; first match wins
    pub fn find_drink(&self, name: &str) -> Option<&MenuItem> {
        self.menu.iter().find(|item| item.name == name)
    }
}

/// The shop's menu. Order matters: `getDrinkNames` reports it verbatim.
fn seed_menu() -> Vec<MenuItem> {
    vec![
        MenuItem {
            name: "Latte".into(),
            price: 2.50,
            description: "A latte (short for \"caffè latte,\" which means \"milk coffee\" \
                          in Italian) is a popular espresso-based coffee drink"
                .into(),
        },
        MenuItem {
            name: "Flat white".into(),
            price: 2.50,
            description: "A flat white is an espresso-based coffee drink that originated in \
                          Australia or New Zealand. It is similar to a latte but has some key \
                          differences"
                .into(),
        },
        MenuItem {
            name: "Tea".into(),
            price: 2.00,
            description: "A cup of tea".into(),
        },
        MenuItem {
            name: "Water".into(),
            price: 1.00,
            description: "A glass of water".into(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn menu_preserves_seed_order() {
        let state = AppState::new();
        let names: Vec<&str> = state.menu.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, ["Latte", "Flat white", "Tea", "Water"]);
    }

    #[test]
    fn find_drink_is_exact_and_case_sensitive() {
        let state = AppState::new();
        assert!(state.find_drink("Flat white").is_some());
        assert!(state.find_drink("flat white").is_none());
        assert!(state.find_drink("Flat").is_none());
        assert!(state.find_drink("").is_none());
    }

    #[test]
    fn catalogs_are_seeded() {
        let state = AppState::new();
        assert_eq!(state.tools.len(), 2);
        assert_eq!(state.resources.len(), 1);
    }
}
