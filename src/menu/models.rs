//! Menu domain models

use serde::{Deserialize, Serialize};

/// A single drink on the menu
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MenuItem {
    /// Name of the drink, matched exactly on lookup
    pub name: String,

    /// Price in the shop's currency
    pub price: f64,

    /// Human-readable description
    pub description: String,
}

/// Input for the getDrinkDetails tool
///
/// The name is optional: a call without it simply finds no drink, which is
/// reported as the tool's soft error rather than a protocol failure.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DrinkDetailsInput {
    /// Name of the drink to look up
    pub drink_name: Option<String>,
}
