//! Tool execution bodies
//!
//! Each function produces the JSON payload a tool embeds in its text
//! content item. Lookup misses are reported here as the tool's own soft
//! error payload, indistinguishable at the protocol layer from a hit.

use serde_json::{json, Value};

use super::models::DrinkDetailsInput;
use super::state::AppState;

/// `getDrinkNames`: every drink name, in menu order. Arguments are ignored.
pub fn drink_names(state: &AppState) -> Value {
    let names: Vec<&str> = state.menu.iter().map(|item| item.name.as_str()).collect();
    json!({ "names": names })
}

/// `getDrinkDetails`: the full record for an exactly-matching drink, or
/// the soft error payload when the name is absent or unknown.
pub fn drink_details(state: &AppState, arguments: &Value) -> Value {
    let input: DrinkDetailsInput =
        serde_json::from_value(arguments.clone()).unwrap_or_default();

    let drink = input
        .drink_name
        .as_deref()
        .and_then(|name| state.find_drink(name));

    match drink {
        Some(item) => json!(item),
        None => json!({ "error": "Drink not found" }),
    }
}
