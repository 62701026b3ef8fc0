//! MCP Protocol Models and Constants
//!
//! This module contains the JSON-RPC envelope types, the MCP descriptor
//! types, and the static tool/resource catalogs advertised by the server.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

// =============================================================================
// MCP Constants
// =============================================================================

/// Name of the tool listing every drink on the menu
pub const GET_DRINK_NAMES_TOOL: &str = "getDrinkNames";
/// Name of the tool looking up a single drink
pub const GET_DRINK_DETAILS_TOOL: &str = "getDrinkDetails";
/// URI of the menu resource
pub const MENU_RESOURCE_URI: &str = "menu://app";
/// Display name of the menu resource
pub const MENU_RESOURCE_NAME: &str = "Menu";
/// Server identifier
pub const SERVER_NAME: &str = "coffee-shop-rust";
/// Server version advertised during the handshake
pub const SERVER_VERSION: &str = "1.0.0";
/// Protocol version for MCP
pub const PROTOCOL_VERSION: &str = "2025-03-26";
/// JSON-RPC code for invalid params, used for unknown tool/resource lookups
pub const INVALID_PARAMS: i32 = -32602;

// =============================================================================
// JSON-RPC Envelopes
// =============================================================================

/// Request identifier, echoed back verbatim in the response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RequestId {
    /// Numeric ID.
    Number(i64),
    /// String ID.
    String(String),
}

/// Standard JSON-RPC 2.0 Request envelope
#[derive(Debug, Clone, Deserialize)]
pub struct JsonRpcRequest {
    /// Protocol version; the dispatcher only considers messages where
    /// this equals "2.0"
    #[serde(default)]
    pub jsonrpc: String,

    /// Method name to invoke
    pub method: String,

    /// Parameters for the method
    #[serde(default)]
    pub params: Option<Value>,

    /// Request identifier; omitted from the response when absent
    #[serde(default)]
    pub id: Option<RequestId>,
}

/// JSON-RPC 2.0 response envelope.
///
/// Every response carries a `result`; lookup failures are delivered as an
/// `error` object nested inside `result`, never as a top-level member.
#[derive(Debug, Clone, Serialize)]
pub struct JsonRpcResponse {
    /// Protocol version, always "2.0"
    pub jsonrpc: String,

    /// Echoed request identifier
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<RequestId>,

    /// Result payload
    pub result: Value,
}

// =============================================================================
// Method Routing
// =============================================================================

/// The fixed method set, plus an explicit variant for everything else.
///
/// A message routed to `Unhandled` produces no response line at all; the
/// variant exists so that silence is a deliberate branch of the dispatcher
/// rather than a missing arm.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Initialize,
    ToolsList,
    ToolsCall,
    ResourcesList,
    ResourcesRead,
    Ping,
    /// `notifications/initialized` — acknowledged without a response
    Initialized,
    /// Anything else — dropped silently
    Unhandled,
}

impl Method {
    /// Maps a raw method name onto the routing table.
    pub fn from_name(name: &str) -> Self {
        match name {
            "initialize" => Self::Initialize,
            "tools/list" => Self::ToolsList,
            "tools/call" => Self::ToolsCall,
            "resources/list" => Self::ResourcesList,
            "resources/read" => Self::ResourcesRead,
            "ping" => Self::Ping,
            "notifications/initialized" => Self::Initialized,
            _ => Self::Unhandled,
        }
    }
}

// =============================================================================
// Method Params
// =============================================================================

/// Params for `tools/call`
#[derive(Debug, Deserialize)]
pub struct ToolCallParams {
    /// Name of the tool to invoke
    pub name: String,

    /// Arguments passed through to the tool
    #[serde(default)]
    pub arguments: Value,
}

/// Params for `resources/read`
#[derive(Debug, Deserialize)]
pub struct ResourceReadParams {
    /// URI of the resource to read
    pub uri: String,
}

// =============================================================================
// Descriptors and Catalogs
// =============================================================================

/// A tool descriptor as advertised via `tools/list`.
///
/// The `inputSchema` is advertisement only; calls are never validated
/// against it.
#[derive(Debug, Clone, Serialize)]
pub struct ToolDefinition {
    /// Tool name
    pub name: String,
    /// Tool description
    pub description: String,
    /// JSON Schema describing accepted parameters
    #[serde(rename = "inputSchema")]
    pub input_schema: Value,
}

/// A resource descriptor as advertised via `resources/list`.
#[derive(Debug, Clone, Serialize)]
pub struct ResourceDefinition {
    /// Resource URI
    pub uri: String,
    /// Resource name
    pub name: String,
}

/// Builds the fixed tool catalog.
pub fn tool_catalog() -> Vec<ToolDefinition> {
    vec![
        ToolDefinition {
            name: GET_DRINK_NAMES_TOOL.into(),
            description: "Get the names of all available drinks in the shop".into(),
            input_schema: json!({ "type": "object", "properties": {} }),
        },
        ToolDefinition {
            name: GET_DRINK_DETAILS_TOOL.into(),
            description: "Get the details of a specific drink in the shop".into(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "drinkName": {
                        "type": "string",
                        "description": "The name of the drink to get details for"
                    }
                }
            }),
        },
    ]
}

/// Builds the fixed resource catalog.
pub fn resource_catalog() -> Vec<ResourceDefinition> {
    vec![ResourceDefinition {
        uri: MENU_RESOURCE_URI.into(),
        name: MENU_RESOURCE_NAME.into(),
    }]
}
