//! MCP method handlers
//!
//! This module routes a parsed JSON-RPC request to the fixed method set
//! and builds each response payload. Messages the protocol answers with
//! silence (unhandled methods, notifications) yield `None`.

use serde_json::{json, Value};
use tracing::debug;

use super::helpers::{error_payload, rpc_success, text_content};
use super::models::{
    JsonRpcRequest, JsonRpcResponse, Method, ResourceReadParams, ToolCallParams,
    GET_DRINK_DETAILS_TOOL, GET_DRINK_NAMES_TOOL, INVALID_PARAMS, PROTOCOL_VERSION, SERVER_NAME,
    SERVER_VERSION,
};
use crate::menu::handlers as tools;
use crate::menu::state::AppState;

/// Dispatches one request and returns at most one response.
///
/// The caller has already checked the `jsonrpc` version field; anything
/// routed here is a 2.0 envelope.
pub async fn dispatch(state: &AppState, request: &JsonRpcRequest) -> Option<JsonRpcResponse> {
    let params = request.params.clone().unwrap_or(Value::Null);

    let result = match Method::from_name(&request.method) {
        Method::Initialize => handle_initialize(),
        Method::ToolsList => handle_tools_list(state),
        Method::ToolsCall => handle_tools_call(state, params),
        Method::ResourcesList => handle_resources_list(state),
        Method::ResourcesRead => handle_resources_read(state, params),
        Method::Ping => json!({}),
        Method::Initialized => {
            debug!("client initialization notification acknowledged");
            return None;
        }
        Method::Unhandled => {
            debug!(method = %request.method, "no handler for method, dropping");
            return None;
        }
    };

    Some(rpc_success(request.id.clone(), result))
}

/// Handles `initialize` (handshake). The advertisement is fixed.
fn handle_initialize() -> Value {
    json!({
        "protocolVersion": PROTOCOL_VERSION,
        "capabilities": {
            "tools": { "listChanged": true },
            "resources": { "listChanged": true },
        },
        "serverInfo": {
            "name": SERVER_NAME,
            "version": SERVER_VERSION,
        }
    })
}

/// Handles `tools/list`.
fn handle_tools_list(state: &AppState) -> Value {
    json!({ "tools": state.tools })
}

/// Handles `tools/call`: exact-name lookup, then tool execution.
///
/// An unknown tool name is a protocol-level failure (`-32602` nested in
/// `result`); a drink that does not exist is a domain-level soft error the
/// tool itself reports inside its content payload.
fn handle_tools_call(state: &AppState, params: Value) -> Value {
    let call: ToolCallParams = match serde_json::from_value(params) {
        Ok(p) => p,
        Err(e) => {
            return error_payload(INVALID_PARAMS, format!("MCP error -32602: Invalid params: {e}"))
        }
    };

    match call.name.as_str() {
        GET_DRINK_NAMES_TOOL => text_content(tools::drink_names(state).to_string()),
        GET_DRINK_DETAILS_TOOL => {
            text_content(tools::drink_details(state, &call.arguments).to_string())
        }
        name => error_payload(
            INVALID_PARAMS,
            format!("MCP error -32602: Tool {name} not found"),
        ),
    }
}

/// Handles `resources/list`.
fn handle_resources_list(state: &AppState) -> Value {
    json!({ "resources": state.resources })
}

/// Handles `resources/read`: exact-uri lookup against the catalog.
fn handle_resources_read(state: &AppState, params: Value) -> Value {
    let read: ResourceReadParams = match serde_json::from_value(params) {
        Ok(p) => p,
        Err(e) => {
            return error_payload(INVALID_PARAMS, format!("MCP error -32602: Invalid params: {e}"))
        }
    };

    // The catalog holds a single entry, the menu itself.
    if state.resources.iter().any(|r| r.uri == read.uri) {
        let text = serde_json::to_string(&state.menu).unwrap_or_else(|_| "[]".into());
        json!({
            "contents": [{
                "uri": read.uri,
                "text": text,
            }]
        })
    } else {
        error_payload(
            INVALID_PARAMS,
            format!("MCP error -32602: Resource {} not found", read.uri),
        )
    }
}
