//! MCP Protocol Helpers
//!
//! Small constructors for JSON-RPC envelopes and the payload shapes the
//! protocol nests inside `result`.

use serde_json::{json, Value};

use super::models::{JsonRpcResponse, RequestId};

/// Builds a JSON-RPC 2.0 response envelope.
///
/// # Arguments
///
/// * `id` – The request identifier to echo back, omitted when absent.
/// * `result` – The payload representing the outcome.
pub fn rpc_success(id: Option<RequestId>, result: Value) -> JsonRpcResponse {
    JsonRpcResponse {
        jsonrpc: "2.0".into(),
        id,
        result,
    }
}

/// Builds the error object delivered inside a `result` field.
///
/// The envelope never carries a top-level `error` member; lookup failures
/// travel as `{"error": {"code", "message"}}` in an otherwise ordinary
/// response.
pub fn error_payload(code: i32, message: impl Into<String>) -> Value {
    json!({
        "error": {
            "code": code,
            "message": message.into(),
        }
    })
}

/// Wraps a JSON-encoded tool payload as a single text content item.
pub fn text_content(text: String) -> Value {
    json!({
        "content": [{
            "type": "text",
            "text": text,
        }]
    })
}
