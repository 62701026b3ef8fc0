//! Stdio server loop
//!
//! Reads newline-delimited JSON-RPC requests, dispatches each one, and
//! writes at most one response line per request. Processing is strictly
//! sequential: a request is fully handled before the next line is read,
//! so responses leave in arrival order.

mod error;
mod transport;

pub use error::TransportError;
pub use transport::StdioTransport;

use tokio::io::{AsyncRead, AsyncWrite};
use tracing::{debug, info, warn};

use crate::mcp::dispatch;
use crate::mcp::models::JsonRpcRequest;
use crate::menu::SharedState;

/// MCP server owning the transport and the shared read-only state.
pub struct McpServer<R, W> {
    transport: StdioTransport<R, W>,
    state: SharedState,
}

impl<R, W> McpServer<R, W>
where
    R: AsyncRead + Unpin,
    W: AsyncWrite + Unpin,
{
    /// Creates a server over the given transport.
    pub fn new(transport: StdioTransport<R, W>, state: SharedState) -> Self {
        Self { transport, state }
    }

    /// Runs the loop until the input stream closes.
    ///
    /// A malformed line is logged to the diagnostic channel and skipped;
    /// non-2.0 envelopes and unhandled methods are dropped without any
    /// output. Neither terminates the loop.
    pub async fn run(&mut self) -> Result<(), TransportError> {
        info!("coffee shop MCP server listening on stdio");

        loop {
            let line = match self.transport.read_line().await? {
                Some(line) if line.is_empty() => continue,
                Some(line) => line,
                None => {
                    info!("input stream closed, shutting down");
                    return Ok(());
                }
            };

            let request: JsonRpcRequest = match serde_json::from_str(&line) {
                Ok(request) => request,
                Err(e) => {
                    warn!(error = %e, "error parsing JSON line");
                    continue;
                }
            };

            if request.jsonrpc != "2.0" {
                debug!(version = %request.jsonrpc, "not a JSON-RPC 2.0 envelope, dropping");
                continue;
            }

            debug!(method = %request.method, id = ?request.id, "received request");

            if let Some(response) = dispatch(&self.state, &request).await {
                let json = serde_json::to_string(&response)
                    .map_err(|e| TransportError::Write(e.to_string()))?;
                self.transport.write_line(&json).await?;
            }
        }
    }
}
