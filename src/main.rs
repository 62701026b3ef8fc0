use std::sync::Arc;

use tracing::error;
use tracing_subscriber::EnvFilter;

use coffee_shop_rust::menu::AppState;
use coffee_shop_rust::server::{McpServer, StdioTransport};

#[tokio::main]
async fn main() {
    // stdout carries the protocol, so diagnostics go to stderr only
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    // All state is built once here and never mutated afterwards
    let state = Arc::new(AppState::new());

    let transport = StdioTransport::new(tokio::io::stdin(), tokio::io::stdout());
    let mut server = McpServer::new(transport, state);

    // The loop only ends when stdin closes; transport failures are the
    // one fatal path
    if let Err(e) = server.run().await {
        error!(error = %e, "server terminated");
    }
}
