use std::sync::Arc;

use sendpost_mcp_server::config::ServerConfig;
use sendpost_mcp_server::sendpost::SendPostClient;
use sendpost_mcp_server::server::McpServer;
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    dotenvy::dotenv().ok();

    // stdout carries the protocol; every diagnostic goes to stderr.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = ServerConfig::from_env();
    let mailer = Arc::new(SendPostClient::new(&config));

    let mut server = McpServer::new(mailer);
    if let Err(e) = server.run().await {
        tracing::error!("sendpost-mcp-server: fatal error: {e}");
        std::process::exit(1);
    }
}
