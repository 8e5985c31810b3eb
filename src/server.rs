use std::sync::Arc;

use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};

use crate::handlers;
use crate::protocol::{JsonRpcError, JsonRpcRequest, JsonRpcResponse};
use crate::sendpost::EmailSender;

/// Hard cap on a single message line (1 MiB).
const MAX_MESSAGE_BYTES: usize = 1024 * 1024;

/// MCP server speaking newline-delimited JSON-RPC 2.0 over stdio.
///
/// Holds the one process-wide piece of shared state: the email client,
/// read-only behind [`EmailSender`] so tests can run the same dispatch
/// path against a fake provider.
pub struct McpServer {
    mailer: Arc<dyn EmailSender>,
    initialized: bool,
}

impl McpServer {
    pub fn new(mailer: Arc<dyn EmailSender>) -> Self {
        Self {
            mailer,
            initialized: false,
        }
    }

    /// Serve stdin until EOF, writing one response line per request line.
    ///
    /// Only transport failures (stdio itself) escape; anything wrong
    /// with a message becomes a JSON-RPC error response instead.
    pub async fn run(&mut self) -> Result<(), Box<dyn std::error::Error>> {
        let stdin = tokio::io::stdin();
        let mut stdout = tokio::io::stdout();
        let mut reader = BufReader::new(stdin);
        let mut line = Vec::new();

        loop {
            line.clear();
            if reader.read_until(b'\n', &mut line).await? == 0 {
                break;
            }

            if let Some(resp) = self.process_line(&line).await {
                let out = serde_json::to_string(&resp)?;
                stdout.write_all(out.as_bytes()).await?;
                stdout.write_all(b"\n").await?;
                stdout.flush().await?;
            }
        }

        Ok(())
    }

    /// Handle one raw input line; `None` means nothing is written back.
    ///
    /// Framing checks run in order: size cap, UTF-8, JSON shape,
    /// `jsonrpc` version, then the initialization gate. Notifications
    /// that fail the gate are dropped without a response.
    pub async fn process_line(&mut self, raw: &[u8]) -> Option<JsonRpcResponse> {
        if raw.len() > MAX_MESSAGE_BYTES {
            tracing::warn!(
                "message too large: {} bytes (limit {MAX_MESSAGE_BYTES})",
                raw.len()
            );
            return Some(JsonRpcResponse::error(None, JsonRpcError::parse_error()));
        }

        let trimmed = match std::str::from_utf8(raw) {
            Ok(s) => s.trim(),
            Err(_) => {
                return Some(JsonRpcResponse::error(None, JsonRpcError::parse_error()));
            }
        };
        if trimmed.is_empty() {
            return None;
        }

        let req: JsonRpcRequest = match serde_json::from_str(trimmed) {
            Ok(r) => r,
            Err(e) => {
                tracing::warn!("parse error: {e}");
                return Some(JsonRpcResponse::error(None, JsonRpcError::parse_error()));
            }
        };

        if req.jsonrpc != "2.0" {
            return Some(JsonRpcResponse::error(
                req.id.clone(),
                JsonRpcError::invalid_request(),
            ));
        }

        if !self.initialized && req.method != "initialize" {
            if req.id.is_none() {
                return None;
            }
            return Some(JsonRpcResponse::error(
                req.id.clone(),
                JsonRpcError::invalid_request_with("Server not initialized"),
            ));
        }

        tracing::debug!("dispatching {}", req.method);
        let resp = handlers::dispatch(&req, self.mailer.as_ref()).await;

        if req.method == "initialize" {
            self.initialized = true;
        }

        resp
    }
}
