//! Minimal client for the SendPost transactional email API.
//!
//! Delivery, retries, and authentication semantics all live on the
//! provider side; this module only shapes the wire payload and reports
//! the outcome. The [`EmailSender`] trait is the seam that lets tests
//! substitute a deterministic fake for the real client.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::config::ServerConfig;

/// Header carrying the subaccount API key.
const API_KEY_HEADER: &str = "X-SubAccount-ApiKey";

/// A single mailbox in a provider message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailAddress {
    pub email: String,
}

impl EmailAddress {
    pub fn new(email: impl Into<String>) -> Self {
        Self { email: email.into() }
    }
}

/// Outbound message payload for the send endpoint.
///
/// Field names follow the provider's wire format (`htmlBody` is
/// camelCase on the wire).
#[derive(Debug, Clone, Serialize)]
pub struct EmailMessage {
    pub from: EmailAddress,
    pub to: Vec<EmailAddress>,
    pub subject: String,
    #[serde(rename = "htmlBody")]
    pub html_body: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ippool: Option<String>,
}

/// Per-recipient submission receipt returned by the provider.
///
/// `message_id` may be absent; callers must treat a missing id as a
/// placeholder case, not a failure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SendReceipt {
    #[serde(rename = "messageId")]
    pub message_id: Option<String>,
    pub to: Option<String>,
    #[serde(rename = "submittedAt")]
    pub submitted_at: Option<i64>,
}

/// Failure while submitting a message to the provider.
///
/// Richer than the string that crosses the tool boundary: callers format
/// via `Display`, which for [`SendError::Provider`] is the provider's
/// own reason so boundary messages read naturally.
#[derive(Debug, thiserror::Error)]
pub enum SendError {
    /// HTTP-level failure before a provider verdict (connection, TLS,
    /// response body handling).
    #[error("{0}")]
    Transport(#[from] reqwest::Error),

    /// Non-success status from the provider (authentication failure,
    /// message rejection).
    #[error("{message}")]
    Provider { status: u16, message: String },
}

/// Email delivery capability.
///
/// Implemented by [`SendPostClient`] for production and by fakes in
/// tests. One call means one submission attempt: no retry and no
/// timeout beyond what the underlying transport enforces.
#[async_trait]
pub trait EmailSender: Send + Sync {
    /// Submit one message; returns the provider's per-recipient receipts.
    async fn send(&self, message: &EmailMessage) -> Result<Vec<SendReceipt>, SendError>;
}

/// HTTP client for the SendPost send endpoint.
pub struct SendPostClient {
    http: reqwest::Client,
    api_base: String,
    api_key: String,
}

impl SendPostClient {
    pub fn new(config: &ServerConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_base: config.api_base.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
        }
    }

    fn endpoint(&self) -> String {
        format!("{}/subaccount/email/", self.api_base)
    }
}

#[async_trait]
impl EmailSender for SendPostClient {
    async fn send(&self, message: &EmailMessage) -> Result<Vec<SendReceipt>, SendError> {
        let url = self.endpoint();
        tracing::debug!(url = %url, "submitting message to provider");

        let response = self
            .http
            .post(&url)
            .header(API_KEY_HEADER, self.api_key.as_str())
            .json(message)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SendError::Provider {
                status: status.as_u16(),
                message: provider_reason(status.as_u16(), &body),
            });
        }

        Ok(response.json().await?)
    }
}

/// Extract a human-readable failure reason from an error response body.
///
/// Provider error bodies carry a `message` field; fall back to the raw
/// body, then to the bare status code.
fn provider_reason(status: u16, body: &str) -> String {
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(body) {
        if let Some(message) = value.get("message").and_then(|m| m.as_str()) {
            return message.to_string();
        }
    }

    let trimmed = body.trim();
    if trimmed.is_empty() {
        format!("provider returned HTTP {status}")
    } else {
        trimmed.to_string()
    }
}
