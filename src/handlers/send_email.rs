//! The `send-email` tool: one provider submission per call.

use crate::protocol::{SendEmailParams, ToolResult};
use crate::sendpost::{EmailAddress, EmailMessage, EmailSender};

/// IP pool used when the caller does not pick one.
const DEFAULT_IP_POOL: &str = "default";

/// Placeholder reported when the provider issues no message id.
const MISSING_MESSAGE_ID: &str = "N/A";

/// Handle a `send-email` tool call.
///
/// Input shape was already checked by the schema layer, so this only
/// builds the provider message and makes exactly one submission
/// attempt. Success and failure both map to a single text block; no
/// error escapes the handler.
pub async fn handle(params: SendEmailParams, mailer: &dyn EmailSender) -> ToolResult {
    let recipients = params.to.join(", ");

    let message = EmailMessage {
        from: EmailAddress::new(params.from),
        to: params.to.into_iter().map(EmailAddress::new).collect(),
        subject: params.subject,
        html_body: params.html_body,
        ippool: Some(params.ippool.unwrap_or_else(|| DEFAULT_IP_POOL.to_string())),
    };

    tracing::info!(
        "Sending email to '{}' with subject '{}'",
        recipients,
        message.subject
    );

    match mailer.send(&message).await {
        Ok(receipts) => {
            // An empty receipt list is a provider quirk, not a failure.
            let message_id = receipts
                .first()
                .and_then(|r| r.message_id.as_deref())
                .unwrap_or(MISSING_MESSAGE_ID);

            tracing::info!("Email to {} accepted (message id: {})", recipients, message_id);

            ToolResult::text(format!(
                "Email sent successfully to {recipients} with Message ID: {message_id}"
            ))
        }
        Err(e) => {
            tracing::error!("Failed to send email: {e}");
            ToolResult::error(format!("Failed to send email: {e}"))
        }
    }
}
