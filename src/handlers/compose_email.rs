//! Rendering for the `compose-email` prompt.

use crate::protocol::{ComposeEmailParams, GetPromptResult, PromptMessage, Tone};

/// Tone used when the caller omits `tone`.
///
/// Not a member of [`Tone`]: an explicit request must pick one of the
/// accepted values, while an absent tone falls back to this string.
/// The prompt descriptor documents the mismatch.
pub const DEFAULT_TONE: &str = "professional";

/// Render the instruction message asking a model to draft an HTML email.
///
/// Pure template expansion: no I/O and no model call happens here. When
/// `key_points` is empty the key-points clause is omitted entirely
/// rather than rendered as an empty list.
pub fn handle(params: ComposeEmailParams) -> GetPromptResult {
    let tone = params.tone.map(Tone::as_str).unwrap_or(DEFAULT_TONE);
    let key_points = params.key_points.unwrap_or_default();

    let mut lines = vec![
        format!(
            "Please compose an email to {} for the purpose of {}.",
            params.recipient, params.purpose
        ),
        format!("The tone should be {tone}."),
    ];

    if !key_points.is_empty() {
        lines.push(format!(
            "Include these key points: {}",
            key_points.join(", ")
        ));
    }

    lines.push(String::new());
    lines.push("Format the response as HTML that can be directly used in an email.".to_string());

    GetPromptResult {
        messages: vec![PromptMessage::user(lines.join("\n"))],
    }
}
