use std::sync::OnceLock;

use jsonschema::Validator;
use serde_json::{json, Value};

#[derive(Debug, Clone, thiserror::Error)]
pub enum SchemaValidationError {
    #[error("Schema compile error: {0}")]
    SchemaCompile(String),
    #[error("{0}")]
    ValidationFailed(String),
}

/// JSON Schema for the `send-email` tool input.
///
/// The same object is served by `tools/list` and enforced against
/// incoming `tools/call` arguments, so the advertised shape and the
/// accepted shape cannot drift apart.
pub fn send_email_input_schema() -> &'static Value {
    static SCHEMA: OnceLock<Value> = OnceLock::new();
    SCHEMA.get_or_init(|| {
        json!({
            "type": "object",
            "required": ["from", "to", "subject", "htmlBody"],
            "properties": {
                "from": {
                    "type": "string",
                    "format": "email",
                    "description": "Sender address"
                },
                "to": {
                    "type": "array",
                    "items": { "type": "string", "format": "email" },
                    "minItems": 1,
                    "description": "Recipient addresses, in send order"
                },
                "subject": {
                    "type": "string",
                    "description": "Subject line"
                },
                "htmlBody": {
                    "type": "string",
                    "description": "HTML body of the message"
                },
                "ippool": {
                    "type": "string",
                    "default": "default",
                    "description": "Provider IP pool to send through"
                }
            }
        })
    })
}

/// Validate raw `send-email` arguments against the declared schema.
///
/// Runs before deserialization into typed params. Format assertion is
/// enabled so `format: "email"` rejects malformed addresses rather than
/// merely annotating them. Reports the first violation as a
/// human-readable string.
pub fn validate_send_email(args: &Value) -> Result<(), SchemaValidationError> {
    static VALIDATOR: OnceLock<Result<Validator, SchemaValidationError>> = OnceLock::new();

    let compiled = VALIDATOR.get_or_init(|| {
        jsonschema::options()
            .should_validate_formats(true)
            .build(send_email_input_schema())
            .map_err(|e| SchemaValidationError::SchemaCompile(e.to_string()))
    });

    let validator = match compiled {
        Ok(v) => v,
        Err(e) => return Err(e.clone()),
    };

    validator
        .validate(args)
        .map_err(|e| SchemaValidationError::ValidationFailed(e.to_string()))
}
