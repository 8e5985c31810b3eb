//! Static email template catalogue backing the `email-templates` resource.

use serde::Serialize;

use crate::protocol::ResourceContents;

/// Fixed URI the template catalogue is addressed at.
pub const TEMPLATES_URI: &str = "email-templates://list";

/// A named template: subject line plus HTML body.
#[derive(Debug, Clone, Serialize)]
pub struct TemplateDescriptor {
    pub name: &'static str,
    pub subject: &'static str,
    pub body: &'static str,
}

/// The full catalogue, in the fixed order it is always returned.
pub const TEMPLATES: [TemplateDescriptor; 2] = [
    TemplateDescriptor {
        name: "welcome",
        subject: "Welcome to our service!",
        body: "<h1>Welcome!</h1><p>We're glad to have you on board.</p>",
    },
    TemplateDescriptor {
        name: "password-reset",
        subject: "Password Reset Request",
        body: "<h1>Reset Your Password</h1><p>Click the link below to reset your password.</p><p>{reset_link}</p>",
    },
];

/// Handle a `resources/read` of the template catalogue.
///
/// Stateless: ignores everything about the request except its URI,
/// which addresses the response back to the caller. The whole list is
/// returned on every call, pretty-printed; there is no per-template
/// addressing.
pub fn handle(uri: &str) -> ResourceContents {
    let text = serde_json::to_string_pretty(&TEMPLATES)
        .expect("template catalogue must serialize to JSON");

    ResourceContents {
        uri: uri.to_string(),
        mime_type: Some("application/json".to_string()),
        text,
    }
}
