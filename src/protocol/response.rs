use serde::Serialize;

use super::request::RpcId;

// ---------------------------------------------------------------------------
// JSON-RPC 2.0 response layer
// ---------------------------------------------------------------------------

/// Response envelope; exactly one of `result` / `error` is set.
#[derive(Debug, Clone, Serialize)]
pub struct JsonRpcResponse {
    pub jsonrpc: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<RpcId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<JsonRpcError>,
}

impl JsonRpcResponse {
    pub fn success(id: Option<RpcId>, result: serde_json::Value) -> Self {
        Self {
            jsonrpc: "2.0".into(),
            id,
            result: Some(result),
            error: None,
        }
    }

    pub fn error(id: Option<RpcId>, error: JsonRpcError) -> Self {
        Self {
            jsonrpc: "2.0".into(),
            id,
            result: None,
            error: Some(error),
        }
    }
}

/// Error member of a response. Protocol-level failures only; a tool
/// that ran and failed is reported through [`ToolResult`] instead.
#[derive(Debug, Clone, Serialize)]
pub struct JsonRpcError {
    pub code: i32,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
}

impl JsonRpcError {
    fn coded(code: i32, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            data: None,
        }
    }

    pub fn parse_error() -> Self {
        Self::coded(-32700, "Parse error")
    }

    pub fn invalid_request() -> Self {
        Self::coded(-32600, "Invalid Request")
    }

    /// -32600 with a situation-specific message.
    pub fn invalid_request_with(detail: impl Into<String>) -> Self {
        Self::coded(-32600, detail)
    }

    pub fn method_not_found(method: &str) -> Self {
        Self::coded(-32601, format!("Method not found: {method}"))
    }

    pub fn invalid_params(detail: impl Into<String>) -> Self {
        Self::coded(-32602, detail)
    }

    /// MCP's dedicated code for a `resources/read` miss.
    pub fn resource_not_found(uri: &str) -> Self {
        Self::coded(-32002, format!("Resource not found: {uri}"))
    }
}

// ---------------------------------------------------------------------------
// MCP tool result layer (carried inside a *successful* JSON-RPC response)
// ---------------------------------------------------------------------------

/// Outcome of a tool call: content blocks plus the MCP error flag.
///
/// `is_error` marks a tool that ran and failed; it is left off the wire
/// entirely when false.
#[derive(Debug, Clone, Serialize)]
pub struct ToolResult {
    pub content: Vec<ToolResultContent>,
    #[serde(rename = "isError", skip_serializing_if = "std::ops::Not::not")]
    pub is_error: bool,
}

/// One block of tool output; this server only ever emits text blocks.
#[derive(Debug, Clone, Serialize)]
pub struct ToolResultContent {
    #[serde(rename = "type")]
    pub content_type: String,
    pub text: String,
}

impl ToolResult {
    fn block(text: impl Into<String>, is_error: bool) -> Self {
        Self {
            content: vec![ToolResultContent {
                content_type: "text".into(),
                text: text.into(),
            }],
            is_error,
        }
    }

    pub fn text(text: impl Into<String>) -> Self {
        Self::block(text, false)
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self::block(text, true)
    }
}

// ---------------------------------------------------------------------------
// MCP resource layer
// ---------------------------------------------------------------------------

/// Entry in the `resources/list` answer.
#[derive(Debug, Clone, Serialize)]
pub struct ResourceDescriptor {
    pub uri: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "mimeType", skip_serializing_if = "Option::is_none")]
    pub mime_type: Option<String>,
}

/// One contents entry in a `resources/read` answer, addressed back by
/// the URI the caller asked for.
#[derive(Debug, Clone, Serialize)]
pub struct ResourceContents {
    pub uri: String,
    #[serde(rename = "mimeType", skip_serializing_if = "Option::is_none")]
    pub mime_type: Option<String>,
    pub text: String,
}

// ---------------------------------------------------------------------------
// MCP prompt layer
// ---------------------------------------------------------------------------

/// Entry in the `prompts/list` answer.
#[derive(Debug, Clone, Serialize)]
pub struct PromptDescriptor {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub arguments: Vec<PromptArgument>,
}

/// Declared argument of a [`PromptDescriptor`].
#[derive(Debug, Clone, Serialize)]
pub struct PromptArgument {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub required: bool,
}

/// Answer payload for `prompts/get`.
#[derive(Debug, Clone, Serialize)]
pub struct GetPromptResult {
    pub messages: Vec<PromptMessage>,
}

/// A rendered prompt message.
#[derive(Debug, Clone, Serialize)]
pub struct PromptMessage {
    pub role: String,
    pub content: PromptContent,
}

/// Text content of a [`PromptMessage`].
#[derive(Debug, Clone, Serialize)]
pub struct PromptContent {
    #[serde(rename = "type")]
    pub content_type: String,
    pub text: String,
}

impl PromptMessage {
    /// A user-role message with literal text content.
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: "user".into(),
            content: PromptContent {
                content_type: "text".into(),
                text: text.into(),
            },
        }
    }
}
