use serde::{Deserialize, Serialize};

/// Request id; the wire allows both numbers and strings, and whichever
/// arrived is echoed back unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RpcId {
    Number(i64),
    Str(String),
}

/// Incoming request envelope. `params` stays raw JSON until the method
/// is known.
#[derive(Debug, Clone, Deserialize)]
pub struct JsonRpcRequest {
    pub jsonrpc: String,
    pub id: Option<RpcId>,
    pub method: String,
    pub params: Option<serde_json::Value>,
}

/// `initialize` params. Everything is optional: clients that send
/// nothing useful still complete the handshake.
#[derive(Debug, Clone, Deserialize)]
pub struct InitializeParams {
    #[serde(rename = "protocolVersion")]
    pub protocol_version: Option<String>,
    #[serde(rename = "clientInfo")]
    pub client_info: Option<ClientInfo>,
}

/// Identity the client announces during `initialize`; logged, nothing
/// more.
#[derive(Debug, Clone, Deserialize)]
pub struct ClientInfo {
    pub name: Option<String>,
    pub version: Option<String>,
}

/// `tools/call` params: the tool name plus its raw arguments.
#[derive(Debug, Clone, Deserialize)]
pub struct ToolCallParams {
    pub name: String,
    pub arguments: Option<serde_json::Value>,
}

/// Arguments for the `send-email` tool.
///
/// Shape checks (required fields, address syntax, non-empty recipient
/// list) happen against the declared JSON Schema before this struct is
/// deserialized, so a value of this type is always well-formed.
#[derive(Debug, Clone, Deserialize)]
pub struct SendEmailParams {
    pub from: String,
    pub to: Vec<String>,
    pub subject: String,
    #[serde(rename = "htmlBody")]
    pub html_body: String,
    pub ippool: Option<String>,
}

/// Parameters for `resources/read`.
#[derive(Debug, Clone, Deserialize)]
pub struct ReadResourceParams {
    pub uri: String,
}

/// Parameters for `prompts/get`.
#[derive(Debug, Clone, Deserialize)]
pub struct GetPromptParams {
    pub name: String,
    pub arguments: Option<serde_json::Value>,
}

/// Arguments for the `compose-email` prompt.
#[derive(Debug, Clone, Deserialize)]
pub struct ComposeEmailParams {
    pub recipient: String,
    pub purpose: String,
    pub tone: Option<Tone>,
    pub key_points: Option<Vec<String>>,
}

/// Accepted values for the `tone` argument.
///
/// When `tone` is absent the rendered text falls back to
/// [`DEFAULT_TONE`](crate::handlers::compose_email::DEFAULT_TONE),
/// which is not itself an accepted value here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Formal,
    Casual,
    Friendly,
}

impl Tone {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Formal => "formal",
            Self::Casual => "casual",
            Self::Friendly => "friendly",
        }
    }
}
