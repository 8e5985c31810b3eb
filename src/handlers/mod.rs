pub mod compose_email;
pub mod send_email;
pub mod templates;

use serde::de::DeserializeOwned;

use crate::protocol::{
    ComposeEmailParams, GetPromptParams, InitializeParams, JsonRpcError, JsonRpcRequest,
    JsonRpcResponse, PromptArgument, PromptDescriptor, ReadResourceParams, ResourceDescriptor,
    SendEmailParams, ToolCallParams, ToolResult,
};
use crate::schema;
use crate::sendpost::EmailSender;

/// MCP protocol revision this server speaks.
const PROTOCOL_VERSION: &str = "2024-11-05";

/// Route one request to its handler; `None` for notifications.
pub async fn dispatch(req: &JsonRpcRequest, mailer: &dyn EmailSender) -> Option<JsonRpcResponse> {
    // A request without an id is a notification; JSON-RPC forbids
    // answering those, recognized method or not.
    if req.id.is_none() {
        if req.method != "notifications/initialized" {
            tracing::debug!("ignoring notification {}", req.method);
        }
        return None;
    }

    match req.method.as_str() {
        "initialize" => Some(initialize(req)),
        "ping" => Some(JsonRpcResponse::success(
            req.id.clone(),
            serde_json::json!({}),
        )),
        "tools/list" => Some(list_tools(req)),
        "tools/call" => Some(call_tool(req, mailer).await),
        "resources/list" => Some(list_resources(req)),
        "resources/read" => Some(read_resource(req)),
        "prompts/list" => Some(list_prompts(req)),
        "prompts/get" => Some(get_prompt(req)),
        _ => Some(JsonRpcResponse::error(
            req.id.clone(),
            JsonRpcError::method_not_found(&req.method),
        )),
    }
}

/// Pull and deserialize a request's params, naming the method in the
/// failure message.
fn parse_params<T: DeserializeOwned>(
    req: &JsonRpcRequest,
    method: &str,
) -> Result<T, JsonRpcError> {
    let value = req
        .params
        .clone()
        .ok_or_else(|| JsonRpcError::invalid_params(format!("Missing params for {method}")))?;
    serde_json::from_value(value)
        .map_err(|e| JsonRpcError::invalid_params(format!("Invalid {method} params: {e}")))
}

fn initialize(req: &JsonRpcRequest) -> JsonRpcResponse {
    if let Some(params) = &req.params {
        if let Ok(parsed) = serde_json::from_value::<InitializeParams>(params.clone()) {
            if let Some(client) = parsed.client_info {
                tracing::debug!(
                    "initialize from client '{}' v{}",
                    client.name.as_deref().unwrap_or("unknown"),
                    client.version.as_deref().unwrap_or("unknown"),
                );
            }
        }
    }

    JsonRpcResponse::success(
        req.id.clone(),
        serde_json::json!({
            "protocolVersion": PROTOCOL_VERSION,
            "capabilities": {
                "tools": {},
                "resources": {},
                "prompts": {}
            },
            "serverInfo": {
                "name": "sendpost-mcp-server",
                "version": env!("CARGO_PKG_VERSION")
            }
        }),
    )
}

fn list_tools(req: &JsonRpcRequest) -> JsonRpcResponse {
    JsonRpcResponse::success(
        req.id.clone(),
        serde_json::json!({
            "tools": [
                {
                    "name": "send-email",
                    "description": "Send an HTML email to one or more recipients via SendPost",
                    "inputSchema": schema::send_email_input_schema()
                }
            ]
        }),
    )
}

async fn call_tool(req: &JsonRpcRequest, mailer: &dyn EmailSender) -> JsonRpcResponse {
    let params: ToolCallParams = match parse_params(req, "tools/call") {
        Ok(p) => p,
        Err(e) => return JsonRpcResponse::error(req.id.clone(), e),
    };

    let tool_result = match params.name.as_str() {
        "send-email" => send_email_tool(&params, mailer).await,
        _ => ToolResult::error(format!("Unknown tool: {}", params.name)),
    };

    let result_json =
        serde_json::to_value(&tool_result).expect("ToolResult must serialize to JSON Value");
    JsonRpcResponse::success(req.id.clone(), result_json)
}

/// Gate raw tool arguments, then hand off to the handler.
///
/// Argument problems come back as error-flagged tool results, not
/// protocol errors; the schema check runs before any network call, so
/// the handler only ever sees valid input.
async fn send_email_tool(params: &ToolCallParams, mailer: &dyn EmailSender) -> ToolResult {
    let args = match &params.arguments {
        Some(v) => v.clone(),
        None => return ToolResult::error("Missing arguments for send-email"),
    };

    if let Err(e) = schema::validate_send_email(&args) {
        return ToolResult::error(format!("Invalid arguments for send-email: {e}"));
    }

    let send_params: SendEmailParams = match serde_json::from_value(args) {
        Ok(p) => p,
        Err(e) => return ToolResult::error(format!("Invalid arguments for send-email: {e}")),
    };

    send_email::handle(send_params, mailer).await
}

fn list_resources(req: &JsonRpcRequest) -> JsonRpcResponse {
    let descriptor = ResourceDescriptor {
        uri: templates::TEMPLATES_URI.to_string(),
        name: "email-templates".to_string(),
        description: Some("Static catalogue of reusable email templates".to_string()),
        mime_type: Some("application/json".to_string()),
    };

    JsonRpcResponse::success(
        req.id.clone(),
        serde_json::json!({ "resources": [descriptor] }),
    )
}

fn read_resource(req: &JsonRpcRequest) -> JsonRpcResponse {
    let params: ReadResourceParams = match parse_params(req, "resources/read") {
        Ok(p) => p,
        Err(e) => return JsonRpcResponse::error(req.id.clone(), e),
    };

    if params.uri != templates::TEMPLATES_URI {
        return JsonRpcResponse::error(
            req.id.clone(),
            JsonRpcError::resource_not_found(&params.uri),
        );
    }

    let contents = templates::handle(&params.uri);
    JsonRpcResponse::success(
        req.id.clone(),
        serde_json::json!({ "contents": [contents] }),
    )
}

fn list_prompts(req: &JsonRpcRequest) -> JsonRpcResponse {
    let descriptor = PromptDescriptor {
        name: "compose-email".to_string(),
        description: Some("Draft an HTML email for a recipient, purpose, and tone".to_string()),
        arguments: vec![
            PromptArgument {
                name: "recipient".to_string(),
                description: Some("Who the email is addressed to".to_string()),
                required: true,
            },
            PromptArgument {
                name: "purpose".to_string(),
                description: Some("What the email should achieve".to_string()),
                required: true,
            },
            PromptArgument {
                name: "tone".to_string(),
                description: Some(
                    "One of \"formal\", \"casual\", \"friendly\". When omitted the \
                     rendered tone is \"professional\", which is not part of the \
                     accepted set."
                        .to_string(),
                ),
                required: false,
            },
            PromptArgument {
                name: "key_points".to_string(),
                description: Some("Points the email must cover, in order".to_string()),
                required: false,
            },
        ],
    };

    JsonRpcResponse::success(
        req.id.clone(),
        serde_json::json!({ "prompts": [descriptor] }),
    )
}

fn get_prompt(req: &JsonRpcRequest) -> JsonRpcResponse {
    let params: GetPromptParams = match parse_params(req, "prompts/get") {
        Ok(p) => p,
        Err(e) => return JsonRpcResponse::error(req.id.clone(), e),
    };

    if params.name != "compose-email" {
        return JsonRpcResponse::error(
            req.id.clone(),
            JsonRpcError::invalid_params(format!("Unknown prompt: {}", params.name)),
        );
    }

    let args = params.arguments.unwrap_or(serde_json::Value::Null);
    let compose_params: ComposeEmailParams = match serde_json::from_value(args) {
        Ok(p) => p,
        Err(e) => {
            return JsonRpcResponse::error(
                req.id.clone(),
                JsonRpcError::invalid_params(format!("Invalid arguments for compose-email: {e}")),
            );
        }
    };

    let rendered = compose_email::handle(compose_params);
    let result =
        serde_json::to_value(&rendered).expect("GetPromptResult must serialize to JSON Value");
    JsonRpcResponse::success(req.id.clone(), result)
}
