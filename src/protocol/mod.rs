pub mod request;
pub mod response;

pub use request::{
    ComposeEmailParams, GetPromptParams, InitializeParams, JsonRpcRequest, ReadResourceParams,
    RpcId, SendEmailParams, Tone, ToolCallParams,
};
pub use response::{
    GetPromptResult, JsonRpcError, JsonRpcResponse, PromptArgument, PromptDescriptor,
    PromptMessage, ResourceContents, ResourceDescriptor, ToolResult, ToolResultContent,
};
