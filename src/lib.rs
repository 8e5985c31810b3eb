//! MCP server for SendPost transactional email.
//!
//! Exposes the `send-email` tool, the `email-templates` resource, and the
//! `compose-email` prompt over JSON-RPC 2.0 stdio transport, usable
//! from any MCP-compatible client. Delivery itself is delegated to the
//! SendPost HTTP API; everything here is request/response glue.

pub mod config;
pub mod handlers;
pub mod protocol;
pub mod server;

pub mod schema;
pub mod sendpost;
