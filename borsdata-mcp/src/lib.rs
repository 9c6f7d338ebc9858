//! borsdata-mcp
//!
//! Serves every [`borsdata::BorsdataClient`] endpoint method as an MCP tool
//! named `get_<method>`, over newline-delimited JSON-RPC on stdio.
//!
//! Tool failures never become JSON-RPC errors: the tool result text is
//! `{"error": <message>, "tool": <name>}` instead.
#![warn(missing_docs)]

pub mod error;
pub mod mcp;

pub use error::ToolError;
pub use mcp::{McpServer, call_tool};
