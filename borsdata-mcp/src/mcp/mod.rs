//! Model Context Protocol server exposing [`borsdata::BorsdataClient`] as tools.
//!
//! ```text
//!  stdin ──▶ LineTransport ──▶ McpServer ──▶ tools::call ──▶ BorsdataClient
//!  stdout ◀──────────────────────┘
//! ```
//!
//! Messages are JSON-RPC 2.0, one per line.

pub mod protocol;
pub mod server;
pub mod tools;
pub mod transport;

pub use protocol::{PROTOCOL_VERSION, RequestId, Response};
pub use server::{McpServer, ServerState, ToolResult, call_tool};
pub use tools::{TOOLS, ToolSpec};
pub use transport::LineTransport;
