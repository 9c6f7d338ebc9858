//! Server lifecycle and method dispatch.
//!
//! `initialize` must come first; after it `tools/list` and `tools/call` are
//! served. `ping` is answered in any state. Notifications never get a reply.

use std::io;

use borsdata::BorsdataClient;
use serde::Serialize;
use serde_json::{Value, json};
use tokio::io::{AsyncBufRead, AsyncWrite};

use crate::mcp::protocol::{self, ErrorCode, Incoming, PROTOCOL_VERSION, Request, Response, SERVER_NAME};
use crate::mcp::tools::{self, TOOLS};
use crate::mcp::transport::LineTransport;

/// Where the session is in the MCP handshake.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServerState {
    /// No `initialize` seen yet.
    AwaitingInit,
    /// `initialize` answered, `notifications/initialized` not yet received.
    Initialising,
    /// Handshake complete.
    Running,
}

/// Text content item of a tool result.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Content {
    /// Plain text.
    Text {
        /// The text.
        text: String,
    },
}

/// Result member of a `tools/call` reply.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolResult {
    /// Result content; always a single text item.
    pub content: Vec<Content>,
    /// Set when the text is an error envelope.
    pub is_error: bool,
}

impl ToolResult {
    fn text(text: String, is_error: bool) -> Self {
        Self {
            content: vec![Content::Text { text }],
            is_error,
        }
    }
}

#[derive(Debug, serde::Deserialize)]
struct CallParams {
    name: String,
    #[serde(default)]
    arguments: Value,
}

/// Run the tool `name` and wrap the outcome as tool-result text.
///
/// Success yields the JSON-serialized client result. Any failure yields
/// `{"error": <message>, "tool": <name>}` with `is_error` set.
pub async fn call_tool(client: &BorsdataClient, name: &str, arguments: &Value) -> ToolResult {
    match tools::call(client, name, arguments).await {
        Ok(value) => ToolResult::text(value.to_string(), false),
        Err(e) => {
            tracing::warn!(tool = name, error = %e, "tool call failed");
            let envelope = json!({"error": e.to_string(), "tool": name});
            ToolResult::text(envelope.to_string(), true)
        }
    }
}

/// MCP tool server bound to one client.
#[derive(Debug)]
pub struct McpServer {
    client: BorsdataClient,
    state: ServerState,
}

impl McpServer {
    /// Server answering tool calls with `client`.
    #[must_use]
    pub const fn new(client: BorsdataClient) -> Self {
        Self {
            client,
            state: ServerState::AwaitingInit,
        }
    }

    /// Current handshake state.
    #[must_use]
    pub const fn state(&self) -> ServerState {
        self.state
    }

    /// Process one input line; returns the reply to send, if any.
    pub async fn handle_line(&mut self, line: &str) -> Option<Response> {
        match protocol::parse(line) {
            Ok(Incoming::Request(req)) => Some(self.handle_request(req).await),
            Ok(Incoming::Notification(note)) => {
                if note.method == "notifications/initialized"
                    && self.state == ServerState::Initialising
                {
                    self.state = ServerState::Running;
                    tracing::info!("client initialised");
                }
                None
            }
            Err(reply) => Some(reply),
        }
    }

    async fn handle_request(&mut self, req: Request) -> Response {
        tracing::debug!(method = %req.method, "request");
        let method = req.method.clone();
        match method.as_str() {
            "initialize" => self.initialize(req),
            "ping" => Response::success(req.id, json!({})),
            "tools/list" | "tools/call" if self.state == ServerState::AwaitingInit => {
                Response::failure(Some(req.id), ErrorCode::InvalidRequest, "server not initialised")
            }
            "tools/list" => {
                let tools: Vec<Value> = TOOLS.iter().map(tools::ToolSpec::definition).collect();
                Response::success(req.id, json!({"tools": tools}))
            }
            "tools/call" => self.tools_call(req).await,
            other => Response::failure(
                Some(req.id),
                ErrorCode::MethodNotFound,
                format!("method not found: {other}"),
            ),
        }
    }

    fn initialize(&mut self, req: Request) -> Response {
        if self.state != ServerState::AwaitingInit {
            return Response::failure(
                Some(req.id),
                ErrorCode::InvalidRequest,
                "server already initialised",
            );
        }
        self.state = ServerState::Initialising;
        Response::success(
            req.id,
            json!({
                "protocolVersion": PROTOCOL_VERSION,
                "capabilities": {"tools": {}},
                "serverInfo": {"name": SERVER_NAME, "version": env!("CARGO_PKG_VERSION")},
            }),
        )
    }

    async fn tools_call(&self, req: Request) -> Response {
        let params: CallParams = match req.params.map(serde_json::from_value).transpose() {
            Ok(Some(p)) => p,
            Ok(None) => {
                return Response::failure(Some(req.id), ErrorCode::InvalidParams, "missing params");
            }
            Err(e) => {
                return Response::failure(
                    Some(req.id),
                    ErrorCode::InvalidParams,
                    format!("invalid tools/call params: {e}"),
                );
            }
        };
        let result = call_tool(&self.client, &params.name, &params.arguments).await;
        match serde_json::to_value(result) {
            Ok(value) => Response::success(req.id, value),
            Err(e) => Response::failure(Some(req.id), ErrorCode::InternalError, e.to_string()),
        }
    }

    /// Serve `transport` until its input ends.
    ///
    /// # Errors
    /// Returns the first I/O error from the transport.
    pub async fn serve<R, W>(&mut self, transport: &mut LineTransport<R, W>) -> io::Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        while let Some(line) = transport.read_line().await? {
            if line.trim().is_empty() {
                continue;
            }
            if let Some(reply) = self.handle_line(&line).await {
                transport.write(&reply).await?;
            }
        }
        tracing::info!("input closed");
        Ok(())
    }

    /// Serve stdin/stdout until end of input or Ctrl+C.
    ///
    /// # Errors
    /// Returns the first I/O error from stdio.
    pub async fn run(&mut self) -> io::Result<()> {
        let mut transport = LineTransport::stdio();
        tokio::select! {
            res = self.serve(&mut transport) => res,
            _ = tokio::signal::ctrl_c() => {
                tracing::info!("interrupted, shutting down");
                Ok(())
            }
        }
    }
}
