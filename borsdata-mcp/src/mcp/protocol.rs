//! JSON-RPC 2.0 framing used by the tool server.
//!
//! A line on stdin is either a request (has `id`, expects exactly one reply)
//! or a notification (no `id`, never answered).

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Protocol revision announced in the `initialize` reply.
pub const PROTOCOL_VERSION: &str = "2024-11-05";

/// Name announced in `serverInfo`.
pub const SERVER_NAME: &str = "borsdata-mcp";

/// Request id; MCP allows strings or integers, never `null`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RequestId {
    /// Integer id.
    Number(i64),
    /// String id.
    String(String),
}

/// A request expecting one reply.
#[derive(Debug, Clone, Deserialize)]
pub struct Request {
    /// Correlation id echoed in the reply.
    pub id: RequestId,
    /// Method name.
    pub method: String,
    /// Method parameters.
    #[serde(default)]
    pub params: Option<Value>,
}

/// A one-way message.
#[derive(Debug, Clone, Deserialize)]
pub struct Notification {
    /// Method name.
    pub method: String,
}

/// One parsed input line.
#[derive(Debug, Clone)]
pub enum Incoming {
    /// Carries an `id`.
    Request(Request),
    /// Has no `id`.
    Notification(Notification),
}

/// Standard JSON-RPC error codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// Not JSON.
    ParseError,
    /// JSON but not a valid message.
    InvalidRequest,
    /// No such method.
    MethodNotFound,
    /// Params did not match the method.
    InvalidParams,
    /// The server failed to build a reply.
    InternalError,
}

impl ErrorCode {
    /// Numeric code on the wire.
    #[must_use]
    pub const fn code(self) -> i32 {
        match self {
            Self::ParseError => -32700,
            Self::InvalidRequest => -32600,
            Self::MethodNotFound => -32601,
            Self::InvalidParams => -32602,
            Self::InternalError => -32603,
        }
    }
}

/// Error member of an error reply.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorObject {
    /// Numeric code.
    pub code: i32,
    /// Human-readable message.
    pub message: String,
}

/// A reply: exactly one of `result` or `error` is set.
#[derive(Debug, Clone, Serialize)]
pub struct Response {
    jsonrpc: &'static str,
    /// Id of the request being answered; `None` when it could not be read.
    pub id: Option<RequestId>,
    /// Success payload.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,
    /// Failure payload.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorObject>,
}

impl Response {
    /// Successful reply.
    #[must_use]
    pub const fn success(id: RequestId, result: Value) -> Self {
        Self {
            jsonrpc: "2.0",
            id: Some(id),
            result: Some(result),
            error: None,
        }
    }

    /// Error reply.
    pub fn failure(id: Option<RequestId>, code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            jsonrpc: "2.0",
            id,
            result: None,
            error: Some(ErrorObject {
                code: code.code(),
                message: message.into(),
            }),
        }
    }
}

/// Parse one input line.
///
/// # Errors
/// Returns the error reply to send when the line is not JSON, lacks
/// `"jsonrpc": "2.0"` or has no usable `method`.
pub fn parse(line: &str) -> Result<Incoming, Response> {
    let value: Value = serde_json::from_str(line)
        .map_err(|e| Response::failure(None, ErrorCode::ParseError, format!("parse error: {e}")))?;
    let Some(obj) = value.as_object() else {
        return Err(Response::failure(
            None,
            ErrorCode::InvalidRequest,
            "message must be a JSON object",
        ));
    };
    if obj.get("jsonrpc").and_then(Value::as_str) != Some("2.0") {
        return Err(Response::failure(
            None,
            ErrorCode::InvalidRequest,
            "jsonrpc must be \"2.0\"",
        ));
    }

    if obj.contains_key("id") {
        let req: Request = serde_json::from_value(value).map_err(|e| {
            Response::failure(None, ErrorCode::InvalidRequest, format!("invalid request: {e}"))
        })?;
        if req.method.is_empty() {
            return Err(Response::failure(
                Some(req.id),
                ErrorCode::InvalidRequest,
                "method must not be empty",
            ));
        }
        Ok(Incoming::Request(req))
    } else {
        serde_json::from_value(value)
            .map(Incoming::Notification)
            .map_err(|e| {
                Response::failure(None, ErrorCode::InvalidRequest, format!("invalid notification: {e}"))
            })
    }
}
