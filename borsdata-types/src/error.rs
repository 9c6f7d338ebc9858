use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Unified error type for the borsdata workspace.
///
/// Every client operation fails with exactly one of these kinds. Callers that
/// only care about the HTTP status can use [`BorsdataError::status`].
#[derive(Debug, Error, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum BorsdataError {
    /// Caller-supplied input violates a documented constraint. Raised before
    /// any network call is made.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The API kept answering 429 until the attempt budget ran out.
    #[error("rate limit exceeded after {attempts} attempt(s)")]
    RateLimitExceeded {
        /// Number of attempts made, including the first one.
        attempts: u32,
    },

    /// The API answered with a non-2xx status other than 429.
    #[error("API request failed with status code {status}: {body}")]
    ApiRequestFailed {
        /// HTTP status code.
        status: u16,
        /// Response body (usually a short message from the API).
        body: String,
    },

    /// Network-level failure below HTTP (DNS, connect, timeout, reset).
    #[error("transport error: {0}")]
    Transport(String),

    /// A 2xx body that is not JSON or does not match the expected shape.
    #[error("malformed response: {0}")]
    MalformedResponse(String),
}

impl BorsdataError {
    /// Helper: build an `InvalidArgument` error.
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    /// Helper: build an `ApiRequestFailed` error from a status and body.
    pub fn api_request_failed(status: u16, body: impl Into<String>) -> Self {
        Self::ApiRequestFailed {
            status,
            body: body.into(),
        }
    }

    /// Helper: build a `Transport` error.
    pub fn transport(msg: impl Into<String>) -> Self {
        Self::Transport(msg.into())
    }

    /// Helper: build a `MalformedResponse` error.
    pub fn malformed(msg: impl Into<String>) -> Self {
        Self::MalformedResponse(msg.into())
    }

    /// HTTP status associated with the failure, if any.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::ApiRequestFailed { status, .. } => Some(*status),
            Self::RateLimitExceeded { .. } => Some(429),
            _ => None,
        }
    }
}
