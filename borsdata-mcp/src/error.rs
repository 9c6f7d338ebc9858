//! Errors raised while serving a tool call.

use borsdata::BorsdataError;
use thiserror::Error;

/// Failure of a single `tools/call`.
///
/// Every variant is reported back to the caller inside the tool result as
/// `{"error": <Display>, "tool": <name>}`; none of them becomes a JSON-RPC error.
#[derive(Debug, Error)]
pub enum ToolError {
    /// The tool name is not in the tool table.
    #[error("unknown tool: {0}")]
    UnknownTool(String),

    /// A required argument was not supplied.
    #[error("missing required argument '{0}'")]
    MissingArgument(String),

    /// An argument has the wrong kind or an unacceptable value.
    #[error("invalid argument '{name}': {reason}")]
    InvalidArgument {
        /// Argument name.
        name: String,
        /// What was wrong with it.
        reason: String,
    },

    /// The client call failed.
    #[error(transparent)]
    Client(#[from] BorsdataError),

    /// The client result could not be turned into JSON.
    #[error("failed to serialize result: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl ToolError {
    /// Helper: build an `InvalidArgument` error.
    pub fn invalid(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            name: name.into(),
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        assert_eq!(
            ToolError::UnknownTool("get_nothing".into()).to_string(),
            "unknown tool: get_nothing"
        );
        assert_eq!(
            ToolError::invalid("date", "expected YYYY-MM-DD").to_string(),
            "invalid argument 'date': expected YYYY-MM-DD"
        );
        let wrapped = ToolError::from(BorsdataError::RateLimitExceeded { attempts: 5 });
        assert_eq!(
            wrapped.to_string(),
            BorsdataError::RateLimitExceeded { attempts: 5 }.to_string()
        );
    }
}
