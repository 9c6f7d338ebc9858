use async_trait::async_trait;
use borsdata_types::BorsdataError;

/// Status and body of one HTTP exchange, before any interpretation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    /// HTTP status code.
    pub status: u16,
    /// Response body as text.
    pub body: String,
}

impl RawResponse {
    /// Build a response from its parts.
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// True for any 2xx status.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.status >= 200 && self.status < 300
    }

    /// True when the server asked the caller to slow down (HTTP 429).
    #[must_use]
    pub const fn is_rate_limited(&self) -> bool {
        self.status == 429
    }
}

/// Issues one HTTP GET per call.
///
/// Implementations must not retry on their own; the request core owns the
/// retry policy and counts every call as one attempt. Failures to obtain any
/// response at all (DNS, connection reset, timeout) are reported as
/// [`BorsdataError::Transport`]. Non-2xx statuses are *not* errors at this
/// layer and come back as a normal [`RawResponse`].
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// Perform a GET against `url` with the fully serialized query.
    ///
    /// # Errors
    /// Returns [`BorsdataError::Transport`] when no response was received.
    async fn get(&self, url: &str, query: &[(String, String)])
    -> Result<RawResponse, BorsdataError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_classes() {
        assert!(RawResponse::new(200, "").is_success());
        assert!(RawResponse::new(204, "").is_success());
        assert!(!RawResponse::new(301, "").is_success());
        assert!(RawResponse::new(429, "").is_rate_limited());
        assert!(!RawResponse::new(429, "").is_success());
    }
}
