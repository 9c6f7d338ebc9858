use std::time::Duration;

use async_trait::async_trait;
use borsdata_core::{BorsdataError, HttpTransport, RawResponse};

/// [`HttpTransport`] backed by a pooled `reqwest::Client`.
///
/// One instance is created per [`BorsdataClient`](crate::BorsdataClient) and
/// reused for every call; the connection pool is released when it is dropped.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    /// Build a transport whose requests time out after `timeout`.
    ///
    /// # Errors
    /// Returns [`BorsdataError::Transport`] if the TLS backend cannot be initialised.
    pub fn new(timeout: Duration) -> Result<Self, BorsdataError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("borsdata-rs/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| BorsdataError::transport(format!("failed to build HTTP client: {e}")))?;
        Ok(Self { client })
    }

    /// Wrap an existing client, e.g. one with a custom proxy.
    #[must_use]
    pub const fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

// The URL carries the API key in its query string; strip it before the
// message can end up in a log line.
fn redacted(e: reqwest::Error) -> BorsdataError {
    let what = if e.is_timeout() {
        "request timed out"
    } else if e.is_connect() {
        "connection failed"
    } else if e.is_body() || e.is_decode() {
        "failed to read response body"
    } else {
        "request failed"
    };
    BorsdataError::transport(format!("{what}: {}", e.without_url()))
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn get(
        &self,
        url: &str,
        query: &[(String, String)],
    ) -> Result<RawResponse, BorsdataError> {
        let resp = self
            .client
            .get(url)
            .query(query)
            .send()
            .await
            .map_err(redacted)?;
        let status = resp.status().as_u16();
        let body = resp.text().await.map_err(redacted)?;
        Ok(RawResponse { status, body })
    }
}
