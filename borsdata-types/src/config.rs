//! Configuration types shared by the client and the tool server.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Production API root, including the version segment.
pub const DEFAULT_BASE_URL: &str = "https://apiservice.borsdata.se/v1";

/// Environment variable holding the API key.
pub const API_KEY_ENV: &str = "BORSDATA_API_KEY";

/// Exponential backoff configuration for rate-limited retries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackoffConfig {
    /// Delay before the first retry, in milliseconds.
    pub min_backoff_ms: u64,
    /// Upper bound for the exponential part of the delay, in milliseconds.
    pub max_backoff_ms: u64,
    /// Exponential factor applied after each failed attempt (>= 1).
    pub factor: u32,
    /// Random jitter percentage [0, 100] added on top of each delay.
    pub jitter_percent: u8,
}

impl Default for BackoffConfig {
    fn default() -> Self {
        Self {
            min_backoff_ms: 1_000,
            max_backoff_ms: 20_000,
            factor: 2,
            jitter_percent: 20,
        }
    }
}

/// Client-wide configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// API root that endpoint paths are appended to.
    pub base_url: String,
    /// Maximum attempts per logical request, counting the first one.
    pub max_attempts: u32,
    /// Per-attempt timeout enforced by the HTTP transport.
    pub timeout: Duration,
    /// Delay schedule between attempts.
    pub backoff: BackoffConfig,
    /// Whether transport failures (DNS, reset, timeout) consume retries like a 429 does.
    ///
    /// Off by default: a transport failure surfaces on first occurrence.
    pub retry_transport_errors: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            max_attempts: 5,
            timeout: Duration::from_secs(30),
            backoff: BackoffConfig::default(),
            retry_transport_errors: false,
        }
    }
}
