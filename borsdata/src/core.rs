use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use borsdata_core::{
    API_KEY_ENV, BackoffConfig, BorsdataError, ClientConfig, HttpTransport, QueryParams, Sleeper,
};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::backoff::{self, TokioSleeper};
use crate::transport::ReqwestTransport;

/// Typed client for the Borsdata REST API.
///
/// Every endpoint method funnels through [`execute`](Self::execute), which
/// injects the API key, serializes the query, retries on HTTP 429 and turns
/// failures into [`BorsdataError`]. The client holds no per-request state and
/// is cheap to share behind an `Arc`.
pub struct BorsdataClient {
    api_key: String,
    cfg: ClientConfig,
    transport: Arc<dyn HttpTransport>,
    sleeper: Arc<dyn Sleeper>,
}

impl fmt::Debug for BorsdataClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BorsdataClient")
            .field("api_key", &"<redacted>")
            .field("cfg", &self.cfg)
            .finish_non_exhaustive()
    }
}

/// Builder for [`BorsdataClient`].
pub struct BorsdataClientBuilder {
    api_key: String,
    cfg: ClientConfig,
    transport: Option<Arc<dyn HttpTransport>>,
    sleeper: Option<Arc<dyn Sleeper>>,
}

impl BorsdataClientBuilder {
    /// Start from the default configuration with the given API key.
    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            cfg: ClientConfig::default(),
            transport: None,
            sleeper: None,
        }
    }

    /// Replace the whole configuration.
    #[must_use]
    pub fn config(mut self, cfg: ClientConfig) -> Self {
        self.cfg = cfg;
        self
    }

    /// Point the client at another API root (tests, proxies).
    #[must_use]
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.cfg.base_url = url.into();
        self
    }

    /// Maximum attempts per request, counting the first one.
    ///
    /// Only HTTP 429 responses (and transport failures, when enabled) consume
    /// extra attempts. Must be at least 1, and small enough that every retry
    /// still waits longer than the previous one before the backoff cap is
    /// reached (7 with the default [`BackoffConfig`]).
    #[must_use]
    pub const fn max_attempts(mut self, attempts: u32) -> Self {
        self.cfg.max_attempts = attempts;
        self
    }

    /// Fail on the first 429 instead of retrying.
    #[must_use]
    pub const fn no_retry(mut self) -> Self {
        self.cfg.max_attempts = 1;
        self
    }

    /// Per-attempt timeout used by the default transport.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.cfg.timeout = timeout;
        self
    }

    /// Delay schedule between attempts.
    ///
    /// A higher jitter spreads out concurrent clients hitting the same limit
    /// but makes individual waits less predictable.
    #[must_use]
    pub const fn backoff(mut self, backoff: BackoffConfig) -> Self {
        self.cfg.backoff = backoff;
        self
    }

    /// Let transport failures (DNS, reset, timeout) consume retries like a 429.
    #[must_use]
    pub const fn retry_transport_errors(mut self, yes: bool) -> Self {
        self.cfg.retry_transport_errors = yes;
        self
    }

    /// Use a custom transport instead of the built-in `reqwest` one.
    #[must_use]
    pub fn transport(mut self, transport: Arc<dyn HttpTransport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Use a custom sleeper between retries.
    #[must_use]
    pub fn sleeper(mut self, sleeper: Arc<dyn Sleeper>) -> Self {
        self.sleeper = Some(sleeper);
        self
    }

    /// Validate the configuration and build the client.
    ///
    /// # Errors
    /// Returns [`BorsdataError::InvalidArgument`] for an empty key or one with
    /// surrounding whitespace, an unparsable base URL, `max_attempts == 0`,
    /// `factor == 0`, `jitter_percent > 100`, `min_backoff_ms > max_backoff_ms`
    /// or a retry schedule whose delays would stop increasing, and
    /// [`BorsdataError::Transport`] if the default HTTP client cannot be built.
    pub fn build(self) -> Result<BorsdataClient, BorsdataError> {
        let api_key = self.api_key;
        if api_key.trim().is_empty() {
            return Err(BorsdataError::invalid_argument("API key must not be empty"));
        }
        if api_key.trim() != api_key {
            return Err(BorsdataError::invalid_argument(
                "API key must not have leading or trailing whitespace",
            ));
        }

        let cfg = self.cfg;
        let base = url::Url::parse(&cfg.base_url).map_err(|e| {
            BorsdataError::invalid_argument(format!("invalid base URL '{}': {e}", cfg.base_url))
        })?;
        if !matches!(base.scheme(), "http" | "https") {
            return Err(BorsdataError::invalid_argument(format!(
                "base URL must be http or https, got '{}'",
                base.scheme()
            )));
        }
        if cfg.max_attempts == 0 {
            return Err(BorsdataError::invalid_argument(
                "max_attempts must be at least 1",
            ));
        }
        if cfg.backoff.factor == 0 {
            return Err(BorsdataError::invalid_argument(
                "backoff factor must be at least 1",
            ));
        }
        if cfg.backoff.jitter_percent > 100 {
            return Err(BorsdataError::invalid_argument(
                "jitter_percent must be within 0..=100",
            ));
        }
        if cfg.backoff.min_backoff_ms > cfg.backoff.max_backoff_ms {
            return Err(BorsdataError::invalid_argument(
                "min_backoff_ms must not exceed max_backoff_ms",
            ));
        }
        backoff::check_schedule(&cfg.backoff, cfg.max_attempts)
            .map_err(BorsdataError::invalid_argument)?;

        let transport: Arc<dyn HttpTransport> = match self.transport {
            Some(t) => t,
            None => Arc::new(ReqwestTransport::new(cfg.timeout)?),
        };
        let sleeper = self.sleeper.unwrap_or_else(|| Arc::new(TokioSleeper));

        Ok(BorsdataClient {
            api_key,
            cfg,
            transport,
            sleeper,
        })
    }
}

enum Failure {
    RateLimited,
    Transport(BorsdataError),
}

impl BorsdataClient {
    /// Client with default configuration.
    ///
    /// # Errors
    /// See [`BorsdataClientBuilder::build`].
    pub fn new(api_key: impl Into<String>) -> Result<Self, BorsdataError> {
        Self::builder(api_key).build()
    }

    /// Client keyed from the `BORSDATA_API_KEY` environment variable.
    ///
    /// # Errors
    /// Returns [`BorsdataError::InvalidArgument`] when the variable is unset or empty.
    pub fn from_env() -> Result<Self, BorsdataError> {
        let key = std::env::var(API_KEY_ENV).map_err(|_| {
            BorsdataError::invalid_argument(format!("{API_KEY_ENV} environment variable is not set"))
        })?;
        Self::new(key)
    }

    /// Start building a client.
    ///
    /// ```rust,ignore
    /// use std::time::Duration;
    /// use borsdata::{BackoffConfig, BorsdataClient};
    ///
    /// let client = BorsdataClient::builder("my-key")
    ///     .max_attempts(3)
    ///     .timeout(Duration::from_secs(10))
    ///     .backoff(BackoffConfig { min_backoff_ms: 500, ..Default::default() })
    ///     .build()?;
    /// ```
    #[must_use]
    pub fn builder(api_key: impl Into<String>) -> BorsdataClientBuilder {
        BorsdataClientBuilder::new(api_key)
    }

    /// Active configuration.
    #[must_use]
    pub const fn config(&self) -> &ClientConfig {
        &self.cfg
    }

    /// Release the HTTP connection pool now instead of at drop.
    pub fn close(self) {
        drop(self);
    }

    fn url_for(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.cfg.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    /// GET `path` and return the raw 2xx body, retrying per the configured policy.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "borsdata::core::fetch",
            skip(self, params),
            fields(max_attempts = self.cfg.max_attempts),
        )
    )]
    async fn fetch(&self, path: &str, params: QueryParams) -> Result<String, BorsdataError> {
        let url = self.url_for(path);
        let query = params.into_authenticated(&self.api_key);
        let max = self.cfg.max_attempts;

        let mut last = Failure::RateLimited;
        for attempt in 1..=max {
            last = match self.transport.get(&url, &query).await {
                Ok(resp) if resp.is_success() => return Ok(resp.body),
                Ok(resp) if resp.is_rate_limited() => Failure::RateLimited,
                Ok(resp) => {
                    #[cfg(feature = "tracing")]
                    tracing::debug!(status = resp.status, attempt, "request rejected");
                    return Err(BorsdataError::api_request_failed(resp.status, resp.body));
                }
                Err(e @ BorsdataError::Transport(_)) if self.cfg.retry_transport_errors => {
                    Failure::Transport(e)
                }
                Err(e) => {
                    #[cfg(feature = "tracing")]
                    tracing::debug!(error = %e, attempt, "transport failure");
                    return Err(e);
                }
            };

            if attempt < max {
                let delay = backoff::delay_for(&self.cfg.backoff, attempt);
                #[cfg(feature = "tracing")]
                tracing::warn!(
                    attempt,
                    delay_ms = u64::try_from(delay.as_millis()).unwrap_or(u64::MAX),
                    rate_limited = matches!(last, Failure::RateLimited),
                    "retrying"
                );
                self.sleeper.sleep(delay).await;
            }
        }

        Err(match last {
            Failure::RateLimited => BorsdataError::RateLimitExceeded { attempts: max },
            Failure::Transport(e) => e,
        })
    }

    /// GET `path` and parse the body as untyped JSON.
    ///
    /// The API key is added under `authKey`, replacing any caller-supplied value.
    ///
    /// # Errors
    /// - [`BorsdataError::RateLimitExceeded`] after `max_attempts` consecutive 429s.
    /// - [`BorsdataError::ApiRequestFailed`] for any other non-2xx status.
    /// - [`BorsdataError::Transport`] when no response was received.
    /// - [`BorsdataError::MalformedResponse`] when a 2xx body is not JSON.
    pub async fn execute(&self, path: &str, params: QueryParams) -> Result<Value, BorsdataError> {
        let body = self.fetch(path, params).await?;
        serde_json::from_str(&body)
            .map_err(|e| BorsdataError::malformed(format!("invalid JSON from {path}: {e}")))
    }

    /// GET `path` and deserialize the body into `T`.
    ///
    /// # Errors
    /// As [`execute`](Self::execute); a body that does not match `T` is also
    /// [`BorsdataError::MalformedResponse`].
    pub async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        params: QueryParams,
    ) -> Result<T, BorsdataError> {
        let body = self.fetch(path, params).await?;
        serde_json::from_str(&body)
            .map_err(|e| BorsdataError::malformed(format!("unexpected response from {path}: {e}")))
    }

    /// GET `path` and pull the list stored under `key` out of the response envelope.
    ///
    /// A missing or null list is an empty `Vec`.
    pub(crate) async fn get_list<T: DeserializeOwned>(
        &self,
        path: &str,
        params: QueryParams,
        key: &str,
    ) -> Result<Vec<T>, BorsdataError> {
        let body = self.execute(path, params).await?;
        envelope_list(body, key)
            .map_err(|e| BorsdataError::malformed(format!("unexpected response from {path}: {e}")))
    }
}

fn envelope_list<T: DeserializeOwned>(body: Value, key: &str) -> Result<Vec<T>, String> {
    let Value::Object(mut map) = body else {
        return Err(format!("expected an object holding '{key}'"));
    };
    match map.remove(key) {
        None | Some(Value::Null) => Ok(Vec::new()),
        Some(list) => serde_json::from_value(list).map_err(|e| format!("'{key}': {e}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn envelope_missing_or_null_is_empty() {
        let a: Vec<i64> = envelope_list(json!({}), "branches").unwrap();
        let b: Vec<i64> = envelope_list(json!({"branches": null}), "branches").unwrap();
        assert!(a.is_empty());
        assert!(b.is_empty());
    }

    #[test]
    fn envelope_rejects_wrong_shape() {
        assert!(envelope_list::<i64>(json!([1, 2]), "branches").is_err());
        assert!(envelope_list::<i64>(json!({"branches": "x"}), "branches").is_err());
    }

    #[test]
    fn builder_validates_knobs() {
        let bad = [
            BorsdataClient::builder("  ").build(),
            BorsdataClient::builder("k").max_attempts(0).build(),
            BorsdataClient::builder(" k").build(),
            BorsdataClient::builder("k\n").build(),
            BorsdataClient::builder("k").max_attempts(8).build(),
            BorsdataClient::builder("k")
                .backoff(BackoffConfig {
                    factor: 1,
                    ..BackoffConfig::default()
                })
                .build(),
            BorsdataClient::builder("k").base_url("not a url").build(),
            BorsdataClient::builder("k").base_url("ftp://example.com").build(),
            BorsdataClient::builder("k")
                .backoff(BackoffConfig {
                    factor: 0,
                    ..BackoffConfig::default()
                })
                .build(),
            BorsdataClient::builder("k")
                .backoff(BackoffConfig {
                    jitter_percent: 101,
                    ..BackoffConfig::default()
                })
                .build(),
            BorsdataClient::builder("k")
                .backoff(BackoffConfig {
                    min_backoff_ms: 5,
                    max_backoff_ms: 1,
                    ..BackoffConfig::default()
                })
                .build(),
        ];
        for res in bad {
            assert!(matches!(res, Err(BorsdataError::InvalidArgument(_))));
        }
    }

    #[test]
    fn debug_hides_the_key() {
        let client = BorsdataClient::new("super-secret").unwrap();
        let dbg = format!("{client:?}");
        assert!(!dbg.contains("super-secret"));
        assert!(dbg.contains("redacted"));
    }

    #[test]
    fn url_join_tolerates_slashes() {
        let client = BorsdataClient::builder("k")
            .base_url("http://localhost:1/v1/")
            .build()
            .unwrap();
        assert_eq!(client.url_for("/branches"), "http://localhost:1/v1/branches");
        assert_eq!(client.url_for("markets"), "http://localhost:1/v1/markets");
    }
}
