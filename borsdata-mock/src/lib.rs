//! borsdata-mock
//!
//! Test doubles for the Borsdata client seams:
//! - [`MockTransport`] answers GETs from a script of replies, then from
//!   path routes (optionally pre-loaded with [`fixtures`]), and records every
//!   request it sees.
//! - [`RecordingSleeper`] records retry delays without waiting.
#![warn(missing_docs)]

/// Canned JSON bodies for every endpoint, keyed by request path.
pub mod fixtures;

use std::collections::VecDeque;
use std::time::Duration;

use async_trait::async_trait;
use borsdata_core::{AUTH_PARAM, BorsdataError, HttpTransport, RawResponse, Sleeper};
use serde_json::Value;
use tokio::sync::Mutex;

/// Instruction for how one request should be answered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MockReply {
    /// Return this status and body.
    Return(RawResponse),
    /// Fail as the transport would (the error is returned unchanged).
    Fail(BorsdataError),
}

impl MockReply {
    /// 200 with `body` serialized as JSON.
    #[must_use]
    pub fn ok(body: &Value) -> Self {
        Self::Return(RawResponse::new(200, body.to_string()))
    }

    /// Arbitrary status and raw body.
    pub fn status(status: u16, body: impl Into<String>) -> Self {
        Self::Return(RawResponse::new(status, body))
    }

    /// 429 with an empty body.
    #[must_use]
    pub fn rate_limited() -> Self {
        Self::status(429, "")
    }

    /// Connection-level failure.
    pub fn transport_error(msg: impl Into<String>) -> Self {
        Self::Fail(BorsdataError::transport(msg))
    }
}

/// One request observed by [`MockTransport`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedRequest {
    /// Full URL without the query string.
    pub url: String,
    /// Query pairs exactly as the client serialized them.
    pub query: Vec<(String, String)>,
}

impl RecordedRequest {
    /// First value sent for `name`.
    #[must_use]
    pub fn param(&self, name: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Every value sent for `name`, in order.
    #[must_use]
    pub fn params(&self, name: &str) -> Vec<&str> {
        self.query
            .iter()
            .filter(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
            .collect()
    }

    /// The `authKey` that was sent, if any.
    #[must_use]
    pub fn auth_key(&self) -> Option<&str> {
        self.param(AUTH_PARAM)
    }
}

#[derive(Default)]
struct State {
    script: VecDeque<MockReply>,
    routes: Vec<(String, MockReply)>,
    requests: Vec<RecordedRequest>,
}

/// Scripted, recording [`HttpTransport`].
///
/// Replies queued with [`then`](Self::then) are consumed first, one per
/// request, regardless of path. Once the script is empty, the first route
/// whose path is a suffix of the request URL answers. Anything else gets a
/// 404.
#[derive(Default)]
pub struct MockTransport {
    state: Mutex<State>,
}

impl MockTransport {
    /// Empty transport: every request is a 404 until scripted.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Transport answering every fixture path from [`fixtures::routes`].
    #[must_use]
    pub fn with_fixtures() -> Self {
        fixtures::routes()
            .into_iter()
            .fold(Self::new(), |t, (path, body)| t.route(path, MockReply::ok(&body)))
    }

    /// Queue a one-shot reply.
    #[must_use]
    pub fn then(mut self, reply: MockReply) -> Self {
        self.state.get_mut().script.push_back(reply);
        self
    }

    /// Queue the same reply `n` times.
    #[must_use]
    pub fn then_n(mut self, n: usize, reply: &MockReply) -> Self {
        let script = &mut self.state.get_mut().script;
        script.extend(std::iter::repeat_n(reply.clone(), n));
        self
    }

    /// Answer every request whose URL ends with `path`.
    ///
    /// Routes added earlier win over later ones.
    #[must_use]
    pub fn route(mut self, path: impl Into<String>, reply: MockReply) -> Self {
        self.state.get_mut().routes.push((path.into(), reply));
        self
    }

    /// Requests seen so far, oldest first.
    pub async fn requests(&self) -> Vec<RecordedRequest> {
        self.state.lock().await.requests.clone()
    }

    /// Number of requests seen so far.
    pub async fn calls(&self) -> usize {
        self.state.lock().await.requests.len()
    }
}

#[async_trait]
impl HttpTransport for MockTransport {
    async fn get(
        &self,
        url: &str,
        query: &[(String, String)],
    ) -> Result<RawResponse, BorsdataError> {
        let mut guard = self.state.lock().await;
        guard.requests.push(RecordedRequest {
            url: url.to_string(),
            query: query.to_vec(),
        });
        let reply = match guard.script.pop_front() {
            Some(r) => r,
            None => guard
                .routes
                .iter()
                .find(|(path, _)| url.ends_with(path.as_str()))
                .map_or_else(
                    || MockReply::status(404, format!("no mock route for {url}")),
                    |(_, r)| r.clone(),
                ),
        };
        drop(guard);
        match reply {
            MockReply::Return(resp) => Ok(resp),
            MockReply::Fail(e) => Err(e),
        }
    }
}

/// [`Sleeper`] that records each requested delay and returns immediately.
#[derive(Default)]
pub struct RecordingSleeper {
    delays: Mutex<Vec<Duration>>,
}

impl RecordingSleeper {
    /// Fresh recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Delays requested so far, oldest first.
    pub async fn delays(&self) -> Vec<Duration> {
        self.delays.lock().await.clone()
    }
}

#[async_trait]
impl Sleeper for RecordingSleeper {
    async fn sleep(&self, duration: Duration) {
        self.delays.lock().await.push(duration);
    }
}
