use std::time::Duration;

use async_trait::async_trait;

/// Waits between retry attempts.
///
/// The client's default implementation sleeps on the Tokio timer; tests swap
/// in a recorder so backoff can be asserted without elapsed time.
#[async_trait]
pub trait Sleeper: Send + Sync {
    /// Suspend the current task for `duration`.
    async fn sleep(&self, duration: Duration);
}
