use std::time::Duration;

use async_trait::async_trait;
use borsdata_core::{BackoffConfig, Sleeper};
use rand::Rng;

fn jitter_range(base_ms: u64, jitter_percent: u32) -> u64 {
    if jitter_percent == 0 {
        1
    } else {
        std::cmp::max(1, (base_ms.saturating_mul(u64::from(jitter_percent))) / 100)
    }
}

/// Add up to `jitter_percent`% of random jitter on top of `base_ms`.
pub fn jitter_wait(base_ms: u64, jitter_percent: u32) -> u64 {
    let mut rng = rand::rng();
    base_ms.saturating_add(rng.random_range(0..jitter_range(base_ms, jitter_percent)))
}

/// Largest value [`jitter_wait`] can return for `base_ms`.
#[must_use]
pub fn max_jittered(base_ms: u64, jitter_percent: u32) -> u64 {
    base_ms.saturating_add(jitter_range(base_ms, jitter_percent) - 1)
}

/// Exponential delay before retry `retry` (1-indexed), capped and without jitter.
#[must_use]
pub fn base_delay_ms(cfg: &BackoffConfig, retry: u32) -> u64 {
    let mut delay = cfg.min_backoff_ms;
    for _ in 1..retry {
        if delay >= cfg.max_backoff_ms {
            break;
        }
        delay = delay.saturating_mul(u64::from(cfg.factor));
    }
    delay.min(cfg.max_backoff_ms)
}

/// Full delay before retry `retry`, jitter included.
#[must_use]
pub fn delay_for(cfg: &BackoffConfig, retry: u32) -> Duration {
    Duration::from_millis(jitter_wait(
        base_delay_ms(cfg, retry),
        u32::from(cfg.jitter_percent),
    ))
}

/// Check that every retry waits strictly longer than the one before it.
///
/// A run of `max_attempts` has `max_attempts - 1` retries. Each retry's
/// shortest possible delay must exceed the previous retry's longest one,
/// jitter included. Once the exponential part reaches `max_backoff_ms` the
/// schedule goes flat, so `max_attempts` is bounded by the cap.
///
/// # Errors
/// Returns a description of the first retry whose delay could fail to grow.
pub fn check_schedule(cfg: &BackoffConfig, max_attempts: u32) -> Result<(), String> {
    let jitter = u32::from(cfg.jitter_percent);
    for retry in 1..max_attempts.saturating_sub(1) {
        let longest = max_jittered(base_delay_ms(cfg, retry), jitter);
        let next = base_delay_ms(cfg, retry + 1);
        if next <= longest {
            return Err(format!(
                "retry {} would wait {next} ms after retry {retry} waited up to {longest} ms; \
                 raise max_backoff_ms or factor, or lower max_attempts",
                retry + 1
            ));
        }
    }
    Ok(())
}

/// Production [`Sleeper`] backed by the Tokio timer.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioSleeper;

#[async_trait]
impl Sleeper for TokioSleeper {
    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}
