use std::time::Duration;

use rand::Rng;
use reqwest::{header, StatusCode};

pub(crate) const DEFAULT_BASE_DELAY: Duration = Duration::from_millis(500);
pub(crate) const DEFAULT_MAX_DELAY: Duration = Duration::from_secs(30);
pub(crate) const DEFAULT_MAX_RETRIES: usize = 3;

/// Backoff configuration for transient request failures.
///
/// Pure configuration: each call tracks its own attempt counter, so one
/// policy value serves any number of concurrent requests.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RetryPolicy {
    /// First backoff delay; doubled on every further attempt.
    pub base_delay: Duration,
    /// Upper bound for any single delay, including `Retry-After` values.
    pub max_delay: Duration,
    /// Maximum number of retries after the initial attempt.
    pub max_retries: usize,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            base_delay: DEFAULT_BASE_DELAY,
            max_delay: DEFAULT_MAX_DELAY,
            max_retries: DEFAULT_MAX_RETRIES,
        }
    }
}

/// Transient statuses that are safe to retry. Everything else fails fast.
pub(crate) fn is_retryable_status(status: StatusCode) -> bool {
    matches!(
        status,
        StatusCode::TOO_MANY_REQUESTS
            | StatusCode::BAD_GATEWAY
            | StatusCode::SERVICE_UNAVAILABLE
            | StatusCode::GATEWAY_TIMEOUT
    )
}

/// Parses a positive integer `Retry-After` header value in seconds.
pub(crate) fn parse_retry_after(headers: &header::HeaderMap) -> Option<Duration> {
    let value = headers.get(header::RETRY_AFTER)?.to_str().ok()?;
    let seconds: u64 = value.trim().parse().ok()?;
    (seconds > 0).then(|| Duration::from_secs(seconds))
}

impl RetryPolicy {
    /// Delay before the attempt following `attempt` (0-indexed).
    ///
    /// A server-provided `retry_after` takes precedence over the computed
    /// backoff; both are capped at `max_delay`. The backoff is
    /// `base_delay * 2^attempt` with a symmetric ±25% jitter, clamped so the
    /// jittered value never exceeds `max_delay`.
    pub(crate) fn delay(&self, attempt: usize, retry_after: Option<Duration>) -> Duration {
        if let Some(after) = retry_after {
            return after.min(self.max_delay);
        }

        let exp = attempt.min(16) as u32;
        let delay = self.base_delay.saturating_mul(1 << exp).min(self.max_delay);

        let half = (delay.as_nanos() / 2) as u64;
        let jitter = if half == 0 {
            Duration::ZERO
        } else {
            Duration::from_nanos(rand::thread_rng().gen_range(0..half))
        };

        (delay / 2 + delay / 4 + jitter).min(self.max_delay)
    }
}
