//! Retry policy for transient failures.

use std::time::Duration;

use http::{Method, StatusCode};

/// Controls which failed attempts the client retries, and how fast.
///
/// Retry eligibility is explicit rather than inferred from the method name:
/// an attempt is retried only when its method is listed in
/// [`retryable_methods`](Self::retryable_methods) *and* the failure was
/// either a connection error or a status in
/// [`retryable_statuses`](Self::retryable_statuses). Timeouts and
/// cancellations are never retried. Callers that know a POST endpoint is
/// safe to replay (e.g. idempotency-keyed creates) can opt it in.
#[derive(Debug, Clone)]
pub struct RetryPolicy {
    /// Maximum number of retries after the initial attempt. Zero disables
    /// retrying entirely.
    pub max_retries: u32,
    /// Backoff before the first retry; doubles on each subsequent one.
    pub initial_interval: Duration,
    /// Upper bound on the backoff between attempts.
    pub max_interval: Duration,
    /// HTTP statuses considered transient.
    pub retryable_statuses: Vec<StatusCode>,
    /// Methods that are safe to replay.
    pub retryable_methods: Vec<Method>,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: 2,
            initial_interval: Duration::from_millis(500),
            max_interval: Duration::from_secs(30),
            retryable_statuses: vec![
                StatusCode::TOO_MANY_REQUESTS,
                StatusCode::BAD_GATEWAY,
                StatusCode::SERVICE_UNAVAILABLE,
                StatusCode::GATEWAY_TIMEOUT,
            ],
            retryable_methods: vec![Method::GET, Method::HEAD, Method::PUT, Method::DELETE],
        }
    }
}

impl RetryPolicy {
    /// A policy that never retries.
    #[must_use]
    pub fn none() -> Self {
        Self {
            max_retries: 0,
            ..Self::default()
        }
    }

    pub(crate) fn method_is_retryable(&self, method: &Method) -> bool {
        self.retryable_methods.contains(method)
    }

    pub(crate) fn status_is_retryable(&self, status: StatusCode) -> bool {
        self.retryable_statuses.contains(&status)
    }

    /// Backoff before retry number `retry` (1-based), doubling from
    /// `initial_interval` and capped at `max_interval`.
    pub(crate) fn backoff(&self, retry: u32) -> Duration {
        let exp = retry.saturating_sub(1).min(16);
        let interval = self
            .initial_interval
            .saturating_mul(2u32.saturating_pow(exp));
        interval.min(self.max_interval)
    }
}
