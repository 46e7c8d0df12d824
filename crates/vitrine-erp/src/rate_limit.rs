//! Retry with exponential backoff for transient ERP failures.
//!
//! Throttling (429), transport errors, and 5xx responses are retried.
//! Everything else (404, other 4xx, unparseable bodies) fails immediately.

use std::future::Future;
use std::time::Duration;

use crate::error::ErpError;

/// Returns `true` if `err` is transient and worth retrying after a delay.
fn is_retriable(err: &ErpError) -> bool {
    match err {
        ErpError::RateLimited { .. } | ErpError::Http(_) => true,
        ErpError::UnexpectedStatus { status, .. } => *status >= 500,
        _ => false,
    }
}

/// Executes `operation`, retrying transient errors.
///
/// Sleeps `backoff_base_secs * 2^attempt` seconds between attempts, for up
/// to `max_retries` retries after the first try. Returns the last error once
/// retries are exhausted. Non-retriable errors return immediately.
///
/// With `max_retries = 3` and `backoff_base_secs = 1` the waits are 1 s,
/// 2 s, and 4 s, for at most 4 attempts.
pub(crate) async fn retry_with_backoff<T, F, Fut>(
    max_retries: u32,
    backoff_base_secs: u64,
    mut operation: F,
) -> Result<T, ErpError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, ErpError>>,
{
    let mut last_err;
    let mut attempt = 0u32;

    loop {
        match operation().await {
            Ok(value) => return Ok(value),
            Err(err) => {
                if !is_retriable(&err) || attempt >= max_retries {
                    return Err(err);
                }
                last_err = err;
            }
        }

        // Cap the shift so extreme configs saturate instead of overflowing.
        let delay_secs = backoff_base_secs.saturating_mul(1u64 << attempt.min(62));
        tracing::warn!(
            attempt,
            max_retries,
            delay_secs,
            error = %last_err,
            "transient ERP error, retrying after backoff"
        );
        tokio::time::sleep(Duration::from_secs(delay_secs)).await;
        attempt += 1;
    }
}
