//! Retry of transient remote failures.

use crate::Backoff;
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::future::Future;
use std::time::Duration;
use storyboard_error::RetryableError;
use tokio_retry2::{Retry, RetryError};
use tracing::{debug, warn};

fn default_max_retries() -> usize {
    5
}

fn default_initial_backoff_ms() -> u64 {
    3000
}

/// How many times, and how patiently, to retry transient failures.
///
/// The default is 5 retries starting at 3 seconds, so a call that keeps
/// failing gives up after 3 + 6 + 12 + 24 + 48 = 93 seconds of waiting.
///
/// # Examples
///
/// ```
/// use storyboard_retry::RetryPolicy;
///
/// let policy = RetryPolicy::default();
/// assert_eq!(*policy.max_retries(), 5);
/// assert_eq!(*policy.initial_backoff_ms(), 3000);
///
/// let impatient = policy.with_max_retries(1);
/// assert_eq!(impatient.backoff().count(), 1);
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    derive_getters::Getters,
    derive_setters::Setters,
)]
#[setters(prefix = "with_")]
pub struct RetryPolicy {
    /// Retries after the first attempt
    #[serde(default = "default_max_retries")]
    max_retries: usize,
    /// Delay before the first retry, in milliseconds
    #[serde(default = "default_initial_backoff_ms")]
    initial_backoff_ms: u64,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: default_max_retries(),
            initial_backoff_ms: default_initial_backoff_ms(),
        }
    }
}

impl RetryPolicy {
    /// Policy that makes exactly one attempt.
    pub fn disabled() -> Self {
        Self {
            max_retries: 0,
            ..Self::default()
        }
    }

    /// Delays between attempts.
    pub fn backoff(&self) -> Backoff {
        Backoff::new(
            Duration::from_millis(self.initial_backoff_ms),
            self.max_retries,
        )
    }
}

/// Run `operation`, retrying while it fails with a retryable error.
///
/// Non-retryable failures return after a single attempt with no delay. Once
/// retries are exhausted the last failure is returned unchanged.
///
/// # Examples
///
/// ```
/// use storyboard_error::{GeminiError, GeminiErrorKind};
/// use storyboard_retry::{RetryPolicy, with_retry};
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let result: Result<(), GeminiError> = with_retry(&RetryPolicy::default(), || async {
///     Err(GeminiError::new(GeminiErrorKind::NoImageData))
/// })
/// .await;
/// assert!(result.is_err());
/// # }
/// ```
pub async fn with_retry<F, Fut, T, E>(policy: &RetryPolicy, mut operation: F) -> Result<T, E>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: RetryableError + Display,
{
    let max_retries = policy.max_retries;
    let mut delays = policy.backoff();
    let mut attempt = 0usize;

    Retry::spawn(policy.backoff(), || {
        attempt += 1;
        let current = attempt;
        let next_delay = delays.next();
        let call = operation();
        async move {
            match call.await {
                Ok(value) => {
                    if current > 1 {
                        debug!(attempt = current, "Retried call succeeded");
                    }
                    Ok(value)
                }
                Err(e) if e.is_retryable() => match next_delay {
                    Some(delay) => {
                        warn!(
                            error = %e,
                            attempt = current,
                            retries_left = max_retries + 1 - current,
                            delay_ms = delay.as_millis() as u64,
                            "Transient error, will retry"
                        );
                        Err(RetryError::Transient {
                            err: e,
                            retry_after: None,
                        })
                    }
                    None => {
                        warn!(error = %e, attempts = current, "Retries exhausted");
                        Err(RetryError::Permanent(e))
                    }
                },
                Err(e) => {
                    debug!(error = %e, "Permanent error, failing immediately");
                    Err(RetryError::Permanent(e))
                }
            }
        }
    })
    .await
}
