//! Doubling delay sequence.

use std::time::Duration;

/// Iterator of retry delays: the initial delay, then doubled each step.
///
/// Yields at most `max_retries` values and never jitters.
///
/// # Examples
///
/// ```
/// use storyboard_retry::Backoff;
/// use std::time::Duration;
///
/// let delays: Vec<Duration> = Backoff::new(Duration::from_millis(100), 3).collect();
/// assert_eq!(
///     delays,
///     vec![
///         Duration::from_millis(100),
///         Duration::from_millis(200),
///         Duration::from_millis(400),
///     ]
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Backoff {
    next: Duration,
    remaining: usize,
}

impl Backoff {
    /// Create a sequence starting at `initial` with `max_retries` entries.
    pub fn new(initial: Duration, max_retries: usize) -> Self {
        Self {
            next: initial,
            remaining: max_retries,
        }
    }
}

impl Iterator for Backoff {
    type Item = Duration;

    fn next(&mut self) -> Option<Duration> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        let current = self.next;
        self.next = current.saturating_mul(2);
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Backoff {}
