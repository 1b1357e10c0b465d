//! Retry delay calculation and predicates

use crate::types::{RetryPolicy, RetryStrategy};
use std::time::Duration;

/// Calculate the delay before the next retry attempt
///
/// The delay does not depend on the attempt number: `FixedDelay` waits
/// `delay_ms` every time, `None` never waits.
///
/// # Example
///
/// ```rust
/// use brokkr_core::retry::calculate_delay;
/// use brokkr_core::types::{RetryPolicy, RetryStrategy};
///
/// let policy = RetryPolicy {
///     max_attempts: 3,
///     strategy: RetryStrategy::FixedDelay,
///     delay_ms: 10_000,
/// };
///
/// assert_eq!(calculate_delay(&policy, 1).as_secs(), 10);
/// assert_eq!(calculate_delay(&policy, 2).as_secs(), 10);
/// ```
pub fn calculate_delay(policy: &RetryPolicy, attempt: u32) -> Duration {
    let _ = attempt;
    match policy.strategy {
        RetryStrategy::None => Duration::ZERO,
        RetryStrategy::FixedDelay => Duration::from_millis(policy.delay_ms),
    }
}

/// A predicate that determines whether an error should be retried
///
/// Implement this trait to short-circuit retries for known non-recoverable
/// errors. The default for push operations is `AlwaysRetry`: all failures
/// are treated uniformly.
pub trait RetryPredicate<E: ?Sized>: Send + Sync {
    /// Determine whether the given error should be retried
    fn should_retry(&self, error: &E) -> bool;
}

/// A predicate that always returns true (all errors are retryable)
#[derive(Debug, Clone, Copy, Default)]
pub struct AlwaysRetry;

impl<E: ?Sized> RetryPredicate<E> for AlwaysRetry {
    fn should_retry(&self, _error: &E) -> bool {
        true
    }
}

/// A predicate that uses a closure to determine retryability
pub struct ClosurePredicate<F> {
    predicate: F,
}

impl<F> ClosurePredicate<F> {
    /// Create a new closure-based predicate
    pub fn new(predicate: F) -> Self {
        Self { predicate }
    }
}

impl<E, F> RetryPredicate<E> for ClosurePredicate<F>
where
    F: Fn(&E) -> bool + Send + Sync,
{
    fn should_retry(&self, error: &E) -> bool {
        (self.predicate)(error)
    }
}
