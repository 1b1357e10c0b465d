//! Retry policy types
//!
//! Policies are deserializable so callers can load them from CI
//! configuration; every field has a default so a partial policy is valid.

use serde::{Deserialize, Serialize};

/// Retry policy for an operation
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct RetryPolicy {
    /// Maximum number of attempts (the first attempt counts)
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,

    /// Retry strategy
    #[serde(default)]
    pub strategy: RetryStrategy,

    /// Delay between attempts in milliseconds
    #[serde(default = "default_delay_ms")]
    pub delay_ms: u64,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: default_max_attempts(),
            strategy: RetryStrategy::default(),
            delay_ms: default_delay_ms(),
        }
    }
}

impl RetryPolicy {
    /// Policy for remote push operations: a fixed delay of `delay_secs`
    /// seconds between at most `max_attempts` attempts.
    pub fn fixed(max_attempts: u32, delay_secs: u64) -> Self {
        Self {
            max_attempts,
            strategy: RetryStrategy::FixedDelay,
            delay_ms: delay_secs * 1000,
        }
    }
}

fn default_max_attempts() -> u32 {
    3
}

fn default_delay_ms() -> u64 {
    10_000
}

/// Retry strategy
///
/// Push retries deliberately do not scale their delay: every wait between
/// attempts is the same length. There is no exponential or linear backoff
/// variant and no jitter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum RetryStrategy {
    /// Retry immediately with no delay
    None,

    /// Fixed delay between attempts (default)
    #[default]
    FixedDelay,
}
