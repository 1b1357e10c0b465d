//! Retry execution engine with policy-based configuration
//!
//! This module provides the bounded-retry primitive used for remote sync
//! operations: a fixed number of attempts with an unscaled, non-blocking
//! delay between them.
//!
//! # Features
//!
//! - `None` and `FixedDelay` strategies (delays never scale)
//! - Observable attempts via the `RetryObserver` trait
//! - Built-in `TracingObserver` for logging
//! - Builder pattern for executor configuration
//! - Thread-safe with Send + Sync bounds
//!
//! # Example
//!
//! ```rust,no_run
//! use brokkr_core::retry::{retry_with_policy, RetryError};
//! use brokkr_core::types::RetryPolicy;
//!
//! async fn example() -> Result<String, RetryError<std::io::Error>> {
//!     let policy = RetryPolicy::default();
//!
//!     retry_with_policy(&policy, || async {
//!         // Your fallible operation here
//!         Ok("success".to_string())
//!     }).await
//! }
//! ```

mod error;
mod executor;
mod observer;
mod strategies;

pub use error::RetryError;
pub use executor::{retry_with_policy, RetryExecutor, RetryExecutorBuilder};
pub use observer::{NoOpObserver, RetryObserver, StatsObserver, TracingObserver};
pub use strategies::{calculate_delay, AlwaysRetry, ClosurePredicate, RetryPredicate};
