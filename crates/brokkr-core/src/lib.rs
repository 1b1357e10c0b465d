//! # brokkr-core
//!
//! Core library for the brokkr CLI providing:
//! - Retry execution engine with policy-based configuration
//! - Retry policy types for CI push operations
//! - Host platform detection for platform binary packages

pub mod platform;
pub mod retry;
pub mod types;

pub use platform::HostOs;
pub use types::{RetryPolicy, RetryStrategy};
