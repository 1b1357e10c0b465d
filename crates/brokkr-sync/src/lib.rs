//! # brokkr-sync
//!
//! Remote synchronization library for the brokkr CLI providing:
//! - Async git command execution
//! - CI trigger context (pull request vs. push)
//! - Pending commit/tag verification and bounded-retry push flows

pub mod ci;
pub mod cmd;
pub mod error;
pub mod sync;

pub use ci::{CiContext, TriggerEvent};
pub use error::{Error, Result};
pub use sync::{sync_pending, SyncKind, SyncOptions, SyncOutcome};
