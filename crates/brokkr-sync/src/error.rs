//! Error types for brokkr-sync

use thiserror::Error;

/// Result type alias using brokkr-sync's Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Remote synchronization error types
#[derive(Error, Debug)]
pub enum Error {
    /// Git operation failed
    #[error("Git operation failed: {message}")]
    GitOperation { message: String },

    /// Git command not found
    #[error("Git command not found. Please ensure git is installed and in PATH")]
    GitNotFound,

    /// Pull request verification needs a base commit
    #[error("Base commit not set: GITHUB_SHA is required to verify pending commits")]
    MissingBaseCommit,

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create a git operation error
    pub fn git_operation(message: impl Into<String>) -> Self {
        Self::GitOperation {
            message: message.into(),
        }
    }
}
