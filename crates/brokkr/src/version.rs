//! Version information for the brokkr CLI
//!
//! Build date and target triple are stamped by the build script; the
//! commit SHA is only present when building from a git checkout.

use serde::{Deserialize, Serialize};

/// Version information resolved at build time
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VersionInfo {
    /// Semantic version
    pub version: String,

    /// Git commit SHA (short), when built from a checkout
    pub commit: Option<String>,

    /// Build date (UTC)
    pub build_date: String,

    /// Target triple
    pub target: String,
}

impl VersionInfo {
    /// Create version info for current build
    pub fn current() -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            commit: option_env!("GIT_SHA").map(String::from),
            build_date: env!("BUILD_DATE").to_string(),
            target: env!("TARGET").to_string(),
        }
    }

    /// Format as display string
    pub fn display(&self) -> String {
        let mut parts = vec![format!("brokkr {}", self.version)];

        if let Some(commit) = &self.commit {
            parts.push(format!("({})", commit));
        }

        if !self.target.is_empty() {
            parts.push(self.target.clone());
        }

        parts.join(" ")
    }
}

impl std::fmt::Display for VersionInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display())
    }
}
