//! Host platform detection
//!
//! Platform binary packages are laid out per OS under directory names
//! `linux`, `osx` and `windows`. This module maps the running host onto
//! that three-entry naming scheme; anything else has no mapped value.

/// Operating systems that platform binary packages are published for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostOs {
    Linux,
    MacOs,
    Windows,
}

impl HostOs {
    /// Detect the OS this process is running on.
    ///
    /// Returns `None` on platforms no binary package exists for.
    pub fn host() -> Option<Self> {
        Self::from_os_str(std::env::consts::OS)
    }

    /// Map an OS identifier (as reported by `std::env::consts::OS`)
    /// onto a supported host OS.
    pub fn from_os_str(os: &str) -> Option<Self> {
        match os {
            "linux" => Some(HostOs::Linux),
            "macos" => Some(HostOs::MacOs),
            "windows" => Some(HostOs::Windows),
            _ => None,
        }
    }

    /// The package directory label for this OS.
    pub fn label(&self) -> &'static str {
        match self {
            HostOs::Linux => "linux",
            HostOs::MacOs => "osx",
            HostOs::Windows => "windows",
        }
    }
}

impl std::fmt::Display for HostOs {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
