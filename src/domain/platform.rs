//! Host platform detection.

use std::fmt;

/// Operating system family of the machine being provisioned.
///
/// Only Windows gets unattended installer fallbacks; every other host is
/// expected to have its tools installed up front.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HostPlatform {
    Windows,
    Unix,
}

impl HostPlatform {
    /// Detect the current platform at compile time.
    pub const fn current() -> Self {
        if cfg!(windows) { HostPlatform::Windows } else { HostPlatform::Unix }
    }

    pub const fn is_windows(self) -> bool {
        matches!(self, HostPlatform::Windows)
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            HostPlatform::Windows => "windows",
            HostPlatform::Unix => "unix",
        }
    }
}

impl fmt::Display for HostPlatform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
