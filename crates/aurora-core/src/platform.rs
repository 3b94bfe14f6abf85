//! Operating system detection for OS-gated commands

use crate::error::{Error, Result};

/// Operating system platform
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    /// macOS (Darwin)
    MacOS,
    Linux,
    Windows,
    /// Unknown/unsupported platform
    Unknown,
}

impl Platform {
    /// Platform this binary was built for
    pub fn current() -> Self {
        if cfg!(target_os = "macos") {
            Self::MacOS
        } else if cfg!(target_os = "linux") {
            Self::Linux
        } else if cfg!(target_os = "windows") {
            Self::Windows
        } else {
            Self::Unknown
        }
    }

    /// Fail with `PlatformUnsupported` unless this is macOS
    pub fn require_macos(self, operation: &str) -> Result<()> {
        if self == Self::MacOS {
            Ok(())
        } else {
            Err(Error::platform_unsupported(operation, Self::MacOS.to_string()))
        }
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MacOS => write!(f, "macOS"),
            Self::Linux => write!(f, "Linux"),
            Self::Windows => write!(f, "Windows"),
            Self::Unknown => write!(f, "Unknown"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_macos() {
        assert!(Platform::MacOS.require_macos("install").is_ok());

        let err = Platform::Linux.require_macos("install").unwrap_err();
        assert_eq!(
            err.to_string(),
            "The install command is only supported on macOS"
        );
        assert!(matches!(
            Platform::Windows.require_macos("open project"),
            Err(Error::PlatformUnsupported { .. })
        ));
    }

    #[test]
    fn test_current_matches_target() {
        let current = Platform::current();
        assert_eq!(current == Platform::MacOS, cfg!(target_os = "macos"));
    }
}
