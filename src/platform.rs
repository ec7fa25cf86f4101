//! Host detection and the static build platform table.
//!
//! The table maps each recognized host operating system to the ordered list
//! of platform targets published from that host. It is fixed at compile
//! time; an unrecognized host fails detection before any side effect.

use crate::error::{PublishError, Result};

/// Host operating systems with an entry in the build platform table.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum HostOs {
    /// Windows hosts, publishing the win-x64 target
    Windows,
    /// macOS hosts, publishing the Intel and Apple Silicon targets
    MacOs,
    /// Linux hosts, publishing the linux-x64 target
    Linux,
}

impl HostOs {
    /// Detects the host from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`PublishError::UnsupportedPlatform`] when the compiled-for
    /// OS has no build platform table entry.
    pub fn current() -> Result<Self> {
        Self::from_os_name(std::env::consts::OS)
    }

    /// Maps a `std::env::consts::OS` style name to a recognized host.
    pub fn from_os_name(os: &str) -> Result<Self> {
        match os {
            "windows" => Ok(Self::Windows),
            "macos" => Ok(Self::MacOs),
            "linux" => Ok(Self::Linux),
            other => Err(PublishError::UnsupportedPlatform {
                os: other.to_string(),
            }),
        }
    }

    /// Display name used in console messages.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Windows => "Windows",
            Self::MacOs => "macOS",
            Self::Linux => "Linux",
        }
    }
}

impl std::fmt::Display for HostOs {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// One compilation output: display name plus publish runtime identifier.
///
/// The name feeds the archive file name; the runtime identifier is passed
/// verbatim to `dotnet publish -r`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct PlatformTarget {
    /// Human-facing target name, e.g. `Linux-x64`
    pub name: &'static str,
    /// Toolchain runtime identifier, e.g. `linux-x64`
    pub runtime: &'static str,
}

const WINDOWS_TARGETS: &[PlatformTarget] = &[PlatformTarget {
    name: "Windows-x64",
    runtime: "win-x64",
}];

const MACOS_TARGETS: &[PlatformTarget] = &[
    PlatformTarget {
        name: "macOS-x64",
        runtime: "osx-x64",
    },
    PlatformTarget {
        name: "macOS-ARM64",
        runtime: "osx-arm64",
    },
];

const LINUX_TARGETS: &[PlatformTarget] = &[PlatformTarget {
    name: "Linux-x64",
    runtime: "linux-x64",
}];

/// Ordered build targets for a recognized host.
pub fn build_targets(host: HostOs) -> &'static [PlatformTarget] {
    match host {
        HostOs::Windows => WINDOWS_TARGETS,
        HostOs::MacOs => MACOS_TARGETS,
        HostOs::Linux => LINUX_TARGETS,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_host_has_targets() {
        for host in [HostOs::Windows, HostOs::MacOs, HostOs::Linux] {
            assert!(!build_targets(host).is_empty());
        }
    }

    #[test]
    fn table_order_is_fixed() {
        let targets = build_targets(HostOs::MacOs);
        assert_eq!(targets[0].name, "macOS-x64");
        assert_eq!(targets[0].runtime, "osx-x64");
        assert_eq!(targets[1].name, "macOS-ARM64");
        assert_eq!(targets[1].runtime, "osx-arm64");

        assert_eq!(build_targets(HostOs::Windows)[0].runtime, "win-x64");
        assert_eq!(build_targets(HostOs::Linux)[0].runtime, "linux-x64");
    }

    #[test]
    fn lookup_is_deterministic() {
        assert_eq!(build_targets(HostOs::Linux), build_targets(HostOs::Linux));
    }

    #[test]
    fn unrecognized_os_is_rejected() {
        let err = HostOs::from_os_name("freebsd").unwrap_err();
        assert!(matches!(
            err,
            PublishError::UnsupportedPlatform { ref os } if os == "freebsd"
        ));
    }
}
