//! External tool detection.
//!
//! Lazy PATH lookups for the toolchains the flows shell out to, so a
//! missing tool fails fast with an actionable message instead of a raw
//! spawn error mid-pipeline.

use std::sync::LazyLock;

use crate::error::{PublishError, Result};

/// Whether `dotnet` is available on PATH.
pub static HAS_DOTNET: LazyLock<bool> = LazyLock::new(|| detect("dotnet"));

/// Whether `docker` is available on PATH.
pub static HAS_DOCKER: LazyLock<bool> = LazyLock::new(|| detect("docker"));

fn detect(tool: &str) -> bool {
    match which::which(tool) {
        Ok(path) => {
            log::debug!("Found {} at: {}", tool, path.display());
            true
        }
        Err(e) => {
            log::debug!("{} not found in PATH: {}", tool, e);
            false
        }
    }
}

/// Fails unless the `dotnet` publish toolchain is installed.
pub fn require_dotnet() -> Result<()> {
    require(
        *HAS_DOTNET,
        "dotnet",
        "Install the .NET SDK from https://dotnet.microsoft.com/download",
    )
}

/// Fails unless the `docker` container engine is installed.
pub fn require_docker() -> Result<()> {
    require(
        *HAS_DOCKER,
        "docker",
        "Install Docker and ensure the daemon is running",
    )
}

fn require(present: bool, tool: &'static str, hint: &'static str) -> Result<()> {
    if present {
        Ok(())
    } else {
        Err(PublishError::MissingTool { tool, hint })
    }
}
