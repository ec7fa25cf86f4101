//! Error types for the publish flows.
//!
//! Every fault is typed and propagated; there are no retries and no
//! partial-failure recovery, so the first error aborts the whole run.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for publisher operations
pub type Result<T> = std::result::Result<T, PublishError>;

/// Main error type for both publish flows
#[derive(Error, Debug)]
pub enum PublishError {
    /// Host operating system has no entry in the build platform table
    #[error("Unsupported platform: {os}")]
    UnsupportedPlatform {
        /// OS name as reported by the process environment
        os: String,
    },

    /// The scanned source file does not embed a runtime tag
    #[error("No AvantRuntimeTag constant found in {}", .path.display())]
    MissingVersionTag {
        /// File that was scanned
        path: PathBuf,
    },

    /// Required external tool is absent from PATH
    #[error("{tool} not found on PATH. {hint}")]
    MissingTool {
        /// Tool binary name
        tool: &'static str,
        /// Installation hint shown to the user
        hint: &'static str,
    },

    /// The publish toolchain did not produce the expected output tree
    #[error("Publish output not found at {}", .path.display())]
    MissingPublishOutput {
        /// Path that was expected to exist
        path: PathBuf,
    },

    /// External command errors
    #[error("Command error: {0}")]
    Command(#[from] CommandError),

    /// Runtime asset download errors
    #[error("Download failed: {0}")]
    Download(#[from] reqwest::Error),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Archive creation errors
    #[error("Archive error: {0}")]
    Zip(#[from] zip::result::ZipError),

    /// Directory traversal errors
    #[error("Directory walk error: {0}")]
    WalkDir(#[from] walkdir::Error),

    /// Generic errors from anyhow
    #[error("{0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Errors raised by the uniform external-command runner.
///
/// A non-zero exit is an error in its own right; the pipelines never
/// continue past a failed external step.
#[derive(Error, Debug)]
pub enum CommandError {
    /// The command could not be started at all
    #[error("Failed to start `{command}`: {source}")]
    Spawn {
        /// Rendered command line
        command: String,
        /// Underlying spawn error
        source: std::io::Error,
    },

    /// The command ran and exited with a non-zero status
    #[error("`{command}` exited with code {code}")]
    NonZeroExit {
        /// Rendered command line
        command: String,
        /// Exit code, `-1` when terminated by a signal
        code: i32,
    },
}
