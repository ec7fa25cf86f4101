//! Distribution publisher for Avant Open Cloud.
//!
//! Two independent flows produce distributable binaries:
//!
//! - the **native flow** runs `dotnet publish` once per platform target of
//!   the current host, strips debug symbols from each output tree, and
//!   archives each tree under `bin/`;
//! - the **containerized flow** builds the Linux binaries inside a Docker
//!   image so they link against a lower glibc floor than the host, with
//!   the container copying its build output into the mounted `bin/`.
//!
//! Both flows are sequential pipelines of named steps over injected
//! collaborators (a command runner and a downloader), and the first failed
//! step aborts the run.

pub mod cli;
pub mod docker;
pub mod error;
pub mod platform;
pub mod publish;
pub mod runner;
pub mod util;

// Re-export commonly used types
pub use error::{CommandError, PublishError, Result};
