//! Command line argument parsing.
//!
//! Both flows are zero-argument invocations by contract; the only option
//! is the project root override, which the tests and CI use.

use clap::Parser;
use std::path::PathBuf;

/// Native distribution publisher for Avant Open Cloud
#[derive(Parser, Debug)]
#[command(
    name = "avant_publish",
    version,
    about = "Builds Avant Open Cloud for distribution",
    long_about = "Builds Avant Open Cloud for distribution.

For every platform target of the current host, runs `dotnet publish`,
strips debug symbols from the output, and archives the result into
bin/Avant-Open-Cloud-<target>.zip. The Avant Runtime asset is downloaded
first, at the version tagged in the project sources."
)]
pub struct PublishArgs {
    /// Project root containing the Avant.Open.Cloud sources
    #[arg(long, value_name = "DIR", default_value = ".")]
    pub project_dir: PathBuf,
}

/// Containerized distribution publisher for Avant Open Cloud
#[derive(Parser, Debug)]
#[command(
    name = "avant_publish_docker",
    version,
    about = "Creates the Avant Open Cloud binaries for distribution using Docker",
    long_about = "Creates the Avant Open Cloud binaries for distribution using Docker.

For Linux, this ensures a lower glibc version can be supported: the build
runs inside an image built from Dockerfile.linux, and the container copies
its build output into the host-mounted bin/ directory."
)]
pub struct DockerArgs {
    /// Project root containing the Dockerfile and sources
    #[arg(long, value_name = "DIR", default_value = ".")]
    pub project_dir: PathBuf,
}
