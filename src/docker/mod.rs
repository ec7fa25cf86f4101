//! Containerized publish flow.
//!
//! Builds the Linux binaries inside a Docker image so the produced output
//! links against a lower glibc floor than the host might provide, then
//! runs a container that copies its internal build output into the
//! host-mounted output directory.

pub mod config;

use std::path::PathBuf;

use crate::error::{PublishError, Result};
use crate::platform::HostOs;
use crate::runner::{CommandRunner, CommandSpec};
use crate::util;

/// Paths of one containerized publish run.
#[derive(Clone, Debug)]
pub struct DockerConfig {
    /// Project root containing the Dockerfile and sources
    pub root: PathBuf,
    /// Directory receiving the copied build output
    pub output_dir: PathBuf,
}

impl DockerConfig {
    /// Creates the production configuration rooted at `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            output_dir: PathBuf::from("bin"),
        }
    }

    fn output_path(&self) -> PathBuf {
        self.root.join(&self.output_dir)
    }
}

/// Containerized publish pipeline over an injected runner.
pub struct DockerPipeline<'a> {
    config: DockerConfig,
    host: HostOs,
    runner: &'a dyn CommandRunner,
}

impl<'a> DockerPipeline<'a> {
    /// Creates a pipeline for `host` with the given runner.
    pub fn new(config: DockerConfig, host: HostOs, runner: &'a dyn CommandRunner) -> Self {
        Self {
            config,
            host,
            runner,
        }
    }

    /// Runs the full flow: reset the output directory, build the image,
    /// then run a container that copies the build output into the mount.
    ///
    /// Fails before any side effect when `host` has no containerized build
    /// descriptor.
    pub async fn run(&self) -> Result<()> {
        let dockerfile = dockerfile_for(self.host)?;
        println!("Using {} Dockerfile.", self.host);

        let output_path = self.config.output_path();
        util::fs::recreate_dir(&output_path).await?;

        self.build_image(dockerfile).await?;
        self.copy_build_output(&output_path).await
    }

    async fn build_image(&self, dockerfile: &str) -> Result<()> {
        println!("Building image {}", config::BUILD_IMAGE_NAME);
        let spec = CommandSpec::new(
            "docker",
            ["build", "-f", dockerfile, "-t", config::BUILD_IMAGE_NAME, "."],
            &self.config.root,
        );
        self.runner.run(&spec).await
    }

    async fn copy_build_output(&self, output_path: &std::path::Path) -> Result<()> {
        // The bind mount source must be absolute for the container engine
        let mount_dir = tokio::fs::canonicalize(output_path).await?;
        let mount = format!("{}:{}", mount_dir.display(), config::CONTAINER_PUBLISH_DIR);
        let publish_dest = format!("{}/", config::CONTAINER_PUBLISH_DIR);

        println!("Copying build output into {}", output_path.display());
        let spec = CommandSpec::new(
            "docker",
            [
                "run",
                "--rm",
                "-v",
                mount.as_str(),
                config::BUILD_IMAGE_NAME,
                "cp",
                "-a",
                config::CONTAINER_BIN_DIR,
                publish_dest.as_str(),
            ],
            &self.config.root,
        );
        self.runner.run(&spec).await
    }
}

/// Selects the build descriptor for a host; only Linux has one.
fn dockerfile_for(host: HostOs) -> Result<&'static str> {
    match host {
        HostOs::Linux => Ok(config::LINUX_DOCKERFILE),
        other => Err(PublishError::UnsupportedPlatform {
            os: other.name().to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_linux_has_a_dockerfile() {
        assert_eq!(dockerfile_for(HostOs::Linux).unwrap(), "Dockerfile.linux");
        assert!(dockerfile_for(HostOs::Windows).is_err());
        assert!(dockerfile_for(HostOs::MacOs).is_err());
    }
}
