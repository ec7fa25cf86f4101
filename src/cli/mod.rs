//! Command line entry points for the two publish flows.
//!
//! Each entry point detects the host, checks the required toolchain is
//! installed, and runs its pipeline with the production collaborators.

mod args;

pub use args::{DockerArgs, PublishArgs};

use crate::docker::{DockerConfig, DockerPipeline};
use crate::error::Result;
use crate::platform::HostOs;
use crate::publish::{HttpDownloader, PublishConfig, PublishPipeline};
use crate::runner::SystemRunner;
use crate::util::tools;

/// Runs the native publish flow.
pub async fn run_publish(args: PublishArgs) -> Result<i32> {
    let host = HostOs::current()?;
    tools::require_dotnet()?;

    let runner = SystemRunner;
    let downloader = HttpDownloader;
    let pipeline = PublishPipeline::new(
        PublishConfig::new(args.project_dir),
        host,
        &runner,
        &downloader,
    );
    pipeline.run().await?;
    Ok(0)
}

/// Runs the containerized publish flow.
pub async fn run_docker(args: DockerArgs) -> Result<i32> {
    let host = HostOs::current()?;
    tools::require_docker()?;

    let runner = SystemRunner;
    let pipeline = DockerPipeline::new(DockerConfig::new(args.project_dir), host, &runner);
    pipeline.run().await?;
    Ok(0)
}
