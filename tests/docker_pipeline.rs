//! Containerized publish flow command sequencing against a recording runner.

use std::sync::Mutex;

use async_trait::async_trait;
use tempfile::TempDir;

use avant_publish::docker::{DockerConfig, DockerPipeline};
use avant_publish::error::{PublishError, Result};
use avant_publish::platform::HostOs;
use avant_publish::runner::{CommandRunner, CommandSpec};

/// Records every invocation; optionally fails the nth one.
struct RecordingRunner {
    invocations: Mutex<Vec<CommandSpec>>,
    fail_at: Option<usize>,
}

impl RecordingRunner {
    fn new() -> Self {
        Self {
            invocations: Mutex::new(Vec::new()),
            fail_at: None,
        }
    }

    fn failing_at(index: usize) -> Self {
        Self {
            invocations: Mutex::new(Vec::new()),
            fail_at: Some(index),
        }
    }
}

#[async_trait]
impl CommandRunner for RecordingRunner {
    async fn run(&self, spec: &CommandSpec) -> Result<()> {
        let mut invocations = self.invocations.lock().unwrap();
        let index = invocations.len();
        invocations.push(spec.clone());
        if self.fail_at == Some(index) {
            return Err(avant_publish::CommandError::NonZeroExit {
                command: spec.display(),
                code: 1,
            }
            .into());
        }
        Ok(())
    }
}

#[tokio::test]
async fn builds_image_then_copies_output() {
    let dir = TempDir::new().unwrap();

    // Stale content from a prior run must be discarded before the build
    std::fs::create_dir_all(dir.path().join("bin")).unwrap();
    std::fs::write(dir.path().join("bin/stale.zip"), b"old").unwrap();

    let runner = RecordingRunner::new();
    let pipeline = DockerPipeline::new(DockerConfig::new(dir.path()), HostOs::Linux, &runner);
    pipeline.run().await.unwrap();

    assert!(!dir.path().join("bin/stale.zip").exists());

    let invocations = runner.invocations.lock().unwrap();
    assert_eq!(invocations.len(), 2);

    assert_eq!(invocations[0].program, "docker");
    assert_eq!(
        invocations[0].args,
        vec![
            "build",
            "-f",
            "Dockerfile.linux",
            "-t",
            "avant-open-cloud-build",
            "."
        ]
    );
    assert_eq!(invocations[0].current_dir, dir.path());

    let bin_mount = format!(
        "{}:/publish",
        dir.path().join("bin").canonicalize().unwrap().display()
    );
    assert_eq!(invocations[1].program, "docker");
    assert_eq!(
        invocations[1].args,
        vec![
            "run",
            "--rm",
            "-v",
            bin_mount.as_str(),
            "avant-open-cloud-build",
            "cp",
            "-a",
            "/build/bin/.",
            "/publish/"
        ]
    );
}

#[tokio::test]
async fn failed_image_build_aborts_before_container_run() {
    let dir = TempDir::new().unwrap();

    let runner = RecordingRunner::failing_at(0);
    let pipeline = DockerPipeline::new(DockerConfig::new(dir.path()), HostOs::Linux, &runner);

    let err = pipeline.run().await.unwrap_err();
    assert!(err.to_string().contains("exited with code 1"));
    assert_eq!(runner.invocations.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn unsupported_host_fails_before_any_side_effect() {
    let dir = TempDir::new().unwrap();
    std::fs::create_dir_all(dir.path().join("bin")).unwrap();
    std::fs::write(dir.path().join("bin/stale.zip"), b"old").unwrap();

    let runner = RecordingRunner::new();
    let pipeline = DockerPipeline::new(DockerConfig::new(dir.path()), HostOs::Windows, &runner);

    let err = pipeline.run().await.unwrap_err();
    assert!(matches!(err, PublishError::UnsupportedPlatform { .. }));

    assert!(runner.invocations.lock().unwrap().is_empty());
    assert!(dir.path().join("bin/stale.zip").is_file());
}
