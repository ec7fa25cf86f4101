//! Uniform external-command execution.
//!
//! Both publish flows drive external toolchains (`dotnet`, `docker`)
//! through the [`CommandRunner`] trait so the pipelines can be exercised in
//! tests without the real tools. The production [`SystemRunner`] streams
//! child output to the console and turns a non-zero exit into an error, so
//! a failed external step always aborts the run.

use std::path::PathBuf;
use std::process::Stdio;

use async_trait::async_trait;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::process::Command;

use crate::error::{CommandError, Result};

/// A fully specified external command invocation.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CommandSpec {
    /// Program name resolved via PATH
    pub program: String,
    /// Arguments in invocation order
    pub args: Vec<String>,
    /// Working directory the command runs from
    pub current_dir: PathBuf,
}

impl CommandSpec {
    /// Creates a spec from a program, its arguments, and a working directory.
    pub fn new(
        program: impl Into<String>,
        args: impl IntoIterator<Item = impl Into<String>>,
        current_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
            current_dir: current_dir.into(),
        }
    }

    /// Rendered command line used in progress and error messages.
    pub fn display(&self) -> String {
        let mut rendered = self.program.clone();
        for arg in &self.args {
            rendered.push(' ');
            rendered.push_str(arg);
        }
        rendered
    }
}

/// Runs external commands to completion.
///
/// Implementations return `Err` on spawn failure or non-zero exit; callers
/// rely on that to stop the pipeline at the first failed step. There is no
/// timeout: a hanging tool blocks the run, matching the synchronous
/// one-command-at-a-time execution model.
#[async_trait]
pub trait CommandRunner: Send + Sync {
    /// Runs the command and waits for it to finish.
    async fn run(&self, spec: &CommandSpec) -> Result<()>;
}

/// Production runner over `tokio::process`.
///
/// Child stdout and stderr are piped and streamed line-by-line while the
/// command runs, indented under the progress message that announced it.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemRunner;

#[async_trait]
impl CommandRunner for SystemRunner {
    async fn run(&self, spec: &CommandSpec) -> Result<()> {
        log::debug!("Running `{}` in {}", spec.display(), spec.current_dir.display());

        let mut child = Command::new(&spec.program)
            .args(&spec.args)
            .current_dir(&spec.current_dir)
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| CommandError::Spawn {
                command: spec.display(),
                source: e,
            })?;

        let stdout = child.stdout.take();
        let stderr = child.stderr.take();

        // Drain both pipes concurrently so neither side can fill up and
        // stall the child.
        tokio::join!(
            async {
                if let Some(stdout) = stdout {
                    let mut lines = BufReader::new(stdout).lines();
                    while let Ok(Some(line)) = lines.next_line().await {
                        println!("  {line}");
                    }
                }
            },
            async {
                if let Some(stderr) = stderr {
                    let mut lines = BufReader::new(stderr).lines();
                    while let Ok(Some(line)) = lines.next_line().await {
                        eprintln!("  {line}");
                    }
                }
            }
        );

        let status = child.wait().await.map_err(|e| CommandError::Spawn {
            command: spec.display(),
            source: e,
        })?;

        if !status.success() {
            return Err(CommandError::NonZeroExit {
                command: spec.display(),
                code: status.code().unwrap_or(-1),
            }
            .into());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_renders_program_and_args() {
        let spec = CommandSpec::new("docker", ["build", "-t", "image"], ".");
        assert_eq!(spec.display(), "docker build -t image");
    }

    #[tokio::test]
    async fn spawn_failure_is_reported() {
        let spec = CommandSpec::new("definitely-not-a-real-tool-427", ["--version"], ".");
        let err = SystemRunner.run(&spec).await.unwrap_err();
        assert!(err.to_string().contains("Failed to start"));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn non_zero_exit_is_an_error() {
        let spec = CommandSpec::new("sh", ["-c", "exit 3"], ".");
        let err = SystemRunner.run(&spec).await.unwrap_err();
        assert!(err.to_string().contains("exited with code 3"));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn zero_exit_succeeds() {
        let spec = CommandSpec::new("sh", ["-c", "true"], ".");
        SystemRunner.run(&spec).await.unwrap();
    }
}
