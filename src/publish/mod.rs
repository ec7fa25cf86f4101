//! Native publish flow.
//!
//! Drives the `dotnet publish` toolchain once per platform target for the
//! current host, strips debug symbols from each output tree, and archives
//! each tree into the output directory. Steps run strictly in sequence and
//! the first failure aborts the run.

pub mod archive;
mod download;
mod version;

pub use download::{Downloader, HttpDownloader};
pub use version::{extract_runtime_tag, resolve_runtime_tag};

use std::path::{Path, PathBuf};

use crate::error::{PublishError, Result};
use crate::platform::{self, HostOs, PlatformTarget};
use crate::runner::{CommandRunner, CommandSpec};
use crate::util;

/// File extensions removed from publish output before archiving.
pub const FILE_EXTENSIONS_TO_CLEAR: &[&str] = &[".pdb", ".dbg"];

/// Paths and constants of one publish run, relative to the project root.
///
/// The defaults describe the real repository layout; tests point `root` at
/// a seeded temporary directory.
#[derive(Clone, Debug)]
pub struct PublishConfig {
    /// Project root containing the Avant Open Cloud sources
    pub root: PathBuf,
    /// Source file scanned for the embedded runtime tag
    pub tag_source: PathBuf,
    /// Destination of the downloaded Avant Runtime asset
    pub runtime_asset: PathBuf,
    /// Release asset URL template; `{tag}` is replaced with the resolved tag
    pub runtime_url_template: String,
    /// Project file handed to `dotnet publish`
    pub project_file: PathBuf,
    /// Root of the per-configuration build output tree
    pub release_root: PathBuf,
    /// Directory receiving the final archives
    pub output_dir: PathBuf,
    /// Prefix of produced archive names
    pub archive_prefix: String,
}

impl PublishConfig {
    /// Creates the production configuration rooted at `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            tag_source: PathBuf::from("Avant.Open.Cloud/Action/RojoBuild.cs"),
            runtime_asset: PathBuf::from("Avant.Open.Cloud/Resources/AvantRuntime.rbxmx"),
            runtime_url_template:
                "https://github.com/Avant-Rbx/Avant-Runtime/releases/download/{tag}/AvantRuntime.rbxmx"
                    .to_string(),
            project_file: PathBuf::from("Avant.Open.Cloud/Avant.Open.Cloud.csproj"),
            release_root: PathBuf::from("Avant.Open.Cloud/bin/Release"),
            output_dir: PathBuf::from("bin"),
            archive_prefix: "Avant-Open-Cloud".to_string(),
        }
    }

    fn tag_source_path(&self) -> PathBuf {
        self.root.join(&self.tag_source)
    }

    fn runtime_asset_path(&self) -> PathBuf {
        self.root.join(&self.runtime_asset)
    }

    fn release_root_path(&self) -> PathBuf {
        self.root.join(&self.release_root)
    }

    fn output_path(&self) -> PathBuf {
        self.root.join(&self.output_dir)
    }
}

/// Native publish pipeline over injected collaborators.
pub struct PublishPipeline<'a> {
    config: PublishConfig,
    host: HostOs,
    runner: &'a dyn CommandRunner,
    downloader: &'a dyn Downloader,
}

impl<'a> PublishPipeline<'a> {
    /// Creates a pipeline for `host` with the given collaborators.
    pub fn new(
        config: PublishConfig,
        host: HostOs,
        runner: &'a dyn CommandRunner,
        downloader: &'a dyn Downloader,
    ) -> Self {
        Self {
            config,
            host,
            runner,
            downloader,
        }
    }

    /// Runs the full flow: resolve tag, download runtime, reset output,
    /// then publish, clean, and archive every target in table order.
    pub async fn run(&self) -> Result<()> {
        let targets = platform::build_targets(self.host);

        let tag = resolve_runtime_tag(&self.config.tag_source_path()).await?;
        self.download_runtime(&tag).await?;

        util::fs::recreate_dir(&self.config.output_path()).await?;

        for target in targets {
            self.publish_target(target).await?;

            let publish_dir = self.locate_publish_output(target)?;
            let removed =
                util::fs::clear_files_with_extensions(&publish_dir, FILE_EXTENSIONS_TO_CLEAR)
                    .await?;
            log::debug!("Removed {} debug symbol file(s) for {}", removed, target.name);

            self.archive_target(target, &publish_dir).await?;
        }

        Ok(())
    }

    async fn download_runtime(&self, tag: &str) -> Result<()> {
        let url = self.config.runtime_url_template.replace("{tag}", tag);
        println!("Downloading Avant Runtime from {url}");
        self.downloader
            .fetch(&url, &self.config.runtime_asset_path())
            .await
    }

    async fn publish_target(&self, target: &PlatformTarget) -> Result<()> {
        println!("Building for {}", target.name);
        let project_file = self.config.project_file.to_string_lossy();
        let spec = CommandSpec::new(
            "dotnet",
            [
                "publish",
                "-r",
                target.runtime,
                "-c",
                "Release",
                project_file.as_ref(),
            ],
            &self.config.root,
        );
        self.runner.run(&spec).await
    }

    /// Locates `Release/<tfm>/<runtime>/publish/` for a just-published
    /// target. The target framework directory is whichever subdirectory of
    /// `Release/` sorts first, which is stable for a single-framework
    /// project.
    fn locate_publish_output(&self, target: &PlatformTarget) -> Result<PathBuf> {
        let release_root = self.config.release_root_path();

        let mut framework_dirs: Vec<PathBuf> = std::fs::read_dir(&release_root)
            .map_err(|_| PublishError::MissingPublishOutput {
                path: release_root.clone(),
            })?
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.path())
            .filter(|path| path.is_dir())
            .collect();
        framework_dirs.sort();

        let framework_dir =
            framework_dirs
                .into_iter()
                .next()
                .ok_or(PublishError::MissingPublishOutput {
                    path: release_root,
                })?;

        let publish_dir = framework_dir.join(target.runtime).join("publish");
        if !publish_dir.is_dir() {
            return Err(PublishError::MissingPublishOutput { path: publish_dir });
        }
        Ok(publish_dir)
    }

    async fn archive_target(&self, target: &PlatformTarget, publish_dir: &Path) -> Result<()> {
        let archive_path = self
            .config
            .output_path()
            .join(format!("{}-{}.zip", self.config.archive_prefix, target.name));
        archive::zip_dir(publish_dir, &archive_path).await?;
        println!("Created {}", archive_path.display());
        Ok(())
    }
}
