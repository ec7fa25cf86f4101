//! Avant Runtime asset download.

use std::path::Path;

use async_trait::async_trait;

use crate::error::Result;

/// Fetches a remote asset to a local path, overwriting any existing file.
///
/// Injected into the pipeline so tests run offline. Network and filesystem
/// errors propagate; there is no retry and no partial-file cleanup.
#[async_trait]
pub trait Downloader: Send + Sync {
    /// Downloads `url` and writes the body to `dest`.
    async fn fetch(&self, url: &str, dest: &Path) -> Result<()>;
}

/// HTTP downloader over `reqwest`.
///
/// The runtime asset is small, so the body is buffered whole before the
/// write.
#[derive(Clone, Copy, Debug, Default)]
pub struct HttpDownloader;

#[async_trait]
impl Downloader for HttpDownloader {
    async fn fetch(&self, url: &str, dest: &Path) -> Result<()> {
        log::info!("Downloading {}", url);

        let response = reqwest::get(url).await?.error_for_status()?;
        let bytes = response.bytes().await?;

        if let Some(parent) = dest.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        tokio::fs::write(dest, &bytes).await?;
        Ok(())
    }
}
