//! Per-target ZIP archive creation.

use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

use crate::error::Result;

/// Compresses the full recursive contents of `src_dir` into `dest`.
///
/// Entries are rooted at `src_dir`, so the archive unpacks to the tree's
/// contents rather than a wrapping directory. Entry order is sorted for
/// deterministic output.
pub async fn zip_dir(src_dir: &Path, dest: &Path) -> Result<()> {
    let src_dir = src_dir.to_path_buf();
    let dest = dest.to_path_buf();

    // Compression is blocking work; keep it off the async runtime
    tokio::task::spawn_blocking(move || write_archive(&src_dir, &dest))
        .await
        .map_err(|e| anyhow::anyhow!("Archive task panicked: {e}"))?
}

fn write_archive(src_dir: &Path, dest: &Path) -> Result<()> {
    let file = File::create(dest)?;
    let mut zip = ZipWriter::new(file);
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

    let mut buffer = Vec::new();
    for entry in walkdir::WalkDir::new(src_dir).sort_by_file_name() {
        let entry = entry?;
        let rel_path = entry
            .path()
            .strip_prefix(src_dir)
            .map_err(|e| anyhow::anyhow!("Walked outside archive root: {e}"))?;
        if rel_path.as_os_str().is_empty() {
            continue;
        }

        // ZIP entry names always use forward slashes
        let entry_name = rel_path.to_string_lossy().replace('\\', "/");

        if entry.file_type().is_dir() {
            zip.add_directory(entry_name, options)?;
        } else {
            zip.start_file(entry_name, options)?;
            File::open(entry.path())?.read_to_end(&mut buffer)?;
            zip.write_all(&buffer)?;
            buffer.clear();
        }
    }

    zip.finish()?;
    Ok(())
}
