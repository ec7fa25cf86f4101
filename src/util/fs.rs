//! Filesystem helpers shared by both publish flows.

use std::io;
use std::path::Path;

use tokio::fs;

use crate::error::Result;

/// Removes the directory tree if present, then creates it fresh.
///
/// Guarantees the directory exists and holds no stale content from a prior
/// run. Removal of a missing directory is tolerated (idempotent).
pub async fn recreate_dir(path: &Path) -> Result<()> {
    match fs::remove_dir_all(path).await {
        Ok(()) => {}
        Err(e) if e.kind() == io::ErrorKind::NotFound => {}
        Err(e) => return Err(e.into()),
    }
    fs::create_dir_all(path).await?;
    Ok(())
}

/// Deletes every file under `root` whose name ends in one of `extensions`.
///
/// Directories and non-matching files are untouched. Returns the number of
/// files removed.
pub async fn clear_files_with_extensions(root: &Path, extensions: &[&str]) -> Result<usize> {
    let root = root.to_path_buf();
    let extensions: Vec<String> = extensions.iter().map(|e| (*e).to_string()).collect();

    // Offload blocking traversal to the dedicated thread pool
    tokio::task::spawn_blocking(move || -> Result<usize> {
        let mut removed = 0;
        for entry in walkdir::WalkDir::new(&root) {
            let entry = entry?;
            if !entry.file_type().is_file() {
                continue;
            }
            let name = entry.file_name().to_string_lossy();
            if extensions.iter().any(|ext| name.ends_with(ext.as_str())) {
                log::debug!("Removing {}", entry.path().display());
                std::fs::remove_file(entry.path())?;
                removed += 1;
            }
        }
        Ok(removed)
    })
    .await
    .map_err(|e| anyhow::anyhow!("Cleanup task panicked: {e}"))?
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn recreate_dir_discards_stale_content() {
        let dir = TempDir::new().unwrap();
        let target = dir.path().join("bin");
        std::fs::create_dir_all(target.join("nested")).unwrap();
        std::fs::write(target.join("stale.zip"), b"old").unwrap();
        std::fs::write(target.join("nested/stale.txt"), b"old").unwrap();

        recreate_dir(&target).await.unwrap();

        assert!(target.is_dir());
        assert_eq!(std::fs::read_dir(&target).unwrap().count(), 0);
    }

    #[tokio::test]
    async fn recreate_dir_creates_missing_dir() {
        let dir = TempDir::new().unwrap();
        let target = dir.path().join("bin");

        recreate_dir(&target).await.unwrap();

        assert!(target.is_dir());
    }

    #[tokio::test]
    async fn cleanup_removes_only_matching_extensions() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("app.exe"), b"binary").unwrap();
        std::fs::write(dir.path().join("app.pdb"), b"symbols").unwrap();
        std::fs::create_dir(dir.path().join("lib")).unwrap();
        std::fs::write(dir.path().join("lib/native.dbg"), b"symbols").unwrap();
        std::fs::write(dir.path().join("lib/native.so"), b"binary").unwrap();

        let removed = clear_files_with_extensions(dir.path(), &[".pdb", ".dbg"])
            .await
            .unwrap();

        assert_eq!(removed, 2);
        assert!(dir.path().join("app.exe").exists());
        assert!(dir.path().join("lib/native.so").exists());
        assert!(!dir.path().join("app.pdb").exists());
        assert!(!dir.path().join("lib/native.dbg").exists());
    }
}
