//! Runtime tag resolution.
//!
//! The Avant Runtime version is embedded as a string constant in the Rojo
//! build action source; the release asset URL is derived from it.

use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::{PublishError, Result};

static RUNTIME_TAG_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"AvantRuntimeTag = "([^"]+)""#).expect("valid pattern"));

/// Extracts the Avant Runtime tag from source text.
///
/// `origin` names the scanned file in the error when the constant is
/// absent.
pub fn extract_runtime_tag(source: &str, origin: &Path) -> Result<String> {
    RUNTIME_TAG_PATTERN
        .captures(source)
        .map(|captures| captures[1].to_string())
        .ok_or_else(|| PublishError::MissingVersionTag {
            path: origin.to_path_buf(),
        })
}

/// Reads the tag source file and extracts the runtime tag from it.
pub async fn resolve_runtime_tag(path: &Path) -> Result<String> {
    let source = tokio::fs::read_to_string(path).await?;
    extract_runtime_tag(&source, path)
}
