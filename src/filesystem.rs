//! Async filesystem primitives used by the built-in strategies and the engine
//!
//! These are thin wrappers over `tokio::fs` that attach the offending path to
//! every error. They carry no reconciliation logic.

use std::path::Path;

use serde::de::DeserializeOwned;

use crate::error::{Error, Result};

const BYTE_ORDER_MARK: char = '\u{feff}';

/// Check whether a file or directory exists at `path`
pub async fn exists(path: &Path) -> Result<bool> {
    tokio::fs::try_exists(path)
        .await
        .map_err(|e| Error::Filesystem {
            message: format!("Failed to check '{}': {}", path.display(), e),
        })
}

/// Read the raw bytes of a file
pub async fn read_bytes(path: &Path) -> Result<Vec<u8>> {
    tokio::fs::read(path).await.map_err(|e| Error::Filesystem {
        message: format!("Failed to read file '{}': {}", path.display(), e),
    })
}

/// Read a file as UTF-8 text, replacing invalid sequences.
///
/// A leading byte-order mark is preserved.
pub async fn read_text(path: &Path) -> Result<String> {
    let bytes = read_bytes(path).await?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Read and parse a JSON file, skipping a leading byte-order mark
pub async fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let text = read_text(path).await?;
    let data = text.strip_prefix(BYTE_ORDER_MARK).unwrap_or(&text);
    serde_json::from_str(data).map_err(|e| Error::JsonParse {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Write a string to a file verbatim, replacing any previous content
pub async fn write_text(path: &Path, text: &str) -> Result<()> {
    tokio::fs::write(path, text.as_bytes())
        .await
        .map_err(|e| Error::Filesystem {
            message: format!("Failed to write file '{}': {}", path.display(), e),
        })
}

/// Delete a file
pub async fn remove_file(path: &Path) -> Result<()> {
    tokio::fs::remove_file(path)
        .await
        .map_err(|e| Error::Filesystem {
            message: format!("Failed to remove file '{}': {}", path.display(), e),
        })
}

/// Create a directory and all missing parents
pub async fn make_dirs(path: &Path) -> Result<()> {
    tokio::fs::create_dir_all(path)
        .await
        .map_err(|e| Error::Filesystem {
            message: format!("Failed to create directory '{}': {}", path.display(), e),
        })
}
