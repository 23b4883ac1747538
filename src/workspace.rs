//! Workspace root resolution
//!
//! The workspace root is the directory every declared file path is resolved
//! against. It is recognized by the presence of a marker file directly inside
//! it; parent directories are not searched.

use std::path::{Path, PathBuf};

use log::debug;

use crate::defaults;
use crate::error::{Error, Result};

/// Accept `dir` as the workspace root if it contains one of `markers`.
pub fn find_workspace_dir(dir: &Path, markers: &[String]) -> Result<PathBuf> {
    for marker in markers {
        if dir.join(marker).is_file() {
            debug!("Found workspace marker '{}' in {}", marker, dir.display());
            return Ok(dir.to_path_buf());
        }
    }

    Err(Error::WorkspaceNotFound {
        dir: dir.to_path_buf(),
        markers: markers.to_vec(),
    })
}

/// Resolve the workspace root from the current working directory using the
/// default markers.
pub fn current_workspace_dir() -> Result<PathBuf> {
    let cwd = std::env::current_dir()?;
    find_workspace_dir(&cwd, &defaults::workspace_markers())
}
