//! Default values for file-updater.
//!
//! This module provides centralized default values used by the library and
//! the CLI, ensuring consistency and avoiding duplication.

/// File name of the project-local manifest read by the CLI.
///
/// Can be overridden by the `--manifest` CLI flag or the
/// `FILE_UPDATER_MANIFEST` environment variable.
pub const MANIFEST_FILE: &str = ".file-updater.yaml";

/// Marker files that identify a workspace root.
///
/// A directory is accepted as the workspace root when it contains any of them.
pub const WORKSPACE_MARKERS: &[&str] = &["package.json", "Cargo.toml"];

/// Indentation used when writing JSON files.
pub const JSON_INDENT: &[u8] = b"    ";

/// Returns the default workspace markers as owned strings.
pub fn workspace_markers() -> Vec<String> {
    WORKSPACE_MARKERS.iter().map(|m| m.to_string()).collect()
}
