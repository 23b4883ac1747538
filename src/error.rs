//! # Error Handling
//!
//! This module defines the centralized error type for `file-updater`. It uses
//! the `thiserror` library to build an `Error` enum covering every failure an
//! invocation can end with, each carrying the path or directory involved.
//!
//! ## Key Components
//!
//! - **`Error`**: All possible errors. Callers that need to tell kinds apart
//!   match on the variant; everyone else just prints it.
//!
//! - **`Result<T>`**: A type alias for `std::result::Result<T, Error>`.
//!
//! No error is caught and suppressed inside the library. Every variant
//! propagates to the invocation boundary, where the CLI prints
//! `ERROR: <message>` and exits with status 1.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for file-updater operations
#[derive(Error, Debug)]
pub enum Error {
    /// None of the marker files were found in the candidate workspace directory.
    #[error("Can't find workspace root containing {} at '{}'", quote_list(markers), dir.display())]
    WorkspaceNotFound { dir: PathBuf, markers: Vec<String> },

    /// The project-local manifest consumed by the CLI does not exist.
    #[error("Can't find file '{file}' in '{}'", dir.display())]
    EntryNotFound { file: String, dir: PathBuf },

    /// The manifest exists but could not be understood.
    #[error("Manifest error: {message}{}", hint.as_ref().map(|h| format!("\n  hint: {}", h)).unwrap_or_default())]
    Manifest {
        message: String,
        /// Optional hint for how to fix the manifest
        hint: Option<String>,
    },

    /// A strategy failed to read the current content of a file.
    #[error("Failed to read '{path}': {message}")]
    Read { path: String, message: String },

    /// A strategy failed to compute the expected content of a file.
    #[error("Failed to update '{path}': {message}")]
    Update { path: String, message: String },

    /// A strategy failed to compare expected and actual content.
    #[error("Failed to compare '{path}': {message}")]
    Compare { path: String, message: String },

    /// One or more files differ from their expected content in test mode.
    ///
    /// The message lists every drifted path, one per line.
    #[error("{}", crate::report::summary_lines(paths).join("\n"))]
    DriftDetected { paths: Vec<String> },

    /// Writing or deleting a drifted file failed in apply mode.
    #[error("Failed to write '{path}': {message}")]
    Write { path: String, message: String },

    /// A file did not contain valid JSON.
    #[error("JSON parsing error in '{}': {message}", path.display())]
    JsonParse { path: PathBuf, message: String },

    /// An error occurred with a filesystem primitive.
    #[error("Filesystem operation error: {message}")]
    Filesystem { message: String },

    /// An error occurred during serialization.
    #[error("Serialization error: {message}")]
    Serialization { message: String },

    /// An error raised by a caller-supplied callback.
    #[error("{message}")]
    Callback { message: String },

    /// An I/O error, wrapped from `std::io::Error`.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A YAML parsing error, wrapped from `serde_yaml::Error`.
    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl Error {
    /// Build a [`Error::Callback`] from anything printable.
    ///
    /// Meant for use inside update callbacks:
    /// `return Err(Error::callback("version is missing"))`.
    pub fn callback(message: impl std::fmt::Display) -> Self {
        Error::Callback {
            message: message.to_string(),
        }
    }
}

/// A convenient type alias for `Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;

fn quote_list(items: &[String]) -> String {
    items
        .iter()
        .map(|item| format!("'{}'", item))
        .collect::<Vec<_>>()
        .join(" or ")
}
