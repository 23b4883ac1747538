//! # File Updater Library
//!
//! This library keeps generated files of a workspace in sync with the content
//! they are supposed to have. Callers declare, for each file, how its
//! expected content is derived from its current content; the library then
//! either rewrites every file that drifted (apply mode) or fails listing them
//! (test mode, for CI).
//!
//! ## Quick Example
//!
//! ```no_run
//! use file_updater::strategy::{json, text};
//! use file_updater::{updater_with_options, FileSet, UpdaterOptions};
//! use serde_json::json;
//!
//! # async fn sync() -> file_updater::Result<()> {
//! let files = FileSet::new()
//!     .with("README.md", text(|_, _| Ok(Some("# Generated\n".to_string()))))
//!     .with(
//!         "package.json",
//!         json(|actual, _| {
//!             let mut package = actual.unwrap_or_else(|| json!({}));
//!             package["private"] = json!(true);
//!             Ok(Some(package))
//!         }),
//!     );
//!
//! let summary = updater_with_options(&files, UpdaterOptions::new().test(true)).await?;
//! assert!(!summary.has_changes());
//! # Ok(())
//! # }
//! ```
//!
//! ## Core Concepts
//!
//! - **Strategies (`strategy`)**: The read, update, equal and write policy
//!   for one file. Text and JSON strategies are built in.
//! - **File sets (`files`)**: The ordered mapping of relative paths to
//!   strategies or bare text callbacks.
//! - **Engine (`engine`)**: Evaluates every file concurrently, then checks or
//!   applies the result.
//! - **Reporting (`report`, `output`)**: The summary printed after a run.
//! - **Entry points (`updater`)**: Resolve the workspace root and options and
//!   run the engine.
//! - **Manifest (`manifest`)**: The YAML file the `file-updater` binary reads
//!   its file set from.
//!
//! ## Execution Flow
//!
//! 1.  **Resolution**: Find the workspace root from a marker file.
//! 2.  **Evaluation**: For each file, concurrently: read it if it exists,
//!     compute its expected content, compare.
//! 3.  **Handling**: In test mode fail if anything drifted; in apply mode
//!     write or delete every drifted file, one after the other.
//! 4.  **Reporting**: Print which files changed, unless quiet.

pub mod defaults;
pub mod engine;
pub mod error;
pub mod files;
pub mod filesystem;
pub mod manifest;
pub mod output;
pub mod path;
pub mod report;
pub mod strategy;
pub mod updater;
pub mod workspace;

#[cfg(test)]
mod path_proptest;
#[cfg(test)]
mod strategy_proptest;

pub use engine::{Mode, Outcome, UpdateSummary};
pub use error::{Error, Result};
pub use files::{Entry, FileSet};
pub use strategy::{json, text, FileContext, JsonStrategy, Strategy, TextStrategy};
pub use updater::{updater, updater_with_options, UpdaterOptions};
