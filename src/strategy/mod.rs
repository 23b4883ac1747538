//! # Content Strategies
//!
//! A strategy is the policy used to reconcile one file. It bundles four
//! operations over a `Content` type:
//!
//! - `read`: load the current content. Only called when the file exists.
//! - `update`: compute the expected content from the current one (`None` when
//!   the file is missing). Returning `None` means the file should not exist.
//! - `equal`: compare expected and actual content. Only called when both are
//!   present.
//! - `write`: persist the expected content. Only called in apply mode, for a
//!   drifted file whose expected content is present.
//!
//! Two strategies are built in:
//!
//! - [`text`]: the file is a UTF-8 string compared exactly.
//! - [`json()`]: the file is a JSON document compared by its compact
//!   serialization (key order matters, whitespace does not) and written with
//!   4-space indentation and a trailing newline.
//!
//! Any type implementing [`Strategy`] can be used directly for everything
//! else.
//!
//! ## Example
//!
//! ```
//! use file_updater::strategy::{json, text};
//! use serde_json::json;
//!
//! let readme = text(|_actual, _ctx| Ok(Some("# Generated\n".to_string())));
//! let manifest = json(|actual, _ctx| {
//!     let mut value = actual.unwrap_or_else(|| json!({}));
//!     value["private"] = json!(true);
//!     Ok(Some(value))
//! });
//! # let _ = (readme, manifest);
//! ```

pub mod json;
pub mod text;

use std::path::{Path, PathBuf};

use async_trait::async_trait;

use crate::error::Result;

pub use json::{json, JsonStrategy};
pub use text::{text, TextStrategy};

/// Where the file being reconciled lives
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileContext {
    /// The path as declared by the caller, relative to the workspace root
    pub file: String,
    /// The resolved path on disk
    pub path: PathBuf,
}

/// Read/update/equal/write policy for a single file.
///
/// Every operation may suspend. Within one file the engine always completes
/// `read` before `update`, and `update` before `equal`; different files are
/// evaluated concurrently with no ordering between them.
#[async_trait]
pub trait Strategy: Send + Sync + 'static {
    /// In-memory representation of the file
    type Content: Clone + Send + Sync + 'static;

    /// Load the current content of an existing file.
    async fn read(&self, path: &Path) -> Result<Self::Content>;

    /// Compute the expected content. `actual` is `None` when the file is
    /// missing; returning `None` means the file should not exist.
    async fn update(
        &self,
        actual: Option<Self::Content>,
        ctx: &FileContext,
    ) -> Result<Option<Self::Content>>;

    /// Whether `expected` and `actual` represent the same content.
    async fn equal(&self, expected: &Self::Content, actual: &Self::Content) -> Result<bool>;

    /// Persist `expected`. Parent directories already exist.
    async fn write(&self, path: &Path, expected: &Self::Content) -> Result<()>;
}
