//! # Reconciliation Engine
//!
//! The engine takes a [`FileSet`] and a workspace root, works out which files
//! have drifted from their expected content, and then either fails (test
//! mode) or rewrites them (apply mode).
//!
//! ## Evaluation
//!
//! Every entry is evaluated independently:
//!
//! 1.  Resolve the declared path against the workspace root.
//! 2.  If the file exists, `read` it; otherwise the actual content is `None`.
//! 3.  Call `update` with the actual content to get the expected content.
//! 4.  The file is unchanged when both sides are `None`, or when both are
//!     present and `equal` says so. Every other combination is drift.
//!
//! All entries are evaluated concurrently on the calling task and joined; the
//! first error fails the whole batch and no partial result is returned.
//!
//! ## Aggregation
//!
//! Drifted outcomes keep declaration order. In test mode nothing is written
//! and [`Error::DriftDetected`] lists every drifted path. In apply mode the
//! deferred writes run one after another once evaluation has finished; the
//! first failing write stops the remaining ones.

use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;
use futures::future::{try_join_all, BoxFuture, FutureExt};
use log::{debug, info};

use crate::error::{Error, Result};
use crate::files::FileSet;
use crate::filesystem;
use crate::path;
use crate::report::Reporter;
use crate::strategy::{FileContext, Strategy};

/// What to do with drifted files
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Write or delete drifted files
    #[default]
    Apply,
    /// Fail if any file drifted, never touch the filesystem
    Test,
}

/// Result of evaluating one file
pub struct Outcome {
    path: String,
    equal: bool,
    write: BoxFuture<'static, Result<()>>,
}

impl Outcome {
    /// Forward-slash path of the file relative to the workspace root
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Whether the file already matches its expected content
    pub fn is_equal(&self) -> bool {
        self.equal
    }

    /// Bring the file in line with its expected content: delete it when it
    /// should not exist, otherwise create parent directories and write it.
    ///
    /// Nothing happens until the returned future is awaited.
    pub async fn write(self) -> Result<()> {
        self.write.await
    }
}

impl fmt::Debug for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Outcome")
            .field("path", &self.path)
            .field("equal", &self.equal)
            .finish_non_exhaustive()
    }
}

/// What a successful invocation did
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateSummary {
    /// Drifted paths, in declaration order
    pub changed: Vec<String>,
    /// Whether the drifted files were written
    pub applied: bool,
}

impl UpdateSummary {
    pub fn has_changes(&self) -> bool {
        !self.changed.is_empty()
    }
}

/// Object-safe view of a [`Strategy`] with its content type erased.
#[async_trait]
pub(crate) trait Reconcile: Send + Sync {
    async fn evaluate(&self, root: &Path, file: &str) -> Result<Outcome>;
}

/// Adapter turning any [`Strategy`] into a [`Reconcile`]
pub(crate) struct Erased<S>(Arc<S>);

impl<S: Strategy> Erased<S> {
    pub(crate) fn new(strategy: S) -> Self {
        Self(Arc::new(strategy))
    }
}

#[async_trait]
impl<S: Strategy> Reconcile for Erased<S> {
    async fn evaluate(&self, root: &Path, file: &str) -> Result<Outcome> {
        let strategy = &self.0;
        let resolved = path::resolve(root, file);
        let label = path::display_path(root, &resolved);

        let actual = if filesystem::exists(&resolved).await? {
            let content = strategy.read(&resolved).await.map_err(|e| Error::Read {
                path: label.clone(),
                message: e.to_string(),
            })?;
            Some(content)
        } else {
            None
        };

        let ctx = FileContext {
            file: file.to_string(),
            path: resolved.clone(),
        };
        let expected = strategy
            .update(actual.clone(), &ctx)
            .await
            .map_err(|e| Error::Update {
                path: label.clone(),
                message: e.to_string(),
            })?;

        let equal = match (&expected, &actual) {
            (None, None) => true,
            (Some(expected), Some(actual)) => {
                strategy
                    .equal(expected, actual)
                    .await
                    .map_err(|e| Error::Compare {
                        path: label.clone(),
                        message: e.to_string(),
                    })?
            }
            _ => false,
        };
        debug!(
            "Evaluated {} (exists: {}, expected: {}, equal: {})",
            label,
            actual.is_some(),
            expected.is_some(),
            equal
        );

        let write = write_expected(Arc::clone(strategy), resolved, label.clone(), expected).boxed();

        Ok(Outcome {
            path: label,
            equal,
            write,
        })
    }
}

async fn write_expected<S: Strategy>(
    strategy: Arc<S>,
    resolved: PathBuf,
    label: String,
    expected: Option<S::Content>,
) -> Result<()> {
    write_or_remove(strategy.as_ref(), &resolved, &label, expected.as_ref())
        .await
        .map_err(|e| Error::Write {
            path: label,
            message: e.to_string(),
        })
}

async fn write_or_remove<S: Strategy>(
    strategy: &S,
    resolved: &Path,
    label: &str,
    expected: Option<&S::Content>,
) -> Result<()> {
    match expected {
        None => {
            info!("Removing {}", label);
            filesystem::remove_file(resolved).await
        }
        Some(content) => {
            info!("Writing {}", label);
            if let Some(parent) = resolved.parent() {
                filesystem::make_dirs(parent).await?;
            }
            strategy.write(resolved, content).await
        }
    }
}

/// Evaluate every entry of `files` against `root`.
///
/// Callbacks are normalized into text strategies first. Outcomes are returned
/// in declaration order.
pub async fn evaluate(root: &Path, files: &FileSet) -> Result<Vec<Outcome>> {
    let entries = files.normalized();
    debug!(
        "Evaluating {} files in {}",
        entries.len(),
        root.display()
    );

    try_join_all(
        entries
            .iter()
            .map(|(file, strategy)| strategy.evaluate(root, file)),
    )
    .await
}

fn drifted(outcomes: Vec<Outcome>) -> Vec<Outcome> {
    outcomes.into_iter().filter(|o| !o.equal).collect()
}

/// Fail with [`Error::DriftDetected`] if any outcome drifted.
///
/// Never writes. Reports "no changes" when everything is in sync.
pub fn assert_no_drift(outcomes: Vec<Outcome>, reporter: &Reporter) -> Result<UpdateSummary> {
    let changed = drifted(outcomes);
    if changed.is_empty() {
        reporter.no_changes();
        return Ok(UpdateSummary::default());
    }

    Err(Error::DriftDetected {
        paths: changed.into_iter().map(|o| o.path).collect(),
    })
}

/// Write every drifted outcome, in order, reporting each one.
///
/// Stops at the first failing write.
pub async fn apply_and_report(
    outcomes: Vec<Outcome>,
    reporter: &Reporter,
) -> Result<UpdateSummary> {
    let changed = drifted(outcomes);
    if changed.is_empty() {
        reporter.no_changes();
        return Ok(UpdateSummary::default());
    }

    reporter.changes_found(changed.len());
    let mut paths = Vec::with_capacity(changed.len());
    for outcome in changed {
        reporter.changed_file(&outcome.path);
        paths.push(outcome.path.clone());
        outcome.write().await?;
    }

    Ok(UpdateSummary {
        changed: paths,
        applied: true,
    })
}

/// Evaluate `files` and handle drift according to `mode`.
pub async fn run(
    root: &Path,
    files: &FileSet,
    mode: Mode,
    reporter: &Reporter,
) -> Result<UpdateSummary> {
    let outcomes = evaluate(root, files).await?;
    match mode {
        Mode::Test => assert_no_drift(outcomes, reporter),
        Mode::Apply => apply_and_report(outcomes, reporter).await,
    }
}
