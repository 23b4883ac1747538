//! Invocation entry points
//!
//! [`updater_with_options`] is the programmatic surface: every setting is
//! passed in explicitly. [`updater`] is the convenience wrapper for build
//! scripts, reading `--test` and `--quiet` from the process arguments,
//! detecting color support from the environment and resolving the workspace
//! root from the current directory. Process-wide state is read here and
//! nowhere else in the library.

use std::path::PathBuf;

use crate::engine::{self, Mode, UpdateSummary};
use crate::error::Result;
use crate::files::FileSet;
use crate::output::OutputConfig;
use crate::report::Reporter;
use crate::workspace;

/// Settings for one invocation
#[derive(Debug, Clone, Default)]
pub struct UpdaterOptions {
    /// Workspace root. Resolved from the current directory when unset.
    pub workspace_dir: Option<PathBuf>,
    /// Fail on drift instead of writing
    pub test: bool,
    /// Suppress all non-error output
    pub quiet: bool,
    /// Color and emoji policy for the summary. Plain by default.
    pub output: OutputConfig,
}

impl UpdaterOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Derive `test` and `quiet` from process-style arguments.
    ///
    /// The first item is the program name and is skipped; any later
    /// `--test` or `--quiet` turns the matching option on.
    pub fn from_args<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut options = Self::new();
        for arg in args.into_iter().skip(1) {
            match arg.as_ref() {
                "--test" => options.test = true,
                "--quiet" => options.quiet = true,
                _ => {}
            }
        }
        options
    }

    pub fn workspace_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.workspace_dir = Some(dir.into());
        self
    }

    pub fn test(mut self, test: bool) -> Self {
        self.test = test;
        self
    }

    pub fn quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    pub fn output(mut self, output: OutputConfig) -> Self {
        self.output = output;
        self
    }

    pub fn mode(&self) -> Mode {
        if self.test {
            Mode::Test
        } else {
            Mode::Apply
        }
    }
}

/// Reconcile `files` with explicit options.
///
/// In test mode drift fails with [`crate::Error::DriftDetected`]; in apply
/// mode drifted files are written and listed in the returned summary.
pub async fn updater_with_options(files: &FileSet, options: UpdaterOptions) -> Result<UpdateSummary> {
    let root = match options.workspace_dir {
        Some(ref dir) => dir.clone(),
        None => workspace::current_workspace_dir()?,
    };
    let reporter = Reporter::new(options.quiet, options.output);

    engine::run(&root, files, options.mode(), &reporter).await
}

/// Reconcile `files` using the process arguments and the current directory.
pub async fn updater(files: &FileSet) -> Result<UpdateSummary> {
    let options = UpdaterOptions::from_args(std::env::args())
        .output(OutputConfig::from_env_and_flag("auto"));
    updater_with_options(files, options).await
}
