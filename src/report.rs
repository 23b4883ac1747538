//! Human-readable summary of a run
//!
//! The wording is produced by pure functions so that the console output of
//! apply mode and the drift error raised in test mode read the same. The
//! [`Reporter`] only decides whether, and how decorated, to print them.

use crate::output::{emoji, OutputConfig};

/// Printed when every file already matches
pub const NO_CHANGES: &str = "Updater found no changes to files.";

/// Header line announcing how many files changed
pub fn changes_header(count: usize) -> String {
    format!("Updater found changes to {} files:", count)
}

/// Indented line naming one changed file
pub fn file_line(path: &str) -> String {
    format!("    {}", path)
}

/// Header followed by one line per changed path
pub fn summary_lines(paths: &[String]) -> Vec<String> {
    let mut lines = Vec::with_capacity(paths.len() + 1);
    lines.push(changes_header(paths.len()));
    lines.extend(paths.iter().map(|path| file_line(path)));
    lines
}

/// Prints the summary to stdout unless quiet
#[derive(Debug, Clone, Default)]
pub struct Reporter {
    quiet: bool,
    output: OutputConfig,
}

impl Reporter {
    pub fn new(quiet: bool, output: OutputConfig) -> Self {
        Self { quiet, output }
    }

    /// A reporter that prints nothing
    pub fn silent() -> Self {
        Self::new(true, OutputConfig::without_color())
    }

    pub fn is_quiet(&self) -> bool {
        self.quiet
    }

    pub fn no_changes(&self) {
        self.emit(format!("{}{}", emoji(&self.output, "✅ ", ""), NO_CHANGES));
    }

    pub fn changes_found(&self, count: usize) {
        self.emit(self.output.header(&changes_header(count)));
    }

    pub fn changed_file(&self, path: &str) {
        self.emit(self.output.path(&file_line(path)));
    }

    fn emit(&self, line: String) {
        if !self.quiet {
            println!("{}", line);
        }
    }
}
