//! CLI argument parsing and execution

use std::io::Write;
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use log::debug;

use file_updater::defaults;
use file_updater::manifest;
use file_updater::output::OutputConfig;
use file_updater::workspace;
use file_updater::{updater_with_options, UpdateSummary, UpdaterOptions};

/// File Updater - Keep generated workspace files in sync
#[derive(Parser, Debug)]
#[command(name = "file-updater")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Fail if any file differs from its expected content instead of writing it
    #[arg(long)]
    pub test: bool,

    /// Suppress all output except errors
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to the manifest, relative to the workspace root
    #[arg(short, long, value_name = "PATH", env = "FILE_UPDATER_MANIFEST")]
    pub manifest: Option<PathBuf>,

    /// Workspace root (defaults to the current directory)
    #[arg(short, long, value_name = "DIR")]
    pub workspace: Option<PathBuf>,

    /// Colorize output (always, never, auto)
    #[arg(long, value_name = "WHEN", default_value = "auto")]
    pub color: String,

    /// Set log level (error, warn, info, debug, trace)
    #[arg(long, value_name = "LEVEL", default_value = "warn")]
    pub log_level: String,
}

impl Cli {
    /// Execute the CLI
    pub fn execute(self) -> Result<()> {
        init_logging(&self.log_level);

        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()?;
        runtime.block_on(self.run())?;
        Ok(())
    }

    async fn run(self) -> Result<UpdateSummary> {
        let dir = match self.workspace {
            Some(dir) => dir,
            None => std::env::current_dir()?,
        };
        let root = workspace::find_workspace_dir(&dir, &defaults::workspace_markers())?;

        let manifest_path = manifest::locate(&root, self.manifest.as_deref())?;
        debug!("Using manifest {}", manifest_path.display());
        let rules = manifest::from_file(&manifest_path)?;
        let files = manifest::to_file_set(&root, &rules);

        let options = UpdaterOptions::new()
            .workspace_dir(root)
            .test(self.test)
            .quiet(self.quiet)
            .output(OutputConfig::from_env_and_flag(&self.color));

        Ok(updater_with_options(&files, options).await?)
    }
}

/// `RUST_LOG` takes precedence over `--log-level`.
fn init_logging(level: &str) {
    let mut builder = env_logger::Builder::new();
    builder.parse_filters(level);
    if let Ok(filters) = std::env::var("RUST_LOG") {
        builder.parse_filters(&filters);
    }
    builder
        .format(|buf, record| writeln!(buf, "[{}] {}", record.level(), record.args()))
        .target(env_logger::Target::Stderr);
    let _ = builder.try_init();
}
