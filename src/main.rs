//! # File Updater CLI
//!
//! Binary entry point for the `file-updater` command-line tool.
//!
//! Its responsibilities are:
//! - Parsing command-line arguments using `clap`.
//! - Running the manifest of the current workspace through the library.
//! - Printing any failure as `ERROR: <message>` and exiting with status 1.
//!
//! All reconciliation logic lives in the library crate.

mod cli;

use clap::Parser;

fn main() {
    let cli = cli::Cli::parse();
    if let Err(err) = cli.execute() {
        eprintln!("ERROR: {}", err);
        std::process::exit(1);
    }
}
