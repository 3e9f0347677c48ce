//! Main entry point for the finfo CLI.
//!
//! Resolves the given path to canonical form and prints it; with
//! `--detail`, also prints the file-or-directory classification, a
//! human-readable size, and the MD5/SHA-1/SHA-256 digests computed in a
//! single pass over the file.

mod cli;
mod clipboard;
mod error;

use std::time::Instant;

use clap::Parser;

use cli::Cli;
use error::CliError;
use finfo::report::{build_report, ReportOptions};
use finfo::Logger;

fn main() {
    // Parse CLI arguments; clap handles usage errors with exit code 2
    let cli = Cli::parse();

    let logger = finfo::init_logger();

    // Explicit options value, constructed once and passed down; the core
    // functions read no flag state
    let options = ReportOptions { detail: cli.detail };

    match run(&cli, &options, &logger) {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}

fn run(cli: &Cli, options: &ReportOptions, logger: &Logger) -> Result<(), CliError> {
    let started = Instant::now();
    let report = build_report(&cli.path, options)?;
    logger.debug(&format!(
        "report for {} built in {:?}",
        cli.path.display(),
        started.elapsed()
    ));

    // -c copies the single-line output instead of printing it; detailed
    // reports always print
    if cli.clip && !options.detail {
        clipboard::copy_line(report.trim_end_matches('\n'))?;
        return Ok(());
    }

    print!("{report}");
    Ok(())
}
