//! CLI structure and argument definitions.
//!
//! This module defines the command-line surface using clap's derive
//! macros: one required positional path and two flags.

use clap::Parser;
use std::path::PathBuf;

/// Command-line tool for inspecting a filesystem path.
#[derive(Parser)]
#[command(name = "finfo")]
#[command(version, about = "Inspect a file or directory path", long_about = None)]
pub struct Cli {
    /// File or directory to inspect
    #[arg(value_name = "PATH")]
    pub path: PathBuf,

    /// Print detailed information: file type, size, and the md5, sha1, and sha256 digests
    #[arg(short = 'd', long)]
    pub detail: bool,

    /// Copy the resolved path to the clipboard instead of printing it
    #[arg(short = 'c', long)]
    pub clip: bool,
}
