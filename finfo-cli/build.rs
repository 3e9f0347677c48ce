//! Build script for finfo-cli.
//!
//! This script generates a man page at build time using clap_mangen.
//! The generated man page is placed in OUT_DIR for inclusion in release
//! builds.
//!
//! Note: We build a minimal command structure here rather than importing
//! from the main crate, since build scripts cannot depend on the crate
//! being built.

use clap::{Arg, Command};
use clap_mangen::Man;
use std::fs;
use std::path::PathBuf;

/// Build the CLI command structure for man page generation.
///
/// IMPORTANT: Keep this structure synchronized with src/cli.rs
/// When adding/removing/modifying arguments, update both files.
fn build_cli() -> Command {
    Command::new("finfo")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Inspect a file or directory path")
        .long_about(
            "Resolve a path to its canonical form and report its type, size, and content digests",
        )
        .arg(
            Arg::new("path")
                .value_name("PATH")
                .help("File or directory to inspect")
                .required(true),
        )
        .arg(
            Arg::new("detail")
                .short('d')
                .long("detail")
                .help("Print detailed information: file type, size, and the md5, sha1, and sha256 digests")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("clip")
                .short('c')
                .long("clip")
                .help("Copy the resolved path to the clipboard instead of printing it")
                .action(clap::ArgAction::SetTrue),
        )
}

fn main() {
    // Generate man page at build time
    let out_dir = PathBuf::from(std::env::var("OUT_DIR").unwrap());
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir).unwrap();

    let app = build_cli();
    let man = Man::new(app);
    let mut buffer = Vec::new();
    man.render(&mut buffer).unwrap();

    fs::write(man_dir.join("finfo.1"), buffer).unwrap();

    println!("cargo:rerun-if-changed=src/cli.rs");
}
