//! Report composition.
//!
//! Wires the path resolver, size formatter, and digest engine into the
//! rendered rows the CLI prints. This layer owns the sequencing contract:
//! directories are classified and sized but never handed to the digest
//! engine.

use std::collections::{BTreeSet, HashMap};
use std::path::Path;

use crate::digest::{digest_all, Algorithm};
use crate::error::Result;
use crate::output::RowSet;
use crate::path::resolve;
use crate::size::format_size;

/// Options controlling report contents.
///
/// Constructed once at startup from the parsed command line and passed
/// into [`build_report`]; the resolver and digest engine read no global
/// state.
///
/// # Examples
///
/// ```
/// use finfo::report::ReportOptions;
///
/// let options = ReportOptions { detail: true };
/// assert!(options.detail);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct ReportOptions {
    /// Print classification, size, and digests instead of the bare path.
    pub detail: bool,
}

/// Build the rendered report for a single path.
///
/// Without `detail`, the report is one bare line: the canonical path.
/// With `detail`, the report is a `FILE` or `DIR` row, a `SIZE` row, and
/// — for regular files only — the MD5, SHA1, and SHA256 digests sorted by
/// algorithm name. For directories the size is the directory-entry size
/// and digest rows are omitted.
///
/// # Errors
///
/// Returns an error if path resolution fails, or if `detail` is set and
/// digesting the file fails. A digest failure yields no digest output at
/// all; the report is never partial.
///
/// # Examples
///
/// ```no_run
/// use std::path::Path;
/// use finfo::report::{build_report, ReportOptions};
///
/// let report = build_report(Path::new("Cargo.toml"), &ReportOptions::default()).unwrap();
/// assert!(report.ends_with('\n'));
/// ```
pub fn build_report(path: &Path, options: &ReportOptions) -> Result<String> {
    let resolved = resolve(path)?;
    let mut rows = RowSet::new();

    if !options.detail {
        rows.push("", resolved.path().display().to_string());
        return Ok(rows.render());
    }

    let label = if resolved.is_dir() { "DIR" } else { "FILE" };
    rows.push(label, resolved.path().display().to_string());
    rows.push("SIZE", format_size(resolved.size()));

    if !resolved.is_dir() {
        let algorithms: BTreeSet<Algorithm> = Algorithm::ALL.into_iter().collect();
        let digests = digest_all(resolved.path(), &algorithms)?;

        let labeled: HashMap<String, String> = digests
            .into_iter()
            .map(|(algorithm, hex)| (algorithm.name().to_string(), hex))
            .collect();
        rows.push_map(&labeled);
    }

    Ok(rows.render())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_bare_report_is_canonical_path() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("f.txt");
        fs::write(&file, b"bar").unwrap();

        let report = build_report(&file, &ReportOptions::default()).unwrap();
        let canonical = fs::canonicalize(&file).unwrap();
        assert_eq!(report, format!("{}\n", canonical.display()));
    }

    #[test]
    fn test_detail_report_for_file() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("f.txt");
        fs::write(&file, b"bar").unwrap();

        let options = ReportOptions { detail: true };
        let report = build_report(&file, &options).unwrap();
        let lines: Vec<&str> = report.lines().collect();

        assert_eq!(lines.len(), 5);
        assert!(lines[0].starts_with("FILE: "));
        assert_eq!(lines[1], "SIZE: 3 B");
        assert_eq!(lines[2], "MD5: 37b51d194a7513e45b56f6524f2d51f2");
        assert_eq!(lines[3], "SHA1: 62cdb7020ff920e5aa642c3d4066950dd1f01f4d");
        assert_eq!(
            lines[4],
            "SHA256: fcde2b2edba56bf408601fb721fe9b5c338d10ee429ea04fae5511b68fbf8fb9"
        );
    }

    #[test]
    fn test_detail_report_digests_sorted_by_name() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("f.txt");
        fs::write(&file, b"anything").unwrap();

        let options = ReportOptions { detail: true };
        let report = build_report(&file, &options).unwrap();
        let labels: Vec<&str> = report
            .lines()
            .skip(2)
            .map(|line| line.split(':').next().unwrap())
            .collect();
        assert_eq!(labels, ["MD5", "SHA1", "SHA256"]);
    }

    #[test]
    fn test_detail_report_for_directory_skips_digests() {
        let dir = tempdir().unwrap();

        let options = ReportOptions { detail: true };
        let report = build_report(dir.path(), &options).unwrap();
        let lines: Vec<&str> = report.lines().collect();

        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("DIR: "));
        assert!(lines[1].starts_with("SIZE: "));
        assert!(!report.contains("MD5"));
        assert!(!report.contains("SHA"));
    }

    #[test]
    fn test_report_nonexistent_path_fails() {
        let dir = tempdir().unwrap();
        let result = build_report(&dir.path().join("missing"), &ReportOptions::default());
        assert!(result.is_err());
        assert!(result.unwrap_err().is_not_found());
    }

    #[cfg(unix)]
    #[test]
    fn test_report_follows_symlinks() {
        use std::os::unix::fs::symlink;

        let dir = tempdir().unwrap();
        let target = dir.path().join("target.txt");
        let link = dir.path().join("link.txt");
        fs::write(&target, b"bar").unwrap();
        symlink(&target, &link).unwrap();

        let via_link = build_report(&link, &ReportOptions::default()).unwrap();
        let direct = build_report(&target, &ReportOptions::default()).unwrap();
        assert_eq!(via_link, direct);
    }
}
