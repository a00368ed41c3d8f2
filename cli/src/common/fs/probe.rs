//! # DevGuide Evidence Prober
//!
//! File: cli/src/common/fs/probe.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/devguide
//!
//! ## Overview
//!
//! This module is the Evidence Prober: the single place where the classifier's
//! questions about the inspected directory are answered. Queries come in three
//! shapes ("does this file exist?", "does this directory exist?", and "does
//! this file contain this pattern?"), plus a shallow source-extension scan used
//! as a last-resort language hint.
//!
//! ## Architecture
//!
//! Every probe follows the same contract:
//!
//! 1. Absence is a valid *negative* result, never an error. A missing file or
//!    directory simply answers the question with "no".
//! 2. A file or directory that exists but cannot be read degrades to a negative
//!    result with a debug/warn log, so a guide can always be produced when the
//!    root directory itself is valid.
//!
//! All paths are interpreted relative to the inspected project root, which is
//! passed explicitly to every function; the prober holds no state.
//!
//! ## Usage
//!
//! ```rust
//! use crate::common::fs::probe;
//!
//! let has_manifest = probe::file_exists(root, "package.json");
//! let has_workflows = probe::dir_exists(root, ".github/workflows");
//! let uses_hatch = probe::file_contains(root, "pyproject.toml", "hatchling.build");
//! ```
//!
use std::fs;
use std::path::Path;
use tracing::{debug, warn};
use walkdir::WalkDir;

/// Maximum directory depth for the source-extension fallback scan.
/// Depth 1 is the root's own entries, depth 2 one level below (e.g. `src/`).
const EXTENSION_SCAN_DEPTH: usize = 2;

/// Maximum number of entries examined by the extension scan. The scan is a
/// cheap hint, not an inventory; a handful of entries is enough evidence.
const EXTENSION_SCAN_LIMIT: usize = 256;

/// Checks if a file exists at `relative` under the project root.
///
/// Returns `false` for directories: callers asking about a marker *file*
/// (e.g. `Makefile`) should not be satisfied by a directory of that name.
pub fn file_exists(root: &Path, relative: &str) -> bool {
    root.join(relative).is_file()
}

/// Checks if a directory exists at `relative` under the project root.
pub fn dir_exists(root: &Path, relative: &str) -> bool {
    root.join(relative).is_dir()
}

/// Checks whether the file at `relative` contains `pattern` as a substring.
///
/// A missing file answers `false`. A file that exists but cannot be read also
/// answers `false`, with a warning logged, so the affected detection rule
/// degrades to its default rather than aborting the run.
pub fn file_contains(root: &Path, relative: &str, pattern: &str) -> bool {
    let path = root.join(relative);
    if !path.is_file() {
        return false;
    }
    match fs::read_to_string(&path) {
        Ok(content) => content.contains(pattern),
        Err(e) => {
            warn!(
                "Could not read {} for pattern matching ({}); treating as no match.",
                path.display(),
                e
            );
            false
        }
    }
}

/// Scans a shallow slice of the project tree for files carrying one of the
/// given extensions.
///
/// Used as fallback evidence for compiled languages when no build-manifest
/// marker exists. The walk is bounded in both depth and entry count, skips
/// entries it cannot read, and stops at the first match.
///
/// # Arguments
///
/// * `root` - The project directory to scan.
/// * `extensions` - Extensions to look for, without the leading dot.
///
/// # Returns
///
/// * `bool` - `true` if any file with one of the extensions was found.
pub fn any_file_with_extension(root: &Path, extensions: &[&str]) -> bool {
    let walker = WalkDir::new(root)
        .max_depth(EXTENSION_SCAN_DEPTH)
        .into_iter()
        // Unreadable subtrees are skipped, not fatal.
        .filter_map(|entry| match entry {
            Ok(e) => Some(e),
            Err(e) => {
                debug!("Skipping unreadable entry during extension scan: {}", e);
                None
            }
        })
        .take(EXTENSION_SCAN_LIMIT);

    for entry in walker {
        if !entry.file_type().is_file() {
            continue;
        }
        if let Some(ext) = entry.path().extension().and_then(|os| os.to_str()) {
            if extensions.contains(&ext) {
                debug!(
                    "Extension scan matched '{}' at {}",
                    ext,
                    entry.path().display()
                );
                return true;
            }
        }
    }
    false
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_file_exists_negative_for_missing_and_dirs() {
        let temp = tempdir().unwrap();
        assert!(!file_exists(temp.path(), "package.json"));
        fs::create_dir(temp.path().join("Makefile")).unwrap();
        // A directory named like the marker file is not a match.
        assert!(!file_exists(temp.path(), "Makefile"));
    }

    #[test]
    fn test_dir_exists() {
        let temp = tempdir().unwrap();
        fs::create_dir_all(temp.path().join(".github/workflows")).unwrap();
        assert!(dir_exists(temp.path(), ".github/workflows"));
        assert!(!dir_exists(temp.path(), ".circleci"));
    }

    #[test]
    fn test_file_contains() {
        let temp = tempdir().unwrap();
        fs::write(
            temp.path().join("pyproject.toml"),
            "[build-system]\nbuild-backend = \"hatchling.build\"\n",
        )
        .unwrap();
        assert!(file_contains(
            temp.path(),
            "pyproject.toml",
            "hatchling.build"
        ));
        assert!(!file_contains(temp.path(), "pyproject.toml", "poetry"));
        // Missing file is a negative result, not an error.
        assert!(!file_contains(temp.path(), "setup.py", "setuptools"));
    }

    #[test]
    fn test_file_contains_unreadable_file_is_negative() {
        // Invalid UTF-8 makes read_to_string fail; the probe answers "no
        // match" instead of erroring, even though the raw bytes contain the
        // pattern.
        let temp = tempdir().unwrap();
        fs::write(temp.path().join("pyproject.toml"), b"\xff\xfehatchling.build").unwrap();
        assert!(!file_contains(
            temp.path(),
            "pyproject.toml",
            "hatchling.build"
        ));
    }

    #[test]
    fn test_extension_scan_respects_depth() {
        let temp = tempdir().unwrap();
        fs::create_dir_all(temp.path().join("src")).unwrap();
        fs::write(temp.path().join("src/main.c"), "int main(void){}").unwrap();
        assert!(any_file_with_extension(temp.path(), &["c", "h"]));

        // A file buried below the depth limit produces no evidence.
        let deep = tempdir().unwrap();
        fs::create_dir_all(deep.path().join("a/b/c")).unwrap();
        fs::write(deep.path().join("a/b/c/deep.c"), "").unwrap();
        assert!(!any_file_with_extension(deep.path(), &["c", "h"]));
    }

    #[test]
    fn test_extension_scan_empty_dir() {
        let temp = tempdir().unwrap();
        assert!(!any_file_with_extension(temp.path(), &["cpp", "cc"]));
    }
}
