//! # DevGuide System Utilities (`common::system`)
//!
//! File: cli/src/common/system/mod.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/devguide
//!
//! ## Overview
//!
//! This module gathers functions related to inspecting the host system's
//! environment. DevGuide needs exactly one such capability today: checking
//! whether a named external tool (a Node package manager such as `pnpm` or
//! `yarn`) is resolvable on the user's `PATH`. The classifier receives this as
//! an injected capability rather than calling it directly, which keeps the
//! classification logic pure and its tests hermetic.
//!
//! ## Usage
//!
//! ```rust
//! use crate::common::system;
//!
//! if system::binary_on_path("pnpm") {
//!     println!("pnpm is available");
//! }
//! ```
//!
use std::env;
use std::path::Path;
use tracing::trace;

/// Checks whether an executable named `name` can be resolved on `PATH`.
///
/// Walks the `PATH` entries in order and tests for a file with the given name
/// in each directory. On Windows the common executable suffixes are also
/// tried. An unset `PATH` simply yields `false`.
///
/// # Arguments
///
/// * `name` - The bare binary name to look for (e.g. `"pnpm"`).
///
/// # Returns
///
/// * `bool` - `true` if the binary was found in some `PATH` directory.
pub fn binary_on_path(name: &str) -> bool {
    let Some(path_var) = env::var_os("PATH") else {
        return false;
    };
    binary_in_path_var(name, &path_var)
}

/// Walks an explicit `PATH`-style value. Separated from the environment read
/// so tests can pass a constructed value instead of mutating the process-wide
/// `PATH`, which would race with concurrently running tests.
fn binary_in_path_var(name: &str, path_var: &std::ffi::OsStr) -> bool {
    for dir in env::split_paths(path_var) {
        if is_executable_candidate(&dir.join(name)) {
            trace!("Found '{}' on PATH at {}", name, dir.display());
            return true;
        }
        // Windows resolves executables via PATHEXT; cover the common cases.
        #[cfg(windows)]
        for ext in ["exe", "cmd", "bat"] {
            if is_executable_candidate(&dir.join(format!("{name}.{ext}"))) {
                return true;
            }
        }
    }
    false
}

/// A candidate must at least be an existing regular file. Executable-bit
/// checking is skipped: package managers installed at all are installed
/// executable, and PATH entries are trusted as tool directories.
fn is_executable_candidate(path: &Path) -> bool {
    path.is_file()
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_binary_in_path_var_finds_file_in_listed_dir() {
        let temp = tempdir().unwrap();
        let tool = temp.path().join("faketool-devguide");
        fs::write(&tool, "#!/bin/sh\n").unwrap();

        // A constructed PATH value keeps this test independent of the real
        // environment; the process-wide PATH is never touched.
        let joined = env::join_paths([temp.path().to_path_buf()]).unwrap();
        assert!(binary_in_path_var("faketool-devguide", &joined));
        assert!(!binary_in_path_var(
            "definitely-not-a-real-tool-devguide",
            &joined
        ));
    }
}
