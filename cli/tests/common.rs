//! # DevGuide CLI Integration Test Common Helpers
//!
//! File: cli/tests/common.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/devguide
//!
//! ## Overview
//!
//! This module provides shared utility functions and re-exports common crates
//! used across the integration test files.
//! This avoids code duplication in the test suite.
//!
//! Integration tests are located in the `cli/tests/` directory and each `.rs` file
//! in that directory (that isn't a module like this one) is compiled as a separate
//! test crate linked against the main `devguide` binary crate.
//!

// Allow potentially unused code in this common module, as different test files might use different helpers.
#![allow(dead_code)]

// Re-export common crates/modules needed by multiple test files
pub use assert_cmd::Command;
// Individual test files should import predicates/tempfile directly if needed:
// use predicates::prelude::*;
// use tempfile::tempdir;

use std::fs;
use std::path::Path;

/// # Get DevGuide Command (`devguide_cmd`)
///
/// Helper function to create an `assert_cmd::Command` instance pointing to the
/// compiled `devguide` binary target for the current test run.
///
/// This ensures tests execute the correct binary being built.
///
/// ## Panics
/// Panics if the `devguide` binary cannot be found via `Command::cargo_bin`.
///
/// ## Returns
/// * `Command` - An `assert_cmd::Command` ready to have arguments added and assertions run.
pub fn devguide_cmd() -> Command {
    Command::cargo_bin("devguide").expect("Failed to find devguide binary for testing")
}

/// # Populate a Fixture Directory (`populate_fixture`)
///
/// Creates the given files (with content) inside `root`, creating parent
/// directories as needed. Used to lay out mock project directories for
/// end-to-end generation tests.
pub fn populate_fixture(root: &Path, files: &[(&str, &str)]) {
    for (relative, content) in files {
        let path = root.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create fixture parent directory");
        }
        fs::write(path, content).expect("Failed to write fixture file");
    }
}

/// Relative path of the generated guide for the default locale.
pub const GUIDE_PATH: &str = "docs/en/developer-guide/DEVGUIDE.md";
