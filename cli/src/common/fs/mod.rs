//! # DevGuide Filesystem Utilities (`common::fs`)
//!
//! File: cli/src/common/fs/mod.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/devguide
//!
//! ## Overview
//!
//! This module acts as the primary interface and organizational unit for all
//! filesystem-related utility functions within the DevGuide CLI. It aggregates
//! functionality from specialized submodules, providing a consistent entry point
//! for evidence queries and file I/O.
//!
//! ## Architecture
//!
//! Functionality is delegated to the following submodules:
//!
//! - **`io`**: Provides basic input/output operations like ensuring directories
//!   exist (`ensure_dir_exists`), reading files to strings
//!   (`read_file_to_string`), and writing strings to files
//!   (`write_string_to_file`). The Guide Assembler uses this as its
//!   write-text-to-path capability.
//! - **`probe`**: The Evidence Prober. Answers presence/content queries
//!   (file-exists, directory-exists, file-contains-pattern, shallow
//!   source-extension scan) against the inspected directory. Absence is a
//!   negative result, never an error.
//!

/// Contains basic file I/O operations (e.g., `ensure_dir_exists`, `read_file_to_string`, `write_string_to_file`).
pub mod io;
/// Contains the Evidence Prober: presence and content queries against a project directory.
pub mod probe;
