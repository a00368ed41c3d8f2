//! # DevGuide Common Utilities (`common`)
//!
//! File: cli/src/common/mod.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/devguide
//!
//! ## Overview
//!
//! This module serves as the root and organizational entry point for all shared,
//! common utility modules used throughout the DevGuide CLI application. It
//! aggregates functionality related to cross-cutting concerns: filesystem
//! evidence probing, file I/O, and host-system inspection.
//!
//! By centralizing these utilities under the `common::` namespace, DevGuide aims
//! to promote code reuse, maintain consistency, and provide clear separation
//! between the detection engine (`engine::`), command logic (`commands::`), and
//! core infrastructure (`core::`).
//!
//! ## Architecture
//!
//! The `common` module itself primarily consists of declarations (`pub mod`) for
//! its submodules. Each submodule encapsulates a specific domain of utility
//! functions:
//!
//! - **`fs`**: Foundational filesystem operations. Includes `io` (ensuring
//!   directory existence, reading/writing text files) and `probe` (the Evidence
//!   Prober: presence and content queries the classifier runs against the
//!   inspected directory).
//! - **`system`**: Host-system inspection, currently limited to resolving
//!   whether a named binary (e.g. a package manager) is available on `PATH`.
//!
//! ## Usage
//!
//! Command handlers and the engine import specific functionality directly from
//! the required submodule within `common`.
//!
//! ```rust
//! use crate::common::{fs, system};
//! use crate::core::error::Result;
//! use std::path::Path;
//!
//! # fn run_example() -> Result<()> {
//! let root = Path::new(".");
//!
//! // Evidence queries
//! let has_manifest = fs::probe::file_exists(root, "package.json");
//!
//! // Host inspection
//! let has_pnpm = system::binary_on_path("pnpm");
//!
//! // File output
//! fs::io::write_string_to_file(&root.join("out.txt"), "content")?;
//! # Ok(())
//! # }
//! ```
//!

/// Utilities for filesystem operations (evidence probing, I/O).
pub mod fs;
/// Utilities for system-level information and checks (tool detection on PATH).
pub mod system;
