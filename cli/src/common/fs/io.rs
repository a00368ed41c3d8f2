//! # DevGuide Filesystem I/O Operations
//!
//! File: cli/src/common/fs/io.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/devguide
//!
//! ## Overview
//!
//! This module centralizes fundamental filesystem input/output (I/O) operations
//! required by various parts of the DevGuide application. It provides convenient,
//! robust wrappers around standard library `std::fs` functions for tasks such as
//! ensuring directories exist, reading entire files into strings, and writing
//! string content back to files.
//!
//! ## Architecture
//!
//! The module offers several focused utility functions:
//! - **`ensure_dir_exists`**: Checks if a directory exists at the given path. If not, it creates the directory, including any necessary parent directories (`fs::create_dir_all`). It also validates that if a path *does* exist, it is actually a directory.
//! - **`read_file_to_string`**: A simple wrapper around `fs::read_to_string` that adds context to potential I/O errors using `anyhow::Context`.
//! - **`write_string_to_file`**: Writes a string slice (`&str`) to the specified file path. Before writing, it ensures the parent directory of the target file exists by calling `ensure_dir_exists`. It overwrites the file if it already exists. Errors during directory creation or writing are wrapped with context.
//!
//! These functions aim to simplify common I/O patterns and provide consistent error handling with helpful context messages.
//!
//! ## Usage
//!
//! These utilities are used by:
//! - The Guide Assembler, which delegates the final document write to `write_string_to_file`.
//! - Configuration loading, which uses `read_file_to_string` semantics.
//!
//! ```rust
//! use crate::common::fs::io; // Assuming re-export via common::fs
//! use crate::core::error::Result;
//! use std::path::Path;
//!
//! # fn run_example() -> Result<()> {
//! let guide_path = Path::new("./docs/en/developer-guide/DEVGUIDE.md");
//!
//! // Write the rendered guide, creating parent directories as needed.
//! io::write_string_to_file(guide_path, "# Developer Guide\n")?;
//! # Ok(())
//! # }
//! ```
//!
use crate::core::error::{DevguideError, Result}; // Use standard Result and custom Error types
use anyhow::Context; // For adding context to errors
use std::fs; // Standard filesystem module
use std::path::Path; // Filesystem path type
use tracing::{debug, info}; // Logging utilities

/// Ensures that a directory exists at the specified path.
///
/// If the path does not exist, this function attempts to create the directory,
/// including any necessary parent directories (similar to `mkdir -p`).
/// If the path already exists but is not a directory (e.g., it's a file),
/// an error (`DevguideError::FileSystem`) is returned.
///
/// # Arguments
///
/// * `path` - A `&Path` reference to the directory path to ensure exists.
///
/// # Returns
///
/// * `Result<()>` - Returns `Ok(())` if the directory exists or was successfully created.
///
/// # Errors
///
/// Returns an `Err` if:
/// - The path exists but is not a directory.
/// - Creating the directory fails (e.g., due to permissions).
pub fn ensure_dir_exists(path: &Path) -> Result<()> {
    // Check if the path exists in the filesystem.
    if !path.exists() {
        // Path does not exist, attempt to create it recursively.
        fs::create_dir_all(path)
            // Add context to any error occurring during directory creation.
            .with_context(|| format!("Failed to create directory {:?}", path))?;
        // Log the successful creation.
        info!("Created directory: {:?}", path);
    }
    // Path exists, check if it's actually a directory.
    else if !path.is_dir() {
        // It exists but is not a directory (e.g., a file). Return an error.
        // Use anyhow::bail! for a concise error return, wrapping our custom error type.
        anyhow::bail!(DevguideError::FileSystem(format!(
            "Path exists but is not a directory: {:?}",
            path
        )));
    }
    // Path exists and is already a directory.
    else {
        // Log that no action was needed (debug level).
        debug!("Directory already exists: {:?}", path);
    }
    // If we reach here, the directory exists (either pre-existing or newly created).
    Ok(())
}

/// Reads the entire content of a file into a string.
///
/// This is a simple wrapper around `std::fs::read_to_string` that adds
/// contextual information to the error message if reading fails.
///
/// # Arguments
///
/// * `path` - A `&Path` reference to the file to read.
///
/// # Returns
///
/// * `Result<String>` - Returns `Ok(String)` containing the file content if successful.
///
/// # Errors
///
/// Returns an `Err` if the file cannot be found, opened, or read (e.g., permissions, I/O error),
/// with context indicating which file failed.
#[allow(dead_code)] // Kept alongside write_string_to_file for symmetry; config loading has its own context messages.
pub fn read_file_to_string(path: &Path) -> Result<String> {
    // Call the standard library function and enhance any error with context.
    fs::read_to_string(path).with_context(|| format!("Failed to read file {:?}", path))
}

/// Writes string content to a specified file path, overwriting if it exists.
///
/// This function first ensures that the parent directory of the target `path` exists,
/// creating it recursively if necessary using `ensure_dir_exists`. It then writes
/// the provided `content` string slice to the file, replacing any previous content.
///
/// # Arguments
///
/// * `path` - A `&Path` reference to the target file.
/// * `content` - The string content to write.
///
/// # Returns
///
/// * `Result<()>` - Returns `Ok(())` if the write succeeded.
///
/// # Errors
///
/// Returns an `Err` if the parent directory cannot be created or the file
/// cannot be written, with context indicating which path failed.
pub fn write_string_to_file(path: &Path, content: &str) -> Result<()> {
    // Ensure the parent directory exists before attempting the write.
    if let Some(parent) = path.parent() {
        ensure_dir_exists(parent).map_err(|e| {
            e.context(DevguideError::OutputDirectoryCreationFailed {
                path: parent.display().to_string(),
            })
        })?;
    }
    // Write the content, overwriting any existing file at this path.
    fs::write(path, content).with_context(|| {
        DevguideError::WriteFailed {
            path: path.display().to_string(),
        }
        .to_string()
    })?;
    debug!("Wrote {} bytes to {:?}", content.len(), path);
    Ok(())
}
