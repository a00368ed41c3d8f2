//! # DevGuide Error Types
//!
//! File: cli/src/core/error.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/devguide
//!
//! ## Overview
//!
//! This module defines the error types and error handling mechanisms used throughout
//! the DevGuide application. It provides a consistent approach to error management
//! with detailed error information and context.
//!
//! ## Architecture
//!
//! The error system consists of two main components:
//! - `DevguideError`: A custom error enum using `thiserror` for specific error types
//! - `Result<T>`: A type alias for `anyhow::Result<T>` for flexible error handling
//!
//! The error types map onto the failure modes of a guide-generation run:
//! - The supplied input directory does not exist (fatal, before probing)
//! - The output directory cannot be created (fatal)
//! - The final guide document cannot be written (fatal)
//! - Configuration file problems (fatal when the file is present but malformed)
//!
//! Probe-level read failures are deliberately *not* represented here: an
//! unreadable manifest or directory during classification degrades the affected
//! rule to a negative/default result so that a guide can always be produced
//! when the root directory itself is valid.
//!
//! ## Examples
//!
//! Using the error system:
//!
//! ```rust
//! // Return a specific error type
//! if !path.is_dir() {
//!     return Err(DevguideError::InputDirectoryNotFound {
//!         path: path.display().to_string(),
//!     })?;
//! }
//!
//! // Add context to errors using anyhow
//! let content = fs::read_to_string(&path)
//!     .with_context(|| format!("Failed to read file: {}", path.display()))?;
//! ```
//!
use thiserror::Error;

/// Custom error type for the DevGuide application.
#[derive(Error, Debug)]
pub enum DevguideError {
    #[error("Input directory not found or not a directory: {path}")]
    InputDirectoryNotFound { path: String },

    #[error("Failed to create output directory: {path}")]
    OutputDirectoryCreationFailed { path: String },

    #[error("Failed to write guide document to {path}")]
    WriteFailed { path: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Filesystem error: {0}")]
    FileSystem(String),
}

/// Type alias for Result using anyhow::Error for broad compatibility.
/// Anyhow allows for easy context addition and flexible error handling.
pub type Result<T> = anyhow::Result<T>;
