//! # DevGuide Configuration System
//!
//! File: cli/src/core/config.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/devguide
//!
//! ## Overview
//!
//! This module implements the configuration system for DevGuide, handling loading,
//! validation, and access to configuration data. Configuration is deliberately
//! small: a single optional `.devguide.toml` file at the root of the *inspected*
//! directory controls output options such as the guide's locale path segment.
//!
//! ## Architecture
//!
//! The configuration system follows these principles:
//! - A missing configuration file is not an error; defaults apply
//! - A present but malformed configuration file is a fatal error (the user
//!   clearly intended to configure something, so silent fallback would hide bugs)
//! - Structured data models with `deny_unknown_fields` ensure typos are caught
//!
//! Configuration sources (in order of precedence):
//! 1. Project-specific `.devguide.toml` in the inspected directory
//! 2. Default values defined in the code
//!
//! ## Examples
//!
//! Loading and using configuration:
//!
//! ```rust
//! let cfg = config::load_config(project_root)?;
//!
//! // Access the output locale for the guide path
//! let locale = &cfg.output.locale; // e.g. "en"
//! ```
//!
//! The configuration is loaded once per run and passed to the modules that need it.
//!
use crate::core::error::Result;
use anyhow::Context;
use serde::Deserialize;
use std::{fs, path::Path};
use tracing::{debug, info};

/// File name of the optional per-project configuration file.
const PROJECT_CONFIG_FILENAME: &str = ".devguide.toml";

/// Represents the main configuration structure, loaded from TOML.
#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields)] // Error if unknown fields are in TOML
pub struct Config {
    #[serde(default)]
    pub output: OutputConfig,
    // Add other top-level configuration sections here
}

/// Configuration for the generated guide's output location.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    /// Locale path segment used in `docs/<locale>/developer-guide/DEVGUIDE.md`.
    #[serde(default = "default_locale")]
    pub locale: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        OutputConfig {
            locale: default_locale(),
        }
    }
}

// --- Default value functions ---
fn default_locale() -> String {
    "en".to_string()
}

/// Loads the configuration for a run against `project_root`.
///
/// Looks for `.devguide.toml` directly in the inspected directory. A missing
/// file yields `Config::default()`; a file that exists but cannot be read or
/// parsed is a fatal error surfaced with context.
pub fn load_config(project_root: &Path) -> Result<Config> {
    let config_path = project_root.join(PROJECT_CONFIG_FILENAME);
    if !config_path.is_file() {
        debug!(
            "No configuration file found at {}; using defaults.",
            config_path.display()
        );
        return Ok(Config::default());
    }
    info!("Loading configuration from: {}", config_path.display());
    let config = load_config_from_path(&config_path)?;
    validate_config(&config).context("Configuration validation failed")?;
    debug!("Final loaded configuration: {:?}", config);
    Ok(config)
}

fn load_config_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read configuration file: {}", path.display()))?;
    toml::from_str(&content)
        .with_context(|| format!("Failed to parse TOML from file: {}", path.display()))
}

/// Validates loaded configuration values.
///
/// The locale becomes a path segment of the output file, so it must be a
/// simple non-empty name without separators or parent-directory components.
fn validate_config(config: &Config) -> Result<()> {
    let locale = &config.output.locale;
    if locale.is_empty() {
        anyhow::bail!("output.locale must not be empty");
    }
    if locale.contains('/') || locale.contains('\\') || locale == "." || locale == ".." {
        anyhow::bail!("output.locale must be a plain directory name, got: {locale}");
    }
    Ok(())
}
