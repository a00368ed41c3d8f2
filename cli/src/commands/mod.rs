//! # DevGuide Command Handlers
//!
//! File: cli/src/commands/mod.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/devguide
//!
//! ## Overview
//!
//! This module aggregates the command handlers of the DevGuide CLI. The tool
//! currently exposes a single operation, generating the developer guide for a
//! directory, so there is exactly one handler module.
//!
//! ## Architecture
//!
//! `main.rs` parses the CLI surface and delegates to the handler here, which
//! owns validation of the input directory and the wiring of the detection
//! pipeline. Keeping the handler out of `main.rs` keeps argument parsing and
//! execution logic separate, matching the layout used for multi-command tools.
//!

/// Contains the handler and arguments for guide generation.
pub mod generate;
