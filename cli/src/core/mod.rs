//! # DevGuide Core Infrastructure
//!
//! File: cli/src/core/mod.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/devguide
//!
//! ## Overview
//!
//! This module aggregates the core infrastructure components that provide
//! foundational functionality for the DevGuide application. These components
//! handle configuration and error management.
//!
//! ## Architecture
//!
//! The core infrastructure consists of two key components:
//! - `config`: Loading and validation of the optional `.devguide.toml` file
//! - `error`: Error types and error handling utilities
//!
//! These components provide essential infrastructure that's used by
//! the command handler and the detection engine to implement their functionality.
//!
//! ## Usage
//!
//! Core infrastructure is imported by the rest of the crate:
//!
//! ```rust
//! use crate::core::config; // For loading configuration
//! use crate::core::error::{DevguideError, Result}; // For error handling
//! ```
//!
pub mod config;
pub mod error;
