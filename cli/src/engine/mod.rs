//! # DevGuide Detection-and-Generation Engine (`engine`)
//!
//! File: cli/src/engine/mod.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/devguide
//!
//! ## Overview
//!
//! This module contains the whole detection-and-generation pipeline: the part
//! of DevGuide with actual decision logic. Everything here is a pure
//! transformation of its inputs; I/O happens only at the edges (the Evidence
//! Prober reads, the Guide Assembler hands the finished document to the file
//! writer).
//!
//! ## Architecture
//!
//! Control flows strictly left to right:
//!
//! ```text
//! probe results → classify → ProjectProfile → recommend → render → assemble
//! ```
//!
//! - **`profile`**: The `ProjectProfile` value: an immutable snapshot of
//!   detected technologies, package managers, and artifact sets for one run.
//! - **`rules`**: Declarative rule tables (detection patterns, artifact lists,
//!   backend markers). Configuration data, not logic.
//! - **`classify`**: Runs the fixed, ordered battery of probes and folds the
//!   results into a `ProjectProfile`.
//! - **`recommend`**: Applies a fixed advisory policy over the finished profile.
//! - **`render`**: One pure function per guide section, threading explicit
//!   integer header-numbering state.
//! - **`assemble`**: Concatenates rendered sections and writes the document.
//!

/// Runs the ordered probe battery and builds the `ProjectProfile`.
pub mod classify;
/// Declarative rule tables consumed by the classifier and recommendation engine.
pub mod rules;
/// The immutable `ProjectProfile` snapshot type.
pub mod profile;
/// The fixed-policy recommendation engine.
pub mod recommend;
/// Pure section renderers with explicit header-numbering state.
pub mod render;
/// Joins rendered sections and writes the final guide document.
pub mod assemble;
