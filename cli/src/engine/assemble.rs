//! # DevGuide Guide Assembler
//!
//! File: cli/src/engine/assemble.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/devguide
//!
//! ## Overview
//!
//! This module concatenates the rendered guide sections, in fixed order, into
//! the final Markdown document and hands the result to the filesystem write
//! capability (`common::fs::io::write_string_to_file`). Assembly itself is a
//! pure function; only the final write performs I/O.
//!
//! ## Architecture
//!
//! Section order is fixed: title block, Overview, Environment Setup, Core
//! Workflow, and (only when the recommendation engine produced at least one
//! advisory) Recommendations. Blocks are joined by single blank lines.
//! There are no retries and no partial-write recovery; a failed write is
//! surfaced verbatim to the invoking layer. The output path is overwritten
//! unconditionally on every run, so regeneration against an unchanged
//! directory is byte-identical.
//!
use crate::common::fs::io;
use crate::core::error::Result;
use crate::engine::profile::ProjectProfile;
use crate::engine::render::{
    render_environment, render_overview, render_recommendations, render_workflow, SectionCounter,
};
use std::path::{Path, PathBuf};
use tracing::info;

/// Fixed title block heading the generated document.
const TITLE_BLOCK: &str = "# Developer Guide\n\n\
    Auto-generated by DevGuide from the current state of this repository. \
    Do not edit by hand; rerun `devguide` to refresh.";

/// Relative path of the guide document under the inspected directory, for a
/// given locale segment.
pub fn guide_relative_path(locale: &str) -> PathBuf {
    Path::new("docs")
        .join(locale)
        .join("developer-guide")
        .join("DEVGUIDE.md")
}

/// # Assemble the Guide Document (`assemble`)
///
/// Renders every section against the profile and advisory list and joins the
/// blocks into the final document text. Pure: same inputs, same bytes.
///
/// ## Arguments
///
/// * `profile` - The completed classification snapshot.
/// * `advisories` - Ordered advisory strings from the recommendation engine.
///
/// ## Returns
///
/// * `String` - The complete Markdown document, ending in a newline.
pub fn assemble(profile: &ProjectProfile, advisories: &[String]) -> String {
    let mut counter = SectionCounter::new();
    let mut blocks = vec![TITLE_BLOCK.to_string()];

    blocks.push(render_overview(profile, &mut counter));
    blocks.push(render_environment(profile, &mut counter));
    blocks.push(render_workflow(profile, &mut counter));
    if !advisories.is_empty() {
        blocks.push(render_recommendations(advisories, &mut counter));
    }

    // Join with exactly one blank line between blocks, regardless of how each
    // renderer terminated its text.
    let mut document = blocks
        .iter()
        .map(|block| block.trim_end())
        .collect::<Vec<_>>()
        .join("\n\n");
    document.push('\n');
    document
}

/// Writes the assembled document to its fixed relative path under `root`.
///
/// Delegates to the write-text-to-path capability, which creates the parent
/// directories as needed. Returns the full output path on success.
pub fn write_guide(root: &Path, locale: &str, document: &str) -> Result<PathBuf> {
    let output_path = root.join(guide_relative_path(locale));
    io::write_string_to_file(&output_path, document)?;
    info!("Wrote developer guide to {}", output_path.display());
    Ok(output_path)
}
