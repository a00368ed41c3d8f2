//! # DevGuide Recommendation Engine
//!
//! File: cli/src/engine/recommend.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/devguide
//!
//! ## Overview
//!
//! This module applies a fixed advisory policy over a completed
//! [`ProjectProfile`] and produces an ordered list of human-readable
//! recommendation strings: missing governance files, tool-priority hints, and
//! quality-tooling consolidation.
//!
//! ## Architecture
//!
//! The policy is a flat rule list. Each rule is an independent
//! presence/absence predicate over the profile; no rule depends on another
//! rule having fired. The order of advisories in the output equals the fixed
//! declaration order of the rules below, *not* the order in which the
//! underlying artifacts were detected; this keeps the rendered guide
//! reproducible regardless of directory-listing order.
//!
use crate::engine::profile::ProjectProfile;
use crate::engine::rules::QUALITY_TOOLING_LABELS;
use tracing::debug;

/// # Recommend (`recommend`)
///
/// Evaluates every advisory rule against the profile, in declaration order,
/// and returns the advisories for the rules that fired.
///
/// ## Arguments
///
/// * `profile` - The completed classification snapshot.
///
/// ## Returns
///
/// * `Vec<String>` - Ordered advisory strings; may be empty.
pub fn recommend(profile: &ProjectProfile) -> Vec<String> {
    let mut advisories = Vec::new();

    // Rule 1: missing contributing guidelines.
    if !profile.has_doc_file("CONTRIBUTING.md") {
        advisories.push(
            "Add a CONTRIBUTING.md so newcomers know how to propose changes and submit patches."
                .to_string(),
        );
    }

    // Rule 2: missing code of conduct.
    if !profile.has_doc_file("CODE_OF_CONDUCT.md") {
        advisories.push(
            "Add a CODE_OF_CONDUCT.md to set expectations for community behavior.".to_string(),
        );
    }

    // Rule 3: a task runner exists, so its targets should be the entry point.
    if let Some(runner) = profile.task_runner {
        advisories.push(format!(
            "A {} manifest ({}) is present; prefer `{}` targets over ad hoc tool invocations as the canonical entry point for builds and tests.",
            runner.name(),
            runner.manifest(),
            runner.command()
        ));
    }

    // Rule 4: rich quality tooling detected; suggest consolidating commands.
    let quality_tools: Vec<&str> = QUALITY_TOOLING_LABELS
        .iter()
        .copied()
        .filter(|label| profile.has_config_file(label))
        .collect();
    if !quality_tools.is_empty() {
        advisories.push(format!(
            "Quality tooling detected ({}); consolidate formatting and lint commands into a single documented target so they are run consistently.",
            quality_tools.join(", ")
        ));
    }

    debug!("Produced {} advisories", advisories.len());
    advisories
}
