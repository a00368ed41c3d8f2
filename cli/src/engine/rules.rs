//! # DevGuide Detection Rule Tables
//!
//! File: cli/src/engine/rules.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/devguide
//!
//! ## Overview
//!
//! This module holds the declarative rule tables consumed by the classifier
//! and the recommendation engine. The tables are configuration data, not
//! logic: each entry pairs a piece of filesystem evidence (a well-known file
//! or directory) with the label it contributes to the `ProjectProfile`, and
//! the classifier iterates them uniformly.
//!
//! ## Architecture
//!
//! Rule order is load-bearing in two places:
//!
//! - `PYTHON_BACKEND_RULES` is scanned first-match-wins; the declaration
//!   order *is* the tie-break when a manifest mentions several backends.
//! - `TASK_RUNNER_MANIFESTS` is scanned first-match-wins; `Taskfile.yml`
//!   outranks `justfile` when both exist.
//!
//! Everything else is an independent existence check whose order only affects
//! display order of the resulting labels.
//!
use crate::engine::profile::TaskRunner;

/// The kind of filesystem evidence an artifact rule checks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactKind {
    /// A regular file at the given relative path.
    File,
    /// A directory at the given relative path.
    Dir,
}

/// The profile label set an artifact rule feeds into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetSet {
    /// Tooling configuration (formatters, linters, hook runners).
    Config,
    /// Documentation and governance files.
    Doc,
    /// CI/CD and container platform files.
    Platform,
    /// AI-assistant guidance files.
    Ai,
}

/// One generic evidence rule: check `path` of `kind`, and on a match append
/// `label` to the `target` set of the profile.
#[derive(Debug, Clone, Copy)]
pub struct ArtifactRule {
    pub kind: ArtifactKind,
    pub path: &'static str,
    pub label: &'static str,
    pub target: TargetSet,
}

/// Shorthand constructor to keep the table below readable.
const fn rule(
    kind: ArtifactKind,
    path: &'static str,
    label: &'static str,
    target: TargetSet,
) -> ArtifactRule {
    ArtifactRule {
        kind,
        path,
        label,
        target,
    }
}

/// The full artifact detection table. Every match appends one label to the
/// corresponding profile set; rules are independent of each other.
pub const ARTIFACT_RULES: &[ArtifactRule] = &[
    // --- Tooling configuration ---
    rule(ArtifactKind::File, ".editorconfig", "EditorConfig", TargetSet::Config),
    rule(ArtifactKind::File, ".prettierrc", "Prettier", TargetSet::Config),
    rule(ArtifactKind::File, ".eslintrc.json", "ESLint", TargetSet::Config),
    rule(ArtifactKind::File, "ruff.toml", "Ruff", TargetSet::Config),
    rule(ArtifactKind::File, ".pre-commit-config.yaml", "pre-commit", TargetSet::Config),
    rule(ArtifactKind::File, "rustfmt.toml", "rustfmt", TargetSet::Config),
    rule(ArtifactKind::File, ".clang-format", "clang-format", TargetSet::Config),
    // --- Documentation & governance ---
    rule(ArtifactKind::File, "README.md", "README.md", TargetSet::Doc),
    rule(ArtifactKind::File, "CONTRIBUTING.md", "CONTRIBUTING.md", TargetSet::Doc),
    rule(ArtifactKind::File, "CODE_OF_CONDUCT.md", "CODE_OF_CONDUCT.md", TargetSet::Doc),
    rule(ArtifactKind::File, "CHANGELOG.md", "CHANGELOG.md", TargetSet::Doc),
    rule(ArtifactKind::File, "LICENSE", "LICENSE", TargetSet::Doc),
    // Note: no rule for a `docs/` directory. The generator writes its own
    // output under `docs/`, so probing for it would make a second run see
    // evidence the first run created and break byte-identical regeneration.
    // --- CI/CD & container platforms ---
    rule(ArtifactKind::Dir, ".github/workflows", "GitHub Actions", TargetSet::Platform),
    rule(ArtifactKind::File, ".gitlab-ci.yml", "GitLab CI", TargetSet::Platform),
    rule(ArtifactKind::File, ".circleci/config.yml", "CircleCI", TargetSet::Platform),
    rule(ArtifactKind::File, "Jenkinsfile", "Jenkins", TargetSet::Platform),
    rule(ArtifactKind::File, "azure-pipelines.yml", "Azure Pipelines", TargetSet::Platform),
    rule(ArtifactKind::File, ".travis.yml", "Travis CI", TargetSet::Platform),
    rule(ArtifactKind::File, "Dockerfile", "Docker", TargetSet::Platform),
    rule(ArtifactKind::File, "docker-compose.yml", "Docker Compose", TargetSet::Platform),
    // --- AI-assistant guidance files ---
    rule(ArtifactKind::File, "CLAUDE.md", "CLAUDE.md", TargetSet::Ai),
    rule(ArtifactKind::File, "AGENTS.md", "AGENTS.md", TargetSet::Ai),
    rule(ArtifactKind::File, ".cursorrules", ".cursorrules", TargetSet::Ai),
    rule(
        ArtifactKind::File,
        ".github/copilot-instructions.md",
        "copilot-instructions.md",
        TargetSet::Ai,
    ),
];

/// Python build-backend markers matched against `pyproject.toml` content,
/// first-match-wins. The fallback when nothing matches (or the manifest is
/// absent/unreadable) is [`PYTHON_MANAGER_DEFAULT`].
pub const PYTHON_BACKEND_RULES: &[(&str, &str)] = &[
    ("poetry.core.masonry", "Poetry"),
    ("hatchling.build", "Hatch"),
    // PDM needs two markers: the build backend and the tool table. A bare
    // "pdm" substring is not evidence; it matches comments and dependency
    // names in manifests that use another backend entirely.
    ("pdm.backend", "PDM"),
    ("[tool.pdm]", "PDM"),
];

/// Label used when no Python backend marker matches.
pub const PYTHON_MANAGER_DEFAULT: &str = "Standard";

/// Marker files any one of which is sufficient to tag a project as Python.
pub const PYTHON_MARKER_FILES: &[&str] = &["pyproject.toml", "setup.py", "requirements.txt"];

/// Node package managers probed on PATH, in fixed preference order. The first
/// one resolvable wins; [`NODE_MANAGER_DEFAULT`] applies when none is found.
pub const NODE_MANAGER_PREFERENCE: &[&str] = &["pnpm", "yarn"];

/// Label used when no preferred Node package manager binary is on PATH.
pub const NODE_MANAGER_DEFAULT: &str = "npm";

/// Task-runner manifests recognized at the project root, first-match-wins.
pub const TASK_RUNNER_MANIFESTS: &[(&str, TaskRunner)] =
    &[("Taskfile.yml", TaskRunner::Task), ("justfile", TaskRunner::Just)];

/// Config-set labels that count as "rich quality tooling" for the
/// consolidation advisory.
pub const QUALITY_TOOLING_LABELS: &[&str] = &["pre-commit", "Prettier", "ESLint", "Ruff"];

/// Well-known test directory names checked at the project root.
pub const TEST_DIR_NAMES: &[&str] = &["tests", "test", "spec", "__tests__"];

/// Source extensions treated as C/C++ evidence by the fallback scan.
pub const C_CPP_EXTENSIONS: &[&str] = &["c", "h", "cc", "cpp", "hpp", "cxx"];

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_artifact_labels_unique_per_target() {
        // Duplicate labels inside one target set would render twice.
        for (i, a) in ARTIFACT_RULES.iter().enumerate() {
            for b in ARTIFACT_RULES.iter().skip(i + 1) {
                assert!(
                    !(a.label == b.label && a.target == b.target),
                    "duplicate artifact label: {}",
                    a.label
                );
            }
        }
    }

    #[test]
    fn test_python_backend_order_is_poetry_hatch_pdm() {
        let labels: Vec<&str> = PYTHON_BACKEND_RULES.iter().map(|(_, l)| *l).collect();
        assert_eq!(labels, vec!["Poetry", "Hatch", "PDM", "PDM"]);
    }

    #[test]
    fn test_pdm_markers_are_specific() {
        // Both PDM markers must be more specific than the bare tool name so a
        // passing mention of "pdm" in another manifest never matches.
        for (pattern, label) in PYTHON_BACKEND_RULES {
            if *label == "PDM" {
                assert_ne!(*pattern, "pdm");
            }
        }
    }

    #[test]
    fn test_quality_labels_are_config_labels() {
        for label in QUALITY_TOOLING_LABELS {
            assert!(
                ARTIFACT_RULES
                    .iter()
                    .any(|r| r.label == *label && r.target == TargetSet::Config),
                "quality label {} missing from config rules",
                label
            );
        }
    }

    #[test]
    fn test_taskfile_outranks_justfile() {
        assert_eq!(TASK_RUNNER_MANIFESTS[0].0, "Taskfile.yml");
    }
}
