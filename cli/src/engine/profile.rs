//! # DevGuide Project Profile
//!
//! File: cli/src/engine/profile.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/devguide
//!
//! ## Overview
//!
//! This module defines `ProjectProfile`, the immutable snapshot of everything
//! the classifier detected about a project directory: technology tags, the
//! resolved package manager per ecosystem, and the artifact label sets
//! (configuration, documentation, CI/CD platform, AI-assistant guidance files,
//! test directories).
//!
//! ## Architecture
//!
//! The profile is built exactly once per run by `engine::classify` and never
//! mutated afterwards; every downstream stage (recommendations, rendering)
//! takes it by shared reference. Technology tags keep their *detection order*
//! and never contain duplicates; artifact label lists keep insertion order for
//! display while behaving as sets for membership.
//!
use std::collections::BTreeMap;

/// Technology tag for a Node.js project using TypeScript.
pub const TAG_NODE_TYPESCRIPT: &str = "Node.js/TypeScript";
/// Technology tag for a Node.js project using plain JavaScript.
pub const TAG_NODE_JAVASCRIPT: &str = "Node.js/JavaScript";
/// Technology tag for a Python project.
pub const TAG_PYTHON: &str = "Python";
/// Technology tag for a Rust project.
pub const TAG_RUST: &str = "Rust";
/// Technology tag for a Go project.
pub const TAG_GO: &str = "Go";
/// Technology tag for a C/C++ project driven by CMake.
pub const TAG_C_CPP_CMAKE: &str = "C/C++ (CMake)";
/// Technology tag for a C/C++ project driven by a bare Makefile.
pub const TAG_C_CPP_MAKE: &str = "C/C++ (Make)";
/// Technology tag for a C/C++ project detected only via source extensions.
pub const TAG_C_CPP: &str = "C/C++";

/// Ecosystem key for the Python package-manager selection.
pub const ECOSYSTEM_PYTHON: &str = "python";
/// Ecosystem key for the Node package-manager selection.
pub const ECOSYSTEM_NODE: &str = "node";

/// # Task Runner (`TaskRunner`)
///
/// The task-runner manifest detected at the project root, if any. Exactly one
/// is recorded per run (first-match-wins over the manifest list in
/// `engine::rules`), and its presence switches the Core Workflow section to
/// the runner-centric rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskRunner {
    /// go-task, configured by `Taskfile.yml`.
    Task,
    /// just, configured by `justfile`.
    Just,
}

impl TaskRunner {
    /// Human-readable tool name for prose and advisories.
    pub fn name(&self) -> &'static str {
        match self {
            TaskRunner::Task => "Task",
            TaskRunner::Just => "just",
        }
    }

    /// The manifest file that identified this runner.
    pub fn manifest(&self) -> &'static str {
        match self {
            TaskRunner::Task => "Taskfile.yml",
            TaskRunner::Just => "justfile",
        }
    }

    /// The command users type to invoke a target.
    pub fn command(&self) -> &'static str {
        match self {
            TaskRunner::Task => "task",
            TaskRunner::Just => "just",
        }
    }
}

/// # Project Profile (`ProjectProfile`)
///
/// Immutable classification result for a single run. Fully determined by the
/// filesystem state at the moment of probing; constructed by folding probe
/// results in `engine::classify` and passed by shared reference through the
/// rest of the pipeline.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectProfile {
    /// Detected technology tags, in detection order, without duplicates.
    /// Variant tags are mutually exclusive (TypeScript XOR JavaScript).
    pub technologies: Vec<String>,
    /// Resolved package manager per ecosystem key (`"python"`, `"node"`).
    /// Only populated for ecosystems whose technology tag was detected.
    pub package_managers: BTreeMap<String, String>,
    /// Detected tooling-configuration artifacts (formatters, linters, hooks).
    pub config_files: Vec<String>,
    /// Detected documentation and governance artifacts.
    pub doc_files: Vec<String>,
    /// Detected CI/CD and container platform artifacts.
    pub platform_files: Vec<String>,
    /// Detected AI-assistant guidance files (CLAUDE.md, .cursorrules, ...).
    pub ai_rule_files: Vec<String>,
    /// Well-known test directories present at the project root.
    pub test_dirs: Vec<String>,
    /// The task-runner manifest found at the root, if any.
    pub task_runner: Option<TaskRunner>,
}

impl ProjectProfile {
    /// Whether a technology tag was detected (exact match).
    pub fn has_technology(&self, tag: &str) -> bool {
        self.technologies.iter().any(|t| t == tag)
    }

    /// Whether either Node variant tag (TypeScript or JavaScript) is present.
    pub fn has_node(&self) -> bool {
        self.has_technology(TAG_NODE_TYPESCRIPT) || self.has_technology(TAG_NODE_JAVASCRIPT)
    }

    /// Whether the Python tag is present.
    pub fn has_python(&self) -> bool {
        self.has_technology(TAG_PYTHON)
    }

    /// Resolved package manager for an ecosystem, if one was recorded.
    pub fn package_manager(&self, ecosystem: &str) -> Option<&str> {
        self.package_managers.get(ecosystem).map(String::as_str)
    }

    /// Whether a documentation/governance artifact label was recorded.
    pub fn has_doc_file(&self, label: &str) -> bool {
        self.doc_files.iter().any(|l| l == label)
    }

    /// Whether a tooling-configuration artifact label was recorded.
    pub fn has_config_file(&self, label: &str) -> bool {
        self.config_files.iter().any(|l| l == label)
    }
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_has_node_covers_both_variants() {
        let mut profile = ProjectProfile::default();
        assert!(!profile.has_node());
        profile.technologies.push(TAG_NODE_JAVASCRIPT.to_string());
        assert!(profile.has_node());

        let mut ts_profile = ProjectProfile::default();
        ts_profile.technologies.push(TAG_NODE_TYPESCRIPT.to_string());
        assert!(ts_profile.has_node());
    }

    #[test]
    fn test_package_manager_lookup() {
        let mut profile = ProjectProfile::default();
        profile
            .package_managers
            .insert(ECOSYSTEM_PYTHON.to_string(), "Hatch".to_string());
        assert_eq!(profile.package_manager(ECOSYSTEM_PYTHON), Some("Hatch"));
        assert_eq!(profile.package_manager(ECOSYSTEM_NODE), None);
    }

    #[test]
    fn test_task_runner_metadata() {
        assert_eq!(TaskRunner::Task.manifest(), "Taskfile.yml");
        assert_eq!(TaskRunner::Task.command(), "task");
        assert_eq!(TaskRunner::Just.name(), "just");
    }
}
