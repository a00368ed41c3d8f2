//! # DevGuide Classifier
//!
//! File: cli/src/engine/classify.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/devguide
//!
//! ## Overview
//!
//! This module runs the fixed, ordered battery of evidence probes against a
//! project directory and folds the results into an immutable
//! [`ProjectProfile`]. It is the only place where detection decisions are
//! made; the rule *data* lives in `engine::rules`, and the raw filesystem
//! queries live in `common::fs::probe`.
//!
//! ## Architecture
//!
//! The probe battery runs in a fixed order, which is also the insertion order
//! of technology tags in the profile:
//!
//! 1. Node.js: `package.json` is necessary; `tsconfig.json` upgrades the tag
//!    from JavaScript to TypeScript (mutually exclusive, never both)
//! 2. Python: any one of the marker files in `rules::PYTHON_MARKER_FILES`
//! 3. Rust: `Cargo.toml`
//! 4. Go: `go.mod`
//! 5. C/C++: `CMakeLists.txt` takes precedence over a bare `Makefile`; a
//!    shallow source-extension scan is the last-resort hint. Exactly one
//!    C/C++ tag is ever recorded.
//!
//! Package managers are resolved per ecosystem: Python by first-match-wins
//! content scan of `pyproject.toml` against known backend markers, Node by
//! probing a fixed preference order of binaries on `PATH`. The PATH lookup is
//! injected as a function so classification stays pure and unit tests never
//! depend on the host environment.
//!
//! Probe-level read failures degrade the affected rule to its default; the
//! guide must always be generable when the root directory itself is valid.
//!
use crate::common::fs::probe;
use crate::engine::profile::{
    ProjectProfile, ECOSYSTEM_NODE, ECOSYSTEM_PYTHON, TAG_C_CPP, TAG_C_CPP_CMAKE, TAG_C_CPP_MAKE,
    TAG_GO, TAG_NODE_JAVASCRIPT, TAG_NODE_TYPESCRIPT, TAG_PYTHON, TAG_RUST,
};
use crate::engine::rules::{
    ArtifactKind, TargetSet, ARTIFACT_RULES, C_CPP_EXTENSIONS, NODE_MANAGER_DEFAULT,
    NODE_MANAGER_PREFERENCE, PYTHON_BACKEND_RULES, PYTHON_MANAGER_DEFAULT, PYTHON_MARKER_FILES,
    TASK_RUNNER_MANIFESTS,
};
use std::path::Path;
use tracing::debug;

/// # Classify a Project Directory (`classify`)
///
/// Runs the full probe battery against `root` and returns the completed
/// profile. The profile is fully determined by the filesystem state at the
/// moment of probing; nothing is cached between runs.
///
/// ## Arguments
///
/// * `root` - The project directory to inspect.
/// * `binary_exists` - Capability answering whether a named binary is
///   resolvable on the execution path (used for Node package-manager
///   resolution). Injected so tests stay hermetic.
///
/// ## Returns
///
/// * `ProjectProfile` - The immutable classification snapshot.
pub fn classify(root: &Path, binary_exists: impl Fn(&str) -> bool) -> ProjectProfile {
    debug!("Classifying project directory: {}", root.display());
    let mut profile = ProjectProfile::default();

    detect_node(root, &mut profile, &binary_exists);
    detect_python(root, &mut profile);
    detect_rust(root, &mut profile);
    detect_go(root, &mut profile);
    detect_c_cpp(root, &mut profile);
    detect_task_runner(root, &mut profile);
    detect_artifacts(root, &mut profile);
    detect_test_dirs(root, &mut profile);

    debug!("Classification result: {:?}", profile);
    profile
}

/// Node detection: `package.json` is the necessary marker; `tsconfig.json`
/// upgrades the tag to TypeScript. Exactly one Node variant tag is recorded.
fn detect_node(root: &Path, profile: &mut ProjectProfile, binary_exists: &impl Fn(&str) -> bool) {
    if !probe::file_exists(root, "package.json") {
        return;
    }
    let tag = if probe::file_exists(root, "tsconfig.json") {
        TAG_NODE_TYPESCRIPT
    } else {
        TAG_NODE_JAVASCRIPT
    };
    profile.technologies.push(tag.to_string());
    profile.package_managers.insert(
        ECOSYSTEM_NODE.to_string(),
        resolve_node_manager(binary_exists),
    );
}

/// Environment-based Node package-manager resolution: first binary from the
/// fixed preference order that resolves on PATH wins; `npm` is the default.
fn resolve_node_manager(binary_exists: &impl Fn(&str) -> bool) -> String {
    for candidate in NODE_MANAGER_PREFERENCE {
        if binary_exists(candidate) {
            debug!("Resolved Node package manager: {}", candidate);
            return candidate.to_string();
        }
    }
    NODE_MANAGER_DEFAULT.to_string()
}

/// Python detection: any single marker file is sufficient; no further
/// distinction is made at the technology-tag stage.
fn detect_python(root: &Path, profile: &mut ProjectProfile) {
    let found = PYTHON_MARKER_FILES
        .iter()
        .any(|marker| probe::file_exists(root, marker));
    if !found {
        return;
    }
    profile.technologies.push(TAG_PYTHON.to_string());
    profile.package_managers.insert(
        ECOSYSTEM_PYTHON.to_string(),
        resolve_python_manager(root),
    );
}

/// Content-based Python package-manager resolution: a first-match-wins linear
/// scan of `pyproject.toml` against the declared backend markers. The rule
/// declaration order is the tie-break. An absent or unreadable manifest
/// degrades to the "Standard" label.
fn resolve_python_manager(root: &Path) -> String {
    for (pattern, label) in PYTHON_BACKEND_RULES {
        if probe::file_contains(root, "pyproject.toml", pattern) {
            debug!("Resolved Python package manager: {}", label);
            return label.to_string();
        }
    }
    PYTHON_MANAGER_DEFAULT.to_string()
}

/// Rust detection: single marker file.
fn detect_rust(root: &Path, profile: &mut ProjectProfile) {
    if probe::file_exists(root, "Cargo.toml") {
        profile.technologies.push(TAG_RUST.to_string());
    }
}

/// Go detection: single marker file.
fn detect_go(root: &Path, profile: &mut ProjectProfile) {
    if probe::file_exists(root, "go.mod") {
        profile.technologies.push(TAG_GO.to_string());
    }
}

/// C/C++ detection. CMake presence takes precedence over a bare Makefile;
/// failing both, a shallow scan for C/C++ source extensions provides a
/// language-only hint. Only one tag from this family is ever recorded.
fn detect_c_cpp(root: &Path, profile: &mut ProjectProfile) {
    let tag = if probe::file_exists(root, "CMakeLists.txt") {
        Some(TAG_C_CPP_CMAKE)
    } else if probe::file_exists(root, "Makefile") {
        Some(TAG_C_CPP_MAKE)
    } else if probe::any_file_with_extension(root, C_CPP_EXTENSIONS) {
        Some(TAG_C_CPP)
    } else {
        None
    };
    if let Some(tag) = tag {
        profile.technologies.push(tag.to_string());
    }
}

/// Task-runner detection: first manifest from the fixed list found at the
/// root wins.
fn detect_task_runner(root: &Path, profile: &mut ProjectProfile) {
    for (manifest, runner) in TASK_RUNNER_MANIFESTS {
        if probe::file_exists(root, manifest) {
            profile.task_runner = Some(*runner);
            return;
        }
    }
}

/// Iterates the generic artifact rule table, appending each matched label to
/// its target set in declaration order.
fn detect_artifacts(root: &Path, profile: &mut ProjectProfile) {
    for rule in ARTIFACT_RULES {
        let matched = match rule.kind {
            ArtifactKind::File => probe::file_exists(root, rule.path),
            ArtifactKind::Dir => probe::dir_exists(root, rule.path),
        };
        if !matched {
            continue;
        }
        let target = match rule.target {
            TargetSet::Config => &mut profile.config_files,
            TargetSet::Doc => &mut profile.doc_files,
            TargetSet::Platform => &mut profile.platform_files,
            TargetSet::Ai => &mut profile.ai_rule_files,
        };
        target.push(rule.label.to_string());
    }
}

/// Records well-known test directories present at the root.
fn detect_test_dirs(root: &Path, profile: &mut ProjectProfile) {
    for name in crate::engine::rules::TEST_DIR_NAMES {
        if probe::dir_exists(root, name) {
            profile.test_dirs.push(name.to_string());
        }
    }
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::profile::TaskRunner;
    use std::fs;
    use tempfile::tempdir;

    /// No host binary is ever "found" in these tests unless stated otherwise.
    fn no_binaries(_name: &str) -> bool {
        false
    }

    // Helper to create a mock project directory with specified files
    fn create_mock_project(files: &[&str]) -> tempfile::TempDir {
        let temp_dir = tempdir().unwrap();
        for file in files {
            let file_path = temp_dir.path().join(file);
            if let Some(parent) = file_path.parent() {
                fs::create_dir_all(parent).unwrap();
            }
            fs::write(file_path, "").unwrap(); // Create empty file
        }
        temp_dir
    }

    // Helper to create a mock project directory with file content
    fn create_mock_project_with_content(files: &[(&str, &str)]) -> tempfile::TempDir {
        let temp_dir = tempdir().unwrap();
        for (file, content) in files {
            let file_path = temp_dir.path().join(file);
            if let Some(parent) = file_path.parent() {
                fs::create_dir_all(parent).unwrap();
            }
            fs::write(file_path, content).unwrap();
        }
        temp_dir
    }

    #[test]
    fn test_empty_dir_yields_empty_profile() {
        let dir = tempdir().unwrap();
        let profile = classify(dir.path(), no_binaries);
        assert!(profile.technologies.is_empty());
        assert!(profile.package_managers.is_empty());
        assert!(profile.task_runner.is_none());
    }

    #[test]
    fn test_typescript_suppresses_javascript() {
        let dir = create_mock_project(&["package.json", "tsconfig.json"]);
        let profile = classify(dir.path(), no_binaries);
        assert_eq!(profile.technologies, vec![TAG_NODE_TYPESCRIPT]);
        // Never both variants.
        assert!(!profile.has_technology(TAG_NODE_JAVASCRIPT));
    }

    #[test]
    fn test_javascript_without_tsconfig() {
        let dir = create_mock_project(&["package.json"]);
        let profile = classify(dir.path(), no_binaries);
        assert_eq!(profile.technologies, vec![TAG_NODE_JAVASCRIPT]);
        assert_eq!(profile.package_manager(ECOSYSTEM_NODE), Some("npm"));
    }

    #[test]
    fn test_node_manager_preference_order() {
        let dir = create_mock_project(&["package.json"]);

        let pnpm_only = classify(dir.path(), |name| name == "pnpm");
        assert_eq!(pnpm_only.package_manager(ECOSYSTEM_NODE), Some("pnpm"));

        let yarn_only = classify(dir.path(), |name| name == "yarn");
        assert_eq!(yarn_only.package_manager(ECOSYSTEM_NODE), Some("yarn"));

        // pnpm outranks yarn when both resolve.
        let both = classify(dir.path(), |name| name == "pnpm" || name == "yarn");
        assert_eq!(both.package_manager(ECOSYSTEM_NODE), Some("pnpm"));
    }

    #[test]
    fn test_python_manager_hatch() {
        let dir = create_mock_project_with_content(&[(
            "pyproject.toml",
            "[build-system]\nrequires = [\"hatchling\"]\nbuild-backend = \"hatchling.build\"\n",
        )]);
        let profile = classify(dir.path(), no_binaries);
        assert_eq!(profile.technologies, vec![TAG_PYTHON]);
        assert_eq!(profile.package_manager(ECOSYSTEM_PYTHON), Some("Hatch"));
    }

    #[test]
    fn test_python_manager_first_match_wins() {
        // A manifest mentioning both Poetry and PDM resolves to Poetry because
        // the Poetry rule is declared first.
        let dir = create_mock_project_with_content(&[(
            "pyproject.toml",
            "build-backend = \"poetry.core.masonry.api\"\n# migrated from pdm\n",
        )]);
        let profile = classify(dir.path(), no_binaries);
        assert_eq!(profile.package_manager(ECOSYSTEM_PYTHON), Some("Poetry"));
    }

    #[test]
    fn test_python_manager_pdm_backend_markers() {
        let backend = create_mock_project_with_content(&[(
            "pyproject.toml",
            "[build-system]\nrequires = [\"pdm-backend\"]\nbuild-backend = \"pdm.backend\"\n",
        )]);
        let profile = classify(backend.path(), no_binaries);
        assert_eq!(profile.package_manager(ECOSYSTEM_PYTHON), Some("PDM"));

        // The tool table alone also identifies PDM.
        let tool_table = create_mock_project_with_content(&[(
            "pyproject.toml",
            "[tool.pdm]\ndistribution = true\n",
        )]);
        let table_profile = classify(tool_table.path(), no_binaries);
        assert_eq!(table_profile.package_manager(ECOSYSTEM_PYTHON), Some("PDM"));
    }

    #[test]
    fn test_python_manager_ignores_passing_pdm_mention() {
        // A manifest that merely mentions "pdm" in a comment, with an
        // unrecognized backend, must degrade to Standard.
        let dir = create_mock_project_with_content(&[(
            "pyproject.toml",
            "[build-system]\nbuild-backend = \"setuptools.build_meta\"\n# migrated away from pdm\n",
        )]);
        let profile = classify(dir.path(), no_binaries);
        assert_eq!(profile.package_manager(ECOSYSTEM_PYTHON), Some("Standard"));
    }

    #[test]
    fn test_python_manager_unreadable_manifest_degrades_to_standard() {
        // Invalid UTF-8 makes the content read fail; the backend scan must
        // treat that as no match and fall back to Standard.
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("pyproject.toml"), b"\xff\xfehatchling.build").unwrap();
        let profile = classify(dir.path(), no_binaries);
        assert!(profile.has_python());
        assert_eq!(profile.package_manager(ECOSYSTEM_PYTHON), Some("Standard"));
    }

    #[test]
    fn test_python_manager_standard_fallbacks() {
        // Unrecognized backend degrades to Standard.
        let dir = create_mock_project_with_content(&[(
            "pyproject.toml",
            "build-backend = \"setuptools.build_meta\"\n",
        )]);
        let profile = classify(dir.path(), no_binaries);
        assert_eq!(profile.package_manager(ECOSYSTEM_PYTHON), Some("Standard"));

        // requirements.txt alone: Python tag, Standard manager (no manifest).
        let plain = create_mock_project(&["requirements.txt"]);
        let plain_profile = classify(plain.path(), no_binaries);
        assert!(plain_profile.has_python());
        assert_eq!(
            plain_profile.package_manager(ECOSYSTEM_PYTHON),
            Some("Standard")
        );
    }

    #[test]
    fn test_detection_order_node_before_python() {
        let dir = create_mock_project(&["package.json", "tsconfig.json", "pyproject.toml"]);
        let profile = classify(dir.path(), no_binaries);
        assert_eq!(profile.technologies, vec![TAG_NODE_TYPESCRIPT, TAG_PYTHON]);
    }

    #[test]
    fn test_rust_and_go_markers() {
        let dir = create_mock_project(&["Cargo.toml", "go.mod"]);
        let profile = classify(dir.path(), no_binaries);
        assert_eq!(profile.technologies, vec![TAG_RUST, TAG_GO]);
    }

    #[test]
    fn test_cmake_takes_precedence_over_makefile() {
        let dir = create_mock_project(&["CMakeLists.txt", "Makefile"]);
        let profile = classify(dir.path(), no_binaries);
        assert_eq!(profile.technologies, vec![TAG_C_CPP_CMAKE]);
        assert!(!profile.has_technology(TAG_C_CPP_MAKE));
    }

    #[test]
    fn test_c_cpp_extension_fallback() {
        let dir = create_mock_project(&["src/main.cpp"]);
        let profile = classify(dir.path(), no_binaries);
        assert_eq!(profile.technologies, vec![TAG_C_CPP]);
    }

    #[test]
    fn test_taskfile_outranks_justfile() {
        let dir = create_mock_project(&["Taskfile.yml", "justfile"]);
        let profile = classify(dir.path(), no_binaries);
        assert_eq!(profile.task_runner, Some(TaskRunner::Task));

        let just_dir = create_mock_project(&["justfile"]);
        let just_profile = classify(just_dir.path(), no_binaries);
        assert_eq!(just_profile.task_runner, Some(TaskRunner::Just));
    }

    #[test]
    fn test_artifact_sets_populated() {
        let dir = create_mock_project(&[
            "README.md",
            "CONTRIBUTING.md",
            ".prettierrc",
            ".github/workflows/ci.yml",
            "Dockerfile",
            "CLAUDE.md",
        ]);
        let profile = classify(dir.path(), no_binaries);
        assert_eq!(profile.config_files, vec!["Prettier"]);
        assert_eq!(profile.doc_files, vec!["README.md", "CONTRIBUTING.md"]);
        assert_eq!(profile.platform_files, vec!["GitHub Actions", "Docker"]);
        assert_eq!(profile.ai_rule_files, vec!["CLAUDE.md"]);
    }

    #[test]
    fn test_test_dirs_detected() {
        let dir = tempdir().unwrap();
        fs::create_dir_all(dir.path().join("tests")).unwrap();
        fs::create_dir_all(dir.path().join("__tests__")).unwrap();
        let profile = classify(dir.path(), no_binaries);
        assert_eq!(profile.test_dirs, vec!["tests", "__tests__"]);
    }
}
