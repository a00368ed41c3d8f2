//! # DevGuide Section Renderers
//!
//! File: cli/src/engine/render.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/devguide
//!
//! ## Overview
//!
//! This module renders the individual sections of the developer guide. Each
//! renderer is a pure function of the `ProjectProfile` (plus the advisory list
//! for the final section) and the running header-numbering state, producing
//! one Markdown text block.
//!
//! ## Architecture
//!
//! Header numbering is an explicit integer pair threaded through the
//! renderers as [`SectionCounter`]:
//!
//! - entering a new top-level section increments the major number and resets
//!   the minor counter to zero;
//! - entering a *present* optional subsection increments the minor counter.
//!
//! Numbers are therefore assigned by position among present sections, never
//! from a fixed table, so omitting an optional section or subsection can
//! never leave a gap. Integer state also keeps two-digit subsection counts
//! exact (`2.10`, `2.11`, ...), which fractional arithmetic would not.
//!
//! Section inventory:
//!
//! 1. **Overview**: unconditional; technology list, polyglot warning when
//!    Python and a Node variant coexist, and display lines for detected
//!    artifact sets.
//! 2. **Environment Setup**: optional subsections, in order: Task Runner,
//!    Node.js Setup, Python Setup.
//! 3. **Core Workflow**: task-runner-centric when a runner manifest exists,
//!    otherwise per-ecosystem literal commands chosen by the resolved
//!    package manager.
//! 4. **Recommendations**: only when at least one advisory exists.
//!
use crate::engine::profile::{
    ProjectProfile, ECOSYSTEM_NODE, ECOSYSTEM_PYTHON, TAG_C_CPP, TAG_C_CPP_CMAKE, TAG_C_CPP_MAKE,
    TAG_GO, TAG_RUST,
};
use std::fmt::Write as _;

/// Separator between technology tags in the Overview listing.
const TECHNOLOGY_SEPARATOR: &str = ", ";

/// # Section Counter (`SectionCounter`)
///
/// Explicit header-numbering state: the current top-level section number and
/// the subsection counter within it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SectionCounter {
    major: u32,
    minor: u32,
}

impl SectionCounter {
    /// Fresh state; no section entered yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enters the next top-level section: increments the major number and
    /// resets the subsection counter. Returns the section's number.
    pub fn enter_section(&mut self) -> u32 {
        self.major += 1;
        self.minor = 0;
        self.major
    }

    /// Enters the next present optional subsection of the current section.
    /// Returns the `(major, minor)` pair for the heading, e.g. `(2, 1)`.
    pub fn enter_subsection(&mut self) -> (u32, u32) {
        self.minor += 1;
        (self.major, self.minor)
    }
}

/// Renders section 1 (Overview). Always present.
///
/// Lists detected technologies joined by a fixed separator, emits the
/// polyglot-warning paragraph exactly once when both Python and a Node
/// variant are present, and appends display lines for the artifact sets.
pub fn render_overview(profile: &ProjectProfile, counter: &mut SectionCounter) -> String {
    let number = counter.enter_section();
    let mut block = format!("## {}. Overview\n\n", number);

    if profile.technologies.is_empty() {
        block.push_str("Detected technologies: none\n");
    } else {
        let _ = writeln!(
            block,
            "Detected technologies: {}",
            profile.technologies.join(TECHNOLOGY_SEPARATOR)
        );
    }

    if profile.has_python() && profile.has_node() {
        block.push('\n');
        block.push_str(
            "This is a polyglot repository: both a Node.js and a Python toolchain are in \
             active use. Set up both environments before running the full workflow, and \
             expect build and test commands to differ per ecosystem.\n",
        );
    }

    // Display-only artifact lines; omitted entirely when a set is empty.
    let display_groups: [(&str, &Vec<String>); 5] = [
        ("Tooling configuration", &profile.config_files),
        ("Documentation", &profile.doc_files),
        ("CI/CD & platforms", &profile.platform_files),
        ("AI assistant guidance", &profile.ai_rule_files),
        ("Test directories", &profile.test_dirs),
    ];
    let mut wrote_any = false;
    for (title, labels) in display_groups {
        if labels.is_empty() {
            continue;
        }
        if !wrote_any {
            block.push('\n');
            wrote_any = true;
        }
        let _ = writeln!(block, "- {}: {}", title, labels.join(", "));
    }

    block
}

/// Renders section 2 (Environment Setup). The section itself is always
/// present; its subsections (Task Runner, Node.js Setup, Python Setup) appear
/// only when the corresponding evidence exists, numbered positionally.
pub fn render_environment(profile: &ProjectProfile, counter: &mut SectionCounter) -> String {
    let number = counter.enter_section();
    let mut block = format!("## {}. Environment Setup\n", number);
    let mut any_subsection = false;

    if let Some(runner) = profile.task_runner {
        let (major, minor) = counter.enter_subsection();
        any_subsection = true;
        let _ = write!(
            block,
            "\n### {}.{} Task Runner\n\n\
             This project drives its workflow with {} (`{}`). Install `{}` and run \
             `{} --list` to see every available target.\n",
            major,
            minor,
            runner.name(),
            runner.manifest(),
            runner.command(),
            runner.command()
        );
    }

    if profile.has_node() {
        let (major, minor) = counter.enter_subsection();
        any_subsection = true;
        let manager = profile
            .package_manager(ECOSYSTEM_NODE)
            .unwrap_or("npm")
            .to_string();
        let _ = write!(
            block,
            "\n### {}.{} Node.js Setup\n\n\
             Resolved package manager: {}. Install dependencies with `{} install` \
             from the repository root.\n",
            major, minor, manager, manager
        );
    }

    if profile.has_python() {
        let (major, minor) = counter.enter_subsection();
        any_subsection = true;
        let manager = profile
            .package_manager(ECOSYSTEM_PYTHON)
            .unwrap_or("Standard");
        let _ = write!(
            block,
            "\n### {}.{} Python Setup\n\n{}\n",
            major,
            minor,
            python_setup_text(manager)
        );
    }

    if !any_subsection {
        block.push_str(
            "\nNo ecosystem-specific setup was detected; a standard toolchain for the \
             languages listed above should suffice.\n",
        );
    }

    block
}

/// Setup instructions per resolved Python package manager.
fn python_setup_text(manager: &str) -> &'static str {
    match manager {
        "Poetry" => {
            "Resolved package manager: Poetry. Install Poetry, then run `poetry install` \
             to create the virtual environment and install all dependencies."
        }
        "Hatch" => {
            "Resolved package manager: Hatch. Install Hatch, then run `hatch env create` \
             to provision the default environment."
        }
        "PDM" => {
            "Resolved package manager: PDM. Install PDM, then run `pdm install` to set \
             up the environment from the lockfile."
        }
        _ => {
            "Resolved package manager: Standard (pip + venv). Create an environment with \
             `python -m venv .venv`, activate it, and install dependencies with \
             `pip install -e .` (or `pip install -r requirements.txt`)."
        }
    }
}

/// Renders section 3 (Core Workflow). Always present, with two alternative
/// renderings: task-runner-centric when a runner manifest exists, otherwise
/// per-ecosystem literal commands chosen by the resolved package manager.
pub fn render_workflow(profile: &ProjectProfile, counter: &mut SectionCounter) -> String {
    let number = counter.enter_section();
    let mut block = format!("## {}. Core Workflow\n\n", number);

    if let Some(runner) = profile.task_runner {
        let cmd = runner.command();
        let _ = write!(
            block,
            "All common operations go through {}. Universal targets:\n\n\
             - `{cmd} build` — build the project\n\
             - `{cmd} run` — run the project\n\
             - `{cmd} clean` — remove build artifacts\n\
             - `{cmd} fmt` — format sources\n\
             - `{cmd} lint` — run static checks\n\
             - `{cmd} test` — run the test suite\n",
            runner.name()
        );
        return block;
    }

    let mut wrote_any = false;
    if profile.has_node() {
        let manager = profile.package_manager(ECOSYSTEM_NODE).unwrap_or("npm");
        push_command_group(&mut block, &mut wrote_any, "Node.js", node_commands(manager));
    }
    if profile.has_python() {
        let manager = profile
            .package_manager(ECOSYSTEM_PYTHON)
            .unwrap_or("Standard");
        push_command_group(
            &mut block,
            &mut wrote_any,
            "Python",
            python_commands(manager),
        );
    }
    if profile.has_technology(TAG_RUST) {
        push_command_group(
            &mut block,
            &mut wrote_any,
            "Rust",
            vec![
                "`cargo build` — build".to_string(),
                "`cargo test` — run tests".to_string(),
                "`cargo fmt` — format sources".to_string(),
                "`cargo clippy` — lint".to_string(),
            ],
        );
    }
    if profile.has_technology(TAG_GO) {
        push_command_group(
            &mut block,
            &mut wrote_any,
            "Go",
            vec![
                "`go build ./...` — build".to_string(),
                "`go test ./...` — run tests".to_string(),
                "`go vet ./...` — lint".to_string(),
            ],
        );
    }
    if profile.has_technology(TAG_C_CPP_CMAKE) {
        push_command_group(
            &mut block,
            &mut wrote_any,
            "C/C++ (CMake)",
            vec![
                "`cmake -S . -B build` — configure".to_string(),
                "`cmake --build build` — build".to_string(),
                "`ctest --test-dir build` — run tests".to_string(),
            ],
        );
    }
    if profile.has_technology(TAG_C_CPP_MAKE) || profile.has_technology(TAG_C_CPP) {
        push_command_group(
            &mut block,
            &mut wrote_any,
            "C/C++ (Make)",
            vec![
                "`make` — build".to_string(),
                "`make test` — run tests".to_string(),
                "`make clean` — remove build artifacts".to_string(),
            ],
        );
    }

    if !wrote_any {
        block.push_str(
            "No recognized build tooling was detected. Document the project's build and \
             test commands here manually.\n",
        );
    }

    block
}

/// Appends one ecosystem's command listing to the workflow block. Groups are
/// separated by a blank line; the first group needs no leading separator.
fn push_command_group(block: &mut String, wrote_any: &mut bool, title: &str, commands: Vec<String>) {
    if *wrote_any {
        block.push('\n');
    }
    *wrote_any = true;
    let _ = writeln!(block, "**{}**\n", title);
    for command in commands {
        let _ = writeln!(block, "- {}", command);
    }
}

/// Literal Node command templates, one set per resolved package manager.
fn node_commands(manager: &str) -> Vec<String> {
    let (install, build, test, lint) = match manager {
        "pnpm" => ("pnpm install", "pnpm build", "pnpm test", "pnpm lint"),
        "yarn" => ("yarn install", "yarn build", "yarn test", "yarn lint"),
        _ => ("npm install", "npm run build", "npm test", "npm run lint"),
    };
    vec![
        format!("`{install}` — install dependencies"),
        format!("`{build}` — build"),
        format!("`{test}` — run tests"),
        format!("`{lint}` — lint"),
    ]
}

/// Literal Python command templates, one set per resolved package manager.
fn python_commands(manager: &str) -> Vec<String> {
    match manager {
        "Poetry" => vec![
            "`poetry install` — install dependencies".to_string(),
            "`poetry run pytest` — run tests".to_string(),
            "`poetry build` — build distributions".to_string(),
        ],
        "Hatch" => vec![
            "`hatch env create` — provision the environment".to_string(),
            "`hatch run test` — run tests".to_string(),
            "`hatch build` — build distributions".to_string(),
        ],
        "PDM" => vec![
            "`pdm install` — install dependencies".to_string(),
            "`pdm run pytest` — run tests".to_string(),
            "`pdm build` — build distributions".to_string(),
        ],
        _ => vec![
            "`pip install -e .` — install in editable mode".to_string(),
            "`pytest` — run tests".to_string(),
        ],
    }
}

/// Renders section 4 (Recommendations). Callers must skip this section
/// entirely when no advisories exist so the numbering stays contiguous.
pub fn render_recommendations(advisories: &[String], counter: &mut SectionCounter) -> String {
    debug_assert!(!advisories.is_empty());
    let number = counter.enter_section();
    let mut block = format!("## {}. Recommendations\n\n", number);
    for advisory in advisories {
        let _ = writeln!(block, "- {}", advisory);
    }
    block
}
