//! # DevGuide Main Entry Point
//!
//! File: cli/src/main.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/devguide
//!
//! ## Overview
//!
//! This file serves as the main entry point for the DevGuide CLI application.
//! It handles:
//! - Command-line argument parsing using Clap
//! - Setting up the logging system based on verbosity flags
//! - Routing execution to the guide-generation handler
//!
//! ## Architecture
//!
//! DevGuide is a single-purpose tool, so the CLI surface is intentionally flat:
//! one optional positional directory argument plus the usual help/version/verbosity
//! flags. The actual work happens in `commands::generate`, which wires the
//! detection-and-generation pipeline together:
//!
//! 1. Probe the target directory for filesystem evidence
//! 2. Classify the evidence into an immutable `ProjectProfile`
//! 3. Derive advisory recommendations from the profile
//! 4. Render the numbered guide sections and assemble the document
//! 5. Write the result to `docs/<locale>/developer-guide/DEVGUIDE.md`
//!
//! All errors are propagated to this level for consistent handling.
//!
//! ## Examples
//!
//! Basic DevGuide usage:
//!
//! ```bash
//! # Generate a guide for the current directory
//! devguide
//!
//! # Generate a guide for a specific project with debug logging
//! devguide -vv ~/src/some-project
//! ```
//!
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::{fmt, EnvFilter};

// Declare the top-level modules of the CLI crate.
mod commands; // The guide-generation command handler.
mod common; // Shared utilities (filesystem probing/IO, PATH lookup).
mod core; // Core infrastructure (errors, config).
mod engine; // The detection-and-generation engine (classify, recommend, render, assemble).

/// Defines the top-level command-line arguments structure using Clap's derive macros.
#[derive(Parser, Debug)]
#[command(
    name = "devguide",
    about = "📘 DevGuide: Onboarding Guide Generator for Project Directories",
    long_about = "Inspect a project directory, detect its languages, build tooling,\n\
                  documentation artifacts, and CI platforms, and render a structured\n\
                  developer-guide document for onboarding.",
    propagate_version = true,
    version
)]
struct Cli {
    /// Directory to inspect (defaults to the current working directory).
    #[arg(value_name = "DIRECTORY")]
    directory: Option<PathBuf>,
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

fn main() -> anyhow::Result<()> {
    // Use anyhow::Result directly
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();

    tracing::debug!("Parsed CLI arguments: {:?}", cli);

    let args = commands::generate::GenerateArgs {
        directory: cli.directory,
    };
    let command_result = commands::generate::handle_generate(args);

    if let Err(e) = command_result {
        tracing::error!("Guide generation failed: {:?}", e);
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    Ok(())
}

// --- Basic Integration Tests ---
#[cfg(test)]
mod tests {
    use assert_cmd::Command;
    use predicates::prelude::*;
    fn devguide_cmd() -> Command {
        Command::cargo_bin("devguide").expect("Failed to find devguide binary for testing")
    }
    #[test]
    fn test_main_help_flag() {
        devguide_cmd().arg("--help").assert().success();
    }
    #[test]
    fn test_main_version_flag() {
        devguide_cmd()
            .arg("--version")
            .assert()
            .success()
            .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    }
}
