//! # DevGuide Generate Command
//!
//! File: cli/src/commands/generate.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/devguide
//!
//! ## Overview
//!
//! This module implements the one operation DevGuide performs: inspect a
//! project directory and (re)generate its developer guide. It validates the
//! input directory, loads the optional configuration, and then runs the
//! engine pipeline end to end.
//!
//! ## Architecture
//!
//! The handler is a thin orchestration layer; every stage it calls is a pure
//! transformation of its inputs:
//!
//! 1. Resolve and validate the target directory (fatal if absent)
//! 2. Load `.devguide.toml` (defaults when missing)
//! 3. `engine::classify`: probe and build the `ProjectProfile`
//! 4. `engine::recommend`: derive advisories from the profile
//! 5. `engine::assemble`: render the sections and join the document
//! 6. Write `docs/<locale>/developer-guide/DEVGUIDE.md` (fatal on failure)
//!
//! Runs are a pure function of current filesystem state: no history is kept,
//! and the output file is unconditionally overwritten.
//!
use crate::common::system;
use crate::core::config;
use crate::core::error::{DevguideError, Result};
use crate::engine::{assemble, classify, recommend};
use std::path::PathBuf;
use tracing::{debug, info};

/// # Generate Command Arguments (`GenerateArgs`)
///
/// Arguments for a guide-generation run, filled in from the CLI surface.
#[derive(Debug, Default)]
pub struct GenerateArgs {
    /// Directory to inspect; `None` means the current working directory.
    pub directory: Option<PathBuf>,
}

/// # Handle Generate (`handle_generate`)
///
/// Runs the full detection-and-generation pipeline for the requested
/// directory and writes the guide document.
///
/// ## Arguments
///
/// * `args`: The parsed `GenerateArgs`.
///
/// ## Returns
///
/// * `Result<()>`: `Ok(())` once the guide has been written, or an `Err` for
///   the fatal failure modes (missing input directory, unwritable output).
pub fn handle_generate(args: GenerateArgs) -> Result<()> {
    let root = match args.directory {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };
    // Fatal: the run aborts before any probing if the root is not a directory.
    if !root.is_dir() {
        return Err(DevguideError::InputDirectoryNotFound {
            path: root.display().to_string(),
        }
        .into());
    }
    info!("Generating developer guide for {}", root.display());

    let cfg = config::load_config(&root)?;

    let profile = classify::classify(&root, system::binary_on_path);
    let advisories = recommend::recommend(&profile);
    debug!(
        "Detected {} technologies, {} advisories",
        profile.technologies.len(),
        advisories.len()
    );
    let document = assemble::assemble(&profile, &advisories);
    let output_path = assemble::write_guide(&root, &cfg.output.locale, &document)?;

    println!("Developer guide written to {}", output_path.display());
    Ok(())
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_missing_directory_is_fatal() {
        let args = GenerateArgs {
            directory: Some(PathBuf::from("/definitely/not/a/real/dir")),
        };
        let err = handle_generate(args).unwrap_err();
        assert!(err.to_string().contains("Input directory not found"));
    }

    #[test]
    fn test_generates_guide_for_empty_directory() {
        let temp = tempdir().unwrap();
        let args = GenerateArgs {
            directory: Some(temp.path().to_path_buf()),
        };
        handle_generate(args).unwrap();
        let guide = temp.path().join("docs/en/developer-guide/DEVGUIDE.md");
        let content = fs::read_to_string(guide).unwrap();
        assert!(content.contains("Detected technologies: none"));
        // Governance advisories fire for a bare directory.
        assert!(content.contains("## 4. Recommendations"));
    }

    #[test]
    fn test_locale_from_config_controls_output_path() {
        let temp = tempdir().unwrap();
        fs::write(
            temp.path().join(".devguide.toml"),
            "[output]\nlocale = \"fr\"\n",
        )
        .unwrap();
        let args = GenerateArgs {
            directory: Some(temp.path().to_path_buf()),
        };
        handle_generate(args).unwrap();
        assert!(temp
            .path()
            .join("docs/fr/developer-guide/DEVGUIDE.md")
            .is_file());
    }

    #[test]
    fn test_regeneration_is_idempotent() {
        let temp = tempdir().unwrap();
        fs::write(temp.path().join("pyproject.toml"), "").unwrap();
        let guide = temp.path().join("docs/en/developer-guide/DEVGUIDE.md");

        handle_generate(GenerateArgs {
            directory: Some(temp.path().to_path_buf()),
        })
        .unwrap();
        let first = fs::read_to_string(&guide).unwrap();

        handle_generate(GenerateArgs {
            directory: Some(temp.path().to_path_buf()),
        })
        .unwrap();
        let second = fs::read_to_string(&guide).unwrap();
        assert_eq!(first, second);
    }
}
