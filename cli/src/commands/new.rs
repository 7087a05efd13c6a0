//! # mbedrs New-Project Command
//!
//! File: cli/src/commands/new.rs
//! Repository: https://github.com/mbedrs/mbedrs
//!
//! ## Overview
//!
//! This module implements the `mbedrs new` command, which scaffolds a new
//! Mbed project via the external tool's `mbed new` subcommand and then
//! opens the created folder in the configured editor. It handles:
//! - Validating the parent directory the project will be created in
//! - Resolving the project name (argument or interactive prompt)
//! - Running `mbed new <name>` through the process runner
//! - Opening the created folder as a secondary command on success
//!
//! ## Architecture
//!
//! The command flow follows these steps:
//! 1. Validate the parent directory (must exist and be a directory)
//! 2. Resolve the project name; missing name falls back to a prompt, and
//!    an empty or cancelled answer aborts the action
//! 3. Only after both validations pass is any process launched
//! 4. Run `mbed new <name>` in the parent directory
//! 5. On success, notify the user and open the new folder in the editor
//!    through the same runner
//!
//! Validation failures are `MbedrsError::MissingInput` and never spawn a
//! process.
//!
//! ## Examples
//!
//! ```bash
//! # Create a project named "blinky" in the current directory
//! mbedrs new blinky
//!
//! # Create it under ~/projects instead
//! mbedrs new blinky --dir ~/projects
//!
//! # Prompt for the name interactively
//! mbedrs new
//! ```
//!
use crate::common::process::Runner;
use crate::common::ui::{notify, prompts};
use crate::core::config;
use crate::core::error::{MbedrsError, Result};
use crate::core::invocation::{self, CommandInvocation};
use anyhow::Context;
use clap::Args;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// # New Command Arguments (`NewArgs`)
#[derive(Args, Debug)]
pub struct NewArgs {
    /// Name of the project to create. Prompted for interactively when omitted.
    name: Option<String>,

    /// Parent directory in which the project folder is created.
    #[arg(long, short = 'd', default_value = ".")]
    dir: PathBuf,
}

/// # Handle New Command (`handle_new`)
///
/// Orchestrates folder validation, name resolution, and the `mbed new`
/// invocation, followed by opening the created folder in the editor.
///
/// ## Arguments
/// * `args` - Parsed new-project arguments.
/// * `runner` - The shared process runner owning the output channel.
///
/// ## Returns
/// * `Result<()>` - `Ok(())` once the project is created and the editor
///   open command has completed.
pub async fn handle_new(args: NewArgs, runner: &Runner) -> Result<()> {
    info!("Handling new-project command...");

    // Both validations run before any process is launched.
    let parent = validate_parent_dir(&args.dir)?;
    let candidate = match args.name {
        Some(name) => Some(name),
        None => prompts::input("Enter your new project's name")?,
    };
    let name = validated_name(candidate)?;
    debug!(
        "Creating new Mbed project '{}' in {}",
        name,
        parent.display()
    );

    let cfg = config::load_config().context("Failed to load mbedrs configuration")?;

    let create = CommandInvocation::new(invocation::new_project_command(&name), &parent);
    if let Err(err) = runner.exec("new", &create).await {
        runner.output().append_line(&format!("> ERROR: {}", err));
        return Err(err);
    }
    notify::info(&format!("`{}` ran successfully.", create.command_line));

    // Secondary command: open the created folder in the configured editor,
    // through the same runner and output channel.
    let open = CommandInvocation::new(format!("{} {}", cfg.editor.command, name), &parent);
    if let Err(err) = runner.exec_followup(&open).await {
        runner.output().append_line(&format!("> ERROR: {}", err));
        return Err(err);
    }
    Ok(())
}

/// Checks that the requested parent directory exists and is a directory.
/// Returns the path unchanged; a bad selection is `MissingInput`.
fn validate_parent_dir(dir: &Path) -> Result<PathBuf> {
    if !dir.is_dir() {
        return Err(MbedrsError::MissingInput {
            what: format!(
                "an existing folder to create the Mbed project in ('{}' is not one)",
                dir.display()
            ),
        }
        .into());
    }
    Ok(dir.to_path_buf())
}

/// Resolves the project-name candidate: `None` (cancelled prompt) and
/// empty/whitespace answers abort the action with `MissingInput`.
fn validated_name(candidate: Option<String>) -> Result<String> {
    match candidate {
        Some(name) if !name.trim().is_empty() => Ok(name.trim().to_string()),
        _ => Err(MbedrsError::MissingInput {
            what: "a project name".to_string(),
        }
        .into()),
    }
}
