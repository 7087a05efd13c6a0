//! # mbedrs Compile Command
//!
//! File: cli/src/commands/compile.rs
//! Repository: https://github.com/mbedrs/mbedrs
//!
//! ## Overview
//!
//! This module implements the `mbedrs compile` command, which compiles the
//! current Mbed project by shelling out to `mbed compile`. It handles:
//! - Taking a fresh configuration snapshot at action time
//! - Applying command-line overrides on top of the configured values
//! - Building the exact `mbed compile` command line
//! - Running it through the process runner with streamed output
//! - Reporting success or failure to the user
//!
//! ## Architecture
//!
//! The command flow follows these steps:
//! 1. Re-load configuration (never cached, so edits apply immediately)
//! 2. Apply any `-m/-t/--source/--build/--profile/--library` overrides
//! 3. Build the command line via the pure command builder
//! 4. Execute it in the current directory through the shared `Runner`
//! 5. Notify the outcome; on failure, record an ERROR line in the channel
//!
//! ## Examples
//!
//! ```bash
//! # Compile with the configured mcu/toolchain
//! mbedrs compile
//!
//! # Override the target board for one build
//! mbedrs compile -m K64F
//!
//! # One-off release build of a library
//! mbedrs compile --profile release --library
//! ```
//!
use crate::common::process::Runner;
use crate::common::ui::notify;
use crate::core::config;
use crate::core::error::Result;
use crate::core::invocation::{self, BuildConfiguration, CommandInvocation};
use anyhow::Context;
use clap::Args;
use tracing::info;

/// # Build Override Arguments (`BuildOverrideArgs`)
///
/// Command-line overrides for the configured build parameters. Shared by
/// `mbedrs compile` and `mbedrs flash`; any flag given here replaces the
/// corresponding configuration value for this one action.
#[derive(Args, Debug)]
pub struct BuildOverrideArgs {
    /// Target microcontroller (overrides the configured `build.mcu`).
    #[arg(long = "mcu", short = 'm')]
    mcu: Option<String>,

    /// Toolchain (overrides the configured `build.toolchain`).
    #[arg(long = "toolchain", short = 't')]
    toolchain: Option<String>,

    /// Source directory (overrides the configured `build.source`).
    #[arg(long)]
    source: Option<String>,

    /// Build output directory (overrides the configured `build.build`).
    #[arg(long)]
    build: Option<String>,

    /// Build profile (overrides the configured `build.profile`).
    #[arg(long)]
    profile: Option<String>,

    /// Compile as a library (overrides the configured `build.library`).
    #[arg(long)]
    library: bool,
}

impl BuildOverrideArgs {
    /// Applies the given overrides onto a configuration snapshot.
    fn apply(&self, cfg: &mut BuildConfiguration) {
        if let Some(mcu) = &self.mcu {
            cfg.mcu = mcu.clone();
        }
        if let Some(toolchain) = &self.toolchain {
            cfg.toolchain = toolchain.clone();
        }
        if let Some(source) = &self.source {
            cfg.source_dir = source.clone();
        }
        if let Some(build) = &self.build {
            cfg.build_dir = build.clone();
        }
        if let Some(profile) = &self.profile {
            cfg.profile = profile.clone();
        }
        if self.library {
            cfg.library = true;
        }
    }
}

/// # Compile Command Arguments (`CompileArgs`)
#[derive(Args, Debug)]
pub struct CompileArgs {
    #[command(flatten)]
    overrides: BuildOverrideArgs,
}

/// # Handle Compile Command (`handle_compile`)
///
/// Builds and runs the `mbed compile` invocation for the current project.
///
/// ## Arguments
/// * `args` - Parsed compile arguments (build overrides).
/// * `runner` - The shared process runner owning the output channel.
///
/// ## Returns
/// * `Result<()>` - `Ok(())` when the external compile succeeded.
pub async fn handle_compile(args: CompileArgs, runner: &Runner) -> Result<()> {
    info!("Handling compile command...");
    let snapshot = build_snapshot(&args.overrides)?;
    let command_line = invocation::compile_command(&snapshot);
    execute_build("compile", command_line, runner).await?;
    notify::info("Successfully compiled");
    Ok(())
}

/// Takes the fresh configuration snapshot for one build/flash action and
/// applies the CLI overrides.
pub(super) fn build_snapshot(overrides: &BuildOverrideArgs) -> Result<BuildConfiguration> {
    let cfg = config::load_config().context("Failed to load mbedrs configuration")?;
    let mut snapshot = cfg.build_configuration();
    overrides.apply(&mut snapshot);
    Ok(snapshot)
}

/// Runs one build-family command in the current directory. On failure the
/// ERROR line is recorded in the output channel before the error is
/// propagated to `main` for the user notification.
pub(super) async fn execute_build(
    action: &str,
    command_line: String,
    runner: &Runner,
) -> Result<()> {
    let working_directory =
        std::env::current_dir().context("Failed to determine the current project directory")?;
    let invocation = CommandInvocation::new(command_line, working_directory);
    match runner.exec(action, &invocation).await {
        Ok(()) => Ok(()),
        Err(err) => {
            runner
                .output()
                .append_line(&format!("> ERROR: {}", err));
            Err(err)
        }
    }
}
