//! # mbedrs Flash Command
//!
//! File: cli/src/commands/flash.rs
//! Repository: https://github.com/mbedrs/mbedrs
//!
//! ## Overview
//!
//! This module implements the `mbedrs flash` command: compile the current
//! Mbed project and flash the resulting binary onto the connected board.
//! The invocation is exactly the compile command with the tool's flash
//! flag (`-f`) appended; everything else (configuration snapshot,
//! overrides, execution, reporting) is shared with `mbedrs compile`.
//!
//! ## Examples
//!
//! ```bash
//! # Compile and flash with the configured mcu/toolchain
//! mbedrs flash
//!
//! # Flash a release build onto a specific board
//! mbedrs flash -m K64F --profile release
//! ```
//!
use super::compile::{build_snapshot, execute_build, BuildOverrideArgs};
use crate::common::process::Runner;
use crate::common::ui::notify;
use crate::core::error::Result;
use crate::core::invocation;
use clap::Args;
use tracing::info;

/// # Flash Command Arguments (`FlashArgs`)
#[derive(Args, Debug)]
pub struct FlashArgs {
    #[command(flatten)]
    overrides: BuildOverrideArgs,
}

/// # Handle Flash Command (`handle_flash`)
///
/// Builds and runs the `mbed compile ... -f` invocation for the current
/// project, compiling and then flashing the connected board.
pub async fn handle_flash(args: FlashArgs, runner: &Runner) -> Result<()> {
    info!("Handling flash command...");
    let snapshot = build_snapshot(&args.overrides)?;
    let command_line = invocation::flash_command(&snapshot);
    execute_build("flash", command_line, runner).await?;
    notify::info("Successfully compiled and flashed");
    Ok(())
}
