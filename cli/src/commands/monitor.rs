//! # mbedrs Serial Monitor Command
//!
//! File: cli/src/commands/monitor.rs
//! Repository: https://github.com/mbedrs/mbedrs
//!
//! ## Overview
//!
//! Declared stub for the `mbedrs monitor` command. Opening a serial
//! session against the connected board is intentionally unimplemented:
//! the subcommand exists so the CLI surface is complete, but the handler
//! only informs the user and performs no action. The seam for a future
//! serial-session component lives here.
//!
use crate::common::ui::notify;
use crate::core::error::Result;
use clap::Args;
use tracing::info;

/// # Monitor Command Arguments (`MonitorArgs`)
#[derive(Args, Debug)]
pub struct MonitorArgs {}

/// # Handle Monitor Command (`handle_monitor`)
///
/// Explicitly unimplemented: warns the user and launches nothing.
pub async fn handle_monitor(_args: MonitorArgs) -> Result<()> {
    info!("Handling serial-monitor command...");
    notify::warn("The serial monitor is not implemented yet.");
    Ok(())
}
