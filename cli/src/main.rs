//! # mbedrs Main Entry Point
//!
//! File: cli/src/main.rs
//! Repository: https://github.com/mbedrs/mbedrs
//!
//! ## Overview
//!
//! This file serves as the main entry point for the mbedrs CLI application.
//! It handles:
//! - Command-line argument parsing using Clap
//! - Setting up the logging system based on verbosity flags
//! - Constructing the shared UI resources (output channel, process runner)
//! - The advisory pre-flight check for the external `mbed` tool
//! - Routing execution to appropriate command handlers
//!
//! ## Architecture
//!
//! The application follows a modular command structure:
//! - Each action (`new`, `compile`, `flash`, `monitor`) is a variant in the
//!   `Commands` enum, mapped to a handler in its module
//! - The output channel and process runner are constructed here, once, and
//!   passed to handlers by reference — no module-level singletons
//! - All errors are propagated to this level, converted into a user-facing
//!   error notification (with the output channel's tail for context), and
//!   turned into a non-zero exit code
//!
//! ## Examples
//!
//! Basic mbedrs usage:
//!
//! ```bash
//! # Compile the current project
//! mbedrs compile
//!
//! # Compile and flash with increased verbosity
//! mbedrs -vv flash
//!
//! # Create a new project
//! mbedrs new blinky
//! ```
//!
use clap::Parser;
use std::sync::Arc;
use tracing_subscriber::{fmt, EnvFilter};

// Declare the top-level modules of the CLI crate.
mod commands; // Handles specific command logic (new, compile, flash, monitor)
mod common; // Contains shared utilities (process runner, system checks, UI)
mod core; // Core infrastructure (errors, config, command builder)

use common::process::Runner;
use common::ui::output::OutputChannel;
use crate::core::error::MbedrsError;
use crate::core::invocation::TOOL_NAME;

/// Defines the top-level command-line arguments structure using Clap's derive macros.
#[derive(Parser, Debug)]
#[command(
    name = "mbedrs",
    about = "⚙️ mbedrs: Mbed CLI build, flash, and project workflow tooling",
    long_about = "Create, compile, and flash Mbed projects by driving the external\n\
                  `mbed` tool with your configured build parameters.",
    propagate_version = true,
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

/// Enum defining all available top-level commands.
#[derive(Parser, Debug)]
enum Commands {
    /// Create a new Mbed project and open it in the editor.
    #[command(alias = "n")]
    New(commands::new::NewArgs),
    /// Compile the current Mbed project.
    #[command(alias = "c")]
    Compile(commands::compile::CompileArgs),
    /// Compile the current Mbed project and flash the connected board.
    #[command(alias = "f")]
    Flash(commands::flash::FlashArgs),
    /// Open a serial monitor session (not implemented yet).
    Monitor(commands::monitor::MonitorArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
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

    // Shared UI resources, constructed once and passed down explicitly.
    let output = Arc::new(OutputChannel::new("Mbed tasks"));
    let runner = Runner::new(Arc::clone(&output));

    // Advisory pre-flight check: warn once if the external tool is missing,
    // but never block the requested action on it.
    match common::system::tool_installed(TOOL_NAME).await {
        Ok(true) => tracing::debug!("{} is installed", TOOL_NAME),
        Ok(false) => common::ui::notify::warn(
            &MbedrsError::ToolNotFound {
                tool: TOOL_NAME.to_string(),
            }
            .to_string(),
        ),
        Err(e) => tracing::debug!("Pre-flight check could not run: {e}"),
    }

    let command_result = match cli.command {
        Commands::New(args) => commands::new::handle_new(args, &runner).await,
        Commands::Compile(args) => commands::compile::handle_compile(args, &runner).await,
        Commands::Flash(args) => commands::flash::handle_flash(args, &runner).await,
        Commands::Monitor(args) => commands::monitor::handle_monitor(args).await,
    };

    if let Err(e) = command_result {
        tracing::error!("Command execution failed: {:?}", e);
        common::ui::notify::error_with_output(&e.to_string(), &output);
        std::process::exit(1);
    }

    Ok(())
}
