//! # mbedrs Command Modules
//!
//! File: cli/src/commands/mod.rs
//! Repository: https://github.com/mbedrs/mbedrs
//!
//! ## Overview
//!
//! This module aggregates the user-facing actions that comprise the mbedrs
//! CLI. It serves as the central point for importing and re-exporting
//! command modules to make them accessible to the main application entry
//! point (`main.rs`).
//!
//! ## Architecture
//!
//! Each action lives in its own module with an `*Args` struct (clap) and
//! an async `handle_*` function. Handlers receive the shared process
//! runner by reference; UI resources are constructed once in `main` and
//! passed down rather than accessed through globals.
//!
//! ## Commands
//!
//! - `new`: Create a new Mbed project and open it in the editor
//! - `compile`: Compile the current project via `mbed compile`
//! - `flash`: Compile and flash the binary onto the connected board
//! - `monitor`: Serial monitor (declared, explicitly unimplemented)
//!
/// Implements the `mbedrs compile` command (compiles the current project).
pub mod compile;
/// Implements the `mbedrs flash` command (compiles and flashes the board).
pub mod flash;
/// Implements the `mbedrs monitor` command (declared serial-monitor stub).
pub mod monitor;
/// Implements the `mbedrs new` command (creates a new Mbed project).
pub mod new;
