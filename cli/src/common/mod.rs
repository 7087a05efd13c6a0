//! # mbedrs Common Utilities (`common`)
//!
//! File: cli/src/common/mod.rs
//! Repository: https://github.com/mbedrs/mbedrs
//!
//! ## Overview
//!
//! This module serves as the root and organizational entry point for the
//! shared utility modules used throughout the mbedrs CLI application. It
//! aggregates functionality for cross-cutting concerns: external process
//! execution, host system checks, and terminal UI surfaces.
//!
//! Centralizing these utilities under the `common::` namespace keeps a
//! clear separation between command-specific logic (`commands::`) and
//! core infrastructure (`core::`).
//!
//! ## Architecture
//!
//! - **`process`**: The process runner. Spawns external commands through
//!   the platform shell, streams their output to the output channel, and
//!   maps exit statuses into the error system.
//! - **`system`**: Host environment checks, i.e. the advisory pre-flight
//!   lookup for the external `mbed` tool.
//! - **`ui`**: Terminal UI surfaces: the output channel, notifications,
//!   and interactive prompts.
//!
/// Utilities for executing and managing external processes.
pub mod process;
/// Utilities for system-level information and checks (tool detection).
pub mod system;
/// Utilities for terminal user interface elements (output channel, notifications, prompts).
pub mod ui;
