//! # mbedrs UI Utilities Module (`common::ui`)
//!
//! File: cli/src/common/ui/mod.rs
//! Repository: https://github.com/mbedrs/mbedrs
//!
//! ## Overview
//!
//! This module centralizes the user-facing surfaces of mbedrs: the output
//! channel that receives streamed process output, the notification helpers
//! that report action outcomes, and the interactive prompts used by the
//! project creation flow.
//!
//! ## Architecture
//!
//! - **`output`**: The `OutputChannel` sink. Constructed once in `main`,
//!   owned explicitly, and passed into the process runner.
//! - **`notify`**: Info/warning/error notifications, including the variant
//!   that re-surfaces the output channel next to an error.
//! - **`prompts`**: Single-line stdin input with cancel (EOF) detection.
//!
//! Keeping these behind one namespace keeps the command handlers free of
//! direct `println!`/stdin plumbing and gives the UI resources a single,
//! documented ownership story.
//!
/// Append-only output channel for streamed process output.
pub mod output;
/// Terminal notifications (info, warning, error).
pub mod notify;
/// Interactive terminal input prompts.
pub mod prompts;
