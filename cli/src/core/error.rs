//! # mbedrs Error Types
//!
//! File: cli/src/core/error.rs
//! Repository: https://github.com/mbedrs/mbedrs
//!
//! ## Overview
//!
//! This module defines the error types and error handling mechanisms used
//! throughout the mbedrs application. It provides a consistent approach to
//! error management with detailed error information and context.
//!
//! ## Architecture
//!
//! The error system consists of two main components:
//! - `MbedrsError`: A custom error enum using `thiserror` for specific error types
//! - `Result<T>`: A type alias for `anyhow::Result<T>` for flexible error handling
//!
//! The error types cover the failure taxonomy of the tool:
//! - Configuration loading errors
//! - Missing user input (folder selection, project name)
//! - The external `mbed` tool not being found on PATH
//! - External command failures (non-zero exit or signal termination)
//! - Programming errors around the process runner (empty command, busy runner)
//!
//! ## Examples
//!
//! Using the error system:
//!
//! ```rust
//! // Return a specific error type
//! if !dir.is_dir() {
//!     return Err(MbedrsError::MissingInput {
//!         what: "project directory".into(),
//!     })?;
//! }
//!
//! // Add context to errors using anyhow
//! let content = fs::read_to_string(&path)
//!     .with_context(|| format!("Failed to read file: {}", path.display()))?;
//! ```
//!
//! All failures are caught at the command-handler level and converted into a
//! user-facing notification; none are allowed to propagate as panics.
//!
use thiserror::Error;

/// Custom error type for the mbedrs application.
#[derive(Error, Debug)]
pub enum MbedrsError {
    #[error("Configuration error: {0}")]
    Config(String),

    /// Required user input was absent or cancelled. Actions guarded by this
    /// error abort before any external process is launched.
    #[error("Missing input: {what}")]
    MissingInput { what: String },

    /// The external build tool was not found on the execution path.
    /// Advisory only; later actions are still attempted.
    #[error("'{tool}' was not found on your PATH. Install Mbed CLI first.")]
    ToolNotFound { tool: String },

    /// An external command terminated unsuccessfully. The message carries the
    /// original command line and the exit status (or signal description) so
    /// the failure is reproducible from the notification alone.
    #[error("Command `{cmd}` exited with status code {status}.")]
    ExternalCommand { cmd: String, status: String },

    /// The process runner was handed an empty command line. The command
    /// builders never produce one, so this is a programming error and is
    /// reported rather than silently ignored.
    #[error("Refusing to run an empty command line.")]
    EmptyCommand,

    /// A second action was triggered while the runner's child process was
    /// still in flight. Concurrent triggers are rejected, not queued.
    #[error("Another {action} action is still running. Wait for it to finish.")]
    ActionInProgress { action: String },
}

/// Type alias for Result using anyhow::Error for broad compatibility.
/// Anyhow allows for easy context addition and flexible error handling.
pub type Result<T> = anyhow::Result<T>;
