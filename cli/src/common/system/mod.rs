//! # mbedrs System Utilities Module (`common::system`)
//!
//! File: cli/src/common/system/mod.rs
//! Repository: https://github.com/mbedrs/mbedrs
//!
//! ## Overview
//!
//! System-level checks against the host environment. Currently this means
//! the advisory pre-flight check that detects, at startup, whether the
//! external `mbed` tool is reachable on the execution path.
//!
//! ## Architecture
//!
//! The check shells out to the platform-appropriate lookup command
//! (`which` on POSIX systems, `where` on Windows) and inspects its exit
//! status; nothing is parsed from its output. The result is advisory
//! only: a missing tool produces a single warning and has no effect on
//! whether later compile/flash actions are attempted — those surface
//! their own failure when the spawn inevitably fails.
//!
use crate::core::error::Result;
use anyhow::Context;
use std::process::Stdio;
use tokio::process::Command;
use tracing::debug;

/// # Tool Availability Check (`tool_installed`)
///
/// Checks whether `tool` resolves on the current execution path.
///
/// ## Arguments
/// * `tool` - Name of the executable to look up (e.g. "mbed").
///
/// ## Returns
/// * `Ok(true)` - The lookup command found the tool.
/// * `Ok(false)` - The lookup command ran but did not find it.
/// * `Err` - The lookup command itself could not be spawned.
pub async fn tool_installed(tool: &str) -> Result<bool> {
    let lookup = if cfg!(windows) { "where" } else { "which" };
    debug!("Pre-flight check: `{} {}`", lookup, tool);
    let status = Command::new(lookup)
        .arg(tool)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .await
        .with_context(|| format!("Failed to run `{} {}`", lookup, tool))?;
    Ok(status.success())
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_finds_the_shell_itself() {
        // `sh` is guaranteed present on any POSIX host running these tests.
        assert!(tool_installed("sh").await.expect("lookup should run"));
    }

    #[tokio::test]
    async fn test_reports_missing_tool() {
        let found = tool_installed("mbedrs-definitely-not-a-real-tool")
            .await
            .expect("lookup should run");
        assert!(!found);
    }
}
