//! # mbedrs CLI Integration Test Common Helpers
//!
//! File: cli/tests/common.rs
//! Repository: https://github.com/mbedrs/mbedrs
//!
//! ## Overview
//!
//! This module provides shared utility functions used across the
//! integration test files (`build.rs`, `new.rs`). The central trick is a
//! fake `mbed` executable placed in a temporary directory that tests
//! prepend to PATH, so the real Mbed CLI is never required and every
//! invocation the binary makes is observable.
//!

// Allow potentially unused code in this common module, as different test files use different helpers.
#![allow(dead_code)]

pub use assert_cmd::Command;
use std::io::Write;

/// # Get mbedrs Command (`mbedrs_cmd`)
///
/// Helper function to create an `assert_cmd::Command` instance pointing to
/// the compiled `mbedrs` binary target for the current test run.
///
/// ## Panics
/// Panics if the `mbedrs` binary cannot be found via `Command::cargo_bin`.
pub fn mbedrs_cmd() -> Command {
    Command::cargo_bin("mbedrs").expect("Failed to find mbedrs binary for testing")
}

/// # Fake Tool Directory (`fake_tool_dir`)
///
/// Creates a temporary directory containing an executable shell script named
/// `mbed` with the given body. Prepending this directory to PATH makes the
/// mbedrs binary (and its pre-flight check) resolve the fake tool.
pub fn fake_tool_dir(script_body: &str) -> tempfile::TempDir {
    let dir = tempfile::tempdir().expect("Failed to create fake tool dir");
    let tool_path = dir.path().join("mbed");
    let mut file = std::fs::File::create(&tool_path).expect("Failed to create fake mbed");
    writeln!(file, "#!/bin/sh").expect("Failed to write fake mbed");
    writeln!(file, "{}", script_body).expect("Failed to write fake mbed");
    drop(file);
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        std::fs::set_permissions(&tool_path, std::fs::Permissions::from_mode(0o755))
            .expect("Failed to mark fake mbed executable");
    }
    dir
}

/// PATH value that resolves the fake tool first, then everything the test
/// runner already had (so `sh`, `which`, etc. keep working).
pub fn path_with(tool_dir: &tempfile::TempDir) -> String {
    format!(
        "{}:{}",
        tool_dir.path().display(),
        std::env::var("PATH").unwrap_or_default()
    )
}
