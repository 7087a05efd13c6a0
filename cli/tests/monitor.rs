//! # mbedrs CLI Serial Monitor Integration Tests
//!
//! File: cli/tests/monitor.rs
//! Repository: https://github.com/mbedrs/mbedrs
//!
//! ## Overview
//!
//! Integration test for the declared-but-unimplemented `mbedrs monitor`
//! subcommand: it must exist on the CLI surface, warn, and do nothing.
//!

// Declare and use the common module
mod common;
use common::*;
// Import necessary items directly
use predicates::prelude::*;

/// # Test Monitor Is A Declared Stub (`test_monitor_warns_and_exits_cleanly`)
#[test]
fn test_monitor_warns_and_exits_cleanly() {
    mbedrs_cmd()
        .arg("monitor")
        .assert()
        .success()
        .stderr(predicate::str::contains("not implemented yet"));
}
