//! # mbedrs User Notifications (`common::ui::notify`)
//!
//! File: cli/src/common/ui/notify.rs
//! Repository: https://github.com/mbedrs/mbedrs
//!
//! ## Overview
//!
//! Terminal notifications: the counterpart of an editor's information,
//! warning, and error message popups. Handlers call these at the end of an
//! action to report the outcome; process/config failures never propagate
//! past the handler without being surfaced here first.
//!
//! Notifications go to stderr so they interleave cleanly with streamed
//! process output on stdout.
//!
use crate::common::ui::output::OutputChannel;

/// Informational notification (e.g. "Successfully compiled").
pub fn info(message: &str) {
    eprintln!("{}", message);
}

/// Warning notification (advisory, does not block anything).
pub fn warn(message: &str) {
    eprintln!("Warning: {}", message);
}

/// Error notification with the "Show Output" affordance: after the message,
/// the tail of the output channel transcript is re-surfaced so the relevant
/// tool output is visible next to the error.
pub fn error_with_output(message: &str, output: &OutputChannel) {
    eprintln!("Error: {}", message);
    let contents = output.contents();
    let tail: Vec<&str> = contents.lines().rev().take(10).collect();
    if !tail.is_empty() {
        eprintln!("--- last output ---");
        for line in tail.iter().rev() {
            eprintln!("{}", line);
        }
    }
}
