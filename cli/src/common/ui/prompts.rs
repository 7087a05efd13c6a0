//! # mbedrs Interactive Prompts (`common::ui::prompts`)
//!
//! File: cli/src/common/ui/prompts.rs
//! Repository: https://github.com/mbedrs/mbedrs
//!
//! ## Overview
//!
//! Interactive terminal input, the counterpart of an editor's input box.
//! Used by the project creation flow when the project name was not given
//! on the command line.
//!
//! A prompt distinguishes between an empty answer (the user pressed enter)
//! and a cancelled one (EOF on stdin); both cause the calling action to
//! abort before any process is launched.
//!
use crate::core::error::Result;
use anyhow::Context;
use std::io::{BufRead, Write};

/// # Single-Line Input (`input`)
///
/// Prints `prompt` and reads one line from stdin.
///
/// ## Returns
/// * `Ok(Some(answer))` - The trimmed line the user entered (may be empty).
/// * `Ok(None)` - Stdin reached EOF before a line arrived (cancelled).
/// * `Err` - Reading or writing the terminal failed.
pub fn input(prompt: &str) -> Result<Option<String>> {
    let mut stderr = std::io::stderr().lock();
    write!(stderr, "{}: ", prompt).context("Failed to write prompt")?;
    stderr.flush().context("Failed to flush prompt")?;

    let mut line = String::new();
    let bytes_read = std::io::stdin()
        .lock()
        .read_line(&mut line)
        .context("Failed to read input")?;
    if bytes_read == 0 {
        return Ok(None); // EOF, treated as a cancelled input box
    }
    Ok(Some(line.trim().to_string()))
}
