//! # mbedrs Output Channel (`common::ui::output`)
//!
//! File: cli/src/common/ui/output.rs
//! Repository: https://github.com/mbedrs/mbedrs
//!
//! ## Overview
//!
//! This module implements the output channel: the append-only, clearable
//! text surface that receives the streamed output of external `mbed`
//! processes. It is the terminal counterpart of an editor's output panel.
//!
//! ## Architecture
//!
//! An `OutputChannel` is an explicitly constructed, explicitly owned handle:
//! it is created once in `main`, wrapped in an `Arc`, and passed into the
//! process runner and the command handlers. There is no module-level
//! singleton. Appended text is written through to the terminal immediately
//! (arrival order, no reordering) and also retained in a transcript so that
//! error notifications can point back at the full output.
//!
//! Interior mutability uses a `std::sync::Mutex`; the stdout and stderr
//! reader tasks of one child process share the channel through the `Arc`.
//!
use std::io::Write;
use std::sync::Mutex;

/// Append-only, clearable text sink for streamed process output.
#[derive(Debug)]
pub struct OutputChannel {
    /// Display name, shown when the channel is brought to the foreground.
    name: String,
    /// Retained transcript of everything appended since the last `clear`.
    transcript: Mutex<String>,
}

impl OutputChannel {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            transcript: Mutex::new(String::new()),
        }
    }

    /// Appends a chunk of text exactly as received: written through to the
    /// terminal immediately and recorded in the transcript.
    pub fn append(&self, chunk: &str) {
        {
            let mut transcript = self.lock_transcript();
            transcript.push_str(chunk);
        }
        let mut stdout = std::io::stdout().lock();
        // Terminal write failures (e.g. closed pipe) must not abort a build.
        let _ = stdout.write_all(chunk.as_bytes());
        let _ = stdout.flush();
    }

    /// Appends a full line, adding the trailing newline.
    pub fn append_line(&self, line: &str) {
        self.append(line);
        self.append("\n");
    }

    /// Discards the retained transcript. Called before each run so the
    /// channel only ever shows the current action's output.
    pub fn clear(&self) {
        self.lock_transcript().clear();
    }

    /// Brings the channel to the foreground: in a terminal this prints a
    /// banner separating it from whatever came before.
    pub fn show(&self) {
        let mut stdout = std::io::stdout().lock();
        let _ = writeln!(stdout, "--- {} ---", self.name);
        let _ = stdout.flush();
    }

    /// Returns a copy of the retained transcript.
    pub fn contents(&self) -> String {
        self.lock_transcript().clone()
    }

    fn lock_transcript(&self) -> std::sync::MutexGuard<'_, String> {
        // A poisoned lock only means another appender panicked mid-write;
        // the transcript itself is still usable text.
        self.transcript
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
