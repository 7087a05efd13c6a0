//! # mbedrs Process Execution Utilities (`common::process`)
//!
//! File: cli/src/common/process.rs
//! Repository: https://github.com/mbedrs/mbedrs
//!
//! ## Overview
//!
//! This module implements the process runner: it executes a shell command
//! string in a given working directory, streams the child's combined
//! stdout/stderr to the output channel as it arrives, and resolves success
//! or failure from the exit status. Every external `mbed` (and editor-open)
//! invocation in the application goes through here.
//!
//! ## Architecture
//!
//! - **`Runner`**: owns the shared `OutputChannel` handle and a busy flag.
//!   One `Runner` is constructed in `main` and passed to the command
//!   handlers. A trigger that arrives while a child process is still in
//!   flight is rejected with `MbedrsError::ActionInProgress`; there is no
//!   queueing and no global mutable process handle.
//! - **`Runner::exec`**: the presentation wrapper. Clears the output
//!   channel, brings it to the foreground, appends a header line echoing
//!   the command, then runs it.
//! - **Streaming**: stdout and stderr are piped and drained by two reader
//!   tasks that forward every chunk to the output channel in arrival
//!   order. No buffering or reordering happens beyond the natural
//!   interleaving of the two streams and the reassembly of UTF-8
//!   sequences that a chunk boundary split in half.
//! - **Resolution**: exit status 0 resolves `Ok(())`; any non-zero status
//!   or signal termination resolves `MbedrsError::ExternalCommand`, whose
//!   message embeds the original command line and the status value.
//!
//! The command string is run through the platform shell (`sh -c` on POSIX,
//! `cmd /C` on Windows) so that the configured values behave exactly as
//! they would typed into a terminal. There is no retry, no timeout, and no
//! cancellation: a hung external process hangs its action.
//!
use crate::common::ui::output::OutputChannel;
use crate::core::error::{MbedrsError, Result};
use crate::core::invocation::CommandInvocation;
use anyhow::Context;
use std::process::Stdio;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::io::AsyncReadExt;
use tokio::process::Command;
use tracing::{debug, info};

/// Executes shell command strings and reports their completion.
///
/// Holds the per-invocation state the application needs: the output sink
/// and the busy/idle flag that serializes actions.
#[derive(Debug)]
pub struct Runner {
    output: Arc<OutputChannel>,
    busy: AtomicBool,
}

impl Runner {
    pub fn new(output: Arc<OutputChannel>) -> Self {
        Self {
            output,
            busy: AtomicBool::new(false),
        }
    }

    /// The output channel this runner streams into.
    pub fn output(&self) -> &OutputChannel {
        &self.output
    }

    /// # Execute Command (`exec`)
    ///
    /// Runs one command through the output channel with the standard
    /// presentation: clear the channel, bring it to the foreground, append
    /// a header echoing the command, then stream the process output.
    ///
    /// ## Arguments
    /// * `action` - Human-readable action name ("compile", "flash", "new"),
    ///   used in the busy-rejection message.
    /// * `invocation` - The command line and working directory to run.
    ///
    /// ## Returns
    /// * `Ok(())` - The process terminated with the canonical success status.
    /// * `Err` - `ActionInProgress` if another invocation is in flight,
    ///   `EmptyCommand` for an empty command line, `ExternalCommand` for a
    ///   non-zero exit or signal, or a spawn/IO error with context.
    pub async fn exec(&self, action: &str, invocation: &CommandInvocation) -> Result<()> {
        if self.busy.swap(true, Ordering::AcqRel) {
            return Err(MbedrsError::ActionInProgress {
                action: action.to_string(),
            }
            .into());
        }
        let result = self.exec_inner(invocation).await;
        self.busy.store(false, Ordering::Release);
        result
    }

    /// # Run Secondary Command (`exec_followup`)
    ///
    /// Runs a follow-up command of an already-successful action (e.g.
    /// opening the created project in the editor) through the same channel
    /// without clearing the transcript of the primary command.
    pub async fn exec_followup(&self, invocation: &CommandInvocation) -> Result<()> {
        if self.busy.swap(true, Ordering::AcqRel) {
            return Err(MbedrsError::ActionInProgress {
                action: "follow-up".to_string(),
            }
            .into());
        }
        self.output
            .append_line(&format!("> Running `{}`...", invocation.command_line));
        let result = self.run_streamed(invocation).await;
        self.busy.store(false, Ordering::Release);
        result
    }

    async fn exec_inner(&self, invocation: &CommandInvocation) -> Result<()> {
        self.output.clear();
        self.output.show();
        self.output
            .append_line(&format!("> Running `{}`...", invocation.command_line));
        self.run_streamed(invocation).await
    }

    /// Spawns exactly one child process for the invocation, forwards both
    /// of its streams to the output channel, and maps the exit status.
    async fn run_streamed(&self, invocation: &CommandInvocation) -> Result<()> {
        let cmd_line = invocation.command_line.trim();
        if cmd_line.is_empty() {
            return Err(MbedrsError::EmptyCommand.into());
        }

        debug!(
            "Spawning `{}` in {}",
            cmd_line,
            invocation.working_directory.display()
        );
        let mut child = shell_command(cmd_line)
            .current_dir(&invocation.working_directory)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .with_context(|| format!("Failed to spawn `{}`", cmd_line))?;

        let stdout = child
            .stdout
            .take()
            .context("Child process stdout was not piped")?;
        let stderr = child
            .stderr
            .take()
            .context("Child process stderr was not piped")?;

        let stdout_task = tokio::spawn(forward_stream(stdout, Arc::clone(&self.output)));
        let stderr_task = tokio::spawn(forward_stream(stderr, Arc::clone(&self.output)));

        let status = child
            .wait()
            .await
            .with_context(|| format!("Failed waiting for `{}`", cmd_line))?;

        // Both streams must be fully drained before the result resolves, so
        // that no output arrives after the completion notification.
        stdout_task
            .await
            .context("Stdout forwarding task panicked")?
            .context("Failed reading child stdout")?;
        stderr_task
            .await
            .context("Stderr forwarding task panicked")?
            .context("Failed reading child stderr")?;

        if status.success() {
            info!("`{}` completed successfully", cmd_line);
            Ok(())
        } else {
            Err(MbedrsError::ExternalCommand {
                cmd: cmd_line.to_string(),
                status: describe_status(&status),
            }
            .into())
        }
    }
}

/// Forwards every chunk read from `reader` to the output channel as it
/// arrives, until EOF.
///
/// Reads are byte-oriented and can split a multi-byte UTF-8 sequence in
/// half, so the incomplete tail of each chunk is held back and decoded
/// together with the next read instead of being replaced with U+FFFD.
async fn forward_stream<R>(mut reader: R, sink: Arc<OutputChannel>) -> std::io::Result<()>
where
    R: tokio::io::AsyncRead + Unpin,
{
    let mut buf = [0u8; 4096];
    let mut pending: Vec<u8> = Vec::new();
    loop {
        let n = reader.read(&mut buf).await?;
        if n == 0 {
            if !pending.is_empty() {
                // EOF with a truncated sequence still pending: the stream
                // really was malformed, so replacement is correct here.
                sink.append(&String::from_utf8_lossy(&pending));
            }
            return Ok(());
        }
        pending.extend_from_slice(&buf[..n]);
        let decoded = take_complete_utf8(&mut pending);
        if !decoded.is_empty() {
            sink.append(&decoded);
        }
    }
}

/// Drains the longest decodable prefix of `pending` into a `String`.
///
/// Invalid sequences become U+FFFD, but a sequence that is merely
/// incomplete stays in `pending` for the next read to finish.
fn take_complete_utf8(pending: &mut Vec<u8>) -> String {
    let mut out = String::new();
    loop {
        match std::str::from_utf8(pending) {
            Ok(s) => {
                out.push_str(s);
                pending.clear();
                return out;
            }
            Err(err) => {
                let valid = err.valid_up_to();
                out.push_str(&String::from_utf8_lossy(&pending[..valid]));
                match err.error_len() {
                    Some(bad) => {
                        out.push('\u{FFFD}');
                        pending.drain(..valid + bad);
                    }
                    None => {
                        pending.drain(..valid);
                        return out;
                    }
                }
            }
        }
    }
}

/// Builds the platform shell invocation for a raw command string.
#[cfg(not(windows))]
fn shell_command(cmd_line: &str) -> Command {
    let mut command = Command::new("sh");
    command.arg("-c").arg(cmd_line);
    command
}

/// Builds the platform shell invocation for a raw command string.
#[cfg(windows)]
fn shell_command(cmd_line: &str) -> Command {
    let mut command = Command::new("cmd");
    command.arg("/C").arg(cmd_line);
    command
}

/// Renders an exit status for the failure message: the numeric exit code,
/// or the terminating signal where no code exists.
fn describe_status(status: &std::process::ExitStatus) -> String {
    if let Some(code) = status.code() {
        return code.to_string();
    }
    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return format!("signal {}", signal);
        }
    }
    "unknown".to_string()
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::invocation::CommandInvocation;

    fn test_runner() -> Runner {
        Runner::new(Arc::new(OutputChannel::new("test")))
    }

    fn invocation(cmd: &str) -> CommandInvocation {
        CommandInvocation::new(cmd, std::env::temp_dir())
    }

    #[tokio::test]
    async fn test_exit_zero_resolves_success() {
        let runner = test_runner();
        runner
            .exec("compile", &invocation("exit 0"))
            .await
            .expect("exit 0 should resolve success");
    }

    #[tokio::test]
    async fn test_nonzero_exit_carries_command_and_status() {
        let runner = test_runner();
        let err = runner
            .exec("compile", &invocation("exit 1"))
            .await
            .expect_err("exit 1 should resolve failure");
        let msg = err.to_string();
        assert!(msg.contains("exit 1"), "message must echo the command: {msg}");
        assert!(msg.contains('1'), "message must carry the status: {msg}");
        let app_err = err
            .downcast_ref::<MbedrsError>()
            .expect("should be an MbedrsError");
        assert!(matches!(app_err, MbedrsError::ExternalCommand { .. }));
    }

    #[tokio::test]
    async fn test_output_channel_receives_both_streams() {
        let runner = test_runner();
        runner
            .exec(
                "compile",
                &invocation("printf alpha; printf beta 1>&2; printf gamma"),
            )
            .await
            .expect("command should succeed");
        let contents = runner.output().contents();
        assert!(contents.contains("alpha"));
        assert!(contents.contains("beta"));
        assert!(contents.contains("gamma"));
    }

    #[tokio::test]
    async fn test_multibyte_output_survives_chunked_reads() {
        // 4095 filler bytes put a two-byte character exactly across the
        // reader's buffer boundary; the transcript must still carry it
        // intact, with no replacement characters.
        let runner = test_runner();
        let cmd = r#"printf '%s\303\251ok' "$(head -c 4095 /dev/zero | tr '\0' a)""#;
        runner
            .exec("compile", &invocation(cmd))
            .await
            .expect("command should succeed");
        let contents = runner.output().contents();
        let expected = format!("{}éok", "a".repeat(4095));
        assert!(
            contents.contains(&expected),
            "transcript must carry the split character intact"
        );
        assert!(
            !contents.contains('\u{FFFD}'),
            "transcript must not contain replacement characters"
        );
    }

    #[test]
    fn test_incomplete_sequence_is_held_for_next_chunk() {
        // "é" is 0xC3 0xA9; feed the bytes one at a time.
        let mut pending = vec![0xC3];
        assert_eq!(take_complete_utf8(&mut pending), "");
        assert_eq!(pending, vec![0xC3]);
        pending.push(0xA9);
        assert_eq!(take_complete_utf8(&mut pending), "é");
        assert!(pending.is_empty());
    }

    #[test]
    fn test_invalid_bytes_are_replaced_not_stalled() {
        // 0xFF can never start a sequence; it must not wedge the decoder.
        let mut pending = vec![b'a', 0xFF, b'b'];
        assert_eq!(take_complete_utf8(&mut pending), "a\u{FFFD}b");
        assert!(pending.is_empty());
    }

    #[tokio::test]
    async fn test_exec_clears_channel_and_writes_header() {
        let runner = test_runner();
        runner.output().append("stale output from a previous action");
        runner
            .exec("compile", &invocation("exit 0"))
            .await
            .expect("command should succeed");
        let contents = runner.output().contents();
        assert!(!contents.contains("stale output"));
        assert!(contents.starts_with("> Running `exit 0`...\n"));
    }

    #[tokio::test]
    async fn test_empty_command_is_an_error() {
        let runner = test_runner();
        let err = runner
            .exec("compile", &invocation("   "))
            .await
            .expect_err("empty command must not be a silent no-op");
        let app_err = err
            .downcast_ref::<MbedrsError>()
            .expect("should be an MbedrsError");
        assert!(matches!(app_err, MbedrsError::EmptyCommand));
    }

    #[tokio::test]
    async fn test_concurrent_trigger_is_rejected() {
        let runner = Arc::new(test_runner());
        let background = Arc::clone(&runner);
        let long_running =
            tokio::spawn(async move { background.exec("compile", &invocation("sleep 2")).await });
        // Give the first invocation time to take the busy flag.
        tokio::time::sleep(std::time::Duration::from_millis(300)).await;

        let err = runner
            .exec("flash", &invocation("exit 0"))
            .await
            .expect_err("second trigger while busy must be rejected");
        let app_err = err
            .downcast_ref::<MbedrsError>()
            .expect("should be an MbedrsError");
        assert!(matches!(app_err, MbedrsError::ActionInProgress { .. }));

        long_running
            .await
            .expect("task should not panic")
            .expect("first invocation should still succeed");
    }
}
