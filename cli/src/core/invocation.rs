//! # mbedrs Command Builder
//!
//! File: cli/src/core/invocation.rs
//! Repository: https://github.com/mbedrs/mbedrs
//!
//! ## Overview
//!
//! This module holds the data model and the pure command-construction logic
//! for invoking the external Mbed CLI (`mbed`). It maps a resolved
//! `BuildConfiguration` onto the exact command-line strings the tool expects,
//! and bundles a command line with its working directory as a
//! `CommandInvocation` ready for the process runner.
//!
//! ## Architecture
//!
//! Everything here is side-effect free:
//! - `BuildConfiguration`: a read-only snapshot of the build parameters,
//!   taken fresh for every action so configuration edits apply immediately.
//! - `compile_command` / `flash_command` / `new_project_command`: pure
//!   functions producing the tool's CLI wire format. Optional flags are
//!   appended in a fixed order (`--profile`, then `--library`, then `-f`).
//! - `CommandInvocation`: a transient pairing of command line and working
//!   directory, constructed once per action and discarded after execution.
//!
//! No validation is performed on the mcu/toolchain values; invalid values
//! are deliberately passed through and surface as a failing external
//! process instead.
//!
//! ## Examples
//!
//! ```bash
//! # A full configuration produces:
//! mbed compile -t GCC_ARM -m K64F --source src --build BUILD --profile release --library
//!
//! # The flash variant appends the flash flag:
//! mbed compile -t GCC_ARM -m K64F --source src --build BUILD -f
//! ```
//!
use std::path::PathBuf;

/// Name of the external build tool this crate wraps. Its CLI contract
/// (subcommands `new`/`compile`, flags `-t`, `-m`, `--source`, `--build`,
/// `--profile`, `--library`, `-f`) is the wire format reproduced below.
pub const TOOL_NAME: &str = "mbed";

/// # Build Configuration (`BuildConfiguration`)
///
/// The resolved set of build parameters for one compile/flash action.
/// Handlers construct this by re-reading configuration at action time and
/// applying any command-line overrides; it is never cached between actions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildConfiguration {
    /// Target microcontroller identifier (e.g. "K64F"). Passed through unvalidated.
    pub mcu: String,
    /// Toolchain identifier (e.g. "GCC_ARM"). Passed through unvalidated.
    pub toolchain: String,
    /// Source directory handed to `--source`.
    pub source_dir: String,
    /// Build output directory handed to `--build`.
    pub build_dir: String,
    /// Build profile; an empty string means "omit the flag".
    pub profile: String,
    /// Whether to compile as a library (`--library`).
    pub library: bool,
}

/// # Command Invocation (`CommandInvocation`)
///
/// A shell command line paired with the directory it should run in.
/// Built once per triggered action and consumed by the process runner.
#[derive(Debug, Clone)]
pub struct CommandInvocation {
    /// The full command line, run through the platform shell.
    pub command_line: String,
    /// Working directory for the child process.
    pub working_directory: PathBuf,
}

impl CommandInvocation {
    pub fn new(command_line: impl Into<String>, working_directory: impl Into<PathBuf>) -> Self {
        Self {
            command_line: command_line.into(),
            working_directory: working_directory.into(),
        }
    }
}

/// # Build Compile Command (`compile_command`)
///
/// Produces the `mbed compile` command line for the given configuration.
/// The optional `--profile` and `--library` parts are appended only when
/// present/true, always in that order, after the mandatory flags.
///
/// ## Arguments
/// * `cfg` - The build configuration snapshot.
///
/// ## Returns
/// * `String` - The complete command line, e.g.
///   `mbed compile -t GCC_ARM -m K64F --source src --build BUILD`.
pub fn compile_command(cfg: &BuildConfiguration) -> String {
    let mut cmd = format!(
        "{} compile -t {} -m {} --source {} --build {}",
        TOOL_NAME, cfg.toolchain, cfg.mcu, cfg.source_dir, cfg.build_dir
    );
    if !cfg.profile.is_empty() {
        cmd.push_str(&format!(" --profile {}", cfg.profile));
    }
    if cfg.library {
        cmd.push_str(" --library");
    }
    cmd
}

/// # Build Compile-and-Flash Command (`flash_command`)
///
/// Identical to [`compile_command`] with exactly one trailing ` -f`
/// appended, instructing the tool to flash the binary after compiling.
pub fn flash_command(cfg: &BuildConfiguration) -> String {
    let mut cmd = compile_command(cfg);
    cmd.push_str(" -f");
    cmd
}

/// # Build New-Project Command (`new_project_command`)
///
/// Produces the `mbed new <name>` command line used by the project
/// creation flow. The caller is responsible for having validated the name.
pub fn new_project_command(project_name: &str) -> String {
    format!("{} new {}", TOOL_NAME, project_name)
}
