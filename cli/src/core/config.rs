//! # mbedrs Configuration System
//!
//! File: cli/src/core/config.rs
//! Repository: https://github.com/mbedrs/mbedrs
//!
//! ## Overview
//!
//! This module implements the configuration system for mbedrs, handling
//! loading, merging, and access to the build parameters consumed by the
//! command builder. It supports a multi-level configuration approach that
//! combines defaults, user settings, and project-specific overrides.
//!
//! ## Architecture
//!
//! The configuration system follows these principles:
//! - Configuration is loaded from multiple sources in order of precedence
//! - Files deserialize into `Option`-valued sections, so "explicitly set to
//!   the default value" and "not set" are distinct: a project file that
//!   sets `library = false` really does override a user-level `true`
//! - Defaults are resolved last, after the merge
//! - Directory values are expanded (e.g., `~` to home directory)
//! - Values are passed through without semantic validation: a bad mcu or
//!   toolchain identifier is not detected here, it surfaces later as a
//!   failing `mbed` process
//! - Configuration is re-read for every action, never cached, so edits
//!   take effect on the next compile/flash immediately
//!
//! Configuration sources (in order of precedence):
//! 1. Project-specific `.mbedrs.toml` in current directory or ancestors
//! 2. User-specific `~/.config/mbedrs/config.toml`
//! 3. Default values defined in the code
//!
//! ## Examples
//!
//! A project `.mbedrs.toml`:
//!
//! ```toml
//! [build]
//! mcu = "K64F"
//! toolchain = "GCC_ARM"
//! source = "src"
//! build = "BUILD"
//! profile = "release"
//! library = false
//!
//! [editor]
//! command = "code"
//! ```
//!
use crate::core::error::{MbedrsError, Result}; // Use error from the same core module
use crate::core::invocation::BuildConfiguration;
use anyhow::Context;
use directories::ProjectDirs;
use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
};
use tracing::{debug, info, warn};

/// The fully resolved configuration: every value is concrete, with the
/// built-in defaults filled in for anything no file set.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Config {
    pub build: BuildSettings,
    pub editor: EditorSettings,
}

/// Build parameters consumed by the command builder (`mbedrs compile/flash`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildSettings {
    /// Target microcontroller identifier (e.g. "K64F").
    pub mcu: String,
    /// Toolchain identifier (e.g. "GCC_ARM").
    pub toolchain: String,
    /// Source directory passed to `--source` (can use ~). Will be expanded.
    pub source: String,
    /// Build output directory passed to `--build` (can use ~). Will be expanded.
    pub build: String,
    /// Build profile; empty string means the flag is omitted.
    pub profile: String,
    /// Compile as a library (`--library`) when true.
    pub library: bool,
}

/// Settings for the editor-open action after project creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorSettings {
    /// Command used to open a freshly created project folder.
    pub command: String,
}

impl Default for BuildSettings {
    fn default() -> Self {
        Self {
            mcu: String::new(),
            toolchain: String::new(),
            source: default_source_dir(),
            build: default_build_dir(),
            profile: String::new(),
            library: false,
        }
    }
}

impl Default for EditorSettings {
    fn default() -> Self {
        Self {
            command: default_editor_command(),
        }
    }
}

impl Config {
    /// Takes the read-only build-parameter snapshot handed to the command
    /// builder. Called once per action, on a freshly loaded `Config`.
    pub fn build_configuration(&self) -> BuildConfiguration {
        BuildConfiguration {
            mcu: self.build.mcu.clone(),
            toolchain: self.build.toolchain.clone(),
            source_dir: self.build.source.clone(),
            build_dir: self.build.build.clone(),
            profile: self.build.profile.clone(),
            library: self.build.library,
        }
    }
}

// --- On-disk representation ---
// Every field is optional so that merging can distinguish "not set in this
// file" from "explicitly set to a value" (including the default value).

/// One configuration file as read from disk, before merging.
#[derive(Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    #[serde(default)]
    build: BuildSection,
    #[serde(default)]
    editor: EditorSection,
}

#[derive(Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
struct BuildSection {
    mcu: Option<String>,
    toolchain: Option<String>,
    source: Option<String>,
    build: Option<String>,
    profile: Option<String>,
    library: Option<bool>,
}

#[derive(Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
struct EditorSection {
    command: Option<String>,
}

// --- Default value functions ---
fn default_source_dir() -> String {
    ".".to_string() // mbed CLI's own convention: compile from the project root
}
fn default_build_dir() -> String {
    "BUILD".to_string() // mbed CLI's conventional output directory
}
fn default_editor_command() -> String {
    "code".to_string()
}

const PROJECT_CONFIG_FILENAME: &str = ".mbedrs.toml";

/// # Load Configuration (`load_config`)
///
/// Loads, merges, and expands the mbedrs configuration. Called at the start
/// of every action so that configuration edits apply immediately.
pub fn load_config() -> Result<Config> {
    let user_config = load_user_config()?;
    let project_config = load_project_config()?;
    let merged = merge_config_files(user_config.unwrap_or_default(), project_config);
    let mut config = resolve(merged);
    expand_config_paths(&mut config);
    debug!("Final loaded configuration: {:?}", config);
    Ok(config)
}

fn load_user_config() -> Result<Option<ConfigFile>> {
    if let Some(proj_dirs) = ProjectDirs::from("dev", "mbedrs", "mbedrs") {
        let config_path = proj_dirs.config_dir().join("config.toml");
        if config_path.exists() {
            info!("Loading user configuration from: {}", config_path.display());
            load_config_from_path(&config_path).map(Some)
        } else {
            debug!(
                "User configuration file not found at {}",
                config_path.display()
            );
            Ok(None)
        }
    } else {
        warn!("Could not determine user config directory.");
        Ok(None)
    }
}

fn load_project_config() -> Result<Option<ConfigFile>> {
    if let Some(project_config_path) = find_project_config_path()? {
        info!(
            "Loading project configuration from: {}",
            project_config_path.display()
        );
        load_config_from_path(&project_config_path).map(Some)
    } else {
        debug!("No project configuration file (.mbedrs.toml) found in current directory or ancestors.");
        Ok(None)
    }
}

fn find_project_config_path() -> Result<Option<PathBuf>> {
    let current_dir = std::env::current_dir().context("Failed to get current directory")?;
    let mut path: &Path = &current_dir;
    loop {
        let project_config = path.join(PROJECT_CONFIG_FILENAME);
        let git_dir = path.join(".git");
        if project_config.exists() && project_config.is_file() {
            return Ok(Some(project_config));
        }
        if git_dir.exists() && git_dir.is_dir() {
            debug!(
                "Found .git directory at {}, stopping project config search.",
                path.display()
            );
            return Ok(None);
        }
        match path.parent() {
            Some(parent) => path = parent,
            None => break,
        }
    }
    Ok(None)
}

fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read configuration file: {}", path.display()))?;
    toml::from_str(&content).map_err(|err| {
        MbedrsError::Config(format!(
            "Failed to parse TOML from {}: {}",
            path.display(),
            err
        ))
        .into()
    })
}

/// Field-by-field merge on presence: a project value wins whenever the
/// project file set it at all, even when it was set to the default value.
fn merge_config_files(user: ConfigFile, project: Option<ConfigFile>) -> ConfigFile {
    let project = match project {
        Some(p) => p,
        None => return user,
    };
    ConfigFile {
        build: BuildSection {
            mcu: project.build.mcu.or(user.build.mcu),
            toolchain: project.build.toolchain.or(user.build.toolchain),
            source: project.build.source.or(user.build.source),
            build: project.build.build.or(user.build.build),
            profile: project.build.profile.or(user.build.profile),
            library: project.build.library.or(user.build.library),
        },
        editor: EditorSection {
            command: project.editor.command.or(user.editor.command),
        },
    }
}

/// Fills in the built-in defaults for anything no configuration file set.
fn resolve(file: ConfigFile) -> Config {
    Config {
        build: BuildSettings {
            mcu: file.build.mcu.unwrap_or_default(),
            toolchain: file.build.toolchain.unwrap_or_default(),
            source: file.build.source.unwrap_or_else(default_source_dir),
            build: file.build.build.unwrap_or_else(default_build_dir),
            profile: file.build.profile.unwrap_or_default(),
            library: file.build.library.unwrap_or(false),
        },
        editor: EditorSettings {
            command: file.editor.command.unwrap_or_else(default_editor_command),
        },
    }
}

/// Expands `~` in the directory-valued settings. Other values are opaque
/// identifiers for the external tool and are left untouched.
fn expand_config_paths(config: &mut Config) {
    config.build.source = shellexpand::tilde(&config.build.source).into_owned();
    config.build.build = shellexpand::tilde(&config.build.build).into_owned();
}
