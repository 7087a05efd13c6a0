//! # mbedrs CLI Build Integration Tests
//!
//! File: cli/tests/build.rs
//! Repository: https://github.com/mbedrs/mbedrs
//!
//! ## Overview
//!
//! Integration tests for `mbedrs compile` and `mbedrs flash`. A fake `mbed`
//! script on PATH echoes the arguments it receives, so these tests verify
//! the whole pipeline end to end: configuration loading, command
//! construction, shell execution, output streaming, and status mapping.
//!

// Declare and use the common module
mod common;
use common::*;
// Import necessary items directly
use predicates::prelude::*;
use tempfile::tempdir;

/// Writes a project `.mbedrs.toml` into `dir` with the standard test board.
fn write_project_config(dir: &std::path::Path) {
    std::fs::write(
        dir.join(".mbedrs.toml"),
        r#"
        [build]
        mcu = "K64F"
        toolchain = "GCC_ARM"
        source = "src"
        "#,
    )
    .expect("Failed to write project config");
}

/// # Test Compile Builds The Configured Command (`test_compile_uses_configuration`)
///
/// Verifies that `mbedrs compile` reads the project configuration and hands
/// the external tool exactly the documented flag set, and that the tool's
/// output reaches stdout.
#[test]
fn test_compile_uses_configuration() {
    let tool = fake_tool_dir(r#"echo "mbed-args: $@""#);
    let project = tempdir().expect("Failed to create project dir");
    write_project_config(project.path());

    mbedrs_cmd()
        .arg("compile")
        .current_dir(project.path())
        .env("PATH", path_with(&tool))
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "mbed-args: compile -t GCC_ARM -m K64F --source src --build BUILD",
        ))
        // The header line echoes the command before any tool output.
        .stdout(predicate::str::contains(
            "> Running `mbed compile -t GCC_ARM -m K64F --source src --build BUILD`...",
        ))
        .stderr(predicate::str::contains("Successfully compiled"));
}

/// # Test Flash Appends The Flash Flag (`test_flash_appends_flash_flag`)
///
/// Verifies that `mbedrs flash` runs the compile command with exactly the
/// trailing `-f` appended.
#[test]
fn test_flash_appends_flash_flag() {
    let tool = fake_tool_dir(r#"echo "mbed-args: $@""#);
    let project = tempdir().expect("Failed to create project dir");
    write_project_config(project.path());

    mbedrs_cmd()
        .arg("flash")
        .current_dir(project.path())
        .env("PATH", path_with(&tool))
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "mbed-args: compile -t GCC_ARM -m K64F --source src --build BUILD -f",
        ))
        .stderr(predicate::str::contains("Successfully compiled and flashed"));
}

/// # Test Project Config Can Reset User Values (`test_project_config_resets_user_values`)
///
/// A project file that explicitly sets a field to its default value must
/// override a user-level setting, the same as any other override.
#[test]
fn test_project_config_resets_user_values() {
    let tool = fake_tool_dir(r#"echo "mbed-args: $@""#);

    let config_home = tempdir().expect("Failed to create config home");
    let user_config_dir = config_home.path().join("mbedrs");
    std::fs::create_dir_all(&user_config_dir).expect("Failed to create user config dir");
    std::fs::write(
        user_config_dir.join("config.toml"),
        r#"
        [build]
        mcu = "K64F"
        toolchain = "GCC_ARM"
        source = "firmware"
        library = true
        "#,
    )
    .expect("Failed to write user config");

    let project = tempdir().expect("Failed to create project dir");
    std::fs::write(
        project.path().join(".mbedrs.toml"),
        "[build]\nsource = \".\"\nlibrary = false\n",
    )
    .expect("Failed to write project config");

    mbedrs_cmd()
        .arg("compile")
        .current_dir(project.path())
        .env("PATH", path_with(&tool))
        .env("XDG_CONFIG_HOME", config_home.path())
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "mbed-args: compile -t GCC_ARM -m K64F --source . --build BUILD",
        ))
        .stdout(predicate::str::contains("--library").not());
}

/// # Test CLI Overrides Replace Configured Values (`test_cli_overrides`)
///
/// Verifies that `-m`/`--profile`/`--library` flags override the project
/// configuration for a single action, in the documented flag order.
#[test]
fn test_cli_overrides() {
    let tool = fake_tool_dir(r#"echo "mbed-args: $@""#);
    let project = tempdir().expect("Failed to create project dir");
    write_project_config(project.path());

    mbedrs_cmd()
        .args(["compile", "-m", "NUCLEO_F401RE", "--profile", "release", "--library"])
        .current_dir(project.path())
        .env("PATH", path_with(&tool))
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "mbed-args: compile -t GCC_ARM -m NUCLEO_F401RE --source src --build BUILD --profile release --library",
        ));
}

/// # Test Failing Tool Surfaces Command And Status (`test_failure_reports_command_and_status`)
///
/// Verifies that a non-zero tool exit fails the action with an error
/// notification carrying the original command line and the status value,
/// and that the tool's error output was streamed through.
#[test]
fn test_failure_reports_command_and_status() {
    let tool = fake_tool_dir(
        r#"echo "fatal: no such target" 1>&2
exit 3"#,
    );
    let project = tempdir().expect("Failed to create project dir");
    write_project_config(project.path());

    mbedrs_cmd()
        .arg("compile")
        .current_dir(project.path())
        .env("PATH", path_with(&tool))
        .assert()
        .failure()
        .stdout(predicate::str::contains("fatal: no such target"))
        .stderr(
            predicate::str::contains("mbed compile -t GCC_ARM -m K64F")
                .and(predicate::str::contains("status code 3")),
        );
}

/// # Test Missing Tool Warning Is Advisory (`test_missing_tool_warns_but_proceeds`)
///
/// With no `mbed` on PATH the pre-flight check warns, and the compile
/// action is still attempted (it then fails on its own, with the shell's
/// command-not-found status).
#[test]
fn test_missing_tool_warns_but_proceeds() {
    let project = tempdir().expect("Failed to create project dir");
    write_project_config(project.path());
    let empty = tempdir().expect("Failed to create empty PATH dir");

    mbedrs_cmd()
        .arg("compile")
        .current_dir(project.path())
        // Keep the shell reachable but not the tool.
        .env(
            "PATH",
            format!("{}:/usr/bin:/bin", empty.path().display()),
        )
        .assert()
        .failure()
        .stderr(
            predicate::str::contains("was not found on your PATH")
                .and(predicate::str::contains("mbed compile")),
        );
}
