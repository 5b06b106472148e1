//! Integration tests for the roombook CLI.
//!
//! These tests verify that the CLI binary behaves correctly, including
//! argument parsing, help text, and version output.

use assert_cmd::Command;
use predicates::prelude::*;

/// Test that the binary runs without arguments and displays help/error.
#[test]
fn test_cli_no_arguments() {
    let mut cmd = Command::cargo_bin("roombook").expect("Failed to find roombook binary");

    // With clap subcommands required, no arguments should fail and show usage
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Usage:"));
}

/// Test that the --version flag displays version information.
#[test]
fn test_cli_version_flag() {
    let mut cmd = Command::cargo_bin("roombook").expect("Failed to find roombook binary");

    cmd.arg("--version");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("roombook"))
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

/// Test that the -V short flag also displays version information.
#[test]
fn test_cli_version_short_flag() {
    let mut cmd = Command::cargo_bin("roombook").expect("Failed to find roombook binary");

    cmd.arg("-V");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("roombook"))
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

/// Test that the --help flag displays help text.
#[test]
fn test_cli_help_flag() {
    let mut cmd = Command::cargo_bin("roombook").expect("Failed to find roombook binary");

    cmd.arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains(
            "Manage hotel reservations",
        ));
}

/// Test that the -h short flag also displays help text.
#[test]
fn test_cli_help_short_flag() {
    let mut cmd = Command::cargo_bin("roombook").expect("Failed to find roombook binary");

    cmd.arg("-h");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Usage:"));
}

/// Test that an invalid subcommand produces an error.
#[test]
fn test_cli_invalid_subcommand() {
    let mut cmd = Command::cargo_bin("roombook").expect("Failed to find roombook binary");

    cmd.arg("invalid-command");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("error:"));
}

/// Test that an invalid flag produces an error.
#[test]
fn test_cli_invalid_flag() {
    let mut cmd = Command::cargo_bin("roombook").expect("Failed to find roombook binary");

    cmd.arg("--invalid-flag");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("error:"));
}

/// Test that every subcommand is listed in the help text.
#[test]
fn test_cli_help_lists_subcommands() {
    let mut cmd = Command::cargo_bin("roombook").expect("Failed to find roombook binary");

    cmd.arg("--help");

    let mut assert = cmd.assert().success();
    for name in [
        "list",
        "book",
        "check-in",
        "check-out",
        "cancel",
        "set-status",
        "delete",
        "completions",
    ] {
        assert = assert.stdout(predicate::str::contains(name));
    }
}

/// Test that an unknown status name is rejected by the argument parser.
#[test]
fn test_cli_set_status_rejects_unknown_status() {
    let mut cmd = Command::cargo_bin("roombook").expect("Failed to find roombook binary");

    cmd.args(["set-status", "1", "teleported"]);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("unknown status"));
}

/// Test that completions are generated for bash.
#[test]
fn test_cli_completions_bash() {
    let mut cmd = Command::cargo_bin("roombook").expect("Failed to find roombook binary");

    cmd.args(["completions", "bash"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("roombook"));
}
