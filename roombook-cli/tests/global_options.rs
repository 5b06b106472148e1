//! Tests for global flags shared by every command.

mod common;

use common::{listing, record, StubServer, TestEnv};
use predicates::prelude::*;

#[test]
fn test_verbose_traces_requests() {
    let env = TestEnv::new();
    let server = StubServer::start(vec![listing(vec![record(1, "Jane", "Doe", "Booked")])]);

    env.command(&server)
        .args(["--verbose", "list"])
        .assert()
        .success()
        .stderr(predicate::str::contains("DEBUG: GET http://"));
}

#[test]
fn test_default_level_hides_debug() {
    let env = TestEnv::new();
    let server = StubServer::start(vec![listing(vec![])]);

    env.command(&server)
        .arg("list")
        .assert()
        .success()
        .stderr(predicate::str::contains("DEBUG").not());
}

#[test]
fn test_log_mode_env_quiet_hides_warnings() {
    let env = TestEnv::new();
    let server = StubServer::start(vec![listing(vec![record(1, "Jane", "Doe", "Canceled")])]);

    env.command(&server)
        .env("ROOMBOOK_LOG_MODE", "quiet")
        .args(["check-in", "1"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("WARN").not());
}

#[test]
fn test_global_flags_after_subcommand() {
    let env = TestEnv::new();
    let server = StubServer::start(vec![listing(vec![])]);

    env.command_bare()
        .arg("list")
        .args(["--api-url", server.base_url().as_str()])
        .assert()
        .success();
}
