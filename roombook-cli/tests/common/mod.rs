//! Common test utilities for CLI integration tests.
//!
//! This module provides shared helpers for CLI testing, including:
//! - An isolated configuration directory per test
//! - The shared stub backend
//! - Reservation fixtures in wire form

use assert_cmd::Command;
use serde_json::{json, Value};
use std::path::PathBuf;
use tempfile::TempDir;

pub use roombook_test_support::StubServer;

/// Environment variables that would leak the developer's setup into tests.
const ROOMBOOK_VARS: [&str; 5] = [
    "ROOMBOOK_API_URL",
    "ROOMBOOK_TIMEOUT_SECONDS",
    "ROOMBOOK_OUTPUT_FORMAT",
    "ROOMBOOK_LOG_MODE",
    "ROOMBOOK_CONFIG_DIR",
];

/// Test environment with an isolated configuration directory.
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Directory passed as `--config-dir`
    pub config_dir: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a new test environment.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let config_dir = temp_dir.path().join("roombook");
        std::fs::create_dir_all(&config_dir).expect("Failed to create config dir");

        Self {
            temp_dir,
            config_dir,
        }
    }

    /// Get a command builder with only the configuration directory set.
    pub fn command_bare(&self) -> Command {
        let mut cmd = Command::cargo_bin("roombook").expect("Failed to find roombook binary");
        for var in ROOMBOOK_VARS {
            cmd.env_remove(var);
        }
        cmd.arg("--config-dir").arg(&self.config_dir);
        cmd
    }

    /// Get a command builder pointed at `server`.
    pub fn command(&self, server: &StubServer) -> Command {
        let mut cmd = self.command_bare();
        cmd.arg("--api-url").arg(server.base_url());
        cmd.arg("--timeout").arg("5");
        cmd
    }

    /// Write `config.yaml` into the configuration directory.
    pub fn write_config(&self, content: &str) {
        std::fs::write(self.config_dir.join("config.yaml"), content)
            .expect("Failed to write config");
    }
}

/// A reservation record in wire form.
#[allow(dead_code)]
pub fn record(id: u64, first: &str, last: &str, status: &str) -> Value {
    json!({
        "id": id,
        "first_name": first,
        "last_name": last,
        "birthday": null,
        "check_in_date": "2024-06-01",
        "check_out_date": "2024-06-03",
        "room_type": "Queen bed",
        "extra_info": "",
        "status": status,
        "created_at": "2024-05-20T10:00:00Z"
    })
}

/// A `200` listing response.
#[allow(dead_code)]
pub fn listing(records: Vec<Value>) -> (u16, Value) {
    (200, json!({ "reservations": records }))
}

/// A `200` acknowledgement.
#[allow(dead_code)]
pub fn ok() -> (u16, Value) {
    (200, json!({ "message": "ok" }))
}
