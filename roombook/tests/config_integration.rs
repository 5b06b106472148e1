//! Integration tests for layered client configuration.
//!
//! Tests that modify environment variables are marked with `#[serial]`.
//! Environment variables are process-global, so concurrent access would
//! cause race conditions.

use serial_test::serial;
use std::env;
use std::fs;
use std::path::Path;
use std::time::Duration;
use tempfile::TempDir;

use roombook::config::{ClientConfig, ConfigBuilder, ConfigLoader, OutputFormat};
use roombook::error::Error;
use roombook::{HttpReservationClient, DEFAULT_BASE_URL};

// ============================================================================
// Test Utilities
// ============================================================================

fn write_config(dir: &Path, content: &str) {
    fs::write(dir.join("config.yaml"), content).unwrap();
}

/// RAII guard for setting and restoring environment variables.
struct EnvGuard {
    key: String,
    old_value: Option<String>,
}

impl EnvGuard {
    fn new(key: &str, value: &str) -> Self {
        let old_value = env::var(key).ok();
        env::set_var(key, value);
        Self {
            key: key.to_string(),
            old_value,
        }
    }

    fn remove(key: &str) -> Self {
        let old_value = env::var(key).ok();
        env::remove_var(key);
        Self {
            key: key.to_string(),
            old_value,
        }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        match &self.old_value {
            Some(val) => env::set_var(&self.key, val),
            None => env::remove_var(&self.key),
        }
    }
}

fn clear_roombook_env_vars() -> Vec<EnvGuard> {
    [
        "ROOMBOOK_API_URL",
        "ROOMBOOK_TIMEOUT_SECONDS",
        "ROOMBOOK_OUTPUT_FORMAT",
    ]
    .iter()
    .map(|k| EnvGuard::remove(k))
    .collect()
}

// ============================================================================
// File loading
// ============================================================================

#[test]
fn test_missing_file_yields_defaults() {
    let temp = TempDir::new().unwrap();
    let config = ConfigBuilder::new()
        .with_config_dir(temp.path())
        .skip_env()
        .build()
        .unwrap();

    assert_eq!(config.api_url(), DEFAULT_BASE_URL);
    assert_eq!(config.timeout(), Duration::from_secs(10));
}

#[test]
fn test_file_values_are_used() {
    let temp = TempDir::new().unwrap();
    write_config(
        temp.path(),
        "api_url: https://hotel.example/api/reservations\ntimeout_seconds: 3\noutput_format: json\n",
    );

    let config = ConfigBuilder::new()
        .with_config_dir(temp.path())
        .skip_env()
        .build()
        .unwrap();

    assert_eq!(config.api_url(), "https://hotel.example/api/reservations");
    assert_eq!(config.timeout(), Duration::from_secs(3));
    assert_eq!(config.output_format, Some(OutputFormat::Json));
}

#[test]
fn test_unknown_keys_are_rejected() {
    let temp = TempDir::new().unwrap();
    write_config(temp.path(), "api_url: http://x/api\nretries: 3\n");

    let err = ConfigLoader::load_file(&temp.path().join("config.yaml")).unwrap_err();
    assert!(matches!(err, Error::Configuration(_)));
}

#[test]
fn test_zero_timeout_is_rejected() {
    let temp = TempDir::new().unwrap();
    write_config(temp.path(), "timeout_seconds: 0\n");

    let result = ConfigBuilder::new()
        .with_config_dir(temp.path())
        .skip_env()
        .build();
    assert!(result.is_err());
}

// ============================================================================
// Precedence
// ============================================================================

#[test]
#[serial]
fn test_env_overrides_file() {
    let _guards = clear_roombook_env_vars();
    let temp = TempDir::new().unwrap();
    write_config(
        temp.path(),
        "api_url: http://file-host/api/reservations\noutput_format: csv\n",
    );
    let _url = EnvGuard::new("ROOMBOOK_API_URL", "http://env-host/api/reservations");

    let config = ConfigBuilder::new()
        .with_config_dir(temp.path())
        .build()
        .unwrap();

    assert_eq!(config.api_url(), "http://env-host/api/reservations");
    assert_eq!(config.output_format, Some(OutputFormat::Csv));
}

#[test]
#[serial]
fn test_overrides_beat_env() {
    let _guards = clear_roombook_env_vars();
    let temp = TempDir::new().unwrap();
    let _timeout = EnvGuard::new("ROOMBOOK_TIMEOUT_SECONDS", "30");

    let config = ConfigBuilder::new()
        .with_config_dir(temp.path())
        .with_config(ClientConfig {
            timeout_seconds: Some(2),
            ..Default::default()
        })
        .build()
        .unwrap();

    assert_eq!(config.timeout(), Duration::from_secs(2));
}

#[test]
#[serial]
fn test_invalid_env_format_is_rejected() {
    let _guards = clear_roombook_env_vars();
    let temp = TempDir::new().unwrap();
    let _format = EnvGuard::new("ROOMBOOK_OUTPUT_FORMAT", "xml");

    let err = ConfigBuilder::new()
        .with_config_dir(temp.path())
        .build()
        .unwrap_err();
    assert!(matches!(err, Error::Validation { .. }));
}

#[test]
fn test_client_from_config() {
    let config = ConfigBuilder::new()
        .skip_files()
        .skip_env()
        .with_config(ClientConfig {
            api_url: Some("http://127.0.0.1:5000/api/reservations/".into()),
            ..Default::default()
        })
        .build()
        .unwrap();

    let client = HttpReservationClient::from_config(&config).unwrap();
    assert_eq!(client.base_url(), "http://127.0.0.1:5000/api/reservations");
}
