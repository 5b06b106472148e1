//! Utility functions for CLI operations.
//!
//! This module provides common utility functions used across CLI commands:
//! configuration loading, opening the synchronization controller and
//! timestamp formatting.

use crate::error::CliError;
use chrono::{DateTime, Utc};
use roombook::{
    ClientConfig, ConfigBuilder, HttpReservationClient, OutputFormat, RefreshOutcome,
    SyncController,
};
use std::path::PathBuf;

/// Global CLI options shared across all commands.
///
/// Verbosity is not carried here; it only selects the log level, which
/// `main` applies before any command runs.
#[derive(Debug, Clone, Default)]
pub struct GlobalOptions {
    /// Suppress non-essential output.
    pub quiet: bool,

    /// Override the reservation collection URL.
    pub api_url: Option<String>,

    /// Override the request timeout (in seconds).
    pub timeout: Option<u64>,

    /// Override the configuration directory.
    pub config_dir: Option<PathBuf>,
}

/// Load hierarchical configuration.
///
/// Configuration is merged from multiple sources with precedence:
/// 1. Global options (highest priority)
/// 2. Environment variables
/// 3. Configuration file
/// 4. Built-in defaults (lowest priority)
pub fn load_configuration(global: &GlobalOptions) -> Result<ClientConfig, CliError> {
    let mut builder = ConfigBuilder::new();
    if let Some(ref dir) = global.config_dir {
        builder = builder.with_config_dir(dir);
    }

    builder
        .with_config(ClientConfig {
            api_url: global.api_url.clone(),
            timeout_seconds: global.timeout,
            output_format: None,
        })
        .build()
        .map_err(|e| CliError::Config(e.to_string()))
}

/// Open a controller against the configured backend and load the collection.
///
/// # Errors
///
/// Returns `Unavailable` if the initial listing fails; nothing else can be
/// done without it.
pub fn open_controller(
    config: &ClientConfig,
) -> Result<SyncController<HttpReservationClient>, CliError> {
    let client = HttpReservationClient::from_config(config)?;
    let mut controller = SyncController::new(client);

    if controller.refresh() == RefreshOutcome::Failed {
        let message = controller
            .error()
            .unwrap_or(roombook::LOAD_FAILURE_MESSAGE)
            .to_string();
        return Err(CliError::Unavailable(message));
    }

    Ok(controller)
}

/// Resolve the output format: explicit flag, then configuration, then table.
pub fn resolve_format(flag: Option<OutputFormat>, config: &ClientConfig) -> OutputFormat {
    flag.or(config.output_format).unwrap_or_default()
}

/// Format a timestamp for display.
pub fn format_timestamp(ts: DateTime<Utc>) -> String {
    ts.format("%Y-%m-%d %H:%M:%S").to_string()
}

/// Report a failed follow-up refresh after a successful mutation.
pub fn warn_if_stale(controller: &SyncController<HttpReservationClient>) {
    if let Some(message) = controller.error() {
        eprintln!("Warning: {message}");
    }
}
