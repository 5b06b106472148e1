//! Environment variable handling for configuration overrides.
//!
//! This module provides support for ROOMBOOK_* environment variables that
//! override configuration file values.

use std::env;

use crate::config::schema::ClientConfig;
use crate::error::{Error, Result};

/// Handles environment variable overrides for configuration.
pub struct EnvironmentConfig;

impl EnvironmentConfig {
    /// Apply environment variable overrides to config.
    ///
    /// Reads `ROOMBOOK_API_URL`, `ROOMBOOK_TIMEOUT_SECONDS` and
    /// `ROOMBOOK_OUTPUT_FORMAT`.
    ///
    /// # Errors
    ///
    /// Returns an error if a timeout or output format value is invalid.
    pub fn apply_overrides(config: &mut ClientConfig) -> Result<()> {
        if let Ok(url) = env::var("ROOMBOOK_API_URL") {
            config.api_url = Some(url);
        }

        if let Ok(seconds) = env::var("ROOMBOOK_TIMEOUT_SECONDS") {
            config.timeout_seconds = Some(seconds.trim().parse().map_err(|_| Error::Validation {
                field: "ROOMBOOK_TIMEOUT_SECONDS".into(),
                message: "Must be a positive integer".into(),
            })?);
        }

        if let Ok(format) = env::var("ROOMBOOK_OUTPUT_FORMAT") {
            config.output_format = Some(format.parse().map_err(|message| Error::Validation {
                field: "ROOMBOOK_OUTPUT_FORMAT".into(),
                message,
            })?);
        }

        Ok(())
    }
}
