//! Configuration schema definitions.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::client::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT};
use crate::error::{Error, Result};

/// Client configuration.
///
/// Every field is optional so that layers can be merged; accessors fall
/// back to built-in defaults.
///
/// # Examples
///
/// ```
/// use roombook::config::ClientConfig;
///
/// let config = ClientConfig {
///     api_url: Some("https://hotel.example.com/api/reservations".to_string()),
///     ..Default::default()
/// };
/// assert_eq!(config.timeout().as_secs(), 10);
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ClientConfig {
    /// Base URL of the reservation collection.
    pub api_url: Option<String>,

    /// Per-request timeout in seconds.
    pub timeout_seconds: Option<u64>,

    /// Output format for list commands.
    pub output_format: Option<OutputFormat>,
}

impl ClientConfig {
    /// Returns the collection URL, or the built-in default.
    #[must_use]
    pub fn api_url(&self) -> &str {
        self.api_url.as_deref().unwrap_or(DEFAULT_BASE_URL)
    }

    /// Returns the request timeout, or the built-in default.
    #[must_use]
    pub fn timeout(&self) -> Duration {
        self.timeout_seconds
            .map_or(DEFAULT_TIMEOUT, Duration::from_secs)
    }

    /// Overlays `other` on top of `self`; fields set in `other` win.
    pub fn merge(&mut self, other: ClientConfig) {
        if other.api_url.is_some() {
            self.api_url = other.api_url;
        }
        if other.timeout_seconds.is_some() {
            self.timeout_seconds = other.timeout_seconds;
        }
        if other.output_format.is_some() {
            self.output_format = other.output_format;
        }
    }

    /// Checks the values that are set.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The URL is not an `http://` or `https://` URL
    /// - The timeout is zero
    pub fn validate(&self) -> Result<()> {
        if let Some(ref url) = self.api_url {
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                return Err(Error::Validation {
                    field: "api_url".into(),
                    message: format!("'{url}' must start with http:// or https://"),
                });
            }
        }

        if self.timeout_seconds == Some(0) {
            return Err(Error::Validation {
                field: "timeout_seconds".into(),
                message: "timeout must be at least one second".into(),
            });
        }

        Ok(())
    }
}

/// Output format for reservation listings.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable table.
    #[default]
    Table,
    /// JSON array.
    Json,
    /// Comma-separated values.
    Csv,
    /// Tab-separated values.
    Tsv,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Table => write!(f, "table"),
            Self::Json => write!(f, "json"),
            Self::Csv => write!(f, "csv"),
            Self::Tsv => write!(f, "tsv"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "table" => Ok(Self::Table),
            "json" => Ok(Self::Json),
            "csv" => Ok(Self::Csv),
            "tsv" => Ok(Self::Tsv),
            _ => Err(format!("invalid output format: {s}")),
        }
    }
}
