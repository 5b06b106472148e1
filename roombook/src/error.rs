//! Error types for the roombook library.
//!
//! This module provides the error hierarchy for all reservation operations,
//! using `thiserror` for ergonomic error handling.

use thiserror::Error;

use crate::reservation::ReservationStatus;

/// Result type alias for operations that may fail with a roombook error.
///
/// # Examples
///
/// ```
/// use roombook::{Error, Result};
///
/// fn example_operation() -> Result<usize> {
///     Ok(3)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the roombook library.
#[derive(Debug, Error)]
pub enum Error {
    /// The remote collection answered with a non-success status, or could
    /// not be reached at all.
    #[error("transport error{}: {message}", status.map(|s| format!(" (HTTP {s})")).unwrap_or_default())]
    Transport {
        /// The HTTP status code, when a response was received.
        status: Option<u16>,
        /// A description of the failure.
        message: String,
    },

    /// A status change that the reservation lifecycle does not allow.
    #[error("invalid status transition from {from} to {to}")]
    InvalidTransition {
        /// The current status.
        from: ReservationStatus,
        /// The requested status.
        to: ReservationStatus,
    },

    /// The requested resource was not found locally.
    #[error("not found: {resource}")]
    NotFound {
        /// The resource that was not found.
        resource: String,
    },

    /// A validation error occurred.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },

    /// A success response carried a body that could not be decoded.
    #[error("failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    /// A configuration error occurred.
    #[error("configuration error: {0}")]
    Configuration(#[from] serde_yaml::Error),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        let message = if err.is_timeout() {
            format!("request timed out: {err}")
        } else {
            err.to_string()
        };
        Self::Transport {
            status: err.status().map(|s| s.as_u16()),
            message,
        }
    }
}

impl From<crate::reservation::ValidationError> for Error {
    fn from(err: crate::reservation::ValidationError) -> Self {
        Self::Validation {
            field: err.field,
            message: err.message,
        }
    }
}

impl Error {
    /// Check if the error came from the network boundary.
    ///
    /// # Examples
    ///
    /// ```
    /// use roombook::Error;
    ///
    /// let err = Error::Transport { status: Some(404), message: "gone".into() };
    /// assert!(err.is_transport());
    /// ```
    #[must_use]
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport { .. })
    }

    /// Returns the HTTP status code attached to a transport error.
    #[must_use]
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Transport { status, .. } => *status,
            _ => None,
        }
    }

    /// Returns a short message suitable for showing to a person.
    ///
    /// `context` names the operation that failed, e.g. "create reservation".
    #[must_use]
    pub fn user_message(&self, context: &str) -> String {
        match self {
            Self::InvalidTransition { from, to } => {
                format!("Cannot change a {from} reservation to {to}.")
            }
            Self::Validation { message, .. } => format!("Failed to {context}: {message}"),
            Self::Transport {
                status: Some(code),
                ..
            } => format!("Failed to {context} (server responded with {code})."),
            Self::Transport { status: None, .. } => {
                format!("Failed to {context}. Please check the backend server.")
            }
            other => format!("Failed to {context}: {other}"),
        }
    }
}
