//! HTTP implementation of the remote collection client.

use std::time::Duration;

use chrono::Utc;
use reqwest::blocking::{Client, Response};
use serde::de::DeserializeOwned;

use super::wire::{CreatedBody, ErrorBody, NewReservationBody, ReservationListBody, StatusUpdateBody};
use super::ReservationApi;
use crate::config::ClientConfig;
use crate::error::{Error, Result};
use crate::reservation::{Reservation, ReservationDraft, ReservationId, ReservationStatus};

/// Collection endpoint used when nothing else is configured.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000/api/reservations";

/// Upper bound on a single request, after which it counts as a transport failure.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Talks to the reservation collection over HTTP.
///
/// `GET <base>` lists, `POST <base>` creates, `PUT <base>/{id}` updates the
/// status and `DELETE <base>/{id}` removes.
///
/// # Examples
///
/// ```no_run
/// use roombook::{HttpReservationClient, ReservationApi};
///
/// let client = HttpReservationClient::new("http://localhost:5000/api/reservations").unwrap();
/// let reservations = client.list_all().unwrap();
/// println!("{} reservations", reservations.len());
/// ```
#[derive(Debug, Clone)]
pub struct HttpReservationClient {
    base_url: String,
    http: Client,
}

impl HttpReservationClient {
    /// Creates a client for `base_url` with the default timeout.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        Self::with_timeout(base_url, DEFAULT_TIMEOUT)
    }

    /// Creates a client for `base_url` whose requests give up after `timeout`.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn with_timeout(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let http = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| Error::Transport {
                status: None,
                message: format!("failed to build HTTP client: {e}"),
            })?;

        let base_url = base_url.into().trim_end_matches('/').to_string();
        Ok(Self { base_url, http })
    }

    /// Creates a client from resolved configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn from_config(config: &ClientConfig) -> Result<Self> {
        Self::with_timeout(config.api_url(), config.timeout())
    }

    /// Returns the collection endpoint.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn member_url(&self, id: &ReservationId) -> String {
        format!("{}/{}", self.base_url, id.as_str())
    }

    /// Maps non-success responses to transport errors.
    fn check(response: Response, action: &str) -> Result<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().unwrap_or_default();
        let detail = serde_json::from_str::<ErrorBody>(&body)
            .ok()
            .and_then(|b| b.detail().map(str::to_string))
            .unwrap_or_else(|| {
                status
                    .canonical_reason()
                    .unwrap_or("unexpected status")
                    .to_string()
            });

        log::warn!("{action} failed with HTTP {}: {detail}", status.as_u16());
        Err(Error::Transport {
            status: Some(status.as_u16()),
            message: format!("{action} failed: {detail}"),
        })
    }

    fn decode<T: DeserializeOwned>(response: Response) -> Result<T> {
        let text = response.text()?;
        Ok(serde_json::from_str(&text)?)
    }
}

impl ReservationApi for HttpReservationClient {
    fn list_all(&self) -> Result<Vec<Reservation>> {
        log::debug!("GET {}", self.base_url);
        let response = self.http.get(&self.base_url).send()?;
        let response = Self::check(response, "list reservations")?;
        let body: ReservationListBody = Self::decode(response)?;
        log::debug!("received {} reservation(s)", body.reservations.len());
        Ok(body.reservations)
    }

    fn create(&self, draft: &ReservationDraft) -> Result<Option<Reservation>> {
        let body = NewReservationBody::from_draft(draft, Utc::now());
        log::debug!("POST {}", self.base_url);
        let response = self.http.post(&self.base_url).json(&body).send()?;
        let response = Self::check(response, "create reservation")?;

        let text = response.text()?;
        if text.trim().is_empty() {
            return Ok(None);
        }
        let created: CreatedBody = serde_json::from_str(&text)?;
        Ok(created.into_reservation())
    }

    fn update_status(&self, id: &ReservationId, status: ReservationStatus) -> Result<()> {
        let url = self.member_url(id);
        log::debug!("PUT {url} status={status}");
        let response = self
            .http
            .put(&url)
            .json(&StatusUpdateBody { status })
            .send()?;
        Self::check(response, &format!("update reservation {id}"))?;
        Ok(())
    }

    fn delete(&self, id: &ReservationId) -> Result<()> {
        let url = self.member_url(id);
        log::debug!("DELETE {url}");
        let response = self.http.delete(&url).send()?;
        Self::check(response, &format!("delete reservation {id}"))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let client = HttpReservationClient::new("http://localhost:5000/api/reservations/").unwrap();
        assert_eq!(client.base_url(), "http://localhost:5000/api/reservations");
    }

    #[test]
    fn test_member_url() {
        let client = HttpReservationClient::new("http://localhost:5000/api/reservations").unwrap();
        assert_eq!(
            client.member_url(&ReservationId::new("12")),
            "http://localhost:5000/api/reservations/12"
        );
    }

    #[test]
    fn test_unreachable_server_is_transport_error() {
        // Port 9 (discard) is not expected to have an HTTP listener.
        let client = HttpReservationClient::with_timeout(
            "http://127.0.0.1:9/api/reservations",
            Duration::from_secs(2),
        )
        .unwrap();
        let err = client.list_all().unwrap_err();
        assert!(err.is_transport());
        assert_eq!(err.status_code(), None);
    }
}
