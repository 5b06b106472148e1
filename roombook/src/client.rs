//! Remote collection client.
//!
//! The reservation collection lives on a remote server behind a single
//! base endpoint. [`ReservationApi`] is the request/response seam the
//! synchronization controller talks to; [`HttpReservationClient`] is the
//! implementation that speaks HTTP.
//!
//! Every operation is a single best-effort attempt. There is no caching,
//! no retry and no idempotency key.

pub mod http;
pub mod wire;

pub use http::{HttpReservationClient, DEFAULT_BASE_URL, DEFAULT_TIMEOUT};

use crate::error::Result;
use crate::reservation::{Reservation, ReservationDraft, ReservationId, ReservationStatus};

/// Stateless operations on the remote reservation collection.
///
/// Implementations map each call to exactly one request. Any non-success
/// response must surface as [`crate::Error::Transport`].
#[cfg_attr(test, mockall::automock)]
pub trait ReservationApi {
    /// Reads the entire collection, in server order.
    ///
    /// # Errors
    ///
    /// Returns a transport error on a non-success status or network failure.
    fn list_all(&self) -> Result<Vec<Reservation>>;

    /// Creates a reservation from a draft.
    ///
    /// The request forces the status to `Booked` and stamps `created_at`
    /// with the time of the call. Returns the server's representation of
    /// the new record when the response carries one with an identifier.
    ///
    /// # Errors
    ///
    /// Returns a transport error on a non-success status or network failure.
    fn create(&self, draft: &ReservationDraft) -> Result<Option<Reservation>>;

    /// Replaces the status of one reservation.
    ///
    /// # Errors
    ///
    /// Returns a transport error on a non-success status or network failure.
    fn update_status(&self, id: &ReservationId, status: ReservationStatus) -> Result<()>;

    /// Removes one reservation.
    ///
    /// # Errors
    ///
    /// Returns a transport error on a non-success status or network failure.
    fn delete(&self, id: &ReservationId) -> Result<()>;
}
