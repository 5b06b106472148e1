//! Request and response bodies for the reservation collection.
//!
//! Keys are underscore-separated on the wire. Calendar dates travel as
//! `YYYY-MM-DD`; an absent birthday travels as `null`.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::reservation::{Reservation, ReservationDraft, ReservationStatus, RoomType};

/// Body of a creation request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewReservationBody<'a> {
    /// Guest first name, as entered.
    pub first_name: &'a str,
    /// Guest last name, as entered.
    pub last_name: &'a str,
    /// Birthday, `null` when absent.
    pub birthday: Option<NaiveDate>,
    /// Arrival date.
    pub check_in_date: NaiveDate,
    /// Departure date.
    pub check_out_date: NaiveDate,
    /// Requested room type.
    pub room_type: RoomType,
    /// Free-text notes.
    pub extra_info: &'a str,
    /// Always `Booked` for new reservations.
    pub status: ReservationStatus,
    /// Time the creation request was issued.
    pub created_at: DateTime<Utc>,
}

impl<'a> NewReservationBody<'a> {
    /// Builds the body for `draft`, stamped with `created_at`.
    #[must_use]
    pub fn from_draft(draft: &'a ReservationDraft, created_at: DateTime<Utc>) -> Self {
        Self {
            first_name: &draft.first_name,
            last_name: &draft.last_name,
            birthday: draft.birthday,
            check_in_date: draft.check_in_date,
            check_out_date: draft.check_out_date,
            room_type: draft.room_type,
            extra_info: &draft.extra_info,
            status: ReservationStatus::Booked,
            created_at,
        }
    }
}

/// Body of a status update request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusUpdateBody {
    /// The requested status.
    pub status: ReservationStatus,
}

/// Body of a listing response.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ReservationListBody {
    /// Every reservation in the collection.
    pub reservations: Vec<Reservation>,
}

/// Body of a creation response.
///
/// Servers either echo the record inside a `reservation` envelope, return
/// it bare, or only acknowledge the request. Echoes without an identifier
/// fall through to `Acknowledged`.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum CreatedBody {
    /// `{ "reservation": { ... } }`
    Envelope {
        /// The created record.
        reservation: Reservation,
    },
    /// The created record itself.
    Bare(Reservation),
    /// Anything else, such as `{ "message": "Reservation Booked!" }`.
    Acknowledged(serde_json::Value),
}

impl CreatedBody {
    /// Extracts the created record, if the server sent one.
    #[must_use]
    pub fn into_reservation(self) -> Option<Reservation> {
        match self {
            Self::Envelope { reservation } | Self::Bare(reservation) => Some(reservation),
            Self::Acknowledged(_) => None,
        }
    }
}

/// Body of an error response.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorBody {
    /// Error description, when present.
    pub error: Option<String>,
    /// Informational message, when present.
    pub message: Option<String>,
}

impl ErrorBody {
    /// Returns the most specific description the server gave.
    #[must_use]
    pub fn detail(&self) -> Option<&str> {
        self.error.as_deref().or(self.message.as_deref())
    }
}
