//! Reservation record types.
//!
//! This module provides the shapes exchanged with the reservation
//! collection: drafts awaiting creation, persisted reservations carrying
//! a server-assigned identity, room types, and the boundary rules for
//! human-entered dates.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

pub mod status;

pub use status::{ReservationStatus, StatusAction};

/// Date format used for every calendar date on the wire.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Opaque identifier assigned by the remote collection.
///
/// Identifiers are never generated client-side. The wire may carry them
/// as JSON strings or integers; both decode to the same value.
///
/// # Examples
///
/// ```
/// use roombook::ReservationId;
///
/// let id: ReservationId = serde_json::from_str("17").unwrap();
/// assert_eq!(id, ReservationId::new("17"));
/// assert_eq!(format!("{id}"), "17");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct ReservationId(String);

impl ReservationId {
    /// Wraps an identifier received from the server or typed by a user.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identifier text, as used in resource paths.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ReservationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ReservationId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl<'de> Deserialize<'de> for ReservationId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Helper {
            Integer(i64),
            Text(String),
        }

        Ok(match Helper::deserialize(deserializer)? {
            Helper::Integer(n) => Self(n.to_string()),
            Helper::Text(s) => Self(s),
        })
    }
}

/// The kind of room requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum RoomType {
    /// One king-size bed.
    #[default]
    #[serde(rename = "King bed")]
    KingBed,
    /// One queen-size bed.
    #[serde(rename = "Queen bed")]
    QueenBed,
    /// Two beds.
    #[serde(rename = "Double beds")]
    DoubleBeds,
}

impl RoomType {
    /// All room types, in the order they are offered.
    pub const ALL: [RoomType; 3] = [Self::KingBed, Self::QueenBed, Self::DoubleBeds];

    /// The label used on the wire and in listings.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::KingBed => "King bed",
            Self::QueenBed => "Queen bed",
            Self::DoubleBeds => "Double beds",
        }
    }
}

impl fmt::Display for RoomType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for RoomType {
    type Err = ValidationError;

    /// Accepts wire labels ("Queen bed"), variant names ("QueenBed") and
    /// kebab forms ("queen-bed"), case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let folded: String = s
            .chars()
            .filter(|c| !matches!(c, ' ' | '-' | '_'))
            .collect::<String>()
            .to_lowercase();
        match folded.as_str() {
            "kingbed" | "king" => Ok(Self::KingBed),
            "queenbed" | "queen" => Ok(Self::QueenBed),
            "doublebeds" | "doublebed" | "double" => Ok(Self::DoubleBeds),
            _ => Err(ValidationError {
                field: "room_type".into(),
                message: format!("unknown room type '{s}'"),
            }),
        }
    }
}

/// An unpersisted reservation awaiting creation.
///
/// Drafts are produced by [`crate::FormSession::snapshot`] or built
/// directly. Names are carried exactly as entered.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use roombook::{ReservationDraft, RoomType};
///
/// let draft = ReservationDraft::new(
///     "Jane",
///     "Doe",
///     NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
///     NaiveDate::from_ymd_opt(2024, 6, 3).unwrap(),
/// )
/// .with_room_type(RoomType::QueenBed);
///
/// assert!(draft.validate().is_ok());
/// assert_eq!(draft.birthday, None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReservationDraft {
    /// Guest first name.
    pub first_name: String,
    /// Guest last name.
    pub last_name: String,
    /// Guest birthday, absent when left blank.
    pub birthday: Option<NaiveDate>,
    /// Arrival date.
    pub check_in_date: NaiveDate,
    /// Departure date.
    pub check_out_date: NaiveDate,
    /// Requested room type.
    pub room_type: RoomType,
    /// Free-text notes; may be empty.
    pub extra_info: String,
}

impl ReservationDraft {
    /// Creates a draft with the required fields and defaults for the rest.
    #[must_use]
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        check_in_date: NaiveDate,
        check_out_date: NaiveDate,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            birthday: None,
            check_in_date,
            check_out_date,
            room_type: RoomType::default(),
            extra_info: String::new(),
        }
    }

    /// Sets the birthday.
    #[must_use]
    pub fn with_birthday(mut self, birthday: Option<NaiveDate>) -> Self {
        self.birthday = birthday;
        self
    }

    /// Sets the room type.
    #[must_use]
    pub fn with_room_type(mut self, room_type: RoomType) -> Self {
        self.room_type = room_type;
        self
    }

    /// Sets the free-text notes.
    #[must_use]
    pub fn with_extra_info(mut self, extra_info: impl Into<String>) -> Self {
        self.extra_info = extra_info.into();
        self
    }

    /// Checks the draft before it is sent anywhere.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Either name has no non-whitespace character
    /// - The check-out date is not after the check-in date
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.first_name.trim().is_empty() {
            return Err(ValidationError {
                field: "first_name".into(),
                message: "first name must be non-empty".into(),
            });
        }

        if self.last_name.trim().is_empty() {
            return Err(ValidationError {
                field: "last_name".into(),
                message: "last name must be non-empty".into(),
            });
        }

        if self.check_out_date <= self.check_in_date {
            return Err(ValidationError {
                field: "check_out_date".into(),
                message: format!(
                    "check-out date {} must be after check-in date {}",
                    self.check_out_date, self.check_in_date
                ),
            });
        }

        Ok(())
    }
}

/// A reservation as held by the remote collection.
///
/// The client only ever holds cached copies obtained from a listing.
/// Field names match the underscore-separated wire keys.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reservation {
    id: ReservationId,
    first_name: String,
    last_name: String,
    #[serde(default, deserialize_with = "deserialize_optional_date")]
    birthday: Option<NaiveDate>,
    check_in_date: NaiveDate,
    check_out_date: NaiveDate,
    room_type: RoomType,
    #[serde(default, deserialize_with = "deserialize_null_as_empty")]
    extra_info: String,
    status: ReservationStatus,
    #[serde(deserialize_with = "deserialize_timestamp")]
    created_at: DateTime<Utc>,
}

impl Reservation {
    /// Assembles a reservation from a draft and the server-side fields.
    #[must_use]
    pub fn from_draft(
        id: ReservationId,
        draft: ReservationDraft,
        status: ReservationStatus,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            first_name: draft.first_name,
            last_name: draft.last_name,
            birthday: draft.birthday,
            check_in_date: draft.check_in_date,
            check_out_date: draft.check_out_date,
            room_type: draft.room_type,
            extra_info: draft.extra_info,
            status,
            created_at,
        }
    }

    /// Returns the server-assigned identifier.
    #[must_use]
    pub const fn id(&self) -> &ReservationId {
        &self.id
    }

    /// Returns the guest first name.
    #[must_use]
    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    /// Returns the guest last name.
    #[must_use]
    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    /// Returns "first last".
    #[must_use]
    pub fn guest_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Returns the birthday, if one was given.
    #[must_use]
    pub const fn birthday(&self) -> Option<NaiveDate> {
        self.birthday
    }

    /// Returns the arrival date.
    #[must_use]
    pub const fn check_in_date(&self) -> NaiveDate {
        self.check_in_date
    }

    /// Returns the departure date.
    #[must_use]
    pub const fn check_out_date(&self) -> NaiveDate {
        self.check_out_date
    }

    /// Returns the room type.
    #[must_use]
    pub const fn room_type(&self) -> RoomType {
        self.room_type
    }

    /// Returns the free-text notes.
    #[must_use]
    pub fn extra_info(&self) -> &str {
        &self.extra_info
    }

    /// Returns the lifecycle status.
    #[must_use]
    pub const fn status(&self) -> ReservationStatus {
        self.status
    }

    /// Returns the creation timestamp asserted by the creating client.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the number of nights between check-in and check-out.
    #[must_use]
    pub fn nights(&self) -> i64 {
        (self.check_out_date - self.check_in_date).num_days()
    }
}

/// Parses a required calendar date entered by a person.
///
/// # Errors
///
/// Returns an error if the text is blank or not a `YYYY-MM-DD` date.
pub fn parse_date(field: &str, raw: &str) -> Result<NaiveDate, ValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ValidationError {
            field: field.into(),
            message: "date is required".into(),
        });
    }

    NaiveDate::parse_from_str(trimmed, DATE_FORMAT).map_err(|e| ValidationError {
        field: field.into(),
        message: format!("invalid date '{trimmed}' (expected YYYY-MM-DD): {e}"),
    })
}

/// Normalizes a human-entered birthday.
///
/// Blank input means "no birthday" and becomes `None`, so it is sent as an
/// explicit absence rather than an empty string.
///
/// # Errors
///
/// Returns an error if the text is non-blank and not a `YYYY-MM-DD` date.
///
/// # Examples
///
/// ```
/// use roombook::reservation::normalize_birthday;
///
/// assert_eq!(normalize_birthday("").unwrap(), None);
/// assert_eq!(normalize_birthday("   ").unwrap(), None);
/// assert!(normalize_birthday("1990-02-03").unwrap().is_some());
/// assert!(normalize_birthday("yesterday").is_err());
/// ```
pub fn normalize_birthday(raw: &str) -> Result<Option<NaiveDate>, ValidationError> {
    if raw.trim().is_empty() {
        return Ok(None);
    }
    parse_date("birthday", raw).map(Some)
}

fn deserialize_optional_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;

    match Option::<String>::deserialize(deserializer)? {
        None => Ok(None),
        Some(s) if s.trim().is_empty() => Ok(None),
        Some(s) => NaiveDate::parse_from_str(s.trim(), DATE_FORMAT)
            .map(Some)
            .map_err(|e| D::Error::custom(format!("invalid date '{s}': {e}"))),
    }
}

/// Accepts RFC 3339 timestamps, and naive ones read as UTC.
fn deserialize_timestamp<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;

    const NAIVE_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f"];

    let raw = String::deserialize(deserializer)?;
    let trimmed = raw.trim();
    if let Ok(ts) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(ts.with_timezone(&Utc));
    }
    NAIVE_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(trimmed, format).ok())
        .map(|naive| naive.and_utc())
        .ok_or_else(|| D::Error::custom(format!("invalid timestamp '{raw}'")))
}

fn deserialize_null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Error type for validation failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// The field that failed validation.
    pub field: String,
    /// A description of the validation failure.
    pub message: String,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "validation error for '{}': {}", self.field, self.message)
    }
}

impl std::error::Error for ValidationError {}


#[cfg(test)]
mod proptests;
