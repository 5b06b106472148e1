//! Reservation lifecycle.
//!
//! A reservation starts out `Booked`. From there it can be checked in or
//! canceled; a checked-in reservation can be checked out. `Checked-Out`
//! and `Canceled` are terminal. Deleting a reservation is not a status
//! transition and is allowed from any state.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

use super::ValidationError;
use crate::error::{Error, Result};

/// The lifecycle status of a reservation.
///
/// # Examples
///
/// ```
/// use roombook::ReservationStatus;
///
/// let status = ReservationStatus::Booked;
/// assert!(status.can_transition_to(ReservationStatus::CheckedIn));
/// assert!(!status.can_transition_to(ReservationStatus::CheckedOut));
/// assert!(ReservationStatus::Canceled.is_terminal());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum ReservationStatus {
    /// Created and awaiting arrival.
    #[default]
    #[serde(rename = "Booked")]
    Booked,
    /// The guest has arrived.
    #[serde(rename = "Checked-In")]
    CheckedIn,
    /// The guest has left.
    #[serde(rename = "Checked-Out")]
    CheckedOut,
    /// Canceled before arrival.
    #[serde(rename = "Canceled")]
    Canceled,
}

impl ReservationStatus {
    /// All statuses, in lifecycle order.
    pub const ALL: [ReservationStatus; 4] = [
        Self::Booked,
        Self::CheckedIn,
        Self::CheckedOut,
        Self::Canceled,
    ];

    /// The label used on the wire.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Booked => "Booked",
            Self::CheckedIn => "Checked-In",
            Self::CheckedOut => "Checked-Out",
            Self::Canceled => "Canceled",
        }
    }

    /// Returns true if no action leads out of this status.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::CheckedOut | Self::Canceled)
    }

    /// Returns the actions available from this status.
    #[must_use]
    pub const fn actions(self) -> &'static [StatusAction] {
        match self {
            Self::Booked => &[StatusAction::CheckIn, StatusAction::Cancel],
            Self::CheckedIn => &[StatusAction::CheckOut],
            Self::CheckedOut | Self::Canceled => &[],
        }
    }

    /// Returns true if the lifecycle permits moving to `next`.
    #[must_use]
    pub fn can_transition_to(self, next: Self) -> bool {
        self.actions().iter().any(|action| action.target() == next)
    }

    /// Validates a move to `next`, returning the new status.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidTransition`] if the move is not in the
    /// lifecycle, including a move to the same status.
    pub fn transition_to(self, next: Self) -> Result<Self> {
        if self.can_transition_to(next) {
            Ok(next)
        } else {
            Err(Error::InvalidTransition {
                from: self,
                to: next,
            })
        }
    }
}

impl fmt::Display for ReservationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ReservationStatus {
    type Err = ValidationError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let folded: String = s
            .chars()
            .filter(|c| !matches!(c, ' ' | '-' | '_'))
            .collect::<String>()
            .to_lowercase();
        match folded.as_str() {
            "booked" => Ok(Self::Booked),
            "checkedin" => Ok(Self::CheckedIn),
            "checkedout" => Ok(Self::CheckedOut),
            "canceled" | "cancelled" => Ok(Self::Canceled),
            _ => Err(ValidationError {
                field: "status".into(),
                message: format!("unknown status '{s}'"),
            }),
        }
    }
}

impl<'de> Deserialize<'de> for ReservationStatus {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let label = String::deserialize(deserializer)?;
        label.parse().map_err(serde::de::Error::custom)
    }
}

/// A named status change offered to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusAction {
    /// `Booked → Checked-In`.
    CheckIn,
    /// `Checked-In → Checked-Out`.
    CheckOut,
    /// `Booked → Canceled`.
    Cancel,
}

impl StatusAction {
    /// The status this action moves a reservation to.
    #[must_use]
    pub const fn target(self) -> ReservationStatus {
        match self {
            Self::CheckIn => ReservationStatus::CheckedIn,
            Self::CheckOut => ReservationStatus::CheckedOut,
            Self::Cancel => ReservationStatus::Canceled,
        }
    }

    /// A short label for buttons and listings.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::CheckIn => "Check-In",
            Self::CheckOut => "Check-Out",
            Self::Cancel => "Cancel",
        }
    }
}

impl fmt::Display for StatusAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use ReservationStatus::{Booked, Canceled, CheckedIn, CheckedOut};

    #[test]
    fn test_initial_status_is_booked() {
        assert_eq!(ReservationStatus::default(), Booked);
    }

    #[test]
    fn test_transition_table() {
        let allowed = [(Booked, CheckedIn), (Booked, Canceled), (CheckedIn, CheckedOut)];

        for from in ReservationStatus::ALL {
            for to in ReservationStatus::ALL {
                let expected = allowed.contains(&(from, to));
                assert_eq!(
                    from.can_transition_to(to),
                    expected,
                    "{from} -> {to} should be {}",
                    if expected { "allowed" } else { "rejected" }
                );
            }
        }
    }

    #[test]
    fn test_terminal_statuses_have_no_actions() {
        assert!(CheckedOut.actions().is_empty());
        assert!(Canceled.actions().is_empty());
        assert!(CheckedOut.is_terminal());
        assert!(!CheckedIn.is_terminal());
    }

    #[test]
    fn test_transition_to_rejects_self_transition() {
        let err = Booked.transition_to(Booked).unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidTransition {
                from: Booked,
                to: Booked
            }
        ));
    }

    #[test]
    fn test_transition_to_returns_target() {
        assert_eq!(CheckedIn.transition_to(CheckedOut).unwrap(), CheckedOut);
    }

    #[test]
    fn test_wire_labels() {
        assert_eq!(serde_json::to_string(&CheckedIn).unwrap(), "\"Checked-In\"");
        let parsed: ReservationStatus = serde_json::from_str("\"Checked-Out\"").unwrap();
        assert_eq!(parsed, CheckedOut);
    }

    #[test]
    fn test_decoding_accepts_loose_labels() {
        let parsed: ReservationStatus = serde_json::from_str("\"Checked-in\"").unwrap();
        assert_eq!(parsed, CheckedIn);
        let parsed: ReservationStatus = serde_json::from_str("\"Cancelled\"").unwrap();
        assert_eq!(parsed, Canceled);
        assert!(serde_json::from_str::<ReservationStatus>("\"Pending\"").is_err());
    }

    #[test]
    fn test_from_str_variants() {
        assert_eq!("Checked-In".parse::<ReservationStatus>().unwrap(), CheckedIn);
        assert_eq!("checked_out".parse::<ReservationStatus>().unwrap(), CheckedOut);
        assert_eq!("CANCELLED".parse::<ReservationStatus>().unwrap(), Canceled);
        assert!("pending".parse::<ReservationStatus>().is_err());
    }

    #[test]
    fn test_action_targets() {
        assert_eq!(StatusAction::CheckIn.target(), CheckedIn);
        assert_eq!(StatusAction::CheckOut.target(), CheckedOut);
        assert_eq!(StatusAction::Cancel.target(), Canceled);
        assert_eq!(Booked.actions(), &[StatusAction::CheckIn, StatusAction::Cancel]);
    }
}
