//! Common test utilities for integration tests.
//!
//! The stub backend lives in `roombook-test-support`; this module adds the
//! record fixtures the library tests build their listings from.

use chrono::{NaiveDate, Utc};
use roombook::{Reservation, ReservationDraft, ReservationId, ReservationStatus, RoomType};

pub use roombook_test_support::{StubResponse, StubServer};

/// Builds a cached record with fixed dates.
#[allow(dead_code)]
pub fn reservation(id: &str, first: &str, last: &str, status: ReservationStatus) -> Reservation {
    let draft = ReservationDraft::new(
        first,
        last,
        NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
        NaiveDate::from_ymd_opt(2024, 6, 3).unwrap(),
    )
    .with_room_type(RoomType::QueenBed);
    Reservation::from_draft(ReservationId::new(id), draft, status, Utc::now())
}
