#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # roombook
//!
//! Client-side synchronization core for a hotel reservation service.
//!
//! The library keeps a local copy of a remote reservation collection in
//! step with the server, enforces the reservation status lifecycle before
//! anything is sent, and collects new reservations through a form session.
//!
//! ## Core Types
//!
//! - [`Reservation`], [`ReservationDraft`] and [`ReservationStatus`]: the record model
//! - [`ReservationApi`] and [`HttpReservationClient`]: the remote collection client
//! - [`SyncController`]: owner of the cached list, its error and loading state
//! - [`FormSession`]: in-progress input for a new reservation
//! - [`Error`] and [`Result`]: Error handling types
//! - [`Logger`] and [`LogLevel`]: Logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use roombook::{ReservationStatus, StatusAction};
//!
//! let status = ReservationStatus::Booked;
//! assert_eq!(status.actions(), &[StatusAction::CheckIn, StatusAction::Cancel]);
//! assert!(status.can_transition_to(ReservationStatus::CheckedIn));
//! assert!(!ReservationStatus::Canceled.can_transition_to(ReservationStatus::Booked));
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod form;
pub mod logging;
pub mod reservation;
pub mod sync;

// Re-export key types at crate root for convenience
pub use client::{HttpReservationClient, ReservationApi, DEFAULT_BASE_URL, DEFAULT_TIMEOUT};
pub use config::{ClientConfig, ConfigBuilder, OutputFormat};
pub use error::{Error, Result};
pub use form::FormSession;
pub use logging::{init_logger, LogLevel, Logger};
pub use reservation::{
    Reservation, ReservationDraft, ReservationId, ReservationStatus, RoomType, StatusAction,
};
pub use sync::{
    FetchPhase, RefreshOutcome, RefreshTicket, SyncController, SyncView, LOAD_FAILURE_MESSAGE,
};
