//! Synchronization controller.
//!
//! [`SyncController`] owns the local view of the reservation collection:
//! the cached list, the user-facing error message and the loading flag.
//! It is the only writer of that state. Every successful mutation is
//! followed by a full reload; the cached list is always a snapshot from
//! the most recently issued fetch, never a locally patched copy.
//!
//! Fetches are tagged with a [`RefreshTicket`]. Only the response for the
//! latest issued ticket is applied, so a slow earlier fetch can never
//! overwrite a later one.

use crate::client::ReservationApi;
use crate::error::{Error, Result};
use crate::reservation::{
    Reservation, ReservationDraft, ReservationId, ReservationStatus, StatusAction,
};

/// Message shown when the collection cannot be fetched.
pub const LOAD_FAILURE_MESSAGE: &str =
    "Failed to load reservations. Please check the backend server.";

/// Where the controller is in its fetch cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchPhase {
    /// No fetch has been issued yet.
    Idle,
    /// The latest issued fetch has not resolved.
    Loading,
    /// The latest fetch succeeded.
    Loaded,
    /// The latest fetch failed; the previous list is still shown.
    Failed,
}

/// Identifies one issued fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RefreshTicket {
    seq: u64,
}

impl RefreshTicket {
    /// Returns the sequence number; later fetches have larger numbers.
    #[must_use]
    pub const fn seq(self) -> u64 {
        self.seq
    }
}

/// What happened to a fetch response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshOutcome {
    /// The list was replaced and the error cleared.
    Applied,
    /// The fetch failed; the error is set and the list kept.
    Failed,
    /// A later fetch was issued, so this response was discarded.
    Stale,
}

/// Read-only view for a presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SyncView<'a> {
    /// True while the latest issued fetch is outstanding.
    pub is_loading: bool,
    /// The current user-facing error, if any.
    pub error: Option<&'a str>,
    /// The cached reservations, in server order.
    pub reservations: &'a [Reservation],
}

/// Owns the cached reservation list and coordinates reloads.
///
/// # Examples
///
/// ```no_run
/// use roombook::{HttpReservationClient, ReservationId, ReservationStatus, SyncController};
///
/// let client = HttpReservationClient::new("http://localhost:5000/api/reservations").unwrap();
/// let mut controller = SyncController::new(client);
/// controller.refresh();
///
/// let id = ReservationId::new("1");
/// if let Err(e) = controller.change_status(&id, ReservationStatus::CheckedIn) {
///     eprintln!("{e}");
/// }
/// println!("{:?}", controller.view());
/// ```
#[derive(Debug)]
pub struct SyncController<A> {
    api: A,
    reservations: Vec<Reservation>,
    error: Option<String>,
    phase: FetchPhase,
    issued: u64,
    resolved: u64,
}

impl<A: ReservationApi> SyncController<A> {
    /// Creates a controller with an empty cache.
    #[must_use]
    pub fn new(api: A) -> Self {
        Self {
            api,
            reservations: Vec::new(),
            error: None,
            phase: FetchPhase::Idle,
            issued: 0,
            resolved: 0,
        }
    }

    /// Returns the client this controller talks through.
    #[must_use]
    pub const fn api(&self) -> &A {
        &self.api
    }

    /// Returns the read-only view.
    #[must_use]
    pub fn view(&self) -> SyncView<'_> {
        SyncView {
            is_loading: self.is_loading(),
            error: self.error(),
            reservations: &self.reservations,
        }
    }

    /// Returns the cached reservations.
    #[must_use]
    pub fn reservations(&self) -> &[Reservation] {
        &self.reservations
    }

    /// Returns the current user-facing error.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Returns true while the latest issued fetch is outstanding.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.issued > self.resolved
    }

    /// Returns the fetch phase.
    #[must_use]
    pub const fn phase(&self) -> FetchPhase {
        self.phase
    }

    /// Looks up a cached reservation.
    #[must_use]
    pub fn find(&self, id: &ReservationId) -> Option<&Reservation> {
        self.reservations.iter().find(|r| r.id() == id)
    }

    /// Dismisses the current error message.
    pub fn clear_error(&mut self) {
        self.error = None;
    }

    /// Starts a fetch cycle and returns its ticket.
    ///
    /// Use with [`apply_refresh`](Self::apply_refresh) when the fetch itself
    /// is driven elsewhere; [`refresh`](Self::refresh) does both.
    pub fn begin_refresh(&mut self) -> RefreshTicket {
        self.issued += 1;
        self.phase = FetchPhase::Loading;
        self.error = None;
        log::debug!("refresh #{} issued", self.issued);
        RefreshTicket { seq: self.issued }
    }

    /// Applies the result of the fetch identified by `ticket`.
    ///
    /// Results for anything but the latest issued ticket are discarded. On
    /// failure the previous list is kept.
    pub fn apply_refresh(
        &mut self,
        ticket: RefreshTicket,
        result: Result<Vec<Reservation>>,
    ) -> RefreshOutcome {
        if ticket.seq != self.issued || ticket.seq <= self.resolved {
            log::debug!(
                "discarding response for refresh #{} (latest is #{})",
                ticket.seq,
                self.issued
            );
            return RefreshOutcome::Stale;
        }

        self.resolved = ticket.seq;
        match result {
            Ok(reservations) => {
                self.reservations = reservations;
                self.error = None;
                self.phase = FetchPhase::Loaded;
                RefreshOutcome::Applied
            }
            Err(e) => {
                log::warn!("failed to fetch reservations: {e}");
                self.error = Some(LOAD_FAILURE_MESSAGE.to_string());
                self.phase = FetchPhase::Failed;
                RefreshOutcome::Failed
            }
        }
    }

    /// Fetches the whole collection and replaces the cache with it.
    pub fn refresh(&mut self) -> RefreshOutcome {
        let ticket = self.begin_refresh();
        let result = self.api.list_all();
        self.apply_refresh(ticket, result)
    }

    /// Creates a reservation and reloads.
    ///
    /// `Ok` tells the caller the draft was accepted and its form can be
    /// reset. On failure the cache is left alone and the error is recorded
    /// in the same slot a failed fetch uses.
    ///
    /// # Errors
    ///
    /// Returns a validation error for a bad draft (no request is made), or
    /// the transport error from the create request.
    pub fn submit_new_reservation(
        &mut self,
        draft: &ReservationDraft,
    ) -> Result<Option<Reservation>> {
        if let Err(e) = draft.validate() {
            return Err(self.report(e.into(), "create reservation"));
        }

        match self.api.create(draft) {
            Ok(created) => {
                log::debug!(
                    "created reservation for {} {}",
                    draft.first_name,
                    draft.last_name
                );
                self.invalidate();
                Ok(created)
            }
            Err(e) => Err(self.report(e, "create reservation")),
        }
    }

    /// Moves a reservation to `new_status` and reloads.
    ///
    /// The move is checked against the lifecycle using the cached status
    /// before any request is made. Nothing changes locally until the reload.
    ///
    /// # Errors
    ///
    /// Returns:
    /// - [`Error::NotFound`] if `id` is not in the cache
    /// - [`Error::InvalidTransition`] if the lifecycle forbids the move
    /// - The transport error from the update request
    pub fn change_status(&mut self, id: &ReservationId, new_status: ReservationStatus) -> Result<()> {
        let Some(current) = self.find(id).map(Reservation::status) else {
            let err = Error::NotFound {
                resource: format!("reservation {id}"),
            };
            return Err(self.report(err, "update reservation"));
        };

        if let Err(e) = current.transition_to(new_status) {
            return Err(self.report(e, "update reservation"));
        }

        match self.api.update_status(id, new_status) {
            Ok(()) => {
                log::debug!("reservation {id}: {current} -> {new_status}");
                self.invalidate();
                Ok(())
            }
            Err(e) => Err(self.report(e, "update reservation")),
        }
    }

    /// Applies a named lifecycle action such as check-in.
    ///
    /// # Errors
    ///
    /// Same as [`change_status`](Self::change_status).
    pub fn apply_action(&mut self, id: &ReservationId, action: StatusAction) -> Result<()> {
        self.change_status(id, action.target())
    }

    /// Deletes a reservation and reloads.
    ///
    /// # Errors
    ///
    /// Returns the transport error from the delete request; the cache is
    /// left unchanged in that case.
    pub fn remove_reservation(&mut self, id: &ReservationId) -> Result<()> {
        match self.api.delete(id) {
            Ok(()) => {
                log::debug!("deleted reservation {id}");
                self.invalidate();
                Ok(())
            }
            Err(e) => Err(self.report(e, "delete reservation")),
        }
    }

    /// The single reload path taken after every successful mutation.
    fn invalidate(&mut self) -> RefreshOutcome {
        self.refresh()
    }

    /// Records a user-facing message for `err` and hands it back.
    ///
    /// Failures detected before a controller operation runs, such as an
    /// unparseable form field, are recorded through here too.
    pub fn report(&mut self, err: Error, context: &str) -> Error {
        let message = err.user_message(context);
        log::warn!("{message} ({err})");
        self.error = Some(message);
        err
    }
}
