//! Form session for entering a new reservation.
//!
//! A [`FormSession`] holds what a person has typed so far. It never talks
//! to the network; [`FormSession::submit`] hands a parsed draft to the
//! [`SyncController`] and clears itself only when the controller accepts it.

use crate::client::ReservationApi;
use crate::error::Result;
use crate::reservation::{
    normalize_birthday, parse_date, Reservation, ReservationDraft, RoomType,
};
use crate::sync::SyncController;

/// In-progress input for one new reservation.
///
/// Dates are kept as the raw text that was entered and only parsed by
/// [`snapshot`](Self::snapshot). The room type is a closed choice and is
/// stored already parsed.
///
/// # Examples
///
/// ```
/// use roombook::{FormSession, RoomType};
///
/// let mut form = FormSession::new();
/// form.set_first_name("Jane");
/// form.set_last_name("Doe");
/// form.set_check_in("2024-06-01");
/// form.set_check_out("2024-06-03");
/// form.set_room_type(RoomType::QueenBed);
///
/// let draft = form.snapshot().unwrap();
/// assert_eq!(draft.birthday, None);
/// assert_eq!(draft.room_type, RoomType::QueenBed);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormSession {
    first_name: String,
    last_name: String,
    birthday: String,
    check_in: String,
    check_out: String,
    room_type: RoomType,
    extra_info: String,
}

impl FormSession {
    /// Creates an empty form.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the first name.
    pub fn set_first_name(&mut self, value: impl Into<String>) {
        self.first_name = value.into();
    }

    /// Sets the last name.
    pub fn set_last_name(&mut self, value: impl Into<String>) {
        self.last_name = value.into();
    }

    /// Sets the birthday text; blank means no birthday.
    pub fn set_birthday(&mut self, value: impl Into<String>) {
        self.birthday = value.into();
    }

    /// Sets the check-in date text (`YYYY-MM-DD`).
    pub fn set_check_in(&mut self, value: impl Into<String>) {
        self.check_in = value.into();
    }

    /// Sets the check-out date text (`YYYY-MM-DD`).
    pub fn set_check_out(&mut self, value: impl Into<String>) {
        self.check_out = value.into();
    }

    /// Sets the room type.
    pub fn set_room_type(&mut self, value: RoomType) {
        self.room_type = value;
    }

    /// Sets the free-text notes.
    pub fn set_extra_info(&mut self, value: impl Into<String>) {
        self.extra_info = value.into();
    }

    /// Returns the first name as entered.
    #[must_use]
    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    /// Returns the last name as entered.
    #[must_use]
    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    /// Returns the birthday text as entered.
    #[must_use]
    pub fn birthday(&self) -> &str {
        &self.birthday
    }

    /// Returns the check-in text as entered.
    #[must_use]
    pub fn check_in(&self) -> &str {
        &self.check_in
    }

    /// Returns the check-out text as entered.
    #[must_use]
    pub fn check_out(&self) -> &str {
        &self.check_out
    }

    /// Returns the selected room type.
    #[must_use]
    pub const fn room_type(&self) -> RoomType {
        self.room_type
    }

    /// Returns the notes as entered.
    #[must_use]
    pub fn extra_info(&self) -> &str {
        &self.extra_info
    }

    /// Restores every field to its default.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Returns true if nothing differs from the defaults.
    #[must_use]
    pub fn is_pristine(&self) -> bool {
        *self == Self::default()
    }

    /// Parses the current input into a draft.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`](crate::Error::Validation) if a date is
    /// missing or malformed. Name and date-order checks happen when the
    /// draft is submitted.
    pub fn snapshot(&self) -> Result<ReservationDraft> {
        let check_in = parse_date("check_in_date", &self.check_in)?;
        let check_out = parse_date("check_out_date", &self.check_out)?;
        let birthday = normalize_birthday(&self.birthday)?;

        Ok(
            ReservationDraft::new(&self.first_name, &self.last_name, check_in, check_out)
                .with_birthday(birthday)
                .with_room_type(self.room_type)
                .with_extra_info(&self.extra_info),
        )
    }

    /// Submits the form through `controller`.
    ///
    /// The form is reset only if the controller accepts the draft; on any
    /// error the input is kept so it can be corrected.
    ///
    /// # Errors
    ///
    /// Returns the parse error from [`snapshot`](Self::snapshot) or the
    /// error from [`SyncController::submit_new_reservation`].
    pub fn submit<A: ReservationApi>(
        &mut self,
        controller: &mut SyncController<A>,
    ) -> Result<Option<Reservation>> {
        let draft = self
            .snapshot()
            .map_err(|e| controller.report(e, "create reservation"))?;
        let created = controller.submit_new_reservation(&draft)?;
        self.reset();
        Ok(created)
    }
}
