//! Book command implementation.
//!
//! Fills a form session from the command line and submits it, so the same
//! parsing and validation apply as for any other front end.

use crate::commands::list::print_reservations;
use crate::error::CliError;
use crate::utils::{
    load_configuration, open_controller, resolve_format, warn_if_stale, GlobalOptions,
};
use clap::Args;
use roombook::{FormSession, Reservation, RoomType};

/// Create a new reservation.
#[derive(Args)]
pub struct BookCommand {
    /// Guest first name
    #[arg(long, value_name = "NAME")]
    pub first_name: String,

    /// Guest last name
    #[arg(long, value_name = "NAME")]
    pub last_name: String,

    /// Check-in date (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub check_in: String,

    /// Check-out date (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub check_out: String,

    /// Guest birthday (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub birthday: Option<String>,

    /// Room type: king-bed, queen-bed or double-beds
    #[arg(long, value_name = "TYPE", default_value = "king-bed")]
    pub room_type: RoomType,

    /// Free-text notes
    #[arg(long, value_name = "TEXT")]
    pub extra_info: Option<String>,
}

impl BookCommand {
    /// Execute the book command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let mut controller = open_controller(&config)?;

        let mut form = FormSession::new();
        form.set_first_name(self.first_name);
        form.set_last_name(self.last_name);
        form.set_check_in(self.check_in);
        form.set_check_out(self.check_out);
        form.set_birthday(self.birthday.unwrap_or_default());
        form.set_room_type(self.room_type);
        form.set_extra_info(self.extra_info.unwrap_or_default());

        let created = form.submit(&mut controller)?;

        if !global.quiet {
            match created {
                Some(reservation) => eprintln!(
                    "Booked reservation {} for {}",
                    reservation.id(),
                    reservation.guest_name()
                ),
                None => eprintln!("Reservation booked"),
            }
            warn_if_stale(&controller);
            let all: Vec<&Reservation> = controller.reservations().iter().collect();
            print_reservations(&all, resolve_format(None, &config))?;
        }

        Ok(())
    }
}
