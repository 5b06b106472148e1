//! Delete command implementation.

use crate::commands::list::print_reservations;
use crate::error::CliError;
use crate::utils::{
    load_configuration, open_controller, resolve_format, warn_if_stale, GlobalOptions,
};
use clap::Args;
use roombook::{Reservation, ReservationId};

/// Delete a reservation, whatever its status.
#[derive(Args)]
pub struct DeleteCommand {
    /// Reservation id
    #[arg(value_name = "ID")]
    pub id: String,
}

impl DeleteCommand {
    /// Execute the delete command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let mut controller = open_controller(&config)?;

        let id = ReservationId::new(self.id);
        controller.remove_reservation(&id)?;

        if !global.quiet {
            eprintln!("Deleted reservation {id}");
            warn_if_stale(&controller);
            let all: Vec<&Reservation> = controller.reservations().iter().collect();
            print_reservations(&all, resolve_format(None, &config))?;
        }

        Ok(())
    }
}
