//! Status change commands.
//!
//! `check-in`, `check-out` and `cancel` apply a named lifecycle action;
//! `set-status` requests an arbitrary target status. Either way the move is
//! checked against the cached status before anything is sent.

use crate::commands::list::print_reservations;
use crate::error::CliError;
use crate::utils::{
    load_configuration, open_controller, resolve_format, warn_if_stale, GlobalOptions,
};
use clap::Args;
use roombook::{
    ClientConfig, HttpReservationClient, Reservation, ReservationId, ReservationStatus,
    StatusAction, SyncController,
};

/// Apply a lifecycle action to one reservation.
#[derive(Args)]
pub struct ActionCommand {
    /// Reservation id
    #[arg(value_name = "ID")]
    pub id: String,
}

impl ActionCommand {
    /// Execute `action` against the reservation.
    pub fn execute(self, action: StatusAction, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let mut controller = open_controller(&config)?;

        let id = ReservationId::new(self.id);
        controller.apply_action(&id, action)?;

        finish(&controller, &config, global, &format!("{action}: reservation {id}"))
    }
}

/// Move a reservation to a given status.
#[derive(Args)]
pub struct SetStatusCommand {
    /// Reservation id
    #[arg(value_name = "ID")]
    pub id: String,

    /// Target status: booked, checked-in, checked-out or canceled
    #[arg(value_name = "STATUS")]
    pub status: ReservationStatus,
}

impl SetStatusCommand {
    /// Execute the set-status command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let mut controller = open_controller(&config)?;

        let id = ReservationId::new(self.id);
        controller.change_status(&id, self.status)?;

        finish(
            &controller,
            &config,
            global,
            &format!("Reservation {id} is now {}", self.status),
        )
    }
}

fn finish(
    controller: &SyncController<HttpReservationClient>,
    config: &ClientConfig,
    global: &GlobalOptions,
    message: &str,
) -> Result<(), CliError> {
    if global.quiet {
        return Ok(());
    }

    eprintln!("{message}");
    warn_if_stale(controller);
    let all: Vec<&Reservation> = controller.reservations().iter().collect();
    print_reservations(&all, resolve_format(None, config))
}
