//! Main entry point for the roombook CLI.
//!
//! This is the command-line front end for a hotel reservation service.
//! Every command first loads the reservation collection, then:
//! - `list`: prints it
//! - `book`: creates a reservation
//! - `check-in`, `check-out`, `cancel`, `set-status`: change a status
//! - `delete`: removes a reservation

mod cli;
mod commands;
mod error;
mod utils;

use clap::Parser;
use cli::Cli;
use roombook::StatusAction;
use utils::GlobalOptions;

fn main() {
    let cli = Cli::parse();

    // Route library tracing through the stderr logger
    let logger = roombook::init_logger(cli.verbose, cli.quiet);
    logger.install();

    let global = GlobalOptions {
        quiet: cli.quiet,
        api_url: cli.api_url,
        timeout: cli.timeout,
        config_dir: cli.config_dir,
    };

    let result = match cli.command {
        cli::Command::List(cmd) => cmd.execute(&global),
        cli::Command::Book(cmd) => cmd.execute(&global),
        cli::Command::CheckIn(cmd) => cmd.execute(StatusAction::CheckIn, &global),
        cli::Command::CheckOut(cmd) => cmd.execute(StatusAction::CheckOut, &global),
        cli::Command::Cancel(cmd) => cmd.execute(StatusAction::Cancel, &global),
        cli::Command::SetStatus(cmd) => cmd.execute(&global),
        cli::Command::Delete(cmd) => cmd.execute(&global),
        cli::Command::Completions(cmd) => cmd.execute(&global),
    };

    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}
