//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use crate::commands::{
    ActionCommand, BookCommand, CompletionsCommand, DeleteCommand, ListCommand, SetStatusCommand,
};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-line front end for a hotel reservation service.
#[derive(Parser)]
#[command(name = "roombook")]
#[command(version, about = "Manage hotel reservations", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Reservation collection URL
    #[arg(long, value_name = "URL", global = true)]
    pub api_url: Option<String>,

    /// Request timeout (in seconds)
    #[arg(long, value_name = "SECONDS", global = true)]
    pub timeout: Option<u64>,

    /// Override the configuration directory
    #[arg(long, value_name = "PATH", global = true, env = "ROOMBOOK_CONFIG_DIR")]
    pub config_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// List reservations
    List(ListCommand),

    /// Create a reservation
    Book(BookCommand),

    /// Check a booked guest in
    CheckIn(ActionCommand),

    /// Check a guest out
    CheckOut(ActionCommand),

    /// Cancel a booked reservation
    Cancel(ActionCommand),

    /// Move a reservation to a given status
    SetStatus(SetStatusCommand),

    /// Delete a reservation
    Delete(DeleteCommand),

    /// Generate shell completion scripts
    Completions(CompletionsCommand),
}
