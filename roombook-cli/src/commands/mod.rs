//! CLI command implementations.
//!
//! This module contains the implementations of all CLI commands:
//! - `list`: List reservations
//! - `book`: Create a reservation
//! - `status`: `check-in`, `check-out`, `cancel` and `set-status`
//! - `delete`: Delete a reservation
//! - `completions`: Generate shell completion scripts

pub mod book;
pub mod completions;
pub mod delete;
pub mod list;
pub mod status;

pub use book::BookCommand;
pub use completions::CompletionsCommand;
pub use delete::DeleteCommand;
pub use list::ListCommand;
pub use status::{ActionCommand, SetStatusCommand};
