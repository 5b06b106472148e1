//! Build script for roombook-cli.
//!
//! Generates the `roombook.1` man page into OUT_DIR using clap_mangen.
//!
//! Build scripts cannot depend on the crate being built, so the command
//! structure is restated here.

use clap::{Arg, ArgAction, Command};
use clap_mangen::Man;
use std::fs;
use std::path::PathBuf;

/// Keep in step with src/cli.rs.
fn build_cli() -> Command {
    let id = || Arg::new("id").value_name("ID").required(true).help("Reservation id");

    Command::new("roombook")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Manage hotel reservations")
        .long_about(
            "Command-line front end for a hotel reservation service. Every command loads \
             the reservation collection first and prints the refreshed list after a change.",
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose output")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .help("Suppress non-essential output")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("api-url")
                .long("api-url")
                .help("Reservation collection URL")
                .value_name("URL")
                .global(true),
        )
        .arg(
            Arg::new("timeout")
                .long("timeout")
                .help("Request timeout (in seconds)")
                .value_name("SECONDS")
                .global(true),
        )
        .arg(
            Arg::new("config-dir")
                .long("config-dir")
                .help("Override the configuration directory")
                .value_name("PATH")
                .global(true)
                .env("ROOMBOOK_CONFIG_DIR"),
        )
        .subcommands(vec![
            Command::new("list")
                .about("List reservations")
                .long_about("Display the reservation collection as a table, JSON, CSV or TSV"),
            Command::new("book")
                .about("Create a reservation")
                .long_about("Create a Booked reservation from guest details and stay dates"),
            Command::new("check-in")
                .about("Check a booked guest in")
                .arg(id()),
            Command::new("check-out")
                .about("Check a guest out")
                .arg(id()),
            Command::new("cancel")
                .about("Cancel a booked reservation")
                .arg(id()),
            Command::new("set-status")
                .about("Move a reservation to a given status")
                .long_about("Request a status change; moves the lifecycle forbids are rejected locally")
                .arg(id())
                .arg(Arg::new("status").value_name("STATUS").required(true)),
            Command::new("delete")
                .about("Delete a reservation")
                .long_about("Delete a reservation regardless of its status")
                .arg(id()),
            Command::new("completions")
                .about("Generate shell completion scripts")
                .long_about("Generate shell completion scripts for bash, zsh, fish, or PowerShell"),
        ])
}

fn main() -> std::io::Result<()> {
    let out_dir = PathBuf::from(std::env::var_os("OUT_DIR").unwrap_or_default());
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir)?;

    let mut buffer = Vec::new();
    Man::new(build_cli()).render(&mut buffer)?;
    fs::write(man_dir.join("roombook.1"), buffer)?;

    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=src/commands/");
    Ok(())
}
