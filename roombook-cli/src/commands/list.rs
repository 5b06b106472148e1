//! List command implementation.
//!
//! This module implements the `list` command, which displays the
//! reservation collection in various formats (table, JSON, CSV, TSV). The
//! same renderers are used by mutating commands to show the refreshed list.

use crate::error::CliError;
use crate::utils::{
    format_timestamp, load_configuration, open_controller, resolve_format, GlobalOptions,
};
use clap::{Args, ValueEnum};
use roombook::{OutputFormat, Reservation, ReservationStatus};
use std::io::Write;

/// Column headers for CSV/TSV output.
const COLUMN_HEADERS: [&str; 10] = [
    "id",
    "first_name",
    "last_name",
    "birthday",
    "check_in_date",
    "check_out_date",
    "room_type",
    "status",
    "extra_info",
    "created_at",
];

/// Column headers for table output.
const TABLE_HEADERS: [&str; 8] = [
    "id", "guest", "check_in", "check_out", "nights", "room", "status", "actions",
];

/// List reservations.
#[derive(Args)]
pub struct ListCommand {
    /// Output format (default: from configuration, else table)
    #[arg(long, value_enum, ignore_case = true)]
    pub format: Option<FormatArg>,

    /// Only show reservations with this status
    #[arg(long, value_name = "STATUS")]
    pub status: Option<ReservationStatus>,
}

/// Output format flag.
#[derive(Clone, Copy, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum FormatArg {
    /// Tab-separated table format (human-readable)
    Table,
    /// JSON format
    Json,
    /// CSV format
    Csv,
    /// TSV format (tab-separated values)
    Tsv,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Table => OutputFormat::Table,
            FormatArg::Json => OutputFormat::Json,
            FormatArg::Csv => OutputFormat::Csv,
            FormatArg::Tsv => OutputFormat::Tsv,
        }
    }
}

impl ListCommand {
    /// Execute the list command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let controller = open_controller(&config)?;

        let reservations: Vec<&Reservation> = controller
            .reservations()
            .iter()
            .filter(|r| self.status.map_or(true, |s| r.status() == s))
            .collect();

        let format = resolve_format(self.format.map(Into::into), &config);
        print_reservations(&reservations, format)
    }
}

/// Write `reservations` to stdout in `format`.
pub fn print_reservations(
    reservations: &[&Reservation],
    format: OutputFormat,
) -> Result<(), CliError> {
    match format {
        OutputFormat::Table => format_as_table(reservations),
        OutputFormat::Json => format_as_json(reservations),
        OutputFormat::Csv => format_as_delimited(reservations, b','),
        OutputFormat::Tsv => format_as_delimited(reservations, b'\t'),
    }
}

/// Format reservations as a human-readable table.
fn format_as_table(reservations: &[&Reservation]) -> Result<(), CliError> {
    let stdout = std::io::stdout();
    let mut handle = stdout.lock();

    let header_line = TABLE_HEADERS
        .iter()
        .map(|s| s.to_uppercase())
        .collect::<Vec<_>>()
        .join("\t");
    writeln!(handle, "{header_line}")?;

    for res in reservations {
        let actions = res
            .status()
            .actions()
            .iter()
            .map(|a| a.label().to_lowercase())
            .collect::<Vec<_>>();

        writeln!(
            handle,
            "{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}",
            res.id(),
            res.guest_name(),
            res.check_in_date(),
            res.check_out_date(),
            res.nights(),
            res.room_type(),
            res.status(),
            if actions.is_empty() {
                "-".to_string()
            } else {
                actions.join(",")
            },
        )?;
    }

    Ok(())
}

/// Format reservations as JSON, using the wire field names.
fn format_as_json(reservations: &[&Reservation]) -> Result<(), CliError> {
    let stdout = std::io::stdout();
    let mut handle = stdout.lock();

    serde_json::to_writer_pretty(&mut handle, reservations)
        .map_err(|e| CliError::Io(std::io::Error::new(std::io::ErrorKind::Other, e)))?;

    writeln!(handle)?;

    Ok(())
}

/// Convert csv::Error to CliError.
fn csv_error(e: csv::Error) -> CliError {
    CliError::Io(std::io::Error::new(std::io::ErrorKind::Other, e))
}

/// Format reservations as delimited output (CSV or TSV).
fn format_as_delimited(reservations: &[&Reservation], delimiter: u8) -> Result<(), CliError> {
    let stdout = std::io::stdout();
    let handle = stdout.lock();
    let mut writer = csv::WriterBuilder::new()
        .delimiter(delimiter)
        .from_writer(handle);

    writer.write_record(COLUMN_HEADERS).map_err(csv_error)?;

    for res in reservations {
        writer
            .write_record(&[
                res.id().to_string(),
                res.first_name().to_string(),
                res.last_name().to_string(),
                res.birthday().map(|d| d.to_string()).unwrap_or_default(),
                res.check_in_date().to_string(),
                res.check_out_date().to_string(),
                res.room_type().to_string(),
                res.status().to_string(),
                res.extra_info().to_string(),
                format_timestamp(res.created_at()),
            ])
            .map_err(csv_error)?;
    }

    writer.flush()?;

    Ok(())
}
