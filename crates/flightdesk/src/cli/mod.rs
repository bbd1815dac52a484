//! Command-line interface for flightdesk.
//!
//! This module provides the CLI structure for the `flightdesk` binary, a
//! front end over the validation and storage core.

mod commands;
mod output;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub use commands::{BookCommand, BookingArgs, CancelCommand, ConfigCommand, EditCommand, ListCommand};
pub use output::render_table;

/// flightdesk - Book, list, edit and cancel flight reservations
///
/// Reservations are validated (complete fields, letters-only names, known
/// cities) and kept in a local `SQLite` database.
#[derive(Debug, Parser)]
#[command(name = "flightdesk")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to custom configuration file
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Increase verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// The command to execute
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Create the reservations database if it does not exist
    Init,

    /// Book a flight
    Book(BookCommand),

    /// List all reservations
    List(ListCommand),

    /// Change an existing reservation
    Edit(EditCommand),

    /// Delete a reservation
    Cancel(CancelCommand),

    /// List the recognized cities
    Cities,

    /// View or check configuration
    #[command(subcommand)]
    Config(ConfigCommand),
}

impl Cli {
    /// Get the verbosity level based on flags.
    #[must_use]
    pub fn verbosity(&self) -> crate::logging::Verbosity {
        crate::logging::Verbosity::from_flags(self.verbose, self.quiet)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging::Verbosity;
    use clap::CommandFactory;

    #[test]
    fn test_cli_name() {
        let cli = Cli::command();
        assert_eq!(cli.get_name(), "flightdesk");
    }

    #[test]
    fn test_cli_verify() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_verbosity_flags() {
        let cli = Cli::try_parse_from(["flightdesk", "-q", "list"]).unwrap();
        assert_eq!(cli.verbosity(), Verbosity::Quiet);

        let cli = Cli::try_parse_from(["flightdesk", "list"]).unwrap();
        assert_eq!(cli.verbosity(), Verbosity::Normal);

        let cli = Cli::try_parse_from(["flightdesk", "-vv", "list"]).unwrap();
        assert_eq!(cli.verbosity(), Verbosity::Debug);
    }

    #[test]
    fn test_parse_init() {
        let cli = Cli::try_parse_from(["flightdesk", "init"]).unwrap();
        assert!(matches!(cli.command, Command::Init));
    }

    #[test]
    fn test_parse_book() {
        let cli = Cli::try_parse_from([
            "flightdesk",
            "book",
            "--name",
            "Jane Doe",
            "-f",
            "MS777",
            "--from",
            "cairo",
            "--to",
            "London",
            "--seat",
            "12A",
        ])
        .unwrap();

        let Command::Book(book) = cli.command else {
            panic!("expected book command");
        };
        assert_eq!(book.fields.full_name.as_deref(), Some("Jane Doe"));
        assert_eq!(book.fields.flight_number.as_deref(), Some("MS777"));
        assert_eq!(book.fields.departure.as_deref(), Some("cairo"));
        assert_eq!(book.fields.destination.as_deref(), Some("London"));
        assert_eq!(book.fields.date, None);
        assert_eq!(book.fields.seat_number.as_deref(), Some("12A"));
    }

    #[test]
    fn test_parse_list_json() {
        let cli = Cli::try_parse_from(["flightdesk", "list", "--json"]).unwrap();
        assert!(matches!(cli.command, Command::List(ListCommand { json: true })));
    }

    #[test]
    fn test_parse_edit() {
        let cli = Cli::try_parse_from(["flightdesk", "edit", "3", "--seat", "1F"]).unwrap();
        let Command::Edit(edit) = cli.command else {
            panic!("expected edit command");
        };
        assert_eq!(edit.id, 3);
        assert_eq!(edit.fields.seat_number.as_deref(), Some("1F"));
        assert!(edit.fields.full_name.is_none());
    }

    #[test]
    fn test_parse_edit_requires_id() {
        assert!(Cli::try_parse_from(["flightdesk", "edit", "--seat", "1F"]).is_err());
    }

    #[test]
    fn test_parse_cancel() {
        let cli = Cli::try_parse_from(["flightdesk", "cancel", "7", "--yes"]).unwrap();
        assert!(matches!(
            cli.command,
            Command::Cancel(CancelCommand { id: 7, yes: true })
        ));
    }

    #[test]
    fn test_parse_cancel_rejects_non_numeric_id() {
        assert!(Cli::try_parse_from(["flightdesk", "cancel", "seven"]).is_err());
    }

    #[test]
    fn test_parse_with_config() {
        let cli = Cli::try_parse_from(["flightdesk", "-c", "/custom/config.toml", "cities"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("/custom/config.toml")));
        assert!(matches!(cli.command, Command::Cities));
    }

    #[test]
    fn test_parse_config_validate() {
        let cli =
            Cli::try_parse_from(["flightdesk", "config", "validate", "/tmp/x.toml"]).unwrap();
        assert!(matches!(
            cli.command,
            Command::Config(ConfigCommand::Validate { file: Some(_) })
        ));
    }
}
