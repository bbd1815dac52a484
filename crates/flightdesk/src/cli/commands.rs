//! CLI command definitions.
//!
//! This module defines the structure of all CLI subcommands.

use std::path::PathBuf;

use clap::{Args, Subcommand};

use crate::reservation::{Field, RawFields};

/// Booking fields accepted on the command line.
///
/// Every field is optional at the parser level; missing fields are left for
/// validation to report, so the user sees every empty field at once.
#[derive(Debug, Clone, Default, PartialEq, Eq, Args)]
pub struct BookingArgs {
    /// Passenger's full name (letters and spaces)
    #[arg(short = 'n', long = "name", value_name = "NAME")]
    pub full_name: Option<String>,

    /// Flight number
    #[arg(short = 'f', long = "flight", value_name = "FLIGHT")]
    pub flight_number: Option<String>,

    /// Departure city
    #[arg(long = "from", value_name = "CITY")]
    pub departure: Option<String>,

    /// Destination city
    #[arg(long = "to", value_name = "CITY")]
    pub destination: Option<String>,

    /// Travel date
    #[arg(short = 'd', long, value_name = "DATE")]
    pub date: Option<String>,

    /// Seat number
    #[arg(short = 's', long = "seat", value_name = "SEAT")]
    pub seat_number: Option<String>,
}

impl BookingArgs {
    fn values(&self) -> [(Field, Option<&String>); 6] {
        [
            (Field::FullName, self.full_name.as_ref()),
            (Field::FlightNumber, self.flight_number.as_ref()),
            (Field::Departure, self.departure.as_ref()),
            (Field::Destination, self.destination.as_ref()),
            (Field::Date, self.date.as_ref()),
            (Field::SeatNumber, self.seat_number.as_ref()),
        ]
    }

    /// Whether no field was given.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values().iter().all(|(_, value)| value.is_none())
    }

    /// Write the given fields over `base`, leaving the others untouched.
    #[must_use]
    pub fn overlay(&self, mut base: RawFields) -> RawFields {
        for (field, value) in self.values() {
            if let Some(value) = value {
                base.set(field, value.clone());
            }
        }
        base
    }

    /// The given fields as raw form input.
    #[must_use]
    pub fn to_raw(&self) -> RawFields {
        self.overlay(RawFields::new())
    }
}

/// Book command arguments.
#[derive(Debug, Args)]
pub struct BookCommand {
    /// The booking details. `--date` defaults to today.
    #[command(flatten)]
    pub fields: BookingArgs,
}

/// List command arguments.
#[derive(Debug, Args)]
pub struct ListCommand {
    /// Output as JSON
    #[arg(short, long)]
    pub json: bool,
}

/// Edit command arguments.
#[derive(Debug, Args)]
pub struct EditCommand {
    /// Identity of the reservation to edit (see `list`)
    pub id: i64,

    /// Fields to change; the rest keep their stored values.
    #[command(flatten)]
    pub fields: BookingArgs,
}

/// Cancel command arguments.
#[derive(Debug, Args)]
pub struct CancelCommand {
    /// Identity of the reservation to delete (see `list`)
    pub id: i64,

    /// Confirm the deletion
    #[arg(short, long)]
    pub yes: bool,
}

/// Configuration management commands.
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration
    Show {
        /// Output as JSON
        #[arg(short, long)]
        json: bool,
    },

    /// Show configuration file path (`--config` if given)
    Path,

    /// Validate configuration file
    Validate {
        /// Path to configuration file (uses `--config` or the default if not specified)
        file: Option<PathBuf>,
    },
}
