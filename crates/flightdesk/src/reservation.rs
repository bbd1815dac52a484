//! Core reservation types for flightdesk.
//!
//! This module defines the booking fields, the raw form input handed to the
//! validator, and the records that flow in and out of storage.

use std::collections::BTreeMap;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// One of the six user-supplied fields of a reservation.
///
/// Variants are declared in form order; iteration via [`Field::ALL`] and the
/// ordering of [`RawFields`] both follow it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    /// Passenger's full name.
    FullName,
    /// Flight number, free-form.
    FlightNumber,
    /// Departure city.
    Departure,
    /// Destination city.
    Destination,
    /// Travel date, free-form.
    Date,
    /// Seat number, free-form.
    SeatNumber,
}

impl Field {
    /// All fields in form order.
    pub const ALL: [Field; 6] = [
        Field::FullName,
        Field::FlightNumber,
        Field::Departure,
        Field::Destination,
        Field::Date,
        Field::SeatNumber,
    ];

    /// Human-readable label, as shown on the booking form.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::FullName => "Full Name",
            Self::FlightNumber => "Flight Number",
            Self::Departure => "Departure",
            Self::Destination => "Destination",
            Self::Date => "Date",
            Self::SeatNumber => "Seat Number",
        }
    }

    /// Snake-case key, as used in JSON and configuration.
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Self::FullName => "full_name",
            Self::FlightNumber => "flight_number",
            Self::Departure => "departure",
            Self::Destination => "destination",
            Self::Date => "date",
            Self::SeatNumber => "seat_number",
        }
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Error returned when a string names no known field.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown reservation field: {0}")]
pub struct UnknownField(pub String);

impl FromStr for Field {
    type Err = UnknownField;

    /// Accepts either the form label (`"Full Name"`) or the snake-case key
    /// (`"full_name"`), ignoring ASCII case.
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|field| {
                field.label().eq_ignore_ascii_case(wanted) || field.key().eq_ignore_ascii_case(wanted)
            })
            .ok_or_else(|| UnknownField(s.to_string()))
    }
}

/// Raw, unvalidated form input.
///
/// A mapping from field to the text the user typed. Fields that were never
/// set read back as the empty string, which validation treats as missing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawFields {
    values: BTreeMap<Field, String>,
}

impl RawFields {
    /// Create an empty set of raw fields.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a field, returning `self` for chaining.
    #[must_use]
    pub fn with(mut self, field: Field, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }

    /// Set a field in place.
    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        self.values.insert(field, value.into());
    }

    /// Get a field's raw value, or `""` if it was never set.
    #[must_use]
    pub fn get(&self, field: Field) -> &str {
        self.values.get(&field).map_or("", String::as_str)
    }
}

impl FromIterator<(Field, String)> for RawFields {
    fn from_iter<I: IntoIterator<Item = (Field, String)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

impl From<&Booking> for RawFields {
    /// Pre-fill a form from an existing booking, as the edit screen does.
    fn from(booking: &Booking) -> Self {
        Field::ALL
            .into_iter()
            .map(|field| (field, booking.get(field).to_string()))
            .collect()
    }
}

/// A validated booking, ready to be stored.
///
/// Produced by [`Validator::validate`](crate::validation::Validator::validate)
/// with `departure` and `destination` normalized; every other field is kept
/// exactly as entered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Booking {
    /// Passenger's full name.
    pub full_name: String,
    /// Flight number.
    pub flight_number: String,
    /// Departure city, normalized.
    pub departure: String,
    /// Destination city, normalized.
    pub destination: String,
    /// Travel date.
    pub date: String,
    /// Seat number.
    pub seat_number: String,
}

impl Booking {
    /// Get a field's value by name.
    #[must_use]
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::FullName => &self.full_name,
            Field::FlightNumber => &self.flight_number,
            Field::Departure => &self.departure,
            Field::Destination => &self.destination,
            Field::Date => &self.date,
            Field::SeatNumber => &self.seat_number,
        }
    }
}

/// A stored reservation: a booking plus its store-assigned identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reservation {
    /// Identity assigned by storage on creation. Never changes.
    pub id: i64,

    /// The booking details.
    #[serde(flatten)]
    pub booking: Booking,
}
