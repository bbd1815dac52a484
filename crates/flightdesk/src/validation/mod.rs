//! Booking validation for flightdesk.
//!
//! This module decides whether raw form input may become a stored booking.
//! Rules are applied in order and the first failure is returned:
//!
//! 1. every field is non-empty after trimming,
//! 2. the full name is letters and spaces only,
//! 3. departure and destination resolve to recognized cities.
//!
//! Validation is pure: it reads the input and the injected [`CityRegistry`]
//! and nothing else.

pub mod cities;

use thiserror::Error;
use tracing::debug;

use crate::reservation::{Booking, Field, RawFields};

pub use cities::{normalize, CityRegistry, DEFAULT_CITIES, DEFAULT_SUGGESTION_CUTOFF};

/// Why a booking was rejected.
///
/// Every variant is recoverable: the caller shows the message and lets the
/// user correct the input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    /// One or more fields were empty or whitespace-only.
    #[error("all fields must be filled (missing: {})", join_fields(.missing))]
    IncompleteFields {
        /// The empty fields, in form order.
        missing: Vec<Field>,
    },

    /// The full name contained something other than letters and spaces.
    #[error("name must contain only letters: '{value}'")]
    InvalidName {
        /// The name as supplied.
        value: String,
    },

    /// A departure or destination city was not recognized.
    #[error(
        "{field} '{supplied}' not found. Did you mean '{}'?",
        .suggestion.as_deref().unwrap_or("No suggestions")
    )]
    InvalidCity {
        /// Which city field failed.
        field: Field,
        /// The value as supplied, before normalization.
        supplied: String,
        /// Closest recognized city, if any was close enough.
        suggestion: Option<String>,
    },
}

fn join_fields(fields: &[Field]) -> String {
    fields
        .iter()
        .map(|field| field.label())
        .collect::<Vec<_>>()
        .join(", ")
}

impl Rejection {
    /// The field the rejection refers to, if it names exactly one.
    #[must_use]
    pub fn field(&self) -> Option<Field> {
        match self {
            Self::IncompleteFields { missing } if missing.len() == 1 => Some(missing[0]),
            Self::IncompleteFields { .. } => None,
            Self::InvalidName { .. } => Some(Field::FullName),
            Self::InvalidCity { field, .. } => Some(*field),
        }
    }
}

/// Validates raw form input against the booking rules.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Validator {
    cities: CityRegistry,
}

impl Validator {
    /// Create a validator over the given city registry.
    #[must_use]
    pub fn new(cities: CityRegistry) -> Self {
        Self { cities }
    }

    /// The registry this validator resolves cities against.
    #[must_use]
    pub fn cities(&self) -> &CityRegistry {
        &self.cities
    }

    /// Validate raw input and produce a normalized booking.
    ///
    /// On success `departure` and `destination` hold their canonical city
    /// names; every other field is passed through untouched.
    ///
    /// # Errors
    ///
    /// Returns the first [`Rejection`] encountered, checking completeness,
    /// then the name, then departure, then destination.
    pub fn validate(&self, raw: &RawFields) -> std::result::Result<Booking, Rejection> {
        let missing: Vec<Field> = Field::ALL
            .into_iter()
            .filter(|field| raw.get(*field).trim().is_empty())
            .collect();
        if !missing.is_empty() {
            debug!(?missing, "rejecting incomplete booking");
            return Err(Rejection::IncompleteFields { missing });
        }

        let full_name = raw.get(Field::FullName);
        if !is_letters_and_spaces(full_name) {
            debug!(full_name, "rejecting invalid name");
            return Err(Rejection::InvalidName {
                value: full_name.to_string(),
            });
        }

        let departure = self.resolve_city(raw, Field::Departure)?;
        let destination = self.resolve_city(raw, Field::Destination)?;

        Ok(Booking {
            full_name: full_name.to_string(),
            flight_number: raw.get(Field::FlightNumber).to_string(),
            departure,
            destination,
            date: raw.get(Field::Date).to_string(),
            seat_number: raw.get(Field::SeatNumber).to_string(),
        })
    }

    fn resolve_city(&self, raw: &RawFields, field: Field) -> std::result::Result<String, Rejection> {
        let supplied = raw.get(field);
        match self.cities.resolve(supplied) {
            Ok(city) => Ok(city.to_string()),
            Err(suggestion) => {
                debug!(%field, supplied, ?suggestion, "rejecting unknown city");
                Err(Rejection::InvalidCity {
                    field,
                    supplied: supplied.to_string(),
                    suggestion: suggestion.map(str::to_string),
                })
            }
        }
    }
}

/// Spaces are ignored; whatever remains must be non-empty letters.
fn is_letters_and_spaces(name: &str) -> bool {
    let mut letters = name.chars().filter(|ch| *ch != ' ').peekable();
    letters.peek().is_some() && letters.all(cities::is_letter)
}
