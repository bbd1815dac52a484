//! `flightdesk` - Flight reservation validation and storage
//!
//! This library provides the core of a single-user reservation desk: a
//! validator that turns raw form input into a normalized [`Booking`], and a
//! `SQLite`-backed [`Storage`] that creates, lists, updates and deletes
//! reservations.
//!
//! ```no_run
//! use flightdesk::{Field, RawFields, Storage, Validator};
//!
//! # fn main() -> flightdesk::Result<()> {
//! let storage = Storage::open("flights.db")?;
//! let raw = RawFields::new()
//!     .with(Field::FullName, "Jane Doe")
//!     .with(Field::FlightNumber, "MS777")
//!     .with(Field::Departure, "cairo")
//!     .with(Field::Destination, "London")
//!     .with(Field::Date, "5/16/25")
//!     .with(Field::SeatNumber, "12A");
//!
//! let booking = Validator::default().validate(&raw)?;
//! let id = storage.create(&booking)?;
//! assert!(storage.delete(id)?);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod reservation;
pub mod storage;
pub mod validation;

pub use config::Config;
pub use error::{Error, Result};
pub use logging::init_logging;
pub use reservation::{Booking, Field, RawFields, Reservation};
pub use storage::Storage;
pub use validation::{CityRegistry, Rejection, Validator};
