//! `SQLite` schema definitions for flightdesk.
//!
//! This module contains the SQL statements for creating the database schema.

/// SQL statement to create the reservations table.
///
/// Column order is part of the persisted layout and must not change.
pub const CREATE_RESERVATIONS_TABLE: &str = r"
CREATE TABLE IF NOT EXISTS reservations (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT,
    flight_number TEXT,
    departure TEXT,
    destination TEXT,
    date TEXT,
    seat_number TEXT
)
";

/// SQL statement to create the metadata table for storing key-value pairs.
pub const CREATE_METADATA_TABLE: &str = r"
CREATE TABLE IF NOT EXISTS metadata (
    key TEXT PRIMARY KEY,
    value TEXT NOT NULL
)
";

/// Columns selected when reading a reservation back, in table order.
pub const RESERVATION_COLUMNS: &str =
    "id, name, flight_number, departure, destination, date, seat_number";

/// All schema creation statements in order.
pub const SCHEMA_STATEMENTS: &[&str] = &[CREATE_RESERVATIONS_TABLE, CREATE_METADATA_TABLE];
