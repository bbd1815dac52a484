//! Storage layer for flightdesk.
//!
//! This module provides `SQLite`-based persistent storage for reservations.
//! Every write runs as a single autocommitted statement, so it is durable and
//! visible to the next read by the time the call returns.

pub mod migrations;
pub mod schema;

use std::path::{Path, PathBuf};

use rusqlite::{params, Connection, OptionalExtension};
use tracing::{debug, error, info};

use crate::error::{Error, Result};
use crate::reservation::{Booking, Reservation};

use schema::RESERVATION_COLUMNS;

/// Storage engine for reservations.
///
/// Wraps one `SQLite` connection. Rows are keyed by an auto-assigned integer
/// identity that never changes once issued.
#[derive(Debug)]
pub struct Storage {
    /// Path to the database file.
    path: PathBuf,
    /// Database connection.
    conn: Connection,
}

impl Storage {
    /// Open or create a storage database at the given path.
    ///
    /// Creates the parent directories and database file if they don't exist,
    /// then initializes the schema.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or schema initialization fails.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                std::fs::create_dir_all(parent).map_err(|source| {
                    error!("Failed to create {}: {}", parent.display(), source);
                    Error::DirectoryCreate {
                        path: parent.to_path_buf(),
                        source,
                    }
                })?;
            }
        }

        debug!("Opening database at {}", path.display());
        let conn = Connection::open(&path).map_err(|source| {
            error!("Failed to open database at {}: {}", path.display(), source);
            Error::DatabaseOpen {
                path: path.clone(),
                source,
            }
        })?;

        // Writes must be on disk before a call returns.
        conn.execute_batch("PRAGMA journal_mode=WAL; PRAGMA synchronous=FULL;")
            .map_err(failed("open"))?;

        let storage = Self { path, conn };
        storage.initialize()?;

        info!("Database opened successfully at {}", storage.path.display());
        Ok(storage)
    }

    /// Create an in-memory storage instance for testing.
    ///
    /// # Errors
    ///
    /// Returns an error if the in-memory database cannot be created.
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory().map_err(|source| Error::DatabaseOpen {
            path: PathBuf::from(":memory:"),
            source,
        })?;

        let storage = Self {
            path: PathBuf::from(":memory:"),
            conn,
        };
        storage.initialize()?;
        Ok(storage)
    }

    /// Get the path to the database file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Ensure the reservations table exists.
    ///
    /// Idempotent; [`open`](Self::open) already calls it, and calling it again
    /// changes nothing.
    ///
    /// # Errors
    ///
    /// Returns an error if the schema cannot be created.
    pub fn initialize(&self) -> Result<()> {
        migrations::initialize_schema(&self.conn).map_err(|err| {
            error!("Schema initialization failed: {}", err);
            err
        })
    }

    /// Insert a booking and return its newly assigned identity.
    ///
    /// Identical bookings are stored as separate rows.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    pub fn create(&self, booking: &Booking) -> Result<i64> {
        self.conn
            .execute(
                r"
                INSERT INTO reservations (name, flight_number, departure, destination, date, seat_number)
                VALUES (?1, ?2, ?3, ?4, ?5, ?6)
                ",
                params![
                    booking.full_name,
                    booking.flight_number,
                    booking.departure,
                    booking.destination,
                    booking.date,
                    booking.seat_number,
                ],
            )
            .map_err(failed("create"))?;

        let id = self.conn.last_insert_rowid();
        debug!("Inserted reservation with id {}", id);
        Ok(id)
    }

    /// Get every reservation, in insertion (identity) order.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    pub fn list_all(&self) -> Result<Vec<Reservation>> {
        let mut stmt = self
            .conn
            .prepare(&format!(
                "SELECT {RESERVATION_COLUMNS} FROM reservations ORDER BY id ASC"
            ))
            .map_err(failed("list"))?;

        let reservations = stmt
            .query_map([], Self::row_to_reservation)
            .and_then(|rows| rows.collect::<rusqlite::Result<Vec<_>>>())
            .map_err(failed("list"))?;

        debug!("Listed {} reservations", reservations.len());
        Ok(reservations)
    }

    /// Get a reservation by its identity.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    pub fn get(&self, id: i64) -> Result<Option<Reservation>> {
        let result = self
            .conn
            .query_row(
                &format!("SELECT {RESERVATION_COLUMNS} FROM reservations WHERE id = ?1"),
                [id],
                Self::row_to_reservation,
            )
            .optional()
            .map_err(failed("get"))?;
        Ok(result)
    }

    /// Overwrite every field of a reservation except its identity.
    ///
    /// Returns `true` if a reservation was updated, `false` if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    pub fn update(&self, id: i64, booking: &Booking) -> Result<bool> {
        let affected = self
            .conn
            .execute(
                r"
                UPDATE reservations
                SET name = ?1, flight_number = ?2, departure = ?3, destination = ?4,
                    date = ?5, seat_number = ?6
                WHERE id = ?7
                ",
                params![
                    booking.full_name,
                    booking.flight_number,
                    booking.departure,
                    booking.destination,
                    booking.date,
                    booking.seat_number,
                    id,
                ],
            )
            .map_err(failed("update"))?;

        debug!("Updated reservation {} ({} rows)", id, affected);
        Ok(affected > 0)
    }

    /// Delete a reservation by identity.
    ///
    /// Returns `true` if a reservation was deleted, `false` if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    pub fn delete(&self, id: i64) -> Result<bool> {
        let affected = self
            .conn
            .execute("DELETE FROM reservations WHERE id = ?1", [id])
            .map_err(failed("delete"))?;

        debug!("Deleted reservation {} ({} rows)", id, affected);
        Ok(affected > 0)
    }

    /// Count stored reservations.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    pub fn count(&self) -> Result<i64> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM reservations", [], |row| row.get(0))
            .map_err(failed("count"))?;
        Ok(count)
    }

    /// Convert a database row to a Reservation struct.
    ///
    /// Columns are nullable in the persisted layout; NULL reads back as "".
    fn row_to_reservation(row: &rusqlite::Row) -> rusqlite::Result<Reservation> {
        let text = |idx: usize| -> rusqlite::Result<String> {
            Ok(row.get::<_, Option<String>>(idx)?.unwrap_or_default())
        };

        Ok(Reservation {
            id: row.get(0)?,
            booking: Booking {
                full_name: text(1)?,
                flight_number: text(2)?,
                departure: text(3)?,
                destination: text(4)?,
                date: text(5)?,
                seat_number: text(6)?,
            },
        })
    }
}

/// Log a failed statement and convert it into a storage error.
fn failed(operation: &'static str) -> impl FnOnce(rusqlite::Error) -> Error {
    move |source| {
        error!(operation, "Storage operation failed: {}", source);
        Error::DatabaseQuery(source)
    }
}
