//! SQLite-backed itinerary persistence.

use std::{
    fmt,
    path::{Path, PathBuf},
};

use chrono::{DateTime, NaiveDate, Utc};
use rusqlite::{Connection, OptionalExtension, Row, params};
use thiserror::Error;

use crate::{Itinerary, NewItinerary, Route};

use super::{ItineraryStore, stamp};

const DATE_FORMAT: &str = "%Y-%m-%d";

const SCHEMA: &str = "CREATE TABLE IF NOT EXISTS itineraries (
    id TEXT PRIMARY KEY NOT NULL,
    name TEXT NOT NULL,
    description TEXT NOT NULL,
    date TEXT NOT NULL,
    route TEXT NOT NULL,
    created_at TEXT NOT NULL
)";

const SELECT_COLUMNS: &str = "SELECT id, name, description, date, route, created_at FROM itineraries";

/// Error raised when reading or writing persisted itineraries.
#[derive(Debug, Error)]
pub enum SqliteItineraryStoreError {
    /// Opening or initialising the SQLite database failed.
    #[error("failed to open SQLite database at {path}: {source}")]
    OpenDatabase {
        /// Location of the SQLite database on disk.
        path: PathBuf,
        /// Source error returned by `rusqlite`.
        #[source]
        source: rusqlite::Error,
    },
    /// The stored route payload was not valid JSON.
    #[error("failed to parse route for itinerary {id}: {source}")]
    InvalidRoute {
        /// Identifier of the itinerary whose route failed to parse.
        id: String,
        /// JSON decoding failure.
        #[source]
        source: serde_json::Error,
    },
    /// A route could not be encoded for storage.
    #[error("failed to encode route for itinerary {id}: {source}")]
    EncodeRoute {
        /// Identifier of the itinerary being written.
        id: String,
        /// JSON encoding failure.
        #[source]
        source: serde_json::Error,
    },
    /// A stored date or timestamp column could not be parsed.
    #[error("invalid {column} '{value}' for itinerary {id}: {source}")]
    InvalidTimestamp {
        /// Identifier of the affected itinerary.
        id: String,
        /// Column holding the bad value.
        column: &'static str,
        /// The raw text.
        value: String,
        /// Parser failure.
        #[source]
        source: chrono::ParseError,
    },
    /// Generic SQLite error when reading or writing rows.
    #[error(transparent)]
    Database(#[from] rusqlite::Error),
}

/// Itinerary store backed by a single SQLite table.
///
/// Each itinerary is one row with the route encoded as JSON. Rows are listed
/// in insertion order.
pub struct SqliteItineraryStore {
    connection: Connection,
}

impl fmt::Debug for SqliteItineraryStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SqliteItineraryStore")
            .field("path", &self.connection.path())
            .finish_non_exhaustive()
    }
}

impl SqliteItineraryStore {
    /// Open (or create) a store at `path`.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, SqliteItineraryStoreError> {
        let path = path.as_ref();
        let open_error = |source| SqliteItineraryStoreError::OpenDatabase {
            path: path.to_path_buf(),
            source,
        };
        let connection = Connection::open(path).map_err(open_error)?;
        connection.execute(SCHEMA, []).map_err(open_error)?;
        Ok(Self { connection })
    }

    /// Open a store that lives only as long as the value.
    pub fn open_in_memory() -> Result<Self, SqliteItineraryStoreError> {
        let connection = Connection::open_in_memory()?;
        connection.execute(SCHEMA, [])?;
        Ok(Self { connection })
    }
}

/// Raw column values, decoded outside the `rusqlite` row callback so JSON and
/// date failures keep their own error variants.
struct StoredRow {
    id: String,
    name: String,
    description: String,
    date: String,
    route: String,
    created_at: String,
}

impl StoredRow {
    fn read(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            name: row.get(1)?,
            description: row.get(2)?,
            date: row.get(3)?,
            route: row.get(4)?,
            created_at: row.get(5)?,
        })
    }

    fn decode(self) -> Result<Itinerary, SqliteItineraryStoreError> {
        let Self {
            id,
            name,
            description,
            date,
            route,
            created_at,
        } = self;
        let route: Route = serde_json::from_str(&route).map_err(|source| {
            SqliteItineraryStoreError::InvalidRoute {
                id: id.clone(),
                source,
            }
        })?;
        let parsed_date = NaiveDate::parse_from_str(&date, DATE_FORMAT).map_err(|source| {
            SqliteItineraryStoreError::InvalidTimestamp {
                id: id.clone(),
                column: "date",
                value: date.clone(),
                source,
            }
        })?;
        let parsed_created = DateTime::parse_from_rfc3339(&created_at)
            .map_err(|source| SqliteItineraryStoreError::InvalidTimestamp {
                id: id.clone(),
                column: "created_at",
                value: created_at.clone(),
                source,
            })?
            .with_timezone(&Utc);

        Ok(Itinerary {
            id,
            name,
            description,
            date: parsed_date,
            route,
            created_at: parsed_created,
        })
    }
}

fn encode_route(itinerary: &Itinerary) -> Result<String, SqliteItineraryStoreError> {
    serde_json::to_string(&itinerary.route).map_err(|source| {
        SqliteItineraryStoreError::EncodeRoute {
            id: itinerary.id.clone(),
            source,
        }
    })
}

impl ItineraryStore for SqliteItineraryStore {
    type Error = SqliteItineraryStoreError;

    fn list(&self) -> Result<Vec<Itinerary>, Self::Error> {
        let mut statement = self
            .connection
            .prepare(&format!("{SELECT_COLUMNS} ORDER BY rowid"))?;
        let rows = statement
            .query_map([], StoredRow::read)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        rows.into_iter().map(StoredRow::decode).collect()
    }

    fn get(&self, id: &str) -> Result<Option<Itinerary>, Self::Error> {
        let row = self
            .connection
            .query_row(
                &format!("{SELECT_COLUMNS} WHERE id = ?1"),
                params![id],
                StoredRow::read,
            )
            .optional()?;
        row.map(StoredRow::decode).transpose()
    }

    fn save(&mut self, draft: NewItinerary) -> Result<Itinerary, Self::Error> {
        let itinerary = stamp(draft);
        let route = encode_route(&itinerary)?;
        self.connection.execute(
            "INSERT INTO itineraries (id, name, description, date, route, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            params![
                itinerary.id,
                itinerary.name,
                itinerary.description,
                itinerary.date.format(DATE_FORMAT).to_string(),
                route,
                itinerary.created_at.to_rfc3339(),
            ],
        )?;
        Ok(itinerary)
    }

    fn replace(&mut self, itinerary: Itinerary) -> Result<bool, Self::Error> {
        let route = encode_route(&itinerary)?;
        let changed = self.connection.execute(
            "UPDATE itineraries
             SET name = ?2, description = ?3, date = ?4, route = ?5, created_at = ?6
             WHERE id = ?1",
            params![
                itinerary.id,
                itinerary.name,
                itinerary.description,
                itinerary.date.format(DATE_FORMAT).to_string(),
                route,
                itinerary.created_at.to_rfc3339(),
            ],
        )?;
        Ok(changed > 0)
    }

    fn delete(&mut self, id: &str) -> Result<bool, Self::Error> {
        let changed = self
            .connection
            .execute("DELETE FROM itineraries WHERE id = ?1", params![id])?;
        Ok(changed > 0)
    }
}
