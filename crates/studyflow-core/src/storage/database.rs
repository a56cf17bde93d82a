//! SQLite-backed key-value store for the persisted collections.
//!
//! Each ledger's records are serialized as one JSON array under a single
//! key; every save rewrites the whole collection. A missing or corrupt
//! payload degrades silently to an empty collection on load.

use rusqlite::{params, Connection};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::path::Path;

use super::data_dir;
use crate::error::{DatabaseError, Result};

/// Store key for the study session collection.
pub const SESSIONS_KEY: &str = "sessions";
/// Store key for the daily habit collection.
pub const HABITS_KEY: &str = "habits";
/// Store key for the weekly target collection.
pub const TARGETS_KEY: &str = "targets";

/// SQLite database holding the key-value store.
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Open the database at `<data_dir>/studyflow.db`.
    ///
    /// Creates the database file and schema if they don't exist.
    ///
    /// # Errors
    /// Returns an error if the database cannot be opened or migrated.
    pub fn open() -> Result<Self> {
        let path = data_dir()?.join("studyflow.db");
        Self::open_at(&path)
    }

    /// Open the database at an explicit path (tests point this at a
    /// temporary directory).
    pub fn open_at(path: &Path) -> Result<Self> {
        let conn = Connection::open(path).map_err(|source| DatabaseError::OpenFailed {
            path: path.to_path_buf(),
            source,
        })?;
        let db = Self { conn };
        db.migrate()?;
        Ok(db)
    }

    /// Open an in-memory database (tests, throwaway runs).
    pub fn open_memory() -> Result<Self> {
        let conn = Connection::open_in_memory().map_err(DatabaseError::from)?;
        let db = Self { conn };
        db.migrate()?;
        Ok(db)
    }

    fn migrate(&self) -> Result<(), DatabaseError> {
        self.conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS kv (
                key   TEXT PRIMARY KEY,
                value TEXT NOT NULL
            );",
        )?;
        Ok(())
    }

    /// Get a value from the kv store.
    pub fn kv_get(&self, key: &str) -> Result<Option<String>, DatabaseError> {
        let mut stmt = self.conn.prepare("SELECT value FROM kv WHERE key = ?1")?;
        let result = stmt.query_row(params![key], |row| row.get::<_, String>(0));
        match result {
            Ok(v) => Ok(Some(v)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Set a value in the kv store.
    pub fn kv_set(&self, key: &str, value: &str) -> Result<(), DatabaseError> {
        self.conn.execute(
            "INSERT OR REPLACE INTO kv (key, value) VALUES (?1, ?2)",
            params![key, value],
        )?;
        Ok(())
    }

    /// Load a collection from `key`.
    ///
    /// An absent key or a payload that fails to parse yields an empty
    /// collection; neither case is surfaced to the caller.
    pub fn load_collection<T: DeserializeOwned>(&self, key: &str) -> Result<Vec<T>> {
        match self.kv_get(key)? {
            Some(raw) => Ok(serde_json::from_str(&raw).unwrap_or_default()),
            None => Ok(Vec::new()),
        }
    }

    /// Serialize `records` as one JSON array under `key`, replacing prior
    /// content.
    pub fn save_collection<T: Serialize>(&self, key: &str, records: &[T]) -> Result<()> {
        let raw = serde_json::to_string(records)?;
        self.kv_set(key, &raw)?;
        Ok(())
    }
}
