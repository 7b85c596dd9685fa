//! Key-value reads and writes.

use jiff::Timestamp;
use rusqlite::{params, OptionalExtension};

use crate::{
    error::{DatabaseResultExt, Result},
    store::KeyValueStore,
};

const SELECT_VALUE_SQL: &str = "SELECT value FROM kv WHERE key = ?1";
const UPSERT_VALUE_SQL: &str = "INSERT INTO kv (key, value, updated_at) VALUES (?1, ?2, ?3) \
     ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at";
const DELETE_VALUE_SQL: &str = "DELETE FROM kv WHERE key = ?1";
const SELECT_UPDATED_AT_SQL: &str = "SELECT updated_at FROM kv WHERE key = ?1";

impl super::Database {
    /// Returns when `key` was last written, if it exists and the time is
    /// readable.
    pub fn updated_at(&self, key: &str) -> Result<Option<Timestamp>> {
        let raw: Option<String> = self
            .connection
            .query_row(SELECT_UPDATED_AT_SQL, params![key], |row| row.get(0))
            .optional()
            .db_context("Failed to query modification time")?;

        Ok(raw.and_then(|value| value.parse::<Timestamp>().ok()))
    }
}

impl KeyValueStore for super::Database {
    fn get(&self, key: &str) -> Result<Option<String>> {
        self.connection
            .query_row(SELECT_VALUE_SQL, params![key], |row| row.get(0))
            .optional()
            .db_context("Failed to read stored value")
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let now = Timestamp::now().to_string();
        self.connection
            .execute(UPSERT_VALUE_SQL, params![key, value, now])
            .db_context("Failed to write stored value")?;
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<bool> {
        let deleted = self
            .connection
            .execute(DELETE_VALUE_SQL, params![key])
            .db_context("Failed to delete stored value")?;
        Ok(deleted > 0)
    }
}
