//! SQLite-backed durable key-value storage.
//!
//! The trip store persists its whole collection as one JSON document under a
//! fixed key. [`Database`] provides that durable slot on top of a single
//! SQLite file and implements [`KeyValueStore`](crate::store::KeyValueStore)
//! so it can be swapped for the in-memory backend in tests.

use std::path::Path;

use rusqlite::Connection;

use crate::error::{DatabaseResultExt, Result};

pub mod kv_queries;
pub mod migrations;

/// Database connection and operations handler.
pub struct Database {
    connection: Connection,
}

impl Database {
    /// Opens (or creates) the database file and initializes the schema.
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let connection = Connection::open(path).db_context("Failed to open database connection")?;

        let db = Self { connection };
        db.initialize_schema()?;
        Ok(db)
    }

    /// Opens a private in-memory database with the same schema.
    pub fn open_in_memory() -> Result<Self> {
        let connection =
            Connection::open_in_memory().db_context("Failed to open in-memory database")?;

        let db = Self { connection };
        db.initialize_schema()?;
        Ok(db)
    }
}
