//! Database schema initialization and migrations.

use crate::error::{DatabaseResultExt, Result};

impl super::Database {
    /// Initializes the database schema using the embedded SQL file.
    pub(super) fn initialize_schema(&self) -> Result<()> {
        self.connection
            .busy_timeout(std::time::Duration::from_secs(5))
            .db_context("Failed to set busy timeout")?;

        let schema_sql = include_str!("../../assets/schema.sql");
        self.connection
            .execute_batch(schema_sql)
            .db_context("Failed to initialize database schema")?;

        self.apply_migrations()?;

        Ok(())
    }

    /// Apply database migrations for existing databases
    fn apply_migrations(&self) -> Result<()> {
        // Early databases stored values without a modification time
        let has_updated_at: bool = self
            .connection
            .query_row(
                "SELECT COUNT(*) FROM pragma_table_info('kv') WHERE name = 'updated_at'",
                [],
                |row| row.get(0),
            )
            .map(|count: i64| count > 0)
            .unwrap_or(false);

        if !has_updated_at {
            self.connection
                .execute(
                    "ALTER TABLE kv ADD COLUMN updated_at TEXT NOT NULL DEFAULT ''",
                    [],
                )
                .db_context("Failed to add updated_at column to kv table")?;
        }

        Ok(())
    }
}
