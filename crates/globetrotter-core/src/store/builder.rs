//! Builder for creating and configuring TripStore instances.

use std::path::{Path, PathBuf};

use super::{Clock, MemoryStore, SystemClock, TripStore};
use crate::{
    db::Database,
    error::{Result, TravelError},
};

/// Builder for creating and configuring [`TripStore`] instances.
pub struct TripStoreBuilder {
    database_path: Option<PathBuf>,
    clock: Box<dyn Clock>,
}

impl TripStoreBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            database_path: None,
            clock: Box::new(SystemClock),
        }
    }

    /// Sets a custom database file path.
    ///
    /// If not specified, uses the XDG data directory:
    /// `$XDG_DATA_HOME/globetrotter/globetrotter.db` or
    /// `~/.local/share/globetrotter/globetrotter.db`
    pub fn with_database_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.database_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Replaces the system clock, typically with a
    /// [`FixedClock`](super::FixedClock) in tests.
    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    /// Builds a store backed by the SQLite database file.
    ///
    /// # Errors
    ///
    /// Returns `TravelError::XdgDirectory` if no default path can be found,
    /// `TravelError::FileSystem` if the parent directory cannot be created,
    /// and `TravelError::Database` if the database cannot be opened.
    pub fn build(self) -> Result<TripStore<Database>> {
        let db_path = match self.database_path {
            Some(path) => path,
            None => Self::default_database_path()?,
        };

        if let Some(parent) = db_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| TravelError::FileSystem {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let database = Database::new(&db_path)?;
        Ok(TripStore::with_boxed_clock(database, self.clock))
    }

    /// Builds a store that keeps everything in memory.
    pub fn build_in_memory(self) -> TripStore<MemoryStore> {
        TripStore::with_boxed_clock(MemoryStore::new(), self.clock)
    }

    /// `$XDG_DATA_HOME/globetrotter/globetrotter.db`, creating the directory.
    fn default_database_path() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("globetrotter")
            .place_data_file("globetrotter.db")
            .map_err(|e| TravelError::XdgDirectory(e.to_string()))
    }
}

impl Default for TripStoreBuilder {
    fn default() -> Self {
        Self::new()
    }
}
