use globetrotter_core::{store::FixedClock, Database, TripStore, TripStoreBuilder};
use jiff::civil::date;
use tempfile::TempDir;

/// Helper function to create a store over a fresh database file
pub fn create_test_store() -> (TempDir, TripStore<Database>) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let store = open_store(&temp_dir);
    (temp_dir, store)
}

/// Opens (or reopens) the store in `dir`, frozen at 2026-03-10
pub fn open_store(dir: &TempDir) -> TripStore<Database> {
    TripStoreBuilder::new()
        .with_database_path(Some(dir.path().join("data").join("test.db")))
        .with_clock(FixedClock::on(date(2026, 3, 10)))
        .build()
        .expect("Failed to create trip store")
}
