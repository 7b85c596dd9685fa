use globetrotter_core::{Database, KeyValueStore};
use tempfile::NamedTempFile;

/// Helper function to create a temporary database for testing
fn create_test_db() -> (NamedTempFile, Database) {
    let temp_file = NamedTempFile::new().expect("Failed to create temporary file");
    let db = Database::new(temp_file.path()).expect("Failed to create test database");
    (temp_file, db)
}

#[test]
fn test_database_initialization() {
    let (temp_file, db) = create_test_db();
    assert!(temp_file.path().exists());
    assert_eq!(db.get("missing").unwrap(), None);
}

#[test]
fn test_set_and_get() {
    let (_temp_file, db) = create_test_db();

    db.set("greeting", "namaste").unwrap();
    assert_eq!(db.get("greeting").unwrap().as_deref(), Some("namaste"));

    db.set("greeting", "vanakkam").unwrap();
    assert_eq!(db.get("greeting").unwrap().as_deref(), Some("vanakkam"));
}

#[test]
fn test_remove() {
    let (_temp_file, db) = create_test_db();

    db.set("k", "v").unwrap();
    assert!(db.remove("k").unwrap());
    assert!(!db.remove("k").unwrap());
    assert_eq!(db.get("k").unwrap(), None);
}

#[test]
fn test_updated_at_tracks_writes() {
    let (_temp_file, db) = create_test_db();
    assert!(db.updated_at("k").unwrap().is_none());

    db.set("k", "v").unwrap();
    let first = db.updated_at("k").unwrap().expect("timestamp recorded");

    db.set("k", "v2").unwrap();
    let second = db.updated_at("k").unwrap().expect("timestamp recorded");
    assert!(second >= first);
}

#[test]
fn test_values_survive_reopen() {
    let (temp_file, db) = create_test_db();
    db.set("k", "[1,2,3]").unwrap();
    drop(db);

    let reopened = Database::new(temp_file.path()).unwrap();
    assert_eq!(reopened.get("k").unwrap().as_deref(), Some("[1,2,3]"));
}

#[test]
fn test_in_memory_databases_are_private() {
    let a = Database::open_in_memory().unwrap();
    let b = Database::open_in_memory().unwrap();

    a.set("k", "v").unwrap();
    assert_eq!(b.get("k").unwrap(), None);
}
