use std::{fs, path::Path};

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Helper function to create a temporary directory for CLI tests
fn create_cli_test_environment() -> TempDir {
    TempDir::new().expect("Failed to create temporary directory")
}

/// Helper function to create a Command with --no-color and a private
/// database for testing
fn gt_cmd(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("gt").expect("Failed to find gt binary");
    cmd.arg("--no-color")
        .arg("--database-file")
        .arg(dir.path().join("cli_test.db"));
    cmd
}

fn read_json(path: &Path) -> serde_json::Value {
    serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
}

#[test]
fn test_cli_default_lists_sample_trips() {
    let temp_dir = create_cli_test_environment();

    gt_cmd(&temp_dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("# My Trips"))
        .stdout(predicate::str::contains("## Ongoing Trips"))
        .stdout(predicate::str::contains("## Completed Trips"))
        .stdout(predicate::str::contains("Rajasthan Heritage Tour"));
}

#[test]
fn test_cli_list_single_status() {
    let temp_dir = create_cli_test_environment();

    gt_cmd(&temp_dir)
        .args(["trip", "list", "--status", "completed"])
        .assert()
        .success()
        .stdout(predicate::str::contains("## Completed Trips"))
        .stdout(predicate::str::contains("Kerala Ayurveda Retreat"))
        .stdout(predicate::str::contains("Upcoming Trips").not());
}

#[test]
fn test_cli_add_trip() {
    let temp_dir = create_cli_test_environment();

    gt_cmd(&temp_dir)
        .args([
            "trip",
            "add",
            "Monsoon Escape",
            "--destination",
            "Coorg",
            "--start",
            "2099-07-01",
            "--end",
            "2099-07-04",
            "--guests",
            "2",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created trip with ID:"))
        .stdout(predicate::str::contains("Monsoon Escape (○ Upcoming)"));

    gt_cmd(&temp_dir)
        .args(["trip", "list", "--status", "upcoming"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Monsoon Escape"));
}

#[test]
fn test_cli_add_trip_rejects_reversed_dates() {
    let temp_dir = create_cli_test_environment();

    gt_cmd(&temp_dir)
        .args([
            "trip",
            "add",
            "Backwards",
            "--destination",
            "Coorg",
            "--start",
            "2099-07-04",
            "--end",
            "2099-07-01",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("end_date"));
}

#[test]
fn test_cli_book_trip() {
    let temp_dir = create_cli_test_environment();

    gt_cmd(&temp_dir)
        .args([
            "trip", "book", "goa-beaches", "--start", "2099-12-20", "--end", "2099-12-27", "-g",
            "3",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Goa Beaches Trip"))
        .stdout(predicate::str::contains("- **Place**: goa-beaches"));

    gt_cmd(&temp_dir)
        .args(["place", "show", "goa-beaches"])
        .assert()
        .success()
        .stdout(predicate::str::contains("## Your trips"))
        .stdout(predicate::str::contains("Goa Beaches Trip"));
}

#[test]
fn test_cli_book_unknown_place() {
    let temp_dir = create_cli_test_environment();

    gt_cmd(&temp_dir)
        .args(["trip", "book", "atlantis", "--start", "2099-01-01", "--end", "2099-01-02"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("atlantis"));
}

#[test]
fn test_cli_book_enforces_booking_limits() {
    let temp_dir = create_cli_test_environment();

    gt_cmd(&temp_dir)
        .args(["trip", "book", "manali", "--start", "2099-05-01", "--end", "2099-05-03", "-g", "11"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("between 1 and 10"));

    gt_cmd(&temp_dir)
        .args(["trip", "book", "manali", "--start", "2099-05-01", "--end", "2099-05-01"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("end_date"));
}

#[test]
fn test_cli_places() {
    let temp_dir = create_cli_test_environment();

    gt_cmd(&temp_dir)
        .args(["place", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("(`kerala-backwaters`)"))
        .stdout(predicate::str::contains("(`goa-beaches`)"));

    gt_cmd(&temp_dir)
        .args(["place", "show", "manali"])
        .assert()
        .success()
        .stdout(predicate::str::contains("# Manali (ID: manali)"))
        .stdout(predicate::str::contains("## Daily expenses"))
        .stdout(predicate::str::contains("Himalayan Adventure"));

    gt_cmd(&temp_dir)
        .args(["place", "show", "nowhere"])
        .assert()
        .failure();
}

#[test]
fn test_cli_itinerary_editing() {
    let temp_dir = create_cli_test_environment();
    let file = temp_dir.path().join("plan.json");
    let file_arg = file.to_str().unwrap();

    gt_cmd(&temp_dir)
        .args(["itinerary", "new", file_arg])
        .assert()
        .success()
        .stdout(predicate::str::contains("Flight to Destination"))
        .stdout(predicate::str::contains("**Total estimated cost**: ₹5,000"));

    gt_cmd(&temp_dir)
        .args(["itinerary", "add-day", file_arg])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added day 2"));

    gt_cmd(&temp_dir)
        .args(["itinerary", "add-activity", file_arg, "2"])
        .assert()
        .success();

    let doc = read_json(&file);
    let activity_id = doc["days"][1]["activities"][0]["id"]
        .as_str()
        .unwrap()
        .to_string();

    gt_cmd(&temp_dir)
        .args([
            "itinerary",
            "update-activity",
            file_arg,
            "2",
            &activity_id,
            "--type",
            "food",
            "--title",
            "Street food walk",
            "--cost",
            "₹500",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Street food walk"));

    gt_cmd(&temp_dir)
        .args(["itinerary", "total", file_arg])
        .assert()
        .success()
        .stdout(predicate::str::contains("₹5,500"));

    gt_cmd(&temp_dir)
        .args(["itinerary", "remove-activity", file_arg, "2", &activity_id])
        .assert()
        .success()
        .stdout(predicate::str::contains("Success:"));

    gt_cmd(&temp_dir)
        .args(["itinerary", "remove-day", file_arg, "2"])
        .assert()
        .success();

    gt_cmd(&temp_dir)
        .args(["itinerary", "add-day", file_arg])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added day 3"));
}

#[test]
fn test_cli_itinerary_missing_targets_are_reported() {
    let temp_dir = create_cli_test_environment();
    let file = temp_dir.path().join("plan.json");
    let file_arg = file.to_str().unwrap();

    gt_cmd(&temp_dir)
        .args(["itinerary", "new", file_arg, "--empty"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No days planned."));
    let before = fs::read_to_string(&file).unwrap();

    gt_cmd(&temp_dir)
        .args(["itinerary", "remove-day", file_arg, "9"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Error: No day 9"));

    gt_cmd(&temp_dir)
        .args(["itinerary", "set-date", file_arg, "9", "2026-05-01"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Error:"));

    assert_eq!(fs::read_to_string(&file).unwrap(), before);
}

#[test]
fn test_cli_itinerary_new_refuses_overwrite() {
    let temp_dir = create_cli_test_environment();
    let file = temp_dir.path().join("plan.json");
    let file_arg = file.to_str().unwrap();

    gt_cmd(&temp_dir)
        .args(["itinerary", "new", file_arg])
        .assert()
        .success();
    gt_cmd(&temp_dir)
        .args(["itinerary", "new", file_arg, "--empty"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--force"));
    gt_cmd(&temp_dir)
        .args(["itinerary", "new", file_arg, "--empty", "--force"])
        .assert()
        .success();
}

#[test]
fn test_cli_generate_with_stub() {
    let temp_dir = create_cli_test_environment();
    let file = temp_dir.path().join("goa.json");
    let file_arg = file.to_str().unwrap();

    gt_cmd(&temp_dir)
        .args(["itinerary", "generate", file_arg, "3 days in Goa", "--stub"])
        .assert()
        .success()
        .stdout(predicate::str::contains("# Goa Getaway"))
        .stdout(predicate::str::contains("Loaded 3 days"))
        .stdout(predicate::str::contains("AI Suggested Activity"));

    let doc = read_json(&file);
    assert_eq!(doc["days"].as_array().unwrap().len(), 3);
    assert_eq!(doc["days"][0]["id"], 1);
}

#[test]
fn test_cli_generate_failure_leaves_file_untouched() {
    let temp_dir = create_cli_test_environment();
    let file = temp_dir.path().join("plan.json");
    let file_arg = file.to_str().unwrap();

    gt_cmd(&temp_dir)
        .args(["itinerary", "new", file_arg])
        .assert()
        .success();
    let before = fs::read_to_string(&file).unwrap();

    gt_cmd(&temp_dir)
        .args(["itinerary", "generate", file_arg, "   ", "--stub"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("prompt"));

    gt_cmd(&temp_dir)
        .env_remove("GEMINI_API_KEY")
        .args(["itinerary", "generate", file_arg, "3 days in Goa"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("GEMINI_API_KEY"));

    assert_eq!(fs::read_to_string(&file).unwrap(), before);
}
