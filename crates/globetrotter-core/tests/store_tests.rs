mod common;

use common::{create_test_store, open_store};
use globetrotter_core::{
    params::{BookTrip, ListTrips},
    store::{sample_trips, TRIPS_KEY},
    KeyValueStore, TripDraft, TripStatus,
};

#[test]
fn test_first_read_seeds_database() {
    let (_temp_dir, store) = create_test_store();

    let trips = store.get_trips();
    assert_eq!(trips, sample_trips());

    let payload = store.backend().get(TRIPS_KEY).unwrap().expect("seeded");
    let stored: Vec<globetrotter_core::Trip> = serde_json::from_str(&payload).unwrap();
    assert_eq!(stored, trips);
}

#[test]
fn test_trips_persist_across_reopen() {
    let (temp_dir, mut store) = create_test_store();

    let trip = store
        .book_trip(&BookTrip {
            place_id: "lakshadweep".to_string(),
            start_date: "Apr 01, 2026".to_string(),
            end_date: "Apr 05, 2026".to_string(),
            guests: Some(4),
        })
        .expect("Failed to book trip");
    drop(store);

    let reopened = open_store(&temp_dir);
    let trips = reopened.get_trips();
    assert_eq!(trips.len(), 6);
    assert_eq!(trips[0], trip);
    assert_eq!(trips[0].status, TripStatus::Upcoming);
}

#[test]
fn test_corrupt_database_payload_is_left_alone() {
    let (temp_dir, store) = create_test_store();
    store.backend().set(TRIPS_KEY, "[{\"id\": 1").unwrap();
    drop(store);

    let reopened = open_store(&temp_dir);
    assert_eq!(reopened.get_trips(), sample_trips());
    assert_eq!(
        reopened.backend().get(TRIPS_KEY).unwrap().as_deref(),
        Some("[{\"id\": 1")
    );
}

#[test]
fn test_add_then_list_groups_new_trip() {
    let (_temp_dir, mut store) = create_test_store();

    store
        .create_trip(TripDraft {
            name: "Spring in Kerala".to_string(),
            destination: "Alleppey".to_string(),
            start_date: "2026-03-08".to_string(),
            end_date: "2026-03-12".to_string(),
            guests: Some(2),
            ..Default::default()
        })
        .unwrap();

    let grouped = store.list_trips(&ListTrips::default());
    let ongoing = grouped.get(TripStatus::Ongoing);
    assert_eq!(ongoing.len(), 2);
    assert_eq!(ongoing[0].name, "Spring in Kerala");
}
