#[cfg(test)]
mod model_tests {
    use jiff::civil::date;

    use crate::{
        catalog::find_place,
        error::TravelError,
        models::{Activity, ActivityType, ActivityUpdate, Trip, TripDraft, TripStatus},
    };

    fn create_test_trip(status: TripStatus) -> Trip {
        Trip {
            id: "1767312000000".to_string(),
            name: "Himalayan Adventure".to_string(),
            destination: "Manali, Himachal Pradesh".to_string(),
            start_date: "Feb 15, 2026".to_string(),
            end_date: "Feb 25, 2026".to_string(),
            image: "https://example.com/manali.jpg".to_string(),
            status,
            guests: None,
            place_id: Some("manali".to_string()),
        }
    }

    fn valid_draft() -> TripDraft {
        TripDraft {
            name: "Weekend in Jaipur".to_string(),
            destination: "Jaipur".to_string(),
            start_date: "2026-03-06".to_string(),
            end_date: "2026-03-08".to_string(),
            ..Default::default()
        }
    }

    fn field_of(err: TravelError) -> String {
        match err {
            TravelError::InvalidInput { field, .. } => field,
            other => panic!("expected InvalidInput, got {other:?}"),
        }
    }

    #[test]
    fn test_trip_status_with_icon() {
        assert_eq!(TripStatus::Ongoing.with_icon(), "➤ Ongoing");
        assert_eq!(TripStatus::Upcoming.with_icon(), "○ Upcoming");
        assert_eq!(TripStatus::Completed.with_icon(), "✓ Completed");
    }

    #[test]
    fn test_trip_status_from_str() {
        assert_eq!("Ongoing".parse::<TripStatus>(), Ok(TripStatus::Ongoing));
        assert_eq!("completed".parse::<TripStatus>(), Ok(TripStatus::Completed));
        assert!("cancelled".parse::<TripStatus>().is_err());
    }

    #[test]
    fn test_activity_type_from_str_and_default() {
        assert_eq!("FOOD".parse::<ActivityType>(), Ok(ActivityType::Food));
        assert_eq!(ActivityType::default(), ActivityType::Activity);
        assert!("museum".parse::<ActivityType>().is_err());
    }

    #[test]
    fn test_trip_serializes_camel_case() {
        let json = serde_json::to_value(create_test_trip(TripStatus::Upcoming)).unwrap();
        assert_eq!(json["startDate"], "Feb 15, 2026");
        assert_eq!(json["endDate"], "Feb 25, 2026");
        assert_eq!(json["placeId"], "manali");
        assert_eq!(json["status"], "upcoming");
        assert!(json.get("guests").is_none());
    }

    #[test]
    fn test_trip_reads_records_without_optional_fields() {
        let json = r#"{"id":"trip-9","name":"Old","destination":"Goa","startDate":"Jan 02, 2026",
            "endDate":"Jan 05, 2026","image":"","status":"completed"}"#;
        let trip: Trip = serde_json::from_str(json).unwrap();
        assert_eq!(trip.status, TripStatus::Completed);
        assert!(trip.guests.is_none());
        assert!(trip.place_id.is_none());
    }

    #[test]
    fn test_status_on_leaves_snapshot_alone() {
        let trip = create_test_trip(TripStatus::Upcoming);

        assert_eq!(trip.status_on(date(2026, 2, 20)), TripStatus::Ongoing);
        assert!(trip.is_status_stale(date(2026, 2, 20)));
        assert!(!trip.is_status_stale(date(2026, 1, 1)));
        assert_eq!(trip.status, TripStatus::Upcoming);
    }

    #[test]
    fn test_draft_for_place() {
        let place = find_place("kerala-backwaters").unwrap();
        let draft = TripDraft::for_place(place, "2026-08-01", "2026-08-04", Some(3));

        assert_eq!(draft.name, format!("{} Trip", place.name));
        assert_eq!(draft.destination, place.location);
        assert_eq!(draft.image, place.image);
        assert_eq!(draft.guests, Some(3));
        assert_eq!(draft.place_id.as_deref(), Some("kerala-backwaters"));
        assert!(draft.validate().is_ok());
    }

    #[test]
    fn test_draft_validation_order() {
        let blank = TripDraft::default();
        assert_eq!(field_of(blank.validate().unwrap_err()), "name");

        let mut draft = valid_draft();
        draft.destination = "  ".to_string();
        assert_eq!(field_of(draft.validate().unwrap_err()), "destination");

        let mut draft = valid_draft();
        draft.start_date = "next week".to_string();
        assert_eq!(field_of(draft.validate().unwrap_err()), "start_date");

        let mut draft = valid_draft();
        draft.end_date = String::new();
        assert_eq!(field_of(draft.validate().unwrap_err()), "end_date");
    }

    #[test]
    fn test_draft_rejects_reversed_dates_and_zero_guests() {
        let mut draft = valid_draft();
        draft.start_date = "2026-03-09".to_string();
        assert_eq!(field_of(draft.validate().unwrap_err()), "end_date");

        let mut draft = valid_draft();
        draft.guests = Some(0);
        assert_eq!(field_of(draft.validate().unwrap_err()), "guests");

        let mut draft = valid_draft();
        draft.end_date = draft.start_date.clone();
        assert!(draft.validate().is_ok());
    }

    #[test]
    fn test_activity_apply_and_cost_value() {
        let mut activity = Activity {
            id: "a1".to_string(),
            kind: ActivityType::Food,
            title: "Thali lunch".to_string(),
            description: String::new(),
            time: "13:00".to_string(),
            cost: "₹450".to_string(),
        };
        assert_eq!(activity.cost_value(), 450.0);

        let update = ActivityUpdate::Cost("free".to_string());
        assert_eq!(update.field(), "cost");
        activity.apply(update);
        assert_eq!(activity.cost_value(), 0.0);
        assert_eq!(activity.title, "Thali lunch");
    }

    #[test]
    fn test_activity_serializes_kind_as_type() {
        let activity = Activity {
            id: "a1".to_string(),
            kind: ActivityType::Travel,
            title: "Train".to_string(),
            description: String::new(),
            time: "06:00".to_string(),
            cost: String::new(),
        };
        let json = serde_json::to_value(&activity).unwrap();
        assert_eq!(json["type"], "travel");
    }
}
