//! Sample trips written into an empty store.

use crate::models::{Trip, TripStatus};

struct SeedTrip {
    id: &'static str,
    name: &'static str,
    destination: &'static str,
    start_date: &'static str,
    end_date: &'static str,
    image: &'static str,
    status: TripStatus,
    place_id: &'static str,
}

const SEED_TRIPS: [SeedTrip; 5] = [
    SeedTrip {
        id: "trip-1",
        name: "Rajasthan Heritage Tour",
        destination: "Jaipur, Udaipur, Jodhpur",
        start_date: "Jan 02, 2026",
        end_date: "Jan 12, 2026",
        image: "https://images.unsplash.com/photo-1599661046289-e31897846e41?w=800&h=600&fit=crop&q=80",
        status: TripStatus::Ongoing,
        place_id: "jaipur",
    },
    SeedTrip {
        id: "trip-2",
        name: "Himalayan Adventure",
        destination: "Manali, Leh, Ladakh",
        start_date: "Jan 10, 2026",
        end_date: "Jan 25, 2026",
        image: "https://images.unsplash.com/photo-1626621341517-bbf3d9990a23?w=800&h=600&fit=crop&q=80",
        status: TripStatus::Upcoming,
        place_id: "manali",
    },
    SeedTrip {
        id: "trip-3",
        name: "Lakshadweep Island Escape",
        destination: "Agatti, Bangaram, Kavaratti",
        start_date: "Feb 05, 2026",
        end_date: "Feb 12, 2026",
        image: "https://images.unsplash.com/photo-1544551763-46a013bb70d5?w=800&h=600&fit=crop&q=80",
        status: TripStatus::Upcoming,
        place_id: "lakshadweep",
    },
    SeedTrip {
        id: "trip-4",
        name: "Kerala Ayurveda Retreat",
        destination: "Kochi, Munnar, Alleppey",
        start_date: "Dec 15, 2024",
        end_date: "Dec 25, 2024",
        image: "https://images.unsplash.com/photo-1602216056096-3b40cc0c9944?w=800&h=600&fit=crop&q=80",
        status: TripStatus::Completed,
        place_id: "kerala-backwaters",
    },
    SeedTrip {
        id: "trip-5",
        name: "Golden Triangle Tour",
        destination: "Delhi, Agra, Jaipur",
        start_date: "Nov 10, 2024",
        end_date: "Nov 18, 2024",
        image: "https://images.unsplash.com/photo-1564507592333-c60657eea523?w=800&h=600&fit=crop&q=80",
        status: TripStatus::Completed,
        place_id: "jaipur",
    },
];

/// The fixed sample collection, newest first.
///
/// Returned on first use of an empty store and whenever stored data cannot
/// be read.
pub fn sample_trips() -> Vec<Trip> {
    SEED_TRIPS
        .iter()
        .map(|seed| Trip {
            id: seed.id.to_string(),
            name: seed.name.to_string(),
            destination: seed.destination.to_string(),
            start_date: seed.start_date.to_string(),
            end_date: seed.end_date.to_string(),
            image: seed.image.to_string(),
            status: seed.status,
            guests: None,
            place_id: Some(seed.place_id.to_string()),
        })
        .collect()
}
