//! Core library for the Globetrotter travel planner.
//!
//! This crate provides the trip store, the destination catalog, the
//! editable itinerary document and generated-plan ingestion.
//!
//! - **Trip store** ([`store`]): durable, newest-first trip collection in a
//!   key-value backend, with status derivation and change notification
//! - **Itinerary** ([`itinerary`]): day-by-day plans with cost totals
//! - **Generation** ([`generation`]): turning model output into a plan
//! - **Display** ([`display`]): markdown formatting for terminal output
//!
//! # Quick Start
//!
//! ```rust
//! use globetrotter_core::{params::BookTrip, TripStoreBuilder};
//!
//! # fn example() -> globetrotter_core::Result<()> {
//! let mut store = TripStoreBuilder::new().build_in_memory();
//!
//! let trip = store.book_trip(&BookTrip {
//!     place_id: "manali".to_string(),
//!     start_date: "2030-05-10".to_string(),
//!     end_date: "2030-05-14".to_string(),
//!     guests: Some(2),
//! })?;
//! println!("{}", trip);
//!
//! // Five sample trips plus the new booking
//! assert_eq!(store.get_trips().len(), 6);
//! # Ok(())
//! # }
//! ```

pub mod catalog;
pub mod dates;
pub mod db;
pub mod display;
pub mod error;
pub mod generation;
pub mod itinerary;
pub mod models;
pub mod params;
pub mod store;

// Re-export commonly used types
pub use catalog::{find_place, places};
pub use db::Database;
pub use display::{CreateResult, OperationStatus, Places, Rupees, Trips, TripsByStatus};
pub use error::{Result, TravelError};
pub use generation::{
    generate_into, GeminiGenerator, GeneratedItinerary, GenerationConfig, ItineraryGenerator,
    StubGenerator,
};
pub use itinerary::ItineraryDocument;
pub use models::{Activity, ActivityType, ActivityUpdate, DayPlan, Place, Trip, TripDraft, TripStatus};
pub use params::{BookTrip, ListTrips, PlaceId};
pub use store::{KeyValueStore, MemoryStore, TripEvent, TripStore, TripStoreBuilder};
