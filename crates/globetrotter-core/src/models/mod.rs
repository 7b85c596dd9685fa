//! Data models for trips, places and itineraries.
//!
//! Display implementations for these models live in
//! [`crate::display::models`], keeping data structures separate from
//! presentation.
//!
//! # Examples
//!
//! ```rust
//! use globetrotter_core::models::{Trip, TripStatus};
//!
//! let trip = Trip {
//!     id: "trip-1".to_string(),
//!     name: "Rajasthan Heritage Tour".to_string(),
//!     destination: "Jaipur, Udaipur, Jodhpur".to_string(),
//!     start_date: "2026-01-02".to_string(),
//!     end_date: "2026-01-12".to_string(),
//!     image: String::new(),
//!     status: TripStatus::Upcoming,
//!     guests: Some(2),
//!     place_id: Some("jaipur".to_string()),
//! };
//! println!("{}", trip); // Markdown header with status icon
//! ```

pub mod itinerary;
pub mod place;
pub mod status;
pub mod trip;

#[cfg(test)]
mod tests;

pub use itinerary::{Activity, ActivityUpdate, DayPlan};
pub use place::{Expenses, Place};
pub use status::{ActivityType, TripStatus};
pub use trip::{Trip, TripDraft};
