//! Parameter structures for Globetrotter operations
//!
//! Shared, framework-free parameter types passed from interfaces (the CLI)
//! into the core. Interface layers define their own argument structs with
//! framework derives and convert into these with `From`:
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   CLI Args      │    │  Core Params    │    │  TripStore /    │
//! │  (clap derives) │───▶│ (minimal deps)  │───▶│  Itinerary      │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! Trip creation reuses [`TripDraft`](crate::models::TripDraft) directly.

use serde::{Deserialize, Serialize};

use crate::models::TripStatus;

/// Parameters for listing trips.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListTrips {
    /// Only show trips with this status
    #[serde(default)]
    pub status: Option<TripStatus>,
    /// Group by status recomputed for today instead of the stored snapshot
    #[serde(default)]
    pub live: bool,
}

/// Parameters for booking a trip to a catalog place.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BookTrip {
    /// Catalog id of the place to visit
    pub place_id: String,
    /// First day of the stay
    pub start_date: String,
    /// Last day of the stay
    pub end_date: String,
    /// Number of travellers
    pub guests: Option<u32>,
}

/// Parameters for operations addressing a catalog place.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlaceId {
    pub id: String,
}
