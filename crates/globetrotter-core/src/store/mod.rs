//! The trip store: durable trip collection with change notification.
//!
//! [`TripStore`] keeps every trip in one JSON document under
//! [`TRIPS_KEY`] in a [`KeyValueStore`] backend. Each write reads the whole
//! collection, changes it and writes it back; `&mut self` on every mutating
//! method keeps those read-modify-write cycles from interleaving within a
//! process.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   Booking /     │    │    TripStore    │    │  KeyValueStore  │
//! │   CLI handlers  │───▶│ (ids, status,   │───▶│ (Database or    │
//! │                 │    │  observers)     │    │  MemoryStore)   │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust
//! use globetrotter_core::{models::TripDraft, store::TripStoreBuilder};
//!
//! # fn example() -> globetrotter_core::Result<()> {
//! let mut store = TripStoreBuilder::new().build_in_memory();
//! let _subscription = store.subscribe(|event| println!("{} fired", event.name()));
//!
//! let trip = store.add_trip(TripDraft {
//!     name: "Goa Beaches Trip".to_string(),
//!     destination: "Konkan Coast".to_string(),
//!     start_date: "2030-11-02".to_string(),
//!     end_date: "2030-11-06".to_string(),
//!     ..Default::default()
//! })?;
//! assert_eq!(store.get_trips()[0].id, trip.id);
//! # Ok(())
//! # }
//! ```

use log::{debug, info, warn};
use uuid::Uuid;

use crate::{
    dates::derive_status,
    error::Result,
    models::{Trip, TripDraft},
};

pub mod backend;
pub mod builder;
pub mod clock;
pub mod handlers;
pub mod seed;


pub use backend::{KeyValueStore, MemoryStore};
pub use builder::TripStoreBuilder;
pub use clock::{Clock, FixedClock, SystemClock};
pub use handlers::MAX_BOOKING_GUESTS;
pub use seed::sample_trips;

/// Storage key holding the serialized trip collection.
pub const TRIPS_KEY: &str = "globetrotter_trips";

/// Change notifications broadcast by the store.
///
/// Events carry no data; observers re-read the collection with
/// [`TripStore::get_trips`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TripEvent {
    /// The trip collection was written
    Updated,
}

impl TripEvent {
    /// Well-known event name.
    pub fn name(&self) -> &'static str {
        match self {
            TripEvent::Updated => "tripsUpdated",
        }
    }
}

/// Handle returned by [`TripStore::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Observer = Box<dyn FnMut(TripEvent)>;

/// Durable trip collection over a pluggable backend.
pub struct TripStore<S: KeyValueStore> {
    backend: S,
    clock: Box<dyn Clock>,
    observers: Vec<(SubscriptionId, Observer)>,
    next_subscription: u64,
}

impl<S: KeyValueStore> TripStore<S> {
    /// Creates a store over `backend` using the system clock.
    pub fn new(backend: S) -> Self {
        Self::with_clock(backend, SystemClock)
    }

    /// Creates a store over `backend` reading time from `clock`.
    pub fn with_clock(backend: S, clock: impl Clock + 'static) -> Self {
        Self::with_boxed_clock(backend, Box::new(clock))
    }

    pub(crate) fn with_boxed_clock(backend: S, clock: Box<dyn Clock>) -> Self {
        Self {
            backend,
            clock,
            observers: Vec::new(),
            next_subscription: 0,
        }
    }

    /// The backend this store writes to.
    pub fn backend(&self) -> &S {
        &self.backend
    }

    /// The clock this store reads "now" from.
    pub fn clock(&self) -> &dyn Clock {
        self.clock.as_ref()
    }

    /// Returns every trip, newest first.
    ///
    /// An empty backend is seeded with [`sample_trips`], which are persisted
    /// and returned. A payload that cannot be read or is not a JSON array is
    /// logged and replaced by the sample set in the returned value only; the
    /// stored payload is left untouched. Individual records that do not
    /// match the trip layout are logged and skipped. This method never fails.
    pub fn get_trips(&self) -> Vec<Trip> {
        let stored = match self.backend.get(TRIPS_KEY) {
            Ok(stored) => stored,
            Err(e) => {
                warn!("Failed to read stored trips, using sample trips: {e}");
                return sample_trips();
            }
        };

        let Some(payload) = stored else {
            let trips = sample_trips();
            debug!("Seeding empty trip store with {} sample trips", trips.len());
            if let Err(e) = self.write_trips(&trips) {
                warn!("Failed to persist sample trips: {e}");
            }
            return trips;
        };

        let records = match serde_json::from_str::<Vec<serde_json::Value>>(&payload) {
            Ok(records) => records,
            Err(e) => {
                warn!("Failed to parse stored trips, using sample trips: {e}");
                return sample_trips();
            }
        };

        records
            .into_iter()
            .enumerate()
            .filter_map(|(index, record)| match serde_json::from_value::<Trip>(record) {
                Ok(trip) => Some(trip),
                Err(e) => {
                    warn!("Skipping unreadable stored trip at index {index}: {e}");
                    None
                }
            })
            .collect()
    }

    /// Adds a trip built from `draft` at the front of the collection.
    ///
    /// The id comes from the current time in milliseconds, bumped past any
    /// existing numeric id so it is always fresh. The status is derived from
    /// the draft's dates against today and stored as a snapshot. The whole
    /// collection is persisted before observers are notified, and every
    /// observer has run by the time this returns.
    ///
    /// # Errors
    ///
    /// Returns an error if the updated collection cannot be serialized or
    /// written; no observer is notified in that case.
    pub fn add_trip(&mut self, draft: TripDraft) -> Result<Trip> {
        let mut trips = self.get_trips();

        let id = next_trip_id(&trips, self.clock.now_millis());
        let status = derive_status(&draft.start_date, &draft.end_date, self.clock.today());
        let trip = Trip::from_draft(draft, id, status);

        trips.insert(0, trip.clone());
        self.write_trips(&trips)?;

        info!("Added trip {} '{}' ({})", trip.id, trip.name, trip.status);
        self.notify(TripEvent::Updated);

        Ok(trip)
    }

    /// Replaces the entire collection with `trips` and notifies observers.
    ///
    /// # Errors
    ///
    /// Returns an error if the collection cannot be serialized or written.
    pub fn replace_trips(&mut self, trips: &[Trip]) -> Result<()> {
        self.write_trips(trips)?;
        debug!("Replaced trip collection with {} trips", trips.len());
        self.notify(TripEvent::Updated);
        Ok(())
    }

    /// Registers `observer` for change notifications.
    pub fn subscribe<F>(&mut self, observer: F) -> SubscriptionId
    where
        F: FnMut(TripEvent) + 'static,
    {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.observers.push((id, Box::new(observer)));
        id
    }

    /// Removes a previously registered observer. Returns whether it existed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(existing, _)| *existing != id);
        self.observers.len() != before
    }

    /// Number of registered observers.
    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    fn write_trips(&self, trips: &[Trip]) -> Result<()> {
        let payload = serde_json::to_string(trips)?;
        self.backend.set(TRIPS_KEY, &payload)
    }

    fn notify(&mut self, event: TripEvent) {
        for (_, observer) in &mut self.observers {
            observer(event);
        }
    }
}

/// Picks a trip id from the clock that no existing numeric id reaches.
///
/// When the numeric range is exhausted the id falls back to a random token.
fn next_trip_id(trips: &[Trip], now_millis: i64) -> String {
    let newest = trips
        .iter()
        .filter_map(|trip| trip.id.parse::<i64>().ok())
        .max();

    match newest {
        Some(newest) if newest >= now_millis => match newest.checked_add(1) {
            Some(id) => id.to_string(),
            None => {
                warn!("Numeric trip ids exhausted, falling back to a random id");
                Uuid::new_v4().to_string()
            }
        },
        _ => now_millis.to_string(),
    }
}
