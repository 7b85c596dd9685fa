//! Trip handler operations that return display wrapper types.

use super::{KeyValueStore, TripStore};
use crate::{
    catalog::find_place,
    dates::parse_trip_date,
    display::{Trips, TripsByStatus},
    error::{Result, TravelError},
    models::{Trip, TripDraft},
    params::{BookTrip, ListTrips},
};

/// Largest party a single booking accepts.
pub const MAX_BOOKING_GUESTS: u32 = 10;

impl<S: KeyValueStore> TripStore<S> {
    /// Handle listing trips grouped by status.
    ///
    /// With `live` set, trips are grouped by the status their dates imply
    /// today; otherwise by the stored snapshot.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use globetrotter_core::{params::ListTrips, store::TripStoreBuilder, models::TripStatus};
    /// let store = TripStoreBuilder::new().build_in_memory();
    /// let grouped = store.list_trips(&ListTrips { status: Some(TripStatus::Completed), live: false });
    /// assert_eq!(grouped.len(), 2);
    /// ```
    pub fn list_trips(&self, params: &ListTrips) -> TripsByStatus {
        let trips = self.get_trips();
        let grouped = if params.live {
            let today = self.clock.today();
            TripsByStatus::group(trips, |trip| trip.status_on(today))
        } else {
            TripsByStatus::group(trips, |trip| trip.status)
        };

        match params.status {
            Some(status) => grouped.only(status),
            None => grouped,
        }
    }

    /// Handle creating a trip from user input.
    ///
    /// Validates the draft before handing it to [`TripStore::add_trip`].
    ///
    /// # Errors
    ///
    /// Returns `TravelError::InvalidInput` for a draft that fails
    /// validation, or any error from persisting the trip.
    pub fn create_trip(&mut self, draft: TripDraft) -> Result<Trip> {
        draft.validate()?;
        self.add_trip(draft)
    }

    /// Handle booking a stay at a catalog place.
    ///
    /// # Errors
    ///
    /// Returns `TravelError::InvalidInput` for an unknown place, a stay that
    /// does not end after it starts, or a guest count outside
    /// `1..=`[`MAX_BOOKING_GUESTS`].
    pub fn book_trip(&mut self, params: &BookTrip) -> Result<Trip> {
        let place = find_place(&params.place_id).ok_or_else(|| {
            TravelError::invalid_input("place_id")
                .with_reason(format!("No place with id '{}'", params.place_id))
        })?;

        let draft = TripDraft::for_place(
            place,
            params.start_date.clone(),
            params.end_date.clone(),
            params.guests,
        );
        draft.validate()?;
        check_booking(&draft)?;
        self.add_trip(draft)
    }

    /// Trips booked from the given catalog place, newest first.
    pub fn trips_for_place(&self, place_id: &str) -> Trips {
        let trips = self
            .get_trips()
            .into_iter()
            .filter(|trip| trip.place_id.as_deref() == Some(place_id))
            .collect();
        Trips(trips)
    }
}

/// Booking rules on top of [`TripDraft::validate`]: a stay lasts at least one
/// night and the party size is bounded.
fn check_booking(draft: &TripDraft) -> Result<()> {
    if let Some(guests) = draft.guests {
        if !(1..=MAX_BOOKING_GUESTS).contains(&guests) {
            return Err(TravelError::invalid_input("guests").with_reason(format!(
                "Guests must be between 1 and {MAX_BOOKING_GUESTS}, got {guests}"
            )));
        }
    }

    let start = parse_trip_date(&draft.start_date);
    let end = parse_trip_date(&draft.end_date);
    if let (Some(start), Some(end)) = (start, end) {
        if start >= end {
            return Err(TravelError::invalid_input("end_date")
                .with_reason("Check-out must be after check-in"));
        }
    }

    Ok(())
}
