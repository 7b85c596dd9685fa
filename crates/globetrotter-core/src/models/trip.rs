//! Trip model definition and related functionality.

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use super::{Place, TripStatus};
use crate::{
    dates::{derive_status, parse_trip_date},
    error::{Result, TravelError},
};

/// A booked travel plan as persisted by the trip store.
///
/// Field names serialize in camelCase so the stored JSON matches the
/// `globetrotter_trips` layout.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Trip {
    /// Unique identifier, assigned by the store at creation
    pub id: String,

    /// Display name of the trip
    pub name: String,

    /// Free-form destination description
    pub destination: String,

    /// First day of the trip, as entered
    pub start_date: String,

    /// Last day of the trip, as entered
    pub end_date: String,

    /// Cover image URL
    pub image: String,

    /// Status snapshot taken when the trip was created
    pub status: TripStatus,

    /// Number of travellers, when known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub guests: Option<u32>,

    /// Catalog place the trip was booked from
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub place_id: Option<String>,
}

impl Trip {
    /// Builds a trip from a draft with the identity and status chosen by
    /// the store.
    pub(crate) fn from_draft(draft: TripDraft, id: String, status: TripStatus) -> Self {
        Self {
            id,
            name: draft.name,
            destination: draft.destination,
            start_date: draft.start_date,
            end_date: draft.end_date,
            image: draft.image,
            status,
            guests: draft.guests,
            place_id: draft.place_id,
        }
    }

    /// Recomputes the status for `today` from the stored dates.
    ///
    /// The stored [`Trip::status`] is never changed by this call.
    pub fn status_on(&self, today: Date) -> TripStatus {
        derive_status(&self.start_date, &self.end_date, today)
    }

    /// Whether the stored status differs from the one `today` implies.
    pub fn is_status_stale(&self, today: Date) -> bool {
        self.status_on(today) != self.status
    }
}

/// Caller-supplied trip fields: everything except `id` and `status`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TripDraft {
    pub name: String,
    pub destination: String,
    pub start_date: String,
    pub end_date: String,
    #[serde(default)]
    pub image: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub guests: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub place_id: Option<String>,
}

impl TripDraft {
    /// Builds the draft a booking of `place` produces.
    pub fn for_place(
        place: &Place,
        start_date: impl Into<String>,
        end_date: impl Into<String>,
        guests: Option<u32>,
    ) -> Self {
        Self {
            name: format!("{} Trip", place.name),
            destination: place.location.to_string(),
            start_date: start_date.into(),
            end_date: end_date.into(),
            image: place.image.to_string(),
            guests,
            place_id: Some(place.id.to_string()),
        }
    }

    /// Form-boundary validation.
    ///
    /// The trip store accepts any draft; callers that take user input run
    /// this first.
    ///
    /// # Errors
    ///
    /// Returns `TravelError::InvalidInput` naming the first offending field.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(TravelError::invalid_input("name").with_reason("Trip name is required"));
        }
        if self.destination.trim().is_empty() {
            return Err(
                TravelError::invalid_input("destination").with_reason("Destination is required")
            );
        }

        let start = parse_trip_date(&self.start_date).ok_or_else(|| {
            TravelError::invalid_input("start_date")
                .with_reason(format!("Unrecognized date: '{}'", self.start_date))
        })?;
        let end = parse_trip_date(&self.end_date).ok_or_else(|| {
            TravelError::invalid_input("end_date")
                .with_reason(format!("Unrecognized date: '{}'", self.end_date))
        })?;
        if start > end {
            return Err(TravelError::invalid_input("end_date")
                .with_reason("End date must not be before the start date"));
        }

        if self.guests == Some(0) {
            return Err(TravelError::invalid_input("guests").with_reason("At least one guest is required"));
        }

        Ok(())
    }
}
