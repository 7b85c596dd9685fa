//! In-memory itinerary document: ordered days of ordered activities.
//!
//! An [`ItineraryDocument`] is owned by one editing session and is never
//! persisted by the core. It can serialize to JSON so a caller can keep it
//! between sessions.
//!
//! Day ids come from a counter owned by the document, so removing a day
//! never lets a later day reuse its id. Activity ids are random tokens that
//! are additionally checked against the document before use.
//!
//! # Examples
//!
//! ```rust
//! use globetrotter_core::{itinerary::ItineraryDocument, models::ActivityUpdate};
//!
//! let mut doc = ItineraryDocument::new();
//! let day = doc.add_day();
//! let activity = doc.add_activity(day).expect("day exists");
//! doc.update_activity(day, &activity, ActivityUpdate::Cost("₹1,200".to_string()));
//! assert_eq!(doc.total_cost(), 1200.0);
//! ```

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    error::{Result, TravelError},
    generation::GeneratedDay,
    models::{Activity, ActivityType, ActivityUpdate, DayPlan},
};

mod cost;


pub use cost::parse_cost;

/// Time given to activities added by hand.
pub const DEFAULT_ACTIVITY_TIME: &str = "09:00";

/// Time given to activities taken from a generated plan.
pub const GENERATED_ACTIVITY_TIME: &str = "10:00";

/// Description given to activities taken from a generated plan.
pub const GENERATED_ACTIVITY_DESCRIPTION: &str = "AI Suggested Activity";

/// Upper bound on the day counter a loaded document may carry, so
/// [`ItineraryDocument::add_day`] can never run out of ids.
const MAX_LOADED_DAY_ID: u64 = u32::MAX as u64;

/// An editable day-by-day plan.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(try_from = "StoredDocument", rename_all = "camelCase")]
pub struct ItineraryDocument {
    days: Vec<DayPlan>,
    next_day_id: u64,
}

/// Serialized form; the counter is recomputed if it is missing or stale.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredDocument {
    #[serde(default)]
    days: Vec<DayPlan>,
    #[serde(default)]
    next_day_id: u64,
}

impl TryFrom<StoredDocument> for ItineraryDocument {
    type Error = TravelError;

    fn try_from(stored: StoredDocument) -> Result<Self> {
        let mut next_day_id = stored.next_day_id.max(1);
        for day in &stored.days {
            next_day_id = next_day_id.max(day.id.saturating_add(1));
        }
        if next_day_id > MAX_LOADED_DAY_ID {
            return Err(TravelError::invalid_input("days").with_reason(format!(
                "Day ids must stay below {MAX_LOADED_DAY_ID}, found {next_day_id}"
            )));
        }

        Ok(Self {
            next_day_id,
            days: stored.days,
        })
    }
}

impl Default for ItineraryDocument {
    fn default() -> Self {
        Self::new()
    }
}

impl ItineraryDocument {
    /// Creates a document with no days.
    pub fn new() -> Self {
        Self {
            days: Vec::new(),
            next_day_id: 1,
        }
    }

    /// The editor's starting document: one day with a flight and a hotel
    /// check-in.
    pub fn sample() -> Self {
        let mut doc = Self::new();
        let day = doc.add_day();
        let flight = Activity {
            id: doc.fresh_activity_id(),
            kind: ActivityType::Travel,
            title: "Flight to Destination".to_string(),
            description: "Arrive at airport by 10 AM".to_string(),
            time: "12:00".to_string(),
            cost: "5000".to_string(),
        };
        let check_in = Activity {
            id: doc.fresh_activity_id(),
            kind: ActivityType::Stay,
            title: "Check-in at Hotel".to_string(),
            description: "Grand Plaza Hotel".to_string(),
            time: "14:00".to_string(),
            cost: "0".to_string(),
        };
        if let Some(plan) = doc.day_mut(day) {
            plan.activities.push(flight);
            plan.activities.push(check_in);
        }
        doc
    }

    /// Reads a document from JSON.
    ///
    /// # Errors
    ///
    /// Returns `TravelError::Serialization` for malformed input.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Writes the document as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns `TravelError::Serialization` if serialization fails.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Days in order.
    pub fn days(&self) -> &[DayPlan] {
        &self.days
    }

    pub fn day(&self, day_id: u64) -> Option<&DayPlan> {
        self.days.iter().find(|d| d.id == day_id)
    }

    fn day_mut(&mut self, day_id: u64) -> Option<&mut DayPlan> {
        self.days.iter_mut().find(|d| d.id == day_id)
    }

    /// Number of activities across all days.
    pub fn activity_count(&self) -> usize {
        self.days.iter().map(|d| d.activities.len()).sum()
    }

    /// Appends an empty, undated day and returns its id.
    pub fn add_day(&mut self) -> u64 {
        let id = self.next_day_id;
        self.next_day_id += 1;
        self.days.push(DayPlan::new(id));
        id
    }

    /// Removes the day with `day_id`. Returns whether it existed.
    pub fn remove_day(&mut self, day_id: u64) -> bool {
        let before = self.days.len();
        self.days.retain(|d| d.id != day_id);
        self.days.len() != before
    }

    /// Sets or clears a day's date. Returns whether the day exists.
    pub fn set_day_date(&mut self, day_id: u64, date: Option<String>) -> bool {
        match self.day_mut(day_id) {
            Some(day) => {
                day.date = date;
                true
            }
            None => false,
        }
    }

    /// Appends a blank activity to a day and returns its id, or `None` when
    /// the day does not exist.
    pub fn add_activity(&mut self, day_id: u64) -> Option<String> {
        let id = self.fresh_activity_id();
        let day = self.day_mut(day_id)?;
        day.activities.push(Activity {
            id: id.clone(),
            kind: ActivityType::Activity,
            title: String::new(),
            description: String::new(),
            time: DEFAULT_ACTIVITY_TIME.to_string(),
            cost: String::new(),
        });
        Some(id)
    }

    /// Replaces one field of an activity. Returns whether the activity was
    /// found; a missing day or activity leaves the document unchanged.
    pub fn update_activity(&mut self, day_id: u64, activity_id: &str, update: ActivityUpdate) -> bool {
        let activity = self
            .day_mut(day_id)
            .and_then(|day| day.activities.iter_mut().find(|a| a.id == activity_id));

        match activity {
            Some(activity) => {
                activity.apply(update);
                true
            }
            None => false,
        }
    }

    /// Removes an activity from its day. Returns whether it existed.
    pub fn remove_activity(&mut self, day_id: u64, activity_id: &str) -> bool {
        let Some(day) = self.day_mut(day_id) else {
            return false;
        };
        let before = day.activities.len();
        day.activities.retain(|a| a.id != activity_id);
        day.activities.len() != before
    }

    /// Replaces every day with the days of a generated plan.
    ///
    /// Days are numbered from 1 in plan order and left undated. Each
    /// generated activity becomes an `activity`-typed entry with a fixed
    /// description and time and no cost.
    pub fn bulk_load_from_generation(&mut self, days: &[GeneratedDay]) {
        self.days.clear();
        self.next_day_id = 1;

        for generated in days {
            let id = self.add_day();
            let activities: Vec<Activity> = generated
                .activities
                .iter()
                .map(|title| Activity {
                    id: self.fresh_activity_id(),
                    kind: ActivityType::Activity,
                    title: title.clone(),
                    description: GENERATED_ACTIVITY_DESCRIPTION.to_string(),
                    time: GENERATED_ACTIVITY_TIME.to_string(),
                    cost: String::new(),
                })
                .collect();

            if let Some(day) = self.day_mut(id) {
                day.title = Some(generated.title.clone()).filter(|t| !t.is_empty());
                day.activities = activities;
            }
        }
    }

    /// Sum of every activity's cost; unreadable costs count as zero.
    pub fn total_cost(&self) -> f64 {
        self.days.iter().map(DayPlan::total_cost).sum()
    }

    fn fresh_activity_id(&self) -> String {
        loop {
            let candidate = Uuid::new_v4().simple().to_string();
            let taken = self
                .days
                .iter()
                .flat_map(|d| &d.activities)
                .any(|a| a.id == candidate);
            if !taken {
                return candidate;
            }
        }
    }
}
