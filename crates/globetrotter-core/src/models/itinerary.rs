//! Day plan and activity models for the itinerary editor.

use serde::{Deserialize, Serialize};

use super::ActivityType;

/// A single scheduled item within a day.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Activity {
    /// Opaque identifier, unique within its document
    pub id: String,

    /// Category of the activity
    #[serde(rename = "type")]
    pub kind: ActivityType,

    pub title: String,

    pub description: String,

    /// Local time of day, e.g. `09:00`
    pub time: String,

    /// Free-form cost; may carry currency symbols or be empty
    pub cost: String,
}

impl Activity {
    /// Replaces the field named by `update`.
    pub fn apply(&mut self, update: ActivityUpdate) {
        match update {
            ActivityUpdate::Kind(kind) => self.kind = kind,
            ActivityUpdate::Title(title) => self.title = title,
            ActivityUpdate::Description(description) => self.description = description,
            ActivityUpdate::Time(time) => self.time = time,
            ActivityUpdate::Cost(cost) => self.cost = cost,
        }
    }

    /// Cost of this activity as a number; unreadable costs count as zero.
    pub fn cost_value(&self) -> f64 {
        crate::itinerary::parse_cost(&self.cost)
    }
}

/// A one-field change to an [`Activity`].
#[derive(Debug, Clone, PartialEq)]
pub enum ActivityUpdate {
    Kind(ActivityType),
    Title(String),
    Description(String),
    Time(String),
    Cost(String),
}

impl ActivityUpdate {
    /// Name of the field this update replaces.
    pub fn field(&self) -> &'static str {
        match self {
            ActivityUpdate::Kind(_) => "type",
            ActivityUpdate::Title(_) => "title",
            ActivityUpdate::Description(_) => "description",
            ActivityUpdate::Time(_) => "time",
            ActivityUpdate::Cost(_) => "cost",
        }
    }
}

/// One day within an itinerary document.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DayPlan {
    /// Identifier assigned by the owning document; never reused
    pub id: u64,

    /// Calendar date chosen by the user
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,

    /// Theme of the day, set by generated plans
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Activities in schedule order
    #[serde(default)]
    pub activities: Vec<Activity>,
}

impl DayPlan {
    pub(crate) fn new(id: u64) -> Self {
        Self {
            id,
            date: None,
            title: None,
            activities: Vec::new(),
        }
    }

    /// Sum of this day's activity costs.
    pub fn total_cost(&self) -> f64 {
        self.activities.iter().map(Activity::cost_value).sum()
    }

    pub fn activity(&self, activity_id: &str) -> Option<&Activity> {
        self.activities.iter().find(|a| a.id == activity_id)
    }
}
