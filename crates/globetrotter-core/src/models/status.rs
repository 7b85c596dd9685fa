//! Status and category enumerations for trips and activities.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Lifecycle status of a trip relative to the day it is observed.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum TripStatus {
    /// Today falls within the trip's date range
    Ongoing,

    /// The trip has not started yet, or its dates could not be read
    Upcoming,

    /// The trip ended before today
    Completed,
}

impl FromStr for TripStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "ongoing" => Ok(TripStatus::Ongoing),
            "upcoming" => Ok(TripStatus::Upcoming),
            "completed" => Ok(TripStatus::Completed),
            _ => Err(format!("Invalid trip status: {s}")),
        }
    }
}

impl TripStatus {
    /// All statuses in the order listing views present them.
    pub const ALL: [TripStatus; 3] = [
        TripStatus::Ongoing,
        TripStatus::Upcoming,
        TripStatus::Completed,
    ];

    /// Stored string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            TripStatus::Ongoing => "ongoing",
            TripStatus::Upcoming => "upcoming",
            TripStatus::Completed => "completed",
        }
    }

    /// Get status with consistent icon formatting for display.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use globetrotter_core::models::TripStatus;
    ///
    /// assert_eq!(TripStatus::Ongoing.with_icon(), "➤ Ongoing");
    /// assert_eq!(TripStatus::Upcoming.with_icon(), "○ Upcoming");
    /// assert_eq!(TripStatus::Completed.with_icon(), "✓ Completed");
    /// ```
    pub fn with_icon(&self) -> &'static str {
        match self {
            TripStatus::Ongoing => "➤ Ongoing",
            TripStatus::Upcoming => "○ Upcoming",
            TripStatus::Completed => "✓ Completed",
        }
    }

    /// Section heading used when trips are grouped by status.
    pub fn heading(&self) -> &'static str {
        match self {
            TripStatus::Ongoing => "Ongoing Trips",
            TripStatus::Upcoming => "Upcoming Trips",
            TripStatus::Completed => "Completed Trips",
        }
    }
}

/// Category of an itinerary activity.
///
/// The category only changes how an activity is presented; every category
/// behaves identically inside the document model.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum ActivityType {
    Travel,
    Stay,
    Food,
    #[default]
    Activity,
    Other,
}

impl FromStr for ActivityType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "travel" => Ok(ActivityType::Travel),
            "stay" => Ok(ActivityType::Stay),
            "food" => Ok(ActivityType::Food),
            "activity" => Ok(ActivityType::Activity),
            "other" => Ok(ActivityType::Other),
            _ => Err(format!("Invalid activity type: {s}")),
        }
    }
}

impl ActivityType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityType::Travel => "travel",
            ActivityType::Stay => "stay",
            ActivityType::Food => "food",
            ActivityType::Activity => "activity",
            ActivityType::Other => "other",
        }
    }

    /// Icon shown next to activities of this type.
    pub fn icon(&self) -> &'static str {
        match self {
            ActivityType::Travel => "✈",
            ActivityType::Stay => "🏨",
            ActivityType::Food => "🍴",
            ActivityType::Activity => "📷",
            ActivityType::Other => "📍",
        }
    }

    /// Human readable label.
    pub fn label(&self) -> &'static str {
        match self {
            ActivityType::Travel => "Travel",
            ActivityType::Stay => "Stay",
            ActivityType::Food => "Food",
            ActivityType::Activity => "Activity",
            ActivityType::Other => "Other",
        }
    }
}
