//! Display implementations for domain models.
//!
//! Kept apart from the model definitions so the data structures stay free
//! of presentation concerns. All output is markdown.

use std::fmt;

use super::money::Rupees;
use crate::{
    itinerary::ItineraryDocument,
    models::{Activity, ActivityType, DayPlan, Place, Trip, TripStatus},
};

impl fmt::Display for TripStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for ActivityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for Trip {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "### {} ({})", self.name, self.status.with_icon())?;
        writeln!(f)?;
        writeln!(f, "- **Destination**: {}", self.destination)?;
        writeln!(f, "- **Dates**: {} to {}", self.start_date, self.end_date)?;
        if let Some(guests) = self.guests {
            writeln!(f, "- **Guests**: {guests}")?;
        }
        if let Some(place) = &self.place_id {
            writeln!(f, "- **Place**: {place}")?;
        }
        writeln!(f, "- **ID**: {}", self.id)?;
        writeln!(f)
    }
}

impl fmt::Display for Place {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {} (ID: {})", self.name, self.id)?;
        writeln!(f)?;
        writeln!(f, "- **Location**: {}, {}", self.location, self.country)?;
        writeln!(f, "- **Rating**: {:.1}", self.rating)?;
        writeln!(f, "- **Best season**: {}", self.best_season)?;
        writeln!(f, "- **Budget**: {}", self.budget)?;
        if let (Some(lat), Some(lng)) = (self.lat, self.lng) {
            writeln!(f, "- **Coordinates**: {lat:.4}, {lng:.4}")?;
        }
        writeln!(f)?;
        writeln!(f, "{}", self.description)?;
        writeln!(f)?;

        writeln!(f, "## Daily expenses")?;
        writeln!(f)?;
        writeln!(f, "- Accommodation: {}", self.expenses.accommodation)?;
        writeln!(f, "- Food: {}", self.expenses.food)?;
        writeln!(f, "- Transport: {}", self.expenses.transport)?;
        writeln!(f, "- Activities: {}", self.expenses.activities)
    }
}

impl fmt::Display for Activity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let title = if self.title.is_empty() {
            "(untitled)"
        } else {
            self.title.as_str()
        };
        write!(
            f,
            "- {} {} **{}** ({})",
            self.time,
            self.kind.icon(),
            title,
            self.kind.label()
        )?;
        if !self.cost.is_empty() {
            write!(f, ", {}", Rupees(self.cost_value()))?;
        }
        writeln!(f, " `{}`", self.id)?;

        if !self.description.is_empty() {
            writeln!(f, "  {}", self.description)?;
        }
        Ok(())
    }
}

impl DayPlan {
    /// Shared day layout; `position` is the 1-based place of the day within
    /// its document, when known.
    fn fmt_day(&self, f: &mut fmt::Formatter<'_>, position: Option<usize>) -> fmt::Result {
        match position {
            Some(n) => write!(f, "## Day {n} (ID: {})", self.id)?,
            None => write!(f, "## Day {}", self.id)?,
        }
        if let Some(title) = &self.title {
            write!(f, ": {title}")?;
        }
        writeln!(f)?;
        writeln!(f)?;

        if let Some(date) = &self.date {
            writeln!(f, "- **Date**: {date}")?;
            writeln!(f)?;
        }

        if self.activities.is_empty() {
            writeln!(f, "No activities planned.")?;
        } else {
            for activity in &self.activities {
                write!(f, "{activity}")?;
            }
        }
        writeln!(f)?;
        writeln!(f, "Day total: {}", Rupees(self.total_cost()))?;
        writeln!(f)
    }
}

impl fmt::Display for DayPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_day(f, None)
    }
}

impl fmt::Display for ItineraryDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Itinerary")?;
        writeln!(f)?;

        if self.days().is_empty() {
            writeln!(f, "No days planned.")?;
            writeln!(f)?;
        } else {
            for (index, day) in self.days().iter().enumerate() {
                day.fmt_day(f, Some(index + 1))?;
            }
        }

        writeln!(f, "**Total estimated cost**: {}", Rupees(self.total_cost()))
    }
}
