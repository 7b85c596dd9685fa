//! Result wrapper types for displaying operation outcomes.

use std::fmt;

use crate::{generation::GeneratedItinerary, models::Trip};

/// Wrapper type for displaying the result of create operations.
///
/// # Examples
///
/// ```rust
/// use globetrotter_core::{display::CreateResult, store::sample_trips};
///
/// let trip = sample_trips().remove(0);
/// let output = CreateResult::new(trip).to_string();
/// assert!(output.starts_with("Created trip with ID: trip-1"));
/// ```
pub struct CreateResult<T> {
    pub resource: T,
}

impl<T> CreateResult<T> {
    /// Create a new CreateResult wrapper.
    pub fn new(resource: T) -> Self {
        Self { resource }
    }
}

impl fmt::Display for CreateResult<Trip> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Created trip with ID: {}", self.resource.id)?;
        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

/// Summary of a generated plan that was loaded into an itinerary.
pub struct GenerationResult {
    pub plan: GeneratedItinerary,
}

impl GenerationResult {
    pub fn new(plan: GeneratedItinerary) -> Self {
        Self { plan }
    }
}

impl fmt::Display for GenerationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}", self.plan.trip_name)?;
        writeln!(f)?;
        writeln!(f, "- **Duration**: {}", self.plan.duration)?;
        writeln!(f, "- **Budget**: {}", self.plan.total_budget)?;
        writeln!(f)?;
        writeln!(f, "{}", self.plan.description)?;
        writeln!(f)?;
        writeln!(f, "Loaded {} days into the itinerary.", self.plan.days.len())
    }
}
