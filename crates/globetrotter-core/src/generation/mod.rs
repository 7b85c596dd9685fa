//! Asking a text-generation service for a draft itinerary.
//!
//! A generator turns a free-text request ("3 days in Goa on a budget") into a
//! [`GeneratedItinerary`]. [`generate_into`] applies a successful plan to an
//! [`ItineraryDocument`]; a failed generation leaves the document untouched.

pub mod config;
pub mod gemini;
pub mod schema;
pub mod stub;

use std::future::Future;

use log::{info, warn};

pub use config::GenerationConfig;
pub use gemini::GeminiGenerator;
pub use schema::{GeneratedDay, GeneratedItinerary};
pub use stub::StubGenerator;

use crate::error::{Result, TravelError};
use crate::itinerary::ItineraryDocument;

/// Source of generated itineraries.
pub trait ItineraryGenerator {
    /// Produces a plan for the request.
    ///
    /// Implementations must fail with `TravelError::GenerationFailed` when
    /// the service is unreachable or its answer does not match the schema.
    fn generate(&self, prompt: &str) -> impl Future<Output = Result<GeneratedItinerary>> + Send;
}

/// Wraps a user request in the instructions the model needs to answer with
/// plan-shaped JSON.
pub fn structured_prompt(request: &str) -> String {
    format!(
        r#"You are an expert travel planner. Create a detailed itinerary based on this request: "{request}".

CRITICAL: Return ONLY valid JSON. Do not include markdown formatting.
The JSON must match this structure exactly:
{{
  "tripName": "Title of the trip",
  "duration": "e.g., 5 Days",
  "totalBudget": "e.g., $1200",
  "description": "Brief overview",
  "days": [
    {{
      "day": 1,
      "title": "Theme of the day",
      "activities": ["Activity 1", "Activity 2", "Activity 3"]
    }}
  ]
}}"#
    )
}

/// Generates a plan and replaces the document's days with it.
///
/// # Errors
///
/// Returns `TravelError::InvalidInput` for a blank prompt, or whatever the
/// generator fails with. The document is only modified on success.
pub async fn generate_into<G: ItineraryGenerator>(
    generator: &G,
    prompt: &str,
    document: &mut ItineraryDocument,
) -> Result<GeneratedItinerary> {
    let prompt = prompt.trim();
    if prompt.is_empty() {
        return Err(TravelError::invalid_input("prompt")
            .with_reason("Describe the trip you want to plan"));
    }

    match generator.generate(prompt).await {
        Ok(plan) => {
            document.bulk_load_from_generation(&plan.days);
            info!("Loaded generated plan '{}' ({} days)", plan.trip_name, plan.days.len());
            Ok(plan)
        }
        Err(e) => {
            warn!("Itinerary generation failed: {e}");
            Err(e)
        }
    }
}
