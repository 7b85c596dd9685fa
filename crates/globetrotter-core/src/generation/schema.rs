//! Typed schema for generated itineraries and its validating parser.

use serde::{Deserialize, Serialize};

use crate::error::{Result, TravelError};

/// A complete plan returned by the generation collaborator.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedItinerary {
    pub trip_name: String,
    pub duration: String,
    pub total_budget: String,
    pub description: String,
    pub days: Vec<GeneratedDay>,
}

/// One day of a generated plan.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeneratedDay {
    pub day: u32,
    pub title: String,
    pub activities: Vec<String>,
}

impl GeneratedItinerary {
    /// Parses model output into a plan.
    ///
    /// Code-fence markers are stripped before the text is read as JSON.
    /// Any deviation from the schema, including a plan with no days, fails
    /// as a whole; no partially-typed value is ever returned.
    ///
    /// # Errors
    ///
    /// Returns `TravelError::GenerationFailed` for anything that is not a
    /// well-formed plan.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use globetrotter_core::generation::GeneratedItinerary;
    ///
    /// let json = r#"{"tripName": "Goa", "duration": "1 Day", "totalBudget": "₹5,000",
    ///  "description": "Beaches", "days": [{"day": 1, "title": "Sun", "activities": ["Swim"]}]}"#;
    /// let text = format!("{}json\n{json}\n{}", "`".repeat(3), "`".repeat(3));
    /// let plan = GeneratedItinerary::parse(&text).unwrap();
    /// assert_eq!(plan.days[0].activities, vec!["Swim"]);
    ///
    /// assert!(GeneratedItinerary::parse("Sorry, I can't help with that.").is_err());
    /// ```
    pub fn parse(text: &str) -> Result<Self> {
        let cleaned = strip_code_fences(text);

        let plan: Self = serde_json::from_str(cleaned.trim())
            .map_err(|e| TravelError::generation_failed(format!("response is not a valid plan: {e}")))?;

        if plan.days.is_empty() {
            return Err(TravelError::generation_failed("plan contains no days"));
        }

        Ok(plan)
    }
}

fn strip_code_fences(text: &str) -> String {
    text.replace("```json", "").replace("```", "")
}
