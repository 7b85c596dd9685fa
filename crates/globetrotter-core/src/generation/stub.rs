//! Offline generator returning a fixed plan.

use std::time::Duration;

use super::{GeneratedItinerary, ItineraryGenerator};
use crate::error::Result;

const STUB_PLAN: &str = r#"{
    "tripName": "Goa Getaway",
    "duration": "3 Days",
    "totalBudget": "₹15,000",
    "description": "A perfect 3-day getaway exploring North Goa's vibrant energy and South Goa's serene beaches. Includes scooter rental and seafood extravaganza.",
    "days": [
        {
            "day": 1,
            "title": "North Goa Beaches",
            "activities": ["Check in to a beach hut in Anjuna", "Sunset at Vagator Beach", "Seafood dinner at a Baga shack"]
        },
        {
            "day": 2,
            "title": "Old Goa Heritage",
            "activities": ["Basilica of Bom Jesus", "Fontainhas Latin Quarter walk", "Mandovi river cruise"]
        },
        {
            "day": 3,
            "title": "South Goa Calm",
            "activities": ["Scooter ride to Palolem", "Kayaking at Butterfly Beach", "Farewell lunch in Colva"]
        }
    ]
}"#;

/// Generator that ignores the prompt and answers with the same Goa plan
/// after a fixed delay.
#[derive(Debug, Clone, Copy)]
pub struct StubGenerator {
    delay: Duration,
}

impl StubGenerator {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    /// A stub that answers immediately.
    pub fn instant() -> Self {
        Self::new(Duration::ZERO)
    }
}

impl Default for StubGenerator {
    fn default() -> Self {
        Self::new(Duration::from_secs(2))
    }
}

impl ItineraryGenerator for StubGenerator {
    async fn generate(&self, _prompt: &str) -> Result<GeneratedItinerary> {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        GeneratedItinerary::parse(STUB_PLAN)
    }
}
