//! Itinerary generation through the Gemini `generateContent` endpoint.

use std::time::Duration;

use log::debug;

use super::{structured_prompt, GeneratedItinerary, GenerationConfig, ItineraryGenerator};
use crate::error::{Result, TravelError};

/// Generator backed by a hosted Gemini model.
pub struct GeminiGenerator {
    config: GenerationConfig,
    api_key: String,
    client: reqwest::Client,
}

impl std::fmt::Debug for GeminiGenerator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiGenerator")
            .field("model", &self.config.model)
            .field("base_url", &self.config.base_url)
            .finish()
    }
}

impl GeminiGenerator {
    /// Creates a generator from configuration.
    ///
    /// # Errors
    ///
    /// Returns `TravelError::Configuration` if no API key is configured or
    /// the HTTP client cannot be built.
    pub fn from_config(config: &GenerationConfig) -> Result<Self> {
        let api_key = config.require_api_key()?.to_string();
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(120))
            .build()
            .map_err(|e| TravelError::Configuration {
                message: format!("Failed to build HTTP client: {e}"),
            })?;

        Ok(Self {
            config: config.clone(),
            api_key,
            client,
        })
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent?key={}",
            self.config.base_url.trim_end_matches('/'),
            self.config.model,
            self.api_key,
        )
    }

    /// Sends one prompt and returns the model's raw text.
    async fn generate_text(&self, prompt: &str) -> Result<String> {
        let body = serde_json::json!({
            "contents": [{"parts": [{"text": prompt}]}],
        });

        let resp = self
            .client
            .post(self.endpoint())
            .json(&body)
            .send()
            .await
            .map_err(|e| TravelError::generation_failed(format!("request failed: {e}")))?;

        if !resp.status().is_success() {
            let status = resp.status();
            let text = resp.text().await.unwrap_or_default();
            return Err(TravelError::generation_failed(format!(
                "service returned {status}: {text}"
            )));
        }

        let json: serde_json::Value = resp
            .json()
            .await
            .map_err(|e| TravelError::generation_failed(format!("unreadable response: {e}")))?;

        json["candidates"][0]["content"]["parts"][0]["text"]
            .as_str()
            .map(|s| s.to_string())
            .ok_or_else(|| TravelError::generation_failed("response contained no text"))
    }
}

impl ItineraryGenerator for GeminiGenerator {
    async fn generate(&self, prompt: &str) -> Result<GeneratedItinerary> {
        debug!("Requesting itinerary from {}", self.config.model);
        let text = self.generate_text(&structured_prompt(prompt)).await?;
        GeneratedItinerary::parse(&text)
    }
}
