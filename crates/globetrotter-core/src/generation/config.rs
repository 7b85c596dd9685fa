//! Settings for the hosted generation service.

use crate::error::{Result, TravelError};

pub const DEFAULT_MODEL: &str = "gemini-flash-latest";
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

pub const API_KEY_ENV: &str = "GEMINI_API_KEY";
pub const MODEL_ENV: &str = "GLOBETROTTER_GEMINI_MODEL";
pub const BASE_URL_ENV: &str = "GLOBETROTTER_GEMINI_BASE_URL";

/// Connection settings for [`GeminiGenerator`](super::GeminiGenerator).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationConfig {
    pub model: String,
    pub base_url: String,
    pub api_key: Option<String>,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: None,
        }
    }
}

impl GenerationConfig {
    /// Reads settings from `GEMINI_API_KEY`, `GLOBETROTTER_GEMINI_MODEL` and
    /// `GLOBETROTTER_GEMINI_BASE_URL`, falling back to defaults.
    pub fn from_env() -> Self {
        let non_empty = |name: &str| std::env::var(name).ok().filter(|v| !v.trim().is_empty());

        Self {
            model: non_empty(MODEL_ENV).unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            base_url: non_empty(BASE_URL_ENV).unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            api_key: non_empty(API_KEY_ENV),
        }
    }

    /// The API key, or a configuration error naming the variable to set.
    pub(crate) fn require_api_key(&self) -> Result<&str> {
        self.api_key
            .as_deref()
            .filter(|key| !key.is_empty())
            .ok_or_else(|| TravelError::Configuration {
                message: format!("Itinerary generation requires an API key (set {API_KEY_ENV})"),
            })
    }
}
