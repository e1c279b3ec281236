//! AI client configuration.

use std::env;
use thiserror::Error;

use super::prompts::{DETECT_PROMPT_NAME, SUGGEST_PROMPT_NAME};

/// Default base URL: Gemini's OpenAI-compatible endpoint.
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/openai";

/// Default model for finding ingredients in photos.
pub const DEFAULT_VISION_MODEL: &str = "gemini-2.5-pro";

/// Default model for recipe name suggestions.
pub const DEFAULT_SUGGEST_MODEL: &str = "gemini-2.5-flash";

/// Default model for detailed recipes.
pub const DEFAULT_RECIPE_MODEL: &str = "gemini-2.5-pro";

/// Default rate limit between requests in milliseconds.
pub const DEFAULT_RATE_LIMIT_MS: u64 = 500;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),
}

/// AI client configuration.
#[derive(Debug, Clone)]
pub struct AiConfig {
    pub api_key: String,
    /// Base URL for the API.
    pub base_url: String,
    pub vision_model: String,
    pub suggest_model: String,
    pub recipe_model: String,
    /// Milliseconds to wait between requests.
    pub rate_limit_ms: u64,
}

impl AiConfig {
    /// Configuration with default endpoint and models for the given key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            vision_model: DEFAULT_VISION_MODEL.to_string(),
            suggest_model: DEFAULT_SUGGEST_MODEL.to_string(),
            recipe_model: DEFAULT_RECIPE_MODEL.to_string(),
            rate_limit_ms: DEFAULT_RATE_LIMIT_MS,
        }
    }

    /// Load configuration from environment variables.
    ///
    /// Required:
    /// - `LARDER_API_KEY`: API key for the model provider
    ///
    /// Optional:
    /// - `LARDER_AI_BASE_URL`: API base URL
    /// - `LARDER_VISION_MODEL`: Model for ingredient detection (default: "gemini-2.5-pro")
    /// - `LARDER_SUGGEST_MODEL`: Model for name suggestions (default: "gemini-2.5-flash")
    /// - `LARDER_RECIPE_MODEL`: Model for detailed recipes (default: "gemini-2.5-pro")
    /// - `LARDER_AI_RATE_LIMIT_MS`: Rate limit in ms (default: 500)
    pub fn from_env() -> Result<Self, ConfigError> {
        let api_key = env::var("LARDER_API_KEY")
            .map_err(|_| ConfigError::MissingEnvVar("LARDER_API_KEY".to_string()))?;

        let base_url =
            env::var("LARDER_AI_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

        let vision_model =
            env::var("LARDER_VISION_MODEL").unwrap_or_else(|_| DEFAULT_VISION_MODEL.to_string());

        let suggest_model =
            env::var("LARDER_SUGGEST_MODEL").unwrap_or_else(|_| DEFAULT_SUGGEST_MODEL.to_string());

        let recipe_model =
            env::var("LARDER_RECIPE_MODEL").unwrap_or_else(|_| DEFAULT_RECIPE_MODEL.to_string());

        let rate_limit_ms = env::var("LARDER_AI_RATE_LIMIT_MS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_RATE_LIMIT_MS);

        Ok(Self {
            api_key,
            base_url,
            vision_model,
            suggest_model,
            recipe_model,
            rate_limit_ms,
        })
    }

    /// Model to use for a prompt, keyed by prompt name.
    pub fn model_for(&self, prompt_name: &str) -> &str {
        match prompt_name {
            DETECT_PROMPT_NAME => &self.vision_model,
            SUGGEST_PROMPT_NAME => &self.suggest_model,
            _ => &self.recipe_model,
        }
    }
}
