//! AI client module for the remote vision and language models.
//!
//! This module provides:
//! - `AiClient` trait for abstracting AI providers
//! - `OpenAiClient` for any OpenAI-compatible chat endpoint
//! - `FakeAiClient` for tests
//! - Prompt templates and the three model tasks (detect, suggest, recipe)
//!
//! # Configuration
//!
//! `AiConfig::from_env()` reads:
//!
//! - `LARDER_API_KEY` (required): API key for the model provider
//! - `LARDER_AI_BASE_URL` (optional): API base URL
//! - `LARDER_VISION_MODEL`, `LARDER_SUGGEST_MODEL`, `LARDER_RECIPE_MODEL`
//!   (optional): model per task
//! - `LARDER_AI_RATE_LIMIT_MS` (optional): Delay between requests in ms
//!
//! # Example
//!
//! ```ignore
//! use larder_core::ai::{AiClient, ChatMessage, ChatRequest, OpenAiClient};
//!
//! let client = OpenAiClient::from_env()?;
//!
//! let request = ChatRequest {
//!     messages: vec![ChatMessage::user("Hello!")],
//!     ..Default::default()
//! };
//!
//! let response = client.complete("suggest", request).await?;
//! println!("Response: {}", response.content);
//! ```

mod client;
mod config;
mod detect;
mod fake;
pub mod prompts;
mod recipe;
mod suggest;
mod types;

pub use client::{AiClient, AiError, OpenAiClient};
pub use config::{AiConfig, ConfigError};
pub use detect::{detect_food_items, DetectResult};
pub use fake::FakeAiClient;
pub use recipe::generate_recipe_text;
pub use suggest::{suggest_recipe_names, SuggestResult};
pub use types::{ChatMessage, ChatRequest, ChatResponse, ImageData, Usage};
