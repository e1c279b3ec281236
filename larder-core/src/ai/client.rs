//! AI client implementation for OpenAI-compatible chat APIs.

use async_openai::{
    config::OpenAIConfig,
    types::chat::{
        ChatCompletionRequestMessage, ChatCompletionRequestMessageContentPartImage,
        ChatCompletionRequestMessageContentPartText, ChatCompletionRequestUserMessageArgs,
        ChatCompletionRequestUserMessageContent, ChatCompletionRequestUserMessageContentPart,
        CreateChatCompletionRequestArgs, ImageUrl,
    },
    Client,
};
use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tokio::sync::Mutex;
use tokio::time::Instant;

use super::config::{AiConfig, ConfigError};
use super::types::{ChatMessage, ChatRequest, ChatResponse, Usage};

#[derive(Error, Debug)]
pub enum AiError {
    #[error("API error: {0}")]
    Api(String),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Trait for AI clients.
#[async_trait]
pub trait AiClient: Send + Sync {
    /// Complete a chat request.
    ///
    /// The `prompt_name` identifies which prompt is being sent; implementations
    /// use it to pick a model.
    async fn complete(
        &self,
        prompt_name: &str,
        request: ChatRequest,
    ) -> Result<ChatResponse, AiError>;
}

/// AI client with rate limiting, for any OpenAI-compatible endpoint.
pub struct OpenAiClient {
    client: Client<OpenAIConfig>,
    config: AiConfig,
    last_request: Arc<Mutex<Option<Instant>>>,
}

impl OpenAiClient {
    /// Create a new client with the given configuration.
    pub fn new(config: AiConfig) -> Self {
        let openai_config = OpenAIConfig::new()
            .with_api_key(&config.api_key)
            .with_api_base(&config.base_url);

        Self {
            client: Client::with_config(openai_config),
            config,
            last_request: Arc::new(Mutex::new(None)),
        }
    }

    /// Create a client configured from environment variables.
    pub fn from_env() -> Result<Self, AiError> {
        Ok(Self::new(AiConfig::from_env()?))
    }

    /// Apply rate limiting between requests.
    async fn rate_limit(&self) {
        let mut last = self.last_request.lock().await;

        if let Some(last_time) = *last {
            let elapsed = last_time.elapsed();
            let min_interval = Duration::from_millis(self.config.rate_limit_ms);

            if elapsed < min_interval {
                tokio::time::sleep(min_interval - elapsed).await;
            }
        }

        *last = Some(Instant::now());
    }

    fn user_content(msg: &ChatMessage) -> ChatCompletionRequestUserMessageContent {
        if msg.images.is_empty() {
            return msg.content.clone().into();
        }

        let mut parts: Vec<ChatCompletionRequestUserMessageContentPart> =
            vec![ChatCompletionRequestMessageContentPartText {
                text: msg.content.clone(),
            }
            .into()];

        parts.extend(msg.images.iter().map(|image| {
            ChatCompletionRequestMessageContentPartImage {
                image_url: ImageUrl {
                    url: image.to_data_url(),
                    detail: None,
                },
            }
            .into()
        }));

        parts.into()
    }

    /// Convert our ChatMessage to async-openai's format.
    fn to_openai_message(msg: &ChatMessage) -> Result<ChatCompletionRequestMessage, AiError> {
        ChatCompletionRequestUserMessageArgs::default()
            .content(Self::user_content(msg))
            .build()
            .map(Into::into)
            .map_err(|e| AiError::Api(format!("Failed to build user message: {}", e)))
    }
}

#[async_trait]
impl AiClient for OpenAiClient {
    async fn complete(
        &self,
        prompt_name: &str,
        request: ChatRequest,
    ) -> Result<ChatResponse, AiError> {
        self.rate_limit().await;

        let model = self.config.model_for(prompt_name);

        let messages: Vec<ChatCompletionRequestMessage> = request
            .messages
            .iter()
            .map(Self::to_openai_message)
            .collect::<Result<Vec<_>, _>>()?;

        let openai_request = CreateChatCompletionRequestArgs::default()
            .model(model)
            .messages(messages)
            .build()
            .map_err(|e| AiError::Api(e.to_string()))?;

        tracing::debug!(prompt_name = prompt_name, model = model, "Calling AI API");

        let response = self
            .client
            .chat()
            .create(openai_request)
            .await
            .map_err(|e| AiError::Api(e.to_string()))?;

        let content = response
            .choices
            .first()
            .and_then(|c| c.message.content.clone())
            .unwrap_or_default();

        let usage = response
            .usage
            .map(|u| Usage {
                prompt_tokens: u.prompt_tokens,
                completion_tokens: u.completion_tokens,
                total_tokens: u.total_tokens,
            })
            .unwrap_or_default();

        tracing::debug!(
            prompt_name = prompt_name,
            total_tokens = usage.total_tokens,
            "AI API call complete"
        );

        Ok(ChatResponse { content, usage })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::ImageData;

    #[test]
    fn test_plain_user_message_is_text() {
        let content = OpenAiClient::user_content(&ChatMessage::user("hello"));
        assert_eq!(
            content,
            ChatCompletionRequestUserMessageContent::Text("hello".to_string())
        );
    }

    #[test]
    fn test_user_message_with_image_has_parts() {
        let msg = ChatMessage::user_with_images(
            "what is this?",
            vec![ImageData::new("image/jpeg", vec![1, 2, 3])],
        );
        let parts = match OpenAiClient::user_content(&msg) {
            ChatCompletionRequestUserMessageContent::Array(parts) => parts,
            other => panic!("expected multi-part content, got {:?}", other),
        };
        assert_eq!(parts.len(), 2);
        assert!(matches!(
            &parts[1],
            ChatCompletionRequestUserMessageContentPart::ImageUrl(img)
                if img.image_url.url == "data:image/jpeg;base64,AQID"
        ));
    }

    #[test]
    fn test_missing_config_is_config_error() {
        let err = AiError::from(ConfigError::MissingEnvVar("LARDER_API_KEY".to_string()));
        assert!(matches!(err, AiError::Config(_)));
        assert_eq!(
            err.to_string(),
            "Configuration error: Missing required environment variable: LARDER_API_KEY"
        );
    }

    #[test]
    fn test_messages_convert_to_user_role() {
        let msg = ChatMessage::user("hi");
        let converted = OpenAiClient::to_openai_message(&msg).unwrap();
        assert!(matches!(converted, ChatCompletionRequestMessage::User(_)));
    }
}
