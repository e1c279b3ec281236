//! Fake AI client for testing.
//!
//! Returns canned responses chosen by prompt matching, so tests run without
//! network access or API costs.

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use super::client::{AiClient, AiError};
use super::types::{ChatRequest, ChatResponse, Usage};

/// A fake AI client for testing.
///
/// A pattern equal to the prompt name wins outright. Otherwise a response is
/// picked when the prompt name or any message text contains its registered
/// substring (case-insensitive), trying patterns in registration order. With no
/// match, the default response is returned, or an error if there is none.
#[derive(Debug, Default)]
pub struct FakeAiClient {
    responses: Vec<(String, String)>,
    default_response: Option<String>,
    calls: AtomicUsize,
}

impl FakeAiClient {
    /// Create a FakeAiClient with no registered responses.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a FakeAiClient that returns a specific response for prompts containing a substring.
    pub fn with_response(prompt_contains: &str, response: &str) -> Self {
        Self::new().and_response(prompt_contains, response)
    }

    /// Add a response for prompts containing a specific substring.
    pub fn and_response(mut self, prompt_contains: &str, response: &str) -> Self {
        self.responses
            .push((prompt_contains.to_lowercase(), response.to_string()));
        self
    }

    /// Set the default response when no pattern matches.
    pub fn with_default_response(mut self, response: &str) -> Self {
        self.default_response = Some(response.to_string());
        self
    }

    /// Number of completed or failed calls so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::Relaxed)
    }
}

#[async_trait]
impl AiClient for FakeAiClient {
    async fn complete(
        &self,
        prompt_name: &str,
        request: ChatRequest,
    ) -> Result<ChatResponse, AiError> {
        self.calls.fetch_add(1, Ordering::Relaxed);

        let name = prompt_name.to_lowercase();
        let mut haystack = name.clone();
        for msg in &request.messages {
            haystack.push('\n');
            haystack.push_str(&msg.content.to_lowercase());
        }

        let content = self
            .responses
            .iter()
            .find(|(pattern, _)| *pattern == name)
            .or_else(|| {
                self.responses
                    .iter()
                    .find(|(pattern, _)| haystack.contains(pattern.as_str()))
            })
            .map(|(_, response)| response.clone())
            .or_else(|| self.default_response.clone())
            .ok_or_else(|| {
                AiError::Api(format!(
                    "FakeAiClient: No response configured for prompt '{}'",
                    prompt_name
                ))
            })?;

        Ok(ChatResponse {
            content,
            usage: Usage::default(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::ChatMessage;

    fn request(text: &str) -> ChatRequest {
        ChatRequest {
            messages: vec![ChatMessage::user(text)],
        }
    }

    #[tokio::test]
    async fn test_fake_client_matching() {
        let client = FakeAiClient::with_response("hello", "world");
        let result = client
            .complete("test", request("Say hello to the user"))
            .await
            .unwrap();
        assert_eq!(result.content, "world");
        assert_eq!(client.calls(), 1);
    }

    #[tokio::test]
    async fn test_fake_client_matches_prompt_name() {
        let client = FakeAiClient::with_response("detect", "[]");
        let result = client
            .complete("detect", request("anything"))
            .await
            .unwrap();
        assert_eq!(result.content, "[]");
    }

    #[tokio::test]
    async fn test_fake_client_prompt_name_beats_content() {
        let client = FakeAiClient::with_response("detect", "detections")
            .and_response("suggest", "suggestions");
        let result = client
            .complete("suggest", request("use the detected ingredients"))
            .await
            .unwrap();
        assert_eq!(result.content, "suggestions");
    }

    #[tokio::test]
    async fn test_fake_client_case_insensitive() {
        let client = FakeAiClient::with_response("HELLO", "world");
        let result = client
            .complete("test", request("hello there"))
            .await
            .unwrap();
        assert_eq!(result.content, "world");
    }

    #[tokio::test]
    async fn test_fake_client_first_registered_wins() {
        let client = FakeAiClient::with_response("soup", "first")
            .and_response("tomato", "second");
        let result = client
            .complete("test", request("tomato soup"))
            .await
            .unwrap();
        assert_eq!(result.content, "first");
    }

    #[tokio::test]
    async fn test_fake_client_no_match() {
        let client = FakeAiClient::new();
        let result = client.complete("test", request("random prompt")).await;
        assert!(result.is_err());
        assert_eq!(client.calls(), 1);
    }

    #[tokio::test]
    async fn test_fake_client_default_response() {
        let client = FakeAiClient::new().with_default_response("default");
        let result = client
            .complete("test", request("random prompt"))
            .await
            .unwrap();
        assert_eq!(result.content, "default");
    }
}
