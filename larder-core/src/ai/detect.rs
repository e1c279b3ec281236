//! Finding food items in a photo with the vision model.

use crate::ai::prompts::{render_detect_prompt, DETECT_PROMPT_NAME};
use crate::ai::{AiClient, AiError, ChatMessage, ChatRequest, ImageData, Usage};
use crate::detection::parse_detections;
use crate::image::UploadedImage;
use crate::types::DetectedItem;

/// Result of a detection call.
pub struct DetectResult {
    pub items: Vec<DetectedItem>,
    pub usage: Usage,
}

/// Ask the vision model for food items and their boxes.
///
/// An unparseable reply is not an error: it yields no items.
pub async fn detect_food_items(
    ai_client: &dyn AiClient,
    image: &UploadedImage,
) -> Result<DetectResult, AiError> {
    let photo = ImageData::new(image.content_type.clone(), image.data.clone());
    let message = ChatMessage::user_with_images(render_detect_prompt(), vec![photo]);
    let request = ChatRequest {
        messages: vec![message],
    };

    let response = ai_client.complete(DETECT_PROMPT_NAME, request).await?;
    let items = parse_detections(&response.content);

    tracing::debug!(count = items.len(), "Parsed detections");

    Ok(DetectResult {
        items,
        usage: response.usage,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::FakeAiClient;

    fn photo() -> UploadedImage {
        UploadedImage {
            data: vec![0xff, 0xd8, 0xff],
            content_type: "image/jpeg".to_string(),
        }
    }

    #[tokio::test]
    async fn test_detect_parses_reply() {
        let client = FakeAiClient::with_response(
            DETECT_PROMPT_NAME,
            r#"Here you go:
```json
[{"label": "Tomato", "box_2d": [10, 20, 30, 40]}, {"label": "basil"}]
```"#,
        );
        let result = detect_food_items(&client, &photo()).await.unwrap();
        assert_eq!(result.items.len(), 2);
        assert_eq!(result.items[0].label.as_deref(), Some("Tomato"));
        assert!(result.items[1].bbox.is_none());
    }

    #[tokio::test]
    async fn test_detect_garbage_reply_is_empty() {
        let client = FakeAiClient::with_response(DETECT_PROMPT_NAME, "I see vegetables.");
        let result = detect_food_items(&client, &photo()).await.unwrap();
        assert!(result.items.is_empty());
    }

    #[tokio::test]
    async fn test_detect_propagates_api_error() {
        let client = FakeAiClient::new();
        assert!(detect_food_items(&client, &photo()).await.is_err());
    }
}
