//! Detailed recipe generation.

use crate::ai::prompts::{render_recipe_prompt, RECIPE_PROMPT_NAME};
use crate::ai::{AiClient, AiError, ChatMessage, ChatRequest};
use crate::tally::IngredientTally;
use crate::types::RecipeConstraints;

/// Ask the model for the full recipe text. The reply is returned raw.
pub async fn generate_recipe_text(
    ai_client: &dyn AiClient,
    recipe_name: &str,
    ingredients: &IngredientTally,
    constraints: &RecipeConstraints,
) -> Result<String, AiError> {
    let prompt = render_recipe_prompt(recipe_name, ingredients, constraints);
    let request = ChatRequest {
        messages: vec![ChatMessage::user(prompt)],
    };

    let response = ai_client.complete(RECIPE_PROMPT_NAME, request).await?;

    tracing::debug!(
        recipe_name = recipe_name,
        total_tokens = response.usage.total_tokens,
        "Generated recipe"
    );

    Ok(response.content)
}
