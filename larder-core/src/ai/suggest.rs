//! Recipe name suggestions from selected ingredients.

use crate::ai::prompts::{render_suggest_prompt, SUGGEST_PROMPT_NAME};
use crate::ai::{AiClient, AiError, ChatMessage, ChatRequest, Usage};
use crate::suggest::parse_recipe_names;
use crate::tally::IngredientTally;
use crate::types::RecipeConstraints;

/// Result of a suggestion call.
pub struct SuggestResult {
    pub names: Vec<String>,
    pub usage: Usage,
}

/// Ask the text model for up to five recipe names.
pub async fn suggest_recipe_names(
    ai_client: &dyn AiClient,
    ingredients: &IngredientTally,
    constraints: &RecipeConstraints,
) -> Result<SuggestResult, AiError> {
    if ingredients.is_empty() {
        return Ok(SuggestResult {
            names: vec![],
            usage: Usage::default(),
        });
    }

    let prompt = render_suggest_prompt(ingredients, constraints);
    let request = ChatRequest {
        messages: vec![ChatMessage::user(prompt)],
    };

    let response = ai_client.complete(SUGGEST_PROMPT_NAME, request).await?;

    Ok(SuggestResult {
        names: parse_recipe_names(&response.content),
        usage: response.usage,
    })
}
