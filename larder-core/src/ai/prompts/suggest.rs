//! Prompt for suggesting recipe names from selected ingredients.

use crate::tally::IngredientTally;
use crate::types::RecipeConstraints;

/// Prompt name, also used to pick the suggestion model.
pub const SUGGEST_PROMPT_NAME: &str = "suggest";

/// Render the name-suggestion prompt.
pub fn render_suggest_prompt(
    ingredients: &IngredientTally,
    constraints: &RecipeConstraints,
) -> String {
    let diet = constraints.diet.specification();
    let cuisine = &constraints.cuisine;
    let servings = constraints.serving_size;
    let notes = match constraints.notes.as_deref().map(str::trim) {
        Some(notes) if !notes.is_empty() => format!("- Also consider: {}\n", notes),
        _ => String::new(),
    };

    format!(
        r#"Suggest exactly 5 {diet} {cuisine} recipe names using these ingredients: {ingredients}.
The recipes should serve {servings} people.

Requirements:
- Recipes must be {diet}
- Must follow {cuisine} cuisine style and flavors
- Should use 2-3 main detected ingredients
- Assume common pantry staples are available
- Be practical for home cooking
- Suitable for serving {servings} people
{notes}- ONLY provide recipe names, no descriptions or explanations

Format as a simple numbered list with only recipe names:
1. Recipe Name 1
2. Recipe Name 2
3. Recipe Name 3
4. Recipe Name 4
5. Recipe Name 5"#,
        diet = diet,
        cuisine = cuisine,
        ingredients = ingredients.describe(),
        servings = servings,
        notes = notes,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::DietType;

    #[test]
    fn test_render_prompt() {
        let tally: IngredientTally = ["tomato", "tomato", "basil"].into_iter().collect();
        let constraints = RecipeConstraints {
            diet: DietType::Vegetarian,
            cuisine: "Italian".to_string(),
            serving_size: 2,
            notes: Some("  no nuts ".to_string()),
        };
        let prompt = render_suggest_prompt(&tally, &constraints);

        assert!(prompt.contains("2 tomatos, 1 basil"));
        assert!(prompt.contains("strictly vegetarian"));
        assert!(prompt.contains("Italian cuisine style"));
        assert!(prompt.contains("serve 2 people"));
        assert!(prompt.contains("- Also consider: no nuts\n"));
    }

    #[test]
    fn test_blank_notes_omitted() {
        let constraints = RecipeConstraints {
            notes: Some("   ".to_string()),
            ..Default::default()
        };
        let prompt = render_suggest_prompt(&IngredientTally::new(), &constraints);
        assert!(!prompt.contains("Also consider"));
    }
}
