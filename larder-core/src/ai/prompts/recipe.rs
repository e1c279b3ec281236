//! Prompt for a detailed recipe with fixed section headers.

use crate::tally::IngredientTally;
use crate::types::RecipeConstraints;

/// Prompt name, also used to pick the recipe model.
pub const RECIPE_PROMPT_NAME: &str = "recipe";

/// Cooking time guidance for the serving size.
pub fn time_adjustment(serving_size: u32) -> &'static str {
    if serving_size > 6 {
        "Increase cooking time by 15-25% for larger quantities."
    } else if serving_size < 3 {
        "Reduce cooking time by 10-15% for smaller quantities."
    } else {
        "Standard cooking times apply."
    }
}

/// Render the detailed recipe prompt.
///
/// The section headers requested here must stay in sync with the ones
/// `parse_recipe_sections` looks for.
pub fn render_recipe_prompt(
    recipe_name: &str,
    ingredients: &IngredientTally,
    constraints: &RecipeConstraints,
) -> String {
    let notes = match constraints.notes.as_deref().map(str::trim) {
        Some(notes) if !notes.is_empty() => format!("- Also consider: {}\n", notes),
        _ => String::new(),
    };

    format!(
        r#"Create a detailed {diet} {cuisine} recipe for "{name}" using: {ingredients}.
The recipe should serve {servings} people.

Structure the response with these exact sections using simple text formatting (NO asterisks, NO markdown symbols):

INGREDIENTS:
List all ingredients with quantities scaled for {servings} servings, marking which are from detected ingredients and which are additional. Follow {cuisine} cuisine traditions.

PREP TIME:
Just the number of minutes for preparation (adjust for serving {servings} people)

COOK TIME:
Just the number of minutes for cooking (adjust for serving {servings} people - {time_adjustment})

EQUIPMENT NEEDED:
List all kitchen tools and equipment needed for {cuisine} cooking

SERVING SIZE:
Confirm this recipe serves {servings} people

CALORIES:
Approximate calories per single serving (not total)

INSTRUCTIONS:
Numbered step-by-step cooking instructions following {cuisine} cooking techniques and methods (timing adjusted for {servings} servings)

TIPS FOR SUCCESS:
Helpful tips and variations specific to {cuisine} cuisine

Requirements:
- Recipe must be {diet}
- Follow authentic {cuisine} flavors and techniques
- Scale all ingredients and timing for {servings} servings
- Provide nutrition information per single serving only
{notes}- Do not use any asterisks, bold formatting, or markdown symbols
- Use plain text formatting only"#,
        diet = constraints.diet.specification(),
        cuisine = constraints.cuisine,
        name = recipe_name,
        ingredients = ingredients.describe(),
        servings = constraints.serving_size,
        time_adjustment = time_adjustment(constraints.serving_size),
        notes = notes,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sections::parse_recipe_sections;
    use crate::types::DietType;

    #[test]
    fn test_time_adjustment_bounds() {
        assert!(time_adjustment(7).starts_with("Increase"));
        assert!(time_adjustment(6).starts_with("Standard"));
        assert!(time_adjustment(3).starts_with("Standard"));
        assert!(time_adjustment(2).starts_with("Reduce"));
    }

    #[test]
    fn test_render_prompt() {
        let tally: IngredientTally = ["egg"].into_iter().collect();
        let constraints = RecipeConstraints {
            diet: DietType::NonVegetarian,
            cuisine: "French".to_string(),
            serving_size: 8,
            notes: None,
        };
        let prompt = render_recipe_prompt("Omelette", &tally, &constraints);

        assert!(prompt.contains(r#"recipe for "Omelette" using: 1 egg."#));
        assert!(prompt.contains("can include meat, fish, or poultry"));
        assert!(prompt.contains("Increase cooking time"));
        assert!(!prompt.contains("Also consider"));
    }

    #[test]
    fn test_prompt_requests_every_parsed_section() {
        // Echoing the prompt back fills every section the parser knows about.
        let prompt = render_recipe_prompt(
            "Soup",
            &IngredientTally::new(),
            &RecipeConstraints::default(),
        );
        let sections = parse_recipe_sections(&prompt);
        assert!(!sections.ingredients.is_empty());
        assert!(!sections.prep_time.is_empty());
        assert!(!sections.cook_time.is_empty());
        assert!(!sections.equipment.is_empty());
        assert!(!sections.serving_size.is_empty());
        assert!(!sections.calories.is_empty());
        assert!(!sections.instructions.is_empty());
        assert!(!sections.tips.is_empty());
    }
}
