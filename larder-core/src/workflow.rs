//! The three user actions: detect ingredients, suggest recipes, show a recipe.
//!
//! These sit between the outer surface and the model calls. Remote failures are
//! logged and absorbed into empty results so the caller always gets something
//! it can display.

use crate::additional::mark_additional_ingredients;
use crate::ai::{detect_food_items, generate_recipe_text, suggest_recipe_names, AiClient};
use crate::annotate::{annotate_image_bytes, encode_jpeg};
use crate::error::RecipeError;
use crate::image::UploadedImage;
use crate::sections::parse_recipe_sections;
use crate::tally::{selection_labels, tally_from_detections, tally_from_selection_labels};
use crate::types::{RecipeConstraints, RecipeDetails, RecipeSections};

pub const STATUS_NO_IMAGE: &str = "Please upload an image.";
pub const STATUS_NOTHING_DETECTED: &str = "No ingredients detected. Try another image.";
pub const STATUS_NO_VALID_INGREDIENTS: &str = "No valid ingredients found.";
pub const STATUS_SELECT_INGREDIENTS: &str = "Please select ingredients first";
pub const STATUS_INVALID_SERVING_SIZE: &str = "Please enter a valid serving size";
pub const STATUS_NO_RECIPES: &str = "No recipes generated";
pub const STATUS_CHOOSE_RECIPE: &str = "Choose Recipe";

/// What the user sees after uploading a photo.
#[derive(Debug, Clone)]
pub struct DetectionOutcome {
    /// Annotated JPEG, or the uploaded bytes when nothing was drawn.
    pub image: Vec<u8>,
    /// Selection labels, e.g. `"Tomato (2)"`.
    pub choices: Vec<String>,
    pub status: String,
}

/// Recipe names to choose from, with a status line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuggestionOutcome {
    pub names: Vec<String>,
    pub status: String,
}

fn detection_status(image: Vec<u8>, status: impl Into<String>) -> DetectionOutcome {
    DetectionOutcome {
        image,
        choices: vec![],
        status: status.into(),
    }
}

pub async fn detect_ingredients(
    ai_client: &dyn AiClient,
    image_bytes: Vec<u8>,
) -> DetectionOutcome {
    if image_bytes.is_empty() {
        return detection_status(image_bytes, STATUS_NO_IMAGE);
    }

    let upload = match UploadedImage::from_bytes(image_bytes.clone()) {
        Ok(upload) => upload,
        Err(e) => {
            tracing::warn!(error = %e, "Rejected uploaded image");
            return detection_status(image_bytes, e.to_string());
        }
    };

    tracing::info!(content_type = %upload.content_type, "Starting food detection");

    let items = match detect_food_items(ai_client, &upload).await {
        Ok(result) => result.items,
        Err(e) => {
            tracing::warn!(error = %e, "Food detection failed");
            vec![]
        }
    };

    tracing::info!(count = items.len(), "Received detections");

    if items.is_empty() {
        return detection_status(image_bytes, STATUS_NOTHING_DETECTED);
    }

    let tally = tally_from_detections(&items);
    if tally.is_empty() {
        return detection_status(image_bytes, STATUS_NO_VALID_INGREDIENTS);
    }

    let choices = selection_labels(&tally);

    let image = match annotate_image_bytes(&image_bytes, &items)
        .and_then(|annotated| encode_jpeg(&annotated.image))
    {
        Ok(jpeg) => jpeg,
        Err(e) => {
            tracing::warn!(error = %e, "Annotation failed, showing original image");
            image_bytes
        }
    };

    let status = format!("Found {} different items. Select below.", choices.len());
    tracing::info!(choices = ?choices, "{}", status);

    DetectionOutcome {
        image,
        choices,
        status,
    }
}

pub async fn suggest_recipes<S: AsRef<str>>(
    ai_client: &dyn AiClient,
    selection: &[S],
    constraints: &RecipeConstraints,
) -> SuggestionOutcome {
    let outcome = |names: Vec<String>, status: &str| SuggestionOutcome {
        names,
        status: status.to_string(),
    };

    if selection.is_empty() {
        return outcome(vec![], STATUS_SELECT_INGREDIENTS);
    }
    if constraints.serving_size == 0 {
        return outcome(vec![], STATUS_INVALID_SERVING_SIZE);
    }

    let tally = tally_from_selection_labels(selection);

    let names = match suggest_recipe_names(ai_client, &tally, constraints).await {
        Ok(result) => result.names,
        Err(e) => {
            tracing::warn!(error = %e, "Recipe suggestion failed");
            vec![]
        }
    };

    if names.is_empty() {
        return outcome(vec![], STATUS_NO_RECIPES);
    }

    tracing::info!(count = names.len(), "Suggested recipes");
    outcome(names, STATUS_CHOOSE_RECIPE)
}

/// Generate, split and annotate a detailed recipe.
///
/// Returns `Ok(None)` when no recipe is chosen. A failed model call gives a
/// recipe with every section empty.
pub async fn show_recipe<S: AsRef<str>>(
    ai_client: &dyn AiClient,
    recipe_name: &str,
    selection: &[S],
    constraints: &RecipeConstraints,
) -> Result<Option<RecipeDetails>, RecipeError> {
    let name = recipe_name.trim();
    if name.is_empty() {
        return Ok(None);
    }
    if constraints.serving_size == 0 {
        return Err(RecipeError::InvalidServingSize);
    }

    let tally = tally_from_selection_labels(selection);

    let mut sections = match generate_recipe_text(ai_client, name, &tally, constraints).await {
        Ok(text) => parse_recipe_sections(&text),
        Err(e) => {
            tracing::warn!(recipe_name = name, error = %e, "Recipe generation failed");
            RecipeSections::default()
        }
    };

    sections.ingredients = mark_additional_ingredients(&sections.ingredients, &tally);

    Ok(Some(RecipeDetails {
        name: name.to_string(),
        constraints: constraints.clone(),
        sections,
    }))
}
