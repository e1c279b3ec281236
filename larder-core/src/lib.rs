pub mod additional;
pub mod ai;
pub mod annotate;
pub mod detection;
pub mod error;
pub mod image;
pub mod sections;
pub mod suggest;
pub mod tally;
pub mod types;
pub mod workflow;

pub use additional::mark_additional_ingredients;
pub use annotate::{annotate_detections, annotate_image_bytes, encode_jpeg, AnnotatedImage};
pub use detection::parse_detections;
pub use error::{AnnotateError, ImageError, RecipeError};
pub use image::{validate_image, UploadedImage, MAX_FILE_SIZE};
pub use sections::parse_recipe_sections;
pub use suggest::parse_recipe_names;
pub use tally::{
    selection_labels, tally_from_detections, tally_from_selection_labels, IngredientTally,
};
pub use types::{
    DetectedItem, DietType, NormalizedBox, RecipeConstraints, RecipeDetails, RecipeSections,
};
pub use workflow::{
    detect_ingredients, show_recipe, suggest_recipes, DetectionOutcome, SuggestionOutcome,
};
