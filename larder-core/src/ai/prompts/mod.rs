//! AI prompt templates.

pub mod detect;
pub mod recipe;
pub mod suggest;

pub use detect::{render_detect_prompt, DETECT_PROMPT_NAME};
pub use recipe::{render_recipe_prompt, time_adjustment, RECIPE_PROMPT_NAME};
pub use suggest::{render_suggest_prompt, SUGGEST_PROMPT_NAME};
