//! Prompt for finding food items and their bounding boxes in a photo.

/// Prompt name, also used to pick the vision model.
pub const DETECT_PROMPT_NAME: &str = "detect";

pub fn render_detect_prompt() -> String {
    r#"Detect all prominent food ingredients in the image. For each item, provide:
- label: Name of the fruit/vegetable
- box_2d: Bounding box coordinates [ymin, xmin, ymax, xmax] normalized to 0-1000

Return the response as a JSON array of objects, e.g.:
[
    {"label": "apple", "box_2d": [100, 200, 300, 400]},
    {"label": "banana", "box_2d": [150, 250, 350, 450]}
]"#
    .to_string()
}
