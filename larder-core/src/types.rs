//! Shared data types passed between detection, tallying and recipe generation.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Side length of the grid detector boxes are normalized to.
pub const NORMALIZED_GRID: u32 = 1000;

/// A bounding box on the 0-1000 grid, in the detector's `[ymin, xmin, ymax, xmax]` order.
///
/// Serialized as that four-element array, the same shape the detector returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "[f64; 4]", into = "[u32; 4]")]
pub struct NormalizedBox {
    pub ymin: u32,
    pub xmin: u32,
    pub ymax: u32,
    pub xmax: u32,
}

impl NormalizedBox {
    /// Build a box from raw detector coordinates, rounding and clamping each to the grid.
    pub fn from_coords(coords: [f64; 4]) -> Self {
        let clamp = |v: f64| -> u32 {
            if v.is_nan() {
                0
            } else {
                v.round().clamp(0.0, NORMALIZED_GRID as f64) as u32
            }
        };
        Self {
            ymin: clamp(coords[0]),
            xmin: clamp(coords[1]),
            ymax: clamp(coords[2]),
            xmax: clamp(coords[3]),
        }
    }

    /// Scale to pixel coordinates `(x1, y1, x2, y2)` for an image of the given size.
    ///
    /// Each axis uses `round(normalized / 1000 * dimension)`.
    pub fn to_pixels(&self, width: u32, height: u32) -> (i32, i32, i32, i32) {
        let scale = |v: u32, dim: u32| -> i32 {
            ((v as f64 / NORMALIZED_GRID as f64) * dim as f64).round() as i32
        };
        (
            scale(self.xmin, width),
            scale(self.ymin, height),
            scale(self.xmax, width),
            scale(self.ymax, height),
        )
    }
}

impl From<[f64; 4]> for NormalizedBox {
    fn from(coords: [f64; 4]) -> Self {
        Self::from_coords(coords)
    }
}

impl From<NormalizedBox> for [u32; 4] {
    fn from(b: NormalizedBox) -> Self {
        [b.ymin, b.xmin, b.ymax, b.xmax]
    }
}

/// One item reported by the vision detector.
///
/// Both fields are optional because the detector's output is untrusted; records
/// missing what a consumer needs are skipped by that consumer.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DetectedItem {
    pub label: Option<String>,
    #[serde(rename = "box_2d")]
    pub bbox: Option<NormalizedBox>,
}

impl DetectedItem {
    pub fn new(label: impl Into<String>, coords: [f64; 4]) -> Self {
        Self {
            label: Some(label.into()),
            bbox: Some(NormalizedBox::from_coords(coords)),
        }
    }

    /// The label trimmed and lowercased, or `None` if missing or blank.
    pub fn normalized_label(&self) -> Option<String> {
        self.label
            .as_deref()
            .map(normalize_name)
            .filter(|l| !l.is_empty())
    }
}

/// Trim and lowercase an ingredient name. Every tally key goes through this.
pub fn normalize_name(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Dietary restriction chosen by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DietType {
    Vegetarian,
    NonVegetarian,
    #[default]
    Any,
}

impl DietType {
    /// Phrase inserted into prompts to describe the restriction.
    pub fn specification(&self) -> &'static str {
        match self {
            DietType::Vegetarian => "strictly vegetarian (no meat, fish, or poultry)",
            DietType::NonVegetarian => "can include meat, fish, or poultry",
            DietType::Any => "",
        }
    }
}

impl fmt::Display for DietType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DietType::Vegetarian => "Vegetarian",
            DietType::NonVegetarian => "Non-Vegetarian",
            DietType::Any => "Any",
        };
        f.write_str(name)
    }
}

impl FromStr for DietType {
    type Err = String;

    /// Accepts the display names as well as `veg`/`non-veg`, ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "vegetarian" | "veg" => Ok(DietType::Vegetarian),
            "non-vegetarian" | "non-veg" | "nonvegetarian" => Ok(DietType::NonVegetarian),
            "any" | "" => Ok(DietType::Any),
            other => Err(format!(
                "Unknown diet: {}. Valid diets: vegetarian, non-vegetarian, any",
                other
            )),
        }
    }
}

/// Everything besides the ingredients that shapes a generated recipe.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeConstraints {
    pub diet: DietType,
    pub cuisine: String,
    pub serving_size: u32,
    /// Free-text requests from the user, passed through to the prompt.
    pub notes: Option<String>,
}

impl Default for RecipeConstraints {
    fn default() -> Self {
        Self {
            diet: DietType::Any,
            cuisine: "Any".to_string(),
            serving_size: 4,
            notes: None,
        }
    }
}

/// A detailed recipe response split into its eight fixed sections.
///
/// Every field holds the lines found under the matching header, newline-joined,
/// or an empty string when the header never appeared.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeSections {
    pub ingredients: String,
    pub prep_time: String,
    pub cook_time: String,
    pub equipment: String,
    pub serving_size: String,
    pub calories: String,
    pub instructions: String,
    pub tips: String,
}

impl RecipeSections {
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

/// A generated recipe ready for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeDetails {
    pub name: String,
    pub constraints: RecipeConstraints,
    pub sections: RecipeSections,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_box_scaling_rounds() {
        let b = NormalizedBox::from_coords([100.0, 200.0, 300.0, 400.0]);
        assert_eq!(b.to_pixels(640, 480), (128, 48, 256, 144));

        // 1/1000 of 333 is 0.333 which rounds down; 2/1000 of 333 rounds up to 1.
        let b = NormalizedBox::from_coords([1.0, 2.0, 3.0, 2.0]);
        assert_eq!(b.to_pixels(333, 333), (1, 0, 1, 1));
    }

    #[test]
    fn test_box_clamps_out_of_range() {
        let b = NormalizedBox::from_coords([-5.0, 1200.0, 999.6, f64::NAN]);
        assert_eq!(
            b,
            NormalizedBox {
                ymin: 0,
                xmin: 1000,
                ymax: 1000,
                xmax: 0
            }
        );
    }

    #[test]
    fn test_normalized_label() {
        let item = DetectedItem::new("  Red Apple ", [0.0, 0.0, 10.0, 10.0]);
        assert_eq!(item.normalized_label(), Some("red apple".to_string()));

        let blank = DetectedItem {
            label: Some("   ".to_string()),
            bbox: None,
        };
        assert_eq!(blank.normalized_label(), None);
        assert_eq!(DetectedItem::default().normalized_label(), None);
    }

    #[test]
    fn test_diet_specification() {
        assert!(DietType::Vegetarian.specification().contains("no meat"));
        assert_eq!(DietType::Any.specification(), "");
        assert_eq!(DietType::NonVegetarian.to_string(), "Non-Vegetarian");
    }

    #[test]
    fn test_diet_from_str() {
        assert_eq!("Vegetarian".parse(), Ok(DietType::Vegetarian));
        assert_eq!("non-veg".parse(), Ok(DietType::NonVegetarian));
        assert_eq!(
            DietType::NonVegetarian.to_string().parse(),
            Ok(DietType::NonVegetarian)
        );
        assert!("vegan".parse::<DietType>().is_err());
    }

    #[test]
    fn test_detected_item_uses_detector_wire_shape() {
        let json = r#"{"label": "apple", "box_2d": [100.4, -5, 2000, 300]}"#;
        let item: DetectedItem = serde_json::from_str(json).unwrap();
        assert_eq!(
            item.bbox,
            Some(NormalizedBox {
                ymin: 100,
                xmin: 0,
                ymax: 1000,
                xmax: 300
            })
        );
        assert_eq!(
            serde_json::to_string(&item).unwrap(),
            r#"{"label":"apple","box_2d":[100,0,1000,300]}"#
        );

        let unboxed: DetectedItem = serde_json::from_str(r#"{"label": "fig"}"#).unwrap();
        assert_eq!(unboxed.bbox, None);
    }
}
