//! Marking recipe ingredients the user did not select.
//!
//! The model is asked to flag extra ingredients itself, but rarely does so
//! reliably. This pass compares each ingredient line against the selection
//! and suffixes unmatched lines with `(Additional)`.
//!
//! Matching is loose on purpose and under-flags: "pea" matches "peach",
//! "oil" matches "boiled". Lines the extractor cannot read are left alone.

use std::collections::BTreeSet;
use std::sync::LazyLock;

use regex::Regex;

use crate::tally::IngredientTally;

pub const ADDITIONAL_MARKER: &str = "(Additional)";

/// The model's own long-form marker, normalized to [`ADDITIONAL_MARKER`].
static LONG_MARKER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\s*\(additional ingredient\)").expect("Invalid additional marker regex")
});

/// Optional quantity and unit, then the ingredient name up to `(`, `,` or end of line.
static INGREDIENT_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?:\d+\s*(?:cups?|tbsp|tsp|tablespoons?|teaspoons?|lbs?|oz|cloves?|pieces?|medium|large|small)?\s+)([a-zA-Z\s]+?)(?:\s*[\(,]|$)",
    )
    .expect("Invalid ingredient name regex")
});

/// The last `)` in a line and everything after it.
static LAST_CLOSE_PAREN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\)([^)]*)$").expect("Invalid closing paren regex"));

/// Pull the bare ingredient name out of a line like `"2 cups rice, rinsed"`.
pub fn extract_ingredient_name(line: &str) -> Option<String> {
    INGREDIENT_NAME
        .captures(line)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_lowercase())
}

/// Selected names plus a naive singular/plural variant of each.
fn known_names(selected: &IngredientTally) -> BTreeSet<String> {
    let mut names = BTreeSet::new();
    for name in selected.names() {
        let name = name.trim().to_lowercase();
        let variant = match name.strip_suffix('s') {
            Some(singular) => singular.to_string(),
            None => format!("{}s", name),
        };
        names.insert(name);
        names.insert(variant);
    }
    names
}

/// Whether `a` and `b` name the same ingredient under the loose rule.
///
/// True if either contains the other, or any word longer than two characters
/// in one appears inside the other.
pub fn names_match(a: &str, b: &str) -> bool {
    let shares_word = |words_of: &str, within: &str| {
        words_of
            .split_whitespace()
            .filter(|w| w.chars().count() > 2)
            .any(|w| within.contains(w))
    };
    a.contains(b) || b.contains(a) || shares_word(a, b) || shares_word(b, a)
}

fn mark_line(line: &str, known: &BTreeSet<String>) -> String {
    if line.to_lowercase().contains("(additional ingredient)") {
        return LONG_MARKER.replace_all(line, " (Additional)").into_owned();
    }

    if line.contains(ADDITIONAL_MARKER) {
        return line.to_string();
    }

    let Some(name) = extract_ingredient_name(line) else {
        return line.to_string();
    };

    if known.iter().any(|k| names_match(&name, k)) {
        return line.to_string();
    }

    if line.contains('(') {
        LAST_CLOSE_PAREN
            .replace(line, ") (Additional)$1")
            .into_owned()
    } else {
        format!("{} {}", line, ADDITIONAL_MARKER)
    }
}

/// Suffix ingredient lines that don't match the selection with `(Additional)`.
///
/// Blank lines pass through. Running this on its own output changes nothing.
pub fn mark_additional_ingredients(ingredients: &str, selected: &IngredientTally) -> String {
    let known = known_names(selected);
    ingredients
        .split('\n')
        .map(|line| {
            if line.trim().is_empty() {
                line.to_string()
            } else {
                mark_line(line, &known)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}
