//! Ingredient counting.
//!
//! Detection results and the user's checkbox selection both reduce to an
//! [`IngredientTally`]. The two producers normalize names the same way so a
//! name survives the trip through the `"Title Case (N)"` display format.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::types::{normalize_name, DetectedItem};

/// Trailing `" (N)"` decoration on a selection label.
static COUNT_SUFFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*\(\d+\)$").expect("Invalid count suffix regex"));

/// Ingredient name to occurrence count, kept in first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct IngredientTally {
    entries: Vec<(String, u32)>,
}

impl IngredientTally {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one more occurrence of `name`. Blank names are ignored.
    pub fn add(&mut self, name: &str) {
        let key = normalize_name(name);
        if key.is_empty() {
            return;
        }
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, count)) => *count += 1,
            None => self.entries.push((key, 1)),
        }
    }

    pub fn get(&self, name: &str) -> Option<u32> {
        self.entries
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, count)| *count)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of distinct ingredients.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Sum of all counts.
    pub fn total(&self) -> u32 {
        self.entries.iter().map(|(_, count)| count).sum()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.entries.iter().map(|(k, count)| (k.as_str(), *count))
    }

    /// Render as `"2 tomatos, 1 basil"` for use in prompts.
    ///
    /// Plurals are formed by appending `s`, nothing smarter.
    pub fn describe(&self) -> String {
        self.iter()
            .map(|(name, count)| {
                let plural = if count > 1 { "s" } else { "" };
                format!("{} {}{}", count, name, plural)
            })
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl<'a> FromIterator<&'a str> for IngredientTally {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let mut tally = Self::new();
        for name in iter {
            tally.add(name);
        }
        tally
    }
}

/// Count detected items by label. Items without a usable label are ignored.
pub fn tally_from_detections(items: &[DetectedItem]) -> IngredientTally {
    items
        .iter()
        .filter_map(|item| item.label.as_deref())
        .collect()
}

/// Rebuild a tally from selection labels such as `"Apple (2)"`.
///
/// The parenthesized number is display decoration and is discarded; counts are
/// recomputed from how often each name appears in `labels`.
pub fn tally_from_selection_labels<S: AsRef<str>>(labels: &[S]) -> IngredientTally {
    let mut tally = IngredientTally::new();
    for label in labels {
        tally.add(&COUNT_SUFFIX.replace(label.as_ref(), ""));
    }
    tally
}

/// Labels shown to the user for picking ingredients.
///
/// `"Title Case Name (N)"` when an ingredient was seen more than once, plain
/// `"Title Case Name"` otherwise.
pub fn selection_labels(tally: &IngredientTally) -> Vec<String> {
    tally
        .iter()
        .map(|(name, count)| {
            if count > 1 {
                format!("{} ({})", title_case(name), count)
            } else {
                title_case(name)
            }
        })
        .collect()
}

/// Uppercase the first letter of every alphabetic run, lowercase the rest.
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut at_word_start = true;
    for c in s.chars() {
        if c.is_alphabetic() {
            if at_word_start {
                out.extend(c.to_uppercase());
            } else {
                out.extend(c.to_lowercase());
            }
            at_word_start = false;
        } else {
            out.push(c);
            at_word_start = true;
        }
    }
    out
}
