//! Reading detected items out of the vision model's reply.
//!
//! The model is asked for a bare JSON array but often wraps it in prose or a
//! code fence. The first `[ {...} ]` span is extracted and each element is read
//! leniently: missing or malformed fields become `None` instead of failing the
//! whole reply.

use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;

use crate::types::{DetectedItem, NormalizedBox};

static JSON_ARRAY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)\[\s*\{.*?\}\s*\]").expect("Invalid JSON array regex"));

/// Parse detected items from a model reply. Never fails; unusable replies yield
/// an empty list.
pub fn parse_detections(reply: &str) -> Vec<DetectedItem> {
    let Some(m) = JSON_ARRAY.find(reply) else {
        tracing::warn!(
            reply_len = reply.len(),
            "No JSON array found in detection response"
        );
        return vec![];
    };

    let values: Vec<Value> = match serde_json::from_str(m.as_str()) {
        Ok(values) => values,
        Err(e) => {
            tracing::warn!("Failed to parse detection JSON: {}", e);
            return vec![];
        }
    };

    let items: Vec<DetectedItem> = values.iter().map(item_from_value).collect();
    tracing::debug!(count = items.len(), "Parsed detection annotations");
    items
}

fn item_from_value(value: &Value) -> DetectedItem {
    let label = value
        .get("label")
        .and_then(Value::as_str)
        .map(str::to_string);

    let bbox = value
        .get("box_2d")
        .and_then(Value::as_array)
        .filter(|coords| coords.len() == 4)
        .and_then(|coords| {
            let mut out = [0.0; 4];
            for (slot, v) in out.iter_mut().zip(coords) {
                *slot = v.as_f64()?;
            }
            Some(NormalizedBox::from_coords(out))
        });

    DetectedItem { label, bbox }
}
