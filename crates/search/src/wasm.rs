//! WASM bindings for search utilities.

use crate::{parse_candidates, Ranker};
use wasm_bindgen::prelude::*;

/// Calculate relevance score of a label against a query.
///
/// # Arguments
/// * `query` - Search query
/// * `label` - Candidate label
/// * `description` - Candidate abstract (pass an empty string if none)
///
/// # Returns
/// Relevance score (higher is better)
#[wasm_bindgen]
pub fn relevance_score(query: &str, label: &str, description: &str) -> f64 {
    crate::relevance_score(query, label, Some(description))
}

/// Calculate Levenshtein edit distance between two strings.
#[wasm_bindgen]
pub fn edit_distance(a: &str, b: &str) -> usize {
    crate::levenshtein_distance(a, b)
}

/// Normalize text the way the ranker compares it.
#[wasm_bindgen]
pub fn normalize_text(text: &str) -> String {
    crate::normalize(text)
}

/// Rank items and return them with scores as JSON.
///
/// # Arguments
/// * `query` - Search query
/// * `items_json` - JSON array of objects with `label` and optional `description`
/// * `max_results` - Maximum results to return (0 for all)
///
/// # Returns
/// JSON array of `{item, score}` objects, most relevant first
#[wasm_bindgen]
pub fn rank_items(query: &str, items_json: &str, max_results: usize) -> String {
    let items = match parse_candidates(items_json) {
        Ok(items) => items,
        Err(_) => return "[]".to_string(),
    };

    let results = Ranker::new().top(query, items, max_results);

    serde_json::to_string(&results).unwrap_or_else(|_| "[]".to_string())
}
