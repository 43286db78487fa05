//! Relevance scoring for search results.
//!
//! A candidate's score is the edit-distance similarity between the
//! normalized query and label, plus flat bonuses when the label contains
//! the query, when it starts with the query, and when the description
//! contains the query. Scores are unbounded above and only meaningful
//! relative to each other.

use crate::fuzzy::similarity;
use crate::normalize::normalize;
use serde::{Deserialize, Serialize};

/// Bonus weights added on top of the edit-distance similarity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RelevanceWeights {
    /// Label contains the query
    pub exact_match_bonus: f64,
    /// Label starts with the query
    pub starts_with_bonus: f64,
    /// Description contains the query
    pub description_bonus: f64,
}

impl Default for RelevanceWeights {
    fn default() -> Self {
        Self {
            exact_match_bonus: 0.3,
            starts_with_bonus: 0.2,
            description_bonus: 0.1,
        }
    }
}

impl RelevanceWeights {
    /// Returns true if every weight is finite and non-negative.
    pub fn is_valid(&self) -> bool {
        [self.exact_match_bonus, self.starts_with_bonus, self.description_bonus]
            .iter()
            .all(|w| w.is_finite() && *w >= 0.0)
    }
}

/// Per-term decomposition of a relevance score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    /// Edit-distance similarity between query and label, in `[0, 1]`
    pub similarity: f64,
    /// Bonus for the label containing the query
    pub exact_match_bonus: f64,
    /// Bonus for the label starting with the query
    pub starts_with_bonus: f64,
    /// Bonus for the description containing the query
    pub description_bonus: f64,
}

impl ScoreBreakdown {
    /// Sum of all terms.
    #[inline]
    pub fn total(&self) -> f64 {
        self.similarity + self.exact_match_bonus + self.starts_with_bonus + self.description_bonus
    }
}

/// Score already-normalized text.
///
/// `query` must come from [`normalize`]; label and description are
/// normalized here.
pub(crate) fn score_normalized(
    query: &str,
    label: &str,
    description: Option<&str>,
    weights: &RelevanceWeights,
) -> ScoreBreakdown {
    let label = normalize(label);
    let description = description.map(normalize).unwrap_or_default();

    let bonus = |hit: bool, weight: f64| if hit { weight } else { 0.0 };

    ScoreBreakdown {
        similarity: similarity(query, &label),
        exact_match_bonus: bonus(label.contains(query), weights.exact_match_bonus),
        starts_with_bonus: bonus(label.starts_with(query), weights.starts_with_bonus),
        description_bonus: bonus(description.contains(query), weights.description_bonus),
    }
}

/// Break down the relevance of a label and optional description against a
/// raw query, using the default weights.
///
/// # Arguments
/// * `query` - The search query as typed
/// * `label` - Display label of the candidate
/// * `description` - Optional abstract of the candidate
pub fn score_breakdown(query: &str, label: &str, description: Option<&str>) -> ScoreBreakdown {
    score_normalized(&normalize(query), label, description, &RelevanceWeights::default())
}

/// Calculate the relevance score of a candidate against a raw query.
///
/// # Returns
/// Relevance score (higher is better)
///
/// # Example
/// ```
/// use astrorank_search::relevance_score;
///
/// let exact = relevance_score("Mars", "Mars (planet)", None);
/// let near = relevance_score("Mars", "March", None);
/// assert!(exact > near);
/// assert!((exact - 1.5).abs() < 1e-9);
/// ```
pub fn relevance_score(query: &str, label: &str, description: Option<&str>) -> f64 {
    score_breakdown(query, label, description).total()
}
