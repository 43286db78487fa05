//! Ordering candidates by relevance.

use crate::candidate::Rankable;
use crate::normalize::normalize;
use crate::relevance::{score_normalized, RelevanceWeights, ScoreBreakdown};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use tracing::debug;

/// A candidate paired with its relevance score.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredCandidate<T> {
    /// The ranked item, unchanged
    pub item: T,
    /// Relevance score (higher is better)
    pub score: f64,
}

/// Relevance ranker with configurable bonus weights.
///
/// Ranking is a pure function of the query and the candidates: items are
/// only reordered, never modified, and equal scores keep their input order.
///
/// # Example
/// ```
/// use astrorank_search::Ranker;
///
/// let ranked = Ranker::new().rank("Mars", vec!["Venus", "March", "Mars"]);
/// assert_eq!(ranked, vec!["Mars", "March", "Venus"]);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Ranker {
    weights: RelevanceWeights,
}

impl Ranker {
    /// Creates a ranker with the default weights.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the bonus weights.
    pub fn with_weights(mut self, weights: RelevanceWeights) -> Self {
        self.weights = weights;
        self
    }

    /// Current bonus weights.
    pub fn weights(&self) -> &RelevanceWeights {
        &self.weights
    }

    /// Break down the score of one candidate against a raw query.
    pub fn score<T: Rankable + ?Sized>(&self, query: &str, candidate: &T) -> ScoreBreakdown {
        score_normalized(&normalize(query), candidate.label(), candidate.description(), &self.weights)
    }

    /// Rank candidates, returning each with its score.
    pub fn rank_scored<T: Rankable>(&self, query: &str, candidates: Vec<T>) -> Vec<ScoredCandidate<T>> {
        let query = normalize(query);
        debug!(query = %query, candidates = candidates.len(), "Ranking candidates");

        let mut scored: Vec<ScoredCandidate<T>> = candidates
            .into_iter()
            .map(|item| {
                let score = self.score_prepared(&query, &item);
                ScoredCandidate { item, score }
            })
            .collect();

        sort_descending(&mut scored);
        scored
    }

    /// Rank candidates by descending relevance.
    pub fn rank<T: Rankable>(&self, query: &str, candidates: Vec<T>) -> Vec<T> {
        self.rank_scored(query, candidates)
            .into_iter()
            .map(|scored| scored.item)
            .collect()
    }

    /// Rank candidates and keep the best `max_results` (0 keeps all).
    pub fn top<T: Rankable>(&self, query: &str, candidates: Vec<T>, max_results: usize) -> Vec<ScoredCandidate<T>> {
        let mut results = self.rank_scored(query, candidates);
        keep_best(&mut results, max_results);
        results
    }

    /// Same as [`Ranker::top`], scoring candidates on the rayon pool.
    #[cfg(feature = "parallel")]
    pub fn top_par<T: Rankable + Send>(&self, query: &str, candidates: Vec<T>, max_results: usize) -> Vec<ScoredCandidate<T>> {
        let mut results = self.rank_par(query, candidates);
        keep_best(&mut results, max_results);
        results
    }

    /// Same as [`Ranker::rank_scored`], scoring candidates on the rayon pool.
    #[cfg(feature = "parallel")]
    pub fn rank_par<T: Rankable + Send>(&self, query: &str, candidates: Vec<T>) -> Vec<ScoredCandidate<T>> {
        use rayon::prelude::*;

        let query = normalize(query);
        debug!(query = %query, candidates = candidates.len(), "Ranking candidates in parallel");

        // Indexed collect keeps input order, so the stable sort still
        // breaks ties by position.
        let mut scored: Vec<ScoredCandidate<T>> = candidates
            .into_par_iter()
            .map(|item| {
                let score = self.score_prepared(&query, &item);
                ScoredCandidate { item, score }
            })
            .collect();

        sort_descending(&mut scored);
        scored
    }

    #[inline]
    fn score_prepared<T: Rankable>(&self, query: &str, item: &T) -> f64 {
        score_normalized(query, item.label(), item.description(), &self.weights).total()
    }
}

/// Truncate to `max_results`; 0 means unlimited.
fn keep_best<T>(results: &mut Vec<ScoredCandidate<T>>, max_results: usize) {
    if max_results > 0 {
        results.truncate(max_results);
    }
}

/// Stable sort, highest score first.
fn sort_descending<T>(scored: &mut [ScoredCandidate<T>]) {
    scored.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
}

/// Rank candidates with the default weights.
///
/// # Arguments
/// * `query` - The search query as typed
/// * `candidates` - Items to order
///
/// # Returns
/// The same items, most relevant first
pub fn rank<T: Rankable>(query: &str, candidates: Vec<T>) -> Vec<T> {
    Ranker::default().rank(query, candidates)
}

/// Rank candidates with the default weights, keeping their scores.
pub fn rank_scored<T: Rankable>(query: &str, candidates: Vec<T>) -> Vec<ScoredCandidate<T>> {
    Ranker::default().rank_scored(query, candidates)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Candidate;
    use serde_json::json;

    #[test]
    fn test_empty_input() {
        let ranked: Vec<Candidate> = rank("mars", Vec::new());
        assert!(ranked.is_empty());
        let ranked: Vec<Candidate> = rank("", Vec::new());
        assert!(ranked.is_empty());
    }

    #[test]
    fn test_exact_then_near_then_far() {
        let ranked = rank("Mars", vec!["Mars", "March", "Venus"]);
        assert_eq!(ranked, vec!["Mars", "March", "Venus"]);

        let ranked = rank("Mars", vec!["Venus", "March", "Mars"]);
        assert_eq!(ranked, vec!["Mars", "March", "Venus"]);
    }

    #[test]
    fn test_scores_in_rank_order() {
        let scored = rank_scored("Mars", vec!["Venus", "March", "Mars"]);
        assert!((scored[0].score - 1.5).abs() < 1e-9);
        assert!((scored[1].score - 0.6).abs() < 1e-9);
        assert!((scored[2].score - 0.2).abs() < 1e-9);
    }

    #[test]
    fn test_empty_query_keeps_input_order() {
        let input = vec!["Vega", "Altair", "Deneb", "Polaris"];
        let scored = rank_scored("", input.clone());
        assert!(scored.iter().all(|s| (s.score - 0.5).abs() < 1e-9));
        assert_eq!(rank("   ", input.clone()), input);
    }

    #[test]
    fn test_ties_keep_input_order() {
        // Same label, different payload: identical scores.
        let first = Candidate::new("Apollo 11").with_payload("id", json!(1));
        let second = Candidate::new("Apollo 11").with_payload("id", json!(2));
        let ranked = rank("apollo", vec![first.clone(), second.clone()]);
        assert_eq!(ranked, vec![first.clone(), second.clone()]);
        let ranked = rank("apollo", vec![second.clone(), first.clone()]);
        assert_eq!(ranked, vec![second, first]);
    }

    #[test]
    fn test_case_insensitive() {
        let input = vec!["Marsquake", "MARS", "Marsupial", "mars rover"];
        assert_eq!(rank("mars", input.clone()), rank("MARS", input));
    }

    #[test]
    fn test_parenthetical_query_matches_plain() {
        let input = vec![
            Candidate::new("Mercury (planet)"),
            Candidate::new("Mars (planet)"),
            Candidate::new("Mars Express"),
        ];
        let plain = rank_scored("Mars", input.clone());
        let qualified = rank_scored("Mars (planet)", input);
        let order: Vec<&str> = plain.iter().map(|s| s.item.label.as_str()).collect();
        assert_eq!(order, vec!["Mars (planet)", "Mars Express", "Mercury (planet)"]);
        for (a, b) in plain.iter().zip(&qualified) {
            assert_eq!(a.item, b.item);
            assert_eq!(a.score, b.score);
        }
    }

    #[test]
    fn test_description_breaks_tie_but_not_label_match() {
        let described = Candidate::new("Phobos").with_description("The larger moon of Mars");
        let plain = Candidate::new("Phobos");
        let named = Candidate::new("Mars");

        let ranked = rank("mars", vec![plain.clone(), described.clone(), named.clone()]);
        assert_eq!(ranked, vec![named, described.clone(), plain.clone()]);

        let ranker = Ranker::new();
        let delta = ranker.score("mars", &described).total() - ranker.score("mars", &plain).total();
        assert!((delta - 0.1).abs() < 1e-9);
    }

    #[test]
    fn test_self_match_is_maximal() {
        let input = vec!["Saturn V", "Saturn", "Saturnalia", "Satur", "Uranus"];
        let scored = rank_scored("saturn", input);
        assert_eq!(scored[0].item, "Saturn");
        assert!((scored[0].score - 1.5).abs() < 1e-9);
        assert!(scored[1..].iter().all(|s| s.score < scored[0].score));
    }

    #[test]
    fn test_greater_distance_scores_lower() {
        let ranker = Ranker::new();
        let one = ranker.score("nova", "nora").total();
        let two = ranker.score("nova", "nura").total();
        let three = ranker.score("nova", "kura").total();
        assert!(one > two);
        assert!(two > three);
    }

    #[test]
    fn test_candidates_are_not_modified() {
        let input = vec![
            Candidate::new("Gemini 4 (mission)").with_description("  First American EVA  "),
            Candidate::new("gemini"),
        ];
        let mut ranked = rank("Gemini", input.clone());
        ranked.sort_by(|a, b| a.label.cmp(&b.label));
        let mut expected = input;
        expected.sort_by(|a, b| a.label.cmp(&b.label));
        assert_eq!(ranked, expected);
    }

    #[test]
    fn test_top_truncates() {
        let input = vec!["Io", "Europa", "Ganymede", "Callisto"];
        assert_eq!(Ranker::new().top("europa", input.clone(), 2).len(), 2);
        assert_eq!(Ranker::new().top("europa", input.clone(), 0).len(), 4);
        assert_eq!(Ranker::new().top("europa", input, 10)[0].item, "Europa");
    }

    #[test]
    fn test_custom_weights_change_order() {
        // Lunar contains the query, so it wins unless descriptions weigh more.
        let near = Candidate::new("Lunar");
        let described = Candidate::new("Selene").with_description("luna");
        let weights = RelevanceWeights { description_bonus: 5.0, ..Default::default() };

        let ranked = Ranker::new().rank("luna", vec![near.clone(), described.clone()]);
        assert_eq!(ranked[0], near);

        let ranked = Ranker::new().with_weights(weights).rank("luna", vec![near, described.clone()]);
        assert_eq!(ranked[0], described);
    }

    #[test]
    fn test_ranks_borrowed_candidates() {
        let owned = vec![Candidate::new("Andromeda"), Candidate::new("Andromeda Galaxy")];
        let ranked = rank("andromeda galaxy", owned.iter().collect());
        assert_eq!(ranked[0].label, "Andromeda Galaxy");
        assert_eq!(owned.len(), 2);
    }

    #[test]
    fn test_weights_accessor() {
        let weights = RelevanceWeights { exact_match_bonus: 0.7, ..Default::default() };
        assert_eq!(Ranker::new().weights(), &RelevanceWeights::default());
        assert_eq!(Ranker::new().with_weights(weights).weights(), &weights);
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn test_top_par_matches_top() {
        let input = vec!["Io", "Europa", "Ganymede", "Callisto", "Europa Clipper"];
        let ranker = Ranker::new();
        for max_results in [0, 1, 2, 10] {
            let seq: Vec<_> = ranker.top("europa", input.clone(), max_results).into_iter().map(|s| s.item).collect();
            let par: Vec<_> = ranker.top_par("europa", input.clone(), max_results).into_iter().map(|s| s.item).collect();
            assert_eq!(seq, par);
        }
        assert_eq!(ranker.top_par("europa", input.clone(), 0).len(), 5);
        assert_eq!(ranker.top_par("europa", input, 2).len(), 2);
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn test_parallel_matches_sequential() {
        let input: Vec<String> = (0..200).map(|i| format!("Kepler-{}", i % 17)).collect();
        let sequential = rank_scored("kepler-3", input.clone());
        let parallel = Ranker::new().rank_par("kepler-3", input);
        let seq: Vec<_> = sequential.iter().map(|s| (&s.item, s.score)).collect();
        let par: Vec<_> = parallel.iter().map(|s| (&s.item, s.score)).collect();
        assert_eq!(seq, par);
    }
}
