//! Fuzzy relevance ranking for astronomy search results.
//!
//! This crate provides:
//! - Text normalization (parenthetical qualifiers, case, whitespace)
//! - Levenshtein edit distance
//! - Relevance scoring with label, prefix and description bonuses
//! - Stable ranking, optionally scored in parallel
//! - WASM bindings for browser usage
//!
//! # Example
//!
//! ```
//! use astrorank_search::{rank, Candidate};
//!
//! let results = vec![
//!     Candidate::new("Venus"),
//!     Candidate::new("March"),
//!     Candidate::new("Mars (planet)").with_description("Fourth planet from the Sun"),
//! ];
//!
//! let ranked = rank("mars", results);
//! assert_eq!(ranked[0].label, "Mars (planet)");
//! assert_eq!(ranked[2].label, "Venus");
//! ```

mod candidate;
mod error;
mod fuzzy;
mod normalize;
mod ranker;
mod relevance;

#[cfg(feature = "wasm")]
mod wasm;

pub use candidate::{parse_candidates, Candidate, Rankable};
pub use error::{Result, SearchError, SearchErrorCode};
pub use fuzzy::{levenshtein_distance, similarity};
pub use normalize::normalize;
pub use ranker::{rank, rank_scored, Ranker, ScoredCandidate};
pub use relevance::{relevance_score, score_breakdown, RelevanceWeights, ScoreBreakdown};
