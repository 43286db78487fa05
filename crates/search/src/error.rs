//! Error types for the search crate.
//!
//! Scoring and ranking are total; only decoding candidates from external
//! input can fail.

use thiserror::Error;

/// Result type alias for search operations.
pub type Result<T> = std::result::Result<T, SearchError>;

/// Errors that can occur while preparing candidates for ranking.
#[derive(Debug, Error)]
pub enum SearchError {
    /// Input had the wrong shape
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// JSON parsing error
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Error code for programmatic handling.
/// Range: 11xxx for search errors.
#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchErrorCode {
    /// Input had the wrong shape
    InvalidInput = 11001,
    /// JSON parsing error
    JsonParsing = 11002,
}

impl SearchError {
    /// Returns the error code for this error.
    pub fn code(&self) -> SearchErrorCode {
        match self {
            SearchError::InvalidInput(_) => SearchErrorCode::InvalidInput,
            SearchError::Json(_) => SearchErrorCode::JsonParsing,
        }
    }
}
