//! Rankable records.

use crate::error::{Result, SearchError};
use serde::{Deserialize, Serialize};

/// Anything that can be ranked: a display label plus an optional
/// free-text description.
pub trait Rankable {
    /// Primary display name.
    fn label(&self) -> &str;

    /// Abstract or summary, if any.
    fn description(&self) -> Option<&str> {
        None
    }
}

impl<T: Rankable + ?Sized> Rankable for &T {
    fn label(&self) -> &str {
        (**self).label()
    }

    fn description(&self) -> Option<&str> {
        (**self).description()
    }
}

impl Rankable for str {
    fn label(&self) -> &str {
        self
    }
}

impl Rankable for String {
    fn label(&self) -> &str {
        self
    }
}

/// A search result as delivered by the caller.
///
/// Fields other than `label` and `description` are kept in `payload` and
/// serialized back unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    /// Display label (empty if absent)
    #[serde(default)]
    pub label: String,
    /// Optional abstract
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Opaque pass-through attributes (thumbnail, URI, dates...)
    #[serde(flatten)]
    pub payload: serde_json::Map<String, serde_json::Value>,
}

impl Candidate {
    /// Creates a candidate with only a label.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            ..Default::default()
        }
    }

    /// Sets the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Adds a pass-through attribute.
    pub fn with_payload(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.payload.insert(key.into(), value);
        self
    }
}

impl Rankable for Candidate {
    fn label(&self) -> &str {
        &self.label
    }

    fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

/// Parse a JSON array of candidate objects.
///
/// # Example
/// ```
/// use astrorank_search::parse_candidates;
///
/// let items = parse_candidates(r#"[{"label": "Vega", "uri": "dbr:Vega"}]"#).unwrap();
/// assert_eq!(items[0].label, "Vega");
/// assert_eq!(items[0].payload["uri"], "dbr:Vega");
/// ```
pub fn parse_candidates(json: &str) -> Result<Vec<Candidate>> {
    let value: serde_json::Value = serde_json::from_str(json)?;
    if !value.is_array() {
        return Err(SearchError::InvalidInput(
            "expected a JSON array of candidates".to_string(),
        ));
    }

    Ok(serde_json::from_value(value)?)
}
