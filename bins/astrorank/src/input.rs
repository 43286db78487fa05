//! Reading candidates from files or stdin.
//!
//! Two shapes are accepted: a plain JSON array of candidate objects, or a
//! SPARQL 1.1 JSON results document as returned by DBpedia and Wikidata.

use anyhow::{Context, Result};
use astrorank_search::{parse_candidates, Candidate};
use clap::ValueEnum;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::io::Read;
use std::path::Path;

/// Shape of the candidate input
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum InputFormat {
    /// JSON array of `{label, description?, ...}` objects
    Candidates,
    /// SPARQL JSON results (`results.bindings[]`)
    Sparql,
}

/// Binding names that supply the description
const DESCRIPTION_BINDINGS: &[&str] = &["abstract", "description"];

#[derive(Debug, Deserialize)]
struct SparqlResults {
    results: SparqlBindings,
}

#[derive(Debug, Deserialize)]
struct SparqlBindings {
    #[serde(default)]
    bindings: Vec<BTreeMap<String, SparqlTerm>>,
}

/// One bound RDF term; only its lexical value matters here.
#[derive(Debug, Deserialize)]
struct SparqlTerm {
    value: String,
}

/// Read input text from a file, or from stdin when no path (or `-`) is given
pub fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(p) if p != Path::new("-") => std::fs::read_to_string(p)
            .with_context(|| format!("Failed to read input file {}", p.display())),
        _ => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read candidates from stdin")?;
            Ok(buf)
        }
    }
}

/// Decode candidates in the given format
pub fn decode(text: &str, format: InputFormat) -> Result<Vec<Candidate>> {
    match format {
        InputFormat::Candidates => {
            parse_candidates(text).context("Failed to decode candidate list")
        }
        InputFormat::Sparql => decode_sparql(text),
    }
}

fn decode_sparql(text: &str) -> Result<Vec<Candidate>> {
    let document: SparqlResults =
        serde_json::from_str(text).context("Failed to decode SPARQL JSON results")?;

    Ok(document
        .results
        .bindings
        .into_iter()
        .map(binding_to_candidate)
        .collect())
}

fn binding_to_candidate(mut binding: BTreeMap<String, SparqlTerm>) -> Candidate {
    let label = binding
        .remove("label")
        .map(|term| term.value)
        .unwrap_or_default();

    let description = DESCRIPTION_BINDINGS
        .iter()
        .find_map(|name| binding.remove(*name))
        .map(|term| term.value);

    let payload = binding
        .into_iter()
        .map(|(name, term)| (name, serde_json::Value::String(term.value)))
        .collect();

    Candidate {
        label,
        description,
        payload,
    }
}
