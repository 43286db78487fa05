//! Configuration loading
//!
//! A TOML file with `[weights]`, `[output]` and `[logging]` sections. Every
//! key is optional.

use anyhow::{bail, Context, Result};
use astrorank_search::RelevanceWeights;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Root configuration schema
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ConfigSchema {
    #[serde(default)]
    pub weights: RelevanceWeights,

    #[serde(default)]
    pub output: OutputConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Result output defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct OutputConfig {
    /// Maximum results to print (0 for all)
    #[serde(default)]
    pub limit: usize,

    /// Print scores next to labels
    #[serde(default)]
    pub show_scores: bool,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Level filter, e.g. `warn` or `astrorank=debug`
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "warn".to_string()
}

/// Configuration wrapper
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub schema: ConfigSchema,
    pub path: Option<String>,
}

impl Config {
    /// Load configuration from a file path or use defaults
    pub fn load(path: Option<&str>) -> Result<Self> {
        let config_path = path
            .map(String::from)
            .or_else(find_config_file);

        let schema = if let Some(ref p) = config_path {
            load_config_file(p)?
        } else {
            ConfigSchema::default()
        };

        Ok(Self {
            schema,
            path: config_path,
        })
    }
}

/// Find configuration file in standard locations
fn find_config_file() -> Option<String> {
    let candidates = [
        ".astrorank.toml",
        "astrorank.toml",
        ".config/astrorank.toml",
    ];

    candidates
        .into_iter()
        .find(|candidate| Path::new(candidate).exists())
        .map(String::from)
}

/// Load, parse and validate a TOML configuration file
fn load_config_file(path: &str) -> Result<ConfigSchema> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file {}", path))?;

    parse_config(&content).with_context(|| format!("Invalid config file {}", path))
}

fn parse_config(content: &str) -> Result<ConfigSchema> {
    let schema: ConfigSchema = toml::from_str(content)?;

    if !schema.weights.is_valid() {
        bail!("weights must be finite and non-negative");
    }

    Ok(schema)
}
