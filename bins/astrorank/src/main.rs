//! astrorank - rank astronomy search results by fuzzy relevance.
//!
//! Reads candidates fetched from DBpedia or Wikidata (or any JSON list of
//! labeled records) and prints them most relevant first.

use anyhow::Result;
use astrorank_cli::output::{format_count, format_duration, format_score, print_ranked, Status};
use astrorank_search::{levenshtein_distance, Candidate, Ranker};
use astrorank_telemetry::{TelemetryConfig, Timer};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::debug;

mod config;
mod input;

use config::Config;
use input::InputFormat;

/// Level filter used by --verbose
const VERBOSE_FILTER: &str = "astrorank=debug,astrorank_search=debug,astrorank_telemetry=debug";

/// Rank astronomy search results by fuzzy relevance
#[derive(Parser)]
#[command(name = "astrorank")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to a configuration file
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Rank candidates against a query
    Rank {
        /// Search term as typed by the user
        query: String,

        /// Input file (reads stdin if omitted or "-")
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Shape of the input
        #[arg(short, long, value_enum, default_value_t = InputFormat::Candidates)]
        format: InputFormat,

        /// Maximum results to print (0 for all)
        #[arg(short, long)]
        limit: Option<usize>,

        /// Print scores next to results
        #[arg(long)]
        scores: bool,

        /// Output as JSON
        #[arg(long)]
        json: bool,

        /// Score candidates on all cores
        #[arg(long)]
        parallel: bool,
    },

    /// Show how a single label scores against a query
    Score {
        /// Search term
        query: String,

        /// Candidate label
        label: String,

        /// Candidate description
        #[arg(short, long)]
        description: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Levenshtein distance between two strings
    Distance {
        /// First string
        a: String,

        /// Second string
        b: String,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            Status::error(&format!("{:#}", e));
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = Config::load(cli.config.as_deref())?;

    let level = if cli.verbose {
        VERBOSE_FILTER.to_string()
    } else {
        config.schema.logging.level.clone()
    };
    astrorank_telemetry::init_with_config(TelemetryConfig::with_level(level))?;

    if let Some(path) = &config.path {
        debug!(path = %path, "Loaded configuration");
    }

    let ranker = Ranker::new().with_weights(config.schema.weights);
    debug!(weights = ?ranker.weights(), "Ranker configured");

    match cli.command {
        Commands::Rank { query, input: path, format, limit, scores, json, parallel } => {
            let text = input::read_input(path.as_deref())?;
            let candidates = input::decode(&text, format)?;

            let options = RankOptions {
                limit: limit.unwrap_or(config.schema.output.limit),
                show_scores: scores || config.schema.output.show_scores,
                json,
                parallel,
            };
            rank(&ranker, &query, candidates, &options)
        }

        Commands::Score { query, label, description, json } => {
            let candidate = Candidate {
                label,
                description,
                ..Default::default()
            };
            score(&ranker, &query, &candidate, json)
        }

        Commands::Distance { a, b } => {
            println!("{}", levenshtein_distance(&a, &b));
            Ok(())
        }
    }
}

struct RankOptions {
    limit: usize,
    show_scores: bool,
    json: bool,
    parallel: bool,
}

fn rank(ranker: &Ranker, query: &str, candidates: Vec<Candidate>, options: &RankOptions) -> Result<()> {
    let total = candidates.len();
    let timer = Timer::start("rank");

    let results = if options.parallel {
        ranker.top_par(query, candidates, options.limit)
    } else {
        ranker.top(query, candidates, options.limit)
    };

    let elapsed = timer.stop();
    debug!(
        candidates = total,
        shown = results.len(),
        elapsed = %format_duration(elapsed),
        "Ranking finished"
    );

    if options.json {
        if options.show_scores {
            println!("{}", serde_json::to_string_pretty(&results)?);
        } else {
            let items: Vec<Candidate> = results.into_iter().map(|r| r.item).collect();
            println!("{}", serde_json::to_string_pretty(&items)?);
        }
        return Ok(());
    }

    if results.is_empty() {
        Status::warning("No results found");
        return Ok(());
    }

    Status::header(&format!("Results for \"{}\"", query));
    for (i, result) in results.iter().enumerate() {
        print_ranked(i + 1, &result.item.label, options.show_scores.then_some(result.score));
    }
    println!();
    Status::success(&format!(
        "Showing {} of {}",
        results.len(),
        format_count(total, "candidate", "candidates")
    ));

    Ok(())
}

fn score(ranker: &Ranker, query: &str, candidate: &Candidate, json: bool) -> Result<()> {
    let breakdown = ranker.score(query, candidate);

    if json {
        let report = serde_json::json!({
            "query": query,
            "label": candidate.label,
            "description": candidate.description,
            "breakdown": breakdown,
            "total": breakdown.total(),
        });
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    Status::header(&format!("\"{}\" vs \"{}\"", query, candidate.label));
    println!("  similarity         {}", format_score(breakdown.similarity));
    println!("  label contains     {}", format_score(breakdown.exact_match_bonus));
    println!("  label starts with  {}", format_score(breakdown.starts_with_bonus));
    println!("  description match  {}", format_score(breakdown.description_bonus));
    println!("  total              {}", format_score(breakdown.total()));

    Ok(())
}
