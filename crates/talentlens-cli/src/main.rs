//! TalentLens — Candidate Assessment Scoring Engine
//! Entry point for the command-line scorer.

mod config;

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use serde::Serialize;
use talentlens_common::ScoringRequest;
use talentlens_scoring::AssessmentEngine;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// Score candidate assessment responses into reports.
#[derive(Parser, Debug)]
#[command(name = "talentlens")]
#[command(about = "Candidate assessment scoring engine", long_about = None)]
#[command(version)]
#[command(after_help = "Environment:\n  TALENTLENS_CONFIG   path to the engine config (default: talentlens.toml)\n  RUST_LOG            log filter (default: talentlens=debug,info)")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
enum Commands {
    /// Score one request file (JSON or YAML)
    Score {
        /// Scoring request
        input: PathBuf,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
    /// Score a list of requests (JSON or YAML)
    Batch {
        /// File holding a list of scoring requests
        input: PathBuf,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
}

fn is_yaml(path: &Path) -> bool {
    matches!(path.extension().and_then(|e| e.to_str()), Some("yaml") | Some("yml"))
}

/// Parse a batch file: a JSON or YAML list of scoring requests.
fn parse_batch(content: &str, path: &Path, strict: bool) -> anyhow::Result<Vec<ScoringRequest>> {
    let requests: Vec<ScoringRequest> = if is_yaml(path) {
        serde_yaml::from_str(content)?
    } else {
        serde_json::from_str(content)?
    };

    for (idx, request) in requests.iter().enumerate() {
        if let Err(e) = request.validate() {
            if strict {
                return Err(e).with_context(|| format!("request #{idx} failed validation"));
            }
            warn!(request = idx, "Scoring request failed validation: {e}");
        }
    }
    Ok(requests)
}

fn render<T: Serialize>(value: &T, pretty: bool) -> anyhow::Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(json)
}

async fn emit(json: String, out: Option<&Path>) -> anyhow::Result<()> {
    match out {
        Some(path) => {
            tokio::fs::write(path, json + "\n")
                .await
                .with_context(|| format!("writing {}", path.display()))?;
            info!("Report written to {}", path.display());
        }
        None => println!("{json}"),
    }
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("talentlens=debug,info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let config = match config::Config::load() {
        Ok(c) => {
            info!(
                "Configuration loaded. Completion window: {}s..{}s",
                c.engine.reliability.min_completion_seconds, c.engine.reliability.max_completion_seconds
            );
            c
        }
        Err(e) => {
            warn!("Could not load {}: {e}", config::Config::resolve_path());
            warn!("Using built-in engine defaults.");
            config::Config::default()
        }
    };
    let engine = AssessmentEngine::new(config.engine.clone());

    match cli.command {
        Commands::Score { input, out } => {
            let content = tokio::fs::read_to_string(&input)
                .await
                .with_context(|| format!("reading {}", input.display()))?;
            let request = if config.output.strict {
                ScoringRequest::from_str_with_path(&content, &input)?
            } else {
                let request: ScoringRequest = if is_yaml(&input) {
                    serde_yaml::from_str(&content)?
                } else {
                    serde_json::from_str(&content)?
                };
                if let Err(e) = request.validate() {
                    warn!("Scoring request failed validation: {e}");
                }
                request
            };

            let report = engine.score_request(&request);
            emit(render(&report, config.output.pretty)?, out.as_deref()).await?;
        }
        Commands::Batch { input, out } => {
            let content = tokio::fs::read_to_string(&input)
                .await
                .with_context(|| format!("reading {}", input.display()))?;
            let requests = parse_batch(&content, &input, config.output.strict)?;
            info!("Scoring {} requests", requests.len());

            let reports = engine.score_batch(&requests);
            emit(render(&reports, config.output.pretty)?, out.as_deref()).await?;
        }
    }

    Ok(())
}
