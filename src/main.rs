mod classifier;
mod comparator;
mod config;
mod error;
mod extractor;
mod fetcher;
mod matcher;
mod models;
mod profile;
mod report;

use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use scraper::Html;
use tracing::info;

use crate::config::Config;
use crate::extractor::ExtractMode;
use crate::models::{Classification, Report};

/// Compare two retailer listing pages and report which products the second
/// retailer undercuts.
#[derive(Parser)]
#[command(name = "price_watch")]
struct Cli {
    /// Baseline listing page (your store)
    url_a: String,
    /// Competing listing page
    url_b: String,
    /// JSON file overriding source profiles and defaults
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Similarity threshold on a 0-100 scale
    #[arg(short, long)]
    threshold: Option<f64>,
    /// Fail on product cards missing a name or price
    #[arg(long)]
    strict: bool,
    /// Print the report as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => Config::default(),
    };
    if let Some(threshold) = cli.threshold {
        config.threshold = threshold;
    }
    config.strict |= cli.strict;
    config.validate()?;

    let client = fetcher::build_client(config.timeout())?;
    let doc_a = fetcher::fetch_document(&client, &cli.url_a).context("fetching first source")?;
    let doc_b = fetcher::fetch_document(&client, &cli.url_b).context("fetching second source")?;

    let classification = compare_documents(&config, &doc_a, &doc_b)?;
    let report = Report::new(&cli.url_a, &cli.url_b, config.threshold, classification);

    let mut stdout = io::stdout().lock();
    if cli.json {
        report::write_json(&report, &mut stdout)?;
    } else {
        report::write_text(&report, &mut stdout)?;
    }
    Ok(())
}

fn compare_documents(config: &Config, doc_a: &Html, doc_b: &Html) -> Result<Classification> {
    let mode = ExtractMode::from_strict(config.strict);
    let records_a = extractor::extract(doc_a, &config.source_a, mode).context("extracting first source")?;
    let records_b = extractor::extract(doc_b, &config.source_b, mode).context("extracting second source")?;
    info!(source_a = records_a.len(), source_b = records_b.len(), "extracted products");

    let matched = comparator::compare(&records_a, &records_b, config.threshold);
    let classification = classifier::classify(&matched);
    info!(
        at_risk = classification.at_risk.len(),
        safe = classification.safe.len(),
        "classification finished"
    );
    Ok(classification)
}
