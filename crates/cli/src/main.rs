//! # citepress-cli: A CLI for `citepress`
//!
//! Fetches paginated records from an API endpoint, runs the summarization
//! pipeline, prints the result table, and caches the display rows to disk.

mod display;

use anyhow::Result;
use citepress::constants::{DEFAULT_API_URL, DEFAULT_CACHE_FILE, DEFAULT_SUMMARY_MODEL};
use citepress::providers::factory::create_summarizer;
use citepress::PipelineBuilder;
use clap::Parser;
use display::{build_rows, linked_citations, persist_rows};
use std::fs::File;
use std::path::PathBuf;
use tracing::{info, warn};
use tracing_subscriber::{fmt, EnvFilter};

// --- CLI Definition ---

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// The API endpoint URL to fetch records from
    #[arg(default_value = DEFAULT_API_URL)]
    api_url: String,
    /// The summarization model to use
    #[arg(long, default_value = DEFAULT_SUMMARY_MODEL)]
    model: String,
    /// The file the display rows are cached to after a successful run
    #[arg(long, default_value = DEFAULT_CACHE_FILE)]
    cache_file: PathBuf,
}

// --- Main Application Entry ---

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    // Setup logging to a file, keeping stdout for user output.
    let log_file = File::create("citepress-cli.log")?;
    let subscriber = fmt::Subscriber::builder()
        .with_writer(log_file)
        .with_env_filter(EnvFilter::from_default_env())
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let cli = Cli::parse();
    info!("Processing {} with model {}", cli.api_url, cli.model);

    let summarizer = create_summarizer(&cli.model)?;
    let pipeline = PipelineBuilder::new().summarizer(summarizer).build()?;

    println!("⏳ Fetching data from '{}'...", cli.api_url);
    let results = match pipeline.process(&cli.api_url).await {
        Ok(results) => results,
        Err(e) => {
            eprintln!("❌ {e}");
            std::process::exit(1);
        }
    };

    println!("✅ Data processed successfully!");
    if results.is_empty() {
        println!("No records found.");
        return Ok(());
    }

    println!("\nCitations with links:");
    println!(
        "{}",
        serde_json::to_string_pretty(&linked_citations(&results))?
    );

    let rows = build_rows(&results);
    println!("\nProcessed Data:");
    for row in &rows {
        println!("Response: {}", row.response);
        println!("Source:   {}", row.source);
    }

    // Best-effort cache write: a failure is reported but not fatal.
    if let Err(e) = persist_rows(&cli.cache_file, &rows) {
        warn!("Failed to write cache file: {e}");
        eprintln!("⚠️ Could not write '{}': {e}", cli.cache_file.display());
    }

    Ok(())
}
