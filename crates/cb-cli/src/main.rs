//! covbot-nlu: classify COVID statistics queries.
//!
//! `covbot-nlu <config.toml> [query...]` classifies one query given on the
//! command line, or one query per line from stdin when none is given.
//! Results are printed as one JSON record per line.

use std::sync::Arc;

use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::EnvFilter;

use cb_cli::batch;
use cb_cli::config::CovbotConfig;
use cb_nlu::{HttpAnnotator, Pipeline};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let mut args = std::env::args().skip(1);

    // ── Load config ─────────────────────────────────────────────
    let config_path = args.next().unwrap_or_else(|| "covbot.toml".to_string());
    let config = CovbotConfig::from_file(&config_path)?;

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr);
    if config.log_json {
        subscriber.json().init();
    } else {
        subscriber.init();
    }

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        config = %config_path,
        "covbot-nlu starting"
    );

    // ── Build pipeline ──────────────────────────────────────────
    let annotator = HttpAnnotator::new(&config.annotator)?;
    let pipeline = Arc::new(Pipeline::new(Arc::new(annotator), &config.lexicon)?);
    let today = config.today();
    tracing::info!(
        annotator = %config.annotator.url,
        reference_date = %today,
        "pipeline ready"
    );

    // ── Collect queries ─────────────────────────────────────────
    let words: Vec<String> = args.collect();
    let queries = if words.is_empty() {
        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        let mut queries = Vec::new();
        while let Some(line) = lines.next_line().await? {
            let line = line.trim();
            if !line.is_empty() {
                queries.push(line.to_string());
            }
        }
        queries
    } else {
        vec![words.join(" ")]
    };
    tracing::info!(count = queries.len(), workers = config.batch_workers, "classifying");

    for line in batch::run(pipeline, queries, today, config.batch_workers).await {
        println!("{}", serde_json::to_string(&line)?);
    }

    Ok(())
}
