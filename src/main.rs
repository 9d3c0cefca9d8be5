//! `knn-match` entrypoint: applies a matching strategy to a JSON lookup batch.

use std::io::{self, Write};

use candle_core::Device;

use knn_matchers::config::Config;
use knn_matchers::lookup::{LookupBatch, run_batch};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let config = Config::from_env()?;
    config.validate()?;

    tracing::info!(
        strategy = %config.strategy,
        thresholds = config.distance_thresholds.len(),
        input = ?config.input_path,
        "knn-match starting"
    );

    let batch = match &config.input_path {
        Some(path) => LookupBatch::from_path(path)?,
        None => LookupBatch::from_reader(io::stdin().lock())?,
    };

    let matcher = config.strategy.build();
    let report = run_batch(
        matcher.as_ref(),
        &batch,
        &config.distance_thresholds,
        &Device::Cpu,
    )?;

    tracing::info!(
        queries = report.labels.len(),
        counted = report.counts.is_some(),
        "Predictions ready"
    );

    let mut stdout = io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, &report)?;
    writeln!(stdout)?;

    Ok(())
}
