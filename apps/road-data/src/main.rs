//! generate-road-data: builds per-jurisdiction road files for Virginia.
//!
//! Queries Overpass for every county and independent city (or just the ids
//! given on the command line), writes `data/roads/{id}.json` plus
//! `data/manifest.json`, and zips `data/` into `virginia_road_data.zip`.

use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use vr_core::RunConfig;
use vr_fetch::ReqwestTransport;
use vr_output::JsonStore;
use vr_pipeline::{LogObserver, PipelineBuilder};

#[derive(Parser, Debug)]
#[command(version, about = "Generate Virginia road data from OpenStreetMap")]
struct Args {
    /// Jurisdiction ids to generate (e.g. `henrico richmond_city`).
    /// Defaults to all 133.
    jurisdictions: Vec<String>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stdout)
        .without_time()
        .with_target(false)
        .init();

    let args = Args::parse();
    let config = RunConfig::default();

    let count = if args.jurisdictions.is_empty() {
        vr_core::jurisdiction::all().len()
    } else {
        args.jurisdictions.len()
    };
    info!("=== Virginia road data generator ===");
    info!("  Jurisdictions : {count}");
    info!("  Output        : {}", config.output_dir.display());
    info!("  Mirrors       : {}", config.fetch.servers.len());

    let transport = ReqwestTransport::new(config.fetch.timeout)
        .context("building HTTP client")?;
    let store = JsonStore::new(&config.output_dir, config.archive_path.clone(), config.pretty_json)
        .with_context(|| format!("preparing {}", config.output_dir.display()))?;

    let t0 = Instant::now();
    let mut pipeline = PipelineBuilder::new(config, transport, store)
        .jurisdictions(args.jurisdictions)
        .build()?;
    pipeline.run(&mut LogObserver)?;

    info!("Finished in {:.1?}", t0.elapsed());
    Ok(())
}
