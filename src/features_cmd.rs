//! Features command: per-band statistics for every manifest record.

use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::{info, info_span};

use ecgnoise_features::batch_features;
use ecgnoise_io::{FeatureRecord, OutputFormat, read_manifest, write_features_csv, write_json};

use crate::cli::FeaturesArgs;
use crate::config;
use crate::convert;

/// JSON layout: column names once, then one record per row.
#[derive(Serialize)]
struct FeatureTable<'a> {
    columns: &'a [String],
    records: &'a [FeatureRecord],
}

/// Run the feature batch and write one row per record.
pub fn run(args: FeaturesArgs) -> Result<()> {
    let _cmd = info_span!("features").entered();
    let mut config = config::load(args.common.config.as_deref())?;
    convert::apply_overrides(&mut config, &args.common);

    let processor = convert::build_processor(&config.wavelet)?;
    let store = convert::build_store(&config.io)?;

    let manifest = convert::manifest_path(&config.io);
    let names = read_manifest(&manifest)
        .with_context(|| format!("failed to read manifest: {}", manifest.display()))?;
    info!(
        path = %manifest.display(),
        n_records = names.len(),
        wavelet = %processor.wavelet(),
        levels = processor.levels(),
        "manifest loaded"
    );

    let features = batch_features(&names, &store, &processor)
        .with_context(|| format!("feature batch failed in {}", store.dir().display()))?;

    // every vector shares the processor's band layout
    let columns = features
        .first()
        .map(|f| f.column_names())
        .unwrap_or_default();
    let records: Vec<FeatureRecord> = names
        .into_iter()
        .zip(features)
        .map(|(record, f)| FeatureRecord {
            record,
            features: f.into_values(),
        })
        .collect();

    let output = config
        .io
        .output
        .unwrap_or_else(|| PathBuf::from("features.csv"));
    match OutputFormat::from_path(&output) {
        OutputFormat::Csv => write_features_csv(&output, &columns, &records),
        OutputFormat::Json => write_json(
            &output,
            &FeatureTable {
                columns: &columns,
                records: &records,
            },
        ),
    }
    .with_context(|| format!("failed to write output: {}", output.display()))?;

    println!(
        "{} records, {} features per record, written to {}",
        records.len(),
        columns.len(),
        output.display()
    );
    Ok(())
}
