//! Residuals command: band-omission residual for every manifest record.

use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::{info, info_span};

use ecgnoise_features::batch_residuals;
use ecgnoise_io::{OutputFormat, ResidualRecord, read_manifest, write_json, write_residuals_csv};

use crate::cli::ResidualsArgs;
use crate::config;
use crate::convert;

/// Run the residual batch and write one row per record.
pub fn run(args: ResidualsArgs) -> Result<()> {
    let _cmd = info_span!("residuals").entered();
    // 1. Config with CLI overrides
    let mut config = config::load(args.common.config.as_deref())?;
    convert::apply_overrides(&mut config, &args.common);
    convert::apply_omission_overrides(&mut config, &args.omit, args.omit_approx);

    let processor = convert::build_processor(&config.wavelet)?;
    let spec = convert::build_omission(&config.omission);
    let store = convert::build_store(&config.io)?;

    // 2. Record names
    let manifest = convert::manifest_path(&config.io);
    let names = read_manifest(&manifest)
        .with_context(|| format!("failed to read manifest: {}", manifest.display()))?;
    info!(
        path = %manifest.display(),
        n_records = names.len(),
        wavelet = %processor.wavelet(),
        levels = processor.levels(),
        mode = %processor.mode(),
        transform = %processor.transform(),
        "manifest loaded"
    );

    // 3. Batch
    let residuals = batch_residuals(&names, &store, &processor, &spec)
        .with_context(|| format!("residual batch failed in {}", store.dir().display()))?;

    // 4. Output
    let records: Vec<ResidualRecord> = names
        .into_iter()
        .zip(residuals.iter().copied())
        .map(|(record, residual)| ResidualRecord { record, residual })
        .collect();
    let output = config
        .io
        .output
        .unwrap_or_else(|| PathBuf::from("residuals.csv"));
    match OutputFormat::from_path(&output) {
        OutputFormat::Csv => write_residuals_csv(&output, &records),
        OutputFormat::Json => write_json(&output, &records),
    }
    .with_context(|| format!("failed to write output: {}", output.display()))?;

    println!(
        "{} records, mean residual {:.6}, written to {}",
        records.len(),
        ecgnoise_stats::mean(&residuals),
        output.display()
    );
    Ok(())
}
