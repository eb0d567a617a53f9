//! # ecgnoise-io
//!
//! Get ECG records off disk and results back onto it:
//!
//! - [`MatRecordStore`] / [`TextRecordStore`] / [`RecordStore`]: named
//!   records in a directory, each a [`RecordLoader`](ecgnoise_features::RecordLoader).
//! - [`read_manifest`]: the list of record names to process.
//! - [`write_residuals_csv`], [`write_features_csv`], [`write_json`]: result
//!   tables.
//!
//! MAT support covers level-4 files such as the PhysioNet/CinC 2017
//! training set (`val` matrix, int16 samples in ADC units).

mod error;
mod manifest;
mod mat;
mod output;
mod store;
mod text;

pub use error::IoError;
pub use manifest::{parse_manifest, read_manifest};
pub use mat::{MatMatrix, parse_mat, read_mat};
pub use output::{
    FeatureRecord, OutputFormat, ResidualRecord, to_json, write_features_csv, write_json,
    write_residuals_csv,
};
pub use store::{
    DEFAULT_SCALE, DEFAULT_VARIABLE, MatRecordStore, RecordFormat, RecordStore, TextRecordStore,
};
pub use text::{parse_samples, read_samples};
