//! # ecgnoise-features
//!
//! Noise features for single-lead ECG records, built on wavelet band
//! omission:
//!
//! - [`residual`]: mean absolute error between a signal and its
//!   reconstruction with selected bands zeroed.
//! - [`band_statistics`]: ten descriptive statistics per coefficient band.
//! - [`batch_residuals`] / [`batch_features`]: the same over named records
//!   from a [`RecordLoader`], aborting on the first failure.

mod band_stats;
mod batch;
mod error;
mod residual;

pub use band_stats::{
    FeatureVector, STAT_NAMES, STATS_PER_BAND, band_statistics, feature_vector,
};
pub use batch::{RecordLoader, batch_features, batch_residuals};
pub use error::FeatureError;
pub use residual::residual;
