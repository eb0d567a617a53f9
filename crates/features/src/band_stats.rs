//! Per-band descriptive statistics.

use ecgnoise_stats as stats;
use ecgnoise_wavelet::{Band, BandProcessor, CoefficientSet, Signal};

use crate::error::FeatureError;

/// Number of scalars appended per band.
pub const STATS_PER_BAND: usize = 10;

/// Names of the per-band statistics, in output order.
///
/// `average`/`mean`, `avg_power`/`mean_power` and `avg_abs`/`mean_abs` are
/// pairwise identical. Both copies stay so the layout remains ten wide.
pub const STAT_NAMES: [&str; STATS_PER_BAND] = [
    "min",
    "max",
    "average",
    "mean",
    "std",
    "variance",
    "avg_power",
    "mean_power",
    "avg_abs",
    "mean_abs",
];

/// Concatenated band statistics for one signal.
///
/// Approximation band first, then detail bands coarsest to finest, each
/// contributing [`STATS_PER_BAND`] values in [`STAT_NAMES`] order.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct FeatureVector {
    values: Vec<f64>,
    labels: Vec<String>,
}

impl FeatureVector {
    /// Returns all scalars.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Number of scalars.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if no band was summarised.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Number of bands summarised.
    pub fn n_bands(&self) -> usize {
        self.labels.len()
    }

    /// Band labels: `a` for the approximation, `d{level}` for details.
    pub fn band_labels(&self) -> &[String] {
        &self.labels
    }

    /// The ten statistics of the band at `index`, or `None` if out of range.
    pub fn band(&self, index: usize) -> Option<&[f64]> {
        let start = index.checked_mul(STATS_PER_BAND)?;
        self.values.get(start..start + STATS_PER_BAND)
    }

    /// Column names such as `a_min` or `d3_mean_abs`, one per scalar.
    pub fn column_names(&self) -> Vec<String> {
        self.labels
            .iter()
            .flat_map(|label| STAT_NAMES.iter().map(move |stat| format!("{label}_{stat}")))
            .collect()
    }

    /// Consumes the vector and returns the scalars.
    pub fn into_values(self) -> Vec<f64> {
        self.values
    }
}

fn band_label(band: &Band) -> String {
    match band {
        Band::Approximation(_) => "a".to_string(),
        Band::Detail(level, _) => format!("d{level}"),
    }
}

/// The ten statistics of one band, or `None` if it is empty.
fn summarise(data: &[f64]) -> Option<[f64; STATS_PER_BAND]> {
    let min = stats::min(data)?;
    let max = stats::max(data)?;
    let power: Vec<f64> = data.iter().map(|x| x * x).collect();
    let magnitude: Vec<f64> = data.iter().map(|x| x.abs()).collect();
    // Each pair below calls the same function twice on purpose.
    Some([
        min,
        max,
        stats::mean(data),
        stats::mean(data),
        stats::sd(data),
        stats::variance(data),
        stats::mean(&power),
        stats::mean(&power),
        stats::mean(&magnitude),
        stats::mean(&magnitude),
    ])
}

/// Computes the feature vector of a coefficient set.
///
/// Returns `10 * (depth + 1)` scalars.
///
/// # Errors
///
/// Returns [`FeatureError::EmptyBand`] if a band holds no coefficients.
pub fn band_statistics(coeffs: &CoefficientSet) -> Result<FeatureVector, FeatureError> {
    let bands = coeffs.bands();
    let mut values = Vec::with_capacity(bands.len() * STATS_PER_BAND);
    let mut labels = Vec::with_capacity(bands.len());
    for (index, band) in bands.iter().enumerate() {
        let summary = summarise(band.values()).ok_or(FeatureError::EmptyBand { index })?;
        values.extend_from_slice(&summary);
        labels.push(band_label(band));
    }
    Ok(FeatureVector { values, labels })
}

/// Decomposes `signal` with `processor` (no omission) and summarises every band.
///
/// # Errors
///
/// Propagates decomposition errors as [`FeatureError::Wavelet`].
pub fn feature_vector(
    signal: &Signal,
    processor: &BandProcessor,
) -> Result<FeatureVector, FeatureError> {
    let coeffs = processor.decompose(signal)?;
    band_statistics(&coeffs)
}
