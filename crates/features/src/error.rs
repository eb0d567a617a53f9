//! Error types for the ecgnoise-features crate.

use ecgnoise_wavelet::WaveletError;

/// Error type for all fallible operations in the ecgnoise-features crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FeatureError {
    /// Wavelet transform or signal validation error.
    #[error(transparent)]
    Wavelet(#[from] WaveletError),

    /// Returned when a record loader fails.
    #[error("failed to load record '{record}': {reason}")]
    Load {
        /// Name of the record that could not be loaded.
        record: String,
        /// Description of the underlying failure.
        reason: String,
    },

    /// Returned when a coefficient band has no values to summarise.
    #[error("band {index} has no coefficients")]
    EmptyBand {
        /// Position of the band in the coefficient set.
        index: usize,
    },
}
