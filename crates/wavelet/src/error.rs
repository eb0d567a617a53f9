//! Error types for the ecgnoise-wavelet crate.

/// Error type for all fallible operations in the ecgnoise-wavelet crate.
///
/// Covers signal validation, level and length checks that run before any
/// transform work, and unknown configuration identifiers.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum WaveletError {
    /// Returned when the input signal has no samples.
    #[error("signal is empty")]
    EmptySignal,

    /// Returned when the input data contains non-finite values (NaN or infinity).
    #[error("input data contains non-finite values")]
    NonFiniteData,

    /// Returned when a decomposition depth or an omission level exceeds what
    /// is allowed.
    #[error("level {requested} is too high, maximum allowed is {max}")]
    InvalidLevel {
        /// Level that was requested.
        requested: usize,
        /// Maximum allowed level.
        max: usize,
    },

    /// Returned when a stationary transform input is not divisible by `2^levels`.
    #[error("signal length {len} is not a multiple of 2^{levels}")]
    InvalidLength {
        /// Length of the input signal.
        len: usize,
        /// Requested decomposition depth.
        levels: usize,
    },

    /// Returned when an omission level is outside `1..=max` for an existing
    /// coefficient set.
    #[error("omission level {level} out of range 1..={max}")]
    OmissionRange {
        /// Offending omission level.
        level: usize,
        /// Depth of the coefficient set.
        max: usize,
    },

    /// Returned when an unsupported wavelet name is provided.
    #[error("unsupported wavelet: {0}")]
    UnsupportedWavelet(String),

    /// Returned when an unsupported boundary mode name is provided.
    #[error("unsupported boundary mode: {0}")]
    UnsupportedMode(String),

    /// Returned when an unsupported transform name is provided.
    #[error("unsupported transform: {0}")]
    UnsupportedTransform(String),
}
