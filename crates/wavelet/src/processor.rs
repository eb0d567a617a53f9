//! Decompose, omit, reconstruct.

use tracing::{debug, trace};

use crate::band::{CoefficientSet, Transform};
use crate::dwt::{decompose, reconstruct_decimated};
use crate::error::WaveletError;
use crate::filter::Wavelet;
use crate::mode::BoundaryMode;
use crate::omit::{OmissionSpec, omit_bands};
use crate::series::Signal;
use crate::swt::{decompose_stationary, reconstruct_stationary};

/// Inverts a decomposition, dispatching on the transform that produced it.
///
/// Decimated output may be longer than the original signal by a few
/// boundary samples; stationary output has exactly the original length.
pub fn reconstruct(coeffs: &CoefficientSet) -> Vec<f64> {
    let rebuilt = match coeffs.transform() {
        Transform::Decimated => reconstruct_decimated(coeffs),
        Transform::Stationary => reconstruct_stationary(coeffs),
    };
    if rebuilt.len() > coeffs.signal_len() {
        trace!(
            rebuilt_len = rebuilt.len(),
            signal_len = coeffs.signal_len(),
            "reconstruction carries boundary padding"
        );
    }
    rebuilt
}

/// Decimated decompose, omit, reconstruct.
///
/// The omission spec is validated against `levels` before anything is
/// decomposed.
///
/// # Errors
///
/// | Variant | Trigger |
/// |---------|---------|
/// | [`WaveletError::InvalidLevel`] | an omission level exceeds `levels`, or `levels` is unsupported for the signal |
pub fn decompose_and_reconstruct(
    signal: &Signal,
    wavelet: Wavelet,
    levels: usize,
    mode: BoundaryMode,
    spec: &OmissionSpec,
) -> Result<Vec<f64>, WaveletError> {
    spec.validate(levels)?;
    let coeffs = decompose(signal, wavelet, levels, mode)?;
    let coeffs = omit_bands(coeffs, spec)?;
    Ok(reconstruct(&coeffs))
}

/// Stationary decompose, omit, reconstruct.
///
/// # Errors
///
/// | Variant | Trigger |
/// |---------|---------|
/// | [`WaveletError::InvalidLevel`] | an omission level exceeds `levels`, or `levels` is 0 |
/// | [`WaveletError::InvalidLength`] | `signal.len()` is not a multiple of `2^levels` |
pub fn decompose_stationary_and_reconstruct(
    signal: &Signal,
    wavelet: Wavelet,
    levels: usize,
    spec: &OmissionSpec,
) -> Result<Vec<f64>, WaveletError> {
    spec.validate(levels)?;
    let coeffs = decompose_stationary(signal, wavelet, levels)?;
    let coeffs = omit_bands(coeffs, spec)?;
    Ok(reconstruct(&coeffs))
}

/// Wavelet basis, depth, boundary mode and transform bundled together.
///
/// Lets callers run either transform through one entry point.
///
/// # Example
///
/// ```ignore
/// use ecgnoise_wavelet::{BandProcessor, BoundaryMode, OmissionSpec, Wavelet};
///
/// let processor = BandProcessor::new(Wavelet::Sym4, 5)
///     .with_mode(BoundaryMode::Symmetric);
/// let rebuilt = processor.reconstruct_omitted(&signal, &OmissionSpec::new([1], false))?;
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BandProcessor {
    wavelet: Wavelet,
    levels: usize,
    mode: BoundaryMode,
    transform: Transform,
}

impl Default for BandProcessor {
    /// `sym4`, 5 levels, symmetric mode, decimated transform.
    fn default() -> Self {
        Self::new(Wavelet::Sym4, 5)
    }
}

impl BandProcessor {
    /// Creates a processor with symmetric boundaries and the decimated transform.
    pub fn new(wavelet: Wavelet, levels: usize) -> Self {
        Self {
            wavelet,
            levels,
            mode: BoundaryMode::default(),
            transform: Transform::default(),
        }
    }

    /// Sets the boundary mode (ignored by the stationary transform).
    pub fn with_mode(mut self, mode: BoundaryMode) -> Self {
        self.mode = mode;
        self
    }

    /// Sets the transform variant.
    pub fn with_transform(mut self, transform: Transform) -> Self {
        self.transform = transform;
        self
    }

    /// Returns the wavelet basis.
    pub fn wavelet(&self) -> Wavelet {
        self.wavelet
    }

    /// Returns the decomposition depth.
    pub fn levels(&self) -> usize {
        self.levels
    }

    /// Returns the boundary mode.
    pub fn mode(&self) -> BoundaryMode {
        self.mode
    }

    /// Returns the transform variant.
    pub fn transform(&self) -> Transform {
        self.transform
    }

    /// Decomposes `signal` with the configured transform.
    ///
    /// # Errors
    ///
    /// See [`decompose`] and [`decompose_stationary`].
    pub fn decompose(&self, signal: &Signal) -> Result<CoefficientSet, WaveletError> {
        match self.transform {
            Transform::Decimated => decompose(signal, self.wavelet, self.levels, self.mode),
            Transform::Stationary => decompose_stationary(signal, self.wavelet, self.levels),
        }
    }

    /// Decomposes, zeroes the bands in `spec`, and reconstructs.
    ///
    /// # Errors
    ///
    /// See [`decompose_and_reconstruct`] and
    /// [`decompose_stationary_and_reconstruct`].
    pub fn reconstruct_omitted(
        &self,
        signal: &Signal,
        spec: &OmissionSpec,
    ) -> Result<Vec<f64>, WaveletError> {
        debug!(
            wavelet = %self.wavelet,
            levels = self.levels,
            transform = %self.transform,
            omitted = ?spec.levels(),
            omit_approximation = spec.omits_approximation(),
            "band omission"
        );
        match self.transform {
            Transform::Decimated => {
                decompose_and_reconstruct(signal, self.wavelet, self.levels, self.mode, spec)
            }
            Transform::Stationary => {
                decompose_stationary_and_reconstruct(signal, self.wavelet, self.levels, spec)
            }
        }
    }
}
