//! Band omission: zeroing selected resolution bands before reconstruction.

use std::collections::BTreeSet;

use crate::band::CoefficientSet;
use crate::error::WaveletError;

/// Which bands to zero out before reconstruction.
///
/// Holds a set of detail levels (1 = finest) and a flag for the coarsest
/// approximation band. The default omits nothing.
///
/// # Example
///
/// ```ignore
/// use ecgnoise_wavelet::OmissionSpec;
///
/// // Drop the finest detail band, keep everything else.
/// let spec = OmissionSpec::new([1], false);
/// assert_eq!(spec.max_level(), Some(1));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct OmissionSpec {
    levels: BTreeSet<usize>,
    approximation: bool,
}

impl OmissionSpec {
    /// Creates a spec from detail levels and the approximation flag.
    pub fn new(levels: impl IntoIterator<Item = usize>, approximation: bool) -> Self {
        Self {
            levels: levels.into_iter().collect(),
            approximation,
        }
    }

    /// Omits nothing; reconstruction is lossless.
    pub fn none() -> Self {
        Self::default()
    }

    /// Omits every detail level `1..=depth` and the approximation.
    pub fn all(depth: usize) -> Self {
        Self::new(1..=depth, true)
    }

    /// Returns the detail levels to omit, ascending.
    pub fn levels(&self) -> &BTreeSet<usize> {
        &self.levels
    }

    /// Returns whether the approximation band is omitted.
    pub fn omits_approximation(&self) -> bool {
        self.approximation
    }

    /// Returns the highest detail level to omit, if any.
    pub fn max_level(&self) -> Option<usize> {
        self.levels.last().copied()
    }

    /// Returns `true` if the spec omits nothing.
    pub fn is_empty(&self) -> bool {
        self.levels.is_empty() && !self.approximation
    }

    /// Checks the spec against a requested decomposition depth before any
    /// transform work runs.
    ///
    /// # Errors
    ///
    /// Returns [`WaveletError::InvalidLevel`] naming the highest omission
    /// level when it exceeds `depth`.
    pub fn validate(&self, depth: usize) -> Result<(), WaveletError> {
        match self.max_level() {
            Some(level) if level > depth => Err(WaveletError::InvalidLevel {
                requested: level,
                max: depth,
            }),
            _ => Ok(()),
        }
    }
}

/// Zeroes the bands selected by `spec`, keeping every band's length.
///
/// Works identically for decimated and stationary sets. All levels are
/// checked before any band is modified.
///
/// # Errors
///
/// Returns [`WaveletError::OmissionRange`] for the first level outside
/// `1..=coeffs.depth()`.
pub fn omit_bands(
    mut coeffs: CoefficientSet,
    spec: &OmissionSpec,
) -> Result<CoefficientSet, WaveletError> {
    let depth = coeffs.depth();
    let positions = spec
        .levels()
        .iter()
        .map(|&level| {
            coeffs
                .position_of(level)
                .ok_or(WaveletError::OmissionRange { level, max: depth })
        })
        .collect::<Result<Vec<_>, _>>()?;

    let bands = coeffs.bands_mut();
    for pos in positions {
        bands[pos].zero();
    }
    if spec.omits_approximation() {
        bands[0].zero();
    }
    Ok(coeffs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::band::Band;
    use crate::dwt::decompose;
    use crate::filter::Wavelet;
    use crate::mode::BoundaryMode;
    use crate::series::Signal;
    use crate::swt::decompose_stationary;

    fn ramp(n: usize) -> Signal {
        Signal::new((1..=n).map(|i| i as f64).collect()).unwrap()
    }

    #[test]
    fn spec_accessors() {
        let spec = OmissionSpec::new([3, 1, 3], true);
        assert_eq!(spec.levels().iter().copied().collect::<Vec<_>>(), vec![1, 3]);
        assert!(spec.omits_approximation());
        assert_eq!(spec.max_level(), Some(3));
        assert!(!spec.is_empty());
    }

    #[test]
    fn spec_none_is_empty() {
        let spec = OmissionSpec::none();
        assert!(spec.is_empty());
        assert_eq!(spec.max_level(), None);
        assert!(spec.validate(0).is_ok());
    }

    #[test]
    fn spec_all() {
        let spec = OmissionSpec::all(3);
        assert_eq!(spec, OmissionSpec::new([1, 2, 3], true));
    }

    #[test]
    fn validate_rejects_level_above_depth() {
        let err = OmissionSpec::new([2, 6], false).validate(5).unwrap_err();
        assert_eq!(
            err,
            WaveletError::InvalidLevel {
                requested: 6,
                max: 5
            }
        );
    }

    #[test]
    fn validate_accepts_level_at_depth() {
        assert!(OmissionSpec::new([5], false).validate(5).is_ok());
    }

    #[test]
    fn omit_finest_decimated() {
        let coeffs = decompose(&ramp(32), Wavelet::Haar, 3, BoundaryMode::Zero).unwrap();
        let before = coeffs.clone();
        let omitted = omit_bands(coeffs, &OmissionSpec::new([1], false)).unwrap();

        let finest = omitted.detail(1).unwrap();
        assert_eq!(finest.len(), before.detail(1).unwrap().len());
        assert!(finest.iter().all(|&v| v == 0.0));
        assert_eq!(omitted.detail(2), before.detail(2));
        assert_eq!(omitted.detail(3), before.detail(3));
        assert_eq!(omitted.approximation(), before.approximation());
    }

    #[test]
    fn omit_approximation_only() {
        let coeffs = decompose(&ramp(32), Wavelet::Db2, 2, BoundaryMode::Symmetric).unwrap();
        let before = coeffs.clone();
        let omitted = omit_bands(coeffs, &OmissionSpec::new([], true)).unwrap();
        assert!(omitted.approximation().iter().all(|&v| v == 0.0));
        assert_eq!(omitted.detail(1), before.detail(1));
        assert_eq!(omitted.detail(2), before.detail(2));
    }

    #[test]
    fn omit_stationary_levels() {
        let coeffs = decompose_stationary(&ramp(16), Wavelet::Haar, 2).unwrap();
        let omitted = omit_bands(coeffs, &OmissionSpec::new([2], false)).unwrap();
        match &omitted.bands()[1] {
            Band::Detail(level, values) => {
                assert_eq!(*level, 2);
                assert_eq!(values, &vec![0.0; 16]);
            }
            other => panic!("expected detail band, got {other:?}"),
        }
    }

    #[test]
    fn omit_out_of_range_rejected() {
        let coeffs = decompose(&ramp(32), Wavelet::Haar, 2, BoundaryMode::Zero).unwrap();
        let err = omit_bands(coeffs, &OmissionSpec::new([3], false)).unwrap_err();
        assert_eq!(err, WaveletError::OmissionRange { level: 3, max: 2 });
    }

    #[test]
    fn omit_level_zero_rejected() {
        let coeffs = decompose(&ramp(32), Wavelet::Haar, 2, BoundaryMode::Zero).unwrap();
        let err = omit_bands(coeffs, &OmissionSpec::new([0], true)).unwrap_err();
        assert_eq!(err, WaveletError::OmissionRange { level: 0, max: 2 });
    }
}
