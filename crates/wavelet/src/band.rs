//! Tagged coefficient bands and the coefficient set produced by a decomposition.

use std::fmt;

use crate::error::WaveletError;
use crate::filter::Wavelet;
use crate::mode::BoundaryMode;

/// Which wavelet transform produced a [`CoefficientSet`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Transform {
    /// Decimated DWT: each level halves the band length.
    #[default]
    Decimated,
    /// Stationary (undecimated, maximal-overlap) transform: every band keeps
    /// the signal length.
    Stationary,
}

impl Transform {
    /// Returns the canonical lowercase name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Decimated => "decimated",
            Self::Stationary => "stationary",
        }
    }

    /// Parses a transform from a case-insensitive name string.
    ///
    /// Accepts `"decimated"` / `"dwt"` and `"stationary"` / `"swt"` / `"modwt"`.
    ///
    /// # Errors
    ///
    /// Returns [`WaveletError::UnsupportedTransform`] if the name is not recognized.
    pub fn from_name(name: &str) -> Result<Self, WaveletError> {
        match name.to_lowercase().as_str() {
            "decimated" | "dwt" => Ok(Self::Decimated),
            "stationary" | "swt" | "modwt" => Ok(Self::Stationary),
            _ => Err(WaveletError::UnsupportedTransform(name.to_string())),
        }
    }
}

impl fmt::Display for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One resolution band of a decomposition.
#[derive(Clone, Debug, PartialEq)]
pub enum Band {
    /// Coarsest approximation (scaling) coefficients.
    Approximation(Vec<f64>),
    /// Detail (wavelet) coefficients at a level; level 1 is the finest.
    Detail(usize, Vec<f64>),
}

impl Band {
    /// Returns the band's coefficients.
    pub fn values(&self) -> &[f64] {
        match self {
            Self::Approximation(values) | Self::Detail(_, values) => values,
        }
    }

    /// Returns the detail level, or `None` for the approximation band.
    pub fn level(&self) -> Option<usize> {
        match self {
            Self::Approximation(_) => None,
            Self::Detail(level, _) => Some(*level),
        }
    }

    /// Returns `true` for the approximation band.
    pub fn is_approximation(&self) -> bool {
        matches!(self, Self::Approximation(_))
    }

    /// Number of coefficients in the band.
    pub fn len(&self) -> usize {
        self.values().len()
    }

    /// Returns `true` if the band holds no coefficients.
    pub fn is_empty(&self) -> bool {
        self.values().is_empty()
    }

    /// Overwrites every coefficient with zero, keeping the length.
    pub fn zero(&mut self) {
        match self {
            Self::Approximation(values) | Self::Detail(_, values) => values.fill(0.0),
        }
    }
}

/// Output of a wavelet decomposition.
///
/// Bands are stored as `[Approximation, Detail(L), ..., Detail(1)]`: the
/// approximation first, then detail levels from coarsest to finest. Level
/// `i` therefore sits at position `L - i + 1`; see
/// [`position_of`](Self::position_of).
///
/// Sets are only built by [`decompose`](crate::decompose) and
/// [`decompose_stationary`](crate::decompose_stationary), so the band
/// layout always matches the transform recorded here.
#[derive(Clone, Debug, PartialEq)]
pub struct CoefficientSet {
    bands: Vec<Band>,
    transform: Transform,
    wavelet: Wavelet,
    mode: BoundaryMode,
    signal_len: usize,
}

impl CoefficientSet {
    /// Creates a new `CoefficientSet` (crate-internal constructor).
    ///
    /// `details` is ordered finest first, as produced by the forward
    /// transforms.
    pub(crate) fn new(
        approximation: Vec<f64>,
        details: Vec<Vec<f64>>,
        transform: Transform,
        wavelet: Wavelet,
        mode: BoundaryMode,
        signal_len: usize,
    ) -> Self {
        let mut bands = Vec::with_capacity(details.len() + 1);
        bands.push(Band::Approximation(approximation));
        bands.extend(
            details
                .into_iter()
                .enumerate()
                .rev()
                .map(|(i, values)| Band::Detail(i + 1, values)),
        );
        Self {
            bands,
            transform,
            wavelet,
            mode,
            signal_len,
        }
    }

    /// Returns the decomposition depth `L` (number of detail bands).
    pub fn depth(&self) -> usize {
        self.bands.len() - 1
    }

    /// Returns all bands, approximation first.
    pub fn bands(&self) -> &[Band] {
        &self.bands
    }

    pub(crate) fn bands_mut(&mut self) -> &mut [Band] {
        &mut self.bands
    }

    /// Maps a detail level (1 = finest) to its position in [`bands`](Self::bands).
    ///
    /// Returns `None` if the level is outside `1..=depth`.
    pub fn position_of(&self, level: usize) -> Option<usize> {
        let depth = self.depth();
        (1..=depth).contains(&level).then(|| depth - level + 1)
    }

    /// Returns the approximation coefficients.
    pub fn approximation(&self) -> &[f64] {
        self.bands[0].values()
    }

    /// Returns the detail coefficients at the given level (1 = finest).
    ///
    /// Returns `None` if the level is out of range.
    pub fn detail(&self, level: usize) -> Option<&[f64]> {
        self.position_of(level).map(|pos| self.bands[pos].values())
    }

    /// Returns the transform that produced the set.
    pub fn transform(&self) -> Transform {
        self.transform
    }

    /// Returns the wavelet basis used.
    pub fn wavelet(&self) -> Wavelet {
        self.wavelet
    }

    /// Returns the boundary mode; stationary sets are always
    /// [`BoundaryMode::Periodic`].
    pub fn mode(&self) -> BoundaryMode {
        self.mode
    }

    /// Returns the length of the decomposed signal.
    pub fn signal_len(&self) -> usize {
        self.signal_len
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_set() -> CoefficientSet {
        // details finest first: level 1, level 2, level 3
        CoefficientSet::new(
            vec![9.0],
            vec![vec![1.0, 1.0, 1.0, 1.0], vec![2.0, 2.0], vec![3.0]],
            Transform::Decimated,
            Wavelet::Haar,
            BoundaryMode::Zero,
            8,
        )
    }

    #[test]
    fn bands_are_coarsest_first() {
        let set = sample_set();
        let levels: Vec<Option<usize>> = set.bands().iter().map(Band::level).collect();
        assert_eq!(levels, vec![None, Some(3), Some(2), Some(1)]);
        assert!(set.bands()[0].is_approximation());
    }

    #[test]
    fn depth_counts_detail_bands() {
        assert_eq!(sample_set().depth(), 3);
    }

    #[test]
    fn position_mapping() {
        let set = sample_set();
        assert_eq!(set.position_of(1), Some(3));
        assert_eq!(set.position_of(2), Some(2));
        assert_eq!(set.position_of(3), Some(1));
        assert_eq!(set.position_of(0), None);
        assert_eq!(set.position_of(4), None);
    }

    #[test]
    fn detail_lookup() {
        let set = sample_set();
        assert_eq!(set.approximation(), &[9.0]);
        assert_eq!(set.detail(1), Some([1.0, 1.0, 1.0, 1.0].as_slice()));
        assert_eq!(set.detail(3), Some([3.0].as_slice()));
        assert_eq!(set.detail(4), None);
    }

    #[test]
    fn metadata_accessors() {
        let set = sample_set();
        assert_eq!(set.transform(), Transform::Decimated);
        assert_eq!(set.wavelet(), Wavelet::Haar);
        assert_eq!(set.mode(), BoundaryMode::Zero);
        assert_eq!(set.signal_len(), 8);
    }

    #[test]
    fn band_zero_keeps_length() {
        let mut band = Band::Detail(2, vec![1.5, -2.0, 3.0]);
        band.zero();
        assert_eq!(band, Band::Detail(2, vec![0.0, 0.0, 0.0]));
        assert_eq!(band.len(), 3);
        assert!(!band.is_empty());
    }

    #[test]
    fn transform_from_name() {
        assert_eq!(Transform::from_name("DWT").unwrap(), Transform::Decimated);
        assert_eq!(Transform::from_name("swt").unwrap(), Transform::Stationary);
        assert_eq!(Transform::from_name("modwt").unwrap(), Transform::Stationary);
        assert!(matches!(
            Transform::from_name("packet"),
            Err(WaveletError::UnsupportedTransform(_))
        ));
        assert_eq!(Transform::default(), Transform::Decimated);
    }

    #[test]
    fn coefficient_set_is_send_and_sync() {
        fn assert_impl<T: Send + Sync>() {}
        assert_impl::<CoefficientSet>();
        assert_impl::<Band>();
    }
}
