//! Band-omission residual.

use ecgnoise_stats::mean_abs_diff;
use ecgnoise_wavelet::{BandProcessor, OmissionSpec, Signal};

use crate::error::FeatureError;

/// Mean absolute difference between `original` and its reconstruction with
/// the bands in `spec` omitted.
///
/// The reconstruction is truncated to the original length before
/// comparing: `sum(|x[k] - x̂[k]|) / N` for `k` in `0..N`. Heavy omission
/// followed by this measure estimates how much of the signal lived in the
/// omitted bands.
///
/// # Errors
///
/// Propagates decomposition and omission errors as [`FeatureError::Wavelet`].
///
/// # Example
///
/// ```ignore
/// use ecgnoise_features::residual;
/// use ecgnoise_wavelet::{BandProcessor, OmissionSpec, Wavelet};
///
/// let processor = BandProcessor::new(Wavelet::Sym4, 5);
/// let r = residual(&signal, &processor, &OmissionSpec::new([1], false))?;
/// ```
pub fn residual(
    original: &Signal,
    processor: &BandProcessor,
    spec: &OmissionSpec,
) -> Result<f64, FeatureError> {
    let rebuilt = processor.reconstruct_omitted(original, spec)?;
    Ok(mean_abs_diff(original.as_slice(), &rebuilt))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use ecgnoise_stats::mean_abs;
    use ecgnoise_wavelet::{BoundaryMode, Transform, Wavelet, WaveletError};

    fn alternating() -> Signal {
        Signal::new(vec![0.0, 1.0, 0.0, -1.0, 0.0, 1.0, 0.0, -1.0]).unwrap()
    }

    #[test]
    fn lossless_residual_is_zero() {
        for mode in [BoundaryMode::Zero, BoundaryMode::Constant] {
            let processor = BandProcessor::new(Wavelet::Haar, 1).with_mode(mode);
            let r = residual(&alternating(), &processor, &OmissionSpec::none()).unwrap();
            assert_abs_diff_eq!(r, 0.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn finest_band_omitted_haar() {
        let processor = BandProcessor::new(Wavelet::Haar, 1).with_mode(BoundaryMode::Constant);
        let r = residual(&alternating(), &processor, &OmissionSpec::new([1], false)).unwrap();
        assert_relative_eq!(r, 0.5, epsilon = 1e-12);
    }

    #[test]
    fn full_omission_equals_mean_abs() {
        let data: Vec<f64> = (0..128).map(|i| (i as f64 * 0.21).sin() * 0.8).collect();
        let signal = Signal::new(data).unwrap();
        let expected = mean_abs(signal.as_slice());
        for transform in [Transform::Decimated, Transform::Stationary] {
            let processor = BandProcessor::new(Wavelet::Sym4, 4).with_transform(transform);
            let r = residual(&signal, &processor, &OmissionSpec::all(4)).unwrap();
            assert_relative_eq!(r, expected, epsilon = 1e-12);
        }
    }

    #[test]
    fn stationary_finest_band_omitted_haar() {
        // Haar stationary level 1 on this signal: the approximation alone
        // reconstructs x / 2.
        let processor = BandProcessor::new(Wavelet::Haar, 1).with_transform(Transform::Stationary);
        let r = residual(&alternating(), &processor, &OmissionSpec::new([1], false)).unwrap();
        assert_relative_eq!(r, 0.25, epsilon = 1e-12);
    }

    #[test]
    fn residual_is_non_negative() {
        let data: Vec<f64> = (0..90).map(|i| ((i * 31 % 23) as f64) / 23.0 - 0.5).collect();
        let signal = Signal::new(data).unwrap();
        let processor = BandProcessor::new(Wavelet::Db3, 3);
        for spec in [
            OmissionSpec::new([1], false),
            OmissionSpec::new([2, 3], false),
            OmissionSpec::new([], true),
        ] {
            assert!(residual(&signal, &processor, &spec).unwrap() >= 0.0);
        }
    }

    #[test]
    fn omission_level_too_high() {
        let processor = BandProcessor::new(Wavelet::Haar, 2);
        let err = residual(&alternating(), &processor, &OmissionSpec::new([3], false)).unwrap_err();
        assert_eq!(
            err,
            FeatureError::Wavelet(WaveletError::InvalidLevel {
                requested: 3,
                max: 2
            })
        );
    }
}
