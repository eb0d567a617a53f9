//! Stationary (undecimated, maximal-overlap) wavelet transform.

use tracing::debug;

use crate::band::{CoefficientSet, Transform};
use crate::error::WaveletError;
use crate::filter::Wavelet;
use crate::mode::BoundaryMode;
use crate::series::Signal;

/// Computes the maximum stationary decomposition level for a signal length.
///
/// The stationary transform needs `N` to be divisible by `2^J`, so the
/// maximum level is the number of trailing factors of two in `N`.
///
/// # Example
///
/// ```ignore
/// use ecgnoise_wavelet::max_stationary_level;
///
/// assert_eq!(max_stationary_level(96), 5);
/// ```
pub fn max_stationary_level(n: usize) -> usize {
    if n == 0 {
        return 0;
    }
    n.trailing_zeros() as usize
}

/// Computes the stationary wavelet decomposition of a signal.
///
/// At level `j` the filters are dilated by `2^(j-1)` and applied
/// circularly, so every band keeps the signal length. The returned set holds
/// `levels + 1` bands ordered as in the decimated case.
///
/// # Errors
///
/// | Variant | Trigger |
/// |---------|---------|
/// | [`WaveletError::InvalidLevel`] | `levels` is 0 |
/// | [`WaveletError::InvalidLength`] | `signal.len()` is not a multiple of `2^levels` |
pub fn decompose_stationary(
    signal: &Signal,
    wavelet: Wavelet,
    levels: usize,
) -> Result<CoefficientSet, WaveletError> {
    let n = signal.len();
    if levels == 0 {
        return Err(WaveletError::InvalidLevel {
            requested: 0,
            max: max_stationary_level(n),
        });
    }
    if levels > max_stationary_level(n) {
        return Err(WaveletError::InvalidLength { len: n, levels });
    }

    let bank = wavelet.filter_bank();
    let mut approx = signal.as_slice().to_vec();
    let mut details = Vec::with_capacity(levels);
    for level in 1..=levels {
        let dilation = 1 << (level - 1);
        let detail = circular_analyze(&approx, &bank.dec_hi, dilation);
        approx = circular_analyze(&approx, &bank.dec_lo, dilation);
        details.push(detail);
    }
    debug!(%wavelet, levels, len = n, "stationary decomposition");

    Ok(CoefficientSet::new(
        approx,
        details,
        Transform::Stationary,
        wavelet,
        BoundaryMode::Periodic,
        n,
    ))
}

/// `out[t] = sum_k filter[k] * data[(t - dilation * k) mod N]`.
fn circular_analyze(data: &[f64], filter: &[f64], dilation: usize) -> Vec<f64> {
    let n = data.len();
    (0..n)
        .map(|t| {
            filter
                .iter()
                .enumerate()
                .map(|(k, &f)| f * data[(t + n - (dilation * k) % n) % n])
                .sum()
        })
        .collect()
}

/// Inverts a stationary decomposition, returning exactly `signal_len` samples.
///
/// Each level undoes the analysis step with the reconstruction filters,
/// advanced by `dilation * (L - 1)` to cancel the analysis-synthesis delay,
/// and averages the two redundant halves.
pub(crate) fn reconstruct_stationary(coeffs: &CoefficientSet) -> Vec<f64> {
    let bank = coeffs.wavelet().filter_bank();
    let f = bank.len();
    let mut approx = coeffs.approximation().to_vec();
    let n = approx.len();
    for band in coeffs.bands().iter().skip(1) {
        let Some(level) = band.level() else {
            continue;
        };
        let detail = band.values();
        let dilation = 1 << (level - 1);
        approx = (0..n)
            .map(|t| {
                let sum: f64 = (0..f)
                    .map(|k| {
                        let idx = (t + dilation * (f - 1 - k)) % n;
                        bank.rec_lo[k] * approx[idx] + bank.rec_hi[k] * detail[idx]
                    })
                    .sum();
                0.5 * sum
            })
            .collect();
    }
    approx
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn max_level_powers_of_two() {
        assert_eq!(max_stationary_level(8), 3);
        assert_eq!(max_stationary_level(96), 5);
        assert_eq!(max_stationary_level(9000), 3);
    }

    #[test]
    fn max_level_odd_length() {
        assert_eq!(max_stationary_level(37), 0);
    }

    #[test]
    fn max_level_zero_length() {
        assert_eq!(max_stationary_level(0), 0);
    }

    #[test]
    fn bands_keep_signal_length() {
        let signal = Signal::new((0..64).map(|i| (i as f64 * 0.2).cos()).collect()).unwrap();
        let coeffs = decompose_stationary(&signal, Wavelet::Db4, 4).unwrap();
        assert_eq!(coeffs.depth(), 4);
        assert_eq!(coeffs.bands().len(), 5);
        for band in coeffs.bands() {
            assert_eq!(band.len(), 64);
        }
        assert_eq!(coeffs.transform(), Transform::Stationary);
        assert_eq!(coeffs.mode(), BoundaryMode::Periodic);
    }

    #[test]
    fn length_not_divisible_rejected() {
        let signal = Signal::new(vec![1.0; 12]).unwrap();
        let err = decompose_stationary(&signal, Wavelet::Haar, 3).unwrap_err();
        assert_eq!(err, WaveletError::InvalidLength { len: 12, levels: 3 });
    }

    #[test]
    fn zero_levels_rejected() {
        let signal = Signal::new(vec![1.0; 8]).unwrap();
        let err = decompose_stationary(&signal, Wavelet::Haar, 0).unwrap_err();
        assert_eq!(
            err,
            WaveletError::InvalidLevel {
                requested: 0,
                max: 3
            }
        );
    }

    #[test]
    fn haar_level_one_coefficients() {
        let signal = Signal::new(vec![0.0, 1.0, 0.0, -1.0, 0.0, 1.0, 0.0, -1.0]).unwrap();
        let coeffs = decompose_stationary(&signal, Wavelet::Haar, 1).unwrap();
        let s = std::f64::consts::FRAC_1_SQRT_2;
        // approx[t] = s * (x[t] + x[t-1])
        let expected = [-s, s, s, -s, -s, s, s, -s];
        for (got, want) in coeffs.approximation().iter().zip(expected) {
            assert_abs_diff_eq!(*got, want, epsilon = 1e-12);
        }
    }

    #[test]
    fn reconstruct_inverts_every_wavelet() {
        let data: Vec<f64> = (0..64)
            .map(|i| (i as f64 * 0.37).sin() + 0.25 * (i as f64 * 1.9).cos())
            .collect();
        let signal = Signal::new(data).unwrap();
        for wavelet in Wavelet::all() {
            let coeffs = decompose_stationary(&signal, wavelet, 3).unwrap();
            let rebuilt = reconstruct_stationary(&coeffs);
            assert_eq!(rebuilt.len(), 64);
            for (a, b) in signal.as_slice().iter().zip(&rebuilt) {
                assert_abs_diff_eq!(*a, *b, epsilon = 1e-9);
            }
        }
    }
}
