//! Decimated multilevel Discrete Wavelet Transform (DWT).

use tracing::debug;

use crate::band::{CoefficientSet, Transform};
use crate::error::WaveletError;
use crate::filter::Wavelet;
use crate::mode::BoundaryMode;
use crate::series::Signal;

/// Computes the maximum useful decimated decomposition level for a given
/// signal length and wavelet.
///
/// The maximum level `J` is `floor(log2(N / (L - 1)))`, where `L` is the
/// filter length and `N` the signal length (integer division). Beyond it
/// every coefficient is dominated by the boundary extension.
///
/// # Example
///
/// ```ignore
/// use ecgnoise_wavelet::{Wavelet, max_level};
///
/// assert_eq!(max_level(9000, Wavelet::Sym4), 10);
/// ```
pub fn max_level(n: usize, wavelet: Wavelet) -> usize {
    let l = wavelet.length();
    if l < 2 || n < l - 1 {
        return 0;
    }
    (n / (l - 1)).ilog2() as usize
}

/// Length of the band produced by one analysis step on `n` samples.
fn step_len(n: usize, filter_len: usize) -> usize {
    (n + filter_len - 1) / 2
}

/// One analysis step: full convolution with `filter` over the extended
/// input, keeping the odd-indexed outputs.
fn analyze(data: &[f64], filter: &[f64], mode: BoundaryMode) -> Vec<f64> {
    let out_len = step_len(data.len(), filter.len());
    (0..out_len)
        .map(|o| {
            let centre = (2 * o + 1) as isize;
            filter
                .iter()
                .enumerate()
                .map(|(j, &f)| f * mode.sample(data, centre - j as isize))
                .sum()
        })
        .collect()
}

/// One synthesis step: upsample both bands, convolve with the
/// reconstruction filters, and keep the part not affected by the filter
/// tails.
///
/// Produces `2 * n - L + 2` samples for bands of length `n`.
fn synthesize(approx: &[f64], detail: &[f64], rec_lo: &[f64], rec_hi: &[f64]) -> Vec<f64> {
    let n = approx.len().min(detail.len());
    let f = rec_lo.len();
    let start = f.saturating_sub(2);
    let end = 2 * n;
    let mut out = Vec::with_capacity(end.saturating_sub(start));
    for k in start..end {
        let mut acc = 0.0;
        for j in 0..f {
            if j > k {
                break;
            }
            let m = k - j;
            if m % 2 != 0 {
                continue;
            }
            let idx = m / 2;
            if idx < n {
                acc += rec_lo[j] * approx[idx] + rec_hi[j] * detail[idx];
            }
        }
        out.push(acc);
    }
    out
}

/// Computes the decimated multilevel DWT of a signal.
///
/// The returned set holds `levels + 1` bands: the approximation at depth
/// `levels` followed by detail bands from coarsest to finest.
///
/// # Errors
///
/// | Variant | Trigger |
/// |---------|---------|
/// | [`WaveletError::InvalidLevel`] | `levels` is 0 or exceeds [`max_level`] |
pub fn decompose(
    signal: &Signal,
    wavelet: Wavelet,
    levels: usize,
    mode: BoundaryMode,
) -> Result<CoefficientSet, WaveletError> {
    let n = signal.len();
    let max = max_level(n, wavelet);
    if levels == 0 || levels > max {
        return Err(WaveletError::InvalidLevel {
            requested: levels,
            max,
        });
    }

    let bank = wavelet.filter_bank();
    let mut approx = signal.as_slice().to_vec();
    let mut details = Vec::with_capacity(levels);
    for _ in 0..levels {
        let detail = analyze(&approx, &bank.dec_hi, mode);
        approx = analyze(&approx, &bank.dec_lo, mode);
        details.push(detail);
    }
    debug!(
        %wavelet,
        %mode,
        levels,
        len = n,
        approx_len = approx.len(),
        "decimated decomposition"
    );

    Ok(CoefficientSet::new(
        approx,
        details,
        Transform::Decimated,
        wavelet,
        mode,
        n,
    ))
}

/// Inverts a decimated decomposition.
///
/// The output may be up to one sample per level longer than
/// [`CoefficientSet::signal_len`]; callers compare only the leading
/// `signal_len` samples.
pub(crate) fn reconstruct_decimated(coeffs: &CoefficientSet) -> Vec<f64> {
    let bank = coeffs.wavelet().filter_bank();
    let mut approx = coeffs.approximation().to_vec();
    for band in coeffs.bands().iter().skip(1) {
        let detail = band.values();
        if approx.len() > detail.len() {
            approx.truncate(detail.len());
        }
        approx = synthesize(&approx, detail, &bank.rec_lo, &bank.rec_hi);
    }
    approx
}
