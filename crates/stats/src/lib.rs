//! Descriptive statistics for ECG coefficient bands.
//!
//! Spread measures use the population (N) denominator.

/// Smallest value of a slice. Returns `None` if empty.
pub fn min(data: &[f64]) -> Option<f64> {
    data.iter().copied().reduce(f64::min)
}

/// Largest value of a slice. Returns `None` if empty.
pub fn max(data: &[f64]) -> Option<f64> {
    data.iter().copied().reduce(f64::max)
}

/// Arithmetic mean of a slice. Returns 0.0 if empty.
pub fn mean(data: &[f64]) -> f64 {
    if data.is_empty() {
        return 0.0;
    }
    let sum: f64 = data.iter().sum();
    sum / data.len() as f64
}

/// Population variance (N denominator). Returns 0.0 if empty.
pub fn variance(data: &[f64]) -> f64 {
    let n = data.len();
    if n == 0 {
        return 0.0;
    }
    let nf = n as f64;
    let mean = data.iter().sum::<f64>() / nf;
    data.iter().map(|&x| (x - mean) * (x - mean)).sum::<f64>() / nf
}

/// Population standard deviation (N denominator). Returns 0.0 if empty.
pub fn sd(data: &[f64]) -> f64 {
    variance(data).sqrt()
}

/// Mean of the squared values ("power"). Returns 0.0 if empty.
pub fn mean_square(data: &[f64]) -> f64 {
    if data.is_empty() {
        return 0.0;
    }
    data.iter().map(|&x| x * x).sum::<f64>() / data.len() as f64
}

/// Mean of the absolute values. Returns 0.0 if empty.
pub fn mean_abs(data: &[f64]) -> f64 {
    if data.is_empty() {
        return 0.0;
    }
    data.iter().map(|x| x.abs()).sum::<f64>() / data.len() as f64
}

/// Mean absolute difference over the first `a.len()` samples.
///
/// `b` must be at least as long as `a`; extra trailing samples in `b` are
/// ignored. Returns 0.0 if `a` is empty.
///
/// # Panics
///
/// Panics if `b` is shorter than `a`.
pub fn mean_abs_diff(a: &[f64], b: &[f64]) -> f64 {
    assert!(
        b.len() >= a.len(),
        "mean_abs_diff: second slice shorter than first ({} < {})",
        b.len(),
        a.len()
    );
    if a.is_empty() {
        return 0.0;
    }
    let total: f64 = a.iter().zip(b).map(|(x, y)| (x - y).abs()).sum();
    total / a.len() as f64
}
