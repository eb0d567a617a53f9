//! Boundary extension modes for the decimated transform.

use std::fmt;

use crate::error::WaveletError;

/// Policy for extending a finite signal past its edges during filtering.
///
/// With `x = [a, b, c]`:
///
/// | Mode | Left extension | Right extension |
/// |------|----------------|-----------------|
/// | [`BoundaryMode::Zero`] | `0 0` | `0 0` |
/// | [`BoundaryMode::Constant`] | `a a` | `c c` |
/// | [`BoundaryMode::Symmetric`] | `b a` | `c b` |
/// | [`BoundaryMode::Reflect`] | `c b` | `b a` |
/// | [`BoundaryMode::Periodic`] | `b c` | `a b` |
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BoundaryMode {
    /// Zero padding.
    Zero,
    /// Repeat the edge sample.
    Constant,
    /// Half-sample mirror: the edge sample is repeated.
    Symmetric,
    /// Whole-sample mirror: the edge sample is not repeated.
    Reflect,
    /// Circular wrap-around.
    Periodic,
}

impl Default for BoundaryMode {
    /// Returns `BoundaryMode::Symmetric` as the default mode.
    fn default() -> Self {
        Self::Symmetric
    }
}

impl BoundaryMode {
    /// Returns the sample at `index` of the extended signal.
    ///
    /// Indices inside `0..data.len()` return the data itself; indices
    /// outside are resolved by the mode, folding repeatedly when the
    /// extension is longer than the signal.
    ///
    /// # Panics
    ///
    /// Panics if `data` is empty.
    pub fn sample(self, data: &[f64], index: isize) -> f64 {
        let n = data.len() as isize;
        assert!(n > 0, "BoundaryMode::sample: data must not be empty");
        if (0..n).contains(&index) {
            return data[index as usize];
        }
        match self {
            Self::Zero => 0.0,
            Self::Constant => {
                if index < 0 {
                    data[0]
                } else {
                    data[(n - 1) as usize]
                }
            }
            Self::Symmetric => {
                let m = index.rem_euclid(2 * n);
                if m < n {
                    data[m as usize]
                } else {
                    data[(2 * n - 1 - m) as usize]
                }
            }
            Self::Reflect => {
                if n == 1 {
                    return data[0];
                }
                let period = 2 * n - 2;
                let m = index.rem_euclid(period);
                if m < n {
                    data[m as usize]
                } else {
                    data[(period - m) as usize]
                }
            }
            Self::Periodic => data[index.rem_euclid(n) as usize],
        }
    }

    /// Returns the canonical lowercase name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Zero => "zero",
            Self::Constant => "constant",
            Self::Symmetric => "symmetric",
            Self::Reflect => "reflect",
            Self::Periodic => "periodic",
        }
    }

    /// Parses a boundary mode from a case-insensitive name string.
    ///
    /// `"zeros"` and `"zeropad"` are accepted as aliases of `"zero"`.
    ///
    /// # Errors
    ///
    /// Returns [`WaveletError::UnsupportedMode`] if the name is not recognized.
    pub fn from_name(name: &str) -> Result<Self, WaveletError> {
        match name.to_lowercase().as_str() {
            "zero" | "zeros" | "zeropad" => Ok(Self::Zero),
            "constant" => Ok(Self::Constant),
            "symmetric" => Ok(Self::Symmetric),
            "reflect" => Ok(Self::Reflect),
            "periodic" => Ok(Self::Periodic),
            _ => Err(WaveletError::UnsupportedMode(name.to_string())),
        }
    }

    /// All supported modes, in declaration order.
    pub fn all() -> [BoundaryMode; 5] {
        [
            Self::Zero,
            Self::Constant,
            Self::Symmetric,
            Self::Reflect,
            Self::Periodic,
        ]
    }
}

impl fmt::Display for BoundaryMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
