//! Wavelet bases and their filter banks.

use std::f64::consts::FRAC_1_SQRT_2;
use std::fmt;

use crate::error::WaveletError;

const DB2: [f64; 4] = [
    0.48296291314469025,
    0.8365163037374691,
    0.22414386804185735,
    -0.12940952255092145,
];

const DB3: [f64; 6] = [
    0.3326705529509569,
    0.8068915093133388,
    0.4598775021193313,
    -0.13501102001039084,
    -0.08544127388224149,
    0.035226291882100656,
];

const DB4: [f64; 8] = [
    0.23037781330885523,
    0.7148465705525415,
    0.6308807679295904,
    -0.02798376941698385,
    -0.18703481171888114,
    0.030841381835986965,
    0.032883011666982945,
    -0.010597401784997278,
];

const SYM4: [f64; 8] = [
    0.032223100604042702,
    -0.012603967262037833,
    -0.099219543576847216,
    0.29785779560527736,
    0.80373875180591614,
    0.49761866763201545,
    -0.02963552764599851,
    -0.075765714789273325,
];

const COIF1: [f64; 6] = [
    -0.0727326195128539,
    0.3378976624578092,
    0.8525720202122554,
    0.38486484686420286,
    -0.0727326195128539,
    -0.01565572813546454,
];

// bior2.2, zero-padded to a common length of 6.
const BIOR22_A: f64 = 0.1767766952966369;
const BIOR22_B: f64 = 0.3535533905932738;
const BIOR22_C: f64 = 1.0606601717798214;
const BIOR22_D: f64 = 0.7071067811865476;

/// Supported wavelet bases.
///
/// Six orthogonal bases from the Haar, Daubechies, Symlet and Coiflet
/// families, plus the biorthogonal `bior2.2` spline wavelet.
///
/// # Example
///
/// ```ignore
/// use ecgnoise_wavelet::Wavelet;
///
/// let wavelet = Wavelet::from_name("sym4")?;
/// assert_eq!(wavelet.length(), 8);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Wavelet {
    /// Haar wavelet, also known as `db1` (length 2).
    Haar,
    /// Daubechies 2, identical to `sym2` (length 4).
    Db2,
    /// Daubechies 3, identical to `sym3` (length 6).
    Db3,
    /// Daubechies 4 (length 8).
    Db4,
    /// Symlet 4 (length 8).
    Sym4,
    /// Coiflet 1 (length 6).
    Coif1,
    /// Biorthogonal 2.2 (length 6).
    Bior22,
}

impl Default for Wavelet {
    /// Returns `Wavelet::Sym4` as the default basis.
    fn default() -> Self {
        Self::Sym4
    }
}

/// Analysis and synthesis filters for one wavelet basis.
///
/// All four filters share the same length.
#[derive(Clone, Debug, PartialEq)]
pub struct FilterBank {
    /// Lowpass decomposition filter.
    pub dec_lo: Vec<f64>,
    /// Highpass decomposition filter.
    pub dec_hi: Vec<f64>,
    /// Lowpass reconstruction filter.
    pub rec_lo: Vec<f64>,
    /// Highpass reconstruction filter.
    pub rec_hi: Vec<f64>,
}

impl FilterBank {
    /// Builds an orthogonal bank from its scaling (reconstruction lowpass)
    /// filter using the quadrature mirror relation.
    fn orthogonal(scaling: &[f64]) -> Self {
        let n = scaling.len();
        let rec_lo = scaling.to_vec();
        let rec_hi: Vec<f64> = (0..n)
            .map(|k| {
                let sign = if k % 2 == 0 { 1.0 } else { -1.0 };
                sign * scaling[n - 1 - k]
            })
            .collect();
        let dec_lo = rec_lo.iter().rev().copied().collect();
        let dec_hi = rec_hi.iter().rev().copied().collect();
        Self {
            dec_lo,
            dec_hi,
            rec_lo,
            rec_hi,
        }
    }

    /// Returns the common filter length.
    pub fn len(&self) -> usize {
        self.dec_lo.len()
    }

    /// Returns `true` if the bank has no taps (never the case for a built-in basis).
    pub fn is_empty(&self) -> bool {
        self.dec_lo.is_empty()
    }
}

impl Wavelet {
    /// Returns the filter length (number of taps).
    pub fn length(&self) -> usize {
        match self {
            Self::Haar => 2,
            Self::Db2 => 4,
            Self::Db3 | Self::Coif1 | Self::Bior22 => 6,
            Self::Db4 | Self::Sym4 => 8,
        }
    }

    /// Returns `true` for orthogonal bases.
    pub fn is_orthogonal(&self) -> bool {
        !matches!(self, Self::Bior22)
    }

    /// Returns the canonical lowercase name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Haar => "haar",
            Self::Db2 => "db2",
            Self::Db3 => "db3",
            Self::Db4 => "db4",
            Self::Sym4 => "sym4",
            Self::Coif1 => "coif1",
            Self::Bior22 => "bior2.2",
        }
    }

    /// Returns the analysis and synthesis filters.
    pub fn filter_bank(&self) -> FilterBank {
        match self {
            Self::Haar => FilterBank::orthogonal(&[FRAC_1_SQRT_2, FRAC_1_SQRT_2]),
            Self::Db2 => FilterBank::orthogonal(&DB2),
            Self::Db3 => FilterBank::orthogonal(&DB3),
            Self::Db4 => FilterBank::orthogonal(&DB4),
            Self::Sym4 => FilterBank::orthogonal(&SYM4),
            Self::Coif1 => FilterBank::orthogonal(&COIF1),
            Self::Bior22 => FilterBank {
                dec_lo: vec![0.0, -BIOR22_A, BIOR22_B, BIOR22_C, BIOR22_B, -BIOR22_A],
                dec_hi: vec![0.0, BIOR22_B, -BIOR22_D, BIOR22_B, 0.0, 0.0],
                rec_lo: vec![0.0, BIOR22_B, BIOR22_D, BIOR22_B, 0.0, 0.0],
                rec_hi: vec![0.0, BIOR22_A, BIOR22_B, -BIOR22_C, BIOR22_B, BIOR22_A],
            },
        }
    }

    /// Parses a wavelet from a case-insensitive name string.
    ///
    /// # Supported Names
    ///
    /// | Input | Wavelet |
    /// |-------|---------|
    /// | `"haar"`, `"db1"` | [`Wavelet::Haar`] |
    /// | `"db2"`, `"sym2"` | [`Wavelet::Db2`] |
    /// | `"db3"`, `"sym3"` | [`Wavelet::Db3`] |
    /// | `"db4"` | [`Wavelet::Db4`] |
    /// | `"sym4"` | [`Wavelet::Sym4`] |
    /// | `"coif1"` | [`Wavelet::Coif1`] |
    /// | `"bior2.2"` | [`Wavelet::Bior22`] |
    ///
    /// # Errors
    ///
    /// Returns [`WaveletError::UnsupportedWavelet`] if the name is not recognized.
    pub fn from_name(name: &str) -> Result<Self, WaveletError> {
        match name.to_lowercase().as_str() {
            "haar" | "db1" => Ok(Self::Haar),
            "db2" | "sym2" => Ok(Self::Db2),
            "db3" | "sym3" => Ok(Self::Db3),
            "db4" => Ok(Self::Db4),
            "sym4" => Ok(Self::Sym4),
            "coif1" => Ok(Self::Coif1),
            "bior2.2" => Ok(Self::Bior22),
            _ => Err(WaveletError::UnsupportedWavelet(name.to_string())),
        }
    }

    /// All supported bases, in declaration order.
    pub fn all() -> [Wavelet; 7] {
        [
            Self::Haar,
            Self::Db2,
            Self::Db3,
            Self::Db4,
            Self::Sym4,
            Self::Coif1,
            Self::Bior22,
        ]
    }
}

impl fmt::Display for Wavelet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
