//! # ecgnoise-wavelet
//!
//! Wavelet decomposition, band omission and reconstruction for single-lead
//! ECG signals.
//!
//! ## Pipeline
//!
//! ```mermaid
//! graph LR
//!     A["Signal::new(data)?"] -->|"validate"| B["Signal"]
//!     B -->|"decompose(..)? / decompose_stationary(..)?"| C["CoefficientSet"]
//!     C -->|"omit_bands(coeffs, &spec)?"| C
//!     C -->|"reconstruct(&coeffs)"| D["Vec<f64>"]
//! ```
//!
//! ## Supported Wavelets
//!
//! | Wavelet | Length | Family |
//! |---------|--------|--------|
//! | [`Wavelet::Haar`] | 2 | Haar / Daubechies 1 |
//! | [`Wavelet::Db2`] | 4 | Daubechies |
//! | [`Wavelet::Db3`] | 6 | Daubechies |
//! | [`Wavelet::Db4`] | 8 | Daubechies |
//! | [`Wavelet::Sym4`] | 8 | Symlet |
//! | [`Wavelet::Coif1`] | 6 | Coiflet |
//! | [`Wavelet::Bior22`] | 6 | Biorthogonal spline |
//!
//! ## Quick Start
//!
//! ```ignore
//! use ecgnoise_wavelet::{BoundaryMode, OmissionSpec, Signal, Wavelet, decompose_and_reconstruct};
//!
//! let signal = Signal::new(samples)?;
//! let spec = OmissionSpec::new([1], false);
//! let rebuilt = decompose_and_reconstruct(&signal, Wavelet::Sym4, 5, BoundaryMode::Symmetric, &spec)?;
//! let smoothed = &rebuilt[..signal.len()];
//! ```

mod band;
mod dwt;
mod error;
mod filter;
mod mode;
mod omit;
mod processor;
mod series;
mod swt;

pub use band::{Band, CoefficientSet, Transform};
pub use dwt::{decompose, max_level};
pub use error::WaveletError;
pub use filter::{FilterBank, Wavelet};
pub use mode::BoundaryMode;
pub use omit::{OmissionSpec, omit_bands};
pub use processor::{
    BandProcessor, decompose_and_reconstruct, decompose_stationary_and_reconstruct, reconstruct,
};
pub use series::Signal;
pub use swt::{decompose_stationary, max_stationary_level};
