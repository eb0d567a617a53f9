//! Batch processing over named records.

use ecgnoise_wavelet::{BandProcessor, OmissionSpec, Signal};
use tracing::{debug, info, warn};

use crate::band_stats::{FeatureVector, feature_vector};
use crate::error::FeatureError;
use crate::residual::residual;

/// Source of record samples keyed by name.
///
/// Implemented for any `Fn(&str) -> Result<Vec<f64>, FeatureError>` and by
/// the record stores in `ecgnoise-io`.
pub trait RecordLoader {
    /// Loads the samples of one record.
    ///
    /// # Errors
    ///
    /// Returns [`FeatureError::Load`] when the record cannot be read.
    fn load(&self, name: &str) -> Result<Vec<f64>, FeatureError>;
}

impl<F> RecordLoader for F
where
    F: Fn(&str) -> Result<Vec<f64>, FeatureError>,
{
    fn load(&self, name: &str) -> Result<Vec<f64>, FeatureError> {
        self(name)
    }
}

fn load_signal<L>(loader: &L, name: &str) -> Result<Signal, FeatureError>
where
    L: RecordLoader + ?Sized,
{
    let samples = loader.load(name)?;
    Ok(Signal::new(samples)?)
}

/// Runs `f` over every record in order, stopping at the first failure.
fn run_batch<L, S, T>(
    names: &[S],
    loader: &L,
    mut f: impl FnMut(&Signal) -> Result<T, FeatureError>,
) -> Result<Vec<T>, FeatureError>
where
    L: RecordLoader + ?Sized,
    S: AsRef<str>,
{
    let mut out = Vec::with_capacity(names.len());
    for name in names {
        let name = name.as_ref();
        let result = load_signal(loader, name).and_then(|signal| {
            debug!(record = name, len = signal.len(), "processing record");
            f(&signal)
        });
        match result {
            Ok(value) => out.push(value),
            Err(e) => {
                warn!(record = name, error = %e, "record failed, aborting batch");
                return Err(e);
            }
        }
    }
    Ok(out)
}

/// Computes the residual of every named record, in input order.
///
/// The omission spec is checked against the processor depth before any
/// record is loaded. The first loader or computation failure aborts the
/// batch; no partial list is returned.
///
/// # Errors
///
/// | Variant | Trigger |
/// |---------|---------|
/// | [`FeatureError::Load`] | the loader fails for a record |
/// | [`FeatureError::Wavelet`] | invalid omission spec, invalid record samples, or a transform error |
pub fn batch_residuals<L, S>(
    names: &[S],
    loader: &L,
    processor: &BandProcessor,
    spec: &OmissionSpec,
) -> Result<Vec<f64>, FeatureError>
where
    L: RecordLoader + ?Sized,
    S: AsRef<str>,
{
    spec.validate(processor.levels())?;
    let residuals = run_batch(names, loader, |signal| residual(signal, processor, spec))?;
    info!(n_records = residuals.len(), "residuals computed");
    Ok(residuals)
}

/// Computes the band-statistics feature vector of every named record, in
/// input order, with the same abort-on-first-failure policy as
/// [`batch_residuals`].
///
/// # Errors
///
/// | Variant | Trigger |
/// |---------|---------|
/// | [`FeatureError::Load`] | the loader fails for a record |
/// | [`FeatureError::Wavelet`] | invalid record samples or a transform error |
pub fn batch_features<L, S>(
    names: &[S],
    loader: &L,
    processor: &BandProcessor,
) -> Result<Vec<FeatureVector>, FeatureError>
where
    L: RecordLoader + ?Sized,
    S: AsRef<str>,
{
    let features = run_batch(names, loader, |signal| feature_vector(signal, processor))?;
    info!(n_records = features.len(), "feature vectors computed");
    Ok(features)
}
