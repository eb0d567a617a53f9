//! Record stores: named ECG records in a directory.

use std::fmt;
use std::path::{Path, PathBuf};

use ecgnoise_features::{FeatureError, RecordLoader};
use tracing::debug;

use crate::error::IoError;
use crate::mat::read_mat;
use crate::text::read_samples;

/// Default MAT variable holding the samples.
pub const DEFAULT_VARIABLE: &str = "val";

/// Default divisor applied to raw samples (ADC units to millivolts).
pub const DEFAULT_SCALE: f64 = 1000.0;

/// On-disk layout of the records in a store.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RecordFormat {
    /// MATLAB level-4 `.mat` files.
    #[default]
    Mat,
    /// Whitespace or comma separated text files.
    Text,
}

impl RecordFormat {
    /// Parses `mat` or `text` (also `txt`, `csv`), case-insensitively.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "mat" => Some(Self::Mat),
            "text" | "txt" | "csv" => Some(Self::Text),
            _ => None,
        }
    }

    /// Canonical name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Mat => "mat",
            Self::Text => "text",
        }
    }
}

impl fmt::Display for RecordFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

fn scaled(samples: Vec<f64>, scale: f64) -> Vec<f64> {
    samples.into_iter().map(|x| x / scale).collect()
}

fn load_error(record: &str, err: IoError) -> FeatureError {
    FeatureError::Load {
        record: record.to_string(),
        reason: err.to_string(),
    }
}

/// Records stored as `<dir>/<name>.mat`.
///
/// The first row of the matrix named `variable` is returned, divided by
/// `scale`.
#[derive(Debug, Clone)]
pub struct MatRecordStore {
    dir: PathBuf,
    variable: String,
    scale: f64,
}

impl MatRecordStore {
    /// Store over `dir` reading `val` scaled by 1/1000.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            variable: DEFAULT_VARIABLE.to_string(),
            scale: DEFAULT_SCALE,
        }
    }

    /// Sets the matrix name to read.
    pub fn with_variable(mut self, variable: impl Into<String>) -> Self {
        self.variable = variable.into();
        self
    }

    /// Sets the divisor applied to every sample.
    pub fn with_scale(mut self, scale: f64) -> Self {
        self.scale = scale;
        self
    }

    /// Record directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the file backing `name`.
    pub fn path_for(&self, name: &str) -> PathBuf {
        self.dir.join(format!("{name}.mat"))
    }

    /// Reads and scales one record.
    ///
    /// # Errors
    ///
    /// Propagates [`read_mat`] errors. A matrix with no rows is
    /// [`IoError::Format`].
    pub fn read(&self, name: &str) -> Result<Vec<f64>, IoError> {
        let path = self.path_for(name);
        let matrix = read_mat(&path, &self.variable)?;
        let row = matrix
            .row(0)
            .ok_or_else(|| IoError::format(&path, format!("matrix '{}' has no rows", self.variable)))?;
        debug!(record = name, samples = row.len(), "loaded mat record");
        Ok(scaled(row, self.scale))
    }
}

impl RecordLoader for MatRecordStore {
    fn load(&self, name: &str) -> Result<Vec<f64>, FeatureError> {
        self.read(name).map_err(|e| load_error(name, e))
    }
}

/// Records stored as `<dir>/<name>.<extension>` text files.
#[derive(Debug, Clone)]
pub struct TextRecordStore {
    dir: PathBuf,
    extension: String,
    scale: f64,
}

impl TextRecordStore {
    /// Store over `dir` reading `.txt` files scaled by 1/1000.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            extension: "txt".to_string(),
            scale: DEFAULT_SCALE,
        }
    }

    /// Sets the file extension, without the leading dot.
    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into();
        self
    }

    /// Sets the divisor applied to every sample.
    pub fn with_scale(mut self, scale: f64) -> Self {
        self.scale = scale;
        self
    }

    /// Record directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the file backing `name`.
    pub fn path_for(&self, name: &str) -> PathBuf {
        self.dir.join(format!("{name}.{}", self.extension))
    }

    /// Reads and scales one record.
    ///
    /// # Errors
    ///
    /// Propagates [`read_samples`] errors.
    pub fn read(&self, name: &str) -> Result<Vec<f64>, IoError> {
        let samples = read_samples(&self.path_for(name))?;
        debug!(record = name, samples = samples.len(), "loaded text record");
        Ok(scaled(samples, self.scale))
    }
}

impl RecordLoader for TextRecordStore {
    fn load(&self, name: &str) -> Result<Vec<f64>, FeatureError> {
        self.read(name).map_err(|e| load_error(name, e))
    }
}

/// Either kind of store, chosen at runtime.
#[derive(Debug, Clone)]
pub enum RecordStore {
    /// MAT-backed store.
    Mat(MatRecordStore),
    /// Text-backed store.
    Text(TextRecordStore),
}

impl RecordStore {
    /// Builds a store of `format` over `dir`.
    ///
    /// `variable` only applies to MAT stores.
    pub fn open(format: RecordFormat, dir: impl Into<PathBuf>, variable: &str, scale: f64) -> Self {
        match format {
            RecordFormat::Mat => Self::Mat(
                MatRecordStore::new(dir)
                    .with_variable(variable)
                    .with_scale(scale),
            ),
            RecordFormat::Text => Self::Text(TextRecordStore::new(dir).with_scale(scale)),
        }
    }

    /// Format of the underlying store.
    pub fn format(&self) -> RecordFormat {
        match self {
            Self::Mat(_) => RecordFormat::Mat,
            Self::Text(_) => RecordFormat::Text,
        }
    }

    /// Record directory.
    pub fn dir(&self) -> &Path {
        match self {
            Self::Mat(s) => s.dir(),
            Self::Text(s) => s.dir(),
        }
    }

    /// Reads and scales one record.
    ///
    /// # Errors
    ///
    /// As for the underlying store's `read`.
    pub fn read(&self, name: &str) -> Result<Vec<f64>, IoError> {
        match self {
            Self::Mat(s) => s.read(name),
            Self::Text(s) => s.read(name),
        }
    }
}

impl RecordLoader for RecordStore {
    fn load(&self, name: &str) -> Result<Vec<f64>, FeatureError> {
        self.read(name).map_err(|e| load_error(name, e))
    }
}
