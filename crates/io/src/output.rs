//! Result writers: CSV tables and JSON documents.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use serde::Serialize;
use tracing::info;

use crate::error::IoError;

/// Residual of one record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResidualRecord {
    /// Record name.
    pub record: String,
    /// Mean absolute reconstruction error.
    pub residual: f64,
}

/// Feature vector of one record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeatureRecord {
    /// Record name.
    pub record: String,
    /// Band statistics, approximation band first.
    pub features: Vec<f64>,
}

/// Output encoding, picked from the file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Comma separated values with a header row.
    Csv,
    /// Pretty-printed JSON.
    Json,
}

impl OutputFormat {
    /// `Json` for a `.json` extension (any case), `Csv` otherwise.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Self::Json,
            _ => Self::Csv,
        }
    }
}

/// Quotes a CSV field when it holds a separator, quote or newline.
fn csv_field(value: &str) -> String {
    if value.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

fn write_residual_rows<W: Write>(w: &mut W, records: &[ResidualRecord]) -> std::io::Result<()> {
    writeln!(w, "record,residual")?;
    for r in records {
        writeln!(w, "{},{}", csv_field(&r.record), r.residual)?;
    }
    w.flush()
}

fn write_feature_rows<W: Write>(
    w: &mut W,
    columns: &[String],
    records: &[FeatureRecord],
) -> std::io::Result<()> {
    let mut header = vec!["record".to_string()];
    header.extend(columns.iter().map(|c| csv_field(c)));
    writeln!(w, "{}", header.join(","))?;
    for r in records {
        let mut row = Vec::with_capacity(r.features.len() + 1);
        row.push(csv_field(&r.record));
        row.extend(r.features.iter().map(f64::to_string));
        writeln!(w, "{}", row.join(","))?;
    }
    w.flush()
}

fn create(path: &Path) -> Result<BufWriter<File>, IoError> {
    File::create(path)
        .map(BufWriter::new)
        .map_err(|e| IoError::writing(path, &e))
}

/// Writes `record,residual` rows to `path`.
///
/// # Errors
///
/// Returns [`IoError::Write`] if the file cannot be created or written.
pub fn write_residuals_csv(path: &Path, records: &[ResidualRecord]) -> Result<(), IoError> {
    let mut w = create(path)?;
    write_residual_rows(&mut w, records).map_err(|e| IoError::writing(path, &e))?;
    info!(path = %path.display(), rows = records.len(), "wrote residuals");
    Ok(())
}

/// Writes a `record,<columns...>` header and one row per record to `path`.
///
/// # Errors
///
/// Returns [`IoError::Write`] if a record's width differs from `columns`,
/// or if the file cannot be created or written.
pub fn write_features_csv(
    path: &Path,
    columns: &[String],
    records: &[FeatureRecord],
) -> Result<(), IoError> {
    if let Some(bad) = records.iter().find(|r| r.features.len() != columns.len()) {
        return Err(IoError::Write {
            path: path.to_path_buf(),
            reason: format!(
                "record '{}' has {} features, header has {}",
                bad.record,
                bad.features.len(),
                columns.len()
            ),
        });
    }
    let mut w = create(path)?;
    write_feature_rows(&mut w, columns, records).map_err(|e| IoError::writing(path, &e))?;
    info!(
        path = %path.display(),
        rows = records.len(),
        columns = columns.len(),
        "wrote features"
    );
    Ok(())
}

/// Serialises `value` to a pretty-printed JSON string.
///
/// # Errors
///
/// Returns [`IoError::Serialization`] if serialisation fails.
pub fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String, IoError> {
    serde_json::to_string_pretty(value).map_err(|e| IoError::Serialization {
        reason: e.to_string(),
    })
}

/// Writes `value` as pretty-printed JSON to `path`.
///
/// # Errors
///
/// [`IoError::Serialization`] or [`IoError::Write`].
pub fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<(), IoError> {
    let json = to_json(value)?;
    std::fs::write(path, json).map_err(|e| IoError::writing(path, &e))?;
    info!(path = %path.display(), "wrote json");
    Ok(())
}
