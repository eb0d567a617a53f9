//! MATLAB level-4 MAT file reader.
//!
//! A level-4 file is a plain sequence of matrices. Each one is a 20-byte
//! header of five `i32` values (`type`, `mrows`, `ncols`, `imagf`,
//! `namlen`), the NUL-terminated name, then `mrows * ncols` elements in
//! column-major order (followed by as many imaginary elements when `imagf`
//! is set).
//!
//! The `type` field packs four decimal digits `MOPT`:
//!
//! | Digit | Meaning |
//! |-------|---------|
//! | M | byte order: 0 little-endian, 1 big-endian |
//! | O | reserved, always 0 |
//! | P | element type: 0 f64, 1 f32, 2 i32, 3 i16, 4 u16, 5 u8 |
//! | T | matrix class: 0 numeric, 1 text, 2 sparse |

use std::path::Path;

use tracing::{debug, trace};

use crate::error::IoError;

const HEADER_LEN: usize = 20;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ByteOrder {
    Little,
    Big,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Precision {
    F64,
    F32,
    I32,
    I16,
    U16,
    U8,
}

macro_rules! decode_as {
    ($chunk:expr, $order:expr, $ty:ty, $width:literal) => {{
        let mut raw = [0u8; $width];
        raw.copy_from_slice($chunk);
        match $order {
            ByteOrder::Little => <$ty>::from_le_bytes(raw) as f64,
            ByteOrder::Big => <$ty>::from_be_bytes(raw) as f64,
        }
    }};
}

impl Precision {
    fn from_code(code: i32) -> Option<Self> {
        match code {
            0 => Some(Self::F64),
            1 => Some(Self::F32),
            2 => Some(Self::I32),
            3 => Some(Self::I16),
            4 => Some(Self::U16),
            5 => Some(Self::U8),
            _ => None,
        }
    }

    fn width(self) -> usize {
        match self {
            Self::F64 => 8,
            Self::F32 | Self::I32 => 4,
            Self::I16 | Self::U16 => 2,
            Self::U8 => 1,
        }
    }

    /// Decodes one element; `chunk` is exactly `self.width()` bytes.
    fn decode(self, chunk: &[u8], order: ByteOrder) -> f64 {
        match self {
            Self::F64 => decode_as!(chunk, order, f64, 8),
            Self::F32 => decode_as!(chunk, order, f32, 4),
            Self::I32 => decode_as!(chunk, order, i32, 4),
            Self::I16 => decode_as!(chunk, order, i16, 2),
            Self::U16 => decode_as!(chunk, order, u16, 2),
            Self::U8 => f64::from(chunk[0]),
        }
    }
}

#[derive(Debug)]
struct Header {
    order: ByteOrder,
    precision: Precision,
    class: i32,
    rows: usize,
    cols: usize,
    imaginary: bool,
    name_len: usize,
}

impl Header {
    fn parse(raw: &[u8]) -> Result<Self, String> {
        let little = read_i32(&raw[0..4], ByteOrder::Little);
        let order = if (0..1000).contains(&little) {
            ByteOrder::Little
        } else if (1000..2000).contains(&read_i32(&raw[0..4], ByteOrder::Big)) {
            ByteOrder::Big
        } else {
            return Err(format!("unrecognised type code {little}"));
        };

        let kind = read_i32(&raw[0..4], order);
        if kind / 100 % 10 != 0 {
            return Err(format!("type code {kind} has a non-zero reserved digit"));
        }
        let precision = Precision::from_code(kind / 10 % 10)
            .ok_or_else(|| format!("type code {kind} has an unknown element type"))?;

        let rows = read_i32(&raw[4..8], order);
        let cols = read_i32(&raw[8..12], order);
        let imagf = read_i32(&raw[12..16], order);
        let name_len = read_i32(&raw[16..20], order);
        if rows < 0 || cols < 0 {
            return Err(format!("negative dimensions {rows}x{cols}"));
        }
        if name_len < 1 {
            return Err(format!("invalid name length {name_len}"));
        }

        Ok(Self {
            order,
            precision,
            class: kind % 10,
            rows: rows as usize,
            cols: cols as usize,
            imaginary: imagf != 0,
            name_len: name_len as usize,
        })
    }

    /// Bytes of element data following the name, or `None` on overflow.
    fn data_len(&self) -> Option<usize> {
        let parts = if self.imaginary { 2 } else { 1 };
        self.rows
            .checked_mul(self.cols)?
            .checked_mul(self.precision.width())?
            .checked_mul(parts)
    }
}

fn read_i32(bytes: &[u8], order: ByteOrder) -> i32 {
    let mut raw = [0u8; 4];
    raw.copy_from_slice(&bytes[..4]);
    match order {
        ByteOrder::Little => i32::from_le_bytes(raw),
        ByteOrder::Big => i32::from_be_bytes(raw),
    }
}

fn decode_name(raw: &[u8]) -> String {
    let end = raw.iter().position(|&b| b == 0).unwrap_or(raw.len());
    String::from_utf8_lossy(&raw[..end]).into_owned()
}

/// A real matrix read from a MAT file, stored column-major.
#[derive(Clone, Debug, PartialEq)]
pub struct MatMatrix {
    name: String,
    rows: usize,
    cols: usize,
    values: Vec<f64>,
}

impl MatMatrix {
    /// Matrix name as stored in the file.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Element at `(row, col)`.
    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        self.values.get(col * self.rows + row).copied()
    }

    /// Copies out one row, or `None` if `row` is out of range.
    pub fn row(&self, row: usize) -> Option<Vec<f64>> {
        if row >= self.rows {
            return None;
        }
        Some(
            (0..self.cols)
                .map(|col| self.values[col * self.rows + row])
                .collect(),
        )
    }
}

/// Finds the matrix called `variable` in the bytes of a level-4 MAT file.
///
/// `path` is only used in error messages. Matrices with other names are
/// skipped without decoding.
///
/// # Errors
///
/// | Variant | Trigger |
/// |---------|---------|
/// | [`IoError::Format`] | level-5 file, truncated or malformed header, complex or sparse target |
/// | [`IoError::MissingVariable`] | no matrix named `variable` |
pub fn parse_mat(bytes: &[u8], variable: &str, path: &Path) -> Result<MatMatrix, IoError> {
    if bytes.is_empty() {
        return Err(IoError::format(path, "file is empty"));
    }
    if bytes.starts_with(b"MATLAB") {
        return Err(IoError::format(
            path,
            "level-5 MAT files are not supported, save with -v4",
        ));
    }

    let mut offset = 0;
    while offset < bytes.len() {
        let raw = bytes
            .get(offset..offset + HEADER_LEN)
            .ok_or_else(|| IoError::format(path, format!("truncated header at byte {offset}")))?;
        let header = Header::parse(raw)
            .map_err(|reason| IoError::format(path, format!("at byte {offset}: {reason}")))?;

        let name_start = offset + HEADER_LEN;
        let name_end = name_start + header.name_len;
        let name = bytes
            .get(name_start..name_end)
            .map(decode_name)
            .ok_or_else(|| IoError::format(path, format!("truncated name at byte {name_start}")))?;

        let data_end = header
            .data_len()
            .and_then(|len| name_end.checked_add(len))
            .ok_or_else(|| IoError::format(path, format!("matrix '{name}' is too large")))?;
        let data = bytes
            .get(name_end..data_end)
            .ok_or_else(|| IoError::format(path, format!("truncated data for matrix '{name}'")))?;

        if name != variable {
            trace!(matrix = %name, rows = header.rows, cols = header.cols, "skipping matrix");
            offset = data_end;
            continue;
        }
        if header.imaginary {
            return Err(IoError::format(path, format!("matrix '{name}' is complex")));
        }
        if header.class == 2 {
            return Err(IoError::format(path, format!("matrix '{name}' is sparse")));
        }

        let width = header.precision.width();
        let values = data
            .chunks_exact(width)
            .map(|chunk| header.precision.decode(chunk, header.order))
            .collect();
        debug!(
            matrix = %name,
            rows = header.rows,
            cols = header.cols,
            precision = ?header.precision,
            "decoded matrix"
        );
        return Ok(MatMatrix {
            name,
            rows: header.rows,
            cols: header.cols,
            values,
        });
    }

    Err(IoError::MissingVariable {
        name: variable.to_string(),
        path: path.to_path_buf(),
    })
}

/// Reads the matrix called `variable` from the MAT file at `path`.
///
/// # Errors
///
/// [`IoError::FileNotFound`] or [`IoError::Read`] when the file cannot be
/// read, otherwise as for [`parse_mat`].
pub fn read_mat(path: &Path, variable: &str) -> Result<MatMatrix, IoError> {
    let bytes = std::fs::read(path).map_err(|e| IoError::reading(path, &e))?;
    parse_mat(&bytes, variable, path)
}
