//! Record manifests.

use std::path::Path;

use tracing::debug;

use crate::error::IoError;

/// Parses manifest text: one record name per line, surrounding whitespace
/// trimmed.
///
/// Reading stops at the first blank line, so anything after it is ignored.
/// Returns an empty list if the first line is blank.
pub fn parse_manifest(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .take_while(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Reads the record names listed in the manifest at `path`.
///
/// # Errors
///
/// | Variant | Trigger |
/// |---------|---------|
/// | [`IoError::FileNotFound`] / [`IoError::Read`] | the manifest cannot be read |
/// | [`IoError::EmptyManifest`] | no name before the first blank line |
pub fn read_manifest(path: &Path) -> Result<Vec<String>, IoError> {
    let text = std::fs::read_to_string(path).map_err(|e| IoError::reading(path, &e))?;
    let names = parse_manifest(&text);
    if names.is_empty() {
        return Err(IoError::EmptyManifest {
            path: path.to_path_buf(),
        });
    }
    debug!(path = %path.display(), n_records = names.len(), "read manifest");
    Ok(names)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_names() {
        let names = parse_manifest("A00001\n  A00002 \r\nA00003");
        assert_eq!(names, vec!["A00001", "A00002", "A00003"]);
    }

    #[test]
    fn stops_at_first_blank_line() {
        let names = parse_manifest("A00001\nA00002\n\nA00003\n");
        assert_eq!(names, vec!["A00001", "A00002"]);
        // a whitespace-only line counts as blank
        assert_eq!(parse_manifest("A1\n   \nA2"), vec!["A1"]);
    }

    #[test]
    fn leading_blank_line_is_empty() {
        assert!(parse_manifest("\nA00001\n").is_empty());
    }

    #[test]
    fn empty_manifest_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("RECORDS");
        std::fs::write(&path, "\n").unwrap();
        let err = read_manifest(&path).unwrap_err();
        assert!(matches!(err, IoError::EmptyManifest { .. }));
    }

    #[test]
    fn missing_manifest_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_manifest(&dir.path().join("RECORDS")).unwrap_err();
        assert!(matches!(err, IoError::FileNotFound { .. }));
    }
}
