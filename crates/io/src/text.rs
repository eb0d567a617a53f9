//! Plain-text sample files.

use std::path::Path;

use crate::error::IoError;

/// Parses numeric samples separated by whitespace and/or commas.
///
/// Lines whose first non-blank character is `#` are ignored.
///
/// # Errors
///
/// Returns [`IoError::Format`] naming the first token that is not a number.
pub fn parse_samples(text: &str, path: &Path) -> Result<Vec<f64>, IoError> {
    let mut samples = Vec::new();
    for (line_no, line) in text.lines().enumerate() {
        if line.trim_start().starts_with('#') {
            continue;
        }
        for token in line
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|t| !t.is_empty())
        {
            let value = token.parse::<f64>().map_err(|_| {
                IoError::format(
                    path,
                    format!("line {}: '{token}' is not a number", line_no + 1),
                )
            })?;
            samples.push(value);
        }
    }
    Ok(samples)
}

/// Reads and parses the sample file at `path`.
///
/// # Errors
///
/// [`IoError::FileNotFound`] or [`IoError::Read`] when the file cannot be
/// read, [`IoError::Format`] for non-numeric content.
pub fn read_samples(path: &Path) -> Result<Vec<f64>, IoError> {
    let text = std::fs::read_to_string(path).map_err(|e| IoError::reading(path, &e))?;
    parse_samples(&text, path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mixed_separators() {
        let text = "1, 2,3\n4\t5   6\n\n-7.5e-1";
        let samples = parse_samples(text, Path::new("r.txt")).unwrap();
        assert_eq!(samples, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, -0.75]);
    }

    #[test]
    fn comments_skipped() {
        let text = "# exported from lead I\n  # fs = 300\n0.1 0.2\n";
        let samples = parse_samples(text, Path::new("r.txt")).unwrap();
        assert_eq!(samples, vec![0.1, 0.2]);
    }

    #[test]
    fn bad_token_names_line() {
        let err = parse_samples("1 2\n3 x4\n", Path::new("r.txt")).unwrap_err();
        assert!(matches!(err, IoError::Format { .. }));
        assert!(err.to_string().contains("line 2: 'x4'"));
    }

    #[test]
    fn empty_text_gives_no_samples() {
        assert!(parse_samples("\n\n", Path::new("r.txt")).unwrap().is_empty());
    }
}
