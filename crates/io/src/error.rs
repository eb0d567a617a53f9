//! Error types for ecgnoise-io.

use std::path::PathBuf;

/// Error type for all fallible operations in the ecgnoise-io crate.
///
/// Covers missing or unreadable record files, malformed MAT and text
/// records, empty manifests, and failures while writing results.
#[derive(Debug, thiserror::Error)]
pub enum IoError {
    /// Returned when a required file does not exist on disk.
    #[error("file not found: {}", path.display())]
    FileNotFound {
        /// Path that could not be found.
        path: PathBuf,
    },

    /// Returned when a file exists but cannot be read.
    #[error("failed to read {}: {reason}", path.display())]
    Read {
        /// Path being read.
        path: PathBuf,
        /// Description of the underlying I/O failure.
        reason: String,
    },

    /// Returned when a record file does not have the expected layout.
    #[error("malformed record {}: {reason}", path.display())]
    Format {
        /// Path to the offending file.
        path: PathBuf,
        /// What was wrong with it.
        reason: String,
    },

    /// Returned when a MAT file holds no matrix with the requested name.
    #[error("variable '{name}' not found in {}", path.display())]
    MissingVariable {
        /// Name of the missing variable.
        name: String,
        /// Path to the file that was inspected.
        path: PathBuf,
    },

    /// Returned when a manifest lists no records.
    #[error("manifest {} lists no records", path.display())]
    EmptyManifest {
        /// Path to the manifest.
        path: PathBuf,
    },

    /// Returned when an output file cannot be created or written.
    #[error("failed to write {}: {reason}", path.display())]
    Write {
        /// Output path.
        path: PathBuf,
        /// Description of the underlying failure.
        reason: String,
    },

    /// Returned when results cannot be serialised.
    #[error("serialization failed: {reason}")]
    Serialization {
        /// Description of the serde failure.
        reason: String,
    },
}

impl IoError {
    /// Maps a `std::io::Error` raised while reading `path`.
    pub(crate) fn reading(path: impl Into<PathBuf>, err: &std::io::Error) -> Self {
        let path = path.into();
        if err.kind() == std::io::ErrorKind::NotFound {
            IoError::FileNotFound { path }
        } else {
            IoError::Read {
                path,
                reason: err.to_string(),
            }
        }
    }

    /// Maps a `std::io::Error` raised while writing `path`.
    pub(crate) fn writing(path: impl Into<PathBuf>, err: &std::io::Error) -> Self {
        IoError::Write {
            path: path.into(),
            reason: err.to_string(),
        }
    }

    pub(crate) fn format(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        IoError::Format {
            path: path.into(),
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_file_not_found() {
        let err = IoError::FileNotFound {
            path: PathBuf::from("/data/A00001.mat"),
        };
        assert_eq!(err.to_string(), "file not found: /data/A00001.mat");
    }

    #[test]
    fn display_format() {
        let err = IoError::format("/data/A00001.mat", "truncated header");
        assert_eq!(
            err.to_string(),
            "malformed record /data/A00001.mat: truncated header"
        );
    }

    #[test]
    fn display_missing_variable() {
        let err = IoError::MissingVariable {
            name: "val".to_string(),
            path: PathBuf::from("/data/A00001.mat"),
        };
        assert_eq!(
            err.to_string(),
            "variable 'val' not found in /data/A00001.mat"
        );
    }

    #[test]
    fn display_empty_manifest() {
        let err = IoError::EmptyManifest {
            path: PathBuf::from("RECORDS"),
        };
        assert_eq!(err.to_string(), "manifest RECORDS lists no records");
    }

    #[test]
    fn not_found_kind_maps_to_file_not_found() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        assert!(matches!(
            IoError::reading("x.mat", &io),
            IoError::FileNotFound { .. }
        ));
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "nope");
        let err = IoError::reading("x.mat", &io);
        assert!(matches!(err, IoError::Read { .. }));
        assert!(err.to_string().contains("nope"));
    }

    #[test]
    fn error_is_send_sync_and_std_error() {
        fn assert_bounds<T: Send + Sync + std::error::Error>() {}
        assert_bounds::<IoError>();
    }
}
