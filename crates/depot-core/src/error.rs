//! Error types for managed-directory operations.

use std::path::PathBuf;

use thiserror::Error;

/// Structural errors from the managed-directory engine.
///
/// Per-entry failures during bulk operations are not represented here;
/// those are aggregated as [`crate::EntryFailure`] values and returned to
/// the caller instead of being raised.
#[derive(Debug, Error)]
pub enum DepotError {
    /// The managed directory does not exist.
    #[error("Directory not found: {path}")]
    DirectoryNotFound { path: PathBuf },

    /// Generic I/O error with path context.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl DepotError {
    /// Create a directory-not-found error.
    pub fn directory_not_found(path: impl Into<PathBuf>) -> Self {
        Self::DirectoryNotFound { path: path.into() }
    }

    /// Create an I/O error with path context.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_directory_not_found_display() {
        let err = DepotError::directory_not_found("/missing/dir");
        assert_eq!(err.to_string(), "Directory not found: /missing/dir");
    }

    #[test]
    fn test_io_error_carries_source() {
        let err = DepotError::io(
            "/some/path",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        assert!(err.to_string().contains("/some/path"));
        assert!(std::error::Error::source(&err).is_some());
    }
}
