//! Error types for cycles-io.

use std::path::PathBuf;

/// Error type for all fallible operations in the cycles-io crate.
///
/// Covers filesystem failures while writing cycle logs and timestamps that
/// cannot be rendered as calendar strings.
#[derive(Debug, thiserror::Error)]
pub enum IoError {
    /// Wraps a filesystem error, with the path that was being accessed.
    #[error("i/o error at {}: {reason}", path.display())]
    Io {
        /// Path that was being created or written.
        path: PathBuf,
        /// Description of the underlying I/O failure.
        reason: String,
    },

    /// Wraps an error originating from the cycles-time crate.
    #[error("time error: {reason}")]
    Time {
        /// Description of the underlying time conversion failure.
        reason: String,
    },
}

impl IoError {
    /// Builds an [`IoError::Io`] from a `std::io::Error` and the path involved.
    pub(crate) fn at(path: impl Into<PathBuf>, e: std::io::Error) -> Self {
        IoError::Io {
            path: path.into(),
            reason: e.to_string(),
        }
    }
}

impl From<cycles_time::TimeError> for IoError {
    fn from(e: cycles_time::TimeError) -> Self {
        IoError::Time {
            reason: e.to_string(),
        }
    }
}
