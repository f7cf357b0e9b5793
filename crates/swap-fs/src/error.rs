//! Error types for swap-fs

use std::path::PathBuf;

/// Result type for swap-fs operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in swap-fs operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Lock acquisition failed for {path}")]
    LockFailed { path: PathBuf },

    #[error("Invalid snapshot name '{name}': {reason}")]
    InvalidName { name: String, reason: String },

    #[error("Directory walk failed under {path}: {message}")]
    Walk { path: PathBuf, message: String },
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Whether this error wraps an I/O `NotFound`.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::Io { source, .. } if source.kind() == std::io::ErrorKind::NotFound
        )
    }
}

impl From<walkdir::Error> for Error {
    fn from(err: walkdir::Error) -> Self {
        let path = err.path().map(PathBuf::from).unwrap_or_default();
        match err.into_io_error() {
            Some(source) => Self::Io { path, source },
            None => Self::Walk {
                path,
                message: "filesystem loop detected".into(),
            },
        }
    }
}
