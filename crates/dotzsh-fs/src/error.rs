//! Error types for dotzsh-fs

use std::path::PathBuf;

/// Result type for dotzsh-fs operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in dotzsh-fs operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Could not determine the user home directory")]
    HomeNotFound,

    #[error("Lock acquisition failed for {path}")]
    LockFailed { path: PathBuf },
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
