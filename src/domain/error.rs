use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Library-wide error type for mulepack operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure during a copy or write.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Invalid assembler configuration (blank coordinate, bad packaging name).
    #[error("{0}")]
    Configuration(String),

    /// A required origin or destination path is absent on disk.
    #[error("The path {} does not exist", .0.display())]
    PathMissing(PathBuf),
}

impl AppError {
    pub(crate) fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

    /// Provide an `io::ErrorKind`-like view for callers expecting legacy behavior.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            AppError::Io(err) => err.kind(),
            AppError::Configuration(_) => io::ErrorKind::InvalidInput,
            AppError::PathMissing(_) => io::ErrorKind::NotFound,
        }
    }
}
