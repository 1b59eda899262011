//! Error types for vr-output.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while persisting reports or packaging output.
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON encode error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("manifest {path} is not readable JSON: {source}")]
    CorruptManifest {
        path:   PathBuf,
        source: serde_json::Error,
    },

    #[error("zip error: {0}")]
    Zip(#[from] zip::result::ZipError),
}

/// Alias for `Result<T, OutputError>`.
pub type OutputResult<T> = Result<T, OutputError>;
