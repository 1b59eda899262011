//! Core error type.
//!
//! Sub-crates define their own error enums and wrap `CoreError` as one
//! variant where they call into this crate.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("invalid functional class {0:?} (expected \"1\" through \"7\")")]
    InvalidFuncClass(String),
}

/// Shorthand result type for `vr-core`.
pub type CoreResult<T> = Result<T, CoreError>;
