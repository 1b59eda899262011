//! Fetch error type.
//!
//! Every variant except [`FetchError::Core`] counts as one failed attempt
//! inside the retry loop; none of them escape [`OverpassClient::fetch`].
//!
//! [`OverpassClient::fetch`]: crate::OverpassClient::fetch

use thiserror::Error;

use vr_core::CoreError;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("HTTP {0}")]
    Status(u16),

    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("response is not valid JSON: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("response has no \"elements\" array")]
    MissingElements,

    #[error(transparent)]
    Core(#[from] CoreError),
}

pub type FetchResult<T> = Result<T, FetchError>;
