use thiserror::Error;

use vr_fetch::FetchError;
use vr_output::OutputError;

/// Errors that abort a run.  Fetch exhaustion is not one of them: it is
/// counted in the [`RunSummary`](crate::RunSummary) and the run continues.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("fetch client setup failed: {0}")]
    Fetch(#[from] FetchError),

    #[error("persistence failed: {0}")]
    Output(#[from] OutputError),
}

pub type PipelineResult<T> = Result<T, PipelineError>;
