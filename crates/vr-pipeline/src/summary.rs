//! Outcome of a completed run.

use std::path::PathBuf;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunSummary {
    /// Ids written successfully, in processing order.
    pub succeeded: Vec<String>,
    /// Ids whose fetch exhausted every endpoint, plus unknown ids.
    pub failed: Vec<String>,
    /// Archive written at the end of the run, if any.
    pub archive: Option<PathBuf>,
}

impl RunSummary {
    pub fn success_count(&self) -> usize {
        self.succeeded.len()
    }

    pub fn failure_count(&self) -> usize {
        self.failed.len()
    }

    pub fn all_succeeded(&self) -> bool {
        self.failed.is_empty()
    }
}
