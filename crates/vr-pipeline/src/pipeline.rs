//! The per-jurisdiction run loop.
//!
//! ```text
//! for each target:
//!   unknown id          → skipped, counted failed
//!   fetch → NoData      → counted failed
//!   fetch → Data        → transform → persist (road file, then manifest)
//!   pacing sleep while a known jurisdiction is still ahead
//! finish writer (archive)
//! ```

use std::thread;
use std::time::Duration;

use vr_core::{Jurisdiction, utc_now_iso};
use vr_fetch::{FetchOutcome, OverpassClient, Transport};
use vr_output::OutputWriter;
use vr_transform::transform;

use crate::{PipelineObserver, PipelineResult, RunSummary};

/// One entry of the run's work list.
#[derive(Debug, Clone, PartialEq)]
pub enum Target {
    Known(&'static Jurisdiction),
    Unknown(String),
}

impl Target {
    pub fn id(&self) -> &str {
        match self {
            Target::Known(j) => j.id,
            Target::Unknown(id) => id,
        }
    }
}

pub struct Pipeline<T: Transport, W: OutputWriter> {
    pub(crate) client:       OverpassClient<T>,
    pub(crate) writer:       W,
    pub(crate) targets:      Vec<Target>,
    pub(crate) pacing_delay: Duration,
}

impl<T: Transport, W: OutputWriter> Pipeline<T, W> {
    pub fn targets(&self) -> &[Target] {
        &self.targets
    }

    pub fn writer(&self) -> &W {
        &self.writer
    }

    /// Process every target in order.
    ///
    /// Fetch exhaustion is recorded and the run continues.  A persistence
    /// error aborts the run immediately; jurisdictions already written stay
    /// on disk and in the manifest.
    pub fn run<O: PipelineObserver>(&mut self, observer: &mut O) -> PipelineResult<RunSummary> {
        let total = self.targets.len();
        let mut summary = RunSummary::default();
        observer.on_run_start(total);

        for (i, target) in self.targets.iter().enumerate() {
            let j = match target {
                Target::Known(j) => *j,
                Target::Unknown(id) => {
                    observer.on_skipped(id);
                    summary.failed.push(id.clone());
                    continue;
                }
            };

            observer.on_jurisdiction_start(i + 1, total, j);
            match self.client.fetch(&j.bbox) {
                FetchOutcome::NoData => {
                    observer.on_fetch_failed(j);
                    summary.failed.push(j.id.to_owned());
                }
                FetchOutcome::Data(response) => {
                    let report = transform(&response, j, utc_now_iso());
                    let path = match self.writer.persist(&report) {
                        Ok(path) => path,
                        Err(e) => {
                            observer.on_persist_failed(j, &e);
                            return Err(e.into());
                        }
                    };
                    observer.on_report_written(j, &report, &path);
                    summary.succeeded.push(j.id.to_owned());
                }
            }

            let more_requests = self.targets[i + 1..]
                .iter()
                .any(|t| matches!(t, Target::Known(_)));
            if more_requests && !self.pacing_delay.is_zero() {
                observer.on_waiting(self.pacing_delay);
                thread::sleep(self.pacing_delay);
            }
        }

        observer.on_run_end(&summary);

        summary.archive = self.writer.finish()?;
        if let Some(path) = &summary.archive {
            observer.on_archived(path);
        }
        Ok(summary)
    }
}
