//! Run observer trait for progress reporting.

use std::path::Path;
use std::time::Duration;

use tracing::{error, info, warn};

use vr_core::Jurisdiction;
use vr_output::OutputError;
use vr_transform::JurisdictionReport;

use crate::RunSummary;

/// Callbacks invoked by [`Pipeline::run`][crate::Pipeline::run] at each
/// stage of a jurisdiction's lifecycle.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
pub trait PipelineObserver {
    /// Called once before the first jurisdiction with the number of targets
    /// (unknown ids included).
    fn on_run_start(&mut self, _total: usize) {}

    /// `position` is 1-based.
    fn on_jurisdiction_start(&mut self, _position: usize, _total: usize, _j: &Jurisdiction) {}

    /// An id that is not in the registry.  No request is made for it.
    fn on_skipped(&mut self, _id: &str) {}

    /// Every endpoint exhausted for `j`.
    fn on_fetch_failed(&mut self, _j: &Jurisdiction) {}

    fn on_report_written(&mut self, _j: &Jurisdiction, _report: &JurisdictionReport, _path: &Path) {}

    /// Called just before the run aborts on a persistence error.
    fn on_persist_failed(&mut self, _j: &Jurisdiction, _error: &OutputError) {}

    /// Called before each pacing sleep.
    fn on_waiting(&mut self, _delay: Duration) {}

    fn on_run_end(&mut self, _summary: &RunSummary) {}

    fn on_archived(&mut self, _path: &Path) {}
}

/// A [`PipelineObserver`] that does nothing.
pub struct NoopObserver;

impl PipelineObserver for NoopObserver {}

/// Reports progress through `tracing`.
pub struct LogObserver;

impl PipelineObserver for LogObserver {
    fn on_run_start(&mut self, total: usize) {
        info!("Processing {total} jurisdictions");
    }

    fn on_jurisdiction_start(&mut self, position: usize, total: usize, j: &Jurisdiction) {
        info!("[{position}/{total}] {}", j.name);
    }

    fn on_skipped(&mut self, id: &str) {
        warn!("SKIP: unknown jurisdiction '{id}'");
    }

    fn on_fetch_failed(&mut self, j: &Jurisdiction) {
        warn!("  FAILED: no data for {}", j.id);
    }

    fn on_report_written(&mut self, _j: &Jurisdiction, report: &JurisdictionReport, path: &Path) {
        info!(
            "  {} roads, {} miles -> {}",
            report.road_count,
            report.total_miles,
            path.display()
        );
    }

    fn on_persist_failed(&mut self, j: &Jurisdiction, error: &OutputError) {
        error!("  Could not save {}: {error}", j.id);
    }

    fn on_waiting(&mut self, delay: Duration) {
        info!("  Waiting {}s...", delay.as_secs());
    }

    fn on_run_end(&mut self, summary: &RunSummary) {
        info!(
            "COMPLETE: {} success, {} failed",
            summary.success_count(),
            summary.failure_count()
        );
        if !summary.all_succeeded() {
            warn!("Failed: {}", summary.failed.join(", "));
        }
    }

    fn on_archived(&mut self, path: &Path) {
        info!("Created {}", path.display());
    }
}
