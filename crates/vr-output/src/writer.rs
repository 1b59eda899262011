//! The `OutputWriter` trait driven by the pipeline.

use std::path::PathBuf;

use vr_transform::JurisdictionReport;

use crate::OutputResult;

pub trait OutputWriter {
    /// Write the road document for one jurisdiction, replacing any previous
    /// one.  Returns the path written.
    fn write_report(&mut self, report: &JurisdictionReport) -> OutputResult<PathBuf>;

    /// Record `report` in the cumulative manifest.
    fn update_manifest(&mut self, report: &JurisdictionReport) -> OutputResult<()>;

    /// Road document first, then manifest.  A failed road write leaves the
    /// manifest untouched.
    fn persist(&mut self, report: &JurisdictionReport) -> OutputResult<PathBuf> {
        let path = self.write_report(report)?;
        self.update_manifest(report)?;
        Ok(path)
    }

    /// Package the output.  Returns the archive path if one was written.
    ///
    /// Idempotent: calls after the first return `Ok(None)`.
    fn finish(&mut self) -> OutputResult<Option<PathBuf>>;
}
