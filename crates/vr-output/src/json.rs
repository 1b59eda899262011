//! JSON file store.
//!
//! Layout under the output directory:
//! - `roads/{id}.json`, one per jurisdiction
//! - `manifest.json`

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::info;

use vr_core::utc_now_iso;
use vr_transform::JurisdictionReport;

use crate::archive::zip_dir;
use crate::manifest::Manifest;
use crate::writer::OutputWriter;
use crate::OutputResult;

pub const ROADS_DIR: &str = "roads";
pub const MANIFEST_FILE: &str = "manifest.json";

/// Serialize `value` to `path`, replacing any existing file.
pub(crate) fn write_json<T: Serialize + ?Sized>(
    path: &Path,
    value: &T,
    pretty: bool,
) -> OutputResult<()> {
    let bytes = if pretty {
        serde_json::to_vec_pretty(value)?
    } else {
        serde_json::to_vec(value)?
    };
    fs::write(path, bytes)?;
    Ok(())
}

/// Writes road documents and the manifest as JSON files, then zips the
/// whole output directory on [`finish`](OutputWriter::finish).
pub struct JsonStore {
    output_dir:   PathBuf,
    archive_path: Option<PathBuf>,
    pretty:       bool,
    finished:     bool,
}

impl JsonStore {
    /// Create `output_dir/roads` if needed.
    pub fn new(
        output_dir: impl Into<PathBuf>,
        archive_path: Option<PathBuf>,
        pretty: bool,
    ) -> OutputResult<Self> {
        let output_dir = output_dir.into();
        fs::create_dir_all(output_dir.join(ROADS_DIR))?;
        Ok(Self { output_dir, archive_path, pretty, finished: false })
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    pub fn road_path(&self, jurisdiction_id: &str) -> PathBuf {
        self.output_dir.join(ROADS_DIR).join(format!("{jurisdiction_id}.json"))
    }

    pub fn manifest_path(&self) -> PathBuf {
        self.output_dir.join(MANIFEST_FILE)
    }
}

impl OutputWriter for JsonStore {
    fn write_report(&mut self, report: &JurisdictionReport) -> OutputResult<PathBuf> {
        let path = self.road_path(&report.jurisdiction);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        write_json(&path, report, self.pretty)?;
        Ok(path)
    }

    fn update_manifest(&mut self, report: &JurisdictionReport) -> OutputResult<()> {
        let path = self.manifest_path();
        let mut manifest = Manifest::load_or_default(&path)?;
        manifest.upsert(report, &utc_now_iso());
        manifest.save(&path, self.pretty)
    }

    fn finish(&mut self) -> OutputResult<Option<PathBuf>> {
        if self.finished {
            return Ok(None);
        }
        self.finished = true;

        let Some(archive) = self.archive_path.clone() else {
            return Ok(None);
        };
        let entries = zip_dir(&self.output_dir, &archive)?;
        info!("Created {} ({entries} entries)", archive.display());
        Ok(Some(archive))
    }
}
