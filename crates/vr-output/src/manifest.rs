//! Cumulative `manifest.json`.
//!
//! The manifest outlives a single run: it is loaded if present, one entry is
//! upserted per successful jurisdiction, and the whole document is rewritten.
//! Fields written by other tools or older runs are tolerated: missing ones
//! take defaults and unknown keys are carried through unchanged.

use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use vr_core::SCHEMA_VERSION;
use vr_transform::JurisdictionReport;

use crate::json::write_json;
use crate::{OutputError, OutputResult};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ManifestEntry {
    pub available:    bool,
    pub last_updated: String,
    pub road_count:   usize,
    pub total_miles:  f64,
    #[serde(flatten)]
    pub extra:        Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Manifest {
    pub generated:     String,
    pub version:       String,
    pub jurisdictions: BTreeMap<String, ManifestEntry>,
    #[serde(flatten)]
    pub extra:         Map<String, Value>,
}

impl Default for Manifest {
    fn default() -> Self {
        Self {
            generated:     String::new(),
            version:       SCHEMA_VERSION.to_owned(),
            jurisdictions: BTreeMap::new(),
            extra:         Map::new(),
        }
    }
}

impl Manifest {
    /// Load `path`, or an empty manifest if it does not exist.
    ///
    /// A file that exists but does not decode is an error; it is never
    /// silently replaced.
    pub fn load_or_default(path: &Path) -> OutputResult<Self> {
        let bytes = match fs::read(path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Self::default()),
            Err(e) => return Err(e.into()),
        };
        serde_json::from_slice(&bytes).map_err(|source| OutputError::CorruptManifest {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Insert or replace the entry for `report.jurisdiction` and stamp the
    /// manifest with `now`.  The entry's `lastUpdated` is the report's own
    /// `generated` time.
    pub fn upsert(&mut self, report: &JurisdictionReport, now: &str) {
        self.jurisdictions.insert(
            report.jurisdiction.clone(),
            ManifestEntry {
                available:    true,
                last_updated: report.generated.clone(),
                road_count:   report.road_count,
                total_miles:  report.total_miles,
                extra:        Map::new(),
            },
        );
        self.generated = now.to_owned();
    }

    pub fn save(&self, path: &Path, pretty: bool) -> OutputResult<()> {
        write_json(path, self, pretty)
    }
}
