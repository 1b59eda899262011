//! Run configuration.
//!
//! The generator takes no configuration file: [`RunConfig::default`] is the
//! production setup.  Tests build configs by hand with zero delays.

use std::path::PathBuf;
use std::time::Duration;

use crate::{CoreError, CoreResult};

/// Overpass mirrors in priority order.
pub const DEFAULT_SERVERS: [&str; 4] = [
    "https://overpass-api.de/api/interpreter",
    "https://overpass.kumi.systems/api/interpreter",
    "https://maps.mail.ru/osm/tools/overpass/api/interpreter",
    "https://overpass.openstreetmap.ru/api/interpreter",
];

// ── FetchConfig ───────────────────────────────────────────────────────────────

/// Settings for the Overpass fetch client.
#[derive(Clone, Debug)]
pub struct FetchConfig {
    /// Endpoint URLs, tried in order.
    pub servers: Vec<String>,

    /// Client-side request timeout.  Also sent to the server as the query's
    /// `[timeout:N]` setting (whole seconds).
    pub timeout: Duration,

    /// Attempts per endpoint before moving to the next one.
    pub max_retries: u32,

    /// Pause between failed attempts against the same endpoint.
    pub retry_delay: Duration,

    /// Server-side `[maxsize:N]` memory limit in bytes.
    pub max_response_bytes: u64,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            servers:            DEFAULT_SERVERS.iter().map(|s| s.to_string()).collect(),
            timeout:            Duration::from_secs(300),
            max_retries:        3,
            retry_delay:        Duration::from_secs(5),
            max_response_bytes: 536_870_912, // 512 MiB
        }
    }
}

impl FetchConfig {
    /// Reject configurations that could never issue a request.
    pub fn validate(&self) -> CoreResult<()> {
        if self.servers.is_empty() {
            return Err(CoreError::Config("at least one server is required".into()));
        }
        if self.max_retries == 0 {
            return Err(CoreError::Config("max_retries must be at least 1".into()));
        }
        Ok(())
    }
}

// ── RunConfig ─────────────────────────────────────────────────────────────────

/// Top-level configuration for one generator run.
#[derive(Clone, Debug)]
pub struct RunConfig {
    pub fetch: FetchConfig,

    /// Root of the output tree (`roads/` and `manifest.json` live here).
    pub output_dir: PathBuf,

    /// Where to write the zip of `output_dir` at the end of the run.
    /// `None` skips archiving.
    pub archive_path: Option<PathBuf>,

    /// Sleep between consecutive jurisdictions.
    pub pacing_delay: Duration,

    /// Indent JSON documents instead of writing them compactly.
    pub pretty_json: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            fetch:        FetchConfig::default(),
            output_dir:   PathBuf::from("data"),
            archive_path: Some(PathBuf::from("virginia_road_data.zip")),
            pacing_delay: Duration::from_secs(10),
            pretty_json:  false,
        }
    }
}
