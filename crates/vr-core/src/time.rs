//! UTC timestamps for report and manifest documents.

use chrono::{SecondsFormat, Utc};

/// Schema version written into every document.
pub const SCHEMA_VERSION: &str = "1.0";

/// Current UTC time as RFC 3339 with millisecond precision and a `Z` suffix,
/// e.g. `2024-05-01T12:34:56.789Z`.
pub fn utc_now_iso() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}
