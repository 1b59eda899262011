//! Overpass QL query construction.

use vr_core::{BBox, FetchConfig};

/// `highway` values requested from Overpass.  Residential and service roads
/// are not requested.
pub const QUERIED_HIGHWAYS: [&str; 11] = [
    "motorway", "motorway_link",
    "trunk", "trunk_link",
    "primary", "primary_link",
    "secondary", "secondary_link",
    "tertiary", "tertiary_link",
    "unclassified",
];

/// Build the query for every [`QUERIED_HIGHWAYS`] way inside `bbox`, with
/// full node geometry inlined (`out body geom`).
///
/// Overpass bounding boxes are `(south, west, north, east)`.
pub fn build_query(bbox: &BBox, config: &FetchConfig) -> String {
    let area = format!("({},{},{},{})", bbox.south, bbox.west, bbox.north, bbox.east);
    let ways: Vec<String> = QUERIED_HIGHWAYS
        .iter()
        .map(|hw| format!("way[\"highway\"=\"{hw}\"]{area};"))
        .collect();

    format!(
        "[out:json][timeout:{}][maxsize:{}];({});out body geom;",
        config.timeout.as_secs(),
        config.max_response_bytes,
        ways.join("\n"),
    )
}
