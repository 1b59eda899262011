//! Normalized road record.

use serde::{Deserialize, Serialize};

use vr_core::{FuncClass, GeoPoint, WayId};
use vr_fetch::RawWay;

/// One road segment as published in `roads/{id}.json`.
///
/// Tag fields the way did not carry are empty strings, never absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoadRecord {
    pub id: WayId,
    pub name: String,
    pub highway: String,
    pub func_class: FuncClass,
    #[serde(rename = "ref")]
    pub road_ref: String,
    pub lanes: String,
    pub maxspeed: String,
    pub surface: String,
    /// Miles, rounded to three decimals.
    pub length: f64,
    pub coords: Vec<GeoPoint>,
}

impl RoadRecord {
    /// Build from a decoded way whose unrounded length is `miles`.
    pub fn from_way(way: &RawWay, coords: Vec<GeoPoint>, miles: f64) -> Self {
        let highway = way.tag("highway");
        Self {
            id:         way.way_id(),
            name:       resolve_name(way.tag("name"), way.tag("ref"), highway),
            highway:    highway.to_owned(),
            func_class: FuncClass::from_highway(highway),
            road_ref:   way.tag("ref").to_owned(),
            lanes:      way.tag("lanes").to_owned(),
            maxspeed:   way.tag("maxspeed").to_owned(),
            surface:    way.tag("surface").to_owned(),
            length:     round_to(miles, 3),
            coords,
        }
    }
}

/// `name`, else `ref`, else `"Unnamed {highway}"`.  Empty strings count as
/// absent.
pub fn resolve_name(name: &str, road_ref: &str, highway: &str) -> String {
    if !name.is_empty() {
        name.to_owned()
    } else if !road_ref.is_empty() {
        road_ref.to_owned()
    } else {
        format!("Unnamed {highway}")
    }
}

/// Round half away from zero to `places` decimals.
pub fn round_to(x: f64, places: i32) -> f64 {
    let scale = 10f64.powi(places);
    (x * scale).round() / scale
}
