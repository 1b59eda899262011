//! Overpass JSON response types.
//!
//! Elements are kept as raw `serde_json::Value`s so one malformed element
//! cannot fail the whole response; [`RawWay::from_element`] decodes them one
//! at a time and drops anything that is not a way with geometry.

use std::collections::HashMap;

use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};

use vr_core::{GeoPoint, WayId};

use crate::{FetchError, FetchResult};

// ── OverpassResponse ──────────────────────────────────────────────────────────

/// A decoded Overpass response that carried an `elements` array.
#[derive(Debug, Clone, PartialEq)]
pub struct OverpassResponse {
    pub elements: Vec<Value>,
    /// Server-side warning (e.g. a query timeout that truncated the result).
    pub remark: Option<String>,
}

impl OverpassResponse {
    /// Decode a response body.
    ///
    /// # Errors
    ///
    /// [`FetchError::Decode`] if the body is not JSON,
    /// [`FetchError::MissingElements`] if it has no `elements` array.
    pub fn parse(body: &str) -> FetchResult<Self> {
        let mut value: Value = serde_json::from_str(body)?;

        let elements = match value.get_mut("elements").map(Value::take) {
            Some(Value::Array(elements)) => elements,
            _ => return Err(FetchError::MissingElements),
        };
        let remark = value.get("remark").and_then(Value::as_str).map(str::to_owned);

        Ok(Self { elements, remark })
    }
}

// ── RawWay ────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Deserialize, PartialEq)]
pub struct LatLon {
    pub lat: f64,
    pub lon: f64,
}

/// One `way` element as returned by `out body geom`.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct RawWay {
    pub id: i64,
    #[serde(default, deserialize_with = "lenient_tags")]
    pub tags: HashMap<String, String>,
    #[serde(default)]
    pub geometry: Vec<LatLon>,
}

impl RawWay {
    /// Decode `element` if it is a way with at least one geometry point.
    ///
    /// Nodes, relations, ways without geometry, and ways whose `id` or
    /// `geometry` do not decode yield `None`.  Odd tag values never drop a
    /// way; see [`tag_text`].
    pub fn from_element(element: &Value) -> Option<RawWay> {
        if element.get("type").and_then(Value::as_str) != Some("way") {
            return None;
        }
        let way = RawWay::deserialize(element).ok()?;
        (!way.geometry.is_empty()).then_some(way)
    }

    #[inline]
    pub fn way_id(&self) -> WayId {
        WayId(self.id)
    }

    /// Tag value, or `""` when absent.
    pub fn tag(&self, key: &str) -> &str {
        self.tags.get(key).map(String::as_str).unwrap_or("")
    }

    /// Geometry as `GeoPoint`s, in way order.
    pub fn points(&self) -> Vec<GeoPoint> {
        self.geometry.iter().map(|p| GeoPoint::new(p.lat, p.lon)).collect()
    }
}

/// Tag objects decode leniently: a `null` object is empty, numbers and
/// booleans keep their JSON text, and nested values become `""`.
fn lenient_tags<'de, D: Deserializer<'de>>(d: D) -> Result<HashMap<String, String>, D::Error> {
    let raw = Option::<Map<String, Value>>::deserialize(d)?.unwrap_or_default();
    Ok(raw.into_iter().map(|(k, v)| (k, tag_text(v))).collect())
}

/// String form of one tag value.
pub fn tag_text(value: Value) -> String {
    match value {
        Value::String(s) => s,
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null | Value::Array(_) | Value::Object(_) => String::new(),
    }
}
