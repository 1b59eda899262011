//! Geographic coordinate type and polyline length.
//!
//! `GeoPoint` holds `f64` degrees.  Its serialized form (with the `serde`
//! feature) is a `[lat, lon]` pair, matching the `coords` arrays in the road
//! documents.

/// Mean Earth radius in statute miles.
pub const EARTH_RADIUS_MILES: f64 = 3_959.0;

/// A WGS-84 geographic coordinate in degrees.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "[f64; 2]", into = "[f64; 2]"))]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

impl GeoPoint {
    #[inline]
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Haversine great-circle distance in statute miles.
    ///
    /// No input validation: NaN or out-of-range degrees yield a meaningless
    /// (but finite or NaN) number rather than an error.
    pub fn distance_miles(self, other: GeoPoint) -> f64 {
        let d_lat = (other.lat - self.lat).to_radians();
        let d_lon = (other.lon - self.lon).to_radians();

        let lat1 = self.lat.to_radians();
        let lat2 = other.lat.to_radians();

        let a = (d_lat * 0.5).sin().powi(2)
            + lat1.cos() * lat2.cos() * (d_lon * 0.5).sin().powi(2);

        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
        EARTH_RADIUS_MILES * c
    }
}

impl From<[f64; 2]> for GeoPoint {
    fn from([lat, lon]: [f64; 2]) -> Self {
        Self { lat, lon }
    }
}

impl From<GeoPoint> for [f64; 2] {
    fn from(p: GeoPoint) -> Self {
        [p.lat, p.lon]
    }
}

impl std::fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.6}, {:.6})", self.lat, self.lon)
    }
}

/// Total length of a polyline in statute miles.
///
/// Sums [`GeoPoint::distance_miles`] over consecutive pairs, left to right.
/// Fewer than two points yields exactly `0.0`.
pub fn path_length_miles(points: &[GeoPoint]) -> f64 {
    points
        .windows(2)
        .fold(0.0, |total, pair| total + pair[0].distance_miles(pair[1]))
}
