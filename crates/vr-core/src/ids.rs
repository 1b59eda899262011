//! Strongly typed identifier for upstream OSM ways.

use std::fmt;

/// An OpenStreetMap way id.  Serialized as the bare integer.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct WayId(pub i64);

impl fmt::Display for WayId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "way/{}", self.0)
    }
}

impl From<i64> for WayId {
    #[inline(always)]
    fn from(id: i64) -> Self {
        WayId(id)
    }
}
