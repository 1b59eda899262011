//! Jurisdiction records and registry lookups.
//!
//! The table itself lives in [`crate::registry`]; this module defines the
//! record types and the read-only query helpers over it.

use std::fmt;

use crate::registry::JURISDICTIONS;

// ── JurisdictionKind ──────────────────────────────────────────────────────────

/// Whether a jurisdiction is a county or an independent city.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum JurisdictionKind {
    County,
    City,
}

impl JurisdictionKind {
    pub fn as_str(self) -> &'static str {
        match self {
            JurisdictionKind::County => "county",
            JurisdictionKind::City   => "city",
        }
    }
}

impl fmt::Display for JurisdictionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── BBox ──────────────────────────────────────────────────────────────────────

/// Axis-aligned bounding box in degrees.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct BBox {
    pub west:  f64,
    pub south: f64,
    pub east:  f64,
    pub north: f64,
}

impl BBox {
    /// Build from the `[west, south, east, north]` layout used by the table.
    pub const fn from_array([west, south, east, north]: [f64; 4]) -> Self {
        Self { west, south, east, north }
    }

    /// `true` when `west < east` and `south < north`.
    pub fn is_well_formed(&self) -> bool {
        self.west < self.east && self.south < self.north
    }
}

impl fmt::Display for BBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}, {}, {}]", self.west, self.south, self.east, self.north)
    }
}

// ── Jurisdiction ──────────────────────────────────────────────────────────────

/// One Virginia county or independent city.
///
/// `id` is the stable lowercase key used for output file names and manifest
/// entries.  Records are `'static` and never mutated.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Jurisdiction {
    pub id:   &'static str,
    pub name: &'static str,
    pub kind: JurisdictionKind,
    /// Three-digit county/city FIPS code within Virginia.
    pub fips: &'static str,
    pub bbox: BBox,
}

impl fmt::Display for Jurisdiction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.id)
    }
}

// ── Registry queries ──────────────────────────────────────────────────────────

/// All jurisdictions in processing order.
pub fn all() -> &'static [Jurisdiction] {
    &JURISDICTIONS
}

/// Find a jurisdiction by id.
pub fn lookup(id: &str) -> Option<&'static Jurisdiction> {
    JURISDICTIONS.iter().find(|j| j.id == id)
}

pub fn counties() -> impl Iterator<Item = &'static Jurisdiction> {
    JURISDICTIONS.iter().filter(|j| j.kind == JurisdictionKind::County)
}

pub fn cities() -> impl Iterator<Item = &'static Jurisdiction> {
    JURISDICTIONS.iter().filter(|j| j.kind == JurisdictionKind::City)
}
