//! Per-jurisdiction report document and its class histogram.

use std::collections::BTreeMap;
use std::ops::Index;

use serde::{Deserialize, Serialize};

use vr_core::FuncClass;

use crate::road::RoadRecord;

// ── FcBreakdown ───────────────────────────────────────────────────────────────

/// Road counts per functional class.
///
/// Serializes as `{"1": n, …, "7": n}` with every key present, including
/// zero counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "BTreeMap<FuncClass, u32>", from = "BTreeMap<FuncClass, u32>")]
pub struct FcBreakdown([u32; 7]);

impl FcBreakdown {
    #[inline]
    pub fn record(&mut self, fc: FuncClass) {
        self.0[fc.index()] += 1;
    }

    #[inline]
    pub fn get(&self, fc: FuncClass) -> u32 {
        self.0[fc.index()]
    }

    pub fn total(&self) -> u32 {
        self.0.iter().sum()
    }
}

impl Index<FuncClass> for FcBreakdown {
    type Output = u32;

    fn index(&self, fc: FuncClass) -> &u32 {
        &self.0[fc.index()]
    }
}

impl From<FcBreakdown> for BTreeMap<FuncClass, u32> {
    fn from(fc: FcBreakdown) -> Self {
        FuncClass::ALL.into_iter().map(|c| (c, fc.get(c))).collect()
    }
}

impl From<BTreeMap<FuncClass, u32>> for FcBreakdown {
    fn from(map: BTreeMap<FuncClass, u32>) -> Self {
        let mut fc = FcBreakdown::default();
        for (class, count) in map {
            fc.0[class.index()] = count;
        }
        fc
    }
}

// ── JurisdictionReport ────────────────────────────────────────────────────────

/// Contents of `roads/{id}.json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JurisdictionReport {
    pub jurisdiction: String,
    pub jurisdiction_name: String,
    pub generated: String,
    pub version: String,
    pub road_count: usize,
    /// Sum of unrounded road lengths, rounded to two decimals.
    pub total_miles: f64,
    pub fc_breakdown: FcBreakdown,
    pub roads: Vec<RoadRecord>,
}
