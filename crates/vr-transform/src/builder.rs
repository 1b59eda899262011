//! Accumulates road records for one jurisdiction.

use serde_json::Value;
use tracing::debug;

use vr_core::{Jurisdiction, SCHEMA_VERSION, path_length_miles};
use vr_fetch::{OverpassResponse, RawWay};

use crate::report::{FcBreakdown, JurisdictionReport};
use crate::road::{RoadRecord, round_to};

/// Incremental [`JurisdictionReport`] builder.
///
/// Totals are kept unrounded; only the per-road `length` and the final
/// `total_miles` are rounded.
pub struct ReportBuilder<'a> {
    jurisdiction: &'a Jurisdiction,
    roads:        Vec<RoadRecord>,
    total_miles:  f64,
    fc:           FcBreakdown,
    skipped:      usize,
}

impl<'a> ReportBuilder<'a> {
    pub fn new(jurisdiction: &'a Jurisdiction) -> Self {
        Self {
            jurisdiction,
            roads: Vec::new(),
            total_miles: 0.0,
            fc: FcBreakdown::default(),
            skipped: 0,
        }
    }

    /// Add one raw element.  Returns `false` if it was skipped.
    pub fn push_element(&mut self, element: &Value) -> bool {
        match RawWay::from_element(element) {
            Some(way) => {
                self.push_way(&way);
                true
            }
            None => {
                self.skipped += 1;
                false
            }
        }
    }

    pub fn push_way(&mut self, way: &RawWay) {
        let coords = way.points();
        let miles = path_length_miles(&coords);
        let road = RoadRecord::from_way(way, coords, miles);

        self.total_miles += miles;
        self.fc.record(road.func_class);
        self.roads.push(road);
    }

    pub fn road_count(&self) -> usize {
        self.roads.len()
    }

    pub fn skipped(&self) -> usize {
        self.skipped
    }

    pub fn build(self, generated: String) -> JurisdictionReport {
        JurisdictionReport {
            jurisdiction:      self.jurisdiction.id.to_owned(),
            jurisdiction_name: self.jurisdiction.name.to_owned(),
            generated,
            version:           SCHEMA_VERSION.to_owned(),
            road_count:        self.roads.len(),
            total_miles:       round_to(self.total_miles, 2),
            fc_breakdown:      self.fc,
            roads:             self.roads,
        }
    }
}

/// Build the report for `jurisdiction` from a fetched response.
pub fn transform(
    response: &OverpassResponse,
    jurisdiction: &Jurisdiction,
    generated: String,
) -> JurisdictionReport {
    let mut builder = ReportBuilder::new(jurisdiction);
    for element in &response.elements {
        builder.push_element(element);
    }
    if builder.skipped() > 0 {
        debug!(
            "{}: skipped {} non-way or geometry-less elements",
            jurisdiction.id,
            builder.skipped()
        );
    }
    builder.build(generated)
}
