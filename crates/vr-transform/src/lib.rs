//! `vr-transform`: Overpass elements → road records → jurisdiction report.
//!
//! Pure and infallible: malformed elements are dropped, never reported as
//! errors.

pub mod builder;
pub mod report;
pub mod road;


pub use builder::{ReportBuilder, transform};
pub use report::{FcBreakdown, JurisdictionReport};
pub use road::{RoadRecord, resolve_name, round_to};
