//! `vr-core`: foundational types for the Virginia road data generator.
//!
//! This crate is a dependency of every other `vr-*` crate.  It has no `vr-*`
//! dependencies and minimal external ones (`chrono` and `thiserror`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module           | Contents                                              |
//! |------------------|-------------------------------------------------------|
//! | [`registry`]     | The static table of 133 jurisdictions                 |
//! | [`jurisdiction`] | `Jurisdiction`, `JurisdictionKind`, `BBox`, lookups   |
//! | [`geo`]          | `GeoPoint`, haversine miles, `path_length_miles`      |
//! | [`func_class`]   | `FuncClass` and the OSM `highway` mapping             |
//! | [`ids`]          | `WayId`                                               |
//! | [`config`]       | `FetchConfig`, `RunConfig`                            |
//! | [`time`]         | UTC timestamps, schema version                        |
//! | [`error`]        | `CoreError`, `CoreResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to `GeoPoint`, `FuncClass`, |
//!           | and `WayId`.                                               |

pub mod config;
pub mod error;
pub mod func_class;
pub mod geo;
pub mod ids;
pub mod jurisdiction;
pub mod registry;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{FetchConfig, RunConfig};
pub use error::{CoreError, CoreResult};
pub use func_class::FuncClass;
pub use geo::{GeoPoint, path_length_miles};
pub use ids::WayId;
pub use jurisdiction::{BBox, Jurisdiction, JurisdictionKind};
pub use time::{SCHEMA_VERSION, utc_now_iso};
