//! `vr-output`: persistence for jurisdiction reports.
//!
//! | Item            | Role                                                   |
//! |-----------------|--------------------------------------------------------|
//! | [`JsonStore`]   | `roads/{id}.json` + `manifest.json`, zip on finish     |
//! | [`Manifest`]    | Cumulative index of generated jurisdictions            |
//! | [`zip_dir`]     | Packs an output tree into a single archive             |
//!
//! The pipeline drives any [`OutputWriter`]; [`JsonStore`] is the only
//! production implementation.

pub mod archive;
pub mod error;
pub mod json;
pub mod manifest;
pub mod writer;

#[cfg(test)]
mod tests;

pub use archive::zip_dir;
pub use error::{OutputError, OutputResult};
pub use json::{JsonStore, MANIFEST_FILE, ROADS_DIR};
pub use manifest::{Manifest, ManifestEntry};
pub use writer::OutputWriter;
