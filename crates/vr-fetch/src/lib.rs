//! `vr-fetch`: Overpass API client.
//!
//! Builds the road query for a bounding box, posts it to a list of mirrors
//! with bounded retries, and hands back the decoded `elements` array.
//!
//! ```text
//! OverpassClient::fetch(bbox)
//!   └─ for each server (priority order)
//!        └─ up to max_retries attempts ─ Transport::post_form ─ OverpassResponse::parse
//! ```
//!
//! All network I/O goes through the [`Transport`] trait so the failover
//! logic can be tested without a network.

pub mod client;
pub mod error;
pub mod query;
pub mod response;
pub mod transport;


pub use client::{FetchOutcome, OverpassClient, server_short_name};
pub use error::{FetchError, FetchResult};
pub use query::{QUERIED_HIGHWAYS, build_query};
pub use response::{LatLon, OverpassResponse, RawWay};
pub use transport::{ReqwestTransport, Transport};
