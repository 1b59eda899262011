//! `vr-pipeline`: orchestrates one generator run.
//!
//! Strictly sequential: one jurisdiction at a time, at most one request in
//! flight, and a pacing sleep between jurisdictions.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use vr_pipeline::{LogObserver, PipelineBuilder};
//!
//! let mut pipeline = PipelineBuilder::new(config, transport, store).build()?;
//! let summary = pipeline.run(&mut LogObserver)?;
//! ```

pub mod builder;
pub mod error;
pub mod observer;
pub mod pipeline;
pub mod summary;


pub use builder::PipelineBuilder;
pub use error::{PipelineError, PipelineResult};
pub use observer::{LogObserver, NoopObserver, PipelineObserver};
pub use pipeline::{Pipeline, Target};
pub use summary::RunSummary;
