//! Fluent builder for constructing a [`Pipeline`].

use vr_core::{RunConfig, jurisdiction};
use vr_fetch::{OverpassClient, Transport};
use vr_output::OutputWriter;

use crate::pipeline::Target;
use crate::{Pipeline, PipelineResult};

/// Fluent builder for [`Pipeline<T, W>`].
///
/// # Optional inputs
///
/// | Method               | Default                               |
/// |----------------------|---------------------------------------|
/// | `.jurisdictions(v)`  | Every registry entry, in table order  |
///
/// # Example
///
/// ```rust,ignore
/// let transport = ReqwestTransport::new(config.fetch.timeout)?;
/// let store = JsonStore::new(&config.output_dir, config.archive_path.clone(), false)?;
/// let mut pipeline = PipelineBuilder::new(config, transport, store)
///     .jurisdictions(["henrico", "richmond_city"])
///     .build()?;
/// let summary = pipeline.run(&mut LogObserver)?;
/// ```
pub struct PipelineBuilder<T: Transport, W: OutputWriter> {
    config:    RunConfig,
    transport: T,
    writer:    W,
    selection: Vec<String>,
}

impl<T: Transport, W: OutputWriter> PipelineBuilder<T, W> {
    pub fn new(config: RunConfig, transport: T, writer: W) -> Self {
        Self { config, transport, writer, selection: Vec::new() }
    }

    /// Restrict the run to these ids, in the given order.  Ids missing from
    /// the registry are kept and reported as skipped.  An empty list means
    /// every jurisdiction.
    pub fn jurisdictions<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.selection = ids.into_iter().map(Into::into).collect();
        self
    }

    /// Validate the fetch configuration and resolve the target list.
    pub fn build(self) -> PipelineResult<Pipeline<T, W>> {
        let client = OverpassClient::new(self.transport, self.config.fetch)?;

        let targets = if self.selection.is_empty() {
            jurisdiction::all().iter().map(Target::Known).collect()
        } else {
            self.selection
                .into_iter()
                .map(|id| match jurisdiction::lookup(&id) {
                    Some(j) => Target::Known(j),
                    None => Target::Unknown(id),
                })
                .collect()
        };

        Ok(Pipeline {
            client,
            writer: self.writer,
            targets,
            pacing_delay: self.config.pacing_delay,
        })
    }
}
