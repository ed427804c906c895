//! VideoGrid: the registry handed to the host plus direct concatenation entry points.

use crate::{Result, VideoGridBuilder};
use videogrid_core::{
    concatenate_with_progress, ConcatOptions, Direction, FrameBatch, NoProgress, ProgressSink,
};
use videogrid_nodes::{NodeDescriptor, NodeInputs, NodeOutputs, NodeRegistry, RegistryConfig};

/// Entry point for a host loading the plugin.
///
/// Holds the node registry built at construction. Stateless across calls:
/// every execution reads its inputs and returns a new batch.
///
/// # Example
///
/// ```ignore
/// use videogrid::prelude::*;
///
/// let grid = VideoGrid::builder().build()?;
///
/// let outputs = grid.execute(
///     HORIZONTAL_NODE_ID,
///     &inputs! { "images_left" => &left, "images_right" => &right },
/// )?;
/// let side_by_side = outputs.get("images").unwrap();
/// ```
#[derive(Debug, Clone)]
pub struct VideoGrid {
    registry: NodeRegistry,
    config: RegistryConfig,
}

impl VideoGrid {
    pub fn builder() -> VideoGridBuilder {
        VideoGridBuilder::default()
    }

    pub(crate) fn from_parts(registry: NodeRegistry, config: RegistryConfig) -> Self {
        Self { registry, config }
    }

    pub fn registry(&self) -> &NodeRegistry {
        &self.registry
    }

    /// Hand the registry to the host.
    pub fn into_registry(self) -> NodeRegistry {
        self.registry
    }

    pub fn options(&self) -> &ConcatOptions {
        &self.config.options
    }

    pub fn descriptors(&self) -> Vec<&NodeDescriptor> {
        self.registry.descriptors()
    }

    pub fn execute(&self, id: &str, inputs: &NodeInputs<'_>) -> Result<NodeOutputs> {
        self.execute_with_progress(id, inputs, &NoProgress)
    }

    pub fn execute_with_progress(
        &self,
        id: &str,
        inputs: &NodeInputs<'_>,
        progress: &dyn ProgressSink,
    ) -> Result<NodeOutputs> {
        Ok(self.registry.execute(id, inputs, progress)?)
    }

    /// Join two batches side by side using this grid's options.
    pub fn concat_horizontal(&self, left: &FrameBatch, right: &FrameBatch) -> Result<FrameBatch> {
        self.concat(left, right, Direction::Horizontal)
    }

    /// Stack two batches using this grid's options.
    pub fn concat_vertical(&self, top: &FrameBatch, bottom: &FrameBatch) -> Result<FrameBatch> {
        self.concat(top, bottom, Direction::Vertical)
    }

    fn concat(
        &self,
        first: &FrameBatch,
        second: &FrameBatch,
        direction: Direction,
    ) -> Result<FrameBatch> {
        Ok(concatenate_with_progress(
            first,
            second,
            direction,
            &self.config.options,
            &NoProgress,
        )?)
    }
}
