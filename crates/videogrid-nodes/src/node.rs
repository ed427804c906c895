//! The concatenation node exposed to the host.
//!
//! One implementation backs every registered identity; the horizontal,
//! vertical and legacy horizontal nodes differ only in their descriptor and
//! direction.

use crate::{NodeDescriptor, NodeError, NodeInputs, NodeOutputs, PortDefinition, Result};
use videogrid_core::{concatenate_with_progress, ConcatOptions, Direction, ProgressSink};

pub const HORIZONTAL_NODE_ID: &str = "VideosConcateHorizontal:";
pub const VERTICAL_NODE_ID: &str = "VideosConcateVertical";
/// Older horizontal node kept loadable for existing graphs.
pub const LEGACY_HORIZONTAL_NODE_ID: &str = "VideoConcatenateHorizontal";

pub const VIDEO_GRID_CATEGORY: &str = "Video Grid";
pub const LEGACY_CATEGORY: &str = "Video Processing Tool";

const FUNCTION_NAME: &str = "concate_videos";

/// A node the host can list and execute.
pub trait BatchNode: Send + Sync {
    fn descriptor(&self) -> &NodeDescriptor;

    /// Run the node. `progress` is advanced once per produced frame.
    fn execute(&self, inputs: &NodeInputs<'_>, progress: &dyn ProgressSink) -> Result<NodeOutputs>;

    fn id(&self) -> &str {
        &self.descriptor().id
    }
}

/// Joins the batches on its two input ports, in port order.
#[derive(Debug, Clone)]
pub struct ConcatNode {
    descriptor: NodeDescriptor,
    direction: Direction,
    options: ConcatOptions,
}

impl ConcatNode {
    /// Build a node from its descriptor.
    ///
    /// The descriptor must declare two inputs (first, second) and one output,
    /// otherwise [`NodeError::InvalidDescriptor`] is returned.
    pub fn new(descriptor: NodeDescriptor, direction: Direction) -> Result<Self> {
        if descriptor.inputs.len() != 2 || descriptor.outputs.len() != 1 {
            return Err(port_error(&descriptor));
        }
        Ok(Self::builtin(descriptor, direction))
    }

    // Port counts of the builtin descriptors are fixed below.
    fn builtin(descriptor: NodeDescriptor, direction: Direction) -> Self {
        Self {
            descriptor,
            direction,
            options: ConcatOptions::default(),
        }
    }

    /// Side-by-side node, `images_left` + `images_right`.
    pub fn horizontal() -> Self {
        Self::builtin(
            NodeDescriptor {
                id: HORIZONTAL_NODE_ID.to_string(),
                display_name: "Videos Concatenate (Horizontal)".to_string(),
                category: VIDEO_GRID_CATEGORY.to_string(),
                description: "Video Concatenate Node".to_string(),
                function: FUNCTION_NAME.to_string(),
                inputs: vec![
                    PortDefinition::image_batch("images_left").with_tooltip("Left image batch"),
                    PortDefinition::image_batch("images_right").with_tooltip("Right image batch"),
                ],
                outputs: vec![PortDefinition::image_batch("images")],
            },
            Direction::Horizontal,
        )
    }

    /// Stacking node, `images_top` + `images_bottom`.
    pub fn vertical() -> Self {
        Self::builtin(
            NodeDescriptor {
                id: VERTICAL_NODE_ID.to_string(),
                display_name: "Videos Concatenate (Vertical)".to_string(),
                category: VIDEO_GRID_CATEGORY.to_string(),
                description: "Video Concatenate Vertically Node".to_string(),
                function: FUNCTION_NAME.to_string(),
                inputs: vec![
                    PortDefinition::image_batch("images_top").with_tooltip("Top image batch"),
                    PortDefinition::image_batch("images_bottom")
                        .with_tooltip("Bottom image batch"),
                ],
                outputs: vec![PortDefinition::image_batch("images")],
            },
            Direction::Vertical,
        )
    }

    /// Horizontal node under its older naming: `imagesL` + `imagesR` -> `IMAGE`.
    pub fn legacy_horizontal() -> Self {
        Self::builtin(
            NodeDescriptor {
                id: LEGACY_HORIZONTAL_NODE_ID.to_string(),
                display_name: "Video Concatenate (Horizontal)".to_string(),
                category: LEGACY_CATEGORY.to_string(),
                description: "Video Concatenate Node".to_string(),
                function: FUNCTION_NAME.to_string(),
                inputs: vec![
                    PortDefinition::image_batch("imagesL"),
                    PortDefinition::image_batch("imagesR"),
                ],
                outputs: vec![PortDefinition::image_batch("IMAGE")],
            },
            Direction::Horizontal,
        )
    }

    pub fn with_options(mut self, options: ConcatOptions) -> Self {
        self.options = options;
        self
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn options(&self) -> &ConcatOptions {
        &self.options
    }
}

fn port_error(descriptor: &NodeDescriptor) -> NodeError {
    NodeError::InvalidDescriptor {
        node: descriptor.id.clone(),
        reason: format!(
            "expected 2 inputs and 1 output, got {} and {}",
            descriptor.inputs.len(),
            descriptor.outputs.len()
        ),
    }
}

impl BatchNode for ConcatNode {
    fn descriptor(&self) -> &NodeDescriptor {
        &self.descriptor
    }

    fn execute(&self, inputs: &NodeInputs<'_>, progress: &dyn ProgressSink) -> Result<NodeOutputs> {
        let id = self.id();
        let [first_port, second_port] = self.descriptor.inputs.as_slice() else {
            return Err(port_error(&self.descriptor));
        };
        let Some(output_port) = self.descriptor.outputs.first() else {
            return Err(port_error(&self.descriptor));
        };
        let first = inputs.require(id, &first_port.name)?;
        let second = inputs.require(id, &second_port.name)?;

        tracing::debug!("Executing node {}", id);
        let batch =
            concatenate_with_progress(first, second, self.direction, &self.options, progress)?;

        let mut outputs = NodeOutputs::new();
        outputs.insert(output_port.name.clone(), batch);
        Ok(outputs)
    }
}
