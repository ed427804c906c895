//! Metadata a node advertises to the host: identity, grouping and ports.

use serde::{Deserialize, Serialize};

/// Data type carried by a port.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PortType {
    /// Batch of frames, `(frame, height, width, channel)`.
    #[serde(rename = "IMAGE")]
    ImageBatch,
}

impl PortType {
    /// Name the host uses for this type.
    pub fn host_name(self) -> &'static str {
        match self {
            PortType::ImageBatch => "IMAGE",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortDefinition {
    pub name: String,
    pub port_type: PortType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tooltip: Option<String>,
}

impl PortDefinition {
    pub fn image_batch(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            port_type: PortType::ImageBatch,
            tooltip: None,
        }
    }

    pub fn with_tooltip(mut self, tooltip: impl Into<String>) -> Self {
        self.tooltip = Some(tooltip.into());
        self
    }
}

/// Everything the host needs to list, group and wire a node.
///
/// All declared inputs are required.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeDescriptor {
    /// Stable registration identifier. Saved host graphs refer to nodes by it.
    pub id: String,
    pub display_name: String,
    /// UI grouping label.
    pub category: String,
    pub description: String,
    /// Entry point name the host invokes.
    pub function: String,
    pub inputs: Vec<PortDefinition>,
    pub outputs: Vec<PortDefinition>,
}

impl NodeDescriptor {
    pub fn input(&self, name: &str) -> Option<&PortDefinition> {
        self.inputs.iter().find(|p| p.name == name)
    }

    pub fn output(&self, name: &str) -> Option<&PortDefinition> {
        self.outputs.iter().find(|p| p.name == name)
    }
}
