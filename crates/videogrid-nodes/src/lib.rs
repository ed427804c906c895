//! Host-facing side of videogrid: node descriptors, the concatenation node
//! and an explicit registry.
//!
//! The host builds a [`NodeRegistry`] once at plugin load, lists its
//! [`NodeDescriptor`]s to populate its UI, and executes nodes by id with
//! named input batches.
//!
//! ```rust
//! use videogrid_core::{FrameBatch, NoProgress};
//! use videogrid_nodes::{inputs, NodeRegistry, VERTICAL_NODE_ID};
//!
//! let registry = NodeRegistry::default();
//! let top = FrameBatch::zeros((2, 100, 200, 3));
//! let bottom = FrameBatch::zeros((2, 150, 200, 3));
//!
//! let outputs = registry
//!     .execute(
//!         VERTICAL_NODE_ID,
//!         &inputs! { "images_top" => &top, "images_bottom" => &bottom },
//!         &NoProgress,
//!     )
//!     .unwrap();
//! assert_eq!(outputs.get("images").unwrap().height(), 250);
//! ```

mod error;
pub use error::{NodeError, Result};

pub mod descriptor;
pub use descriptor::{NodeDescriptor, PortDefinition, PortType};

mod io;
pub use io::{NodeInputs, NodeOutputs};

pub mod node;
pub use node::{
    BatchNode, ConcatNode, HORIZONTAL_NODE_ID, LEGACY_CATEGORY, LEGACY_HORIZONTAL_NODE_ID,
    VERTICAL_NODE_ID, VIDEO_GRID_CATEGORY,
};

pub mod registry;
pub use registry::{NodeRegistry, RegistryConfig};
