//! # videogrid - Video Grid Nodes
//!
//! Plugin nodes for a node-graph media host that concatenate two videos
//! (frame batches) side by side or stacked, frame by frame.
//!
//! ## Architecture
//!
//! videogrid is an umbrella crate over:
//! - **videogrid-core** - `FrameBatch`, validation, horizontal/vertical concatenation, progress
//! - **videogrid-nodes** - Node descriptors, the concatenation node, the node registry
//!
//! ## Quick Start
//!
//! ```rust
//! use videogrid::prelude::*;
//!
//! let grid = VideoGrid::builder().build().unwrap();
//!
//! let left = FrameBatch::zeros((2, 100, 200, 3));
//! let right = FrameBatch::zeros((2, 100, 300, 3));
//!
//! let outputs = grid
//!     .execute(
//!         HORIZONTAL_NODE_ID,
//!         &inputs! { "images_left" => &left, "images_right" => &right },
//!     )
//!     .unwrap();
//! assert_eq!(outputs.get("images").unwrap().width(), 500);
//! ```

/// Re-export of videogrid-core for direct access
pub use videogrid_core as core;

/// Re-export of videogrid-nodes for direct access
pub use videogrid_nodes as nodes;

pub use videogrid_core::{
    concatenate, concatenate_horizontal, concatenate_vertical, concatenate_with_progress,
    BatchShape, ConcatOptions, ConcatProgress, Direction, FrameBatch, NoProgress, ProgressSink,
    ValidationError,
};

pub use videogrid_nodes::{
    inputs, BatchNode, ConcatNode, NodeDescriptor, NodeError, NodeInputs, NodeOutputs,
    NodeRegistry, PortDefinition, PortType, RegistryConfig, HORIZONTAL_NODE_ID,
    LEGACY_HORIZONTAL_NODE_ID, VERTICAL_NODE_ID,
};

mod builder;
mod error;
mod grid;

pub use builder::VideoGridBuilder;
pub use error::{Error, Result};
pub use grid::VideoGrid;

/// Convenience prelude for common imports
pub mod prelude {
    pub use crate::{VideoGrid, VideoGridBuilder};

    pub use crate::{
        concatenate_horizontal, concatenate_vertical, ConcatProgress, Direction, FrameBatch,
        NoProgress, ProgressSink,
    };

    pub use crate::{
        inputs, BatchNode, NodeDescriptor, NodeInputs, NodeOutputs, NodeRegistry,
        HORIZONTAL_NODE_ID, LEGACY_HORIZONTAL_NODE_ID, VERTICAL_NODE_ID,
    };

    pub use crate::{Error, Result};
}
