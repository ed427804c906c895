//! Error types for videogrid-nodes.

use thiserror::Error;
use videogrid_core::ValidationError;

/// Errors from node lookup and execution.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NodeError {
    #[error("Unknown node type: {0}")]
    UnknownNodeType(String),

    #[error("Missing required input '{input}' for node '{node}'")]
    MissingInput { node: String, input: String },

    #[error("Node already registered: {0}")]
    DuplicateNode(String),

    #[error("Invalid descriptor for node '{node}': {reason}")]
    InvalidDescriptor { node: String, reason: String },

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

pub type Result<T> = std::result::Result<T, NodeError>;
