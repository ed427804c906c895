//! Centralized error type for the videogrid umbrella crate.
//!
//! Wraps subsystem errors so `?` propagates naturally across crate boundaries.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Core(#[from] videogrid_core::Error),

    #[error("Node: {0}")]
    Node(videogrid_nodes::NodeError),

    #[error(transparent)]
    Validation(#[from] videogrid_core::ValidationError),
}

/// A rejected concatenation is `Error::Validation` whether it came from a
/// node or a direct `concat_*` call.
impl From<videogrid_nodes::NodeError> for Error {
    fn from(err: videogrid_nodes::NodeError) -> Self {
        match err {
            videogrid_nodes::NodeError::Validation(err) => Error::Validation(err),
            other => Error::Node(other),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
