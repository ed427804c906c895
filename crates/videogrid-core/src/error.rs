//! Error types for videogrid-core.

use crate::Direction;
use thiserror::Error;

/// Raised when two frame batches cannot be joined in the requested direction.
///
/// Checks run in a fixed order (frame count, then the fixed spatial axis,
/// then channels) and the first mismatch is reported.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Frame count mismatch for {direction} stacking: {first} vs {second}")]
    FrameCount {
        direction: Direction,
        first: usize,
        second: usize,
    },

    #[error("Height mismatch for {direction} stacking: {first} vs {second}")]
    Height {
        direction: Direction,
        first: usize,
        second: usize,
    },

    #[error("Width mismatch for {direction} stacking: {first} vs {second}")]
    Width {
        direction: Direction,
        first: usize,
        second: usize,
    },

    #[error("Channel count mismatch for {direction} stacking: {first} vs {second}")]
    Channels {
        direction: Direction,
        first: usize,
        second: usize,
    },

    /// The joined axis sizes are compatible but the output cannot be allocated.
    #[error("Output too large for {direction} stacking: {first} + {second}")]
    TooLarge {
        direction: Direction,
        first: usize,
        second: usize,
    },
}

impl ValidationError {
    /// Direction of the rejected concatenation.
    pub fn direction(&self) -> Direction {
        match self {
            Self::FrameCount { direction, .. }
            | Self::Height { direction, .. }
            | Self::Width { direction, .. }
            | Self::Channels { direction, .. }
            | Self::TooLarge { direction, .. } => *direction,
        }
    }

    /// Sizes of the offending axis as `(first, second)`.
    pub fn sizes(&self) -> (usize, usize) {
        match self {
            Self::FrameCount { first, second, .. }
            | Self::Height { first, second, .. }
            | Self::Width { first, second, .. }
            | Self::Channels { first, second, .. }
            | Self::TooLarge { first, second, .. } => (*first, *second),
        }
    }
}

/// Error type for videogrid-core operations.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Invalid shape: {0}")]
    InvalidShape(String),

    #[error("Invalid config: {0}")]
    InvalidConfig(String),
}

impl From<ndarray::ShapeError> for Error {
    fn from(err: ndarray::ShapeError) -> Self {
        Error::InvalidShape(err.to_string())
    }
}

/// Result type alias.
pub type Result<T> = std::result::Result<T, Error>;
