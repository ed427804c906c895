//! Frame batches and frame-by-frame concatenation.
//!
//! A video is a [`FrameBatch`]: a 4D `f32` array in `(frame, height, width,
//! channel)` order. Two batches can be joined side by side
//! ([`concatenate_horizontal`]) or stacked ([`concatenate_vertical`]).
//! Inputs are never modified; each call validates the shared axes up front and
//! returns a freshly allocated batch or a [`ValidationError`].
//!
//! # Example
//!
//! ```rust
//! use videogrid_core::{concatenate_horizontal, FrameBatch};
//!
//! let left = FrameBatch::zeros((2, 100, 200, 3));
//! let right = FrameBatch::zeros((2, 100, 300, 3));
//!
//! let grid = concatenate_horizontal(&left, &right).unwrap();
//! assert_eq!(grid.width(), 500);
//! ```

mod error;
pub use error::{Error, Result, ValidationError};

mod batch;
pub use batch::{BatchShape, FrameBatch};

mod direction;
pub use direction::Direction;

pub mod config;
pub use config::ConcatOptions;

pub mod progress;
pub use progress::{ConcatProgress, NoProgress, ProgressSink};

pub mod concat;
pub use concat::{
    concatenate, concatenate_horizontal, concatenate_vertical, concatenate_with_progress,
    validate,
};

/// Re-export of ndarray for building and inspecting batches.
pub use ndarray;
