//! Frame batches: a video as a 4D `(frame, height, width, channel)` array.

use crate::Result;
use core::fmt;
use ndarray::{Array4, ArrayView3, ArrayView4, Axis};

/// Axis sizes of a [`FrameBatch`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct BatchShape {
    pub frames: usize,
    pub height: usize,
    pub width: usize,
    pub channels: usize,
}

impl BatchShape {
    pub const fn new(frames: usize, height: usize, width: usize, channels: usize) -> Self {
        Self {
            frames,
            height,
            width,
            channels,
        }
    }

    /// Total number of samples across all axes.
    pub fn len(&self) -> usize {
        self.frames * self.height * self.width * self.channels
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Sample count of a single frame.
    pub fn frame_len(&self) -> usize {
        self.height * self.width * self.channels
    }

    pub fn as_tuple(&self) -> (usize, usize, usize, usize) {
        (self.frames, self.height, self.width, self.channels)
    }
}

impl fmt::Display for BatchShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}x{}x{}x{}",
            self.frames, self.height, self.width, self.channels
        )
    }
}

impl From<(usize, usize, usize, usize)> for BatchShape {
    fn from((frames, height, width, channels): (usize, usize, usize, usize)) -> Self {
        Self::new(frames, height, width, channels)
    }
}

impl From<[usize; 4]> for BatchShape {
    fn from([frames, height, width, channels]: [usize; 4]) -> Self {
        Self::new(frames, height, width, channels)
    }
}

impl From<BatchShape> for (usize, usize, usize, usize) {
    fn from(shape: BatchShape) -> Self {
        shape.as_tuple()
    }
}

/// An ordered batch of frames sharing spatial and channel dimensions.
///
/// Samples are `f32` and assumed to be normalized by the producer; no range or
/// finiteness check is applied here.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameBatch {
    data: Array4<f32>,
}

impl FrameBatch {
    pub fn new(data: Array4<f32>) -> Self {
        Self { data }
    }

    /// All-zero batch.
    pub fn zeros(shape: impl Into<BatchShape>) -> Self {
        Self::new(Array4::zeros(shape.into().as_tuple()))
    }

    /// Build a batch from a flat buffer in `(frame, height, width, channel)`
    /// row-major order.
    ///
    /// Fails with [`Error::InvalidShape`](crate::Error::InvalidShape) when
    /// `samples.len()` does not match the shape.
    pub fn from_shape_vec(shape: impl Into<BatchShape>, samples: Vec<f32>) -> Result<Self> {
        let data = Array4::from_shape_vec(shape.into().as_tuple(), samples)?;
        Ok(Self::new(data))
    }

    /// Build a batch by evaluating `f(frame, y, x, channel)` for every sample.
    pub fn from_fn<F>(shape: impl Into<BatchShape>, mut f: F) -> Self
    where
        F: FnMut(usize, usize, usize, usize) -> f32,
    {
        Self::new(Array4::from_shape_fn(
            shape.into().as_tuple(),
            |(i, y, x, c)| f(i, y, x, c),
        ))
    }

    pub fn shape(&self) -> BatchShape {
        self.data.dim().into()
    }

    pub fn frame_count(&self) -> usize {
        self.data.len_of(Axis(0))
    }

    pub fn height(&self) -> usize {
        self.data.len_of(Axis(1))
    }

    pub fn width(&self) -> usize {
        self.data.len_of(Axis(2))
    }

    pub fn channel_count(&self) -> usize {
        self.data.len_of(Axis(3))
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// View of frame `index` as `(height, width, channel)`.
    pub fn frame(&self, index: usize) -> Option<ArrayView3<'_, f32>> {
        (index < self.frame_count()).then(|| self.data.index_axis(Axis(0), index))
    }

    pub fn view(&self) -> ArrayView4<'_, f32> {
        self.data.view()
    }

    /// Flat samples, if the batch is in standard (row-major) layout.
    pub fn as_slice(&self) -> Option<&[f32]> {
        self.data.as_slice()
    }

    pub fn as_array(&self) -> &Array4<f32> {
        &self.data
    }

    pub fn into_array(self) -> Array4<f32> {
        self.data
    }
}

impl From<Array4<f32>> for FrameBatch {
    fn from(data: Array4<f32>) -> Self {
        Self::new(data)
    }
}

impl From<FrameBatch> for Array4<f32> {
    fn from(batch: FrameBatch) -> Self {
        batch.into_array()
    }
}
