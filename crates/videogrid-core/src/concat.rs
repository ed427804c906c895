//! Frame-by-frame concatenation of two frame batches.
//!
//! Validation runs before any allocation. On success every output frame `i`
//! is input frame `i` of the first batch followed by input frame `i` of the
//! second batch along the direction's axis; all other axes are copied as-is.

use crate::{
    BatchShape, ConcatOptions, ConcatProgress, Direction, FrameBatch, NoProgress, ProgressSink,
    ValidationError,
};
use ndarray::{Array4, ArrayViewMut3, Axis};
use rayon::prelude::*;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Check that `first` and `second` can be joined in `direction`.
///
/// Returns the output shape. The frame count is checked first, then the
/// spatial axis that must match (height for horizontal, width for vertical),
/// then the channel count.
pub fn validate(
    first: &FrameBatch,
    second: &FrameBatch,
    direction: Direction,
) -> Result<BatchShape, ValidationError> {
    let a = first.shape();
    let b = second.shape();

    if a.frames != b.frames {
        return Err(ValidationError::FrameCount {
            direction,
            first: a.frames,
            second: b.frames,
        });
    }

    match direction {
        Direction::Horizontal if a.height != b.height => {
            return Err(ValidationError::Height {
                direction,
                first: a.height,
                second: b.height,
            });
        }
        Direction::Vertical if a.width != b.width => {
            return Err(ValidationError::Width {
                direction,
                first: a.width,
                second: b.width,
            });
        }
        _ => {}
    }

    if a.channels != b.channels {
        return Err(ValidationError::Channels {
            direction,
            first: a.channels,
            second: b.channels,
        });
    }

    let (first_len, second_len) = match direction {
        Direction::Horizontal => (a.width, b.width),
        Direction::Vertical => (a.height, b.height),
    };
    let too_large = || ValidationError::TooLarge {
        direction,
        first: first_len,
        second: second_len,
    };

    let joined = first_len.checked_add(second_len).ok_or_else(too_large)?;
    let shape = match direction {
        Direction::Horizontal => BatchShape {
            width: joined,
            ..a
        },
        Direction::Vertical => BatchShape {
            height: joined,
            ..a
        },
    };
    if !is_allocatable(shape) {
        return Err(too_large());
    }
    Ok(shape)
}

/// Whether `Array4::<f32>::zeros` accepts `shape`: the product of the
/// non-zero axis lengths and the byte size must both fit in `isize`.
fn is_allocatable(shape: BatchShape) -> bool {
    let dims = [shape.frames, shape.height, shape.width, shape.channels];
    let Some(product) = dims
        .iter()
        .filter(|&&len| len != 0)
        .try_fold(1usize, |acc, &len| acc.checked_mul(len))
    else {
        return false;
    };
    if product > isize::MAX as usize {
        return false;
    }
    dims.contains(&0)
        || product
            .checked_mul(std::mem::size_of::<f32>())
            .is_some_and(|bytes| bytes <= isize::MAX as usize)
}

/// Join `left` and `right` side by side, frame by frame.
///
/// Frame count, height and channel count must match; widths may differ.
pub fn concatenate_horizontal(
    left: &FrameBatch,
    right: &FrameBatch,
) -> Result<FrameBatch, ValidationError> {
    concatenate(left, right, Direction::Horizontal)
}

/// Stack `top` above `bottom`, frame by frame.
///
/// Frame count, width and channel count must match; heights may differ.
pub fn concatenate_vertical(
    top: &FrameBatch,
    bottom: &FrameBatch,
) -> Result<FrameBatch, ValidationError> {
    concatenate(top, bottom, Direction::Vertical)
}

pub fn concatenate(
    first: &FrameBatch,
    second: &FrameBatch,
    direction: Direction,
) -> Result<FrameBatch, ValidationError> {
    concatenate_with_progress(
        first,
        second,
        direction,
        &ConcatOptions::default(),
        &NoProgress,
    )
}

/// Full form of [`concatenate`]: explicit options and a progress sink that is
/// called once per finished frame.
pub fn concatenate_with_progress<P>(
    first: &FrameBatch,
    second: &FrameBatch,
    direction: Direction,
    options: &ConcatOptions,
    progress: &P,
) -> Result<FrameBatch, ValidationError>
where
    P: ProgressSink + ?Sized,
{
    let shape = match validate(first, second, direction) {
        Ok(shape) => shape,
        Err(err) => {
            tracing::warn!("Rejected {} stacking: {}", direction, err);
            return Err(err);
        }
    };

    tracing::info!("Stacking videos ({}): {} frames", direction, shape.frames);
    tracing::debug!(
        "Video 1 dimensions: {}x{} with {} channels",
        first.height(),
        first.width(),
        first.channel_count()
    );
    tracing::debug!(
        "Video 2 dimensions: {}x{} with {} channels",
        second.height(),
        second.width(),
        second.channel_count()
    );

    let split = match direction {
        Direction::Horizontal => first.width(),
        Direction::Vertical => first.height(),
    };
    let axis = direction.frame_axis();
    let total = shape.frames;
    let first = first.view();
    let second = second.view();
    let completed = AtomicUsize::new(0);

    let mut output = Array4::<f32>::zeros(shape.as_tuple());

    let fill = |(index, frame): (usize, ArrayViewMut3<'_, f32>)| {
        let (mut head, mut tail) = frame.split_at(axis, split);
        head.assign(&first.index_axis(Axis(0), index));
        tail.assign(&second.index_axis(Axis(0), index));

        let done = completed.fetch_add(1, Ordering::Relaxed) + 1;
        progress.on_frame(ConcatProgress {
            completed: done,
            total,
        });
    };

    if options.use_parallel(total) {
        output
            .axis_iter_mut(Axis(0))
            .into_par_iter()
            .enumerate()
            .for_each(fill);
    } else {
        output.axis_iter_mut(Axis(0)).enumerate().for_each(fill);
    }

    let output = FrameBatch::new(output);
    tracing::info!(
        "Concatenation complete. Result dimensions: {}x{}",
        output.height(),
        output.width()
    );
    Ok(output)
}
