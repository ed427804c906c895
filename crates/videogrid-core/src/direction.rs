use core::fmt;
use ndarray::Axis;

/// Which spatial axis two batches are joined along.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Side by side: widths add, heights must match.
    Horizontal,
    /// Stacked: heights add, widths must match.
    Vertical,
}

impl Direction {
    /// Axis of a `(frame, height, width, channel)` batch that grows.
    pub fn batch_axis(self) -> Axis {
        match self {
            Direction::Horizontal => Axis(2),
            Direction::Vertical => Axis(1),
        }
    }

    /// Same axis, counted within a single `(height, width, channel)` frame.
    pub fn frame_axis(self) -> Axis {
        Axis(self.batch_axis().index() - 1)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Horizontal => "horizontal",
            Direction::Vertical => "vertical",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
