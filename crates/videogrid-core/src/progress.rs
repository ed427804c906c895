//! Per-frame progress reporting.
//!
//! Progress is advisory: a sink observes completed frames but never affects
//! the concatenated output.

/// Snapshot handed to a [`ProgressSink`] after each frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConcatProgress {
    /// Frames finished so far, including this one.
    pub completed: usize,
    pub total: usize,
}

impl ConcatProgress {
    /// Completed fraction (0.0 to 1.0). An empty batch counts as done.
    pub fn fraction(&self) -> f32 {
        if self.total == 0 {
            1.0
        } else {
            self.completed as f32 / self.total as f32
        }
    }

    pub fn is_done(&self) -> bool {
        self.completed >= self.total
    }
}

/// Receiver of per-frame progress.
///
/// `Sync` because frames may be filled from rayon workers.
///
/// # Example
/// ```ignore
/// let on_progress = |p: ConcatProgress| println!("{:.0}%", p.fraction() * 100.0);
/// let out = concatenate_with_progress(&a, &b, Direction::Horizontal, &options, &on_progress)?;
/// ```
pub trait ProgressSink: Sync {
    fn on_frame(&self, progress: ConcatProgress);
}

impl<F> ProgressSink for F
where
    F: Fn(ConcatProgress) + Sync,
{
    fn on_frame(&self, progress: ConcatProgress) {
        self(progress)
    }
}

/// Sink that discards progress.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoProgress;

impl ProgressSink for NoProgress {
    fn on_frame(&self, _progress: ConcatProgress) {}
}
