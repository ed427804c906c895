//! Concatenation options.

use crate::{Error, Result};

/// How frames are filled during concatenation.
///
/// Both paths produce identical output; `parallel` only changes scheduling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConcatOptions {
    /// Fill output frames on the rayon pool.
    pub parallel: bool,
    /// Batches with fewer frames than this are filled sequentially.
    pub min_parallel_frames: usize,
}

impl Default for ConcatOptions {
    fn default() -> Self {
        Self {
            parallel: false,
            min_parallel_frames: 8,
        }
    }
}

impl ConcatOptions {
    pub fn parallel() -> Self {
        Self {
            parallel: true,
            ..Default::default()
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.min_parallel_frames == 0 {
            return Err(Error::InvalidConfig(
                "min_parallel_frames must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Whether a batch of `frames` frames takes the parallel path.
    pub fn use_parallel(&self, frames: usize) -> bool {
        self.parallel && frames >= self.min_parallel_frames
    }
}
