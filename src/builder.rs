//! Builder for configuring and constructing a `VideoGrid`.

use crate::{Result, VideoGrid};
use videogrid_core::ConcatOptions;
use videogrid_nodes::{NodeRegistry, RegistryConfig};

/// Legacy nodes are registered unless disabled with `.legacy_nodes(false)`.
/// Frames are filled sequentially unless `.parallel(true)` is set.
///
/// # Example
///
/// ```ignore
/// use videogrid::prelude::*;
///
/// let grid = VideoGrid::builder()
///     .parallel(true)
///     .min_parallel_frames(16)
///     .build()?;
///
/// for desc in grid.descriptors() {
///     println!("{} ({})", desc.display_name, desc.category);
/// }
/// ```
#[derive(Debug, Clone, Default)]
pub struct VideoGridBuilder {
    config: RegistryConfig,
}

impl VideoGridBuilder {
    /// Default: true
    pub fn legacy_nodes(mut self, enabled: bool) -> Self {
        self.config.legacy_nodes = enabled;
        self
    }

    /// Default: false
    pub fn parallel(mut self, enabled: bool) -> Self {
        self.config.options.parallel = enabled;
        self
    }

    /// Default: 8
    pub fn min_parallel_frames(mut self, frames: usize) -> Self {
        self.config.options.min_parallel_frames = frames;
        self
    }

    pub fn options(mut self, options: ConcatOptions) -> Self {
        self.config.options = options;
        self
    }

    pub fn build(self) -> Result<VideoGrid> {
        self.config.options.validate()?;

        let registry = NodeRegistry::with_builtin_nodes(&self.config);
        tracing::info!(
            "Registered {} video grid nodes (legacy: {}, parallel: {})",
            registry.len(),
            self.config.legacy_nodes,
            self.config.options.parallel
        );

        Ok(VideoGrid::from_parts(registry, self.config))
    }
}
