//! OctreeConfig - construction depth limit and default query range.

use super::RayRange;
use crate::error::{OctreeError, Result};

/// Deepest level the builder will accept.
///
/// Single-precision cells stop halving meaningfully well before this.
pub const MAX_SUPPORTED_DEPTH: u32 = 32;

/// Configuration for octree construction and queries.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OctreeConfig {
  /// Maximum subdivision depth. Nodes at this level are always leaves.
  pub max_depth: u32,

  /// Ray interval for callers to pass to [`Octree::intersect_ray`](super::Octree::intersect_ray).
  ///
  /// The tree doesn't keep its config, so queries never read this field.
  pub ray_range: RayRange,
}

impl OctreeConfig {
  /// Depth 20 with the `[0, 100]` ray interval.
  pub const DEFAULT: Self = Self {
    max_depth: 20,
    ray_range: RayRange::DEFAULT,
  };

  /// Config with the given depth limit and default ray range.
  pub fn with_max_depth(max_depth: u32) -> Self {
    Self {
      max_depth,
      ..Self::DEFAULT
    }
  }

  /// Check the depth limit and ray range.
  pub fn validate(&self) -> Result<()> {
    if self.max_depth > MAX_SUPPORTED_DEPTH {
      return Err(OctreeError::DepthTooLarge {
        requested: self.max_depth,
        limit: MAX_SUPPORTED_DEPTH,
      });
    }
    RayRange::new(self.ray_range.near, self.ray_range.far)?;
    Ok(())
  }
}

impl Default for OctreeConfig {
  fn default() -> Self {
    Self::DEFAULT
  }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;
