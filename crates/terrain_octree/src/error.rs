//! Validation errors for the opt-in checked constructors.
//!
//! Geometry and queries themselves never fail; these only surface when a
//! caller asks for input to be validated (`try_new`, `try_build`, ...).

use glam::Vec3;
use thiserror::Error;

/// Errors reported by checked constructors.
#[derive(Clone, Copy, Debug, PartialEq, Error)]
pub enum OctreeError {
  /// A bounding box had `min > max` on at least one axis.
  #[error("bounding box min {min} exceeds max {max}")]
  InvalidBounds { min: Vec3, max: Vec3 },

  /// A bounding box corner contained NaN or infinity.
  #[error("bounding box corners must be finite (min {min}, max {max})")]
  NonFiniteBounds { min: Vec3, max: Vec3 },

  /// A ray interval was empty, negative-length or not finite.
  #[error("invalid ray range [{near}, {far}]")]
  InvalidRayRange { near: f32, far: f32 },

  /// A ray direction was zero or not finite.
  #[error("ray direction {direction} is degenerate")]
  DegenerateRay { direction: Vec3 },

  /// Requested depth would overflow the per-level bookkeeping.
  #[error("max depth {requested} exceeds supported limit {limit}")]
  DepthTooLarge { requested: u32, limit: u32 },
}

/// Result alias for checked constructors.
pub type Result<T> = std::result::Result<T, OctreeError>;
