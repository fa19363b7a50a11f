//! Rays and parametric ray intervals.

use glam::Vec3;

use crate::error::{OctreeError, Result};

/// Half-line `origin + t * direction`.
///
/// The direction is not normalized; `t` is measured in direction lengths.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ray {
  pub origin: Vec3,
  pub direction: Vec3,
}

impl Ray {
  /// Straight down (-Y), the ground clearance sensor direction.
  pub const DOWN: Vec3 = Vec3::NEG_Y;

  pub fn new(origin: Vec3, direction: Vec3) -> Self {
    Self { origin, direction }
  }

  /// Create a ray, rejecting zero or non-finite directions and origins.
  pub fn try_new(origin: Vec3, direction: Vec3) -> Result<Self> {
    if !origin.is_finite() || !direction.is_finite() || direction == Vec3::ZERO {
      return Err(OctreeError::DegenerateRay { direction });
    }
    Ok(Self { origin, direction })
  }

  /// Ray pointing straight down from `origin`.
  pub fn down_from(origin: Vec3) -> Self {
    Self::new(origin, Self::DOWN)
  }

  /// Point at parameter `t`.
  #[inline]
  pub fn at(&self, t: f32) -> Vec3 {
    self.origin + self.direction * t
  }
}

/// Parametric interval `[near, far]` a ray query is restricted to.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RayRange {
  pub near: f32,
  pub far: f32,
}

impl RayRange {
  /// `[0, 100]`: far-plane distance bounding the search to in-scene terrain.
  pub const DEFAULT: Self = Self {
    near: 0.0,
    far: 100.0,
  };

  /// Create a validated range; `near` must be finite and `near <= far`.
  ///
  /// `far` may be `f32::INFINITY` for an unbounded search.
  pub fn new(near: f32, far: f32) -> Result<Self> {
    if !near.is_finite() || far.is_nan() || near > far {
      return Err(OctreeError::InvalidRayRange { near, far });
    }
    Ok(Self { near, far })
  }
}

impl Default for RayRange {
  fn default() -> Self {
    Self::DEFAULT
  }
}
