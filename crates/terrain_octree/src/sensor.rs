//! Ground clearance and touchdown checks for a lander over terrain.
//!
//! The octree only reports candidate vertices; this module turns them into
//! the two numbers a lander loop cares about:
//!
//! - **clearance**: height above the ground directly below, from a downward
//!   ray query. The first candidate is the ground unless it sits above the
//!   ground floor, in which case the pick climbs to higher candidates.
//! - **touchdown**: whether the lander's position is inside an occupied
//!   terrain cell, and whether it is low enough to count as landed.

use glam::Vec3;

use crate::octree::{Octree, QueryHit, Ray, RayRange};

/// Tuning for [`GroundSensor`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SensorConfig {
  /// Interval for the downward clearance ray.
  pub ray_range: RayRange,
  /// Ground height assumed when the clearance ray finds nothing.
  pub fallback_ground_height: f32,
  /// A ground pick at or below this height is kept; above it, higher
  /// candidates replace it.
  pub ground_floor: f32,
  /// Contact above this height is not a landing.
  pub landing_ceiling: f32,
}

impl SensorConfig {
  pub const DEFAULT: Self = Self {
    ray_range: RayRange::DEFAULT,
    fallback_ground_height: 0.0,
    ground_floor: 20.0,
    landing_ceiling: 20.0,
  };
}

impl Default for SensorConfig {
  fn default() -> Self {
    Self::DEFAULT
  }
}

/// Result of a clearance reading.
#[derive(Clone, Debug, PartialEq)]
pub struct Clearance {
  /// `position.y - ground height`.
  pub altitude: f32,
  /// Vertex taken as the ground, `None` if the fallback height was used.
  pub ground_vertex: Option<u32>,
  /// Raw ray query, kept for debug drawing.
  pub hit: QueryHit,
}

/// Outcome of a touchdown check.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Touchdown {
  /// Not inside any occupied terrain cell.
  Clear,
  /// Inside a terrain cell, but above the landing ceiling.
  Contact { vertex: u32 },
  /// Inside a terrain cell at or below the landing ceiling.
  Landed { vertex: u32 },
}

impl Touchdown {
  /// True for both contact outcomes.
  pub fn is_contact(&self) -> bool {
    !matches!(self, Touchdown::Clear)
  }

  pub fn is_landed(&self) -> bool {
    matches!(self, Touchdown::Landed { .. })
  }
}

/// Reads clearance and touchdown state from a terrain octree.
///
/// Borrows both the tree and the vertex positions it indexes.
#[derive(Clone, Copy, Debug)]
pub struct GroundSensor<'a> {
  octree: &'a Octree,
  vertices: &'a [Vec3],
  config: SensorConfig,
}

impl<'a> GroundSensor<'a> {
  pub fn new(octree: &'a Octree, vertices: &'a [Vec3], config: SensorConfig) -> Self {
    Self {
      octree,
      vertices,
      config,
    }
  }

  pub fn config(&self) -> &SensorConfig {
    &self.config
  }

  /// Height above ground straight below `position`.
  #[cfg_attr(feature = "tracing", tracing::instrument(level = "trace", skip(self)))]
  pub fn clearance(&self, position: Vec3) -> Clearance {
    let hit = self
      .octree
      .intersect_ray(&Ray::down_from(position), self.config.ray_range);

    let ground_vertex = self.ground_pick(&hit.vertices);
    let ground_height = ground_vertex
      .map(|i| self.vertices[i as usize].y)
      .unwrap_or(self.config.fallback_ground_height);

    Clearance {
      altitude: position.y - ground_height,
      ground_vertex,
      hit,
    }
  }

  /// Contact test at `position`.
  #[cfg_attr(feature = "tracing", tracing::instrument(level = "trace", skip(self)))]
  pub fn touchdown(&self, position: Vec3) -> Touchdown {
    let Some(vertex) = self.octree.collide_point(position).first() else {
      return Touchdown::Clear;
    };

    if position.y > self.config.landing_ceiling {
      Touchdown::Contact { vertex }
    } else {
      #[cfg(feature = "tracing")]
      tracing::debug!(vertex, %position, "landed");
      Touchdown::Landed { vertex }
    }
  }

  /// Start from the first candidate and move to a higher one only while the
  /// current pick is above `ground_floor`.
  fn ground_pick(&self, candidates: &[u32]) -> Option<u32> {
    let (&first, rest) = candidates.split_first()?;
    let mut pick = first;
    let mut pick_y = self.vertices[first as usize].y;
    for &index in rest {
      let y = self.vertices[index as usize].y;
      if y > pick_y && pick_y > self.config.ground_floor {
        pick = index;
        pick_y = y;
      }
    }
    Some(pick)
  }
}

#[cfg(test)]
#[path = "sensor_test.rs"]
mod sensor_test;
