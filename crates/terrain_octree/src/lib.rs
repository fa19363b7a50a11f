//! terrain_octree - vertex octree for terrain ray and collision queries
//!
//! Builds a bounding-volume octree over a terrain mesh's vertices and answers
//! the two questions a lander simulation asks every step:
//!
//! - **Ray query**: which vertices lie in cells a ray passes through
//!   (height-above-ground sensor)
//! - **Point query**: which vertices share a cell with a point (impact and
//!   landing detection)
//!
//! Vertex positions stay with the caller; the tree stores indices only.
//! Queries borrow the tree immutably and return their own selection path, so
//! a built tree can be shared freely between threads.
//!
//! # Example
//!
//! ```ignore
//! use glam::Vec3;
//! use terrain_octree::{GroundSensor, Octree, SensorConfig};
//!
//! let vertices: Vec<Vec3> = load_terrain();
//! let octree = Octree::from_mesh(&vertices, 12);
//!
//! let sensor = GroundSensor::new(&octree, &vertices, SensorConfig::default());
//! let reading = sensor.clearance(lander_position);
//! println!("AGL: {:.2}", reading.altitude);
//! ```

pub mod error;
pub use error::{OctreeError, Result};

// Octree construction and queries
pub mod octree;
pub use octree::{
  Aabb, NodeId, Octree, OctreeBox, OctreeConfig, Probe, QueryHit, Ray, RayRange, SelectionPath,
};

// Clearance and touchdown built on the queries
pub mod sensor;
pub use sensor::{Clearance, GroundSensor, SensorConfig, Touchdown};

// Debug visualisation lists
pub mod debug_draw;

// Engine-agnostic build/query statistics
pub mod metrics;

#[cfg(test)]
pub(crate) mod test_utils;
