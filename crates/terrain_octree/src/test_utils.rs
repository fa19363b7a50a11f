//! Terrain fixtures shared by unit tests.

use glam::Vec3;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::octree::{NodeId, Octree};

/// Rolling terrain sampled on an `nx * nz` grid, row-major (index = z * nx + x).
pub fn heightfield(nx: usize, nz: usize, spacing: f32) -> Vec<Vec3> {
  let mut vertices = Vec::with_capacity(nx * nz);
  for z in 0..nz {
    for x in 0..nx {
      let (fx, fz) = (x as f32 * spacing, z as f32 * spacing);
      let y = 3.0 * (fx * 0.35).sin() + 2.0 * (fz * 0.2).cos() + 0.05 * fx;
      vertices.push(Vec3::new(fx, y, fz));
    }
  }
  vertices
}

/// Flat grid at height `y`, row-major like [`heightfield`].
pub fn flat_grid(nx: usize, nz: usize, spacing: f32, y: f32) -> Vec<Vec3> {
  (0..nz)
    .flat_map(|z| (0..nx).map(move |x| Vec3::new(x as f32 * spacing, y, z as f32 * spacing)))
    .collect()
}

/// Seeded uniform cloud in `[-extent, extent]^3`.
pub fn random_cloud(seed: u64, count: usize, extent: f32) -> Vec<Vec3> {
  let mut rng = StdRng::seed_from_u64(seed);
  (0..count)
    .map(|_| {
      Vec3::new(
        rng.random_range(-extent..extent),
        rng.random_range(-extent..extent),
        rng.random_range(-extent..extent),
      )
    })
    .collect()
}

/// Parent of every non-root node, indexed by arena position.
pub fn parents(octree: &Octree) -> Vec<Option<NodeId>> {
  let mut parents = vec![None; octree.len()];
  for (id, node) in octree.iter() {
    for &child in &node.children {
      parents[child.index()] = Some(id);
    }
  }
  parents
}
