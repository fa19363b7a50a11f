//! Parallel batch queries on rayon's thread pool.
//!
//! Queries only borrow the tree, so a batch simply fans the probes out with
//! `par_iter`. Results come back in input order.

use glam::Vec3;
use rayon::prelude::*;

use super::{Octree, QueryHit, Ray, RayRange};

impl Octree {
  /// Point query for every entry of `points`.
  #[cfg_attr(feature = "tracing", tracing::instrument(skip_all, name = "octree::collide_points_par"))]
  pub fn collide_points_par(&self, points: &[Vec3]) -> Vec<QueryHit> {
    points.par_iter().map(|&p| self.collide_point(p)).collect()
  }

  /// Ray query for every entry of `rays`, all sharing `range`.
  #[cfg_attr(feature = "tracing", tracing::instrument(skip_all, name = "octree::intersect_rays_par"))]
  pub fn intersect_rays_par(&self, rays: &[Ray], range: RayRange) -> Vec<QueryHit> {
    rays.par_iter().map(|ray| self.intersect_ray(ray, range)).collect()
  }
}
