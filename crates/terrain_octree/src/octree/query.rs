//! Ray and point queries.
//!
//! Both queries are the same pruned descent, parameterised by a [`Probe`]:
//! a subtree whose bounds the probe doesn't touch is never visited. A leaf
//! that is touched contributes all of its vertex indices, and an internal
//! node concatenates its children's results in child order.
//!
//! The nodes whose subtree produced at least one index form the query's
//! [`SelectionPath`], returned with the result rather than stored on the tree.

use std::collections::BTreeSet;

use glam::Vec3;

use super::{Aabb, NodeId, Octree, Ray, RayRange};

/// Anything that can decide whether an octree cell is worth descending into.
pub trait Probe {
  fn overlaps(&self, bounds: &Aabb) -> bool;
}

/// A point probes by containment.
impl Probe for Vec3 {
  #[inline]
  fn overlaps(&self, bounds: &Aabb) -> bool {
    bounds.contains_point(*self)
  }
}

/// A ray restricted to a parametric interval.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RaySegment {
  pub ray: Ray,
  pub range: RayRange,
}

impl RaySegment {
  pub fn new(ray: Ray, range: RayRange) -> Self {
    Self { ray, range }
  }
}

impl Probe for RaySegment {
  #[inline]
  fn overlaps(&self, bounds: &Aabb) -> bool {
    bounds.intersects_ray(&self.ray, self.range.near, self.range.far)
  }
}

/// Nodes lying on the path to a query's hits.
///
/// Holds every node whose subtree contributed a vertex, the hit leaves
/// included, so the root is present whenever the query found anything.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SelectionPath {
  nodes: BTreeSet<NodeId>,
}

impl SelectionPath {
  #[inline]
  pub fn contains(&self, id: NodeId) -> bool {
    self.nodes.contains(&id)
  }

  pub fn len(&self) -> usize {
    self.nodes.len()
  }

  pub fn is_empty(&self) -> bool {
    self.nodes.is_empty()
  }

  /// Path nodes in arena order (parents before their descendants).
  pub fn iter(&self) -> impl Iterator<Item = NodeId> + '_ {
    self.nodes.iter().copied()
  }

  fn insert(&mut self, id: NodeId) {
    self.nodes.insert(id);
  }
}

/// Traversal counters for one query.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct QueryStats {
  /// Nodes whose bounds were tested.
  pub visited: u32,
  /// Tested nodes whose subtree was skipped.
  pub pruned: u32,
}

/// Result of a ray or point query.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct QueryHit {
  /// Candidate vertex indices, in child traversal order. A vertex on a split
  /// plane repeats once per touched leaf that holds it.
  pub vertices: Vec<u32>,
  /// Nodes whose subtree contributed to `vertices`.
  pub path: SelectionPath,
  pub stats: QueryStats,
}

impl QueryHit {
  /// No vertex found: the probe missed the terrain or hit only empty space.
  pub fn is_empty(&self) -> bool {
    self.vertices.is_empty()
  }

  pub fn len(&self) -> usize {
    self.vertices.len()
  }

  /// First candidate in traversal order.
  pub fn first(&self) -> Option<u32> {
    self.vertices.first().copied()
  }
}

impl Octree {
  /// Run a pruned descent with an arbitrary probe.
  pub fn query<P: Probe + ?Sized>(&self, probe: &P) -> QueryHit {
    let mut hit = QueryHit::default();
    self.descend(NodeId::ROOT, probe, &mut hit);
    hit
  }

  /// Vertices in every occupied leaf the ray touches within `range`.
  #[cfg_attr(
    feature = "tracing",
    tracing::instrument(level = "trace", skip_all, name = "octree::intersect_ray")
  )]
  pub fn intersect_ray(&self, ray: &Ray, range: RayRange) -> QueryHit {
    self.query(&RaySegment::new(*ray, range))
  }

  /// Vertices in every occupied leaf containing `point`.
  ///
  /// An empty result means no collision.
  #[cfg_attr(
    feature = "tracing",
    tracing::instrument(level = "trace", skip_all, name = "octree::collide_point")
  )]
  pub fn collide_point(&self, point: Vec3) -> QueryHit {
    self.query(&point)
  }

  /// Returns true if the subtree at `id` added anything to `hit`.
  fn descend<P: Probe + ?Sized>(&self, id: NodeId, probe: &P, hit: &mut QueryHit) -> bool {
    let node = self.node(id);
    hit.stats.visited += 1;

    if !probe.overlaps(&node.bounds) {
      hit.stats.pruned += 1;
      return false;
    }

    let before = hit.vertices.len();
    if node.is_leaf() {
      hit.vertices.extend_from_slice(&node.vertex_indices);
    } else {
      for &child in &node.children {
        self.descend(child, probe, hit);
      }
    }

    let found = hit.vertices.len() > before;
    if found {
      hit.path.insert(id);
    }
    found
  }
}

#[cfg(test)]
#[path = "query_test.rs"]
mod query_test;
