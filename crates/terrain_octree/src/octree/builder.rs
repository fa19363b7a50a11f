//! TreeBuilder - recursive octree construction over a vertex list.
//!
//! # Expansion rule
//!
//! A node is split into eight octants only if it is above the depth limit
//! **and** holds more than one vertex. Each octant keeps exactly the parent's
//! members it contains (inclusive bounds), so a vertex on a shared face is
//! copied into every octant touching it. Octants that receive no vertices are
//! never created.
//!
//! Children only ever scan their parent's members, never the full mesh, so
//! every level costs at most one containment test per vertex per octant.

use glam::Vec3;
use smallvec::SmallVec;

use super::{Aabb, NodeId, Octree, OctreeBox};

/// Builds an [`Octree`] from a borrowed vertex slice.
pub struct TreeBuilder<'a> {
  vertices: &'a [Vec3],
  max_depth: u32,
  nodes: Vec<OctreeBox>,
  highest_depth: u32,
}

impl<'a> TreeBuilder<'a> {
  pub fn new(vertices: &'a [Vec3], max_depth: u32) -> Self {
    Self {
      vertices,
      max_depth,
      nodes: Vec::new(),
      highest_depth: 0,
    }
  }

  /// Build the tree rooted at `bounds`.
  #[cfg_attr(feature = "tracing", tracing::instrument(skip_all, name = "octree::build"))]
  pub fn build(mut self, bounds: Aabb) -> Octree {
    let members: Vec<u32> = {
      #[cfg(feature = "tracing")]
      let _span = tracing::info_span!("root_membership").entered();
      (0..self.vertices.len() as u32)
        .filter(|&i| bounds.contains_point(self.vertices[i as usize]))
        .collect()
    };

    #[cfg(feature = "tracing")]
    {
      let dropped = self.vertices.len() - members.len();
      if dropped > 0 {
        tracing::warn!(dropped, "vertices outside root bounds were not indexed");
      }
    }

    {
      #[cfg(feature = "tracing")]
      let _span = tracing::info_span!("subdivide").entered();
      self.grow(bounds, 0, members);
    }

    #[cfg(feature = "tracing")]
    tracing::debug!(
      nodes = self.nodes.len(),
      highest_depth = self.highest_depth,
      max_depth = self.max_depth,
      "octree built"
    );

    Octree::from_parts(self.nodes, self.highest_depth, self.max_depth)
  }

  /// Push a node for `bounds` and recurse into its occupied octants.
  fn grow(&mut self, bounds: Aabb, level: u32, members: Vec<u32>) -> NodeId {
    let id = NodeId::from_index(self.nodes.len());
    self.highest_depth = self.highest_depth.max(level);

    let expand = level < self.max_depth && members.len() > 1;
    self.nodes.push(OctreeBox::new(bounds, level, members));
    if !expand {
      return id;
    }

    let octants = bounds.subdivide_into_eight();
    let buckets = self.partition(&octants, &self.nodes[id.index()].vertex_indices);

    let mut children: SmallVec<[NodeId; 8]> = SmallVec::new();
    for (octant, bucket) in octants.into_iter().zip(buckets) {
      if bucket.is_empty() {
        continue;
      }
      children.push(self.grow(octant, level + 1, bucket));
    }

    self.nodes[id.index()].children = children;
    id
  }

  /// Distribute `members` over every octant that contains them.
  fn partition(&self, octants: &[Aabb; 8], members: &[u32]) -> [Vec<u32>; 8] {
    let mut buckets: [Vec<u32>; 8] = Default::default();
    for &index in members {
      let position = self.vertices[index as usize];
      for (bucket, octant) in buckets.iter_mut().zip(octants) {
        if octant.contains_point(position) {
          bucket.push(index);
        }
      }
    }
    buckets
  }
}

#[cfg(test)]
#[path = "builder_test.rs"]
mod builder_test;
