//! Octree - arena-backed vertex octree.

use std::ops::Index;

use glam::Vec3;

use super::{Aabb, NodeId, OctreeBox, OctreeConfig, TreeBuilder};
use crate::error::Result;

/// Vertex octree over a terrain mesh.
///
/// Nodes are stored in a flat arena in depth-first pre-order; the root is
/// [`NodeId::ROOT`]. The tree is immutable once built. Queries borrow it
/// shared, so it can be queried from several threads at once.
#[derive(Clone, Debug)]
pub struct Octree {
  nodes: Vec<OctreeBox>,
  highest_depth: u32,
  max_depth: u32,
}

impl Octree {
  /// Build a tree over `vertices` inside `bounds`, subdividing at most
  /// `max_depth` levels.
  ///
  /// `bounds` should enclose every vertex; vertices outside it are left out.
  pub fn build(bounds: Aabb, vertices: &[Vec3], max_depth: u32) -> Self {
    TreeBuilder::new(vertices, max_depth).build(bounds)
  }

  /// Build with the depth limit from `config`.
  pub fn build_with_config(bounds: Aabb, vertices: &[Vec3], config: &OctreeConfig) -> Self {
    Self::build(bounds, vertices, config.max_depth)
  }

  /// Validate `bounds` and `config`, then build.
  pub fn try_build(bounds: Aabb, vertices: &[Vec3], config: &OctreeConfig) -> Result<Self> {
    config.validate()?;
    let bounds = Aabb::try_new(bounds.min, bounds.max)?;
    Ok(Self::build(bounds, vertices, config.max_depth))
  }

  /// Build over the tight bounds of `vertices`.
  ///
  /// An empty mesh gives a single empty root with zero-size bounds at the
  /// origin.
  pub fn from_mesh(vertices: &[Vec3], max_depth: u32) -> Self {
    let bounds = Aabb::from_points(vertices).unwrap_or(Aabb::new(Vec3::ZERO, Vec3::ZERO));
    Self::build(bounds, vertices, max_depth)
  }

  pub(crate) fn from_parts(nodes: Vec<OctreeBox>, highest_depth: u32, max_depth: u32) -> Self {
    debug_assert!(!nodes.is_empty(), "octree must have a root");
    Self {
      nodes,
      highest_depth,
      max_depth,
    }
  }

  /// The root box.
  #[inline]
  pub fn root(&self) -> &OctreeBox {
    &self.nodes[NodeId::ROOT.index()]
  }

  /// Root bounds, as passed to the builder.
  #[inline]
  pub fn bounds(&self) -> Aabb {
    self.root().bounds
  }

  /// Look up a node. Panics if `id` came from another tree and is out of range.
  #[inline]
  pub fn node(&self, id: NodeId) -> &OctreeBox {
    &self.nodes[id.index()]
  }

  /// Look up a node, `None` if out of range.
  pub fn get(&self, id: NodeId) -> Option<&OctreeBox> {
    self.nodes.get(id.index())
  }

  /// All nodes in arena (depth-first pre-order) order.
  pub fn nodes(&self) -> &[OctreeBox] {
    &self.nodes
  }

  /// Node handles paired with their boxes.
  pub fn iter(&self) -> impl Iterator<Item = (NodeId, &OctreeBox)> + '_ {
    self
      .nodes
      .iter()
      .enumerate()
      .map(|(i, node)| (NodeId::from_index(i), node))
  }

  /// Leaves only.
  pub fn leaves(&self) -> impl Iterator<Item = (NodeId, &OctreeBox)> + '_ {
    self.iter().filter(|(_, node)| node.is_leaf())
  }

  /// Total number of nodes (always at least 1).
  pub fn len(&self) -> usize {
    self.nodes.len()
  }

  /// True when the root holds no vertices.
  pub fn is_empty(&self) -> bool {
    self.root().is_empty()
  }

  /// Number of vertices indexed by the tree.
  pub fn vertex_count(&self) -> usize {
    self.root().vertex_count()
  }

  /// Deepest level reached during construction.
  ///
  /// Useful as the upper bound of a depth-selection control.
  #[inline]
  pub fn highest_depth(&self) -> u32 {
    self.highest_depth
  }

  /// Depth limit the tree was built with.
  #[inline]
  pub fn max_depth(&self) -> u32 {
    self.max_depth
  }

  /// Node count per level, index = level.
  pub fn depth_histogram(&self) -> Vec<u32> {
    let mut histogram = vec![0u32; self.highest_depth as usize + 1];
    for node in &self.nodes {
      histogram[node.level as usize] += 1;
    }
    histogram
  }
}

impl Index<NodeId> for Octree {
  type Output = OctreeBox;

  fn index(&self, id: NodeId) -> &OctreeBox {
    self.node(id)
  }
}

#[cfg(test)]
#[path = "tree_test.rs"]
mod tree_test;
