//! OctreeBox - one node of the vertex octree.
//!
//! Nodes live in the owning [`Octree`](super::Octree)'s arena and refer to
//! their children by [`NodeId`]. Vertex positions are never copied in; a node
//! only stores indices into the caller's vertex slice.

use smallvec::SmallVec;

use super::Aabb;

/// Handle of a node inside an [`Octree`](super::Octree) arena.
///
/// Only meaningful for the tree that produced it.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
pub struct NodeId(u32);

impl NodeId {
  /// The root is always the first node in the arena.
  pub const ROOT: Self = Self(0);

  pub(crate) fn from_index(index: usize) -> Self {
    debug_assert!(index <= u32::MAX as usize, "octree arena overflow");
    Self(index as u32)
  }

  /// Position in the arena.
  #[inline]
  pub fn index(self) -> usize {
    self.0 as usize
  }
}

/// A box in the octree.
#[derive(Clone, Debug, PartialEq)]
pub struct OctreeBox {
  /// Cell volume.
  pub bounds: Aabb,
  /// Depth from the root (root = 0).
  pub level: u32,
  /// Indices of the vertices inside `bounds`, in input order.
  pub vertex_indices: Vec<u32>,
  /// Occupied octants, in subdivision order. Empty for a leaf.
  pub children: SmallVec<[NodeId; 8]>,
}

impl OctreeBox {
  /// Create a leaf holding the given vertices.
  pub fn new(bounds: Aabb, level: u32, vertex_indices: Vec<u32>) -> Self {
    Self {
      bounds,
      level,
      vertex_indices,
      children: SmallVec::new(),
    }
  }

  /// A leaf has no children.
  #[inline]
  pub fn is_leaf(&self) -> bool {
    self.children.is_empty()
  }

  /// Number of vertices inside this box.
  #[inline]
  pub fn vertex_count(&self) -> usize {
    self.vertex_indices.len()
  }

  #[inline]
  pub fn is_empty(&self) -> bool {
    self.vertex_indices.is_empty()
  }
}

#[cfg(test)]
#[path = "node_test.rs"]
mod node_test;
