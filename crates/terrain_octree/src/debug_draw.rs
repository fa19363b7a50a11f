//! Debug draw lists for octree visualisation.
//!
//! Produces the boxes a renderer should outline, colour-coded by level. The
//! crate draws nothing itself.

use crate::octree::{Aabb, NodeId, Octree, SelectionPath};

/// sRGB colour.
pub type Rgb = [u8; 3];

/// Per-level outline colours, cycled with `level % 9`.
pub const LEVEL_PALETTE: [Rgb; 9] = [
  [255, 255, 255], // white
  [255, 0, 0],     // red
  [0, 0, 255],     // blue
  [0, 255, 0],     // green
  [255, 165, 0],   // orange
  [238, 130, 238], // violet
  [64, 224, 208],  // turquoise
  [255, 0, 255],   // fuchsia
  [250, 128, 114], // salmon
];

/// Outline colour for a node at `level`.
#[inline]
pub fn level_color(level: u32) -> Rgb {
  LEVEL_PALETTE[(level % LEVEL_PALETTE.len() as u32) as usize]
}

/// Which boxes to emit.
#[derive(Clone, Copy, Debug)]
pub enum DrawFilter<'a> {
  /// Every node down to and including this level. Level 0 draws nothing.
  UpToLevel(u32),
  /// Only nodes on a query's selection path.
  SelectedPath(&'a SelectionPath),
}

/// One box to outline.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DebugBox {
  pub id: NodeId,
  pub bounds: Aabb,
  pub level: u32,
  pub color: Rgb,
}

/// Collect boxes to draw, parents before children.
///
/// A node is only considered if its parent was drawn.
pub fn debug_boxes(octree: &Octree, filter: DrawFilter<'_>) -> Vec<DebugBox> {
  let mut boxes = Vec::new();
  if let DrawFilter::UpToLevel(0) = filter {
    return boxes;
  }

  let mut stack = vec![NodeId::ROOT];
  while let Some(id) = stack.pop() {
    let node = octree.node(id);
    let drawn = match filter {
      DrawFilter::UpToLevel(max_level) => node.level <= max_level,
      DrawFilter::SelectedPath(path) => path.contains(id),
    };
    if !drawn {
      continue;
    }

    boxes.push(DebugBox {
      id,
      bounds: node.bounds,
      level: node.level,
      color: level_color(node.level),
    });
    // Reverse so children pop in subdivision order
    stack.extend(node.children.iter().rev().copied());
  }
  boxes
}
