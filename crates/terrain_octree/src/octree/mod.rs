//! Vertex octree for terrain queries.
//!
//! The tree partitions a mesh's vertex set (not its triangles) into
//! axis-aligned boxes. Boxes are split until they hold a single vertex or hit
//! the depth limit; empty octants are dropped.
//!
//! # Module Structure
//!
//! - [`bounds`]: `Aabb` - containment, slab test, eight-way subdivision
//! - [`ray`]: `Ray`, `RayRange` - rays and parametric query intervals
//! - [`node`]: `OctreeBox`, `NodeId` - arena nodes
//! - [`config`]: `OctreeConfig` - depth limit and default ray interval
//! - [`builder`]: `TreeBuilder` - recursive construction
//! - [`tree`]: `Octree` - the arena and inspection helpers
//! - [`query`]: ray and point queries, `SelectionPath`
//! - [`batch`]: parallel batch queries

pub mod batch;
pub mod bounds;
pub mod builder;
pub mod config;
pub mod node;
pub mod query;
pub mod ray;
pub mod tree;

// Re-exports
pub use bounds::Aabb;
pub use builder::TreeBuilder;
pub use config::{OctreeConfig, MAX_SUPPORTED_DEPTH};
pub use node::{NodeId, OctreeBox};
pub use query::{Probe, QueryHit, QueryStats, RaySegment, SelectionPath};
pub use ray::{Ray, RayRange};
pub use tree::Octree;
