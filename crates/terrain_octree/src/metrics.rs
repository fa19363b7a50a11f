//! Engine-agnostic metrics for octree builds and queries.
//!
//! Feature-gated and runtime-toggled to ensure zero overhead when disabled.
//!
//! # Usage
//!
//! ```ignore
//! use terrain_octree::metrics::{timed, OctreeMetrics, COLLECT_METRICS};
//!
//! // Compile with --features metrics
//! // Runtime toggle:
//! COLLECT_METRICS.store(false, Ordering::Relaxed);
//!
//! let (octree, build_us) = timed(|| Octree::from_mesh(&vertices, 12));
//! metrics.record_build(&octree, build_us);
//!
//! let (hit, query_us) = timed(|| octree.collide_point(position));
//! metrics.record_point_query(&hit, query_us);
//! ```

use std::collections::VecDeque;
#[cfg(feature = "metrics")]
use std::sync::atomic::Ordering;
use std::sync::atomic::AtomicBool;

use web_time::Instant;

use crate::octree::{Octree, QueryHit};

/// Levels tracked individually; deeper nodes are counted in the last slot.
pub const TRACKED_LEVELS: usize = 16;

/// Runtime toggle for metrics collection.
/// Set to false to disable metrics gathering at runtime.
pub static COLLECT_METRICS: AtomicBool = AtomicBool::new(true);

/// Check if metrics collection is enabled (both compile-time and runtime).
#[inline]
pub fn is_enabled() -> bool {
    #[cfg(feature = "metrics")]
    {
        COLLECT_METRICS.load(Ordering::Relaxed)
    }
    #[cfg(not(feature = "metrics"))]
    {
        false
    }
}

/// Run `work` and return its result with the elapsed time in microseconds.
pub fn timed<T>(work: impl FnOnce() -> T) -> (T, u64) {
    let start = Instant::now();
    let result = work();
    (result, start.elapsed().as_micros() as u64)
}

/// Rolling window for storing recent values (e.g., timing history).
#[derive(Debug, Clone)]
pub struct RollingWindow<T> {
    buffer: VecDeque<T>,
    capacity: usize,
}

impl<T> RollingWindow<T> {
    /// Create a new rolling window with the given capacity.
    pub fn new(capacity: usize) -> Self {
        Self {
            buffer: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Push a new value, evicting the oldest if at capacity.
    pub fn push(&mut self, value: T) {
        if self.buffer.len() >= self.capacity {
            self.buffer.pop_front();
        }
        self.buffer.push_back(value);
    }

    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    /// Iterate over values (oldest to newest).
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.buffer.iter()
    }

    /// Get the most recent value.
    pub fn last(&self) -> Option<&T> {
        self.buffer.back()
    }
}

impl RollingWindow<u64> {
    pub fn sum(&self) -> u64 {
        self.buffer.iter().sum()
    }

    /// Compute the average of all values.
    pub fn average(&self) -> f64 {
        if self.buffer.is_empty() {
            0.0
        } else {
            self.sum() as f64 / self.buffer.len() as f64
        }
    }

    /// Get min and max values.
    pub fn min_max(&self) -> Option<(u64, u64)> {
        let min = *self.buffer.iter().min()?;
        let max = *self.buffer.iter().max()?;
        Some((min, max))
    }
}

impl Default for RollingWindow<u64> {
    fn default() -> Self {
        Self::new(128) // ~2 seconds of per-frame queries at 60fps
    }
}

/// Tree shape and query cost statistics.
#[derive(Debug, Clone, Default)]
pub struct OctreeMetrics {
    // Shape of the last recorded build
    /// Node count per level (index = level).
    pub nodes_per_level: [u32; TRACKED_LEVELS],
    /// Leaf count per level.
    pub leaves_per_level: [u32; TRACKED_LEVELS],
    /// Vertices indexed by the tree.
    pub indexed_vertices: u64,
    /// Approximate arena memory (nodes plus vertex index lists).
    pub octree_memory_bytes: u64,

    // Timing
    /// Build times in microseconds.
    pub build_timings: RollingWindow<u64>,
    /// Ray query times in microseconds.
    pub ray_query_timings: RollingWindow<u64>,
    /// Point query times in microseconds.
    pub point_query_timings: RollingWindow<u64>,

    // Traversal cost
    /// Nodes visited per ray query.
    pub ray_query_visits: RollingWindow<u64>,
    /// Nodes visited per point query.
    pub point_query_visits: RollingWindow<u64>,

    /// Total queries recorded this session.
    pub total_queries: u64,
}

impl OctreeMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset everything except the cumulative query count.
    pub fn reset(&mut self) {
        self.nodes_per_level.fill(0);
        self.leaves_per_level.fill(0);
        self.indexed_vertices = 0;
        self.octree_memory_bytes = 0;
        self.build_timings.clear();
        self.ray_query_timings.clear();
        self.point_query_timings.clear();
        self.ray_query_visits.clear();
        self.point_query_visits.clear();
    }

    /// Snapshot the shape of a freshly built tree.
    pub fn record_build(&mut self, octree: &Octree, timing_us: u64) {
        if !is_enabled() {
            return;
        }

        self.nodes_per_level.fill(0);
        self.leaves_per_level.fill(0);
        let mut index_bytes = 0u64;
        for node in octree.nodes() {
            let level = (node.level as usize).min(TRACKED_LEVELS - 1);
            self.nodes_per_level[level] += 1;
            if node.is_leaf() {
                self.leaves_per_level[level] += 1;
            }
            index_bytes += (node.vertex_indices.len() * std::mem::size_of::<u32>()) as u64;
        }

        self.indexed_vertices = octree.vertex_count() as u64;
        self.octree_memory_bytes =
            (octree.len() * std::mem::size_of::<crate::octree::OctreeBox>()) as u64 + index_bytes;
        self.build_timings.push(timing_us);
    }

    pub fn record_ray_query(&mut self, hit: &QueryHit, timing_us: u64) {
        if !is_enabled() {
            return;
        }
        self.ray_query_timings.push(timing_us);
        self.ray_query_visits.push(hit.stats.visited as u64);
        self.total_queries += 1;
    }

    pub fn record_point_query(&mut self, hit: &QueryHit, timing_us: u64) {
        if !is_enabled() {
            return;
        }
        self.point_query_timings.push(timing_us);
        self.point_query_visits.push(hit.stats.visited as u64);
        self.total_queries += 1;
    }

    /// Get the total node count across all levels.
    pub fn total_nodes(&self) -> u32 {
        self.nodes_per_level.iter().sum()
    }

    pub fn total_leaves(&self) -> u32 {
        self.leaves_per_level.iter().sum()
    }

    pub fn last_build_us(&self) -> Option<u64> {
        self.build_timings.last().copied()
    }

    pub fn avg_ray_query_us(&self) -> f64 {
        self.ray_query_timings.average()
    }

    pub fn avg_point_query_us(&self) -> f64 {
        self.point_query_timings.average()
    }

    /// Format octree memory in megabytes.
    pub fn octree_memory_mb(&self) -> f64 {
        self.octree_memory_bytes as f64 / 1_048_576.0
    }
}
