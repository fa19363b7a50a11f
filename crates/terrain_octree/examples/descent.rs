//! Scripted vertical descent over synthetic terrain.
//!
//! Run with `RUST_LOG=descent=info,terrain_octree=debug cargo run --example descent --features tracing,metrics`.

use glam::Vec3;
use terrain_octree::debug_draw::{debug_boxes, DrawFilter};
use terrain_octree::metrics::{timed, OctreeMetrics};
use terrain_octree::{Aabb, GroundSensor, Octree, OctreeConfig, SensorConfig, Touchdown};
use tracing_subscriber::EnvFilter;

const GRID: usize = 96;
const SPACING: f32 = 0.5;
const DESCENT_RATE: f32 = 0.75;

fn terrain() -> Vec<Vec3> {
  let mut vertices = Vec::with_capacity(GRID * GRID);
  for z in 0..GRID {
    for x in 0..GRID {
      let (fx, fz) = (x as f32 * SPACING, z as f32 * SPACING);
      let y = 2.5 * (fx * 0.3).sin() * (fz * 0.25).cos() + 0.1 * fz;
      vertices.push(Vec3::new(fx, y, fz));
    }
  }
  vertices
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::from_default_env())
    .init();

  let vertices = terrain();
  let bounds = Aabb::from_points(&vertices).ok_or("terrain has no vertices")?;
  let config = OctreeConfig::with_max_depth(12);

  let mut metrics = OctreeMetrics::new();
  let (octree, build_us) = timed(|| Octree::try_build(bounds, &vertices, &config));
  let octree = octree?;
  metrics.record_build(&octree, build_us);
  tracing::info!(
    nodes = octree.len(),
    highest_depth = octree.highest_depth(),
    build_us,
    "terrain octree ready"
  );

  let sensor = GroundSensor::new(&octree, &vertices, SensorConfig::default());
  let mut position = bounds.center() + Vec3::Y * 30.0;

  for step in 0..200 {
    let (reading, ray_us) = timed(|| sensor.clearance(position));
    metrics.record_ray_query(&reading.hit, ray_us);

    let (contact, point_us) = timed(|| octree.collide_point(position));
    metrics.record_point_query(&contact, point_us);

    let status = sensor.touchdown(position);
    tracing::info!(step, altitude = reading.altitude, ?status, point_us, "descending");

    if let Touchdown::Landed { vertex } = status {
      let highlighted = debug_boxes(&octree, DrawFilter::SelectedPath(&contact.path));
      tracing::info!(
        step,
        vertex,
        contact = %vertices[vertex as usize],
        highlighted = highlighted.len(),
        "touchdown"
      );
      break;
    }

    position.y -= DESCENT_RATE;
  }

  tracing::info!(
    avg_ray_query_us = metrics.avg_ray_query_us(),
    avg_point_query_us = metrics.avg_point_query_us(),
    total_queries = metrics.total_queries,
    octree_mb = metrics.octree_memory_mb(),
    "done"
  );
  Ok(())
}
