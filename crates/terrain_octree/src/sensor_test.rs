use super::*;
use crate::test_utils::{flat_grid, heightfield};

fn sensor_over<'a>(octree: &'a Octree, vertices: &'a [Vec3]) -> GroundSensor<'a> {
  GroundSensor::new(octree, vertices, SensorConfig::DEFAULT)
}

#[test]
fn test_default_config() {
  let config = SensorConfig::default();
  assert_eq!(config.ray_range, RayRange::DEFAULT);
  assert_eq!(config.fallback_ground_height, 0.0);
  assert_eq!(config.ground_floor, 20.0);
  assert_eq!(config.landing_ceiling, 20.0);
}

// =========================================================================
// Clearance
// =========================================================================

#[test]
fn test_clearance_over_flat_ground() {
  let vertices = flat_grid(8, 8, 1.0, 2.0);
  let octree = Octree::from_mesh(&vertices, 10);
  let sensor = sensor_over(&octree, &vertices);

  let reading = sensor.clearance(Vec3::new(3.0, 12.0, 3.0));

  assert_eq!(reading.altitude, 10.0);
  assert_eq!(reading.ground_vertex, Some(8 * 3 + 3));
  assert!(!reading.hit.is_empty());
}

/// Above the ground floor the pick climbs to the highest candidate.
#[test]
fn test_clearance_climbs_above_floor() {
  let vertices = vec![
    Vec3::new(0.5, 21.0, 0.5),
    Vec3::new(0.5, 25.0, 0.5),
    Vec3::new(0.5, 23.0, 0.5),
    Vec3::new(9.0, 0.0, 9.0),
  ];
  let octree = Octree::from_mesh(&vertices, 8);
  let sensor = sensor_over(&octree, &vertices);

  let reading = sensor.clearance(Vec3::new(0.5, 30.0, 0.5));

  assert_eq!(reading.ground_vertex, Some(1));
  assert_eq!(reading.altitude, 5.0);
}

/// A first candidate at or below the floor stays the ground, even with
/// higher candidates behind it.
#[test]
fn test_clearance_keeps_first_below_floor() {
  let vertices = vec![
    Vec3::new(0.5, 1.0, 0.5),
    Vec3::new(0.5, 5.0, 0.5),
    Vec3::new(9.0, 0.0, 9.0),
  ];
  let octree = Octree::from_mesh(&vertices, 8);
  let sensor = sensor_over(&octree, &vertices);

  let reading = sensor.clearance(Vec3::new(0.5, 10.0, 0.5));

  assert_eq!(reading.hit.first(), Some(0));
  assert!(reading.hit.vertices.contains(&1));
  assert_eq!(reading.ground_vertex, Some(0));
  assert_eq!(reading.altitude, 9.0);
}

/// Lowering the floor below the terrain turns the pick into a plain maximum.
#[test]
fn test_clearance_floor_is_configurable() {
  let vertices = vec![
    Vec3::new(0.5, 1.0, 0.5),
    Vec3::new(0.5, 5.0, 0.5),
    Vec3::new(9.0, 0.0, 9.0),
  ];
  let octree = Octree::from_mesh(&vertices, 8);
  let config = SensorConfig {
    ground_floor: -10.0,
    ..SensorConfig::DEFAULT
  };
  let sensor = GroundSensor::new(&octree, &vertices, config);

  let reading = sensor.clearance(Vec3::new(0.5, 10.0, 0.5));

  assert_eq!(reading.ground_vertex, Some(1));
  assert_eq!(reading.altitude, 5.0);
}

#[test]
fn test_clearance_falls_back_when_nothing_below() {
  let vertices = flat_grid(4, 4, 1.0, 2.0);
  let octree = Octree::from_mesh(&vertices, 6);
  let sensor = sensor_over(&octree, &vertices);

  // Off the edge of the terrain
  let reading = sensor.clearance(Vec3::new(50.0, 12.0, 50.0));

  assert_eq!(reading.ground_vertex, None);
  assert_eq!(reading.altitude, 12.0);
  assert!(reading.hit.is_empty());
}

#[test]
fn test_clearance_custom_fallback_and_range() {
  let vertices = flat_grid(4, 4, 1.0, 0.0);
  let octree = Octree::from_mesh(&vertices, 6);
  let config = SensorConfig {
    ray_range: RayRange::new(0.0, 5.0).unwrap(),
    fallback_ground_height: -3.0,
    ..SensorConfig::DEFAULT
  };
  let sensor = GroundSensor::new(&octree, &vertices, config);

  // Ground is 10 below, past the 5-unit ray
  let reading = sensor.clearance(Vec3::new(1.0, 10.0, 1.0));

  assert_eq!(reading.ground_vertex, None);
  assert_eq!(reading.altitude, 13.0);
}

#[test]
fn test_ground_pick_keeps_first_on_ties() {
  let vertices = flat_grid(4, 4, 1.0, 21.0);
  let octree = Octree::from_mesh(&vertices, 6);
  let sensor = sensor_over(&octree, &vertices);

  assert_eq!(sensor.ground_pick(&[5, 3, 9]), Some(5));
  assert_eq!(sensor.ground_pick(&[]), None);
}

#[test]
fn test_clearance_over_rolling_terrain() {
  let vertices = heightfield(20, 20, 1.0);
  let octree = Octree::from_mesh(&vertices, 12);
  let sensor = sensor_over(&octree, &vertices);

  let below = vertices[20 * 10 + 10];
  let reading = sensor.clearance(below + Vec3::Y * 25.0);

  // Terrain stays under the floor, so the first candidate is the ground
  let ground = reading.ground_vertex.expect("Ray over terrain should hit");
  assert!(reading.hit.vertices.contains(&(20 * 10 + 10)));
  assert_eq!(Some(ground), reading.hit.first());
  assert_eq!(reading.altitude, below.y + 25.0 - vertices[ground as usize].y);
}

// =========================================================================
// Touchdown
// =========================================================================

#[test]
fn test_touchdown_clear_above_terrain() {
  let vertices = flat_grid(8, 8, 1.0, 0.0);
  let octree = Octree::from_mesh(&vertices, 10);
  let sensor = sensor_over(&octree, &vertices);

  let status = sensor.touchdown(Vec3::new(3.0, 5.0, 3.0));

  assert_eq!(status, Touchdown::Clear);
  assert!(!status.is_contact());
  assert!(!status.is_landed());
}

#[test]
fn test_touchdown_lands_on_low_ground() {
  let vertices = flat_grid(8, 8, 1.0, 0.0);
  let octree = Octree::from_mesh(&vertices, 10);
  let sensor = sensor_over(&octree, &vertices);

  let status = sensor.touchdown(Vec3::new(3.0, 0.0, 3.0));

  assert_eq!(status, Touchdown::Landed { vertex: 8 * 3 + 3 });
  assert!(status.is_contact());
  assert!(status.is_landed());
}

/// Contact above the landing ceiling is reported but isn't a landing.
#[test]
fn test_touchdown_contact_above_ceiling() {
  let vertices = flat_grid(8, 8, 1.0, 30.0);
  let octree = Octree::from_mesh(&vertices, 10);
  let sensor = sensor_over(&octree, &vertices);

  let status = sensor.touchdown(Vec3::new(2.0, 30.0, 5.0));

  assert_eq!(status, Touchdown::Contact { vertex: 8 * 5 + 2 });
  assert!(status.is_contact());
  assert!(!status.is_landed());
}
