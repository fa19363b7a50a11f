//! Axis-aligned bounding box used as the octree's cell volume.

use glam::Vec3;

use super::Ray;
use crate::error::{OctreeError, Result};

/// Axis-aligned bounding box.
///
/// Bounds are inclusive on both corners, so a point on a shared face belongs
/// to every box touching that face.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Aabb {
	/// Minimum corner (inclusive).
	pub min: Vec3,
	/// Maximum corner (inclusive).
	pub max: Vec3,
}

impl Aabb {
	/// Create a new AABB from min and max corners.
	///
	/// # Panics
	/// Debug-asserts that min <= max on all axes.
	pub fn new(min: Vec3, max: Vec3) -> Self {
		debug_assert!(min.cmple(max).all(), "AABB min must be <= max on all axes");
		Self { min, max }
	}

	/// Create a new AABB, rejecting inverted or non-finite corners.
	pub fn try_new(min: Vec3, max: Vec3) -> Result<Self> {
		if !min.is_finite() || !max.is_finite() {
			return Err(OctreeError::NonFiniteBounds { min, max });
		}
		if !min.cmple(max).all() {
			return Err(OctreeError::InvalidBounds { min, max });
		}
		Ok(Self { min, max })
	}

	/// Tightest box around a set of points, `None` when there are none.
	///
	/// This is the usual way to obtain root bounds for a terrain mesh.
	pub fn from_points(points: &[Vec3]) -> Option<Self> {
		let (first, rest) = points.split_first()?;
		let (min, max) = rest
			.iter()
			.fold((*first, *first), |(min, max), p| (min.min(*p), max.max(*p)));
		Some(Self { min, max })
	}

	/// Check if this AABB contains a point.
	#[inline]
	pub fn contains_point(&self, point: Vec3) -> bool {
		point.x >= self.min.x
			&& point.x <= self.max.x
			&& point.y >= self.min.y
			&& point.y <= self.max.y
			&& point.z >= self.min.z
			&& point.z <= self.max.z
	}

	/// Slab test: does the segment `ray.at(t_min)..=ray.at(t_max)` touch the box?
	///
	/// Axes where the direction is zero accept the ray only if the origin lies
	/// within that slab.
	#[inline]
	pub fn intersects_ray(&self, ray: &Ray, t_min: f32, t_max: f32) -> bool {
		let mut enter = t_min;
		let mut exit = t_max;

		for axis in 0..3 {
			let origin = ray.origin[axis];
			let direction = ray.direction[axis];
			let (lo, hi) = (self.min[axis], self.max[axis]);

			if direction == 0.0 {
				if origin < lo || origin > hi {
					return false;
				}
				continue;
			}

			let inv = direction.recip();
			let mut near = (lo - origin) * inv;
			let mut far = (hi - origin) * inv;
			if near > far {
				std::mem::swap(&mut near, &mut far);
			}

			enter = enter.max(near);
			exit = exit.min(far);
			if enter > exit {
				return false;
			}
		}

		true
	}

	/// Split into eight equal octants by bisecting every axis at the centre.
	///
	/// Order: the min-Y layer walking the XZ footprint (min corner, +X, +X+Z,
	/// +Z), then the same four cells in the +Y layer. Octants are assembled
	/// from the parent's min/centre/max values so they tile it exactly.
	pub fn subdivide_into_eight(&self) -> [Aabb; 8] {
		let c = self.center();
		let (lo, hi) = (self.min, self.max);

		// (x range, z range) per footprint cell
		let footprint = [
			((lo.x, c.x), (lo.z, c.z)),
			((c.x, hi.x), (lo.z, c.z)),
			((c.x, hi.x), (c.z, hi.z)),
			((lo.x, c.x), (c.z, hi.z)),
		];
		let layers = [(lo.y, c.y), (c.y, hi.y)];

		std::array::from_fn(|i| {
			let ((x0, x1), (z0, z1)) = footprint[i % 4];
			let (y0, y1) = layers[i / 4];
			Aabb {
				min: Vec3::new(x0, y0, z0),
				max: Vec3::new(x1, y1, z1),
			}
		})
	}

	/// Get the size of the AABB (max - min).
	#[inline]
	pub fn size(&self) -> Vec3 {
		self.max - self.min
	}

	/// Get the center of the AABB.
	#[inline]
	pub fn center(&self) -> Vec3 {
		(self.min + self.max) * 0.5
	}
}
