//! Ray representation and the ray-box slab test.

use crate::Aabb3;
use spherecast_math::{Point3, Vec3};

/// A ray `origin + t * direction` carrying the time it samples.
///
/// The direction is stored as given. Intersection routines do not assume
/// unit length, so `t` is measured in multiples of `direction`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    /// Origin point of the ray.
    pub origin: Point3,
    /// Direction of the ray (not normalized).
    pub direction: Vec3,
    /// Time sample used to position moving primitives.
    pub time: f64,
    /// Precomputed reciprocal of direction components for fast AABB tests.
    inv_direction: Vec3,
    /// Sign of direction components (0 if positive, 1 if negative).
    sign: [usize; 3],
}

impl Ray {
    /// Create a ray at time zero.
    pub fn new(origin: Point3, direction: Vec3) -> Self {
        Self::with_time(origin, direction, 0.0)
    }

    /// Create a ray sampling the scene at `time`.
    pub fn with_time(origin: Point3, direction: Vec3, time: f64) -> Self {
        let inv = Vec3::new(1.0 / direction.x, 1.0 / direction.y, 1.0 / direction.z);
        let sign = [
            if inv.x < 0.0 { 1 } else { 0 },
            if inv.y < 0.0 { 1 } else { 0 },
            if inv.z < 0.0 { 1 } else { 0 },
        ];
        Self {
            origin,
            direction,
            time,
            inv_direction: inv,
            sign,
        }
    }

    /// Evaluate the ray at parameter `t`: `origin + t * direction`.
    #[inline]
    pub fn at(&self, t: f64) -> Point3 {
        self.origin + t * self.direction
    }

    /// Test ray-AABB intersection using the slab method, restricted to
    /// `[t_min, t_max]`.
    ///
    /// Returns `Some((enter, exit))` clipped to the range when the ray
    /// overlaps the box, `None` otherwise. Axis-parallel rays are handled
    /// through the infinite reciprocals.
    #[inline]
    pub fn intersect_aabb(&self, aabb: &Aabb3, t_min: f64, t_max: f64) -> Option<(f64, f64)> {
        let bounds = [aabb.min, aabb.max];
        let mut enter = t_min;
        let mut exit = t_max;

        for axis in 0..3 {
            let near =
                (bounds[self.sign[axis]][axis] - self.origin[axis]) * self.inv_direction[axis];
            let far =
                (bounds[1 - self.sign[axis]][axis] - self.origin[axis]) * self.inv_direction[axis];

            // NaN from 0 * inf (origin on a slab plane) leaves the range untouched.
            if near > enter {
                enter = near;
            }
            if far < exit {
                exit = far;
            }
            if exit < enter {
                return None;
            }
        }

        Some((enter, exit))
    }
}
