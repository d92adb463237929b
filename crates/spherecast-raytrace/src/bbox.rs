//! Axis-aligned bounding boxes for acceleration-structure consumers.

use spherecast_math::{Point3, Vec3};

/// Axis-aligned bounding box in 3D.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb3 {
    /// Minimum corner.
    pub min: Point3,
    /// Maximum corner.
    pub max: Point3,
}

impl Aabb3 {
    /// Create an AABB from min and max corners.
    pub fn new(min: Point3, max: Point3) -> Self {
        Self { min, max }
    }

    /// Create an empty (inverted) AABB suitable for expansion.
    pub fn empty() -> Self {
        Self {
            min: Point3::new(f64::INFINITY, f64::INFINITY, f64::INFINITY),
            max: Point3::new(f64::NEG_INFINITY, f64::NEG_INFINITY, f64::NEG_INFINITY),
        }
    }

    /// Box of a sphere: `center ± (r, r, r)`.
    pub fn around_sphere(center: &Point3, radius: f64) -> Self {
        let extent = Vec3::new(radius, radius, radius);
        Self {
            min: center - extent,
            max: center + extent,
        }
    }

    /// The smallest box containing both `a` and `b`.
    ///
    /// Componentwise min of the minimums and max of the maximums.
    pub fn surrounding(a: &Aabb3, b: &Aabb3) -> Self {
        Self {
            min: a.min.inf(&b.min),
            max: a.max.sup(&b.max),
        }
    }

    /// True for the inverted box returned by [`Aabb3::empty`].
    pub fn is_empty(&self) -> bool {
        self.min.x > self.max.x || self.min.y > self.max.y || self.min.z > self.max.z
    }

    /// Expand this AABB to include a point.
    pub fn include_point(&mut self, p: &Point3) {
        self.min = self.min.inf(p);
        self.max = self.max.sup(p);
    }

    /// Test whether `other` lies entirely inside this box (boundaries count).
    pub fn contains(&self, other: &Aabb3) -> bool {
        self.min.x <= other.min.x
            && self.min.y <= other.min.y
            && self.min.z <= other.min.z
            && self.max.x >= other.max.x
            && self.max.y >= other.max.y
            && self.max.z >= other.max.z
    }

    /// Center of the box.
    pub fn centroid(&self) -> Point3 {
        Point3::from((self.min.coords + self.max.coords) * 0.5)
    }
}
