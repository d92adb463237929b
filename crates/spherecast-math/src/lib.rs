#![warn(missing_docs)]

//! Math types for the spherecast intersection kernel.
//!
//! Thin wrappers around nalgebra providing the point and vector types used
//! by rays, bounding boxes and primitives, plus the parameter interval
//! shared by the intersection routines.

use nalgebra::Vector3;

/// A point in 3D space.
pub type Point3 = nalgebra::Point3<f64>;

/// A vector in 3D space.
pub type Vec3 = Vector3<f64>;

/// A point in 2D texture space.
pub type Point2 = nalgebra::Point2<f64>;

/// Interpolate between `a` and `b` with weight `s`.
///
/// Evaluated as `a * (1 - s) + b * s`, which returns `a` exactly at `s = 0`
/// and `b` exactly at `s = 1`. Values of `s` outside `[0, 1]` extrapolate.
#[inline]
pub fn lerp_point(a: &Point3, b: &Point3, s: f64) -> Point3 {
    Point3::from(a.coords * (1.0 - s) + b.coords * s)
}

/// A range of ray parameters bounded by `min` and `max`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    /// Lower bound.
    pub min: f64,
    /// Upper bound.
    pub max: f64,
}

impl Interval {
    /// Create an interval from its bounds.
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Test `min < x < max`.
    ///
    /// Both bounds are exclusive, so a root sitting exactly on `min` or
    /// `max` is rejected.
    #[inline]
    pub fn surrounds(&self, x: f64) -> bool {
        self.min < x && x < self.max
    }

    /// Whether some value lies strictly between the bounds.
    ///
    /// False when either bound is NaN.
    pub fn is_open(&self) -> bool {
        self.min < self.max
    }
}
