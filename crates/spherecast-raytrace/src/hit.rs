//! Intersection results and the primitive contract.

use crate::{Aabb3, MaterialId, Ray};
use spherecast_math::{Point3, Vec3};

/// Result of a successful ray-primitive intersection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HitRecord {
    /// Parameter along the ray where the hit occurs.
    pub t: f64,
    /// World-space hit point.
    pub p: Point3,
    /// Outward surface normal, unit length for a positive radius.
    pub normal: Vec3,
    /// Texture coordinate around the equator, in `[0, 1]`.
    pub u: f64,
    /// Texture coordinate from south to north pole, in `[0, 1]`.
    pub v: f64,
    /// Material of the primitive that was hit.
    pub material: MaterialId,
}

/// A primitive that rays can be intersected with.
///
/// Implementations are read-only during queries, so one primitive can serve
/// any number of concurrent rays.
pub trait Hittable: Send + Sync + std::fmt::Debug {
    /// Intersect `ray` with this primitive, accepting only hits with
    /// `t_min < t < t_max`.
    ///
    /// Returns the nearest qualifying hit, or `None` on a miss.
    fn hit(&self, ray: &Ray, t_min: f64, t_max: f64) -> Option<HitRecord>;

    /// Bounding box of the primitive over the time interval `[t0, t1]`.
    ///
    /// `None` means the primitive is unbounded.
    fn bounding_box(&self, t0: f64, t1: f64) -> Option<Aabb3>;
}

impl<H: Hittable + ?Sized> Hittable for &H {
    fn hit(&self, ray: &Ray, t_min: f64, t_max: f64) -> Option<HitRecord> {
        (**self).hit(ray, t_min, t_max)
    }

    fn bounding_box(&self, t0: f64, t1: f64) -> Option<Aabb3> {
        (**self).bounding_box(t0, t1)
    }
}

impl<H: Hittable + ?Sized> Hittable for Box<H> {
    fn hit(&self, ray: &Ray, t_min: f64, t_max: f64) -> Option<HitRecord> {
        (**self).hit(ray, t_min, t_max)
    }

    fn bounding_box(&self, t0: f64, t1: f64) -> Option<Aabb3> {
        (**self).bounding_box(t0, t1)
    }
}
