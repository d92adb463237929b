//! Stateless ray-surface intersection kernels.
//!
//! Every function here is a pure function of its arguments, so the kernels
//! can be mapped over ray batches on any execution backend. Primitives
//! resolve their geometry (for example a time-dependent center) and then
//! delegate to these routines.

mod sphere;

pub use sphere::{intersect_sphere, sphere_uv};

use crate::{HitRecord, MaterialId};
use spherecast_math::{Point2, Point3, Vec3};

/// Result of a ray-surface intersection, before a material is attached.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceHit {
    /// Parameter along the ray.
    pub t: f64,
    /// Hit point.
    pub point: Point3,
    /// Outward normal at the hit point.
    pub normal: Vec3,
    /// Texture coordinates (u, v).
    pub uv: Point2,
}

impl SurfaceHit {
    /// Attach a material, producing the record handed to shading.
    pub fn with_material(self, material: MaterialId) -> HitRecord {
        HitRecord {
            t: self.t,
            p: self.point,
            normal: self.normal,
            u: self.uv.x,
            v: self.uv.y,
            material,
        }
    }
}
