//! Static sphere primitive.

use crate::intersect::intersect_sphere;
use crate::{Aabb3, GeometryError, HitRecord, Hittable, MaterialId, Ray, Result};
use spherecast_math::Point3;

/// A sphere fixed in space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sphere {
    /// Center of the sphere.
    pub center: Point3,
    /// Radius of the sphere.
    pub radius: f64,
    /// Material applied to every hit.
    pub material: MaterialId,
}

impl Sphere {
    /// Create a sphere.
    ///
    /// The radius is not checked here: a zero radius yields NaN normals if
    /// the sphere is ever hit. Call [`Sphere::validate`] to reject such input.
    pub fn new(center: Point3, radius: f64, material: MaterialId) -> Self {
        Self {
            center,
            radius,
            material,
        }
    }

    /// Check that the center is finite and the radius finite and positive.
    pub fn validate(&self) -> Result<()> {
        if !self.center.iter().all(|c| c.is_finite()) {
            return Err(GeometryError::NonFinite("sphere center"));
        }
        if !(self.radius.is_finite() && self.radius > 0.0) {
            return Err(GeometryError::InvalidRadius(self.radius));
        }
        Ok(())
    }
}

impl Hittable for Sphere {
    fn hit(&self, ray: &Ray, t_min: f64, t_max: f64) -> Option<HitRecord> {
        intersect_sphere(ray, &self.center, self.radius, t_min, t_max)
            .map(|hit| hit.with_material(self.material))
    }

    /// The box does not depend on time; `t0` and `t1` are ignored.
    fn bounding_box(&self, _t0: f64, _t1: f64) -> Option<Aabb3> {
        Some(Aabb3::around_sphere(&self.center, self.radius))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use spherecast_math::Vec3;

    fn sphere(center: Point3, radius: f64) -> Sphere {
        Sphere::new(center, radius, MaterialId::default())
    }

    #[test]
    fn test_reference_scenario() {
        let s = sphere(Point3::new(0.0, 0.0, -1.0), 0.5);
        let ray = Ray::with_time(Point3::origin(), Vec3::new(0.0, 0.0, -1.0), 0.0);
        let rec = s.hit(&ray, 0.0, 1000.0).unwrap();
        assert_eq!(rec.t, 0.5);
        assert_eq!(rec.p, Point3::new(0.0, 0.0, -0.5));
        assert_eq!(rec.normal, Vec3::new(0.0, 0.0, 1.0));
        assert_eq!(rec.material, s.material);
    }

    #[test]
    fn test_hit_fills_uv_from_normal() {
        let s = sphere(Point3::new(5.0, 0.0, 0.0), 1.0);
        // Hits the -x side of the sphere, where the normal is (-1, 0, 0).
        let ray = Ray::new(Point3::origin(), Vec3::new(1.0, 0.0, 0.0));
        let rec = s.hit(&ray, 0.0, f64::INFINITY).unwrap();
        assert!((rec.t - 4.0).abs() < 1e-12);
        assert!(rec.u.abs() < 1e-12);
        assert!((rec.v - 0.5).abs() < 1e-12);

        // From the other side the normal is (1, 0, 0), u = 0.5.
        let ray = Ray::new(Point3::new(10.0, 0.0, 0.0), Vec3::new(-1.0, 0.0, 0.0));
        let rec = s.hit(&ray, 0.0, f64::INFINITY).unwrap();
        assert_eq!(rec.u, 0.5);
    }

    #[test]
    fn test_miss_outside_range() {
        let s = sphere(Point3::new(0.0, 0.0, -1.0), 0.5);
        let ray = Ray::new(Point3::origin(), Vec3::new(0.0, 0.0, -1.0));
        assert!(s.hit(&ray, 0.0, 0.25).is_none());
        assert!(s.hit(&ray, 2.0, 10.0).is_none());
    }

    #[test]
    fn test_inside_ray_exits() {
        let s = sphere(Point3::new(0.0, 0.0, 0.0), 2.0);
        let ray = Ray::new(Point3::origin(), Vec3::new(0.0, 1.0, 0.0));
        let rec = s.hit(&ray, 0.0, f64::INFINITY).unwrap();
        assert!((rec.t - 2.0).abs() < 1e-12);
        assert!((rec.normal - Vec3::new(0.0, 1.0, 0.0)).norm() < 1e-12);
        assert!((rec.v - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_bounding_box_is_exact_and_time_independent() {
        let s = sphere(Point3::new(1.5, -2.0, 0.25), 0.75);
        let b = s.bounding_box(0.0, 1.0).unwrap();
        assert_eq!(b.min, Point3::new(0.75, -2.75, -0.5));
        assert_eq!(b.max, Point3::new(2.25, -1.25, 1.0));
        assert_eq!(s.bounding_box(-100.0, 3.0), Some(b));
    }

    #[test]
    fn test_validate() {
        assert!(sphere(Point3::origin(), 1.0).validate().is_ok());
        assert_eq!(
            sphere(Point3::origin(), 0.0).validate(),
            Err(GeometryError::InvalidRadius(0.0))
        );
        assert!(sphere(Point3::origin(), -1.0).validate().is_err());
        assert!(sphere(Point3::origin(), f64::INFINITY).validate().is_err());
        assert_eq!(
            sphere(Point3::new(f64::NAN, 0.0, 0.0), 1.0).validate(),
            Err(GeometryError::NonFinite("sphere center"))
        );
    }

    #[test]
    fn test_zero_radius_is_accepted_by_new() {
        let s = sphere(Point3::origin(), 0.0);
        let ray = Ray::new(Point3::new(0.0, 0.0, 5.0), Vec3::new(0.0, 0.0, -1.0));
        // Tangent in the limit: discriminant is zero, so the ray misses.
        assert!(s.hit(&ray, 0.0, f64::INFINITY).is_none());
    }
}
