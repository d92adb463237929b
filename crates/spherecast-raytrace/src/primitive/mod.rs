//! Primitive shapes and their tagged-variant dispatch.
//!
//! Each shape implements [`Hittable`] on its own. [`Primitive`] wraps them
//! in a closed enum for callers that want flat, homogeneous storage (a
//! `Vec<Primitive>` rather than a `Vec<Box<dyn Hittable>>`).

mod moving_sphere;
mod sphere;

pub use moving_sphere::MovingSphere;
pub use sphere::Sphere;

use crate::{Aabb3, HitRecord, Hittable, MaterialId, Ray, Result};

/// Discriminant of a [`Primitive`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveKind {
    /// A [`Sphere`].
    Sphere,
    /// A [`MovingSphere`].
    MovingSphere,
}

/// Any primitive supported by the kernel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Primitive {
    /// Static sphere.
    Sphere(Sphere),
    /// Linearly moving sphere.
    MovingSphere(MovingSphere),
}

impl Primitive {
    /// The kind of this primitive.
    pub fn kind(&self) -> PrimitiveKind {
        match self {
            Primitive::Sphere(_) => PrimitiveKind::Sphere,
            Primitive::MovingSphere(_) => PrimitiveKind::MovingSphere,
        }
    }

    /// Material handle carried by the primitive.
    pub fn material(&self) -> MaterialId {
        match self {
            Primitive::Sphere(s) => s.material,
            Primitive::MovingSphere(s) => s.material(),
        }
    }

    /// Validate the wrapped primitive.
    pub fn validate(&self) -> Result<()> {
        match self {
            Primitive::Sphere(s) => s.validate(),
            Primitive::MovingSphere(s) => s.validate(),
        }
    }
}

impl Hittable for Primitive {
    fn hit(&self, ray: &Ray, t_min: f64, t_max: f64) -> Option<HitRecord> {
        match self {
            Primitive::Sphere(s) => s.hit(ray, t_min, t_max),
            Primitive::MovingSphere(s) => s.hit(ray, t_min, t_max),
        }
    }

    fn bounding_box(&self, t0: f64, t1: f64) -> Option<Aabb3> {
        match self {
            Primitive::Sphere(s) => s.bounding_box(t0, t1),
            Primitive::MovingSphere(s) => s.bounding_box(t0, t1),
        }
    }
}

impl From<Sphere> for Primitive {
    fn from(s: Sphere) -> Self {
        Primitive::Sphere(s)
    }
}

impl From<MovingSphere> for Primitive {
    fn from(s: MovingSphere) -> Self {
        Primitive::MovingSphere(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MaterialTable;
    use spherecast_math::{Point3, Vec3};

    #[test]
    fn test_dispatch_matches_concrete_types() {
        let mut materials = MaterialTable::new();
        let m = materials.insert(());

        let sphere = Sphere::new(Point3::new(0.0, 0.0, -3.0), 1.0, m);
        let moving = MovingSphere::new(
            Point3::new(0.0, 0.0, -3.0),
            Point3::new(0.0, 0.0, -6.0),
            0.0,
            1.0,
            1.0,
            m,
        )
        .unwrap();

        let ray = Ray::with_time(Point3::origin(), Vec3::new(0.0, 0.0, -1.0), 1.0);
        let p_sphere = Primitive::from(sphere);
        let p_moving = Primitive::from(moving);

        assert_eq!(p_sphere.kind(), PrimitiveKind::Sphere);
        assert_eq!(p_moving.kind(), PrimitiveKind::MovingSphere);
        assert_eq!(p_sphere.hit(&ray, 0.0, 100.0), sphere.hit(&ray, 0.0, 100.0));
        assert_eq!(p_moving.hit(&ray, 0.0, 100.0), moving.hit(&ray, 0.0, 100.0));
        assert_eq!(p_moving.hit(&ray, 0.0, 100.0).unwrap().t, 5.0);
        assert_eq!(p_sphere.bounding_box(0.0, 1.0), sphere.bounding_box(0.0, 1.0));
        assert_eq!(p_moving.bounding_box(0.0, 1.0), moving.bounding_box(0.0, 1.0));
        assert_eq!(p_moving.material(), m);
    }

    #[test]
    fn test_trait_objects() {
        let m = MaterialId::default();
        let objects: Vec<Box<dyn Hittable>> = vec![
            Box::new(Sphere::new(Point3::new(0.0, 0.0, -1.0), 0.5, m)),
            Box::new(
                MovingSphere::new(Point3::origin(), Point3::origin(), 0.0, 1.0, 0.1, m).unwrap(),
            ),
        ];
        for object in &objects {
            assert!(object.bounding_box(0.0, 1.0).is_some());
        }
    }

    #[test]
    fn test_validate_forwards() {
        let bad = Primitive::from(Sphere::new(Point3::origin(), 0.0, MaterialId::default()));
        assert!(bad.validate().is_err());
    }
}
