//! Sphere moving linearly between two centers, for motion blur.

use crate::intersect::intersect_sphere;
use crate::{Aabb3, GeometryError, HitRecord, Hittable, MaterialId, Ray, Result};
use spherecast_math::{lerp_point, Point3};

/// A sphere whose center travels from `center0` at `time0` to `center1` at
/// `time1`.
///
/// The position at a given time is a pure function of that time; nothing is
/// cached between queries.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MovingSphere {
    center0: Point3,
    center1: Point3,
    time0: f64,
    time1: f64,
    radius: f64,
    material: MaterialId,
}

impl MovingSphere {
    /// Create a moving sphere.
    ///
    /// Fails with [`GeometryError::NonFinite`] when either time is NaN or
    /// infinite and with [`GeometryError::DegenerateTimeInterval`] when
    /// `time0 == time1`; in both cases the center could not be
    /// interpolated. The radius is not checked; see [`MovingSphere::validate`].
    pub fn new(
        center0: Point3,
        center1: Point3,
        time0: f64,
        time1: f64,
        radius: f64,
        material: MaterialId,
    ) -> Result<Self> {
        if !(time0.is_finite() && time1.is_finite()) {
            return Err(GeometryError::NonFinite("moving sphere time"));
        }
        if time0 == time1 {
            return Err(GeometryError::DegenerateTimeInterval { time0, time1 });
        }
        Ok(Self {
            center0,
            center1,
            time0,
            time1,
            radius,
            material,
        })
    }

    /// Center at `time0`.
    pub fn center0(&self) -> Point3 {
        self.center0
    }

    /// Center at `time1`.
    pub fn center1(&self) -> Point3 {
        self.center1
    }

    /// Start of the motion interval.
    pub fn time0(&self) -> f64 {
        self.time0
    }

    /// End of the motion interval.
    pub fn time1(&self) -> f64 {
        self.time1
    }

    /// Radius of the sphere.
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Material applied to every hit.
    pub fn material(&self) -> MaterialId {
        self.material
    }

    /// Center of the sphere at `time`.
    ///
    /// Exact at the interval ends; times outside `[time0, time1]`
    /// extrapolate along the same line.
    pub fn center(&self, time: f64) -> Point3 {
        let s = (time - self.time0) / (self.time1 - self.time0);
        lerp_point(&self.center0, &self.center1, s)
    }

    /// Check centers and radius for finiteness and a positive radius.
    ///
    /// Times are already checked by [`MovingSphere::new`].
    pub fn validate(&self) -> Result<()> {
        let centers_finite = self
            .center0
            .iter()
            .chain(self.center1.iter())
            .all(|c| c.is_finite());
        if !centers_finite {
            return Err(GeometryError::NonFinite("moving sphere center"));
        }
        if !(self.radius.is_finite() && self.radius > 0.0) {
            return Err(GeometryError::InvalidRadius(self.radius));
        }
        Ok(())
    }
}

impl Hittable for MovingSphere {
    fn hit(&self, ray: &Ray, t_min: f64, t_max: f64) -> Option<HitRecord> {
        let center = self.center(ray.time);
        intersect_sphere(ray, &center, self.radius, t_min, t_max)
            .map(|hit| hit.with_material(self.material))
    }

    /// Box enclosing the sphere at both ends of its own motion interval.
    ///
    /// `t0` and `t1` are ignored, so the box is only valid for query
    /// intervals inside `[time0, time1]`.
    fn bounding_box(&self, _t0: f64, _t1: f64) -> Option<Aabb3> {
        let box0 = Aabb3::around_sphere(&self.center0, self.radius);
        let box1 = Aabb3::around_sphere(&self.center1, self.radius);
        Some(Aabb3::surrounding(&box0, &box1))
    }
}
