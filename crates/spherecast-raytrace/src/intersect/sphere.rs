//! Ray-sphere intersection (quadratic equation) and spherical UV mapping.

use super::SurfaceHit;
use crate::Ray;
use spherecast_math::{Interval, Point2, Point3, Vec3};
use std::f64::consts::{FRAC_PI_2, PI};

/// Intersect a ray with the sphere `|P - center| = radius`.
///
/// Solves the half-b form of the quadratic:
/// `a = d·d`, `b = oc·d`, `c = oc·oc - r²`, `disc = b² - a·c`.
///
/// A discriminant of zero (tangent ray) counts as a miss. The near root is
/// tried first and the far root only when the near one falls outside the
/// open range `(t_min, t_max)`, so a ray starting inside the sphere reports
/// its exit point.
pub fn intersect_sphere(
    ray: &Ray,
    center: &Point3,
    radius: f64,
    t_min: f64,
    t_max: f64,
) -> Option<SurfaceHit> {
    let oc = ray.origin - center;
    let d = &ray.direction;

    let a = d.dot(d);
    let b = oc.dot(d);
    let c = oc.dot(&oc) - radius * radius;

    let discriminant = b * b - a * c;
    if discriminant <= 0.0 {
        return None;
    }

    let sqrt_disc = discriminant.sqrt();
    let range = Interval::new(t_min, t_max);

    let root = [(-b - sqrt_disc) / a, (-b + sqrt_disc) / a]
        .into_iter()
        .find(|&t| range.surrounds(t))?;

    let point = ray.at(root);
    let normal = (point - center) / radius;
    let (u, v) = sphere_uv(&normal);

    Some(SurfaceHit {
        t: root,
        point,
        normal,
        uv: Point2::new(u, v),
    })
}

/// Map a unit normal to equirectangular texture coordinates.
///
/// `phi = atan2(z, x)` is the longitude and `theta = asin(y)` the latitude;
/// `u = 1 - (phi + π) / 2π` and `v = (theta + π/2) / π`. The seam sits at
/// `phi = ±π` and the poles at `y = ±1`. A normal computed from a hit point
/// can overshoot unit length by a few ulps, so `y` is clamped before `asin`.
pub fn sphere_uv(n: &Vec3) -> (f64, f64) {
    let phi = n.z.atan2(n.x);
    let theta = n.y.clamp(-1.0, 1.0).asin();
    let u = 1.0 - (phi + PI) / (2.0 * PI);
    let v = (theta + FRAC_PI_2) / PI;
    (u, v)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ray_sphere_through_center() {
        let center = Point3::new(0.0, 0.0, 0.0);
        let ray = Ray::new(Point3::new(-10.0, 0.0, 0.0), Vec3::new(1.0, 0.0, 0.0));
        let hit = intersect_sphere(&ray, &center, 5.0, 0.0, f64::INFINITY).unwrap();

        // Entry at x = -5 (t = 5), not the exit at t = 15.
        assert!((hit.t - 5.0).abs() < 1e-10);
        assert!((hit.point.x + 5.0).abs() < 1e-10);
        assert!((hit.normal - Vec3::new(-1.0, 0.0, 0.0)).norm() < 1e-12);
    }

    #[test]
    fn test_entry_distance_off_axis() {
        let center = Point3::new(3.0, -4.0, 12.0);
        let origin = Point3::new(-1.0, 2.0, 0.5);
        let radius = 2.5;
        let dir = (center - origin).normalize();
        let ray = Ray::new(origin, dir);

        let hit = intersect_sphere(&ray, &center, radius, 0.0, f64::INFINITY).unwrap();
        let expected = (center - origin).norm() - radius;
        assert!((hit.t - expected).abs() < 1e-9);
        assert!((hit.normal.norm() - 1.0).abs() < 1e-12);
        assert!((hit.normal - (hit.point - center) / radius).norm() < 1e-12);
    }

    #[test]
    fn test_unnormalized_direction_scales_t() {
        let center = Point3::new(0.0, 0.0, -10.0);
        let ray = Ray::new(Point3::origin(), Vec3::new(0.0, 0.0, -4.0));
        let hit = intersect_sphere(&ray, &center, 2.0, 0.0, f64::INFINITY).unwrap();
        assert!((hit.t - 2.0).abs() < 1e-12);
        assert!((hit.point.z + 8.0).abs() < 1e-12);
    }

    #[test]
    fn test_ray_sphere_tangent_is_miss() {
        let center = Point3::new(0.0, 0.0, 0.0);
        // Touches the sphere at (5, 0, 0) only.
        let ray = Ray::new(Point3::new(5.0, -10.0, 0.0), Vec3::new(0.0, 1.0, 0.0));
        assert!(intersect_sphere(&ray, &center, 5.0, f64::NEG_INFINITY, f64::INFINITY).is_none());
    }

    #[test]
    fn test_ray_sphere_miss() {
        let center = Point3::new(0.0, 0.0, 0.0);
        let ray = Ray::new(Point3::new(-10.0, 10.0, 0.0), Vec3::new(1.0, 0.0, 0.0));
        let ranges = [
            (0.0, f64::INFINITY),
            (f64::NEG_INFINITY, f64::INFINITY),
            (-1e6, 1e6),
        ];
        for (t_min, t_max) in ranges {
            assert!(intersect_sphere(&ray, &center, 5.0, t_min, t_max).is_none());
        }
    }

    #[test]
    fn test_ray_sphere_from_inside_takes_far_root() {
        let center = Point3::new(0.0, 0.0, 0.0);
        let ray = Ray::new(Point3::new(1.0, 0.0, 0.0), Vec3::new(1.0, 0.0, 0.0));
        let hit = intersect_sphere(&ray, &center, 5.0, 0.0, f64::INFINITY).unwrap();
        assert!((hit.t - 4.0).abs() < 1e-10);
        assert!((hit.normal - Vec3::new(1.0, 0.0, 0.0)).norm() < 1e-12);
    }

    #[test]
    fn test_range_bounds_are_exclusive() {
        let center = Point3::new(0.0, 0.0, -1.0);
        let ray = Ray::new(Point3::origin(), Vec3::new(0.0, 0.0, -1.0));
        // Near root is exactly 0.5, far root exactly 1.5.
        let hit = intersect_sphere(&ray, &center, 0.5, 0.5, 10.0).unwrap();
        assert_eq!(hit.t, 1.5);
        assert!(intersect_sphere(&ray, &center, 0.5, 0.0, 0.5).is_none());
        assert!(intersect_sphere(&ray, &center, 0.5, 0.5, 1.5).is_none());
    }

    #[test]
    fn test_sphere_behind_ray_is_miss() {
        let center = Point3::new(0.0, 0.0, 5.0);
        let ray = Ray::new(Point3::origin(), Vec3::new(0.0, 0.0, -1.0));
        assert!(intersect_sphere(&ray, &center, 1.0, 0.0, f64::INFINITY).is_none());
    }

    #[test]
    fn test_uv_equator_reference_point() {
        let (u, v) = sphere_uv(&Vec3::new(1.0, 0.0, 0.0));
        assert_eq!(u, 0.5);
        assert_eq!(v, 0.5);
    }

    #[test]
    fn test_uv_poles_and_quadrants() {
        let (_, v_north) = sphere_uv(&Vec3::new(0.0, 1.0, 0.0));
        assert!((v_north - 1.0).abs() < 1e-12);
        let (_, v_south) = sphere_uv(&Vec3::new(0.0, -1.0, 0.0));
        assert!(v_south.abs() < 1e-12);

        // phi = π/2 and -π/2.
        let (u_pz, _) = sphere_uv(&Vec3::new(0.0, 0.0, 1.0));
        assert!((u_pz - 0.25).abs() < 1e-12);
        let (u_nz, _) = sphere_uv(&Vec3::new(0.0, 0.0, -1.0));
        assert!((u_nz - 0.75).abs() < 1e-12);

        // phi = π on the seam.
        let (u_seam, _) = sphere_uv(&Vec3::new(-1.0, 0.0, 0.0));
        assert!(u_seam.abs() < 1e-12);
    }

    #[test]
    fn test_uv_in_unit_square() {
        let samples = [
            Vec3::new(0.3, 0.4, -0.5),
            Vec3::new(-0.7, -0.1, 0.2),
            Vec3::new(0.0, -0.9, -0.1),
            Vec3::new(-0.2, 0.95, 0.05),
        ];
        for s in samples {
            let (u, v) = sphere_uv(&s.normalize());
            assert!((0.0..=1.0).contains(&u), "u = {u}");
            assert!((0.0..=1.0).contains(&v), "v = {v}");
        }
    }

    #[test]
    fn test_uv_v_stays_in_range_at_poles() {
        let down = Vec3::new(0.0, -1.0, 0.0);
        let up = Vec3::new(0.0, 1.0, 0.0);
        for i in 0..2000 {
            let center = Point3::new(0.0, 0.1 * i as f64 + 0.03, 0.0);
            let radius = 0.7 + 0.001 * i as f64;

            let above = Ray::new(Point3::new(0.0, center.y + 10.0, 0.0), down);
            let north = intersect_sphere(&above, &center, radius, 0.0, f64::INFINITY).unwrap();
            assert!((0.0..=1.0).contains(&north.uv.y), "v = {} at i = {i}", north.uv.y);
            assert!((north.uv.y - 1.0).abs() < 1e-6);

            let below = Ray::new(Point3::new(0.0, center.y - 10.0, 0.0), up);
            let south = intersect_sphere(&below, &center, radius, 0.0, f64::INFINITY).unwrap();
            assert!((0.0..=1.0).contains(&south.uv.y), "v = {} at i = {i}", south.uv.y);
            assert!(south.uv.y < 1e-6);
        }
    }

    #[test]
    fn test_uv_clamps_overshooting_normal() {
        let (_, v) = sphere_uv(&Vec3::new(0.0, 1.0 + 1e-14, 0.0));
        assert_eq!(v, 1.0);
        let (_, v) = sphere_uv(&Vec3::new(0.0, -1.0 - 1e-14, 0.0));
        assert_eq!(v, 0.0);
    }
}
