//! Mapping intersection queries over ray batches.
//!
//! Each ray is an independent query against read-only primitives, so the
//! batch is split across rayon's thread pool with no synchronization.

use crate::{Aabb3, HitRecord, Hittable, Ray};
use rayon::prelude::*;

/// Closest hit of one ray against a list of primitives.
///
/// Primitives are tried in order and each hit narrows `t_max`, so the
/// result is the nearest hit overall. Returns the hit and the index of the
/// primitive that produced it.
pub fn closest_hit<H: Hittable>(
    primitives: &[H],
    ray: &Ray,
    t_min: f64,
    t_max: f64,
) -> Option<(usize, HitRecord)> {
    let mut closest = None;
    let mut closest_t = t_max;

    for (index, primitive) in primitives.iter().enumerate() {
        if let Some(hit) = primitive.hit(ray, t_min, closest_t) {
            closest_t = hit.t;
            closest = Some((index, hit));
        }
    }

    closest
}

/// Intersect every ray with a single primitive.
///
/// The output has one entry per ray, in input order.
pub fn hit_batch<H: Hittable>(
    primitive: &H,
    rays: &[Ray],
    t_min: f64,
    t_max: f64,
) -> Vec<Option<HitRecord>> {
    log::debug!("intersecting {} rays with {:?}", rays.len(), primitive);
    rays.par_iter()
        .map(|ray| primitive.hit(ray, t_min, t_max))
        .collect()
}

/// Closest hit of every ray against a list of primitives.
///
/// See [`closest_hit`]; the output has one entry per ray, in input order.
pub fn closest_hits<H: Hittable>(
    primitives: &[H],
    rays: &[Ray],
    t_min: f64,
    t_max: f64,
) -> Vec<Option<(usize, HitRecord)>> {
    log::debug!(
        "tracing {} rays against {} primitives in ({}, {})",
        rays.len(),
        primitives.len(),
        t_min,
        t_max
    );
    let hits: Vec<_> = rays
        .par_iter()
        .map(|ray| closest_hit(primitives, ray, t_min, t_max))
        .collect();
    log::debug!(
        "{} of {} rays hit",
        hits.iter().filter(|h| h.is_some()).count(),
        rays.len()
    );
    hits
}

/// Box enclosing every primitive over `[t0, t1]`.
///
/// Returns `None` when the list is empty or any primitive is unbounded.
pub fn bounds_of<H: Hittable>(primitives: &[H], t0: f64, t1: f64) -> Option<Aabb3> {
    if primitives.is_empty() {
        return None;
    }
    primitives.iter().try_fold(Aabb3::empty(), |acc, primitive| {
        primitive
            .bounding_box(t0, t1)
            .map(|b| Aabb3::surrounding(&acc, &b))
    })
}
