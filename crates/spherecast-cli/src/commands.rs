//! Command implementations, kept apart from argument parsing so they can be
//! exercised directly.

use crate::scene::{ProbeFile, Scene};
use anyhow::Result;
use serde::Serialize;
use spherecast_raytrace::batch::{bounds_of, closest_hits};
use spherecast_raytrace::{Aabb3, HitRecord, Hittable, Primitive, PrimitiveKind};

/// Closest hit of one ray, as printed by `probe`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HitReport {
    /// Index of the primitive that was hit.
    pub primitive: usize,
    /// Name of its material.
    pub material: String,
    /// Ray parameter.
    pub t: f64,
    /// Hit point.
    pub point: [f64; 3],
    /// Outward unit normal.
    pub normal: [f64; 3],
    /// Texture coordinate u.
    pub u: f64,
    /// Texture coordinate v.
    pub v: f64,
}

/// Box of one primitive, as printed by `bounds`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BoxReport {
    /// Minimum corner.
    pub min: [f64; 3],
    /// Maximum corner.
    pub max: [f64; 3],
}

impl From<Aabb3> for BoxReport {
    fn from(b: Aabb3) -> Self {
        Self {
            min: b.min.coords.into(),
            max: b.max.coords.into(),
        }
    }
}

/// Output of `bounds`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BoundsReport {
    /// Per-primitive boxes, in file order.
    pub primitives: Vec<PrimitiveBounds>,
    /// Box enclosing every primitive, absent for an empty file.
    pub scene: Option<BoxReport>,
}

/// Box of a single primitive.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PrimitiveBounds {
    /// Index in the file.
    pub index: usize,
    /// `sphere` or `moving_sphere`.
    pub kind: &'static str,
    /// The box, absent for unbounded primitives.
    #[serde(flatten)]
    pub bounds: Option<BoxReport>,
}

/// A validation problem found by `check`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Issue {
    /// Index of the offending primitive.
    pub index: usize,
    /// What is wrong.
    pub message: String,
}

/// Overrides for the query range taken from the command line.
#[derive(Debug, Clone, Copy, Default)]
pub struct RangeOverride {
    /// Replaces `query.t_min`.
    pub t_min: Option<f64>,
    /// Replaces `query.t_max`.
    pub t_max: Option<f64>,
}

fn kind_name(kind: PrimitiveKind) -> &'static str {
    match kind {
        PrimitiveKind::Sphere => "sphere",
        PrimitiveKind::MovingSphere => "moving_sphere",
    }
}

fn hit_report(scene: &Scene, primitive: usize, hit: &HitRecord) -> HitReport {
    HitReport {
        primitive,
        material: scene
            .materials
            .get(hit.material)
            .cloned()
            .unwrap_or_default(),
        t: hit.t,
        point: hit.p.coords.into(),
        normal: hit.normal.into(),
        u: hit.u,
        v: hit.v,
    }
}

/// Log a warning for every primitive that fails validation and return how
/// many did.
fn warn_invalid(primitives: &[Primitive]) -> usize {
    primitives
        .iter()
        .enumerate()
        .filter(|(index, primitive)| match primitive.validate() {
            Ok(()) => false,
            Err(e) => {
                log::warn!("primitive {index}: {e}");
                true
            }
        })
        .count()
}

/// Trace every ray in the file and report its closest hit.
pub fn probe(file: &ProbeFile, range: RangeOverride) -> Result<Vec<Option<HitReport>>> {
    let mut query = file.query;
    if let Some(t_min) = range.t_min {
        query.t_min = t_min;
    }
    if let Some(t_max) = range.t_max {
        query.t_max = t_max;
    }
    query.validate()?;

    let scene = file.build()?;
    warn_invalid(&scene.primitives);

    let hits = closest_hits(&scene.primitives, &scene.rays, query.t_min, query.t_max);
    log::info!(
        "{} rays, {} primitives, {} hits",
        scene.rays.len(),
        scene.primitives.len(),
        hits.iter().filter(|h| h.is_some()).count()
    );

    Ok(hits
        .iter()
        .map(|h| h.as_ref().map(|(index, hit)| hit_report(&scene, *index, hit)))
        .collect())
}

/// Bounding boxes of every primitive over `[time0, time1]`.
///
/// Primitives that fail validation are still reported, with a warning
/// logged for each.
pub fn bounds(file: &ProbeFile, time0: Option<f64>, time1: Option<f64>) -> Result<BoundsReport> {
    let time0 = time0.unwrap_or(file.query.time0);
    let time1 = time1.unwrap_or(file.query.time1);
    let scene = file.build()?;
    warn_invalid(&scene.primitives);

    let primitives = scene
        .primitives
        .iter()
        .enumerate()
        .map(|(index, p)| PrimitiveBounds {
            index,
            kind: kind_name(p.kind()),
            bounds: p.bounding_box(time0, time1).map(BoxReport::from),
        })
        .collect();

    Ok(BoundsReport {
        primitives,
        scene: bounds_of(&scene.primitives, time0, time1).map(BoxReport::from),
    })
}

/// Validate the query range and every primitive.
///
/// Returns the list of problems; an empty list means the file is sound.
pub fn check(file: &ProbeFile) -> Result<Vec<Issue>> {
    file.query.validate()?;
    let scene = file.build()?;
    Ok(scene
        .primitives
        .iter()
        .enumerate()
        .filter_map(|(index, p)| {
            p.validate().err().map(|e| Issue {
                index,
                message: e.to_string(),
            })
        })
        .collect())
}
