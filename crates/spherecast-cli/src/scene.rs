//! Probe file format.
//!
//! A probe file lists named materials, primitives referring to them by
//! name, and the rays to trace. It is purely declarative; [`ProbeFile::build`]
//! resolves material names and turns the descriptions into kernel types.

use serde::{Deserialize, Serialize};
use spherecast_math::{Interval, Point3, Vec3};
use spherecast_raytrace::{
    GeometryError, MaterialId, MaterialTable, MovingSphere, Primitive, Ray, Sphere,
};
use std::collections::HashMap;
use std::path::Path;
use thiserror::Error;

/// Errors raised while reading or resolving a probe file.
#[derive(Error, Debug)]
pub enum SceneError {
    /// TOML syntax or schema error.
    #[error("invalid TOML: {0}")]
    Toml(#[from] toml::de::Error),

    /// JSON syntax or schema error.
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Two materials share a name.
    #[error("material '{0}' is defined more than once")]
    DuplicateMaterial(String),

    /// A primitive names a material that was never defined.
    #[error("primitive {index} uses unknown material '{name}'")]
    UnknownMaterial {
        /// Index of the primitive in the file.
        index: usize,
        /// The unresolved name.
        name: String,
    },

    /// A primitive could not be constructed.
    #[error("primitive {index}: {source}")]
    Geometry {
        /// Index of the primitive in the file.
        index: usize,
        /// Construction failure.
        source: GeometryError,
    },

    /// The query range admits no parameter.
    #[error("invalid query range ({t_min}, {t_max})")]
    InvalidQuery {
        /// Lower bound.
        t_min: f64,
        /// Upper bound.
        t_max: f64,
    },
}

/// Query parameters shared by every ray in the file.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuerySettings {
    /// Hits must satisfy `t > t_min`.
    pub t_min: f64,
    /// Hits must satisfy `t < t_max`.
    pub t_max: f64,
    /// Start of the time interval used for bounding boxes.
    pub time0: f64,
    /// End of the time interval used for bounding boxes.
    pub time1: f64,
}

impl Default for QuerySettings {
    fn default() -> Self {
        Self {
            t_min: 0.0,
            t_max: f64::INFINITY,
            time0: 0.0,
            time1: 1.0,
        }
    }
}

impl QuerySettings {
    /// Reject ranges with NaN bounds or `t_min >= t_max`.
    pub fn validate(&self) -> Result<(), SceneError> {
        if !Interval::new(self.t_min, self.t_max).is_open() {
            return Err(SceneError::InvalidQuery {
                t_min: self.t_min,
                t_max: self.t_max,
            });
        }
        Ok(())
    }
}

/// A named material. The kernel never looks inside materials, so only the
/// name is recorded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialDesc {
    /// Name used by primitives to refer to this material.
    pub name: String,
}

/// Description of one primitive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PrimitiveDesc {
    /// Static sphere.
    Sphere {
        /// Center.
        center: [f64; 3],
        /// Radius.
        radius: f64,
        /// Material name.
        material: String,
    },
    /// Sphere moving from `center0` at `time0` to `center1` at `time1`.
    MovingSphere {
        /// Center at `time0`.
        center0: [f64; 3],
        /// Center at `time1`.
        center1: [f64; 3],
        /// Start of the motion.
        time0: f64,
        /// End of the motion.
        time1: f64,
        /// Radius.
        radius: f64,
        /// Material name.
        material: String,
    },
}

impl PrimitiveDesc {
    fn material(&self) -> &str {
        match self {
            PrimitiveDesc::Sphere { material, .. }
            | PrimitiveDesc::MovingSphere { material, .. } => material,
        }
    }
}

/// Description of one ray.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RayDesc {
    /// Ray origin.
    pub origin: [f64; 3],
    /// Ray direction, used as given.
    pub direction: [f64; 3],
    /// Time sample.
    #[serde(default)]
    pub time: f64,
}

impl From<&RayDesc> for Ray {
    fn from(desc: &RayDesc) -> Self {
        Ray::with_time(
            Point3::from(desc.origin),
            Vec3::from(desc.direction),
            desc.time,
        )
    }
}

/// Contents of a probe file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProbeFile {
    /// Query parameters.
    #[serde(default)]
    pub query: QuerySettings,
    /// Materials.
    #[serde(default)]
    pub materials: Vec<MaterialDesc>,
    /// Primitives.
    #[serde(default)]
    pub primitives: Vec<PrimitiveDesc>,
    /// Rays.
    #[serde(default)]
    pub rays: Vec<RayDesc>,
}

/// A probe file with names resolved into kernel types.
#[derive(Debug)]
pub struct Scene {
    /// Material names, addressed by the handles stored in primitives.
    pub materials: MaterialTable<String>,
    /// Primitives in file order.
    pub primitives: Vec<Primitive>,
    /// Rays in file order.
    pub rays: Vec<Ray>,
}

impl ProbeFile {
    /// Parse a probe file from TOML.
    pub fn from_toml(text: &str) -> Result<Self, SceneError> {
        Ok(toml::from_str(text)?)
    }

    /// Parse a probe file from JSON.
    pub fn from_json(text: &str) -> Result<Self, SceneError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Parse `text`, choosing JSON for a `.json` path and TOML otherwise.
    pub fn parse_for_path(path: &Path, text: &str) -> Result<Self, SceneError> {
        let is_json = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case("json"));
        if is_json {
            Self::from_json(text)
        } else {
            Self::from_toml(text)
        }
    }

    /// Resolve material names and construct the primitives and rays.
    ///
    /// Only construction invariants are enforced here; radii are checked by
    /// [`Primitive::validate`].
    pub fn build(&self) -> Result<Scene, SceneError> {
        let mut materials = MaterialTable::new();
        let mut by_name: HashMap<&str, MaterialId> = HashMap::new();
        for desc in &self.materials {
            if by_name.contains_key(desc.name.as_str()) {
                return Err(SceneError::DuplicateMaterial(desc.name.clone()));
            }
            by_name.insert(&desc.name, materials.insert(desc.name.clone()));
        }

        let mut primitives = Vec::with_capacity(self.primitives.len());
        for (index, desc) in self.primitives.iter().enumerate() {
            let material = *by_name
                .get(desc.material())
                .ok_or_else(|| SceneError::UnknownMaterial {
                    index,
                    name: desc.material().to_string(),
                })?;

            let primitive = match desc {
                PrimitiveDesc::Sphere { center, radius, .. } => {
                    Sphere::new(Point3::from(*center), *radius, material).into()
                }
                PrimitiveDesc::MovingSphere {
                    center0,
                    center1,
                    time0,
                    time1,
                    radius,
                    ..
                } => MovingSphere::new(
                    Point3::from(*center0),
                    Point3::from(*center1),
                    *time0,
                    *time1,
                    *radius,
                    material,
                )
                .map_err(|source| SceneError::Geometry { index, source })?
                .into(),
            };
            primitives.push(primitive);
        }

        let rays = self.rays.iter().map(Ray::from).collect();

        log::debug!(
            "built scene: {} materials, {} primitives, {} rays",
            materials.len(),
            primitives.len(),
            self.rays.len()
        );

        Ok(Scene {
            materials,
            primitives,
            rays,
        })
    }
}
