#![warn(missing_docs)]

//! Ray intersection kernels for static and moving spheres.
//!
//! This crate is the geometry layer of a ray tracer: given a ray and a
//! parameter range it decides whether a primitive is hit and produces the
//! data needed for shading, plus the bounding boxes an acceleration
//! structure needs.
//!
//! # Architecture
//!
//! - [`Ray`] - Ray with origin, direction and a time sample
//! - [`Aabb3`] - Axis-aligned bounding box with the surrounding-box merge
//! - [`HitRecord`] / [`Hittable`] - Intersection result and primitive contract
//! - [`Sphere`] / [`MovingSphere`] / [`Primitive`] - The primitives
//! - [`intersect`] - Stateless ray-sphere kernels and UV mapping
//! - [`batch`] - Mapping the kernels over ray batches with rayon
//! - [`MaterialId`] / [`MaterialTable`] - Handles into caller-owned materials
//!
//! # Example
//!
//! ```
//! use spherecast_math::{Point3, Vec3};
//! use spherecast_raytrace::{Hittable, MaterialTable, Ray, Sphere};
//!
//! let mut materials = MaterialTable::new();
//! let red = materials.insert("red");
//!
//! let sphere = Sphere::new(Point3::new(0.0, 0.0, -1.0), 0.5, red);
//! let ray = Ray::new(Point3::origin(), Vec3::new(0.0, 0.0, -1.0));
//!
//! let hit = sphere.hit(&ray, 0.0, 1000.0).unwrap();
//! assert_eq!(hit.t, 0.5);
//! assert_eq!(materials.get(hit.material), Some(&"red"));
//! ```

mod bbox;
mod error;
mod hit;
mod material;
mod ray;
pub mod batch;
pub mod intersect;
pub mod primitive;

pub use bbox::Aabb3;
pub use error::{GeometryError, Result};
pub use hit::{HitRecord, Hittable};
pub use material::{MaterialId, MaterialTable};
pub use primitive::{MovingSphere, Primitive, PrimitiveKind, Sphere};
pub use ray::Ray;
