//! Error types for primitive construction and validation.

use thiserror::Error;

/// Errors reported when a primitive violates its construction invariants.
///
/// Intersection queries themselves never fail; a miss is `None`.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeometryError {
    /// Moving sphere whose motion interval has zero length.
    #[error("degenerate motion interval: time0 == time1 == {time0}")]
    DegenerateTimeInterval {
        /// Start of the motion interval.
        time0: f64,
        /// End of the motion interval.
        time1: f64,
    },

    /// Radius that is not finite and strictly positive.
    #[error("invalid radius: {0} (must be finite and > 0)")]
    InvalidRadius(f64),

    /// A coordinate or time that is NaN or infinite.
    #[error("non-finite value in {0}")]
    NonFinite(&'static str),
}

/// Result type for geometry operations.
pub type Result<T> = std::result::Result<T, GeometryError>;
