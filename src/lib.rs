//! analytic3: closed-form analytic geometry in 3D Euclidean space.
//!
//! Vectors, infinite lines and infinite planes, plus the projections,
//! distances and intersections between them. Every operation is a pure
//! function over `Copy` value types; degenerate configurations come back
//! as explicit result variants rather than errors.

pub mod precision;
pub mod algebra;
pub mod gp;
pub mod relations;

// Re-exports for convenience
pub use gp::{Line, Plane, Vec3};
pub use precision::Tolerance;
pub use relations::{
    line_line_distance, line_line_intersection, line_plane_intersection, line_plane_projection,
    plane_plane_intersection, point_line_distance, point_line_projection, point_plane_distance,
    point_plane_projection, LinePlaneIntersection,
};

/// Result type for analytic3 operations
pub type Result<T> = std::result::Result<T, GeomError>;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GeomError {
    #[error("Line direction is degenerate (zero-length)")]
    DegenerateDirection,

    #[error("Plane normal is degenerate (zero-length)")]
    DegenerateNormal,

    #[error("Invalid tolerance: {0} (must be finite and positive)")]
    InvalidTolerance(f64),
}
