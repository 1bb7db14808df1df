pub mod intersect_2d;
pub mod orient_2d;
pub mod sweep_2d;

/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// 3D point type.
pub type Point3 = nalgebra::Point3<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// 3D vector type.
pub type Vector3 = nalgebra::Vector3<f64>;

/// 3x3 matrix, used for orthonormal basis changes.
pub type Matrix3 = nalgebra::Matrix3<f64>;

/// Strict tolerance for zero-length vector guards.
pub const TOLERANCE: f64 = 1e-10;

/// Default absolute epsilon for the collinearity and parallelism predicates.
///
/// Absolute, not relative to polygon scale: callers working with very large
/// or very small coordinates should rescale their input, or override the
/// epsilon through [`crate::triangulation::TriangulationParams`].
pub const DEFAULT_EPSILON: f64 = 1e-4;
