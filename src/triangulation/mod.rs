mod diagonal;
mod ear_clip;
mod project;

pub use diagonal::is_diagonal;
pub use ear_clip::Triangulation;
pub use project::project_to_plane;

use crate::math::{Point3, DEFAULT_EPSILON};

/// A triangle as a triple of indices into the caller's vertex list.
pub type Triangle = [usize; 3];

/// Parameters controlling the triangulation predicates.
#[derive(Debug, Clone, Copy)]
pub struct TriangulationParams {
    /// Absolute epsilon for the collinearity and parallelism tests.
    ///
    /// Not relative to polygon scale: rescale very large or very small
    /// input, or widen/narrow this accordingly.
    pub epsilon: f64,
}

impl Default for TriangulationParams {
    fn default() -> Self {
        Self {
            epsilon: DEFAULT_EPSILON,
        }
    }
}

/// Triangulates a (nearly) planar polygon embedded in 3D space.
///
/// Returns a lazy, single-pass iterator of index triples into `polygon`.
/// A simple n-gon yields exactly `n - 2` triangles; degenerate input
/// (no non-collinear vertex triple) degrades to a naive fan from vertex 0,
/// and unclippable input surfaces an explicit error item. See
/// [`Triangulation`] for details.
#[must_use]
pub fn triangulate(polygon: &[Point3]) -> Triangulation {
    triangulate_with(polygon, TriangulationParams::default())
}

/// Triangulates a polygon with explicit parameters.
#[must_use]
pub fn triangulate_with(polygon: &[Point3], params: TriangulationParams) -> Triangulation {
    Triangulation::new(polygon, params)
}
