use thiserror::Error;

/// Top-level error type for the earclip crate.
#[derive(Debug, Error)]
pub enum EarclipError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Triangulation(#[from] TriangulationError),
}

/// Errors related to geometric computations.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("degenerate geometry: {0}")]
    Degenerate(String),

    #[error("zero-length vector")]
    ZeroVector,
}

/// Errors related to the triangulation loop.
#[derive(Debug, Error)]
pub enum TriangulationError {
    #[error("polygon needs at least 3 vertices, got {found}")]
    TooFewVertices { found: usize },

    #[error(
        "no valid ear found with {remaining} vertices remaining (non-simple or unclippable polygon)"
    )]
    NoValidEar { remaining: usize },
}

/// Convenience type alias for results using [`EarclipError`].
pub type Result<T> = std::result::Result<T, EarclipError>;
