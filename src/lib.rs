pub mod error;
pub mod math;
pub mod triangulation;

pub use error::{EarclipError, Result};
pub use triangulation::{
    triangulate, triangulate_with, Triangle, Triangulation, TriangulationParams,
};
