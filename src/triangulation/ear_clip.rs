use crate::error::{Result, TriangulationError};
use crate::math::orient_2d::signed_area;
use crate::math::{Point2, Point3};

use super::diagonal::is_diagonal;
use super::project::project_to_plane;
use super::{Triangle, TriangulationParams};

/// Lazy ear-clipping triangulation of a planar polygon.
///
/// Produced by [`triangulate`](super::triangulate); yields one triangle per
/// call, each computed on demand, so consumption can begin before the whole
/// polygon is processed. Single pass, not re-enterable.
///
/// Per item:
/// - `Ok(triangle)` — an ear clipped from the working polygon, or a fan
///   triangle when the input has no non-collinear vertex triple.
/// - `Err(TriangulationError::TooFewVertices)` — fewer than 3 input points.
/// - `Err(TriangulationError::NoValidEar)` — a full scan found no clippable
///   vertex (non-simple or unclippable polygon); the sequence ends there.
pub struct Triangulation {
    state: State,
}

enum State {
    /// Main path: shrinking working polygon plus the parallel map from
    /// working slots back to original input indices.
    Clipping {
        working: Vec<Point2>,
        map: Vec<usize>,
        epsilon: f64,
    },
    /// Naive fan from vertex 0: trivial 3-vertex input and the degenerate
    /// fallback. `next` is the middle vertex of the next fan triangle.
    Fan { len: usize, next: usize },
    /// Terminal error, reported once.
    Failed(TriangulationError),
    Done,
}

impl Triangulation {
    pub(super) fn new(polygon: &[Point3], params: TriangulationParams) -> Self {
        let n = polygon.len();
        if n < 3 {
            return Self {
                state: State::Failed(TriangulationError::TooFewVertices { found: n }),
            };
        }
        if n == 3 {
            // Trivial triangle, no projection needed.
            return Self {
                state: State::Fan { len: 3, next: 1 },
            };
        }

        match project_to_plane(polygon, params.epsilon) {
            Ok(mut working) => {
                // The diagonal test assumes clockwise winding, but the
                // projection basis built at a reflex vertex flips the
                // frame. Mirroring the y-axis restores clockwise order
                // without touching vertex order or indices.
                if signed_area(&working) > 0.0 {
                    for p in &mut working {
                        p.y = -p.y;
                    }
                }
                let map = (0..n).collect();
                Self {
                    state: State::Clipping {
                        working,
                        map,
                        epsilon: params.epsilon,
                    },
                }
            }
            // Degenerate polygon: fall back to a best-effort fan rather
            // than surfacing an error.
            Err(_) => Self {
                state: State::Fan { len: n, next: 1 },
            },
        }
    }
}

impl Iterator for Triangulation {
    type Item = Result<Triangle>;

    fn next(&mut self) -> Option<Self::Item> {
        match std::mem::replace(&mut self.state, State::Done) {
            State::Done => None,
            State::Failed(err) => Some(Err(err.into())),
            State::Fan { len, next } => {
                if next + 1 >= len {
                    return None;
                }
                let triangle = [0, next, next + 1];
                self.state = State::Fan {
                    len,
                    next: next + 1,
                };
                Some(Ok(triangle))
            }
            State::Clipping {
                mut working,
                mut map,
                epsilon,
            } => {
                let n = working.len();
                if n == 3 {
                    return Some(Ok([map[0], map[1], map[2]]));
                }
                for idx1 in 0..n {
                    let idx0 = (idx1 + n - 1) % n;
                    let idx2 = (idx1 + 1) % n;
                    if is_diagonal(&working, idx0, idx2, epsilon) {
                        let triangle = [map[idx0], map[idx1], map[idx2]];
                        working.remove(idx1);
                        map.remove(idx1);
                        self.state = State::Clipping {
                            working,
                            map,
                            epsilon,
                        };
                        return Some(Ok(triangle));
                    }
                }
                // Every successful scan removes a vertex, so a full scan
                // without one is the termination condition.
                Some(Err(TriangulationError::NoValidEar { remaining: n }.into()))
            }
        }
    }
}
