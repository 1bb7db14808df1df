use crate::math::intersect_2d::segments_intersect;
use crate::math::sweep_2d::point_in_ccw_sweep;
use crate::math::Point2;

/// Decides whether the segment between vertices `idx0` and `idx1` is a
/// valid triangulation diagonal of `polygon`: a non-edge segment lying in
/// the polygon interior and crossing no polygon edge.
///
/// The polygon must be wound clockwise; the interior cone at `idx0` is the
/// counter-clockwise sweep from the direction to its previous neighbor to
/// the direction to its next neighbor, which only bounds the interior for
/// clockwise winding.
///
/// Checks short-circuit in order: identical indices, polygon edges
/// (including the wraparound pair), departure outside the interior cone at
/// `idx0`, and finally crossings against every edge not incident to either
/// endpoint. Incident edges are excluded because they necessarily touch the
/// diagonal at the shared vertex. O(n) per call.
#[must_use]
pub fn is_diagonal(polygon: &[Point2], idx0: usize, idx1: usize, eps: f64) -> bool {
    let n = polygon.len();
    if idx0 == idx1 {
        return false;
    }

    let is_polygon_edge = idx0.abs_diff(idx1) == 1
        || (idx0 == 0 && idx1 == n - 1)
        || (idx1 == 0 && idx0 == n - 1);
    if is_polygon_edge {
        return false;
    }

    let prev = (idx0 + n - 1) % n;
    let next = (idx0 + 1) % n;
    let departs_inward = point_in_ccw_sweep(
        &polygon[idx0],
        &(polygon[prev] - polygon[idx0]),
        &(polygon[next] - polygon[idx0]),
        &polygon[idx1],
    );
    if !departs_inward {
        return false;
    }

    for a in 0..n {
        let b = (a + 1) % n;
        if a == idx0 || a == idx1 || b == idx0 || b == idx1 {
            continue;
        }
        if segments_intersect(&polygon[idx0], &polygon[idx1], &polygon[a], &polygon[b], eps) {
            return false;
        }
    }
    true
}
