use super::orient_2d::perp_dot;
use super::Point2;

/// Boolean segment-segment intersection in 2D.
///
/// The first segment runs from `a0` to `a1`, the second from `b0` to `b1`.
/// Both are parametrized and solved with Cramer's rule over perp-dot
/// ratios; intersection requires both parameters in `[0, 1]` inclusive,
/// so shared endpoints count as intersections.
///
/// When the direction vectors are parallel within `eps`, the segments are
/// reported as intersecting iff they are also collinear — regardless of
/// overlap extent. Parallel non-collinear segments never intersect.
#[must_use]
pub fn segments_intersect(a0: &Point2, a1: &Point2, b0: &Point2, b1: &Point2, eps: f64) -> bool {
    let va = a1 - a0;
    let vb = b1 - b0;

    let cross = perp_dot(&vb, &va);
    if cross.abs() < eps {
        return perp_dot(&va, &(b1 - a0)).abs() < eps;
    }

    let t = -perp_dot(&vb, &(b0 - a1)) / cross;
    let u = -perp_dot(&va, &(a0 - b1)) / perp_dot(&va, &vb);
    (0.0..=1.0).contains(&t) && (0.0..=1.0).contains(&u)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::DEFAULT_EPSILON;

    fn p(x: f64, y: f64) -> Point2 {
        Point2::new(x, y)
    }

    fn intersect(a: (f64, f64), b: (f64, f64), c: (f64, f64), d: (f64, f64)) -> bool {
        segments_intersect(
            &p(a.0, a.1),
            &p(b.0, b.1),
            &p(c.0, c.1),
            &p(d.0, d.1),
            DEFAULT_EPSILON,
        )
    }

    #[test]
    fn crossing_segments() {
        assert!(intersect((-1.0, 0.0), (1.0, 0.0), (0.0, -1.0), (0.0, 1.0)));
        assert!(intersect((-1.0, 0.0), (1.0, 0.0), (0.2, 1.0), (0.2, -1.0)));
    }

    #[test]
    fn symmetric_in_segment_order() {
        assert!(intersect((0.0, -1.0), (0.0, 1.0), (-1.0, 0.0), (1.0, 0.0)));
        assert!(intersect((0.2, 1.0), (0.2, -1.0), (-1.0, 0.0), (1.0, 0.0)));
        assert!(!intersect((0.0, -1.0), (0.0, 1.0), (0.2, 1.0), (0.2, -1.0)));
        assert!(!intersect((0.2, 1.0), (0.2, -1.0), (0.0, -1.0), (0.0, 1.0)));
    }

    #[test]
    fn parallel_non_collinear() {
        assert!(!intersect((0.0, 0.0), (1.0, 2.0), (3.0, 0.0), (4.0, 2.0)));
    }

    #[test]
    fn collinear_segments_intersect() {
        assert!(intersect((1.0, 1.0), (-1.0, -1.0), (-1.0, -1.0), (0.0, 0.0)));
    }

    #[test]
    fn separated_segments() {
        assert!(!intersect(
            (0.44, 0.44),
            (0.66, 1.11),
            (1.55, 0.0),
            (0.0, 0.0)
        ));
    }

    #[test]
    fn vertical_crossing_diagonal() {
        assert!(intersect((3.0, 6.0), (1.0, 1.0), (2.0, 2.0), (2.0, 5.0)));
        assert!(intersect((11.0, 15.0), (4.0, 4.0), (8.0, 6.0), (8.0, 13.0)));
    }

    #[test]
    fn shared_endpoint_counts() {
        assert!(intersect((0.0, 0.0), (1.0, 0.0), (1.0, 0.0), (1.0, 1.0)));
    }
}
