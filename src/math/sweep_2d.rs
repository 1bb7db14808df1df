use super::orient_2d::perp_dot;
use super::{Point2, Vector2};

/// Tests whether `point`, viewed from `position`, lies within the
/// counter-clockwise angular sweep from `from_dir` to `to_dir`.
///
/// The sweep is classified by the perp-dot of the bounding directions:
/// when `perp_dot(from_dir, to_dir) >= 0` the sweep is at most a half
/// turn and both half-plane conditions must hold; otherwise it is reflex
/// and either condition suffices. Comparisons are strict, so points on
/// the bounding directions are outside.
///
/// With `from_dir` and `to_dir` set to a polygon vertex's two incident
/// edge directions, this decides whether a candidate diagonal departs
/// into the polygon's interior.
#[must_use]
pub fn point_in_ccw_sweep(
    position: &Point2,
    from_dir: &Vector2,
    to_dir: &Vector2,
    point: &Point2,
) -> bool {
    let diff = point - position;
    if perp_dot(from_dir, to_dir) >= 0.0 {
        perp_dot(to_dir, &diff) < 0.0 && perp_dot(from_dir, &diff) > 0.0
    } else {
        perp_dot(to_dir, &diff) < 0.0 || perp_dot(from_dir, &diff) > 0.0
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn p(x: f64, y: f64) -> Point2 {
        Point2::new(x, y)
    }

    fn v(x: f64, y: f64) -> Vector2 {
        Vector2::new(x, y)
    }

    #[test]
    fn first_quadrant_sweep() {
        let origin = p(0.0, 0.0);
        let from = v(1.0, 0.0);
        let to = v(0.0, 1.0);
        assert!(point_in_ccw_sweep(&origin, &from, &to, &p(100.0, 100.0)));
        assert!(point_in_ccw_sweep(&origin, &from, &to, &p(1.0, 1.0)));
        assert!(!point_in_ccw_sweep(&origin, &from, &to, &p(1.0, -1.0)));
        assert!(!point_in_ccw_sweep(&origin, &from, &to, &p(-1.0, 1.0)));
        assert!(!point_in_ccw_sweep(&origin, &from, &to, &p(-1.0, -1.0)));
    }

    #[test]
    fn reflex_sweep_excludes_third_quadrant() {
        let origin = p(0.0, 0.0);
        let from = v(0.0, -1.0);
        let to = v(-1.0, 0.0);
        assert!(point_in_ccw_sweep(&origin, &from, &to, &p(100.0, 100.0)));
        assert!(point_in_ccw_sweep(&origin, &from, &to, &p(1.0, 1.0)));
        assert!(point_in_ccw_sweep(&origin, &from, &to, &p(1.0, -1.0)));
        assert!(point_in_ccw_sweep(&origin, &from, &to, &p(-1.0, 1.0)));
        assert!(!point_in_ccw_sweep(&origin, &from, &to, &p(-1.0, -1.0)));
        assert!(!point_in_ccw_sweep(&origin, &from, &to, &p(-11.0, -0.03)));
    }

    #[test]
    fn zero_angle_sweep_contains_nothing() {
        // Both bounding directions point the same way.
        let origin = p(2.0, 1.0);
        let from = v(-2.0, -1.0);
        let to = v(-4.0, -2.0);
        assert!(!point_in_ccw_sweep(&origin, &from, &to, &p(1.0, 1.0)));
        assert!(!point_in_ccw_sweep(&origin, &from, &to, &p(0.0, 0.0)));
        assert!(!point_in_ccw_sweep(&origin, &from, &to, &p(-1.0, -0.5)));
    }
}
