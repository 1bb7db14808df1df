use super::{Point2, Point3, Vector2};

/// Perpendicular dot product of two 2D vectors: `a.x * b.y - a.y * b.x`.
///
/// The 2D analogue of the cross product's z-component: the signed area of
/// the parallelogram spanned by `a` and `b`. Positive when `b` lies
/// counter-clockwise from `a`.
#[must_use]
pub fn perp_dot(a: &Vector2, b: &Vector2) -> f64 {
    a.x * b.y - a.y * b.x
}

/// Rotates a 2D vector 90 degrees counter-clockwise.
#[must_use]
pub fn perp(v: &Vector2) -> Vector2 {
    Vector2::new(-v.y, v.x)
}

/// Tests whether three 2D points are collinear within `eps`.
///
/// Compares the perp-dot of the two edge vectors at the middle point `v1`
/// against the absolute epsilon.
#[must_use]
pub fn points_are_collinear_2d(v0: &Point2, v1: &Point2, v2: &Point2, eps: f64) -> bool {
    perp_dot(&(v0 - v1), &(v2 - v1)).abs() < eps
}

/// Tests whether three 3D points are collinear within `eps`.
///
/// Compares the squared magnitude of the cross product of the two edge
/// vectors at the middle point `v1` against the absolute epsilon.
#[must_use]
pub fn points_are_collinear_3d(v0: &Point3, v1: &Point3, v2: &Point3, eps: f64) -> bool {
    (v0 - v1).cross(&(v2 - v1)).norm_squared() < eps
}

/// Computes the signed area of a 2D polygon (shoelace formula).
///
/// Positive for counter-clockwise winding, negative for clockwise.
#[must_use]
pub fn signed_area(points: &[Point2]) -> f64 {
    let n = points.len();
    if n < 3 {
        return 0.0;
    }
    let mut sum = 0.0;
    for i in 0..n {
        let j = (i + 1) % n;
        sum += points[i].x * points[j].y - points[j].x * points[i].y;
    }
    sum * 0.5
}
