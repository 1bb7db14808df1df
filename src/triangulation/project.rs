use crate::error::{GeometryError, Result};
use crate::math::orient_2d::points_are_collinear_3d;
use crate::math::{Matrix3, Point2, Point3, Vector3, TOLERANCE};

/// Rotates a (nearly) coplanar 3D polygon into its own plane, producing a
/// 2D polygon with the same vertex count and order.
///
/// Scans cyclic consecutive vertex triples for the first non-collinear one,
/// builds an orthonormal basis from its two edge vectors (normalize one,
/// Gram-Schmidt the other, cross for the third), and rotates every vertex
/// by the basis transpose, keeping the first two coordinates.
///
/// Coplanarity is assumed, not verified: points off the plane are projected
/// with distortion proportional to their out-of-plane deviation.
///
/// # Errors
///
/// Returns [`GeometryError::Degenerate`] if every consecutive triple is
/// collinear within `eps` (fully degenerate polygon).
pub fn project_to_plane(polygon: &[Point3], eps: f64) -> Result<Vec<Point2>> {
    let n = polygon.len();
    let mut pivot = None;
    for idx1 in 0..n {
        let idx0 = (idx1 + n - 1) % n;
        let idx2 = (idx1 + 1) % n;
        if !points_are_collinear_3d(&polygon[idx0], &polygon[idx1], &polygon[idx2], eps) {
            pivot = Some((idx0, idx1, idx2));
            break;
        }
    }
    let Some((idx0, idx1, idx2)) = pivot else {
        return Err(GeometryError::Degenerate(
            "no non-collinear vertex triple in polygon".into(),
        )
        .into());
    };

    let v0 = polygon[idx0] - polygon[idx1];
    let v1 = polygon[idx2] - polygon[idx1];

    let u0 = normalized(v0)?;
    // Remove the projection onto u0 to get an orthogonal second axis.
    let u1 = normalized(v1 - u0 * u0.dot(&v1))?;
    let u2 = u0.cross(&u1);

    // The basis is orthonormal, so its transpose is its inverse.
    let inv_rot = Matrix3::from_columns(&[u0, u1, u2]).transpose();

    Ok(polygon
        .iter()
        .map(|p| {
            let q = inv_rot * p.coords;
            Point2::new(q.x, q.y)
        })
        .collect())
}

fn normalized(v: Vector3) -> Result<Vector3> {
    let len = v.norm();
    if len < TOLERANCE {
        return Err(GeometryError::ZeroVector.into());
    }
    Ok(v / len)
}
