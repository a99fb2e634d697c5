//! Per-chain face orientation.
//!
//! The winding of every triangle generated from a chain is decided once,
//! from a single reference cell, instead of per triangle: near-degenerate
//! cells close to the axis would otherwise produce unstable normals.

use lathe_math::{Axis, Point3, Tolerance, Vec3};

/// Decide whether triangles swept from `points` must be reversed to face
/// away from the axis.
///
/// `distances[i]` is the distance of `points[i]` from `axis`.
/// `angle_step` is the angle (radians) between consecutive profiles.
pub fn resolve_flip(
    points: &[Point3],
    distances: &[f64],
    axis: &Axis,
    angle_step: f64,
    tol: &Tolerance,
) -> bool {
    if points.len() < 2 {
        return false;
    }

    let i = (0..points.len() - 1)
        .find(|&i| distances[i] > tol.linear && distances[i + 1] > tol.linear)
        .unwrap_or(0);
    let (p0, p1) = (points[i], points[i + 1]);

    let Some(radial) = outward_radial(axis, &[midpoint(&p0, &p1), p0, p1], tol) else {
        return false;
    };

    let rotated = axis.rotate_point(&p1, angle_step);
    let normal = (p1 - p0).cross(&(rotated - p0));
    normal.dot(&radial) < 0.0
}

/// First non-degenerate radial direction among `candidates`.
fn outward_radial(axis: &Axis, candidates: &[Point3], tol: &Tolerance) -> Option<Vec3> {
    candidates.iter().find_map(|p| {
        let r = axis.radial(p);
        (r.norm() > tol.linear).then_some(r)
    })
}

fn midpoint(a: &Point3, b: &Point3) -> Point3 {
    Point3::from((a.coords + b.coords) * 0.5)
}
