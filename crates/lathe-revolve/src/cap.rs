//! End caps for partial sweeps.

use lathe_math::{Point3, Tolerance};
use lathe_mesh::TriangleMesh;

/// Fan-triangulate a profile from its centroid.
///
/// Points within tolerance of the axis (per `distances`) are dropped
/// first; fewer than three remaining points means no cap. The centroid is
/// the mean of every remaining point, including the repeated last point of
/// a closed profile. A closed profile also gets the last-to-first pair,
/// which is skipped like any other short edge. Returns the number of
/// triangles added.
pub fn add_fan_cap(
    mesh: &mut TriangleMesh,
    profile: &[Point3],
    distances: &[f64],
    closed: bool,
    reverse: bool,
    tol: &Tolerance,
) -> usize {
    let ring: Vec<Point3> = profile
        .iter()
        .zip(distances)
        .filter(|(_, d)| **d > tol.linear)
        .map(|(p, _)| *p)
        .collect();
    if ring.len() < 3 {
        return 0;
    }

    let sum = ring.iter().fold(Point3::origin().coords, |acc, p| acc + p.coords);
    let centroid = Point3::from(sum / ring.len() as f64);

    let mut pairs: Vec<(Point3, Point3)> = ring.windows(2).map(|w| (w[0], w[1])).collect();
    if closed {
        pairs.push((ring[ring.len() - 1], ring[0]));
    }

    let mut added = 0;
    for (a, b) in pairs {
        if (a - centroid).norm() < tol.linear
            || (b - centroid).norm() < tol.linear
            || (b - a).norm() < tol.linear
        {
            continue;
        }
        let accepted = if reverse {
            mesh.add_triangle(b, a, centroid, tol)
        } else {
            mesh.add_triangle(centroid, a, b, tol)
        };
        if accepted {
            added += 1;
        }
    }
    added
}
