//! Surface-of-revolution triangle generation.

use lathe_chain::Chain;
use lathe_math::{Point3, Tolerance};
use lathe_mesh::TriangleMesh;

use crate::cap::add_fan_cap;
use crate::winding::resolve_flip;
use crate::Sweep;

/// Mesh every chain swept by `sweep`.
///
/// Chains are independent; with the `parallel` feature they are meshed
/// concurrently and merged in input order, giving the same result.
pub fn build_mesh(chains: &[Chain], sweep: &Sweep) -> TriangleMesh {
    #[cfg(feature = "parallel")]
    let parts: Vec<TriangleMesh> = {
        use rayon::prelude::*;
        chains.par_iter().map(|c| mesh_chain(c, sweep)).collect()
    };
    #[cfg(not(feature = "parallel"))]
    let parts: Vec<TriangleMesh> = chains.iter().map(|c| mesh_chain(c, sweep)).collect();

    let mut mesh = TriangleMesh::new();
    for (index, part) in parts.iter().enumerate() {
        if part.is_empty() {
            tracing::warn!(chain = index, "chain produced no triangles");
        }
        mesh.merge(part);
    }
    mesh
}

/// Mesh a single chain.
pub fn mesh_chain(chain: &Chain, sweep: &Sweep) -> TriangleMesh {
    let tol = &sweep.tolerance;
    let points = chain.points();
    let mut mesh = TriangleMesh::new();
    if points.len() < 2 {
        return mesh;
    }

    let distances: Vec<f64> = points.iter().map(|p| sweep.axis.distance_to(p)).collect();
    let flip = resolve_flip(points, &distances, &sweep.axis, sweep.angle_step(), tol);
    let profiles = rotated_profiles(points, sweep);

    for s in 0..sweep.segments {
        let (cur, next) = (&profiles[s], &profiles[sweep.next_step(s)]);
        for i in 0..points.len() - 1 {
            let (p1, p2, p3, p4) = (cur[i], cur[i + 1], next[i + 1], next[i]);
            let on_axis_i = distances[i] <= tol.linear;
            let on_axis_j = distances[i + 1] <= tol.linear;
            match (on_axis_i, on_axis_j) {
                (true, true) => {}
                (true, false) => emit(&mut mesh, [p1, p2, p3], flip, tol),
                (false, true) => emit(&mut mesh, [p1, p2, p4], flip, tol),
                (false, false) => {
                    emit(&mut mesh, [p1, p2, p3], flip, tol);
                    emit(&mut mesh, [p1, p3, p4], flip, tol);
                }
            }
        }
    }

    let closed = chain.is_closed(tol);
    if !sweep.full && closed && points.len() >= 4 {
        let last = &profiles[profiles.len() - 1];
        // Side triangles run start[i] -> start[i+1] and end[i+1] -> end[i];
        // the caps take the opposite direction on each shared edge.
        add_fan_cap(&mut mesh, &profiles[0], &distances, closed, !flip, tol);
        add_fan_cap(&mut mesh, last, &distances, closed, flip, tol);
    }

    tracing::debug!(
        points = points.len(),
        closed,
        flip,
        triangles = mesh.num_triangles(),
        "meshed chain"
    );
    mesh
}

/// The chain rotated to every angular step. Step 0 is the chain itself.
fn rotated_profiles(points: &[Point3], sweep: &Sweep) -> Vec<Vec<Point3>> {
    let step = sweep.angle_step();
    (0..sweep.step_count())
        .map(|s| {
            if s == 0 {
                return points.to_vec();
            }
            let rotation = sweep.axis.rotation(s as f64 * step);
            points.iter().map(|p| rotation.apply_point(p)).collect()
        })
        .collect()
}

fn emit(mesh: &mut TriangleMesh, [a, b, c]: [Point3; 3], flip: bool, tol: &Tolerance) {
    if flip {
        mesh.add_triangle(c, b, a, tol);
    } else {
        mesh.add_triangle(a, b, c, tol);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{AxisSpec, RevolveParams};

    fn sweep(angle: f64, segments: u32) -> Sweep {
        Sweep::new(&RevolveParams::new(AxisSpec::default(), angle, segments)).unwrap()
    }

    fn square_chain() -> Chain {
        Chain::new(vec![
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 1.0),
            Point3::new(2.0, 0.0, 1.0),
            Point3::new(2.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
        ])
    }

    #[test]
    fn test_rotated_profiles_full_vs_partial() {
        let pts = square_chain().into_points();
        let full = rotated_profiles(&pts, &sweep(360.0, 4));
        assert_eq!(full.len(), 4);
        let partial = rotated_profiles(&pts, &sweep(90.0, 4));
        assert_eq!(partial.len(), 5);
        // Last partial profile sits at the sweep angle
        let p = partial[4][0];
        assert!(p.x.abs() < 1e-12 && (p.y - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_square_full_sweep_count() {
        let mesh = mesh_chain(&square_chain(), &sweep(360.0, 4));
        assert_eq!(mesh.num_triangles(), 32);
    }

    #[test]
    fn test_open_chain_partial_sweep_has_no_caps() {
        let chain = Chain::new(vec![
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 1.0),
            Point3::new(2.0, 0.0, 1.0),
        ]);
        let mesh = mesh_chain(&chain, &sweep(90.0, 3));
        assert_eq!(mesh.num_triangles(), 3 * 2 * 2);
    }

    #[test]
    fn test_axis_segment_is_skipped() {
        // Segment lying on the axis contributes nothing
        let chain = Chain::new(vec![Point3::new(0.0, 0.0, 0.0), Point3::new(0.0, 0.0, 1.0)]);
        assert!(mesh_chain(&chain, &sweep(360.0, 8)).is_empty());
    }

    #[test]
    fn test_build_mesh_merges_in_order() {
        let a = square_chain();
        let b = Chain::new(vec![Point3::new(3.0, 0.0, 0.0), Point3::new(3.0, 0.0, 2.0)]);
        let s = sweep(360.0, 6);
        let mesh = build_mesh(&[a.clone(), b.clone()], &s);
        let ma = mesh_chain(&a, &s);
        let mb = mesh_chain(&b, &s);
        assert_eq!(mesh.num_triangles(), ma.num_triangles() + mb.num_triangles());
        assert_eq!(mesh.vertices[..ma.num_vertices()], ma.vertices[..]);
    }
}
