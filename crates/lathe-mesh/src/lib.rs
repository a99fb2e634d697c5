#![warn(missing_docs)]

//! Triangle mesh accumulator for lathe.
//!
//! Collects triangles emitted by the revolve mesher, rejecting
//! degenerate ones on insertion, and writes the result as binary STL
//! or Wavefront OBJ.

mod export;

pub use export::{write_obj, write_stl};

use lathe_math::{Point3, Tolerance, Vec3};
use thiserror::Error;

/// Errors from mesh export.
#[derive(Debug, Error)]
pub enum MeshError {
    /// Underlying I/O failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Refused to export a mesh with no triangles.
    #[error("mesh is empty")]
    EmptyMesh,
}

/// Result type for mesh operations.
pub type Result<T> = std::result::Result<T, MeshError>;

/// Why a candidate triangle was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriangleDefect {
    /// One of the three edges is shorter than the linear tolerance.
    ShortEdge,
    /// The vertices are (nearly) collinear.
    ZeroArea,
    /// A coordinate is NaN or infinite.
    NonFinite,
}

/// Check a candidate triangle against `tol`.
///
/// Returns `None` for a usable triangle.
pub fn triangle_defect(
    a: &Point3,
    b: &Point3,
    c: &Point3,
    tol: &Tolerance,
) -> Option<TriangleDefect> {
    if ![a, b, c].iter().all(|p| p.coords.iter().all(|v| v.is_finite())) {
        return Some(TriangleDefect::NonFinite);
    }
    let ab = b - a;
    let ac = c - a;
    let bc = c - b;
    if ab.norm() < tol.linear || ac.norm() < tol.linear || bc.norm() < tol.linear {
        return Some(TriangleDefect::ShortEdge);
    }
    if ab.cross(&ac).norm() < tol.linear {
        return Some(TriangleDefect::ZeroArea);
    }
    None
}

/// Output triangle mesh.
///
/// Every triangle owns three consecutive entries of `vertices`; nothing
/// is welded.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TriangleMesh {
    /// Vertex positions.
    pub vertices: Vec<Point3>,
    /// Triangle indices into `vertices`, three per triangle.
    pub indices: Vec<u32>,
}

impl TriangleMesh {
    /// Create an empty mesh.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of triangles.
    pub fn num_triangles(&self) -> usize {
        self.indices.len() / 3
    }

    /// Number of vertices.
    pub fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    /// True when no triangle has been accepted.
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Add the triangle `(a, b, c)` if it passes validation.
    ///
    /// Returns whether the triangle was accepted.
    pub fn add_triangle(&mut self, a: Point3, b: Point3, c: Point3, tol: &Tolerance) -> bool {
        if let Some(defect) = triangle_defect(&a, &b, &c, tol) {
            tracing::trace!(?defect, ?a, ?b, ?c, "rejected triangle");
            return false;
        }
        let base = self.vertices.len() as u32;
        self.vertices.extend_from_slice(&[a, b, c]);
        self.indices.extend_from_slice(&[base, base + 1, base + 2]);
        true
    }

    /// Merge another mesh into this one.
    pub fn merge(&mut self, other: &TriangleMesh) {
        let offset = self.vertices.len() as u32;
        self.vertices.extend_from_slice(&other.vertices);
        self.indices.extend(other.indices.iter().map(|&i| i + offset));
    }

    /// Iterate over triangles as vertex triples.
    pub fn triangles(&self) -> impl Iterator<Item = [Point3; 3]> + '_ {
        self.indices.chunks_exact(3).map(|tri| {
            [
                self.vertices[tri[0] as usize],
                self.vertices[tri[1] as usize],
                self.vertices[tri[2] as usize],
            ]
        })
    }

    /// Unit normal of triangle `index` following its winding.
    pub fn triangle_normal(&self, index: usize) -> Option<Vec3> {
        let tri = self.indices.get(index * 3..index * 3 + 3)?;
        let a = self.vertices[tri[0] as usize];
        let b = self.vertices[tri[1] as usize];
        let c = self.vertices[tri[2] as usize];
        (b - a).cross(&(c - a)).try_normalize(0.0)
    }

    /// Signed enclosed volume (divergence theorem).
    ///
    /// Positive for a closed mesh whose triangles face outward.
    pub fn signed_volume(&self) -> f64 {
        self.triangles()
            .map(|[a, b, c]| a.coords.dot(&b.coords.cross(&c.coords)))
            .sum::<f64>()
            / 6.0
    }

    /// Reverse the winding of every triangle.
    pub fn flip(&mut self) {
        for tri in self.indices.chunks_exact_mut(3) {
            tri.swap(1, 2);
        }
    }
}
