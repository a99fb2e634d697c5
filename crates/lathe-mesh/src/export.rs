//! Binary STL and Wavefront OBJ writers.

use std::io::Write;

use crate::{MeshError, Result, TriangleMesh};

const STL_HEADER: &[u8; 80] =
    b"lathe STL export                                                                ";

/// Write `mesh` as binary STL.
pub fn write_stl<W: Write>(mesh: &TriangleMesh, mut out: W) -> Result<()> {
    if mesh.is_empty() {
        return Err(MeshError::EmptyMesh);
    }
    let num_triangles = mesh.num_triangles();
    let mut data = Vec::with_capacity(84 + num_triangles * 50);

    data.extend_from_slice(STL_HEADER);
    data.extend_from_slice(&(num_triangles as u32).to_le_bytes());

    for (i, tri) in mesh.triangles().enumerate() {
        let n = mesh
            .triangle_normal(i)
            .map(|n| [n.x as f32, n.y as f32, n.z as f32])
            .unwrap_or([0.0, 0.0, 1.0]);
        for c in n {
            data.extend_from_slice(&c.to_le_bytes());
        }
        for v in tri {
            data.extend_from_slice(&(v.x as f32).to_le_bytes());
            data.extend_from_slice(&(v.y as f32).to_le_bytes());
            data.extend_from_slice(&(v.z as f32).to_le_bytes());
        }
        // Attribute byte count
        data.extend_from_slice(&0u16.to_le_bytes());
    }

    out.write_all(&data)?;
    Ok(())
}

/// Write `mesh` as Wavefront OBJ text.
pub fn write_obj<W: Write>(mesh: &TriangleMesh, mut out: W) -> Result<()> {
    if mesh.is_empty() {
        return Err(MeshError::EmptyMesh);
    }
    writeln!(out, "# lathe OBJ export")?;
    writeln!(out, "o revolved")?;
    for v in &mesh.vertices {
        writeln!(out, "v {} {} {}", v.x, v.y, v.z)?;
    }
    // OBJ indices are 1-based
    for tri in mesh.indices.chunks_exact(3) {
        writeln!(out, "f {} {} {}", tri[0] + 1, tri[1] + 1, tri[2] + 1)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use lathe_math::{Point3, Tolerance};

    fn one_triangle() -> TriangleMesh {
        let mut mesh = TriangleMesh::new();
        mesh.add_triangle(
            Point3::origin(),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
            &Tolerance::DEFAULT,
        );
        mesh
    }

    #[test]
    fn test_stl_layout() {
        let mut buf = Vec::new();
        write_stl(&one_triangle(), &mut buf).unwrap();
        assert_eq!(buf.len(), 84 + 50);
        assert_eq!(u32::from_le_bytes([buf[80], buf[81], buf[82], buf[83]]), 1);
        // Normal is +Z
        let nz = f32::from_le_bytes([buf[92], buf[93], buf[94], buf[95]]);
        assert!((nz - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_obj_text() {
        let mut buf = Vec::new();
        write_obj(&one_triangle(), &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert_eq!(text.lines().filter(|l| l.starts_with("v ")).count(), 3);
        assert!(text.lines().any(|l| l == "f 1 2 3"));
    }

    #[test]
    fn test_empty_mesh_refused() {
        let mut buf = Vec::new();
        assert!(matches!(
            write_stl(&TriangleMesh::new(), &mut buf),
            Err(MeshError::EmptyMesh)
        ));
        assert!(matches!(
            write_obj(&TriangleMesh::new(), &mut buf),
            Err(MeshError::EmptyMesh)
        ));
    }
}
