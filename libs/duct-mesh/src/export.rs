//! # STL Export
//!
//! Writes realized meshes as STL, binary or ASCII.
//!
//! ## Binary layout
//!
//! ```text
//! UINT8[80]    – Header
//! UINT32       – Number of triangles
//! foreach triangle
//!     REAL32[3] – Facet normal
//!     REAL32[3] – Vertex 1
//!     REAL32[3] – Vertex 2
//!     REAL32[3] – Vertex 3
//!     UINT16    – Attribute byte count (0)
//! end
//! ```
//!
//! Facet normals are recomputed from the triangle corners at write time;
//! the f64 kernel precision is narrowed to f32 only here.

use crate::error::MeshResult;
use crate::mesh::Mesh;
use glam::DVec3;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// STL binary header size in bytes.
const HEADER_SIZE: usize = 80;

/// Writes a mesh as binary STL.
pub fn write_stl_binary<W: Write>(mesh: &Mesh, mut writer: W) -> MeshResult<()> {
    let mut header = [b' '; HEADER_SIZE];
    let text = b"Binary STL generated by duct-mesh";
    header[..text.len()].copy_from_slice(text);
    writer.write_all(&header)?;

    writer.write_all(&(mesh.triangle_count() as u32).to_le_bytes())?;

    for i in 0..mesh.triangle_count() {
        let normal = mesh.triangle_normal(i);
        write_vector(&mut writer, normal)?;
        for corner in mesh.triangle_corners(i) {
            write_vector(&mut writer, corner)?;
        }
        writer.write_all(&0u16.to_le_bytes())?;
    }

    Ok(())
}

/// Writes a mesh as ASCII STL with the given solid name.
pub fn write_stl_ascii<W: Write>(mesh: &Mesh, name: &str, mut writer: W) -> MeshResult<()> {
    writeln!(writer, "solid {name}")?;
    for i in 0..mesh.triangle_count() {
        let n = mesh.triangle_normal(i);
        writeln!(writer, "  facet normal {:e} {:e} {:e}", n.x, n.y, n.z)?;
        writeln!(writer, "    outer loop")?;
        for v in mesh.triangle_corners(i) {
            writeln!(writer, "      vertex {:e} {:e} {:e}", v.x, v.y, v.z)?;
        }
        writeln!(writer, "    endloop")?;
        writeln!(writer, "  endfacet")?;
    }
    writeln!(writer, "endsolid {name}")?;
    Ok(())
}

/// Saves a mesh to an STL file, binary by default.
pub fn save_stl<P: AsRef<Path>>(mesh: &Mesh, name: &str, path: P, binary: bool) -> MeshResult<()> {
    let file = File::create(path.as_ref())?;
    let mut writer = BufWriter::new(file);
    if binary {
        write_stl_binary(mesh, &mut writer)?;
    } else {
        write_stl_ascii(mesh, name, &mut writer)?;
    }
    writer.flush()?;
    log::info!(
        "wrote {} ({} triangles, {})",
        path.as_ref().display(),
        mesh.triangle_count(),
        if binary { "binary" } else { "ascii" },
    );
    Ok(())
}

/// Writes a vector as three f32 little-endian values.
fn write_vector<W: Write>(writer: &mut W, v: DVec3) -> MeshResult<()> {
    writer.write_all(&(v.x as f32).to_le_bytes())?;
    writer.write_all(&(v.y as f32).to_le_bytes())?;
    writer.write_all(&(v.z as f32).to_le_bytes())?;
    Ok(())
}
