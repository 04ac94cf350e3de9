//! # Primitives
//!
//! Mesh builders for the leaf solids the duct model needs beyond
//! extrusion.

use crate::error::{MeshError, MeshResult};
use crate::mesh::Mesh;
use glam::DVec3;
use std::f64::consts::PI;

/// Creates a capped cylinder along +Z from z = 0.
///
/// # Arguments
///
/// * `radius` - Cylinder radius
/// * `height` - Height along Z
/// * `segments` - Number of segments around the circumference
///
/// # Example
///
/// ```rust
/// use duct_mesh::primitives::create_cylinder;
///
/// let mesh = create_cylinder(5.0, 10.0, 32).unwrap();
/// assert!(mesh.validate());
/// ```
pub fn create_cylinder(radius: f64, height: f64, segments: u32) -> MeshResult<Mesh> {
    if radius <= 0.0 {
        return Err(MeshError::degenerate(format!(
            "cylinder radius must be positive: {radius}"
        )));
    }
    if height <= 0.0 {
        return Err(MeshError::degenerate(format!(
            "cylinder height must be positive: {height}"
        )));
    }
    if segments < 3 {
        return Err(MeshError::degenerate(format!(
            "cylinder segments must be at least 3: {segments}"
        )));
    }

    let n = segments as usize;
    let mut mesh = Mesh::with_capacity(2 * n, 4 * n - 4);

    let bottom: Vec<u32> = (0..n)
        .map(|j| {
            let theta = 2.0 * PI * j as f64 / n as f64;
            mesh.add_vertex(DVec3::new(radius * theta.cos(), radius * theta.sin(), 0.0))
        })
        .collect();
    let top: Vec<u32> = (0..n)
        .map(|j| {
            let theta = 2.0 * PI * j as f64 / n as f64;
            mesh.add_vertex(DVec3::new(
                radius * theta.cos(),
                radius * theta.sin(),
                height,
            ))
        })
        .collect();

    // Side quads, wound outward.
    for j in 0..n {
        let k = (j + 1) % n;
        mesh.add_triangle(bottom[j], bottom[k], top[k]);
        mesh.add_triangle(bottom[j], top[k], top[j]);
    }

    // Caps fanned from the first rim vertex.
    for j in 1..n - 1 {
        mesh.add_triangle(bottom[0], bottom[j + 1], bottom[j]);
        mesh.add_triangle(top[0], top[j], top[j + 1]);
    }

    Ok(mesh)
}
