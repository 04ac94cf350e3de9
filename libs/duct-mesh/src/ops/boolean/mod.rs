//! # Boolean Operations (CSG)
//!
//! Constructive Solid Geometry operations using BSP trees, based on the
//! csg.js algorithm by Evan Wallace:
//!
//! - Union: `A.clipTo(B); B.clipTo(A); B.invert(); B.clipTo(A); B.invert()`
//! - Difference: invert A, union with B, invert the result
//!
//! # Example
//!
//! ```rust,ignore
//! use duct_mesh::ops::boolean::difference;
//!
//! let solid = difference(&body, &cut);
//! ```

mod bsp;
mod plane;
mod polygon;

use crate::mesh::Mesh;
use bsp::BspNode;
use polygon::Polygon;

/// Computes the union of two meshes.
pub fn union(a: &Mesh, b: &Mesh) -> Mesh {
    let polys_a = mesh_to_polygons(a);
    let polys_b = mesh_to_polygons(b);
    if polys_a.is_empty() {
        return b.clone();
    }
    if polys_b.is_empty() {
        return a.clone();
    }

    let mut bsp_a = BspNode::new(polys_a);
    let mut bsp_b = BspNode::new(polys_b);

    bsp_a.clip_to(&bsp_b);
    bsp_b.clip_to(&bsp_a);
    // Remove B's faces coplanar with A's.
    bsp_b.invert();
    bsp_b.clip_to(&bsp_a);
    bsp_b.invert();

    let mut polygons = bsp_a.all_polygons();
    polygons.extend(bsp_b.all_polygons());
    polygons_to_mesh(&polygons)
}

/// Computes the difference of two meshes (A − B).
pub fn difference(a: &Mesh, b: &Mesh) -> Mesh {
    let polys_a = mesh_to_polygons(a);
    let polys_b = mesh_to_polygons(b);
    if polys_a.is_empty() {
        return Mesh::new();
    }
    if polys_b.is_empty() {
        return a.clone();
    }

    let mut bsp_a = BspNode::new(polys_a);
    let mut bsp_b = BspNode::new(polys_b);

    // A − B = ~(~A ∪ B)
    bsp_a.invert();
    bsp_a.clip_to(&bsp_b);
    bsp_b.clip_to(&bsp_a);
    bsp_b.invert();
    bsp_b.clip_to(&bsp_a);
    bsp_b.invert();

    let mut polygons = bsp_a.all_polygons();
    polygons.extend(bsp_b.all_polygons());

    let mut result = BspNode::new(polygons);
    result.invert();
    polygons_to_mesh(&result.all_polygons())
}

/// Converts a mesh into BSP polygons, one per triangle.
///
/// Degenerate triangles cannot span a plane and are dropped here.
fn mesh_to_polygons(mesh: &Mesh) -> Vec<Polygon> {
    (0..mesh.triangle_count())
        .filter_map(|i| {
            let [a, b, c] = mesh.triangle_corners(i);
            Polygon::from_vertices(vec![a, b, c])
        })
        .collect()
}

/// Converts BSP polygons back into a triangle mesh by fanning each convex
/// polygon.
fn polygons_to_mesh(polygons: &[Polygon]) -> Mesh {
    let mut mesh = Mesh::new();
    for poly in polygons {
        let vertices = poly.vertices();
        let base = mesh.vertex_count() as u32;
        for &v in vertices {
            mesh.add_vertex(v);
        }
        for i in 1..vertices.len() - 1 {
            mesh.add_triangle(base, base + i as u32, base + i as u32 + 1);
        }
    }
    mesh
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ops::extrude::linear_extrude;
    use duct_profile::Profile;
    use glam::{DVec2, DVec3};

    /// Axis-aligned solid box built through the real extrusion path.
    fn cube(min: DVec3, max: DVec3) -> Mesh {
        let profile = Profile::rect(DVec2::new(min.x, min.y), DVec2::new(max.x, max.y));
        let mut mesh = linear_extrude(&profile, max.z - min.z).expect("valid box");
        mesh.translate(DVec3::new(0.0, 0.0, min.z));
        mesh
    }

    fn volume_signed(mesh: &Mesh) -> f64 {
        // Divergence theorem over the triangle soup.
        (0..mesh.triangle_count())
            .map(|i| {
                let [a, b, c] = mesh.triangle_corners(i);
                a.dot(b.cross(c)) / 6.0
            })
            .sum()
    }

    #[test]
    fn union_of_disjoint_cubes_keeps_both() {
        let a = cube(DVec3::ZERO, DVec3::splat(1.0));
        let b = cube(DVec3::new(3.0, 0.0, 0.0), DVec3::new(4.0, 1.0, 1.0));
        let result = union(&a, &b);
        assert!((volume_signed(&result) - 2.0).abs() < 1e-6);
    }

    #[test]
    fn union_of_overlapping_cubes_counts_overlap_once() {
        let a = cube(DVec3::ZERO, DVec3::splat(2.0));
        let b = cube(DVec3::new(1.0, 0.0, 0.0), DVec3::new(3.0, 2.0, 2.0));
        let result = union(&a, &b);
        // 8 + 8 − 4.
        assert!((volume_signed(&result) - 12.0).abs() < 1e-6);
    }

    #[test]
    fn difference_removes_the_overlap() {
        let a = cube(DVec3::ZERO, DVec3::splat(2.0));
        let b = cube(DVec3::new(1.0, -1.0, -1.0), DVec3::new(3.0, 3.0, 3.0));
        let result = difference(&a, &b);
        // Half the cube survives.
        assert!((volume_signed(&result) - 4.0).abs() < 1e-6);
    }

    #[test]
    fn difference_with_disjoint_cut_changes_nothing() {
        let a = cube(DVec3::ZERO, DVec3::splat(1.0));
        let b = cube(DVec3::new(5.0, 5.0, 5.0), DVec3::new(6.0, 6.0, 6.0));
        let result = difference(&a, &b);
        assert!((volume_signed(&result) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn tunnel_cut_pierces_the_body() {
        // A bar crossing the cube completely leaves a rectangular tunnel.
        let a = cube(DVec3::ZERO, DVec3::splat(4.0));
        let b = cube(DVec3::new(1.5, 1.5, -1.0), DVec3::new(2.5, 2.5, 5.0));
        let result = difference(&a, &b);
        assert!((volume_signed(&result) - (64.0 - 4.0)).abs() < 1e-6);
        assert!(result.validate());
    }

    #[test]
    fn empty_operands_short_circuit() {
        let a = cube(DVec3::ZERO, DVec3::splat(1.0));
        let empty = Mesh::new();
        assert_eq!(union(&a, &empty).triangle_count(), a.triangle_count());
        assert!(difference(&empty, &a).is_empty());
        assert_eq!(difference(&a, &empty).triangle_count(), a.triangle_count());
    }
}
