//! # Linear Extrusion
//!
//! Extrudes a closed 2D profile along the Z axis to create a 3D mesh.
//!
//! The cross-section profiles of the duct are not convex (the shelled
//! interior steps across the clip band), so the caps are triangulated by
//! ear clipping rather than fanning.

use crate::error::{MeshError, MeshResult};
use crate::mesh::Mesh;
use config::constants::EPSILON_TOLERANCE;
use duct_profile::Profile;
use glam::{DVec2, DVec3};

/// Extrudes a profile along +Z from z = 0 to z = `length`.
///
/// Side quads wind outward for the profile's counter-clockwise boundary;
/// the caps reuse one ear-clip triangulation, reversed for the bottom.
///
/// # Errors
///
/// Fails for a non-positive length or a profile the clipper cannot
/// triangulate.
pub fn linear_extrude(profile: &Profile, length: f64) -> MeshResult<Mesh> {
    if length <= 0.0 {
        return Err(MeshError::degenerate(format!(
            "extrusion length must be positive: {length}"
        )));
    }

    let points = profile.points();
    let n = points.len();
    let cap = ear_clip(points)?;

    let mut mesh = Mesh::with_capacity(2 * n, 2 * n + 2 * cap.len());

    for p in points {
        mesh.add_vertex(DVec3::new(p.x, p.y, 0.0));
    }
    for p in points {
        mesh.add_vertex(DVec3::new(p.x, p.y, length));
    }

    // Side faces: two outward triangles per boundary edge.
    for i in 0..n {
        let j = (i + 1) % n;
        let (b0, b1) = (i as u32, j as u32);
        let (t0, t1) = (b0 + n as u32, b1 + n as u32);
        mesh.add_triangle(b0, b1, t1);
        mesh.add_triangle(b0, t1, t0);
    }

    // Caps: the clip triangles are counter-clockwise in 2D, so the top cap
    // uses them as-is (+Z normal) and the bottom cap reversed (−Z normal).
    for [a, b, c] in &cap {
        mesh.add_triangle(*a as u32, *c as u32, *b as u32);
        mesh.add_triangle(
            (*a + n) as u32,
            (*b + n) as u32,
            (*c + n) as u32,
        );
    }

    Ok(mesh)
}

/// Triangulates a simple counter-clockwise polygon by ear clipping.
///
/// Returns index triples into the input slice, each counter-clockwise.
pub fn ear_clip(points: &[DVec2]) -> MeshResult<Vec<[usize; 3]>> {
    let n = points.len();
    if n < 3 {
        return Err(MeshError::degenerate(format!(
            "polygon needs at least 3 vertices, got {n}"
        )));
    }

    let mut remaining: Vec<usize> = (0..n).collect();
    let mut triangles = Vec::with_capacity(n - 2);

    while remaining.len() > 3 {
        let len = remaining.len();
        let mut clipped = false;

        for i in 0..len {
            let prev = remaining[(i + len - 1) % len];
            let cur = remaining[i];
            let next = remaining[(i + 1) % len];

            if !is_ear(points, &remaining, prev, cur, next) {
                continue;
            }

            triangles.push([prev, cur, next]);
            remaining.remove(i);
            clipped = true;
            break;
        }

        if !clipped {
            // A simple polygon always has at least two ears.
            return Err(MeshError::invalid_topology(
                "ear clipping failed: profile is not a simple polygon",
            ));
        }
    }

    triangles.push([remaining[0], remaining[1], remaining[2]]);
    Ok(triangles)
}

/// An ear is a convex corner whose triangle contains no other remaining
/// vertex.
fn is_ear(points: &[DVec2], remaining: &[usize], prev: usize, cur: usize, next: usize) -> bool {
    let a = points[prev];
    let b = points[cur];
    let c = points[next];

    // Reflex or collinear corners cannot be clipped.
    if cross2(b - a, c - b) <= EPSILON_TOLERANCE {
        return false;
    }

    remaining
        .iter()
        .filter(|&&idx| idx != prev && idx != cur && idx != next)
        .all(|&idx| !point_in_triangle(points[idx], a, b, c))
}

/// Z component of the 2D cross product.
#[inline]
fn cross2(a: DVec2, b: DVec2) -> f64 {
    a.x * b.y - a.y * b.x
}

/// Strict containment test against a counter-clockwise triangle; boundary
/// points do not count as inside, so shared chain vertices never block an
/// ear.
fn point_in_triangle(p: DVec2, a: DVec2, b: DVec2, c: DVec2) -> bool {
    cross2(b - a, p - a) > EPSILON_TOLERANCE
        && cross2(c - b, p - b) > EPSILON_TOLERANCE
        && cross2(a - c, p - c) > EPSILON_TOLERANCE
}
