//! # IR Realization
//!
//! Converts the solid IR from `duct-scene` into triangle meshes.

use crate::error::{MeshError, MeshResult};
use crate::mesh::Mesh;
use crate::ops::{boolean, extrude};
use crate::primitives::create_cylinder;
use duct_scene::{Assembly, BooleanOp, PartKind, Solid};
use rayon::prelude::*;

/// One realized body, ready for export.
#[derive(Debug, Clone)]
pub struct PartMesh {
    /// Which body this is
    pub kind: PartKind,
    /// The realized triangle mesh
    pub mesh: Mesh,
}

/// Converts a single solid node to a mesh.
pub fn solid_to_mesh(solid: &Solid) -> MeshResult<Mesh> {
    match solid {
        Solid::Extrude { profile, length } => extrude::linear_extrude(profile, *length),

        Solid::Cylinder {
            radius,
            height,
            segments,
        } => create_cylinder(*radius, *height, *segments),

        Solid::Transform { matrix, children } => {
            let mut mesh = merge_children(children)?;
            mesh.transform(matrix);
            Ok(mesh)
        }

        Solid::Boolean { op, children } => {
            let mut iter = children.iter();
            let Some(first) = iter.next() else {
                return Ok(Mesh::new());
            };
            let mut result = solid_to_mesh(first)?;
            for child in iter {
                let mesh = solid_to_mesh(child)?;
                result = match op {
                    BooleanOp::Union => boolean::union(&result, &mesh),
                    BooleanOp::Difference => boolean::difference(&result, &mesh),
                };
            }
            Ok(result)
        }
    }
}

/// Realizes every child and merges the results into one mesh.
fn merge_children(children: &[Solid]) -> MeshResult<Mesh> {
    let mut result = Mesh::new();
    for child in children {
        let mesh = solid_to_mesh(child)?;
        result.merge(&mesh);
    }
    Ok(result)
}

/// Realizes every part of an assembly, in parallel.
///
/// Each part must come out non-empty and structurally valid; a part that
/// fails aborts the whole run, matching the all-or-nothing failure
/// semantics of the generator.
pub fn realize_assembly(assembly: &Assembly) -> MeshResult<Vec<PartMesh>> {
    assembly
        .parts
        .par_iter()
        .map(|part| {
            let mesh = solid_to_mesh(&part.solid)?;
            if mesh.is_empty() {
                return Err(MeshError::PartFailed {
                    part: part.kind.name(),
                    message: "realized mesh is empty".to_string(),
                });
            }
            if !mesh.validate() {
                return Err(MeshError::PartFailed {
                    part: part.kind.name(),
                    message: "realized mesh has invalid topology".to_string(),
                });
            }
            log::debug!(
                "part '{}': {} vertices, {} triangles",
                part.kind.name(),
                mesh.vertex_count(),
                mesh.triangle_count(),
            );
            Ok(PartMesh {
                kind: part.kind,
                mesh,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use duct_profile::Profile;
    use glam::{DVec2, DVec3};

    fn square_prism(side: f64, length: f64) -> Solid {
        Solid::Extrude {
            profile: Profile::rect(DVec2::ZERO, DVec2::new(side, side)),
            length,
        }
    }

    #[test]
    fn extrusion_node_realizes() {
        let mesh = solid_to_mesh(&square_prism(2.0, 5.0)).expect("realizes");
        assert_eq!(mesh.vertex_count(), 8);
        let (_, max) = mesh.bounding_box();
        assert_relative_eq!(max.z, 5.0);
    }

    #[test]
    fn transform_node_moves_children() {
        let solid = square_prism(1.0, 1.0).translated(DVec3::new(10.0, 0.0, 0.0));
        let mesh = solid_to_mesh(&solid).expect("realizes");
        let (min, _) = mesh.bounding_box();
        assert_relative_eq!(min.x, 10.0);
    }

    #[test]
    fn difference_node_cuts() {
        let base = square_prism(4.0, 4.0);
        let cut = Solid::block(DVec3::new(1.0, 1.0, -1.0), DVec3::new(3.0, 3.0, 5.0));
        let mesh = solid_to_mesh(&Solid::difference(base, vec![cut])).expect("realizes");
        assert!(!mesh.is_empty());
        // The tunnel's inner walls add triangles beyond the plain prism.
        assert!(mesh.triangle_count() > 12);
    }

    #[test]
    fn empty_boolean_realizes_to_empty_mesh() {
        let solid = Solid::union(vec![]);
        let mesh = solid_to_mesh(&solid).expect("realizes");
        assert!(mesh.is_empty());
    }

    #[test]
    fn assembly_realization_is_all_or_nothing() {
        let assembly = Assembly {
            parts: vec![duct_scene::PartSolid {
                kind: PartKind::Duct,
                solid: Solid::union(vec![]),
            }],
        };
        assert!(matches!(
            realize_assembly(&assembly),
            Err(MeshError::PartFailed { part: "duct", .. })
        ));
    }
}
