//! # Solid IR
//!
//! The evaluated geometry tree ready for mesh generation.
//! Each node represents a concrete geometry operation with resolved
//! parameters; no expressions, no deferred values.

use config::constants::CUT_OVERSHOOT;
use duct_profile::{Profile, Region};
use glam::{DMat4, DVec2, DVec3};
use serde::{Deserialize, Serialize};

/// Boolean operation type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BooleanOp {
    /// Combine all children into one shape.
    Union,
    /// Subtract subsequent children from the first.
    Difference,
}

/// A geometry node in the evaluated IR.
///
/// These nodes represent fully resolved geometry operations ready for
/// mesh generation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Solid {
    /// Linear extrusion of a closed profile along +Z from z = 0.
    Extrude {
        /// Cross-section polygon in the XY plane
        profile: Profile,
        /// Extrusion distance
        length: f64,
    },

    /// A capped cylinder along +Z from z = 0.
    Cylinder {
        /// Cylinder radius
        radius: f64,
        /// Cylinder height
        height: f64,
        /// Tessellation segment count
        segments: u32,
    },

    /// A rigid transformation applied to children.
    Transform {
        /// Placement matrix
        matrix: DMat4,
        /// Transformed children
        children: Vec<Solid>,
    },

    /// A boolean operation on children.
    Boolean {
        /// Operation to apply
        op: BooleanOp,
        /// Operands, in order
        children: Vec<Solid>,
    },
}

impl Solid {
    /// An axis-aligned block between opposite corners.
    #[must_use]
    pub fn block(min: DVec3, max: DVec3) -> Self {
        Solid::Extrude {
            profile: Profile::rect(DVec2::new(min.x, min.y), DVec2::new(max.x, max.y)),
            length: max.z - min.z,
        }
        .translated(DVec3::new(0.0, 0.0, min.z))
    }

    /// Union of several solids.
    #[must_use]
    pub fn union(children: Vec<Solid>) -> Self {
        Solid::Boolean {
            op: BooleanOp::Union,
            children,
        }
    }

    /// The base solid minus every cut, in order.
    #[must_use]
    pub fn difference(base: Solid, cuts: Vec<Solid>) -> Self {
        let mut children = Vec::with_capacity(cuts.len() + 1);
        children.push(base);
        children.extend(cuts);
        Solid::Boolean {
            op: BooleanOp::Difference,
            children,
        }
    }

    /// Wraps this solid in a translation.
    #[must_use]
    pub fn translated(self, offset: DVec3) -> Self {
        Solid::Transform {
            matrix: DMat4::from_translation(offset),
            children: vec![self],
        }
    }

    /// Wraps this solid in a rotation about the X axis (degrees).
    #[must_use]
    pub fn rotated_x(self, degrees: f64) -> Self {
        Solid::Transform {
            matrix: DMat4::from_rotation_x(degrees.to_radians()),
            children: vec![self],
        }
    }

    /// Returns the number of child nodes.
    pub fn child_count(&self) -> usize {
        match self {
            Solid::Extrude { .. } | Solid::Cylinder { .. } => 0,
            Solid::Transform { children, .. } | Solid::Boolean { children, .. } => children.len(),
        }
    }

    /// Returns true for leaf geometry.
    pub fn is_primitive(&self) -> bool {
        matches!(self, Solid::Extrude { .. } | Solid::Cylinder { .. })
    }
}

/// Extrudes a cross-section region along +Z.
///
/// Returns the united additive extrusions as the base solid, and the
/// subtractive extrusions as cuts. Cuts run the full length plus an
/// overshoot at both ends so boolean faces never sit exactly coplanar
/// with the body's end faces.
pub fn extrude_region(region: &Region, length: f64) -> (Solid, Vec<Solid>) {
    let base = Solid::union(
        region
            .additive
            .iter()
            .map(|profile| Solid::Extrude {
                profile: profile.clone(),
                length,
            })
            .collect(),
    );

    let cuts = region
        .subtractive
        .iter()
        .map(|profile| {
            Solid::Extrude {
                profile: profile.clone(),
                length: length + 2.0 * CUT_OVERSHOOT,
            }
            .translated(DVec3::new(0.0, 0.0, -CUT_OVERSHOOT))
        })
        .collect();

    (base, cuts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use duct_profile::Profile;
    use glam::DVec2;

    fn unit_square() -> Profile {
        Profile::rect(DVec2::ZERO, DVec2::new(1.0, 1.0))
    }

    #[test]
    fn block_wraps_an_extrusion() {
        let block = Solid::block(DVec3::new(-1.0, 0.0, 2.0), DVec3::new(1.0, 3.0, 5.0));
        let Solid::Transform { children, .. } = &block else {
            panic!("expected transform, got {block:?}");
        };
        assert_eq!(children.len(), 1);
        let Solid::Extrude { length, .. } = &children[0] else {
            panic!("expected extrusion");
        };
        assert_eq!(*length, 3.0);
    }

    #[test]
    fn difference_keeps_the_base_first() {
        let base = Solid::Extrude {
            profile: unit_square(),
            length: 1.0,
        };
        let cut = Solid::Cylinder {
            radius: 0.2,
            height: 2.0,
            segments: 16,
        };
        let diff = Solid::difference(base.clone(), vec![cut]);
        let Solid::Boolean { op, children } = &diff else {
            panic!("expected boolean");
        };
        assert_eq!(*op, BooleanOp::Difference);
        assert_eq!(children.len(), 2);
        assert_eq!(children[0], base);
    }

    #[test]
    fn region_cuts_overshoot_both_ends() {
        let mut region = Region::new();
        region.add(unit_square());
        region.cut(Profile::rect(DVec2::new(0.2, 0.2), DVec2::new(0.8, 0.8)));

        let (base, cuts) = extrude_region(&region, 10.0);
        assert_eq!(base.child_count(), 1);
        assert_eq!(cuts.len(), 1);

        let Solid::Transform { children, .. } = &cuts[0] else {
            panic!("expected translated cut");
        };
        let Solid::Extrude { length, .. } = &children[0] else {
            panic!("expected extrusion");
        };
        assert!(*length > 10.0);
    }

    #[test]
    fn primitives_have_no_children() {
        let cyl = Solid::Cylinder {
            radius: 1.0,
            height: 2.0,
            segments: 8,
        };
        assert!(cyl.is_primitive());
        assert_eq!(cyl.child_count(), 0);
    }
}
