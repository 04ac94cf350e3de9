//! # Assembly
//!
//! Part selection and print orientation. The assembly is the set of
//! emitted solids; the bodies are separate printable parts, offset apart
//! so they never overlap in the viewer or exporter.

use crate::cover::cover_solid;
use crate::duct::duct_solid;
use crate::error::SceneResult;
use crate::solid::Solid;
use config::constants::PART_SPACING;
use duct_params::{Derived, DuctParams};
use duct_profile::CoverDims;
use glam::DVec3;
use serde::{Deserialize, Serialize};

/// Identity of an emitted body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PartKind {
    /// The slotted channel body.
    Duct,
    /// The snap-fit cap.
    Cover,
}

impl PartKind {
    /// Stable name used for solid labels and file names.
    pub fn name(self) -> &'static str {
        match self {
            PartKind::Duct => "duct",
            PartKind::Cover => "cover",
        }
    }
}

/// One emitted body, print-oriented.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PartSolid {
    /// Which body this is
    pub kind: PartKind,
    /// The oriented solid tree
    pub solid: Solid,
}

/// The set of emitted bodies for one generator run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assembly {
    /// Emitted bodies in a stable order (duct first)
    pub parts: Vec<PartSolid>,
}

impl Assembly {
    /// Returns the solid for a given part, if emitted.
    pub fn part(&self, kind: PartKind) -> Option<&Solid> {
        self.parts
            .iter()
            .find(|part| part.kind == kind)
            .map(|part| &part.solid)
    }
}

/// Builds the requested bodies from a parameter set.
///
/// This is the single entry point of the scene layer: it resolves and
/// validates the parameters, builds the selected solids and orients each
/// for printing. Deterministic for identical parameters; any validation
/// failure aborts the whole assembly.
pub fn build_assembly(params: &DuctParams) -> SceneResult<Assembly> {
    let derived = Derived::resolve(params)?;
    let mut parts = Vec::new();

    if params.part.emits_duct() {
        // The duct is built floor-down; no reorientation needed.
        parts.push(PartSolid {
            kind: PartKind::Duct,
            solid: duct_solid(params, &derived)?,
        });
    }

    if params.part.emits_cover() {
        let solid = orient_cover(params, &derived, cover_solid(params, &derived)?);
        parts.push(PartSolid {
            kind: PartKind::Cover,
            solid,
        });
    }

    log::info!(
        "assembly: {} part(s) for part selector '{}'",
        parts.len(),
        params.part,
    );
    Ok(Assembly { parts })
}

/// Flips the cover cap-down for printing and, when both bodies are
/// emitted, shifts it beside the duct.
///
/// Pure placement: rotation and translation only, no topology change.
fn orient_cover(params: &DuctParams, derived: &Derived, cover: Solid) -> Solid {
    let dims = CoverDims::of(params);

    // Half turn about X: the cap lands on the bed, tabs point up. The body
    // then sits at negative y/z and is translated back into the first
    // octant.
    let oriented = cover.rotated_x(180.0).translated(DVec3::new(
        0.0,
        dims.cap_top,
        params.length + derived.cover_overhang_end,
    ));

    if params.part.emits_duct() {
        let offset = params.width / 2.0 + dims.outer_half_width + PART_SPACING;
        oriented.translated(DVec3::new(offset, 0.0, 0.0))
    } else {
        oriented
    }
}
