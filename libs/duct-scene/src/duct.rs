//! # Duct Solid
//!
//! Extrudes the duct wall cross-section along the full length, then cuts
//! the fin slots, the mounting holes and, for the length-flush cover, the
//! end recesses the cover ribs drop into.

use crate::error::SceneResult;
use crate::solid::{extrude_region, Solid};
use config::constants::{CUT_OVERSHOOT, DEFAULT_SEGMENTS};
use duct_params::{Derived, DuctParams};
use duct_profile::duct::wall_region;
use glam::DVec3;

/// Builds the duct solid in print orientation: floor on the bed, length
/// along +Z, centre plane at x = 0.
pub fn duct_solid(params: &DuctParams, derived: &Derived) -> SceneResult<Solid> {
    let region = wall_region(params)?;
    let (base, mut cuts) = extrude_region(&region, params.length);

    cuts.extend(fin_slots(params, derived));
    cuts.extend(mounting_holes(params, derived));
    cuts.extend(end_recesses(params));

    log::debug!(
        "duct solid: {} profile cuts, {} slots, {} holes",
        region.subtractive.len(),
        derived.slot_starts().count(),
        derived.hole_positions().len(),
    );

    Ok(Solid::difference(base, cuts))
}

/// One full-width slot block per fin position, sparing the floor.
///
/// The slots cut both walls from above the floor through the top edge,
/// leaving the alternating ribs that retain the cables.
fn fin_slots(params: &DuctParams, derived: &Derived) -> Vec<Solid> {
    let half_width = params.width / 2.0 + CUT_OVERSHOOT;
    derived
        .slot_starts()
        .map(|start| {
            Solid::block(
                DVec3::new(-half_width, params.shell, start),
                DVec3::new(
                    half_width,
                    params.height + CUT_OVERSHOOT,
                    start + derived.slit_width,
                ),
            )
        })
        .collect()
}

/// Vertical cylinders through the floor on the centre plane.
fn mounting_holes(params: &DuctParams, derived: &Derived) -> Vec<Solid> {
    derived
        .hole_positions()
        .into_iter()
        .map(|z| {
            Solid::Cylinder {
                radius: params.hole_diameter / 2.0,
                height: params.shell + 2.0 * CUT_OVERSHOOT,
                segments: DEFAULT_SEGMENTS,
            }
            // +Z cylinder axis onto +Y, piercing the floor.
            .rotated_x(-90.0)
            .translated(DVec3::new(0.0, -CUT_OVERSHOOT, z))
        })
        .collect()
}

/// Shallow recesses at the duct ends for the length-flush cover: each is
/// sized to the edge rib plus the snap-fit clearance so the rib seats
/// without protruding.
fn end_recesses(params: &DuctParams) -> Vec<Solid> {
    if !params.cover_flush_length {
        return Vec::new();
    }
    let depth = params.shell + params.tolerance;
    let half_width = params.width / 2.0 + CUT_OVERSHOOT;
    let floor_y = params.height - params.clip_band() - params.tolerance;
    let top_y = params.height + CUT_OVERSHOOT;

    let mut cuts = Vec::new();
    if params.cover_edge.at_start() {
        cuts.push(Solid::block(
            DVec3::new(-half_width, floor_y, -CUT_OVERSHOOT),
            DVec3::new(half_width, top_y, depth),
        ));
    }
    if params.cover_edge.at_end() {
        cuts.push(Solid::block(
            DVec3::new(-half_width, floor_y, params.length - depth),
            DVec3::new(half_width, top_y, params.length + CUT_OVERSHOOT),
        ));
    }
    cuts
}
