//! # Cover Solid
//!
//! Extrudes the cover cross-section along the (possibly overhanging) cover
//! length, adds the end-stop ribs, and engraves the optional text into the
//! cap face.

use crate::error::{SceneError, SceneResult};
use crate::solid::{extrude_region, Solid};
use crate::text::{self, BASE_CELL};
use config::constants::CUT_OVERSHOOT;
use duct_params::{Derived, DuctParams};
use duct_profile::cover::cap_region;
use duct_profile::CoverDims;
use glam::DVec3;

/// Builds the cover solid in mating orientation: cap up, tabs down, the
/// duct's span at z ∈ [0, length]. Print orientation is applied by the
/// assembly step.
pub fn cover_solid(params: &DuctParams, derived: &Derived) -> SceneResult<Solid> {
    let dims = CoverDims::of(params);
    let region = cap_region(params)?;

    let (body, _) = extrude_region(&region, derived.cover_length);
    let body = body.translated(DVec3::new(0.0, 0.0, -derived.cover_overhang_start));

    let mut parts = vec![body];
    parts.extend(edge_ribs(params, derived, &dims));
    let base = if parts.len() == 1 {
        parts.remove(0)
    } else {
        Solid::union(parts)
    };

    let cuts = engraving(params, derived, &dims)?;
    log::debug!(
        "cover solid: {} ribs, {} engraving cuts",
        params.cover_edge.rib_count(),
        cuts.len(),
    );

    Ok(if cuts.is_empty() {
        base
    } else {
        Solid::difference(base, cuts)
    })
}

/// End-stop rib blocks: `shell`-thick, spanning the cover width, descending
/// to the wall bottom. With an overhanging cover the ribs sit past the duct
/// ends with `tolerance` clearance; with a length-flush cover they occupy
/// the duct's end recesses.
fn edge_ribs(params: &DuctParams, derived: &Derived, dims: &CoverDims) -> Vec<Solid> {
    let mut ribs = Vec::new();
    let rib = |z0: f64| {
        Solid::block(
            DVec3::new(-dims.outer_half_width, dims.wall_bottom, z0),
            DVec3::new(
                dims.outer_half_width,
                dims.cap_bottom + CUT_OVERSHOOT,
                z0 + params.shell,
            ),
        )
    };
    if params.cover_edge.at_start() {
        ribs.push(rib(-derived.cover_overhang_start));
    }
    if params.cover_edge.at_end() {
        ribs.push(rib(params.length + derived.cover_overhang_end - params.shell));
    }
    ribs
}

/// Glyph cut blocks for the optional engraving, centred on the cap face.
fn engraving(
    params: &DuctParams,
    derived: &Derived,
    dims: &CoverDims,
) -> SceneResult<Vec<Solid>> {
    let Some(text) = params.text.as_deref() else {
        return Ok(Vec::new());
    };

    let cell = BASE_CELL * params.text_scale;
    let needed_length = text::text_length(text, cell);
    let available_length = derived.cover_length - 2.0 * cell;
    if needed_length > available_length {
        return Err(SceneError::EngravingTooLong {
            needed: needed_length,
            available: available_length,
        });
    }

    let needed_height = text::text_height(cell);
    let available_height = 2.0 * dims.outer_half_width - 2.0 * cell;
    if needed_height > available_height {
        return Err(SceneError::EngravingTooWide {
            needed: needed_height,
            available: available_height,
        });
    }

    let z_mid =
        (params.length + derived.cover_overhang_end - derived.cover_overhang_start) / 2.0;
    text::engrave_cuts(
        text,
        cell,
        params.text_depth,
        dims.cap_top,
        needed_height / 2.0,
        z_mid - needed_length / 2.0,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use duct_params::CoverEdge;

    fn resolve(params: &DuctParams) -> Derived {
        Derived::resolve(params).expect("feasible parameters")
    }

    #[test]
    fn plain_cover_is_a_bare_body() {
        let params = DuctParams::default();
        let derived = resolve(&params);
        let solid = cover_solid(&params, &derived).expect("builds");
        // No ribs, no text: the translated body itself.
        assert!(matches!(solid, Solid::Transform { .. }));
    }

    #[test]
    fn ribs_follow_edge_mode() {
        for (edge, count) in [
            (CoverEdge::None, 0),
            (CoverEdge::One, 1),
            (CoverEdge::Both, 2),
        ] {
            let params = DuctParams {
                cover_edge: edge,
                ..DuctParams::default()
            };
            let derived = resolve(&params);
            let dims = CoverDims::of(&params);
            assert_eq!(edge_ribs(&params, &derived, &dims).len(), count);
        }
    }

    #[test]
    fn engraving_produces_cuts() {
        let params = DuctParams {
            text: Some("CABLE".to_string()),
            ..DuctParams::default()
        };
        let derived = resolve(&params);
        let solid = cover_solid(&params, &derived).expect("builds");
        let Solid::Boolean { children, .. } = &solid else {
            panic!("expected difference, got {solid:?}");
        };
        assert!(children.len() > 1);
    }

    #[test]
    fn overlong_engraving_is_rejected() {
        let params = DuctParams {
            text: Some("THIS-LABEL-IS-FAR-TOO-LONG-FOR-THE-DUCT".to_string()),
            length: 30.0,
            hole_count: 1,
            fin_count: 2,
            ..DuctParams::default()
        };
        let derived = resolve(&params);
        assert!(matches!(
            cover_solid(&params, &derived),
            Err(SceneError::EngravingTooLong { .. })
        ));
    }

    #[test]
    fn oversized_glyphs_are_rejected() {
        let params = DuctParams {
            text: Some("A".to_string()),
            text_scale: 4.0,
            ..DuctParams::default()
        };
        let derived = resolve(&params);
        assert!(matches!(
            cover_solid(&params, &derived),
            Err(SceneError::EngravingTooWide { .. })
        ));
    }

    #[test]
    fn unsupported_glyph_aborts() {
        let params = DuctParams {
            text: Some("Ω".to_string()),
            ..DuctParams::default()
        };
        let derived = resolve(&params);
        assert_eq!(
            cover_solid(&params, &derived),
            Err(SceneError::UnsupportedGlyph { ch: 'Ω' })
        );
    }
}
