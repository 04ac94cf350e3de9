//! # Duct Wall Cross-Section
//!
//! The duct profile starts from the full width × height rectangle, cuts
//! the mirrored clip grooves near the top of each outer wall, and shells
//! the interior with mirrored bulk polygons. The net cross-section is a
//! hollow channel with `shell`-thick walls, thickened to `shell + mf_depth`
//! behind the clip band so the grooves never breach.

use crate::clip;
use crate::error::ProfileResult;
use crate::profile::Profile;
use crate::region::Region;
use config::constants::CUT_OVERSHOOT;
use duct_params::DuctParams;
use glam::DVec2;

/// Builds the duct wall cross-section region.
///
/// Cuts, from the outer rectangle:
/// - mirrored clip grooves below `mf_top_offset`,
/// - a rebate band over the clip zone when the cover is width-flush,
/// - mirrored interior bulk polygons shelling the inside down to `shell`.
///
/// # Errors
///
/// Propagates the fatal clip assertions; no partial region is produced.
pub fn wall_region(params: &DuctParams) -> ProfileResult<Region> {
    let half_width = params.width / 2.0;
    let mut region = Region::new();

    region.add(Profile::rect(
        DVec2::new(-half_width, 0.0),
        DVec2::new(half_width, params.height),
    ));

    region.cut_mirrored(clip::groove_cut(params)?);

    let rebate = params.wall_rebate();
    if rebate > 0.0 {
        region.cut_mirrored(Profile::rect(
            DVec2::new(half_width - rebate, params.height - params.clip_band()),
            DVec2::new(half_width + CUT_OVERSHOOT, params.height + CUT_OVERSHOOT),
        ));
    }

    region.cut_mirrored(interior_bulk(params)?);

    Ok(region)
}

/// Right-hand half of the interior bulk: a hexagonal profile from the
/// centre plane to the inner wall face, stepping inward across the clip
/// band so the wall behind each groove keeps `shell` of material.
///
/// The half overshoots the centre plane and the open top so the two
/// mirrored cuts overlap each other and pierce the top surface.
fn interior_bulk(params: &DuctParams) -> ProfileResult<Profile> {
    let half_width = params.width / 2.0;
    let inner_low = half_width - params.shell;
    let inner_band = half_width - params.wall_rebate() - params.shell - params.mf_depth;
    let step_y = params.height - params.clip_band();
    let top = params.height + CUT_OVERSHOOT;

    Profile::from_points(vec![
        DVec2::new(-CUT_OVERSHOOT, params.shell),
        DVec2::new(inner_low, params.shell),
        DVec2::new(inner_low, step_y),
        DVec2::new(inner_band, step_y),
        DVec2::new(inner_band, top),
        DVec2::new(-CUT_OVERSHOOT, top),
    ])
}
