//! # Cover Cross-Section
//!
//! The cover is a shallow upside-down channel: a cap plate spanning the
//! cover width, mirrored `shell`-thick side walls descending past the clip,
//! and mirrored clip tabs that snap into the duct's grooves with exactly
//! `tolerance` clearance.

use crate::clip;
use crate::error::ProfileResult;
use crate::profile::Profile;
use crate::region::Region;
use config::constants::CUT_OVERSHOOT;
use duct_params::DuctParams;
use glam::DVec2;

/// Key cover dimensions, shared with the solid layer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoverDims {
    /// Outer half-width of the cover.
    pub outer_half_width: f64,
    /// Inner half-width (outer minus one wall).
    pub inner_half_width: f64,
    /// Top of the cap plate in duct coordinates.
    pub cap_top: f64,
    /// Underside of the cap plate.
    pub cap_bottom: f64,
    /// Lower edge of the side walls.
    pub wall_bottom: f64,
}

impl CoverDims {
    /// Computes the cover dimensions in the duct's coordinate frame
    /// (floor at y = 0, centre plane at x = 0).
    ///
    /// The overlapping cover clears the duct walls by `tolerance` on each
    /// side; the width-flush variant drops into the duct's rebate so the
    /// outer faces line up.
    pub fn of(params: &DuctParams) -> Self {
        let outer_half_width =
            params.width / 2.0 + params.tolerance + params.shell - params.wall_rebate();
        let cap_bottom = params.height + params.tolerance;
        let wall_bottom = params.height
            - params.mf_top_offset
            - params.mf_length
            + params.tolerance
            - params.shell;
        Self {
            outer_half_width,
            inner_half_width: outer_half_width - params.shell,
            cap_top: cap_bottom + params.shell,
            cap_bottom,
            wall_bottom,
        }
    }
}

/// Builds the cover cross-section region: cap plate plus mirrored
/// wall-and-tab pairs. All profiles are additive; the engraving and end
/// ribs are solid-level edits.
///
/// # Errors
///
/// Propagates the fatal clip assertions (the tab re-checks them against
/// its tolerance-shrunk length).
pub fn cap_region(params: &DuctParams) -> ProfileResult<Region> {
    let dims = CoverDims::of(params);
    let mut region = Region::new();

    region.add(Profile::rect(
        DVec2::new(-dims.outer_half_width, dims.cap_bottom),
        DVec2::new(dims.outer_half_width, dims.cap_top),
    ));

    // Wall overlaps the cap by the overshoot so the union never meets in a
    // bare coplanar face.
    region.add_mirrored(Profile::rect(
        DVec2::new(dims.inner_half_width, dims.wall_bottom),
        DVec2::new(dims.outer_half_width, dims.cap_bottom + CUT_OVERSHOOT),
    ));

    region.add_mirrored(clip::tab_boss(params)?);

    Ok(region)
}
