//! # Clip Profiles
//!
//! The trapezoidal mounting feature shared by duct and cover: the duct
//! subtracts it as a groove in each outer wall, the cover carries it as a
//! matching tab offset by the snap-fit tolerance.
//!
//! Both builders re-run the clip assertions so they abort on infeasible
//! geometry even when called outside the resolver.

use crate::error::ProfileResult;
use crate::profile::Profile;
use config::constants::CUT_OVERSHOOT;
use duct_params::{DuctParams, ParamError};
use glam::DVec2;

/// Re-checks the two clip assertions for a trapezoid of the given length.
///
/// Angle out of range or ramps longer than the trapezoid abort generation;
/// there is no partial result.
fn check_clip(params: &DuctParams, length: f64) -> Result<(), ParamError> {
    if !(params.mf_angle > 0.0 && params.mf_angle <= 90.0) {
        return Err(ParamError::AngleOutOfRange {
            angle: params.mf_angle,
        });
    }
    let required = 2.0 * params.clip_ramp_run();
    if required > length {
        return Err(ParamError::ClipTooShort { length, required });
    }
    Ok(())
}

/// Builds the clip trapezoid for the right-hand (+x) side.
///
/// The base edge of length `length` lies on the vertical line `x = base_x`
/// with its top at `y_top`; the parallel edge sits `depth` toward −x,
/// shortened by one ramp run per end. The base is overshot toward +x so the
/// extruded solid always pierces the surface it attaches to or cuts
/// through. At 90° the trapezoid degenerates to a rectangle; when the two
/// ramps meet exactly it degenerates to a triangle.
fn trapezoid(params: &DuctParams, length: f64, base_x: f64, y_top: f64) -> ProfileResult<Profile> {
    check_clip(params, length)?;
    let run = params.clip_ramp_run();
    let tip_x = base_x - params.mf_depth;

    Profile::from_points(vec![
        DVec2::new(base_x + CUT_OVERSHOOT, y_top),
        DVec2::new(tip_x, y_top - run),
        DVec2::new(tip_x, y_top - length + run),
        DVec2::new(base_x + CUT_OVERSHOOT, y_top - length),
    ])
}

/// The groove subtracted from the duct's right-hand wall.
///
/// Opens at the wall's outer surface (rebated when the cover is
/// width-flush), `mf_top_offset` below the duct's top edge.
pub fn groove_cut(params: &DuctParams) -> ProfileResult<Profile> {
    let base_x = params.width / 2.0 - params.wall_rebate();
    let y_top = params.height - params.mf_top_offset;
    trapezoid(params, params.mf_length, base_x, y_top)
}

/// The tab protruding from the cover's right-hand wall.
///
/// Same trapezoid as the groove, shrunk and lowered by `tolerance` so every
/// engaged face clears the duct by exactly the snap-fit clearance. The base
/// overshoot fuses the tab with the cover wall it protrudes from.
pub fn tab_boss(params: &DuctParams) -> ProfileResult<Profile> {
    let face_x = params.width / 2.0 - params.wall_rebate() + params.tolerance;
    let y_top = params.height - params.mf_top_offset - params.tolerance;
    let length = params.mf_length - 2.0 * params.tolerance;
    trapezoid(params, length, face_x, y_top)
}

/// Offset of a clip profile below the duct's top edge: the distance from
/// `height` down to the profile's highest vertex.
pub fn top_offset(params: &DuctParams, clip: &Profile) -> f64 {
    let (_, max) = clip.bounding_box();
    params.height - max.y
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use duct_params::DuctParams;

    #[test]
    fn groove_is_a_trapezoid() {
        let params = DuctParams::default();
        let groove = groove_cut(&params).expect("feasible clip");
        assert_eq!(groove.vertex_count(), 4);

        let (min, max) = groove.bounding_box();
        assert_relative_eq!(max.y, params.height - params.mf_top_offset, epsilon = 1e-9);
        assert_relative_eq!(max.y - min.y, params.mf_length, epsilon = 1e-9);
        // Depth plus the attachment overshoot.
        assert_relative_eq!(
            max.x - min.x,
            params.mf_depth + config::constants::CUT_OVERSHOOT,
            epsilon = 1e-9
        );
    }

    #[test]
    fn square_angle_degenerates_to_rectangle() {
        let params = DuctParams {
            mf_angle: 90.0,
            ..DuctParams::default()
        };
        let groove = groove_cut(&params).expect("feasible clip");
        assert_eq!(groove.vertex_count(), 4);
        // All x extents are either base or tip: no ramp vertices in between.
        let (min, max) = groove.bounding_box();
        for p in groove.points() {
            assert!((p.x - min.x).abs() < 1e-12 || (p.x - max.x).abs() < 1e-12);
        }
    }

    #[test]
    fn meeting_ramps_degenerate_to_triangle() {
        // depth · tan(45°) · 2 == length: the top edge vanishes.
        let params = DuctParams {
            mf_depth: 1.0,
            mf_angle: 45.0,
            mf_length: 2.0,
            tolerance: 0.0,
            ..DuctParams::default()
        };
        let groove = groove_cut(&params).expect("boundary clip is feasible");
        assert_eq!(groove.vertex_count(), 3);
    }

    #[test]
    fn out_of_range_angle_aborts() {
        let params = DuctParams {
            mf_angle: 100.0,
            ..DuctParams::default()
        };
        assert!(groove_cut(&params).is_err());
    }

    #[test]
    fn tab_offset_exceeds_groove_offset_by_tolerance() {
        let params = DuctParams::default();
        let groove = groove_cut(&params).expect("feasible clip");
        let tab = tab_boss(&params).expect("feasible clip");

        let groove_offset = top_offset(&params, &groove);
        let tab_offset = top_offset(&params, &tab);
        assert_relative_eq!(tab_offset - groove_offset, params.tolerance, epsilon = 1e-9);
    }

    #[test]
    fn tab_offset_matches_for_zero_tolerance() {
        let params = DuctParams {
            tolerance: 0.0,
            ..DuctParams::default()
        };
        let groove = groove_cut(&params).expect("feasible clip");
        let tab = tab_boss(&params).expect("feasible clip");
        assert_relative_eq!(
            top_offset(&params, &tab),
            top_offset(&params, &groove),
            epsilon = 1e-9
        );
    }

    #[test]
    fn tab_depth_matches_groove_depth_in_both_width_variants() {
        for flush in [false, true] {
            let params = DuctParams {
                cover_flush_width: flush,
                ..DuctParams::default()
            };
            let groove = groove_cut(&params).expect("feasible clip");
            let tab = tab_boss(&params).expect("feasible clip");
            let (g_min, g_max) = groove.bounding_box();
            let (t_min, t_max) = tab.bounding_box();
            assert_relative_eq!(g_max.x - g_min.x, t_max.x - t_min.x, epsilon = 1e-9);
            // The tab tip stays clear of the groove tip by the tolerance.
            assert_relative_eq!(t_min.x - g_min.x, params.tolerance, epsilon = 1e-9);
        }
    }
}
