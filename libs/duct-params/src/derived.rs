//! # Derived Values
//!
//! Closed-form secondary quantities computed once from a validated
//! parameter set. No iteration, no search: plain arithmetic, resolved at
//! configuration time and never recomputed per solid.

use crate::error::{ParamError, ParamResult};
use crate::params::DuctParams;

/// Derived quantities shared by the profile and solid builders.
///
/// `resolve` is the single validation gate of the pipeline: a `Derived`
/// value in hand means the parameter set is geometrically feasible.
#[derive(Debug, Clone, PartialEq)]
pub struct Derived {
    /// Effective fin width (equals `fin_width` unless `fin_resize`).
    pub fin_width: f64,
    /// Distance from one slot start to the next.
    pub fin_spacing: f64,
    /// Width of each open slot between fins.
    pub slit_width: f64,
    /// Distance between adjacent hole centres, when more than one hole.
    pub hole_spacing: Option<f64>,
    /// Cover extrusion length, including rib overhangs.
    pub cover_length: f64,
    /// Cover body overhang past the duct's near (z = 0) end.
    pub cover_overhang_start: f64,
    /// Cover body overhang past the duct's far (z = length) end.
    pub cover_overhang_end: f64,

    length: f64,
    fin_count: u32,
    hole_count: u32,
    hole_offset: f64,
}

impl Derived {
    /// Validates the parameter set and computes all derived quantities.
    ///
    /// # Errors
    ///
    /// Returns the first violated invariant; every failure is fatal and
    /// aborts generation before any geometry is built.
    pub fn resolve(params: &DuctParams) -> ParamResult<Self> {
        validate(params)?;

        let fin_width = if params.fin_resize {
            // Equal ribs and slits: length = (2 n + 1) · w.
            params.length / (2.0 * f64::from(params.fin_count) + 1.0)
        } else {
            params.fin_width
        };
        let fin_spacing = (params.length - fin_width) / f64::from(params.fin_count);
        let slit_width = fin_spacing - fin_width;
        if slit_width <= 0.0 {
            return Err(ParamError::SlitVanishes {
                fin_spacing,
                fin_width,
            });
        }

        let hole_spacing = if params.hole_count > 1 {
            Some((params.length - 2.0 * params.hole_offset) / f64::from(params.hole_count - 1))
        } else {
            None
        };

        let overhang = params.shell + params.tolerance;
        let (cover_overhang_start, cover_overhang_end) = if params.cover_flush_length {
            (0.0, 0.0)
        } else {
            (
                if params.cover_edge.at_start() { overhang } else { 0.0 },
                if params.cover_edge.at_end() { overhang } else { 0.0 },
            )
        };
        let cover_length = params.length + cover_overhang_start + cover_overhang_end;

        Ok(Self {
            fin_width,
            fin_spacing,
            slit_width,
            hole_spacing,
            cover_length,
            cover_overhang_start,
            cover_overhang_end,
            length: params.length,
            fin_count: params.fin_count,
            hole_count: params.hole_count,
            hole_offset: params.hole_offset,
        })
    }

    /// Start position (along the length axis) of each slot.
    ///
    /// Slot `i` spans `[start, start + slit_width]`; a full-width fin remains
    /// at both duct ends.
    pub fn slot_starts(&self) -> impl Iterator<Item = f64> + '_ {
        (0..self.fin_count).map(move |i| self.fin_width + f64::from(i) * self.fin_spacing)
    }

    /// Centre position of each mounting hole along the length axis.
    ///
    /// More than one hole spreads evenly between the end offsets; a single
    /// hole sits at mid-length; zero holes produce nothing.
    pub fn hole_positions(&self) -> Vec<f64> {
        match self.hole_spacing {
            Some(spacing) => (0..self.hole_count)
                .map(|i| self.hole_offset + f64::from(i) * spacing)
                .collect(),
            None if self.hole_count == 1 => vec![self.length / 2.0],
            None => Vec::new(),
        }
    }
}

/// Checks every parameter invariant, in declaration order.
fn validate(params: &DuctParams) -> ParamResult<()> {
    for (name, value) in [
        ("length", params.length),
        ("width", params.width),
        ("height", params.height),
        ("shell", params.shell),
        ("fin_width", params.fin_width),
        ("mf_length", params.mf_length),
        ("mf_depth", params.mf_depth),
    ] {
        if value <= 0.0 {
            return Err(ParamError::NonPositive { name, value });
        }
    }
    for (name, value) in [
        ("mf_top_offset", params.mf_top_offset),
        ("tolerance", params.tolerance),
    ] {
        if value < 0.0 {
            return Err(ParamError::NonPositive { name, value });
        }
    }
    if params.fin_count == 0 {
        return Err(ParamError::NonPositive {
            name: "fin_count",
            value: 0.0,
        });
    }

    if !(params.mf_angle > 0.0 && params.mf_angle <= 90.0) {
        return Err(ParamError::AngleOutOfRange {
            angle: params.mf_angle,
        });
    }
    let required = 2.0 * params.clip_ramp_run();
    if required > params.mf_length {
        return Err(ParamError::ClipTooShort {
            length: params.mf_length,
            required,
        });
    }

    if params.hole_count >= 1 {
        if params.hole_diameter <= 0.0 {
            return Err(ParamError::NonPositive {
                name: "hole_diameter",
                value: params.hole_diameter,
            });
        }
        if params.hole_offset < 0.0 {
            return Err(ParamError::NonPositive {
                name: "hole_offset",
                value: params.hole_offset,
            });
        }
    }
    if params.hole_count > 1 && params.length - 2.0 * params.hole_offset <= 0.0 {
        return Err(ParamError::HoleLayout {
            length: params.length,
            hole_offset: params.hole_offset,
        });
    }

    // The interior must survive shelling: side walls (thickened across the
    // clip band, rebated when width-flush) and the floor plus clip band must
    // leave an open channel.
    let min_width = 2.0 * (params.shell + params.mf_depth + params.wall_rebate());
    if params.width <= min_width {
        return Err(ParamError::DimensionTooSmall {
            name: "width",
            value: params.width,
            minimum: min_width,
        });
    }
    let min_height = params.shell + params.clip_band();
    if params.height <= min_height {
        return Err(ParamError::DimensionTooSmall {
            name: "height",
            value: params.height,
            minimum: min_height,
        });
    }

    if params.text.is_some() {
        if params.text_depth <= 0.0 {
            return Err(ParamError::NonPositive {
                name: "text_depth",
                value: params.text_depth,
            });
        }
        if params.text_scale <= 0.0 {
            return Err(ParamError::NonPositive {
                name: "text_scale",
                value: params.text_scale,
            });
        }
        if params.text_depth >= params.shell {
            return Err(ParamError::EngravingTooDeep {
                depth: params.text_depth,
                shell: params.shell,
            });
        }
    }

    Ok(())
}
