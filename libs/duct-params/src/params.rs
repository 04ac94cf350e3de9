//! # Parameter Set
//!
//! The flat, user-facing parameter set driving duct and cover generation.
//! All lengths are millimetres.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which printable bodies to emit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Part {
    /// Only the slotted channel body.
    Duct,
    /// Only the snap-fit cap.
    Cover,
    /// Both bodies, offset apart.
    #[default]
    Both,
}

impl Part {
    /// True when the duct body is part of the output.
    pub fn emits_duct(self) -> bool {
        matches!(self, Part::Duct | Part::Both)
    }

    /// True when the cover body is part of the output.
    pub fn emits_cover(self) -> bool {
        matches!(self, Part::Cover | Part::Both)
    }
}

impl fmt::Display for Part {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Part::Duct => write!(f, "duct"),
            Part::Cover => write!(f, "cover"),
            Part::Both => write!(f, "both"),
        }
    }
}

impl FromStr for Part {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "duct" => Ok(Part::Duct),
            "cover" => Ok(Part::Cover),
            "both" => Ok(Part::Both),
            other => Err(format!("unknown part '{other}' (expected duct, cover or both)")),
        }
    }
}

/// End-stop ribs on the cover, preventing it from sliding lengthwise off
/// the duct.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum CoverEdge {
    /// No end stops.
    #[default]
    None,
    /// A single stop at the far end.
    One,
    /// Stops at both ends.
    Both,
}

impl CoverEdge {
    /// True when a rib sits at the near (z = 0) end.
    pub fn at_start(self) -> bool {
        matches!(self, CoverEdge::Both)
    }

    /// True when a rib sits at the far (z = length) end.
    pub fn at_end(self) -> bool {
        matches!(self, CoverEdge::One | CoverEdge::Both)
    }

    /// Number of ribs.
    pub fn rib_count(self) -> u32 {
        match self {
            CoverEdge::None => 0,
            CoverEdge::One => 1,
            CoverEdge::Both => 2,
        }
    }
}

impl fmt::Display for CoverEdge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoverEdge::None => write!(f, "none"),
            CoverEdge::One => write!(f, "one"),
            CoverEdge::Both => write!(f, "both"),
        }
    }
}

impl FromStr for CoverEdge {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "none" => Ok(CoverEdge::None),
            "one" => Ok(CoverEdge::One),
            "both" => Ok(CoverEdge::Both),
            other => Err(format!("unknown edge mode '{other}' (expected none, one or both)")),
        }
    }
}

/// The full parameter set for one generator run.
///
/// Entities downstream are recomputed from this struct on every run;
/// nothing is cached between invocations.
///
/// # Example
///
/// ```rust
/// use duct_params::{Derived, DuctParams};
///
/// let params = DuctParams::default();
/// let derived = Derived::resolve(&params).expect("defaults are feasible");
/// assert!(derived.slit_width > 0.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DuctParams {
    /// Duct length along the extrusion axis.
    pub length: f64,
    /// Outer duct width.
    pub width: f64,
    /// Outer duct height.
    pub height: f64,
    /// Wall and floor thickness of every printed shell.
    pub shell: f64,

    /// Number of slots cut along the duct.
    pub fin_count: u32,
    /// Width of the rib left standing between slots.
    pub fin_width: f64,
    /// Resize fins so ribs and slits come out equally wide.
    pub fin_resize: bool,

    /// Number of mounting holes in the floor.
    pub hole_count: u32,
    /// Mounting hole diameter.
    pub hole_diameter: f64,
    /// Distance of the first/last hole from the duct ends.
    pub hole_offset: f64,

    /// Clip (mounting feature) length along the wall.
    pub mf_length: f64,
    /// Clip ramp angle in degrees, (0, 90].
    pub mf_angle: f64,
    /// Clip depth into the wall.
    pub mf_depth: f64,
    /// Clip distance below the duct top edge.
    pub mf_top_offset: f64,

    /// Snap-fit clearance between duct and cover.
    pub tolerance: f64,
    /// Cover sits flush with the duct walls instead of overlapping them.
    pub cover_flush_width: bool,
    /// Cover end ribs recess into the duct ends instead of overhanging.
    pub cover_flush_length: bool,
    /// End-stop rib placement.
    pub cover_edge: CoverEdge,

    /// Optional engraving on the cover cap.
    pub text: Option<String>,
    /// Engraving depth into the cap.
    pub text_depth: f64,
    /// Glyph cell scale factor.
    pub text_scale: f64,

    /// Which bodies to emit.
    pub part: Part,
}

impl Default for DuctParams {
    fn default() -> Self {
        Self {
            length: 100.0,
            width: 15.0,
            height: 15.0,
            shell: 1.2,
            fin_count: 8,
            fin_width: 3.0,
            fin_resize: false,
            hole_count: 3,
            hole_diameter: 3.5,
            hole_offset: 10.0,
            mf_length: 2.0,
            mf_angle: 45.0,
            mf_depth: 0.8,
            mf_top_offset: 1.0,
            tolerance: 0.15,
            cover_flush_width: false,
            cover_flush_length: false,
            cover_edge: CoverEdge::None,
            text: None,
            text_depth: 0.6,
            text_scale: 1.0,
            part: Part::Both,
        }
    }
}

impl DuctParams {
    /// Height of the clip band: the wall region from the duct top edge down
    /// past the clip, including the thickened backing below it.
    pub fn clip_band(&self) -> f64 {
        self.mf_top_offset + self.mf_length + self.shell
    }

    /// Horizontal run consumed by one clip ramp,
    /// `mf_depth · tan(90° − mf_angle)`.
    pub fn clip_ramp_run(&self) -> f64 {
        self.mf_depth * (90.0 - self.mf_angle).to_radians().tan()
    }

    /// Rebate depth of the duct's outer wall surface when the cover is
    /// width-flush; zero otherwise.
    pub fn wall_rebate(&self) -> f64 {
        if self.cover_flush_width {
            self.shell + self.tolerance
        } else {
            0.0
        }
    }
}
