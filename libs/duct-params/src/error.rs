//! # Parameter Errors
//!
//! Error types for parameter validation.
//!
//! ## Error Policy
//!
//! - NO fallback mechanisms when validation fails
//! - All failures abort generation with a descriptive message
//! - Errors include the offending values for debugging

use thiserror::Error;

/// Errors raised while validating a parameter set.
///
/// Every variant is fatal: there is no partial or recovered assembly.
#[derive(Debug, Error, PartialEq)]
pub enum ParamError {
    /// A dimension that must be strictly positive was not.
    #[error("{name} must be positive: {value}")]
    NonPositive {
        /// Parameter name as supplied by the user
        name: &'static str,
        /// Offending value
        value: f64,
    },

    /// The clip ramp angle left the supported range.
    #[error("mf_angle must be in (0, 90] degrees: {angle}")]
    AngleOutOfRange {
        /// Offending angle in degrees
        angle: f64,
    },

    /// Mounting feature length too small for the given depth/angle: the two
    /// ramps would cross and the clip profile would self-intersect.
    #[error(
        "mounting feature length too small for given depth/angle: \
         ramps need {required:.3} mm but mf_length is {length:.3} mm"
    )]
    ClipTooShort {
        /// Supplied clip length
        length: f64,
        /// Minimum length the two ramps require
        required: f64,
    },

    /// Fin layout leaves no opening between ribs.
    #[error("fin layout leaves no slit: spacing {fin_spacing:.3} mm, fin width {fin_width:.3} mm")]
    SlitVanishes {
        /// Derived fin spacing
        fin_spacing: f64,
        /// Effective fin width
        fin_width: f64,
    },

    /// Hole layout does not fit the duct length.
    #[error("hole layout does not fit: length {length:.3} mm, end offset {hole_offset:.3} mm")]
    HoleLayout {
        /// Duct length
        length: f64,
        /// End inset of the outermost holes
        hole_offset: f64,
    },

    /// An outer dimension is too small to survive shelling.
    #[error("{name} is too small to shell: {value:.3} mm (needs more than {minimum:.3} mm)")]
    DimensionTooSmall {
        /// Dimension name
        name: &'static str,
        /// Supplied value
        value: f64,
        /// Minimum feasible value
        minimum: f64,
    },

    /// Engraving would pierce the cover cap.
    #[error("text_depth {depth:.3} mm must stay below the shell thickness {shell:.3} mm")]
    EngravingTooDeep {
        /// Requested engraving depth
        depth: f64,
        /// Cap thickness
        shell: f64,
    },
}

/// Result type alias for parameter resolution.
pub type ParamResult<T> = Result<T, ParamError>;
