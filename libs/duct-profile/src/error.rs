//! # Profile Errors
//!
//! Error types for 2D profile construction.

use duct_params::ParamError;
use thiserror::Error;

/// Errors raised while building cross-section profiles.
#[derive(Debug, Error, PartialEq)]
pub enum ProfileError {
    /// Parameter validation failure surfaced by a profile builder.
    #[error(transparent)]
    Param(#[from] ParamError),

    /// A polygon with fewer than three distinct vertices.
    #[error("profile needs at least 3 distinct vertices, got {points}")]
    Degenerate {
        /// Number of distinct vertices supplied
        points: usize,
    },

    /// A polygon whose vertices enclose no area.
    #[error("profile encloses no area")]
    ZeroArea,
}

/// Result type alias for profile construction.
pub type ProfileResult<T> = Result<T, ProfileError>;
