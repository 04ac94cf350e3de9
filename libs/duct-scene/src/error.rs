//! # Scene Errors
//!
//! Error types for solid tree construction.

use duct_params::ParamError;
use duct_profile::ProfileError;
use thiserror::Error;

/// Errors raised while building the solid tree.
#[derive(Debug, Error, PartialEq)]
pub enum SceneError {
    /// Parameter validation failure.
    #[error(transparent)]
    Param(#[from] ParamError),

    /// Cross-section construction failure.
    #[error(transparent)]
    Profile(#[from] ProfileError),

    /// A character without a glyph in the engraving font.
    #[error("no engraving glyph for character {ch:?}")]
    UnsupportedGlyph {
        /// The offending character
        ch: char,
    },

    /// Engraved text longer than the cover can carry.
    #[error("engraving needs {needed:.1} mm but the cover offers {available:.1} mm along its length")]
    EngravingTooLong {
        /// Length the text requires
        needed: f64,
        /// Length available on the cap
        available: f64,
    },

    /// Engraved text taller than the cap is wide.
    #[error("engraving needs {needed:.1} mm but the cover offers {available:.1} mm across its width")]
    EngravingTooWide {
        /// Height the glyphs require
        needed: f64,
        /// Width available on the cap
        available: f64,
    },
}

/// Result type alias for scene construction.
pub type SceneResult<T> = Result<T, SceneError>;
