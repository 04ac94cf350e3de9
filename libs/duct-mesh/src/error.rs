//! # Mesh Errors
//!
//! Error types for mesh generation and export.

use duct_scene::SceneError;
use thiserror::Error;

/// Errors that can occur during mesh generation.
#[derive(Debug, Error)]
pub enum MeshError {
    /// Scene construction error from the IR layer
    #[error(transparent)]
    Scene(#[from] SceneError),

    /// Degenerate geometry
    #[error("degenerate geometry: {message}")]
    DegenerateGeometry {
        /// What was degenerate
        message: String,
    },

    /// Invalid mesh topology
    #[error("invalid topology: {message}")]
    InvalidTopology {
        /// What went wrong
        message: String,
    },

    /// A realized part came out empty or structurally broken
    #[error("part '{part}' failed realization: {message}")]
    PartFailed {
        /// Part name
        part: &'static str,
        /// What went wrong
        message: String,
    },

    /// I/O failure while writing output files
    #[error("export failed: {0}")]
    Io(#[from] std::io::Error),
}

impl MeshError {
    /// Creates a degenerate geometry error.
    pub fn degenerate(message: impl Into<String>) -> Self {
        Self::DegenerateGeometry {
            message: message.into(),
        }
    }

    /// Creates an invalid topology error.
    pub fn invalid_topology(message: impl Into<String>) -> Self {
        Self::InvalidTopology {
            message: message.into(),
        }
    }
}

/// Result type alias for mesh operations.
pub type MeshResult<T> = Result<T, MeshError>;
