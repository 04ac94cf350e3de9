//! # Mesh Operations
//!
//! Pure-Rust algorithms realizing the solid IR:
//! - **extrude**: linear extrusion with ear-clipped caps
//! - **boolean**: BSP union/difference (csg.js discipline)

pub mod boolean;
pub mod extrude;
