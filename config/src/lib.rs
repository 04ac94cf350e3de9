//! # Config Crate
//!
//! Centralized configuration constants for the cable-duct pipeline.
//! All magic numbers and tunable parameters are defined here to ensure
//! consistency across crates and easy configuration management.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{EPSILON_TOLERANCE, DEFAULT_SEGMENTS};
//!
//! // Use EPSILON_TOLERANCE for floating-point comparisons
//! let value: f64 = 1.0e-12;
//! assert!(value.abs() < EPSILON_TOLERANCE * 1.0e3);
//!
//! // Use the segment default for hole tessellation
//! assert!(DEFAULT_SEGMENTS >= 12);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Millimetre Units**: Every length constant is in mm, matching the
//!   generated geometry
//! - **Well-Documented**: Every constant has clear documentation

pub mod constants;
