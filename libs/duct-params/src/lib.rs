//! # Duct Params
//!
//! Parameter resolution for the cable-duct generator.
//!
//! ## Architecture
//!
//! ```text
//! DuctParams (user input) → validate → Derived (closed-form quantities)
//! ```
//!
//! Everything downstream of this crate assumes a validated parameter set:
//! the profile and solid builders never re-derive spacing arithmetic and
//! never see an infeasible geometry. All validation failures are fatal by
//! design; producing malformed geometry silently would be worse than
//! stopping.

pub mod derived;
pub mod error;
pub mod params;

pub use derived::Derived;
pub use error::ParamError;
pub use params::{CoverEdge, DuctParams, Part};
