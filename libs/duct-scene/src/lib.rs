//! # Duct Scene
//!
//! CSG solid tree construction for the cable-duct generator.
//!
//! ## Architecture
//!
//! ```text
//! DuctParams → Derived → Region (duct-profile) → Solid tree → Assembly
//! ```
//!
//! The [`Solid`] tree is the evaluated geometry IR: every node carries
//! concrete, resolved parameters and is ready for mesh generation by the
//! kernel crate. Data flows strictly forward; nothing here touches a mesh.

pub mod assembly;
pub mod cover;
pub mod duct;
pub mod error;
pub mod solid;
pub mod text;

pub use assembly::{build_assembly, Assembly, PartKind, PartSolid};
pub use error::SceneError;
pub use solid::{BooleanOp, Solid};
