//! # Duct Mesh
//!
//! Mesh generation for the cable-duct generator. Converts the solid IR
//! from `duct-scene` into triangle meshes and writes them as STL.
//!
//! ## Architecture
//!
//! ```text
//! duct-scene (Solid IR) → duct-mesh (Mesh) → STL
//! ```
//!
//! ## Algorithms
//!
//! All algorithms are pure Rust, no native dependencies:
//! - **Boolean Operations**: BSP trees (csg.js algorithm)
//! - **Cap Triangulation**: Ear clipping
//! - **Primitives**: Linear extrusion, capped cylinder
//!
//! ## Usage
//!
//! ```rust
//! use duct_mesh::generate;
//! use duct_params::DuctParams;
//!
//! let parts = generate(&DuctParams::default()).expect("defaults generate");
//! assert_eq!(parts.len(), 2);
//! ```

pub mod error;
pub mod export;
pub mod from_ir;
pub mod mesh;
pub mod ops;
pub mod primitives;

pub use error::MeshError;
pub use from_ir::{realize_assembly, PartMesh};
pub use mesh::Mesh;
pub use ops::boolean::{difference, union};

use duct_params::DuctParams;

/// Generates the requested bodies from a parameter set.
///
/// This is the main entry point of the pipeline: parameters are resolved
/// and validated, the solid trees are built and the meshes realized. Any
/// failure along the way aborts the whole run.
///
/// # Example
///
/// ```rust
/// use duct_mesh::generate;
/// use duct_params::{DuctParams, Part};
///
/// let params = DuctParams {
///     part: Part::Duct,
///     ..DuctParams::default()
/// };
/// let parts = generate(&params).expect("feasible parameters");
/// assert_eq!(parts.len(), 1);
/// assert!(parts[0].mesh.triangle_count() > 0);
/// ```
pub fn generate(params: &DuctParams) -> Result<Vec<PartMesh>, MeshError> {
    let assembly = duct_scene::build_assembly(params)?;
    realize_assembly(&assembly)
}
