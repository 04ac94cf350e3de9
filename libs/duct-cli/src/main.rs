//! Cable-duct generator CLI.
//!
//! Resolves a parameter set from flags or a JSON file, runs the geometry
//! pipeline and writes one STL per emitted body.
//!
//! # Usage
//!
//! ```text
//! cable-duct --length 120 --fin-count 10 --text LABEL --out-dir prints/
//! cable-duct --params duct.json --ascii
//! ```

use anyhow::{bail, Context, Result};
use clap::Parser;
use duct_mesh::export::save_stl;
use duct_params::{CoverEdge, DuctParams, Part};
use std::fs;
use std::path::PathBuf;

/// Parametric cable duct and snap-fit cover generator.
///
/// All dimensions are millimetres. Without flags the reference duct is
/// generated: 100 × 15 × 15 mm, 8 fins, 3 mounting holes.
#[derive(Debug, Parser)]
#[command(name = "cable-duct", version)]
struct Cli {
    /// Read the full parameter set from a JSON file instead of flags
    #[arg(long, value_name = "FILE")]
    params: Option<PathBuf>,

    /// Duct length along the extrusion axis
    #[arg(long)]
    length: Option<f64>,
    /// Outer duct width
    #[arg(long)]
    width: Option<f64>,
    /// Outer duct height
    #[arg(long)]
    height: Option<f64>,
    /// Wall and floor thickness
    #[arg(long)]
    shell: Option<f64>,

    /// Number of slots along the duct
    #[arg(long)]
    fin_count: Option<u32>,
    /// Width of the rib between slots
    #[arg(long)]
    fin_width: Option<f64>,
    /// Resize fins so ribs and slits are equally wide
    #[arg(long)]
    fin_resize: bool,

    /// Number of mounting holes
    #[arg(long)]
    hole_count: Option<u32>,
    /// Mounting hole diameter
    #[arg(long)]
    hole_diameter: Option<f64>,
    /// Distance of the outermost holes from the duct ends
    #[arg(long)]
    hole_offset: Option<f64>,

    /// Clip length along the wall
    #[arg(long)]
    mf_length: Option<f64>,
    /// Clip ramp angle in degrees, (0, 90]
    #[arg(long)]
    mf_angle: Option<f64>,
    /// Clip depth into the wall
    #[arg(long)]
    mf_depth: Option<f64>,
    /// Clip distance below the duct top edge
    #[arg(long)]
    mf_top_offset: Option<f64>,

    /// Snap-fit clearance between duct and cover
    #[arg(long)]
    tolerance: Option<f64>,
    /// Cover sits flush with the duct walls
    #[arg(long)]
    flush_width: bool,
    /// Cover end ribs recess into the duct ends
    #[arg(long)]
    flush_length: bool,
    /// End-stop ribs: none, one or both
    #[arg(long)]
    cover_edge: Option<CoverEdge>,

    /// Engrave this text into the cover cap
    #[arg(long)]
    text: Option<String>,
    /// Engraving depth
    #[arg(long)]
    text_depth: Option<f64>,
    /// Glyph scale factor
    #[arg(long)]
    text_scale: Option<f64>,

    /// Which bodies to emit: duct, cover or both
    #[arg(long)]
    part: Option<Part>,

    /// Output directory for the STL files
    #[arg(long, default_value = ".")]
    out_dir: PathBuf,
    /// Write ASCII STL instead of binary
    #[arg(long)]
    ascii: bool,
}

impl Cli {
    /// True when any dimension flag was given explicitly.
    fn has_dimension_flags(&self) -> bool {
        self.length.is_some()
            || self.width.is_some()
            || self.height.is_some()
            || self.shell.is_some()
            || self.fin_count.is_some()
            || self.fin_width.is_some()
            || self.hole_count.is_some()
            || self.hole_diameter.is_some()
            || self.hole_offset.is_some()
            || self.mf_length.is_some()
            || self.mf_angle.is_some()
            || self.mf_depth.is_some()
            || self.mf_top_offset.is_some()
            || self.tolerance.is_some()
            || self.cover_edge.is_some()
            || self.text.is_some()
            || self.text_depth.is_some()
            || self.text_scale.is_some()
            || self.part.is_some()
    }

    /// Builds the parameter set from flags over the defaults, or loads it
    /// from the JSON file.
    fn into_params(self) -> Result<DuctParams> {
        if let Some(path) = &self.params {
            if self.has_dimension_flags() {
                bail!("--params is exclusive with the dimension flags");
            }
            let text = fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            return serde_json::from_str(&text)
                .with_context(|| format!("parsing {}", path.display()));
        }

        let defaults = DuctParams::default();
        Ok(DuctParams {
            length: self.length.unwrap_or(defaults.length),
            width: self.width.unwrap_or(defaults.width),
            height: self.height.unwrap_or(defaults.height),
            shell: self.shell.unwrap_or(defaults.shell),
            fin_count: self.fin_count.unwrap_or(defaults.fin_count),
            fin_width: self.fin_width.unwrap_or(defaults.fin_width),
            fin_resize: self.fin_resize,
            hole_count: self.hole_count.unwrap_or(defaults.hole_count),
            hole_diameter: self.hole_diameter.unwrap_or(defaults.hole_diameter),
            hole_offset: self.hole_offset.unwrap_or(defaults.hole_offset),
            mf_length: self.mf_length.unwrap_or(defaults.mf_length),
            mf_angle: self.mf_angle.unwrap_or(defaults.mf_angle),
            mf_depth: self.mf_depth.unwrap_or(defaults.mf_depth),
            mf_top_offset: self.mf_top_offset.unwrap_or(defaults.mf_top_offset),
            tolerance: self.tolerance.unwrap_or(defaults.tolerance),
            cover_flush_width: self.flush_width,
            cover_flush_length: self.flush_length,
            cover_edge: self.cover_edge.unwrap_or(defaults.cover_edge),
            text: self.text,
            text_depth: self.text_depth.unwrap_or(defaults.text_depth),
            text_scale: self.text_scale.unwrap_or(defaults.text_scale),
            part: self.part.unwrap_or(defaults.part),
        })
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let out_dir = cli.out_dir.clone();
    let ascii = cli.ascii;
    let params = cli.into_params()?;

    log::info!("generating part(s): {}", params.part);
    let parts = duct_mesh::generate(&params).context("geometry generation failed")?;

    fs::create_dir_all(&out_dir)
        .with_context(|| format!("creating {}", out_dir.display()))?;

    for part in &parts {
        let path = out_dir.join(format!("{}.stl", part.kind.name()));
        save_stl(&part.mesh, part.kind.name(), &path, !ascii)
            .with_context(|| format!("writing {}", path.display()))?;
        println!(
            "{}: {} triangles -> {}",
            part.kind.name(),
            part.mesh.triangle_count(),
            path.display()
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_without_flags() {
        let cli = Cli::parse_from(["cable-duct"]);
        let params = cli.into_params().expect("defaults build");
        assert_eq!(params, DuctParams::default());
    }

    #[test]
    fn flags_override_single_fields() {
        let cli = Cli::parse_from([
            "cable-duct",
            "--length",
            "200",
            "--fin-count",
            "12",
            "--part",
            "cover",
            "--cover-edge",
            "both",
        ]);
        let params = cli.into_params().expect("builds");
        assert_eq!(params.length, 200.0);
        assert_eq!(params.fin_count, 12);
        assert_eq!(params.part, Part::Cover);
        assert_eq!(params.cover_edge, CoverEdge::Both);
        // Untouched fields keep their defaults.
        assert_eq!(params.width, DuctParams::default().width);
    }

    #[test]
    fn params_file_conflicts_with_dimension_flags() {
        let cli = Cli::parse_from(["cable-duct", "--params", "x.json", "--length", "50"]);
        assert!(cli.into_params().is_err());
    }

    #[test]
    fn bad_enum_values_are_rejected_at_parse_time() {
        assert!(Cli::try_parse_from(["cable-duct", "--part", "lid"]).is_err());
        assert!(Cli::try_parse_from(["cable-duct", "--cover-edge", "three"]).is_err());
    }
}
