//! End-to-end pipeline tests: parameters → solids → meshes → STL.

use duct_mesh::export::{save_stl, write_stl_binary};
use duct_mesh::generate;
use duct_params::{CoverEdge, DuctParams, Part};
use duct_scene::PartKind;

fn part<'a>(parts: &'a [duct_mesh::PartMesh], kind: PartKind) -> &'a duct_mesh::PartMesh {
    parts
        .iter()
        .find(|p| p.kind == kind)
        .unwrap_or_else(|| panic!("part {kind:?} missing"))
}

#[test]
fn default_parameters_generate_both_bodies() {
    let parts = generate(&DuctParams::default()).expect("defaults generate");
    assert_eq!(parts.len(), 2);
    for part in &parts {
        assert!(!part.mesh.is_empty(), "{:?} came out empty", part.kind);
        assert!(part.mesh.validate(), "{:?} has broken topology", part.kind);
    }
}

#[test]
fn duct_fills_its_parameterized_envelope() {
    let params = DuctParams::default();
    let parts = generate(&params).expect("defaults generate");
    let duct = part(&parts, PartKind::Duct);

    let (min, max) = duct.mesh.bounding_box();
    let eps = 1e-6;
    assert!((min.x + params.width / 2.0).abs() < eps);
    assert!((max.x - params.width / 2.0).abs() < eps);
    assert!(min.y.abs() < eps);
    assert!((max.y - params.height).abs() < eps);
    assert!(min.z.abs() < eps);
    assert!((max.z - params.length).abs() < eps);
}

#[test]
fn fin_slots_cut_at_the_derived_positions() {
    let params = DuctParams::default();
    let parts = generate(&params).expect("defaults generate");
    let duct = part(&parts, PartKind::Duct);

    // Slot walls appear as vertices at the slot start planes, above the
    // floor: first slot at fin_width, last slot end at length − fin_width.
    for plane_z in [3.0, 97.0] {
        assert!(
            duct.mesh
                .vertices()
                .iter()
                .any(|v| (v.z - plane_z).abs() < 1e-6 && v.y > params.shell + 0.5),
            "no slot wall at z = {plane_z}"
        );
    }
}

#[test]
fn mounting_holes_leave_rims_at_their_centres() {
    let params = DuctParams::default();
    let parts = generate(&params).expect("defaults generate");
    let duct = part(&parts, PartKind::Duct);
    let radius = params.hole_diameter / 2.0;

    for hole_z in [10.0, 50.0, 90.0] {
        let rim_vertices = duct
            .mesh
            .vertices()
            .iter()
            .filter(|v| {
                v.y > -0.2
                    && v.y < params.shell + 0.2
                    && ((v.x.powi(2) + (v.z - hole_z).powi(2)).sqrt() - radius).abs() < 0.05
            })
            .count();
        assert!(rim_vertices > 8, "no hole rim at z = {hole_z}");
    }
}

#[test]
fn holeless_duct_is_lighter() {
    let with_holes = generate(&DuctParams::default()).expect("generates");
    let without = generate(&DuctParams {
        hole_count: 0,
        ..DuctParams::default()
    })
    .expect("generates");

    let tri = |parts: &[duct_mesh::PartMesh]| part(parts, PartKind::Duct).mesh.triangle_count();
    assert!(tri(&with_holes) > tri(&without));
}

#[test]
fn part_selector_emits_exactly_what_was_asked() {
    for (selector, expected) in [(Part::Duct, 1), (Part::Cover, 1), (Part::Both, 2)] {
        let params = DuctParams {
            part: selector,
            ..DuctParams::default()
        };
        let parts = generate(&params).expect("generates");
        assert_eq!(parts.len(), expected, "selector {selector}");
    }
}

#[test]
fn printed_cover_lies_flat_beside_the_duct() {
    let params = DuctParams::default();
    let parts = generate(&params).expect("defaults generate");
    let duct = part(&parts, PartKind::Duct);
    let cover = part(&parts, PartKind::Cover);

    let (cover_min, cover_max) = cover.mesh.bounding_box();
    let (_, duct_max) = duct.mesh.bounding_box();

    // Cap on the bed, body above it, clear of the duct.
    assert!(cover_min.y.abs() < 1e-6);
    assert!(cover_max.y < params.height);
    assert!(cover_min.x > duct_max.x);
    assert!(cover_min.z.abs() < 1e-6);
}

#[test]
fn flush_width_cover_matches_the_duct_width() {
    let params = DuctParams {
        part: Part::Cover,
        cover_flush_width: true,
        ..DuctParams::default()
    };
    let parts = generate(&params).expect("generates");
    let (min, max) = part(&parts, PartKind::Cover).mesh.bounding_box();
    assert!((max.x - min.x - params.width).abs() < 1e-6);
}

#[test]
fn edge_ribs_lengthen_the_printed_cover() {
    let plain = generate(&DuctParams {
        part: Part::Cover,
        ..DuctParams::default()
    })
    .expect("generates");
    let ribbed = generate(&DuctParams {
        part: Part::Cover,
        cover_edge: CoverEdge::Both,
        ..DuctParams::default()
    })
    .expect("generates");

    let span = |parts: &[duct_mesh::PartMesh]| {
        let (min, max) = part(parts, PartKind::Cover).mesh.bounding_box();
        max.z - min.z
    };
    let overhang = 2.0 * (1.2 + 0.15);
    assert!((span(&ribbed) - span(&plain) - overhang).abs() < 1e-6);
}

#[test]
fn engraved_cover_generates() {
    let params = DuctParams {
        part: Part::Cover,
        text: Some("CABLE-1".to_string()),
        ..DuctParams::default()
    };
    let parts = generate(&params).expect("generates");
    let cover = part(&parts, PartKind::Cover);
    assert!(cover.mesh.validate());

    // Engraving carves extra geometry into the cap.
    let plain = generate(&DuctParams {
        part: Part::Cover,
        ..DuctParams::default()
    })
    .expect("generates");
    assert!(cover.mesh.triangle_count() > part(&plain, PartKind::Cover).mesh.triangle_count());
}

#[test]
fn infeasible_parameters_abort_without_output() {
    let params = DuctParams {
        mf_angle: 100.0,
        ..DuctParams::default()
    };
    assert!(generate(&params).is_err());
}

#[test]
fn binary_stl_round_trips_the_triangle_count() {
    let parts = generate(&DuctParams {
        part: Part::Duct,
        ..DuctParams::default()
    })
    .expect("generates");
    let duct = &parts[0];

    let mut buffer = Vec::new();
    write_stl_binary(&duct.mesh, &mut buffer).expect("writes");
    let count = u32::from_le_bytes([buffer[80], buffer[81], buffer[82], buffer[83]]);
    assert_eq!(count as usize, duct.mesh.triangle_count());
    assert_eq!(buffer.len(), 84 + 50 * duct.mesh.triangle_count());
}

#[test]
fn stl_files_land_on_disk() {
    let parts = generate(&DuctParams {
        part: Part::Duct,
        fin_count: 2,
        hole_count: 0,
        length: 30.0,
        ..DuctParams::default()
    })
    .expect("generates");
    let duct = &parts[0];

    let path = std::env::temp_dir().join(format!("duct-mesh-test-{}.stl", std::process::id()));
    save_stl(&duct.mesh, "duct", &path, true).expect("saves");
    let size = std::fs::metadata(&path).expect("file exists").len();
    assert_eq!(size as usize, 84 + 50 * duct.mesh.triangle_count());
    std::fs::remove_file(&path).ok();
}
