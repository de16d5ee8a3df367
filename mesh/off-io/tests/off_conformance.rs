//! Conformance tests for the OFF/COFF file-level API.
//!
//! These run whole meshes through the disk round trip and check the
//! properties a host application relies on: identity for colorless
//! meshes, color survival within 8-bit quantization, and the header
//! winning over a mismatched file extension.
//!
//! To run: cargo test -p off-io --test off_conformance

#![allow(clippy::unwrap_used, clippy::expect_used)]

use approx::relative_eq;
use off_io::{load_off, parse_off, save_off, save_off_auto, write_off};
use polymesh::{Color, MeshColors, MeshData, Point3};
use tempfile::tempdir;

/// A closed cube with quad faces, the classic OFF example mesh.
fn cube() -> MeshData {
    MeshData::from_parts(
        vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(1.0, 1.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
            Point3::new(0.0, 0.0, 1.0),
            Point3::new(1.0, 0.0, 1.0),
            Point3::new(1.0, 1.0, 1.0),
            Point3::new(0.0, 1.0, 1.0),
        ],
        vec![
            vec![0, 3, 2, 1],
            vec![4, 5, 6, 7],
            vec![0, 1, 5, 4],
            vec![3, 7, 6, 2],
            vec![0, 4, 7, 3],
            vec![1, 2, 6, 5],
        ],
    )
}

/// Cube with every corner of every face colored uniformly per vertex.
fn colored_cube() -> MeshData {
    let mut mesh = cube();
    let palette = [
        Color::RED,
        Color::GREEN,
        Color::BLUE,
        Color::WHITE,
        Color::BLACK,
        Color::new(0.25, 0.5, 0.75),
        Color::RED,
        Color::GREEN,
    ];
    let corner_colors = mesh
        .faces
        .iter()
        .map(|face| {
            face.iter()
                .map(|&index| Some(palette[index as usize]))
                .collect()
        })
        .collect();
    mesh.colors = Some(MeshColors::PerCorner(corner_colors));
    mesh
}

#[test]
fn disk_roundtrip_off_is_identity() {
    let original = cube();
    let dir = tempdir().unwrap();
    let path = dir.path().join("cube.off");

    save_off(&original, &path, false).unwrap();
    let loaded = load_off(&path).unwrap();

    assert_eq!(loaded.faces, original.faces);
    assert_eq!(loaded.colors, None);
    for (a, b) in loaded.vertices.iter().zip(&original.vertices) {
        assert!(relative_eq!(*a, *b, epsilon = 1e-12));
    }
    assert!(loaded.validate().is_ok());
}

#[test]
fn disk_roundtrip_coff_preserves_uniform_colors() {
    let original = colored_cube();
    let dir = tempdir().unwrap();
    let path = dir.path().join("cube.coff");

    save_off_auto(&original, &path).unwrap();
    let loaded = load_off(&path).unwrap();

    assert_eq!(loaded.faces, original.faces);
    // Every corner touching a vertex had the identical color, so the
    // averaged value equals the original within 8-bit quantization.
    let Some(MeshColors::PerCorner(table)) = &original.colors else {
        panic!("fixture should carry corner colors");
    };
    let reference = &table[0];
    for (corner, &index) in original.faces[0].iter().enumerate() {
        let expected = reference[corner].unwrap();
        let got = loaded.vertex_color(index).unwrap();
        assert!((got.r - expected.r).abs() <= 1.0 / 255.0 + 1e-6);
        assert!((got.g - expected.g).abs() <= 1.0 / 255.0 + 1e-6);
        assert!((got.b - expected.b).abs() <= 1.0 / 255.0 + 1e-6);
    }
}

#[test]
fn header_wins_over_extension() {
    // COFF content saved under a plain .off name still parses as COFF.
    let dir = tempdir().unwrap();
    let path = dir.path().join("mislabeled.off");
    std::fs::write(
        &path,
        "COFF\n3 1 0\n0 0 0 255 0 0\n1 0 0 255 0 0\n0 1 0 255 0 0\n3 0 1 2\n",
    )
    .unwrap();

    let mesh = load_off(&path).unwrap();
    assert_eq!(mesh.vertex_color(0), Some(Color::RED));
    assert_eq!(mesh.vertex_color(2), Some(Color::RED));
}

#[test]
fn save_off_auto_picks_variant_from_extension() {
    let mesh = cube();
    let dir = tempdir().unwrap();

    let off_path = dir.path().join("a.off");
    save_off_auto(&mesh, &off_path).unwrap();
    assert!(std::fs::read_to_string(&off_path)
        .unwrap()
        .starts_with("OFF\n"));

    let coff_path = dir.path().join("a.coff");
    save_off_auto(&mesh, &coff_path).unwrap();
    assert!(std::fs::read_to_string(&coff_path)
        .unwrap()
        .starts_with("COFF\n"));
}

#[test]
fn load_nonexistent_file_reports_path() {
    let result = load_off("nonexistent_mesh_12345.off");
    assert!(result.is_err());
    if let Err(off_io::OffError::FileNotFound { path }) = result {
        assert!(path.to_string_lossy().contains("nonexistent"));
    }
}

#[test]
fn text_level_and_disk_level_agree() {
    let mesh = colored_cube();
    let dir = tempdir().unwrap();
    let path = dir.path().join("cube.coff");

    save_off(&mesh, &path, true).unwrap();
    let from_disk = std::fs::read_to_string(&path).unwrap();
    assert_eq!(from_disk, write_off(&mesh, true));
    assert_eq!(parse_off(&from_disk).unwrap(), load_off(&path).unwrap());
}
