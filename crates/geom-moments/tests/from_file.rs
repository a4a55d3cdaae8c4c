//! File-based entry points: ingestion must succeed or fail before any
//! moment evaluation.

#![allow(clippy::unwrap_used)]

use std::fmt::Write as _;
use std::path::PathBuf;

use approx::assert_relative_eq;
use geom_moments::{moment_from_file, ssv_from_file, volume, MomentError};
use moment_types::{unit_tetrahedron, Triangle};

/// Write the triangles as an ASCII STL file and return its path.
fn write_ascii_stl(dir: &tempfile::TempDir, name: &str, triangles: &[Triangle]) -> PathBuf {
    let mut stl = String::from("solid test\n");
    for tri in triangles {
        stl.push_str("  facet normal 0 0 0\n    outer loop\n");
        for v in tri.vertices() {
            writeln!(stl, "      vertex {} {} {}", v.x, v.y, v.z).unwrap();
        }
        stl.push_str("    endloop\n  endfacet\n");
    }
    stl.push_str("endsolid test\n");

    let path = dir.path().join(name);
    std::fs::write(&path, stl).unwrap();
    path
}

#[test]
fn volume_from_file_matches_in_memory_volume() {
    let tet = unit_tetrahedron();
    let dir = tempfile::tempdir().unwrap();
    let path = write_ascii_stl(&dir, "tet.stl", &tet);

    let v = moment_from_file(&path, 0, 0, 0, 0, false, false).unwrap();
    assert_relative_eq!(v, volume(&tet), epsilon = 1e-12);
}

#[test]
fn centroid_protocol_from_file() {
    let tet = unit_tetrahedron();
    let dir = tempfile::tempdir().unwrap();
    let path = write_ascii_stl(&dir, "tet.stl", &tet);

    let v = moment_from_file(&path, 0, 0, 0, 0, false, false).unwrap();
    let cx = moment_from_file(&path, 1, 0, 0, 1, false, false).unwrap() / v;
    assert_relative_eq!(cx, 0.25, epsilon = 1e-12);
}

#[test]
fn ssv_from_file_matches_in_memory_ssv() {
    let tet = unit_tetrahedron();
    let dir = tempfile::tempdir().unwrap();
    let path = write_ascii_stl(&dir, "tet.stl", &tet);

    let from_file = ssv_from_file(&path, 2).unwrap();
    let in_memory = geom_moments::build_ssv(&tet, 2);
    assert_eq!(from_file.len(), in_memory.len());
    for (a, b) in from_file.iter().zip(&in_memory) {
        assert_relative_eq!(*a, *b, epsilon = 1e-10);
    }
}

#[test]
fn empty_surface_file_is_rejected_before_evaluation() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("empty.stl");
    std::fs::write(&path, "solid empty\nendsolid empty\n").unwrap();

    let result = moment_from_file(&path, 0, 0, 0, 0, false, false);
    assert!(matches!(result, Err(MomentError::EmptyMesh { .. })));

    let result = ssv_from_file(&path, 2);
    assert!(matches!(result, Err(MomentError::EmptyMesh { .. })));
}

#[test]
fn unsupported_format_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("surface.obj");
    std::fs::write(&path, "v 0 0 0\n").unwrap();

    let result = moment_from_file(&path, 0, 0, 0, 0, false, false);
    assert!(matches!(result, Err(MomentError::Ingestion(_))));
}

#[test]
fn missing_file_is_rejected() {
    let result = ssv_from_file("definitely_missing_410.stl", 2);
    assert!(matches!(result, Err(MomentError::Ingestion(_))));
}
