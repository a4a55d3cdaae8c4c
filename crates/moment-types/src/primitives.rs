//! Reference solids as triangle soups.
//!
//! These primitives are consistently wound with outward normals and are used
//! throughout the workspace as known-volume test fixtures.

use nalgebra::Point3;

use crate::Triangle;

/// Build the unit tetrahedron with vertices at the origin and the three
/// axis unit points.
///
/// Wound with outward normals, so its signed volume is `+1/6`.
///
/// # Example
///
/// ```
/// use moment_types::unit_tetrahedron;
///
/// let tet = unit_tetrahedron();
/// assert_eq!(tet.len(), 4);
/// ```
#[must_use]
pub fn unit_tetrahedron() -> Vec<Triangle> {
    let o = Point3::new(0.0, 0.0, 0.0);
    let px = Point3::new(1.0, 0.0, 0.0);
    let py = Point3::new(0.0, 1.0, 0.0);
    let pz = Point3::new(0.0, 0.0, 1.0);

    vec![
        // Base (z=0), normal -Z
        Triangle::new(o, py, px),
        // Side (y=0), normal -Y
        Triangle::new(o, px, pz),
        // Side (x=0), normal -X
        Triangle::new(o, pz, py),
        // Slanted face, normal (1,1,1)/sqrt(3)
        Triangle::new(px, py, pz),
    ]
}

/// Build the unit cube with corners at 0 and 1 on each axis.
///
/// Twelve triangles, two per face, CCW winding when viewed from outside.
/// Signed volume is `+1`.
///
/// # Example
///
/// ```
/// use moment_types::unit_cube;
///
/// let cube = unit_cube();
/// assert_eq!(cube.len(), 12);
/// ```
#[must_use]
pub fn unit_cube() -> Vec<Triangle> {
    let p = [
        Point3::new(0.0, 0.0, 0.0), // 0
        Point3::new(1.0, 0.0, 0.0), // 1
        Point3::new(1.0, 1.0, 0.0), // 2
        Point3::new(0.0, 1.0, 0.0), // 3
        Point3::new(0.0, 0.0, 1.0), // 4
        Point3::new(1.0, 0.0, 1.0), // 5
        Point3::new(1.0, 1.0, 1.0), // 6
        Point3::new(0.0, 1.0, 1.0), // 7
    ];

    vec![
        // Bottom face (z=0) - normal points -Z
        Triangle::new(p[0], p[2], p[1]),
        Triangle::new(p[0], p[3], p[2]),
        // Top face (z=1) - normal points +Z
        Triangle::new(p[4], p[5], p[6]),
        Triangle::new(p[4], p[6], p[7]),
        // Front face (y=0) - normal points -Y
        Triangle::new(p[0], p[1], p[5]),
        Triangle::new(p[0], p[5], p[4]),
        // Back face (y=1) - normal points +Y
        Triangle::new(p[3], p[7], p[6]),
        Triangle::new(p[3], p[6], p[2]),
        // Left face (x=0) - normal points -X
        Triangle::new(p[0], p[4], p[7]),
        Triangle::new(p[0], p[7], p[3]),
        // Right face (x=1) - normal points +X
        Triangle::new(p[1], p[2], p[6]),
        Triangle::new(p[1], p[6], p[5]),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Signed volume by summing origin tetrahedra, independent of the
    /// moment engine.
    fn signed_volume(triangles: &[Triangle]) -> f64 {
        triangles
            .iter()
            .map(|t| t.v0.coords.dot(&t.v1.coords.cross(&t.v2.coords)) / 6.0)
            .sum()
    }

    #[test]
    fn tetrahedron_is_outward_wound() {
        let tet = unit_tetrahedron();
        assert!((signed_volume(&tet) - 1.0 / 6.0).abs() < 1e-12);
    }

    #[test]
    fn cube_is_outward_wound() {
        let cube = unit_cube();
        assert!((signed_volume(&cube) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn cube_faces_have_unit_area_halves() {
        let cube = unit_cube();
        for tri in &cube {
            assert!((tri.area() - 0.5).abs() < 1e-12);
        }
    }
}
