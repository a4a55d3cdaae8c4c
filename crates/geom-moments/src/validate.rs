//! Explicit mesh validation.
//!
//! The moment engine never validates its input: malformed meshes produce
//! unreliable numbers, not errors. This module is the opt-in check for
//! callers who want to know whether a triangle soup actually bounds a solid
//! before trusting the moments computed from it.
//!
//! Edges are paired by bit-exact vertex coordinates. That is the right
//! notion for soups coming from a single file or generator, where shared
//! vertices are bit-identical; it will report spurious boundary edges for
//! meshes whose coincident vertices differ in the last ulp.

use hashbrown::HashMap;
use moment_types::Triangle;

/// Options for mesh validation.
#[derive(Debug, Clone)]
pub struct ValidationOptions {
    /// Area threshold below which a triangle is considered degenerate.
    pub degenerate_area_threshold: f64,
}

impl Default for ValidationOptions {
    fn default() -> Self {
        Self {
            degenerate_area_threshold: 1e-12,
        }
    }
}

/// Report of mesh validation results.
#[derive(Debug, Clone, Default)]
pub struct ValidationReport {
    /// Total number of triangles.
    pub triangle_count: usize,
    /// Total number of distinct (undirected) edges.
    pub edge_count: usize,
    /// Edges used by only one triangle.
    pub boundary_edge_count: usize,
    /// Edges used by more than two triangles.
    pub non_manifold_edge_count: usize,
    /// Edges used twice but in the same direction (inconsistent winding).
    pub misoriented_edge_count: usize,
    /// Triangles with zero or near-zero area.
    pub degenerate_triangle_count: usize,
    /// Whether the surface is closed (every edge shared by exactly two
    /// triangles).
    pub is_closed: bool,
    /// Whether the surface is closed and every edge pair winds oppositely.
    pub is_consistently_oriented: bool,
}

impl ValidationReport {
    /// Check whether the mesh satisfies the moment engine's preconditions.
    #[must_use]
    pub const fn is_reliable(&self) -> bool {
        self.is_consistently_oriented && self.degenerate_triangle_count == 0
    }

    /// Check if the mesh has any issues.
    #[must_use]
    pub const fn has_issues(&self) -> bool {
        self.boundary_edge_count > 0
            || self.non_manifold_edge_count > 0
            || self.misoriented_edge_count > 0
            || self.degenerate_triangle_count > 0
    }
}

impl std::fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Surface Report:")?;
        writeln!(f, "  Triangles: {}", self.triangle_count)?;
        writeln!(f, "  Edges: {}", self.edge_count)?;
        writeln!(
            f,
            "  Closed: {}",
            if self.is_closed { "Yes" } else { "No" }
        )?;
        writeln!(
            f,
            "  Consistently oriented: {}",
            if self.is_consistently_oriented {
                "Yes"
            } else {
                "No"
            }
        )?;

        if self.has_issues() {
            writeln!(f, "  Issues:")?;
            if self.boundary_edge_count > 0 {
                writeln!(f, "    Boundary edges: {}", self.boundary_edge_count)?;
            }
            if self.non_manifold_edge_count > 0 {
                writeln!(f, "    Non-manifold edges: {}", self.non_manifold_edge_count)?;
            }
            if self.misoriented_edge_count > 0 {
                writeln!(f, "    Misoriented edges: {}", self.misoriented_edge_count)?;
            }
            if self.degenerate_triangle_count > 0 {
                writeln!(
                    f,
                    "    Degenerate triangles: {}",
                    self.degenerate_triangle_count
                )?;
            }
        }

        Ok(())
    }
}

/// Coordinate bits, used to pair edges without tolerance.
type VertexKey = [u64; 3];

fn vertex_key(p: &moment_types::Point3<f64>) -> VertexKey {
    [p.x.to_bits(), p.y.to_bits(), p.z.to_bits()]
}

/// Per-edge usage counts, split by traversal direction relative to the
/// canonical (lexicographically smaller first) key order.
#[derive(Default)]
struct EdgeUse {
    forward: u32,
    backward: u32,
}

/// Validate a triangle soup and report any issues.
///
/// # Example
///
/// ```
/// use moment_types::unit_cube;
/// use geom_moments::{validate, ValidationOptions};
///
/// let report = validate(&unit_cube(), &ValidationOptions::default());
/// assert!(report.is_closed);
/// assert!(report.is_reliable());
/// ```
#[must_use]
pub fn validate(triangles: &[Triangle], options: &ValidationOptions) -> ValidationReport {
    let mut edges: HashMap<(VertexKey, VertexKey), EdgeUse> = HashMap::new();
    let mut degenerate_triangle_count = 0;

    for tri in triangles {
        if tri.is_degenerate(options.degenerate_area_threshold) {
            degenerate_triangle_count += 1;
        }

        let [v0, v1, v2] = tri.vertices();
        for (a, b) in [(v0, v1), (v1, v2), (v2, v0)] {
            let ka = vertex_key(&a);
            let kb = vertex_key(&b);
            if ka <= kb {
                edges.entry((ka, kb)).or_default().forward += 1;
            } else {
                edges.entry((kb, ka)).or_default().backward += 1;
            }
        }
    }

    let mut boundary_edge_count = 0;
    let mut non_manifold_edge_count = 0;
    let mut misoriented_edge_count = 0;

    for usage in edges.values() {
        match usage.forward + usage.backward {
            1 => boundary_edge_count += 1,
            2 => {
                if usage.forward != 1 {
                    misoriented_edge_count += 1;
                }
            }
            _ => non_manifold_edge_count += 1,
        }
    }

    let is_closed =
        !triangles.is_empty() && boundary_edge_count == 0 && non_manifold_edge_count == 0;

    ValidationReport {
        triangle_count: triangles.len(),
        edge_count: edges.len(),
        boundary_edge_count,
        non_manifold_edge_count,
        misoriented_edge_count,
        degenerate_triangle_count,
        is_closed,
        is_consistently_oriented: is_closed && misoriented_edge_count == 0,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use moment_types::{unit_cube, unit_tetrahedron, Point3};

    #[test]
    fn cube_is_closed_and_consistent() {
        let report = validate(&unit_cube(), &ValidationOptions::default());
        assert_eq!(report.triangle_count, 12);
        assert_eq!(report.edge_count, 18);
        assert!(report.is_closed);
        assert!(report.is_consistently_oriented);
        assert!(report.is_reliable());
        assert!(!report.has_issues());
    }

    #[test]
    fn tetrahedron_is_closed_and_consistent() {
        let report = validate(&unit_tetrahedron(), &ValidationOptions::default());
        assert_eq!(report.edge_count, 6);
        assert!(report.is_consistently_oriented);
    }

    #[test]
    fn missing_triangle_opens_the_surface() {
        let mut tet = unit_tetrahedron();
        tet.pop();
        let report = validate(&tet, &ValidationOptions::default());
        assert!(!report.is_closed);
        assert_eq!(report.boundary_edge_count, 3);
    }

    #[test]
    fn flipped_triangle_is_misoriented() {
        let mut tet = unit_tetrahedron();
        tet[0] = tet[0].reversed();
        let report = validate(&tet, &ValidationOptions::default());
        // Still closed, but the flipped triangle's three edges now wind
        // the same way as their neighbors'
        assert!(report.is_closed);
        assert!(!report.is_consistently_oriented);
        assert_eq!(report.misoriented_edge_count, 3);
    }

    #[test]
    fn degenerate_triangles_are_counted() {
        let mut tet = unit_tetrahedron();
        let p = Point3::new(0.0, 0.0, 0.0);
        tet.push(Triangle::new(p, p, p));
        let report = validate(&tet, &ValidationOptions::default());
        assert_eq!(report.degenerate_triangle_count, 1);
        assert!(!report.is_reliable());
    }

    #[test]
    fn empty_soup_is_not_closed() {
        let report = validate(&[], &ValidationOptions::default());
        assert!(!report.is_closed);
        assert_eq!(report.triangle_count, 0);
    }
}
