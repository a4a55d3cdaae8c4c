//! Moment evaluation for triangulated solids.
//!
//! The volume integral of a monomial is reduced to a per-triangle surface
//! sum with the divergence theorem. For `f = x^i y^j z^k` of total degree
//! `s = i + j + k`, the field `F = r * f / (s + 3)` satisfies
//! `div F = f`, so
//!
//! ```text
//! \iiint f dV = 1/(s+3) \oint f (r . n) dA
//! ```
//!
//! On a flat triangle `r . n` is constant and equals `v0 . n`, and with the
//! barycentric parametrization `r(u, v) = v0 + u*e1 + v*e2` the area element
//! absorbs the normal's magnitude. Each triangle therefore contributes
//!
//! ```text
//! (v0 . N) / (s+3) * \int_0^1 \int_0^{1-u} f(r(u, v)) dv du
//! ```
//!
//! with `N = e1 x e2` unnormalized. The inner integral is a polynomial in
//! `(u, v)` and is evaluated in closed form (see the `poly` module), so the
//! whole reduction is exact up to f64 rounding whenever the requested
//! exactness degree covers the monomial.

use std::path::Path;

use moment_types::{Point3, Triangle};

use crate::error::MomentResult;
use crate::load_surface;
use crate::poly::{factorial_table, TriPoly};

/// Compute the geometric moment of the solid enclosed by `triangles`.
///
/// Evaluates `\iiint x^i y^j z^k dV` over the volume bounded by the mesh,
/// optionally centered on the solid's own centroid and/or nondimensionalized
/// by a power of the volume.
///
/// # Preconditions (documented, not checked)
///
/// - The mesh must be closed and consistently oriented; open or degenerate
///   meshes yield unreliable values, not errors. Use [`crate::validate()`]
///   for an explicit check.
/// - `degree` must be at least `i + j + k` for an exact result. A smaller
///   `degree` truncates the polynomial expansion and returns a cheaper,
///   deliberately inexact value; it is never auto-corrected.
///
/// # Normalization
///
/// - `center`: evaluate the monomial about the mesh centroid instead of the
///   origin (translation-invariant central moment). The centroid is located
///   from the raw zeroth and first moments before integrating.
/// - `scale`: divide the result by `volume^(1 + s/3)` so that a monomial of
///   total degree `s` becomes dimensionless (size-invariant). With an
///   inward-wound mesh the signed volume is negative and this fractional
///   power is NaN; fixing orientation is the caller's responsibility.
///
/// The sign of the result follows mesh winding: reversing every triangle's
/// winding negates it, while reordering the triangle list leaves it
/// unchanged.
///
/// # Example
///
/// ```
/// use moment_types::unit_tetrahedron;
/// use geom_moments::moment;
///
/// let tet = unit_tetrahedron();
/// let volume = moment(&tet, 0, 0, 0, 0, false, false);
/// assert!((volume - 1.0 / 6.0).abs() < 1e-12);
/// ```
#[must_use]
pub fn moment(
    triangles: &[Triangle],
    i: u32,
    j: u32,
    k: u32,
    degree: u32,
    center: bool,
    scale: bool,
) -> f64 {
    let origin = if center {
        centroid(triangles)
    } else {
        Point3::origin()
    };

    let m = raw_moment(triangles, i, j, k, degree, &origin);

    if scale {
        let v = raw_moment(triangles, 0, 0, 0, 0, &Point3::origin());
        let s = f64::from(i + j + k);
        m / v.powf(1.0 + s / 3.0)
    } else {
        m
    }
}

/// Compute a moment from a surface file.
///
/// Delegates ingestion to [`moment_io`] and fails before any evaluation if
/// the file is unreadable, not a supported format, or contains no triangles.
///
/// # Errors
///
/// Returns [`crate::MomentError`] on ingestion failure or an empty surface.
pub fn moment_from_file<P: AsRef<Path>>(
    path: P,
    i: u32,
    j: u32,
    k: u32,
    degree: u32,
    center: bool,
    scale: bool,
) -> MomentResult<f64> {
    let triangles = load_surface(path)?;
    Ok(moment(&triangles, i, j, k, degree, center, scale))
}

/// Signed volume of the enclosed solid.
///
/// Shorthand for `moment(triangles, 0, 0, 0, 0, false, false)`. Positive for
/// outward winding, negative for inward.
#[must_use]
pub fn volume(triangles: &[Triangle]) -> f64 {
    moment(triangles, 0, 0, 0, 0, false, false)
}

/// Centroid of the enclosed solid.
///
/// Each coordinate is the ratio of a first moment to the volume, with the
/// exactness degree set to the exponent sum (1) as the moment protocol
/// requires. For an empty or open mesh the result is unreliable (possibly
/// NaN), matching the engine's contract.
#[must_use]
pub fn centroid(triangles: &[Triangle]) -> Point3<f64> {
    let origin = Point3::origin();
    let v = raw_moment(triangles, 0, 0, 0, 0, &origin);
    Point3::new(
        raw_moment(triangles, 1, 0, 0, 1, &origin) / v,
        raw_moment(triangles, 0, 1, 0, 1, &origin) / v,
        raw_moment(triangles, 0, 0, 1, 1, &origin) / v,
    )
}

/// Evaluate the raw moment about `origin`.
///
/// This is the flux-sum core: every public moment entry point funnels here.
fn raw_moment(
    triangles: &[Triangle],
    i: u32,
    j: u32,
    k: u32,
    degree: u32,
    origin: &Point3<f64>,
) -> f64 {
    let deg = degree as usize;
    let factorial = factorial_table(deg + 2);
    let s = i + j + k;

    let mut acc = 0.0;
    for tri in triangles {
        let a = tri.v0 - origin;
        let e1 = tri.v1 - tri.v0;
        let e2 = tri.v2 - tri.v0;
        let n = e1.cross(&e2);

        // r . n is constant over the triangle's plane
        let flux = a.dot(&n);

        let px = TriPoly::linear_pow(deg, a.x, e1.x, e2.x, i);
        let py = TriPoly::linear_pow(deg, a.y, e1.y, e2.y, j);
        let pz = TriPoly::linear_pow(deg, a.z, e1.z, e2.z, k);
        let integrand = px.mul(&py).mul(&pz);

        acc += flux * integrand.integrate(&factorial);
    }

    acc / f64::from(s + 3)
}
