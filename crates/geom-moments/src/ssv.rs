//! Shape Signature Vector construction.
//!
//! The SSV concatenates moment invariants across orders into a compact
//! descriptor for shape comparison. Order 0 contributes the raw volume;
//! order 1 is skipped entirely (first moments about the centroid vanish and
//! carry no shape information); every order `s >= 2` contributes one
//! translation- and scale-invariant moment per exponent triple
//! `(i, j, k)` with `i + j + k = s`.
//!
//! The enumeration order is fixed and positional: `i` ascends from 0 to
//! `s`, `j` ascends from 0 to `s - i`, and `k = s - i - j`. Downstream
//! consumers index into the vector by this order.

use std::path::Path;

#[cfg(feature = "parallel")]
use rayon::prelude::*;
use tracing::debug;

use moment_types::Triangle;

use crate::error::MomentResult;
use crate::load_surface;
use crate::moment::moment;

/// Length of the SSV for a given maximum order.
///
/// Each included order `s` contributes `(s + 1)(s + 2) / 2` terms; order 1
/// contributes none.
///
/// # Example
///
/// ```
/// use geom_moments::ssv_len;
///
/// assert_eq!(ssv_len(0), 1);
/// assert_eq!(ssv_len(1), 1); // order 1 is excluded
/// assert_eq!(ssv_len(2), 7);
/// ```
#[must_use]
pub fn ssv_len(max_order: u32) -> usize {
    (0..=max_order)
        .filter(|&s| s != 1)
        .map(|s| ((s + 1) * (s + 2) / 2) as usize)
        .sum()
}

/// Build the Shape Signature Vector of the solid enclosed by `triangles`.
///
/// Every triple at order `s` is evaluated with exactness degree `s`. The
/// single order-0 term is the raw (unnormalized) volume; all higher-order
/// terms are central, volume-scaled moments, invariant under translation
/// and uniform scaling of the mesh.
///
/// The mesh preconditions of [`crate::moment`] apply: a closed,
/// consistently outward-wound surface. An inward winding makes the signed
/// volume negative and the scaled terms NaN.
///
/// # Example
///
/// ```
/// use moment_types::unit_cube;
/// use geom_moments::{build_ssv, ssv_len};
///
/// let cube = unit_cube();
/// let ssv = build_ssv(&cube, 2);
/// assert_eq!(ssv.len(), ssv_len(2));
/// assert!((ssv[0] - 1.0).abs() < 1e-12); // raw volume first
/// ```
#[must_use]
pub fn build_ssv(triangles: &[Triangle], max_order: u32) -> Vec<f64> {
    let mut ssv = Vec::with_capacity(ssv_len(max_order));

    for s in 0..=max_order {
        if s == 1 {
            // First moments vanish about the centroid; not discriminative
            continue;
        }

        let mut combinations = Vec::with_capacity(((s + 1) * (s + 2) / 2) as usize);
        for i in 0..=s {
            for j in 0..=(s - i) {
                combinations.push((i, j, s - i - j));
            }
        }

        let evaluate = |&(i, j, k): &(u32, u32, u32)| {
            if s == 0 {
                // The raw volume, included verbatim
                moment(triangles, i, j, k, s, false, false)
            } else {
                moment(triangles, i, j, k, s, true, true)
            }
        };

        #[cfg(feature = "parallel")]
        let values: Vec<f64> = combinations.par_iter().map(evaluate).collect();
        #[cfg(not(feature = "parallel"))]
        let values: Vec<f64> = combinations.iter().map(evaluate).collect();

        debug!(order = s, terms = values.len(), "evaluated SSV order");
        ssv.extend(values);
    }

    ssv
}

/// Build the SSV from a surface file.
///
/// # Errors
///
/// Returns [`crate::MomentError`] on ingestion failure or an empty surface;
/// no evaluation happens in that case.
pub fn ssv_from_file<P: AsRef<Path>>(path: P, max_order: u32) -> MomentResult<Vec<f64>> {
    let triangles = load_surface(path)?;
    Ok(build_ssv(&triangles, max_order))
}
