//! Exact geometric moments and shape signature vectors of triangulated
//! solids.
//!
//! Given a closed, consistently oriented triangle mesh, this crate computes
//! volume integrals of monomials `x^i y^j z^k` over the enclosed solid —
//! exactly, via a divergence-theorem reduction to closed-form per-triangle
//! flux integrals — and composes them into:
//!
//! - [`volume`] and [`centroid`] of the solid
//! - arbitrary raw, central, and scale-normalized moments ([`moment()`])
//! - the Shape Signature Vector ([`build_ssv`]), a fixed-order concatenation
//!   of translation- and scale-invariant moments used as a compact shape
//!   descriptor for comparison without simulation
//!
//! # Example
//!
//! ```
//! use moment_types::unit_tetrahedron;
//! use geom_moments::{build_ssv, volume};
//!
//! let tet = unit_tetrahedron();
//! assert!((volume(&tet) - 1.0 / 6.0).abs() < 1e-12);
//!
//! let ssv = build_ssv(&tet, 2);
//! assert_eq!(ssv.len(), 7);
//! ```
//!
//! # Orientation
//!
//! Every moment's sign follows mesh winding: an inward-wound mesh produces
//! the negated value. The engine does not detect or fix orientation; see
//! [`validate()`] for an explicit opt-in check.
//!
//! # Exactness
//!
//! The `degree` argument of [`moment()`] is a caller contract: results are
//! exact (up to f64 rounding) only when `degree >= i + j + k`. Supplying a
//! smaller degree truncates the expansion for a cheaper, approximate value
//! and is intentionally not an error.
//!
//! # File input
//!
//! `*_from_file` variants ingest a triangulated surface file through
//! [`moment_io`] and fail before evaluation if the file is unreadable, in an
//! unsupported format, or empty.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod error;
mod moment;
mod poly;
mod ssv;
mod validate;

pub use error::{MomentError, MomentResult};
pub use moment::{centroid, moment, moment_from_file, volume};
pub use ssv::{build_ssv, ssv_from_file, ssv_len};
pub use validate::{validate, ValidationOptions, ValidationReport};

// Re-export the foundation crates so most users need only this one
pub use moment_io as io;
pub use moment_types as types;

/// Common imports for moment computation.
///
/// ```
/// use geom_moments::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{build_ssv, centroid, moment, ssv_len, validate, volume};
    pub use moment_types::{Point3, Triangle, Vector3};
}

use std::path::Path;

use moment_types::Triangle;
use tracing::info;

/// Load a surface file, rejecting empty parses before any evaluation.
pub(crate) fn load_surface<P: AsRef<Path>>(path: P) -> MomentResult<Vec<Triangle>> {
    let path = path.as_ref();
    let triangles = moment_io::load_triangles(path)?;
    if triangles.is_empty() {
        return Err(MomentError::EmptyMesh {
            path: path.to_path_buf(),
        });
    }
    info!(
        path = %path.display(),
        triangles = triangles.len(),
        "loaded surface"
    );
    Ok(triangles)
}
