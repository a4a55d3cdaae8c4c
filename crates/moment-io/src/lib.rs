//! Triangulated surface file ingestion.
//!
//! This crate converts a surface file into the flat triangle soup consumed
//! by the moment engine. Currently STL (binary and ASCII) is supported;
//! other extensions fail with [`IoError::UnknownFormat`] before any
//! evaluation is attempted.
//!
//! # Example
//!
//! ```no_run
//! use moment_io::load_triangles;
//!
//! let triangles = load_triangles("hull.stl").unwrap();
//! assert!(!triangles.is_empty());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod error;
mod stl;

pub use error::{IoError, IoResult};
pub use stl::load_stl;

use std::path::Path;

use moment_types::Triangle;

/// Supported surface file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SurfaceFormat {
    /// STL (Stereolithography), binary or ASCII.
    Stl,
}

impl SurfaceFormat {
    /// Detect format from file extension.
    ///
    /// Returns `None` if the extension is not recognized.
    #[must_use]
    pub fn from_path<P: AsRef<Path>>(path: P) -> Option<Self> {
        let ext = path.as_ref().extension()?.to_str()?.to_lowercase();
        match ext.as_str() {
            "stl" => Some(Self::Stl),
            _ => None,
        }
    }
}

/// Load the triangles of a surface file, detecting format from extension.
///
/// # Errors
///
/// Returns an error if:
/// - The file format cannot be determined from the extension
/// - The file cannot be read
/// - The file content is invalid for the detected format
///
/// # Example
///
/// ```no_run
/// use moment_io::load_triangles;
///
/// let triangles = load_triangles("hull.stl").unwrap();
/// ```
pub fn load_triangles<P: AsRef<Path>>(path: P) -> IoResult<Vec<Triangle>> {
    let path = path.as_ref();
    let format = SurfaceFormat::from_path(path).ok_or_else(|| IoError::UnknownFormat {
        extension: path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("(none)")
            .to_string(),
    })?;

    match format {
        SurfaceFormat::Stl => load_stl(path),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_from_path_stl() {
        assert_eq!(SurfaceFormat::from_path("hull.stl"), Some(SurfaceFormat::Stl));
        assert_eq!(SurfaceFormat::from_path("hull.STL"), Some(SurfaceFormat::Stl));
        assert_eq!(
            SurfaceFormat::from_path("/path/to/hull.stl"),
            Some(SurfaceFormat::Stl)
        );
    }

    #[test]
    fn format_from_path_unknown() {
        assert_eq!(SurfaceFormat::from_path("hull.obj"), None);
        assert_eq!(SurfaceFormat::from_path("hull"), None);
        assert_eq!(SurfaceFormat::from_path(""), None);
    }

    #[test]
    fn load_triangles_rejects_unknown_extension() {
        let result = load_triangles("hull.xyz");
        assert!(matches!(result, Err(IoError::UnknownFormat { .. })));
    }
}
