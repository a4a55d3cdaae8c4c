//! Error types for the moment engine's file-based entry points.
//!
//! In-memory evaluation is infallible by design: malformed meshes yield
//! numerically unreliable values rather than errors. Only ingestion can
//! fail, and it fails before any evaluation is attempted.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for file-based moment operations.
pub type MomentResult<T> = Result<T, MomentError>;

/// Errors that can occur before moment evaluation.
#[derive(Debug, Error)]
pub enum MomentError {
    /// The surface file could not be read or parsed.
    #[error(transparent)]
    Ingestion(#[from] moment_io::IoError),

    /// The surface file parsed successfully but contains no triangles.
    #[error("surface file {path} contains no triangles")]
    EmptyMesh {
        /// Path of the offending file.
        path: PathBuf,
    },
}
