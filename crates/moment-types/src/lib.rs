//! Core geometry types for geometric moment computation.
//!
//! This crate provides the foundational types shared by the moment engine
//! and the mesh ingestion crate:
//!
//! - [`Triangle`] - An ordered vertex triple with concrete positions
//! - [`unit_tetrahedron`] / [`unit_cube`] - Reference solids as triangle soups
//!
//! A *mesh* in this workspace is simply an ordered slice of triangles
//! (`&[Triangle]`) forming the closed boundary of a solid. No indexing or
//! connectivity is stored; moment evaluation only ever needs the vertex
//! positions of each triangle.
//!
//! # Coordinate System
//!
//! Uses a **right-handed coordinate system**. Triangle winding is
//! counter-clockwise when viewed from outside; normals point outward by the
//! right-hand rule. The winding is significant: reversing it flips the sign
//! of the enclosed volume and of every moment derived from it.
//!
//! # Units
//!
//! Unit-agnostic. All coordinates are `f64`.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod primitives;
mod triangle;

pub use primitives::{unit_cube, unit_tetrahedron};
pub use triangle::Triangle;

// Re-export nalgebra types for convenience
pub use nalgebra::{Point3, Vector3};
