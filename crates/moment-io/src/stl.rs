//! STL (Stereolithography) file format support.
//!
//! Supports both ASCII and binary STL, producing a flat triangle soup: the
//! moment engine only needs vertex positions and winding, so no vertex
//! merging or connectivity is built.
//!
//! # Format Detection
//!
//! The loader automatically detects whether a file is ASCII or binary:
//! - ASCII files start with "solid" (after optional whitespace)
//! - Binary files have an 80-byte header followed by a facet count; a
//!   header that starts with "solid" is still treated as binary when it
//!   contains null bytes or when the declared facet count matches the
//!   file size exactly
//!
//! Multi-solid ASCII files are supported: the facets of every `solid`
//! section are concatenated into one soup.
//!
//! # Binary Format
//!
//! ```text
//! UINT8[80]    – Header (ignored)
//! UINT32       – Number of triangles
//! foreach triangle
//!     REAL32[3] – Normal vector (ignored; winding is authoritative)
//!     REAL32[3] – Vertex 1
//!     REAL32[3] – Vertex 2
//!     REAL32[3] – Vertex 3
//!     UINT16    – Attribute byte count (usually 0)
//! end
//! ```

use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use moment_types::Triangle;
use tracing::debug;

use crate::error::{IoError, IoResult};

/// STL binary header size in bytes.
const HEADER_SIZE: usize = 80;

/// Size of one facet record in binary STL (normal + 3 vertices + attribute).
const FACET_SIZE: usize = 50;

/// Load the triangles of an STL file.
///
/// Automatically detects ASCII vs binary format. The stored facet normals
/// are ignored; orientation is taken from vertex winding alone.
///
/// # Errors
///
/// Returns an error if the file cannot be read or its content is not
/// valid STL.
///
/// # Example
///
/// ```no_run
/// use moment_io::load_stl;
///
/// let triangles = load_stl("hull.stl").unwrap();
/// println!("loaded {} triangles", triangles.len());
/// ```
pub fn load_stl<P: AsRef<Path>>(path: P) -> IoResult<Vec<Triangle>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            IoError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            IoError::Io(e)
        }
    })?;

    let file_len = file.metadata()?.len();
    let mut reader = BufReader::new(file);

    // Read enough to determine format
    let mut header = [0u8; HEADER_SIZE + 4];
    let bytes_read = read_up_to(&mut reader, &mut header)?;

    if bytes_read < 6 {
        return Err(IoError::invalid_content("file too small to be valid STL"));
    }

    let header_str = String::from_utf8_lossy(&header[..bytes_read.min(HEADER_SIZE)]);
    let trimmed = header_str.trim_start();

    if trimmed.starts_with("solid") && !is_binary_stl(&header[..bytes_read], file_len) {
        // ASCII format - re-read from the start
        drop(reader);
        let file = File::open(path)?;
        load_stl_ascii(BufReader::new(file))
    } else {
        load_stl_binary_from_header(&header[..bytes_read], reader)
    }
}

/// Fill `buf` as far as the stream allows, tolerating partial reads.
///
/// Returns the number of bytes read; short only at end of file.
fn read_up_to<R: Read>(reader: &mut R, buf: &mut [u8]) -> std::io::Result<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        match reader.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == std::io::ErrorKind::Interrupted => {}
            Err(e) => return Err(e),
        }
    }
    Ok(filled)
}

/// Check if the header suggests binary STL despite starting with "solid".
///
/// Some binary STLs happen to have "solid" in the header. Two signals:
/// null bytes in the 80-byte header (ASCII prologs have none), or a
/// declared facet count that matches the file size exactly, which also
/// catches binary headers padded with spaces.
fn is_binary_stl(header: &[u8], file_len: u64) -> bool {
    if header.len() < HEADER_SIZE + 4 {
        return false;
    }
    if header[..HEADER_SIZE].contains(&0) {
        return true;
    }

    let facet_count = u32::from_le_bytes([
        header[HEADER_SIZE],
        header[HEADER_SIZE + 1],
        header[HEADER_SIZE + 2],
        header[HEADER_SIZE + 3],
    ]);
    file_len == (HEADER_SIZE + 4) as u64 + u64::from(facet_count) * FACET_SIZE as u64
}

/// Load a binary STL given the already-read header.
fn load_stl_binary_from_header<R: Read>(header: &[u8], mut reader: R) -> IoResult<Vec<Triangle>> {
    if header.len() < HEADER_SIZE + 4 {
        return Err(IoError::invalid_content("binary STL header too short"));
    }

    // Facet count is stored after the 80-byte header
    let facet_count = u32::from_le_bytes([
        header[HEADER_SIZE],
        header[HEADER_SIZE + 1],
        header[HEADER_SIZE + 2],
        header[HEADER_SIZE + 3],
    ]);

    let mut triangles = Vec::with_capacity(facet_count as usize);

    let mut facet_buf = [0u8; FACET_SIZE];
    for i in 0..facet_count {
        // read_exact tolerates the partial reads a BufReader produces at
        // its buffer boundary; only a true end of file is truncation
        reader.read_exact(&mut facet_buf).map_err(|e| {
            if e.kind() == std::io::ErrorKind::UnexpectedEof {
                IoError::TruncatedStl {
                    expected: facet_count,
                    got: i,
                }
            } else {
                IoError::Io(e)
            }
        })?;

        // Skip the stored normal (12 bytes), read the three vertices
        triangles.push(Triangle::from_arrays(
            read_vertex(&facet_buf[12..24]),
            read_vertex(&facet_buf[24..36]),
            read_vertex(&facet_buf[36..48]),
        ));
    }

    debug!(facets = triangles.len(), "loaded binary STL");
    Ok(triangles)
}

/// Read a vertex from 12 bytes (3 f32s).
fn read_vertex(buf: &[u8]) -> [f64; 3] {
    let x = f32::from_le_bytes([buf[0], buf[1], buf[2], buf[3]]);
    let y = f32::from_le_bytes([buf[4], buf[5], buf[6], buf[7]]);
    let z = f32::from_le_bytes([buf[8], buf[9], buf[10], buf[11]]);
    [f64::from(x), f64::from(y), f64::from(z)]
}

/// Load an ASCII STL file.
fn load_stl_ascii<R: BufRead>(reader: R) -> IoResult<Vec<Triangle>> {
    let mut triangles = Vec::new();
    let mut in_facet = false;
    let mut in_loop = false;
    let mut vertices: Vec<[f64; 3]> = Vec::with_capacity(3);

    for line in reader.lines() {
        let line = line?;
        let trimmed = line.trim();

        if trimmed.is_empty() {
            continue;
        }

        let parts: Vec<&str> = trimmed.split_whitespace().collect();
        match parts[0].to_lowercase().as_str() {
            "facet" => {
                // Normal follows but winding is authoritative
                in_facet = true;
            }
            "outer" => {
                if parts.len() >= 2 && parts[1].eq_ignore_ascii_case("loop") {
                    in_loop = true;
                    vertices.clear();
                }
            }
            "vertex" => {
                if in_loop && parts.len() >= 4 {
                    let x: f64 = parts[1].parse()?;
                    let y: f64 = parts[2].parse()?;
                    let z: f64 = parts[3].parse()?;
                    vertices.push([x, y, z]);
                }
            }
            "endloop" => {
                in_loop = false;
            }
            "endfacet" => {
                if in_facet && vertices.len() == 3 {
                    triangles.push(Triangle::from_arrays(
                        vertices[0],
                        vertices[1],
                        vertices[2],
                    ));
                }
                in_facet = false;
            }
            "endsolid" => {
                // Keep reading: multi-solid files concatenate into one soup
            }
            _ => {
                // Ignore unknown lines
            }
        }
    }

    debug!(facets = triangles.len(), "loaded ASCII STL");
    Ok(triangles)
}
