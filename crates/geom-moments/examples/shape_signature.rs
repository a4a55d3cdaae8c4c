//! Volume, centroid, and SSV of the built-in reference solids.
//!
//! Pass a path to an STL file to analyze it instead:
//!
//! ```text
//! cargo run --example shape_signature -- hull.stl
//! ```

use geom_moments::{build_ssv, centroid, moment, ssv_from_file, validate, volume, ValidationOptions};
use moment_types::{unit_cube, unit_tetrahedron};

fn main() {
    if let Some(path) = std::env::args().nth(1) {
        match ssv_from_file(&path, 4) {
            Ok(ssv) => println!("SSV(order 4) of {path}: {ssv:?}"),
            Err(e) => eprintln!("failed to analyze {path}: {e}"),
        }
        return;
    }

    // The unit tetrahedron: degree equals i+j+k for exact results
    let tet = unit_tetrahedron();
    println!("tetrahedron volume: {}", volume(&tet));
    println!("tetrahedron centroid: {:?}", centroid(&tet));

    // A raw second moment versus its scale-invariant central counterpart
    let raw = moment(&tet, 2, 0, 0, 2, false, false);
    let invariant = moment(&tet, 2, 0, 0, 2, true, true);
    println!("tetrahedron m200 raw: {raw}, central scaled: {invariant}");

    // Shape signature vectors: 1 volume term + 6 second-order invariants
    let cube = unit_cube();
    println!("cube SSV(order 2): {:?}", build_ssv(&cube, 2));
    println!("tetrahedron SSV(order 2): {:?}", build_ssv(&tet, 2));

    // The engine trusts its input; validation is explicit
    let report = validate(&cube, &ValidationOptions::default());
    print!("{report}");
}
