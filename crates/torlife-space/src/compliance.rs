//! Torus invariant checks shared by the unit tests.
//!
//! Each helper asserts one property over every cell of the lattice.

use std::collections::HashSet;

use crate::torus::Torus;

/// Assert that every cell has exactly 8 neighbour slots, all on the lattice.
pub fn assert_eight_neighbours_in_range(space: &Torus) {
    for coord in space.canonical_ordering() {
        let n = space.neighbours(coord);
        assert_eq!(n.len(), 8);
        for nb in n {
            assert!(
                space.contains(nb),
                "neighbour {nb} of {coord} lies off the {0}x{0} lattice",
                space.size()
            );
        }
    }
}

/// Assert that `b in neighbours(a)` implies `a in neighbours(b)`.
pub fn assert_neighbours_symmetric(space: &Torus) {
    for coord in space.canonical_ordering() {
        for nb in space.neighbours(coord) {
            assert!(
                space.neighbours(nb).contains(&coord),
                "neighbour symmetry violated: {nb} in N({coord}) but {coord} not in N({nb})"
            );
        }
    }
}

/// Assert that two traversals of `canonical_ordering` agree.
pub fn assert_canonical_ordering_deterministic(space: &Torus) {
    let a: Vec<_> = space.canonical_ordering().collect();
    let b: Vec<_> = space.canonical_ordering().collect();
    assert_eq!(a, b, "canonical_ordering is non-deterministic");
}

/// Assert that `canonical_ordering` yields exactly `cell_count` unique
/// coordinates, each at its own rank.
pub fn assert_canonical_ordering_complete(space: &Torus) {
    let ordering: Vec<_> = space.canonical_ordering().collect();
    assert_eq!(
        ordering.len(),
        space.cell_count(),
        "canonical_ordering length ({}) != cell_count ({})",
        ordering.len(),
        space.cell_count()
    );
    let unique: HashSet<_> = ordering.iter().collect();
    assert_eq!(
        unique.len(),
        space.cell_count(),
        "canonical_ordering has duplicates"
    );
    for (i, coord) in ordering.iter().enumerate() {
        assert_eq!(space.canonical_rank(*coord), Some(i));
    }
}

/// Run all compliance checks on a torus.
pub fn run_full_compliance(space: &Torus) {
    assert_eight_neighbours_in_range(space);
    assert_neighbours_symmetric(space);
    assert_canonical_ordering_deterministic(space);
    assert_canonical_ordering_complete(space);
}
