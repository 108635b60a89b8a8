//! torlife: Conway's Game of Life on a toroidal square grid.
//!
//! This is the top-level facade crate that re-exports the public API from all
//! torlife sub-crates. For most users, adding `torlife` as a single dependency
//! is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use torlife::prelude::*;
//!
//! // A blinker in the middle of a 5x5 torus.
//! let mut state = vec![vec![false; 5]; 5];
//! for x in 1..4 {
//!     state[2][x] = true;
//! }
//! let mut grid = Grid::from_state(&state).unwrap();
//! assert_eq!(grid.count_live_neighbors(2, 1), 3);
//!
//! grid.advance_generation();
//! assert!(grid.get_cell(2, 1).alive);
//! assert!(!grid.get_cell(1, 2).alive);
//! assert_eq!(grid.generation(), 1);
//!
//! // Seeded random grids are reproducible.
//! let a = Grid::from_config(GridConfig::random(16).with_seed(7)).unwrap();
//! let b = Grid::from_config(GridConfig::random(16).with_seed(7)).unwrap();
//! assert_eq!(a.to_state(), b.to_state());
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `torlife-core` | `Cell`, `Coord`, `GridError` |
//! | [`space`] | `torlife-space` | Toroidal topology and neighbour offsets |
//! | [`engine`] | `torlife-engine` | `Grid`, configuration, seeding, pixel decoding |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core value types and errors (`torlife-core`).
///
/// Contains [`types::Cell`] with the B3/S23 rule, [`types::Coord`], and
/// [`types::GridError`].
pub use torlife_core as types;

/// Toroidal topology (`torlife-space`).
///
/// [`space::Torus`] resolves the eight wrapped neighbours of a cell in the
/// fixed [`space::OFFSETS_8`] order.
pub use torlife_space as space;

/// The generation engine (`torlife-engine`).
///
/// [`engine::Grid`] owns the double-buffered cells; [`engine::GridConfig`]
/// describes how to seed one.
pub use torlife_engine as engine;

/// Common imports for typical torlife usage.
///
/// ```rust
/// use torlife::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use torlife_core::{Cell, Coord, GridError};

    // Space
    pub use torlife_space::{Torus, OFFSETS_8};

    // Engine
    pub use torlife_engine::{Grid, GridConfig, Seeding};
}
