//! Simulation engine for Conway's Game of Life on a torus.
//!
//! Provides [`Grid`], which owns a square toroidal lattice of cells and
//! advances it one synchronous generation at a time, plus the
//! [`GridConfig`] used to build one from a random ratio or an explicit
//! boolean matrix.
//!
//! The engine never paces time, reads input, or draws. A driver calls
//! [`Grid::advance_generation`] once per tick and reads cells back with
//! [`Grid::get_cell`].

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

mod buffer;
pub mod config;
pub mod grid;
pub mod initial;
pub mod seeding;

pub use config::{GridConfig, Seeding};
pub use grid::Grid;
