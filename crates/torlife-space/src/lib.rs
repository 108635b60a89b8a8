//! Spatial topology for the torlife engine.
//!
//! This crate defines [`Torus`], a square lattice whose left/right and
//! top/bottom edges are adjacent, along with the 8-connected neighbour
//! resolution the automaton counts over.
//!
//! Neighbour coordinates are wrapped with a one-step clamp-wrap rather
//! than a general modulo. See [`Torus::wrap_axis`].

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod torus;

#[cfg(test)]
pub(crate) mod compliance;

pub use error::SpaceError;
pub use torus::{Torus, OFFSETS_8};
