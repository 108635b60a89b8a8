//! Core types for the torlife Game of Life engine.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the cell state and its local transition rule, the grid coordinate
//! type, and the error type shared by the rest of the workspace.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod cell;
pub mod coord;
pub mod error;

pub use cell::Cell;
pub use coord::Coord;
pub use error::GridError;
