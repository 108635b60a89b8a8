//! Error types for space construction.

use std::fmt;

use torlife_core::GridError;

/// Errors arising from torus construction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SpaceError {
    /// Attempted to construct a space with zero cells.
    EmptySpace,
    /// The side length does not fit the coordinate type.
    DimensionTooLarge {
        /// The requested side length.
        value: u32,
        /// The largest accepted side length.
        max: u32,
    },
}

impl fmt::Display for SpaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptySpace => write!(f, "space must have at least one cell"),
            Self::DimensionTooLarge { value, max } => {
                write!(f, "side length {value} exceeds maximum {max}")
            }
        }
    }
}

impl std::error::Error for SpaceError {}

impl From<SpaceError> for GridError {
    fn from(e: SpaceError) -> Self {
        GridError::invalid("size", e.to_string())
    }
}
