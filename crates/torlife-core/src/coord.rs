//! Grid coordinates.

use std::fmt;

/// A position on a square grid.
///
/// `x` is the column and `y` the row, so a row-major store indexes a
/// coordinate as `[y][x]`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    /// Column.
    pub x: u32,
    /// Row.
    pub y: u32,
}

impl Coord {
    /// Create a coordinate from a column and a row.
    pub const fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(u32, u32)> for Coord {
    fn from((x, y): (u32, u32)) -> Self {
        Self { x, y }
    }
}

impl From<Coord> for (u32, u32) {
    fn from(c: Coord) -> Self {
        (c.x, c.y)
    }
}
