//! A single automaton cell and Conway's local transition rule.

/// Largest live-neighbour count a cell can observe (8-connected).
pub const MAX_NEIGHBOURS: u8 = 8;

/// One unit of the automaton: alive or dead, nothing else.
///
/// Cells are plain data owned by a grid. They change state only through
/// [`Cell::evolve`], which the grid calls once per generation with a
/// neighbour count taken from the previous generation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Cell {
    /// Whether the cell is currently alive.
    pub alive: bool,
}

impl Cell {
    /// A live cell.
    pub const ALIVE: Cell = Cell { alive: true };

    /// A dead cell.
    pub const DEAD: Cell = Cell { alive: false };

    /// Create a cell with the given initial state.
    pub const fn new(alive: bool) -> Self {
        Self { alive }
    }

    /// Whether the cell is alive.
    pub const fn is_alive(&self) -> bool {
        self.alive
    }

    /// Conway's rule as a pure function.
    ///
    /// - live with 2 or 3 live neighbours survives
    /// - dead with exactly 3 live neighbours is born
    /// - everything else is dead in the next generation
    ///
    /// ```
    /// use torlife_core::Cell;
    ///
    /// assert!(Cell::next_state(true, 2));
    /// assert!(Cell::next_state(false, 3));
    /// assert!(!Cell::next_state(true, 4));
    /// assert!(!Cell::next_state(false, 2));
    /// ```
    pub const fn next_state(alive: bool, alive_neighbours: u8) -> bool {
        matches!((alive, alive_neighbours), (true, 2 | 3) | (false, 3))
    }

    /// Apply the transition rule in place.
    ///
    /// `alive_neighbours` must be in `[0, 8]`; larger values are a caller
    /// bug and trip a debug assertion.
    pub fn evolve(&mut self, alive_neighbours: u8) {
        debug_assert!(
            alive_neighbours <= MAX_NEIGHBOURS,
            "neighbour count {alive_neighbours} exceeds {MAX_NEIGHBOURS}"
        );
        self.alive = Self::next_state(self.alive, alive_neighbours);
    }
}

impl From<bool> for Cell {
    fn from(alive: bool) -> Self {
        Self::new(alive)
    }
}

impl From<Cell> for bool {
    fn from(cell: Cell) -> Self {
        cell.alive
    }
}
