//! The toroidal Game of Life grid.
//!
//! [`Grid`] owns every cell, resolves toroidal adjacency through its
//! [`Torus`], and advances all cells one generation at a time.
//!
//! # Snapshot consistency
//!
//! [`advance_generation`](Grid::advance_generation) computes every
//! neighbour count from the published generation before any cell of the
//! next generation is written, then publishes the whole next generation
//! at once. Readers only ever hold `&Grid`, so the borrow checker rules
//! out observing a half-advanced grid.

use std::fmt;

use log::{debug, trace};
use rand::Rng;
use torlife_core::{Cell, Coord, GridError};
use torlife_space::Torus;

use crate::buffer::CellBuffers;
use crate::config::{validate_ratio, validate_state, GridConfig, Seeding};
use crate::seeding::{explicit_cells, random_cells, seed_rng};

/// A square toroidal grid of cells with a generation counter.
///
/// # Example
///
/// ```
/// use torlife_engine::Grid;
///
/// // A horizontal blinker on a 5x5 torus.
/// let mut state = vec![vec![false; 5]; 5];
/// state[2][1] = true;
/// state[2][2] = true;
/// state[2][3] = true;
///
/// let mut grid = Grid::from_state(&state).unwrap();
/// grid.advance_generation();
/// assert!(grid.get_cell(2, 1).alive);
/// assert!(!grid.get_cell(1, 2).alive);
///
/// grid.advance_generation();
/// assert_eq!(grid.to_state(), state);
/// assert_eq!(grid.generation(), 2);
/// ```
#[derive(Clone, Debug)]
pub struct Grid {
    torus: Torus,
    generation: u64,
    cells: CellBuffers,
    /// Neighbour counts for the generation being advanced. Reused
    /// across advances.
    counts: Vec<u8>,
}

impl Grid {
    /// Build a grid from a validated [`GridConfig`].
    pub fn from_config(config: GridConfig) -> Result<Self, GridError> {
        config.validate()?;
        match config.seeding {
            Seeding::Random { ratio, seed } => {
                let (seed, mut rng) = seed_rng(seed);
                debug!("random grid seed {seed}");
                Self::random(config.size, ratio, &mut rng)
            }
            Seeding::Explicit(state) => Self::from_state(&state),
        }
    }

    /// Random grid: each cell independently alive with probability
    /// `ratio`, drawn from `rng` in row-major order.
    ///
    /// Fails with [`GridError::InvalidParameter`] if `size` is 0 or `ratio`
    /// is outside `[0, 1]`.
    pub fn random<R: Rng + ?Sized>(size: u32, ratio: f64, rng: &mut R) -> Result<Self, GridError> {
        validate_ratio(ratio)?;
        let torus = Torus::new(size)?;
        debug!("seeding {size}x{size} grid with ratio {ratio}");
        let cells = random_cells(&torus, ratio, rng);
        Ok(Self::from_cells(torus, cells))
    }

    /// Grid initialised from `state[y][x]`. The matrix height sets the size.
    ///
    /// Fails with [`GridError::InvalidParameter`] for an empty, ragged, or
    /// non-square matrix.
    pub fn from_state<R: AsRef<[bool]>>(state: &[R]) -> Result<Self, GridError> {
        let size = validate_state(state)?;
        let torus = Torus::new(size)?;
        debug!("loading {size}x{size} grid from explicit state");
        Ok(Self::from_cells(torus, explicit_cells(state)))
    }

    fn from_cells(torus: Torus, cells: Vec<Cell>) -> Self {
        debug_assert_eq!(cells.len(), torus.cell_count());
        let counts = vec![0; cells.len()];
        Self {
            torus,
            generation: 0,
            cells: CellBuffers::new(cells),
            counts,
        }
    }

    /// Side length.
    pub fn size(&self) -> u32 {
        self.torus.size()
    }

    /// Number of advances since construction.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// The grid's topology.
    pub fn torus(&self) -> &Torus {
        &self.torus
    }

    /// The cell at column `x`, row `y`.
    ///
    /// # Panics
    ///
    /// Panics if `x` or `y` is not below [`size()`](Grid::size). Only
    /// in-range coordinates, such as those from
    /// [`neighbors_of`](Grid::neighbors_of), may be passed.
    pub fn get_cell(&self, x: u32, y: u32) -> &Cell {
        &self.cells.published()[self.torus.rank(Coord::new(x, y))]
    }

    /// Checked variant of [`get_cell`](Grid::get_cell).
    pub fn try_cell(&self, x: u32, y: u32) -> Option<&Cell> {
        let rank = self.torus.canonical_rank(Coord::new(x, y))?;
        self.cells.published().get(rank)
    }

    /// The 8 toroidally wrapped neighbour coordinates of `(x, y)`.
    ///
    /// Order follows [`torlife_space::OFFSETS_8`] and is stable.
    pub fn neighbors_of(&self, x: u32, y: u32) -> [Coord; 8] {
        self.torus.neighbours(Coord::new(x, y))
    }

    /// Number of live cells among the 8 neighbour slots of `(x, y)`.
    ///
    /// Slots that wrap onto the same cell (size 1 or 2) each count, so a
    /// lone live cell on a 1x1 grid sees 8 live neighbours.
    pub fn count_live_neighbors(&self, x: u32, y: u32) -> u8 {
        count_live(&self.torus, self.cells.published(), Coord::new(x, y))
    }

    /// Advance every cell one generation.
    ///
    /// 1. count live neighbours for every cell from the published generation
    /// 2. copy the published generation into the staging buffer
    /// 3. apply [`Cell::evolve`] to each staging cell with its count
    /// 4. publish the staging buffer
    /// 5. increment the generation counter
    pub fn advance_generation(&mut self) {
        let torus = self.torus;
        {
            let published = self.cells.published();
            for (rank, count) in self.counts.iter_mut().enumerate() {
                *count = count_live(&torus, published, torus.coord_at(rank));
            }
        }

        let (staging, _) = self.cells.stage();
        for (cell, &count) in staging.iter_mut().zip(&self.counts) {
            cell.evolve(count);
        }
        self.cells.publish();
        self.generation += 1;

        debug!(
            "generation {} population {}",
            self.generation,
            self.population()
        );
    }

    /// Advance `n` generations.
    pub fn advance_generations(&mut self, n: u64) {
        for _ in 0..n {
            self.advance_generation();
        }
    }

    /// Number of live cells.
    pub fn population(&self) -> usize {
        self.cells.published().iter().filter(|c| c.alive).count()
    }

    /// Row `y` as a slice indexed by `x`.
    ///
    /// # Panics
    ///
    /// Panics if `y` is not below [`size()`](Grid::size).
    pub fn row(&self, y: u32) -> &[Cell] {
        let size = self.size() as usize;
        let start = self.torus.rank(Coord::new(0, y));
        &self.cells.published()[start..start + size]
    }

    /// All cells with their coordinates, in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Coord, &Cell)> + '_ {
        self.torus
            .canonical_ordering()
            .zip(self.cells.published().iter())
    }

    /// The current generation as `state[y][x]`, the same shape
    /// [`from_state`](Grid::from_state) accepts.
    pub fn to_state(&self) -> Vec<Vec<bool>> {
        (0..self.size())
            .map(|y| self.row(y).iter().map(|c| c.alive).collect())
            .collect()
    }
}

/// Count live cells over the 8 neighbour slots of `coord` in `cells`.
fn count_live(torus: &Torus, cells: &[Cell], coord: Coord) -> u8 {
    let neighbours = torus.neighbours(coord);
    let mut alive = 0u8;
    for nb in neighbours {
        if cells[torus.rank(nb)].alive {
            alive += 1;
        }
    }
    trace!("cell {coord}: neighbours {neighbours:?}, {alive} alive");
    alive
}

impl fmt::Display for Grid {
    /// One line per row, `#` for alive and `.` for dead.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.size() {
            for cell in self.row(y) {
                f.write_str(if cell.alive { "#" } else { "." })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
