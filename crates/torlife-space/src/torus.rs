//! Square toroidal lattice with 8-connected neighbourhood.

use torlife_core::Coord;

use crate::error::SpaceError;

/// All 8 offsets as `(dx, dy)`: the row above left to right, the two
/// side cells, then the row below left to right.
///
/// The order is part of the contract: neighbour lists are compared in
/// tests and printed in trace logs.
pub const OFFSETS_8: [(i32, i32); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// A square `size x size` lattice with periodic boundaries on both axes.
///
/// Each cell has coordinate `(x, y)` with `x` the column and `y` the row.
/// The canonical ordering is row-major: `(0,0), (1,0), ..., (size-1, size-1)`.
///
/// # Examples
///
/// ```
/// use torlife_core::Coord;
/// use torlife_space::Torus;
///
/// let t = Torus::new(4).unwrap();
/// let n = t.neighbours(Coord::new(0, 0));
/// assert_eq!(n.len(), 8);
/// assert!(n.contains(&Coord::new(3, 3)));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Torus {
    size: u32,
}

impl Torus {
    /// Maximum side length: coordinates are resolved through `i64`
    /// arithmetic and ranks must fit `usize` on 32-bit targets.
    pub const MAX_SIZE: u32 = u16::MAX as u32;

    /// Create a torus with `size * size` cells.
    ///
    /// Returns `Err(SpaceError::EmptySpace)` if `size` is 0, or
    /// `Err(SpaceError::DimensionTooLarge)` if it exceeds [`Torus::MAX_SIZE`].
    pub fn new(size: u32) -> Result<Self, SpaceError> {
        if size == 0 {
            return Err(SpaceError::EmptySpace);
        }
        if size > Self::MAX_SIZE {
            return Err(SpaceError::DimensionTooLarge {
                value: size,
                max: Self::MAX_SIZE,
            });
        }
        Ok(Self { size })
    }

    /// Side length.
    pub fn size(&self) -> u32 {
        self.size
    }

    /// Total number of cells.
    pub fn cell_count(&self) -> usize {
        (self.size as usize) * (self.size as usize)
    }

    /// Always returns `false`; construction rejects empty tori.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Whether `coord` lies on the lattice.
    pub fn contains(&self, coord: Coord) -> bool {
        coord.x < self.size && coord.y < self.size
    }

    /// Wrap one axis value that is at most one step off the lattice.
    ///
    /// Below zero becomes `size - 1`; above `size - 1` becomes `0`. This is
    /// a single-step clamp-wrap, not `rem_euclid`: it is only correct for
    /// unit offsets from an in-range value, which is all neighbour
    /// resolution ever produces. On a 1-wide torus both branches land on 0.
    pub fn wrap_axis(&self, val: i64) -> u32 {
        let last = i64::from(self.size) - 1;
        if val < 0 {
            self.size - 1
        } else if val > last {
            0
        } else {
            val as u32
        }
    }

    /// The 8 neighbours of `coord`, in [`OFFSETS_8`] order.
    ///
    /// Always returns exactly 8 coordinates. On tori of side 1 or 2 some
    /// of them coincide; duplicates are kept.
    pub fn neighbours(&self, coord: Coord) -> [Coord; 8] {
        debug_assert!(
            self.contains(coord),
            "coordinate {coord} outside {0}x{0} torus",
            self.size
        );
        OFFSETS_8.map(|(dx, dy)| Coord {
            x: self.wrap_axis(i64::from(coord.x) + i64::from(dx)),
            y: self.wrap_axis(i64::from(coord.y) + i64::from(dy)),
        })
    }

    /// Position of `coord` in the row-major canonical ordering, or `None`
    /// if it lies off the lattice.
    pub fn canonical_rank(&self, coord: Coord) -> Option<usize> {
        self.contains(coord).then(|| self.rank(coord))
    }

    /// Row-major rank of an in-range coordinate.
    ///
    /// # Panics
    ///
    /// Panics if `coord` lies off the lattice.
    pub fn rank(&self, coord: Coord) -> usize {
        assert!(
            self.contains(coord),
            "coordinate {coord} outside {0}x{0} torus",
            self.size
        );
        (coord.y as usize) * (self.size as usize) + (coord.x as usize)
    }

    /// Inverse of [`Torus::rank`].
    ///
    /// # Panics
    ///
    /// Panics if `rank >= cell_count()`.
    pub fn coord_at(&self, rank: usize) -> Coord {
        assert!(
            rank < self.cell_count(),
            "rank {rank} outside torus of {} cells",
            self.cell_count()
        );
        let size = self.size as usize;
        Coord::new((rank % size) as u32, (rank / size) as u32)
    }

    /// All cells in row-major canonical order.
    pub fn canonical_ordering(&self) -> impl Iterator<Item = Coord> {
        let size = self.size;
        (0..size).flat_map(move |y| (0..size).map(move |x| Coord::new(x, y)))
    }
}
