//! Producing the first generation.
//!
//! Random seeding takes the RNG as an argument so callers control
//! determinism. [`seed_rng`] builds the ChaCha8 stream the config path
//! uses: identical seeds produce identical grids on every platform.

use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use torlife_core::Cell;
use torlife_space::Torus;

/// Row-major cells, each alive with probability `ratio`.
///
/// `ratio` must already be validated; `0.0` never yields a live cell
/// and `1.0` always does.
pub(crate) fn random_cells<R: Rng + ?Sized>(torus: &Torus, ratio: f64, rng: &mut R) -> Vec<Cell> {
    (0..torus.cell_count())
        .map(|_| Cell::new(rng.random_bool(ratio)))
        .collect()
}

/// Row-major cells copied from an already validated square matrix.
pub(crate) fn explicit_cells<R: AsRef<[bool]>>(state: &[R]) -> Vec<Cell> {
    state
        .iter()
        .flat_map(|row| row.as_ref().iter().copied().map(Cell::new))
        .collect()
}

/// Deterministic RNG for a seed, or a freshly drawn seed when `None`.
///
/// Returns the seed actually used alongside the generator.
pub fn seed_rng(seed: Option<u64>) -> (u64, ChaCha8Rng) {
    let seed = seed.unwrap_or_else(|| rand::rng().random());
    (seed, ChaCha8Rng::seed_from_u64(seed))
}
