//! Double-buffered ("ping-pong") cell storage.
//!
//! [`CellBuffers`] keeps two same-shape cell arrays that alternate between
//! "staging" (writable) and "published" (readable) roles. On
//! [`CellBuffers::publish`] the staging array becomes published and the old
//! published array becomes the next staging array. Neither is reallocated.
//!
//! The lifecycle per generation is:
//! 1. read neighbour counts from `published()`
//! 2. `stage()` and write the next generation into the staging array
//! 3. `publish()` to swap roles
//!
//! ```text
//! buffer_a: Vec<Cell>  ←─── staging (even generations) / published (odd)
//! buffer_b: Vec<Cell>  ←─── published (even generations) / staging (odd)
//! ```

use torlife_core::Cell;

#[derive(Clone, Debug)]
pub(crate) struct CellBuffers {
    buffer_a: Vec<Cell>,
    buffer_b: Vec<Cell>,
    /// Which buffer is currently staging (false = A staging, true = B staging).
    b_is_staging: bool,
}

impl CellBuffers {
    /// Wrap an initial generation. It becomes the published buffer; the
    /// other buffer is allocated dead and overwritten on first `stage()`.
    pub(crate) fn new(initial: Vec<Cell>) -> Self {
        let buffer_a = vec![Cell::DEAD; initial.len()];
        Self {
            buffer_a,
            buffer_b: initial,
            b_is_staging: false,
        }
    }

    /// Read-only view of the current generation.
    pub(crate) fn published(&self) -> &[Cell] {
        if self.b_is_staging {
            &self.buffer_a
        } else {
            &self.buffer_b
        }
    }

    /// Copy the published generation into the staging buffer and hand
    /// out both: the staging buffer mutably, the published one shared.
    pub(crate) fn stage(&mut self) -> (&mut [Cell], &[Cell]) {
        let (staging, published) = if self.b_is_staging {
            (&mut self.buffer_b, &self.buffer_a)
        } else {
            (&mut self.buffer_a, &self.buffer_b)
        };
        staging.copy_from_slice(published);
        (staging.as_mut_slice(), published.as_slice())
    }

    /// Swap roles: staging becomes published.
    pub(crate) fn publish(&mut self) {
        self.b_is_staging = !self.b_is_staging;
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.buffer_a.len()
    }
}
