//! Grid configuration and validation.
//!
//! [`GridConfig`] is the builder-input for constructing a [`Grid`](crate::Grid).
//! [`validate()`](GridConfig::validate) checks every construction invariant
//! up front so that [`Grid::from_config`](crate::Grid::from_config) never
//! returns a partially built grid.

use torlife_core::GridError;
use torlife_space::Torus;

// ── Seeding ────────────────────────────────────────────────────────

/// How the first generation is produced.
///
/// The two modes are mutually exclusive: an explicit matrix ignores any
/// life ratio.
#[derive(Clone, Debug, PartialEq)]
pub enum Seeding {
    /// Each cell is independently alive with probability `ratio`.
    Random {
        /// Probability of a cell starting alive. Must be in `[0, 1]`.
        ratio: f64,
        /// RNG seed. `None` draws a fresh seed from the thread RNG; the
        /// drawn seed is logged at debug level so a run can be replayed.
        seed: Option<u64>,
    },
    /// Cell `(x, y)` starts as `state[y][x]`. The matrix must be square.
    Explicit(Vec<Vec<bool>>),
}

// ── GridConfig ─────────────────────────────────────────────────────

/// Complete configuration for constructing a grid.
#[derive(Clone, Debug, PartialEq)]
pub struct GridConfig {
    /// Side length. In explicit mode this must equal the matrix height.
    pub size: u32,
    /// Initial-state source.
    pub seeding: Seeding,
}

impl GridConfig {
    /// Life ratio used when no ratio and no matrix are supplied.
    pub const DEFAULT_LIFE_RATIO: f64 = 0.2;

    /// Side length used by [`GridConfig::default`].
    pub const DEFAULT_SIZE: u32 = 100;

    /// Random seeding at [`GridConfig::DEFAULT_LIFE_RATIO`] with a fresh seed.
    pub fn random(size: u32) -> Self {
        Self {
            size,
            seeding: Seeding::Random {
                ratio: Self::DEFAULT_LIFE_RATIO,
                seed: None,
            },
        }
    }

    /// Explicit seeding from a boolean matrix; the matrix height sets `size`.
    ///
    /// A height beyond `u32::MAX` saturates `size`; [`validate`](Self::validate)
    /// checks the matrix before `size` and reports it as `initial_state`.
    pub fn explicit(state: Vec<Vec<bool>>) -> Self {
        let size = u32::try_from(state.len()).unwrap_or(u32::MAX);
        Self {
            size,
            seeding: Seeding::Explicit(state),
        }
    }

    /// Set the life ratio. Has no effect in explicit mode.
    pub fn with_ratio(mut self, ratio: f64) -> Self {
        if let Seeding::Random { ratio: r, .. } = &mut self.seeding {
            *r = ratio;
        }
        self
    }

    /// Set the RNG seed. Has no effect in explicit mode.
    pub fn with_seed(mut self, seed: u64) -> Self {
        if let Seeding::Random { seed: s, .. } = &mut self.seeding {
            *s = Some(seed);
        }
        self
    }

    /// Validate all construction invariants.
    pub fn validate(&self) -> Result<(), GridError> {
        match &self.seeding {
            // Ratio must be a probability.
            Seeding::Random { ratio, .. } => validate_ratio(*ratio)?,
            // Matrix must be square and agree with `size`. Checked before
            // `size` so a saturated height is reported against the matrix.
            Seeding::Explicit(state) => {
                let side = validate_state(state)?;
                if side != self.size {
                    return Err(GridError::invalid(
                        "size",
                        format!(
                            "size {} does not match initial state of {side} rows",
                            self.size
                        ),
                    ));
                }
            }
        }
        // Size must describe a non-empty, representable torus.
        Torus::new(self.size)?;
        Ok(())
    }
}

impl Default for GridConfig {
    fn default() -> Self {
        Self::random(Self::DEFAULT_SIZE)
    }
}

/// Check that `ratio` is a probability. NaN is rejected.
pub fn validate_ratio(ratio: f64) -> Result<(), GridError> {
    if !(0.0..=1.0).contains(&ratio) {
        return Err(GridError::invalid(
            "ratio",
            format!("initial life ratio must be within [0, 1], got {ratio}"),
        ));
    }
    Ok(())
}

/// Check that `state` is a non-empty square matrix and return its side.
pub fn validate_state<R: AsRef<[bool]>>(state: &[R]) -> Result<u32, GridError> {
    if state.is_empty() {
        return Err(GridError::invalid("initial_state", "matrix has no rows"));
    }
    let height = state.len();
    for (y, row) in state.iter().enumerate() {
        let width = row.as_ref().len();
        if width != height {
            return Err(GridError::invalid(
                "initial_state",
                format!("row {y} has {width} cells, expected {height} for a square matrix"),
            ));
        }
    }
    u32::try_from(height).map_err(|_| {
        GridError::invalid(
            "initial_state",
            format!("matrix of {height} rows exceeds u32::MAX"),
        )
    })
}
