//! Benchmark profiles for the torlife engine.
//!
//! Provides pre-built [`GridConfig`] profiles for benchmarking and examples:
//!
//! - [`reference_profile`]: 100x100 grid (10K cells) at the default life ratio
//! - [`stress_profile`]: 1000x1000 grid (1M cells) for stress testing

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use torlife_engine::GridConfig;

/// Side length of the reference profile.
pub const REFERENCE_SIZE: u32 = 100;

/// Side length of the stress profile.
pub const STRESS_SIZE: u32 = 1000;

/// Build a reference benchmark profile: 100x100 grid (10K cells).
pub fn reference_profile(seed: u64) -> GridConfig {
    GridConfig::random(REFERENCE_SIZE).with_seed(seed)
}

/// Build a stress benchmark profile: 1000x1000 grid (1M cells).
///
/// Same ratio as [`reference_profile`] at 100x the cell count.
pub fn stress_profile(seed: u64) -> GridConfig {
    GridConfig::random(STRESS_SIZE).with_seed(seed)
}
