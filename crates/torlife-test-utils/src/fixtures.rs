//! Well-known patterns with their periods.
//!
//! - [`BLOCK`]: still life.
//! - [`BLINKER`]: period-2 oscillator, horizontal phase.
//! - [`TOAD`], [`BEACON`]: period-2 oscillators.
//! - [`GLIDER`]: moves one cell down and one right every 4 generations.

/// 2x2 still life.
pub const BLOCK: &str = "
    ##
    ##
";

/// Horizontal blinker.
pub const BLINKER: &str = "###";

/// Vertical blinker, the other phase of [`BLINKER`].
pub const BLINKER_VERTICAL: &str = "
    #
    #
    #
";

/// Period-2 toad.
pub const TOAD: &str = "
    .###
    ###.
";

/// Period-2 beacon.
pub const BEACON: &str = "
    ##..
    ##..
    ..##
    ..##
";

/// South-east travelling glider.
pub const GLIDER: &str = "
    .#.
    ..#
    ###
";

/// Named patterns that return to their starting state, with periods.
pub const PERIODIC: [(&str, &str, u64); 4] = [
    ("block", BLOCK, 1),
    ("blinker", BLINKER, 2),
    ("toad", TOAD, 2),
    ("beacon", BEACON, 2),
];
