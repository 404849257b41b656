//! Canonical board geometry and setup constants.

/// Side length of the square grid.
pub const BOARD_SIZE: usize = 7;

/// Total number of cells on the grid.
pub const NUM_SQUARES: usize = BOARD_SIZE * BOARD_SIZE;

/// Neighbourhood margin for single placements and captures.
pub const SINGLE_MARGIN: usize = 1;

/// Neighbourhood margin for jumps and the pass check.
pub const JUMP_MARGIN: usize = 2;

/// Empty board, Black to move, counters at zero.
pub const EMPTY_BOARD_FEN: &str = "7/7/7/7/7/7/7/ x 0 0";

/// Conventional four-corner start: Black on a7/g1, White on g7/a1.
pub const STARTING_POSITION_FEN: &str = "x5o/7/7/7/7/7/o5x/ x 0 0";
