/// Width and height of the square grid.
pub const BOARD_SIZE: u8 = 16;
/// Shots granted per turn.
pub const SHOTS_PER_TURN: u32 = 6;
/// Turns per game.
pub const TURNS: u32 = 5;
/// Shots available at the start of every game.
pub const SHOT_BUDGET: u32 = SHOTS_PER_TURN * TURNS;
