use crate::{
    board::{Board, BB},
    common::{BoardError, ShotError, ShotResult},
    config::{BOARD_SIZE, SHOT_BUDGET},
    fleet::{ship_index, Orientation, ShipKind, FLEET, NUM_SHIPS},
};
use log::{debug, info};
use rand::Rng;

const N: usize = BOARD_SIZE as usize;

/// Current status of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub enum GameStatus {
    /// Fleet not fully on the board yet.
    Placing,
    /// Accepting shots.
    Active,
    Won,
    Lost,
}

impl GameStatus {
    /// `Won` or `Lost`.
    pub fn is_over(&self) -> bool {
        matches!(self, GameStatus::Won | GameStatus::Lost)
    }
}

/// What happened after an accepted shot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShotOutcome {
    pub row: usize,
    pub col: usize,
    pub result: ShotResult,
    /// Game status once the shot has been applied.
    pub status: GameStatus,
}

/// Per-cell projection handed to renderers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellView {
    /// Shot that struck a ship.
    Hit,
    /// Shot into open water.
    Miss,
    /// Unshot ship square, only produced when revealing.
    ShipRevealed,
    Unknown,
}

/// Read-only grid projection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridView {
    cells: [[CellView; N]; N],
}

impl GridView {
    pub fn get(&self, row: usize, col: usize) -> Option<CellView> {
        self.cells.get(row)?.get(col).copied()
    }

    /// Rows from top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[CellView; N]> {
        self.cells.iter()
    }

    /// Number of cells showing `view`.
    pub fn count(&self, view: CellView) -> usize {
        self.cells.iter().flatten().filter(|c| **c == view).count()
    }
}

/// Progress of one ship, as reported in a [`GameSnapshot`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct ShipStatus {
    pub name: &'static str,
    pub length: usize,
    pub points: i32,
    pub hits: usize,
    pub sunk: bool,
}

/// Serializable summary of the engine state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct GameSnapshot {
    pub status: GameStatus,
    pub score: i32,
    pub shots_remaining: u32,
    pub shots_fired: usize,
    pub ship_cells_afloat: usize,
    pub ships: [ShipStatus; NUM_SHIPS],
}

/// Single-player game engine: owns the board, score and shot budget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameEngine {
    board: Board,
    score: i32,
    shots_remaining: u32,
}

impl GameEngine {
    /// Create an engine in the `Placing` state with a full shot budget.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            score: 0,
            shots_remaining: SHOT_BUDGET,
        }
    }

    /// Create an engine with the whole fleet placed from `rng`.
    pub fn with_fleet<R: Rng>(rng: &mut R) -> Result<Self, BoardError> {
        let mut engine = Self::new();
        engine.place_fleet(rng)?;
        Ok(engine)
    }

    /// Clear the grid, hit counters and score, and refill the shot budget.
    pub fn reset(&mut self) {
        self.board.clear();
        self.score = 0;
        self.shots_remaining = SHOT_BUDGET;
        debug!("game reset, {} shots available", self.shots_remaining);
    }

    /// Randomly place every ship not yet on the board.
    pub fn place_fleet<R: Rng>(&mut self, rng: &mut R) -> Result<(), BoardError> {
        self.board.place_remaining(rng)
    }

    /// Reset followed by a fresh random fleet.
    pub fn restart<R: Rng>(&mut self, rng: &mut R) -> Result<(), BoardError> {
        self.reset();
        self.place_fleet(rng)
    }

    /// Pin one ship by hand before the rest of the fleet is placed.
    /// Only allowed while the game is still `Placing`.
    pub fn place_ship(
        &mut self,
        ship_index: usize,
        row: usize,
        col: usize,
        orientation: Orientation,
    ) -> Result<(), BoardError> {
        if self.status() != GameStatus::Placing {
            return Err(BoardError::PlacementClosed);
        }
        self.board.place(ship_index, row, col, orientation)
    }

    /// Immutable reference to the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Fire at (row, col). Rejected shots leave the state untouched.
    pub fn shoot(&mut self, row: usize, col: usize) -> Result<ShotOutcome, ShotError> {
        if self.shots_remaining == 0 {
            return Err(ShotError::GameOver(self.status()));
        }
        if self.is_won() {
            return Err(ShotError::GameOver(GameStatus::Won));
        }
        if !self.board.all_placed() {
            return Err(ShotError::NotReady);
        }

        let result = self.board.shoot(row, col)?;
        self.shots_remaining -= 1;
        match result {
            ShotResult::Miss => self.score -= 1,
            ShotResult::Hit(_) => {}
            ShotResult::Sunk(kind) => {
                self.score += kind.points();
                info!("sunk {} for {} points", kind.name(), kind.points());
            }
        }

        let status = self.status();
        match status {
            GameStatus::Won => info!("fleet destroyed, final score {}", self.score),
            GameStatus::Lost => info!("out of shots, final score {}", self.score),
            _ => {}
        }
        Ok(ShotOutcome {
            row,
            col,
            result,
            status,
        })
    }

    /// True iff every ship's hit counter equals its length.
    pub fn is_won(&self) -> bool {
        self.board.all_sunk()
    }

    /// Out of shots without having won.
    pub fn is_lost(&self) -> bool {
        self.shots_remaining == 0 && !self.is_won()
    }

    pub fn status(&self) -> GameStatus {
        if self.is_won() {
            GameStatus::Won
        } else if self.is_lost() {
            GameStatus::Lost
        } else if !self.board.all_placed() {
            GameStatus::Placing
        } else {
            GameStatus::Active
        }
    }

    pub fn shots_remaining(&self) -> u32 {
        self.shots_remaining
    }

    pub fn score(&self) -> i32 {
        self.score
    }

    /// Cells of `kind` hit so far.
    pub fn hit_count(&self, kind: &ShipKind) -> usize {
        ship_index(kind.name())
            .map(|i| self.board.hit_count(i))
            .unwrap_or(0)
    }

    pub fn is_sunk(&self, kind: &ShipKind) -> bool {
        ship_index(kind.name())
            .map(|i| self.board.is_sunk(i))
            .unwrap_or(false)
    }

    /// Projection of the grid for rendering. Unshot ship squares show as
    /// `ShipRevealed` only when `reveal_ships` is set.
    pub fn renderable_grid(&self, reveal_ships: bool) -> GridView {
        let ships = self.board.ship_map();
        let mut cells = [[CellView::Unknown; N]; N];
        if reveal_ships {
            for (r, c) in ships.iter_set_bits() {
                cells[r][c] = CellView::ShipRevealed;
            }
        }
        for (r, c) in self.board.shots().iter_set_bits() {
            cells[r][c] = if ships.get(r, c).unwrap_or(false) {
                CellView::Hit
            } else {
                CellView::Miss
            };
        }
        GridView { cells }
    }

    /// Generate a read-only summary of the current state.
    pub fn snapshot(&self) -> GameSnapshot {
        let afloat: BB = self.board.ship_map() & !self.board.shots();
        let ships = core::array::from_fn(|i| {
            let kind = FLEET[i];
            ShipStatus {
                name: kind.name(),
                length: kind.length(),
                points: kind.points(),
                hits: self.board.hit_count(i),
                sunk: self.board.is_sunk(i),
            }
        });
        GameSnapshot {
            status: self.status(),
            score: self.score,
            shots_remaining: self.shots_remaining,
            shots_fired: self.board.shots().count_ones(),
            ship_cells_afloat: afloat.count_ones(),
            ships,
        }
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}
