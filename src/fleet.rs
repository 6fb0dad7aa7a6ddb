//! Fleet catalog and placement geometry.

use crate::bitboard::BitBoard;
use crate::common::BoardError;
use crate::config::BOARD_SIZE;

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// Kind of ship: name, length and the points awarded for sinking it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShipKind {
    name: &'static str,
    length: usize,
    points: i32,
}

impl ShipKind {
    /// Create a new ship kind.
    pub const fn new(name: &'static str, length: usize, points: i32) -> Self {
        Self {
            name,
            length,
            points,
        }
    }

    /// Ship's name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Number of cells the ship occupies.
    pub fn length(&self) -> usize {
        self.length
    }

    /// Score awarded once the ship is sunk.
    pub fn points(&self) -> i32 {
        self.points
    }
}

pub const NUM_SHIPS: usize = 6;
pub const FLEET: [ShipKind; NUM_SHIPS] = [
    ShipKind::new("aircraft carrier", 5, 20),
    ShipKind::new("battleship", 4, 12),
    ShipKind::new("submarine", 3, 6),
    ShipKind::new("destroyer", 3, 6),
    ShipKind::new("cruiser", 3, 6),
    ShipKind::new("patrol boat", 2, 2),
];

/// Total number of ship segments in the fleet.
pub const TOTAL_SHIP_CELLS: usize = 5 + 4 + 3 + 3 + 3 + 2;

/// Position of `name` in [`FLEET`].
pub fn ship_index(name: &str) -> Option<usize> {
    FLEET.iter().position(|k| k.name() == name)
}

/// Look up a ship kind by name.
pub fn ship_kind(name: &str) -> Option<ShipKind> {
    ship_index(name).map(|i| FLEET[i])
}

type BB = BitBoard<u16, { BOARD_SIZE as usize }>;

/// A straight run of cells on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub row: usize,
    pub col: usize,
    pub orientation: Orientation,
    pub length: usize,
}

impl Placement {
    /// Placement of a run of `length` cells starting at (`row`, `col`).
    /// Fails if any cell would fall off the board.
    pub fn new(
        row: usize,
        col: usize,
        orientation: Orientation,
        length: usize,
    ) -> Result<Self, BoardError> {
        let n = BOARD_SIZE as usize;
        let (last_r, last_c) = match orientation {
            Orientation::Horizontal => (row, col + length.saturating_sub(1)),
            Orientation::Vertical => (row + length.saturating_sub(1), col),
        };
        if length == 0 || last_r >= n || last_c >= n {
            return Err(BoardError::ShipOutOfBounds);
        }
        Ok(Placement {
            row,
            col,
            orientation,
            length,
        })
    }

    /// Cells covered by the run, starting at the origin.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize)> {
        let Placement {
            row,
            col,
            orientation,
            length,
        } = *self;
        (0..length).map(move |i| match orientation {
            Orientation::Horizontal => (row, col + i),
            Orientation::Vertical => (row + i, col),
        })
    }

    /// Occupancy mask of the run.
    pub fn mask(&self) -> Result<BB, BoardError> {
        Ok(BB::from_cells(self.cells())?)
    }
}
