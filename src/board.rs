//! The 16×16 grid: ship placements, shots and per-ship hit counters.

use crate::bitboard::BitBoard;
use crate::common::{BoardError, ShotError, ShotResult};
use crate::config::BOARD_SIZE;
use crate::fleet::{Orientation, Placement, ShipKind, FLEET, NUM_SHIPS};
use core::fmt;
use log::{debug, trace};
use rand::Rng;

const N: usize = BOARD_SIZE as usize;

pub type BB = BitBoard<u16, N>;

/// Read-only view of a single grid square.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    /// Ship occupying the square, if any.
    pub occupied_by: Option<ShipKind>,
    /// Whether the square has been shot at.
    pub hit: bool,
}

#[derive(Clone, PartialEq, Eq)]
pub struct Board {
    placements: [Option<Placement>; NUM_SHIPS],
    occupants: [[Option<usize>; N]; N],
    ship_map: BB,
    shots: BB,
    hit_counts: [usize; NUM_SHIPS],
}

impl Board {
    /// Create an empty board: no ships, no shots.
    pub fn new() -> Self {
        Board {
            placements: [None; NUM_SHIPS],
            occupants: [[None; N]; N],
            ship_map: BB::new(),
            shots: BB::new(),
            hit_counts: [0; NUM_SHIPS],
        }
    }

    /// Remove every ship, shot and hit count.
    pub fn clear(&mut self) {
        *self = Board::new();
    }

    /// Board occupancy mask of all ships.
    pub fn ship_map(&self) -> BB {
        self.ship_map
    }

    /// Mask of every square shot at so far.
    pub fn shots(&self) -> BB {
        self.shots
    }

    /// Placement of the ship at `ship_index`, if placed.
    pub fn placement(&self, ship_index: usize) -> Option<Placement> {
        self.placements.get(ship_index).copied().flatten()
    }

    /// Returns `true` once every ship in the fleet has a placement.
    pub fn all_placed(&self) -> bool {
        self.placements.iter().all(Option::is_some)
    }

    /// Cells of `ship_index` that have been hit.
    pub fn hit_count(&self, ship_index: usize) -> usize {
        self.hit_counts.get(ship_index).copied().unwrap_or(0)
    }

    pub fn is_sunk(&self, ship_index: usize) -> bool {
        ship_index < NUM_SHIPS && self.hit_counts[ship_index] == FLEET[ship_index].length()
    }

    /// Returns `true` when every ship's hit counter equals its length.
    pub fn all_sunk(&self) -> bool {
        (0..NUM_SHIPS).all(|i| self.is_sunk(i))
    }

    /// Index of the ship occupying (`row`, `col`).
    pub fn occupant(&self, row: usize, col: usize) -> Option<usize> {
        self.occupants.get(row)?.get(col).copied().flatten()
    }

    /// Snapshot of the square at (`row`, `col`); `None` off the board.
    pub fn cell(&self, row: usize, col: usize) -> Option<Cell> {
        let hit = self.shots.get(row, col).ok()?;
        Some(Cell {
            occupied_by: self.occupant(row, col).map(|i| FLEET[i]),
            hit,
        })
    }

    /// Place a single ship by index at (row, col) and orientation.
    pub fn place(
        &mut self,
        ship_index: usize,
        row: usize,
        col: usize,
        orientation: Orientation,
    ) -> Result<(), BoardError> {
        if ship_index >= NUM_SHIPS {
            return Err(BoardError::InvalidIndex);
        }
        if self.placements[ship_index].is_some() {
            return Err(BoardError::ShipAlreadyPlaced);
        }
        let placement = Placement::new(row, col, orientation, FLEET[ship_index].length())?;
        let mask = placement.mask()?;
        if !(self.ship_map & mask).is_empty() {
            return Err(BoardError::ShipOverlaps);
        }
        // a ship on an already-shot square could never be sunk
        if !(self.shots & mask).is_empty() {
            return Err(BoardError::ShipOverlapsShot);
        }
        self.ship_map |= mask;
        for (r, c) in placement.cells() {
            self.occupants[r][c] = Some(ship_index);
        }
        self.placements[ship_index] = Some(placement);
        debug!(
            "placed {} at ({}, {}) {:?}",
            FLEET[ship_index].name(),
            row,
            col,
            orientation
        );
        Ok(())
    }

    /// Draws random candidates for `ship_index` until one fits without
    /// touching a placed ship or a square already shot at.
    pub fn random_placement<R: Rng>(
        &self,
        rng: &mut R,
        ship_index: usize,
    ) -> Result<Placement, BoardError> {
        if ship_index >= NUM_SHIPS {
            return Err(BoardError::InvalidIndex);
        }
        let len = FLEET[ship_index].length();
        let blocked = self.ship_map | self.shots;
        let mut attempts = 0usize;
        loop {
            attempts += 1;
            let orient = if rng.random() {
                Orientation::Horizontal
            } else {
                Orientation::Vertical
            };
            let (max_r, max_c) = match orient {
                Orientation::Horizontal => (N - 1, N - len),
                Orientation::Vertical => (N - len, N - 1),
            };
            let r = rng.random_range(0..=max_r);
            let c = rng.random_range(0..=max_c);
            let candidate = Placement::new(r, c, orient, len)?;
            if (blocked & candidate.mask()?).is_empty() {
                if attempts > 1 {
                    trace!(
                        "{} placed after {} attempts",
                        FLEET[ship_index].name(),
                        attempts
                    );
                }
                return Ok(candidate);
            }
        }
    }

    /// Randomly place every ship that does not have a placement yet, in
    /// catalog order.
    pub fn place_remaining<R: Rng>(&mut self, rng: &mut R) -> Result<(), BoardError> {
        for i in 0..NUM_SHIPS {
            if self.placements[i].is_some() {
                continue;
            }
            let p = self.random_placement(rng, i)?;
            self.place(i, p.row, p.col, p.orientation)?;
        }
        Ok(())
    }

    /// Fire at (row, col), marking the square and updating hit counters.
    /// Only the engine may call this, so every shot is paid for from the
    /// budget and scored.
    pub(crate) fn shoot(&mut self, row: usize, col: usize) -> Result<ShotResult, ShotError> {
        let cell = self
            .cell(row, col)
            .ok_or(ShotError::OutOfBounds { row, col })?;
        if cell.hit {
            return Err(ShotError::AlreadyShot { row, col });
        }
        self.shots
            .set(row, col)
            .map_err(|_| ShotError::OutOfBounds { row, col })?;

        let Some(i) = self.occupant(row, col) else {
            return Ok(ShotResult::Miss);
        };
        let kind = FLEET[i];
        self.hit_counts[i] += 1;
        if self.hit_counts[i] == kind.length() {
            Ok(ShotResult::Sunk(kind))
        } else {
            Ok(ShotResult::Hit(kind))
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Board {{\n  ship_map: {:?},\n  shots: {:?},\n  hit_counts: {:?},\n  placements: {:?}\n}}",
            self.ship_map, self.shots, self.hit_counts, self.placements
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    const PATROL: usize = 5;

    #[test]
    fn test_place_rejects_shot_squares() {
        let mut board = Board::new();
        assert_eq!(board.shoot(0, 0).unwrap(), ShotResult::Miss);
        assert_eq!(
            board.place(PATROL, 0, 0, Orientation::Horizontal).unwrap_err(),
            BoardError::ShipOverlapsShot
        );
        assert!(board.placement(PATROL).is_none());
        assert!(board.ship_map().is_empty());

        board.place(PATROL, 1, 0, Orientation::Horizontal).unwrap();
        assert_eq!(board.shoot(1, 0).unwrap(), ShotResult::Hit(FLEET[PATROL]));
        assert_eq!(board.shoot(1, 1).unwrap(), ShotResult::Sunk(FLEET[PATROL]));
    }

    #[test]
    fn test_random_placement_avoids_shots() {
        let mut board = Board::new();
        // leave only row 15 unshot
        for r in 0..N - 1 {
            for c in 0..N {
                board.shoot(r, c).unwrap();
            }
        }
        let mut rng = SmallRng::seed_from_u64(21);
        let p = board.random_placement(&mut rng, 0).unwrap();
        assert_eq!(p.orientation, Orientation::Horizontal);
        assert_eq!(p.row, N - 1);
    }

    #[test]
    fn test_shoot_sinks_once() {
        let mut board = Board::new();
        board.place(0, 0, 0, Orientation::Vertical).unwrap();
        for r in 0..4 {
            assert_eq!(board.shoot(r, 0).unwrap(), ShotResult::Hit(FLEET[0]));
        }
        assert_eq!(board.shoot(4, 0).unwrap(), ShotResult::Sunk(FLEET[0]));
        assert_eq!(
            board.shoot(4, 0).unwrap_err(),
            ShotError::AlreadyShot { row: 4, col: 0 }
        );
        assert_eq!(board.hit_count(0), 5);
        assert!(board.is_sunk(0));
    }
}
