//! Common types for salvo: shot results and the error enums.

use crate::bitboard::BitBoardError;
use crate::fleet::ShipKind;
use crate::game::GameStatus;

/// Result of a shot that was accepted by the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShotResult {
    /// Shot landed in open water.
    Miss,
    /// Shot hit a ship that is still afloat.
    Hit(ShipKind),
    /// Shot hit the last intact segment of a ship.
    Sunk(ShipKind),
}

/// Reasons a shot is rejected. None of them changes the game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShotError {
    /// Coordinate lies outside the board.
    OutOfBounds { row: usize, col: usize },
    /// Cell was already shot at.
    AlreadyShot { row: usize, col: usize },
    /// The game reached a terminal state; carries `Won` or `Lost`.
    GameOver(GameStatus),
    /// The fleet has not been fully placed yet.
    NotReady,
}

impl core::fmt::Display for ShotError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ShotError::OutOfBounds { row, col } => {
                write!(f, "Location ({}, {}) is off the board", row, col)
            }
            ShotError::AlreadyShot { row, col } => {
                write!(f, "Location ({}, {}) was already shot at", row, col)
            }
            ShotError::GameOver(GameStatus::Won) => write!(f, "Game over: all ships are sunk"),
            ShotError::GameOver(_) => write!(f, "Game over: no shots remaining"),
            ShotError::NotReady => write!(f, "The fleet has not been placed yet"),
        }
    }
}

/// Errors returned by manual ship placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    /// Underlying bitboard error.
    BitBoardError(BitBoardError),
    /// Ship index is not part of the fleet.
    InvalidIndex,
    /// Attempted to place a ship that is already placed.
    ShipAlreadyPlaced,
    /// Ship placement overlaps another ship.
    ShipOverlaps,
    /// Ship placement covers a square that was already shot at.
    ShipOverlapsShot,
    /// Ships can only be placed manually before the fleet is complete.
    PlacementClosed,
    /// Ship does not fit on the board.
    ShipOutOfBounds,
}

impl From<BitBoardError> for BoardError {
    fn from(err: BitBoardError) -> Self {
        BoardError::BitBoardError(err)
    }
}

impl core::fmt::Display for BoardError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            BoardError::BitBoardError(e) => write!(f, "BitBoard error: {}", e),
            BoardError::InvalidIndex => write!(f, "Ship index is out of range"),
            BoardError::ShipAlreadyPlaced => write!(f, "Ship is already placed on the board"),
            BoardError::ShipOverlaps => write!(f, "Ship placement overlaps with another ship"),
            BoardError::ShipOverlapsShot => {
                write!(f, "Ship placement covers a square already shot at")
            }
            BoardError::PlacementClosed => write!(f, "The fleet is already in position"),
            BoardError::ShipOutOfBounds => write!(f, "Ship placement is out of bounds"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ShotError {}

#[cfg(feature = "std")]
impl std::error::Error for BoardError {}
