#![cfg(feature = "std")]

//! Text rendering of the engine's projections. Nothing here mutates the
//! game; every function takes a read-only view and returns a `String`.

use crate::{
    common::{ShotError, ShotResult},
    config::BOARD_SIZE,
    game::{CellView, GameEngine, GameSnapshot, GameStatus, GridView, ShotOutcome},
};
use std::fmt::Write;

const N: usize = BOARD_SIZE as usize;
// " NN" row label, two chars per cell, trailing space.
const INNER_WIDTH: usize = 3 + 2 * N + 1;

/// Column letter followed by the 1-based row, e.g. `C7`. Coordinates with
/// no such name fall back to `(row, col)`.
pub fn coord_to_string(r: usize, c: usize) -> String {
    let letter = u8::try_from(c).ok().filter(|c| *c < 26);
    match (letter, r.checked_add(1)) {
        (Some(c), Some(row)) => format!("{}{}", (b'A' + c) as char, row),
        _ => format!("({}, {})", r, c),
    }
}

pub fn cell_symbol(view: CellView) -> char {
    match view {
        CellView::Hit => 'X',
        CellView::Miss => 'o',
        CellView::ShipRevealed => 'B',
        CellView::Unknown => '.',
    }
}

/// Draw the grid with column letters across the top and row numbers down
/// the side.
pub fn render_board(grid: &GridView, reveal: bool) -> String {
    let bar = "═".repeat(INNER_WIDTH);
    let mut out = String::new();
    let _ = writeln!(out, "    ╔{}╗", bar);
    out.push_str("    ║   ");
    for c in 0..N {
        let _ = write!(out, " {}", (b'A' + c as u8) as char);
    }
    out.push_str(" ║\n");
    let _ = writeln!(out, "    ╠{}╣", bar);
    for (r, row) in grid.rows().enumerate() {
        let _ = write!(out, "    ║ {:2}", r + 1);
        for view in row.iter() {
            let _ = write!(out, " {}", cell_symbol(*view));
        }
        out.push_str(" ║\n");
    }
    let _ = writeln!(out, "    ╚{}╝", bar);
    if reveal {
        out.push_str("    Legend: B=Ship  X=Hit  o=Miss  .=Water\n");
    } else {
        out.push_str("    Legend: X=Hit  o=Miss  .=Unknown\n");
    }
    out
}

/// Score and shots-left panels.
pub fn render_panels(snapshot: &GameSnapshot) -> String {
    format!(
        "    score: {:<6} left: {}\n",
        snapshot.score, snapshot.shots_remaining
    )
}

/// One line per ship with its hit count, sunk ships flagged.
pub fn render_fleet(snapshot: &GameSnapshot) -> String {
    let mut out = String::from("    Ships:\n");
    for ship in snapshot.ships.iter() {
        let status = if ship.sunk { "SUNK" } else { "Active" };
        let _ = writeln!(
            out,
            "      {:<17} len {}  {:>2} pts  {}/{} hit  {}",
            ship.name, ship.length, ship.points, ship.hits, ship.length, status
        );
    }
    out
}

/// Status-line message for an accepted shot.
pub fn describe_outcome(outcome: &ShotOutcome) -> String {
    let at = coord_to_string(outcome.row, outcome.col);
    let mut msg = match outcome.result {
        ShotResult::Miss => format!("You missed at {}", at),
        ShotResult::Hit(_) => format!("You hit a ship at square {}", at),
        ShotResult::Sunk(kind) => format!("You sunk my {} at {}", kind.name(), at),
    };
    match outcome.status {
        GameStatus::Won => msg.push_str(". You won! Type 'restart' to play again."),
        GameStatus::Lost => msg.push_str(
            ". You're out of shots. You have lost. Type 'restart' to play again.",
        ),
        _ => {}
    }
    msg
}

/// Status-line message for a rejected shot.
pub fn describe_error(err: &ShotError) -> String {
    match err {
        ShotError::OutOfBounds { row, col } => format!(
            "You cannot shoot at {}: it is off the board",
            coord_to_string(*row, *col)
        ),
        ShotError::AlreadyShot { .. } => String::from("You already shot there. Try again"),
        ShotError::GameOver(GameStatus::Won) => {
            String::from("You won! Type 'restart' to play again.")
        }
        ShotError::GameOver(_) => String::from(
            "You're out of shots. You have lost. You are dead. Type 'restart' to play again.",
        ),
        ShotError::NotReady => String::from("The fleet is not in position yet"),
    }
}

/// Closing line shown once the game is decided.
pub fn final_score_line(snapshot: &GameSnapshot) -> Option<String> {
    match snapshot.status {
        GameStatus::Won => Some(format!("You won! Your final score was: {}", snapshot.score)),
        GameStatus::Lost => Some(format!(
            "Unfortunately, you lost. Your final score was: {}",
            snapshot.score
        )),
        _ => None,
    }
}

/// Full screen: board, panels, optional fleet list and the status line.
pub fn render_screen(engine: &GameEngine, reveal: bool, status_line: &str) -> String {
    let snapshot = engine.snapshot();
    let mut out = render_board(&engine.renderable_grid(reveal), reveal);
    out.push_str(&render_panels(&snapshot));
    if reveal {
        out.push_str(&render_fleet(&snapshot));
    }
    if !status_line.is_empty() {
        let _ = writeln!(out, "\n{}", status_line);
    }
    if let Some(line) = final_score_line(&snapshot) {
        let _ = writeln!(out, "{}", line);
    }
    out
}
