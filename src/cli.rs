#![cfg(feature = "std")]

//! Line-oriented terminal driver: reads commands, feeds shots to the
//! engine and redraws the screen after each one.

use std::io::{BufRead, Write};

use crate::{
    common::BoardError,
    config::BOARD_SIZE,
    game::GameEngine,
    ui::{describe_error, describe_outcome, render_screen},
};
use log::debug;
use rand::Rng;

/// A parsed line of player input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Shoot { row: usize, col: usize },
    Restart,
    Help,
    Quit,
}

/// Parse `<COLUMN><ROW>` such as `A5` or `p16` into a zero-based
/// `(row, col)`. Letters past the board are accepted here and rejected by
/// the engine as off the board.
pub fn parse_coord(input: &str) -> Result<(usize, usize), String> {
    let input = input.trim();
    if input.is_empty() {
        return Err("Empty input".to_string());
    }
    let mut chars = input.chars();
    let col_ch = chars
        .next()
        .ok_or("No column letter")?
        .to_ascii_uppercase();
    if !col_ch.is_ascii_uppercase() {
        return Err(format!("Invalid column '{}' - must be a letter", col_ch));
    }
    let col = (col_ch as u8 - b'A') as usize;
    let row_str: String = chars.collect();
    if row_str.is_empty() {
        return Err("Too short - need column letter and row number (e.g., A5)".to_string());
    }
    let row: usize = row_str
        .trim()
        .parse()
        .map_err(|_| format!("Invalid row '{}' - must be a number", row_str))?;
    if row == 0 {
        return Err(format!("Row cannot be 0 - must be 1-{}", BOARD_SIZE));
    }
    Ok((row - 1, col))
}

/// Parse a full command line.
pub fn parse_command(input: &str) -> Result<Command, String> {
    let line = input.trim();
    match line.to_ascii_lowercase().as_str() {
        "restart" | "r" => Ok(Command::Restart),
        "help" | "h" | "?" => Ok(Command::Help),
        "quit" | "q" | "exit" => Ok(Command::Quit),
        _ => parse_coord(line).map(|(row, col)| Command::Shoot { row, col }),
    }
}

fn help_text() -> String {
    let last = (b'A' + BOARD_SIZE - 1) as char;
    format!(
        "Commands: <COLUMN><ROW> to fire (A1-{}{}), 'restart' for a new fleet, 'quit' to leave",
        last, BOARD_SIZE
    )
}

/// Owns one game and the randomness used to lay out its fleets.
pub struct CliDriver<R: Rng> {
    engine: GameEngine,
    rng: R,
    reveal: bool,
    status_line: String,
}

impl<R: Rng> CliDriver<R> {
    /// Start a game with a freshly placed fleet. `reveal` shows unshot ships.
    pub fn new(mut rng: R, reveal: bool) -> Result<Self, BoardError> {
        let engine = GameEngine::with_fleet(&mut rng)?;
        Ok(Self {
            engine,
            rng,
            reveal,
            status_line: help_text(),
        })
    }

    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    /// Message shown under the board after the last command.
    pub fn status_line(&self) -> &str {
        &self.status_line
    }

    /// Apply one command. Returns `false` when the player asked to quit.
    pub fn handle(&mut self, command: Command) -> Result<bool, BoardError> {
        match command {
            Command::Shoot { row, col } => {
                self.status_line = match self.engine.shoot(row, col) {
                    Ok(outcome) => describe_outcome(&outcome),
                    Err(e) => {
                        debug!("shot rejected: {}", e);
                        describe_error(&e)
                    }
                };
            }
            Command::Restart => {
                self.engine.restart(&mut self.rng)?;
                self.status_line = String::from("New game. The fleet is in position.");
            }
            Command::Help => self.status_line = help_text(),
            Command::Quit => return Ok(false),
        }
        Ok(true)
    }

    /// Current screen as text.
    pub fn screen(&self) -> String {
        render_screen(&self.engine, self.reveal, &self.status_line)
    }

    /// Read commands from `input` until `quit` or end of input, drawing the
    /// screen to `out` before every prompt.
    pub fn run<B: BufRead, W: Write>(&mut self, mut input: B, mut out: W) -> anyhow::Result<()> {
        loop {
            write!(out, "{}", self.screen())?;
            write!(out, "\nTarget> ")?;
            out.flush()?;

            let mut line = String::new();
            if input.read_line(&mut line)? == 0 {
                writeln!(out)?;
                break;
            }
            let keep_going = match parse_command(&line) {
                Ok(command) => self.handle(command)?,
                Err(e) => {
                    debug!("unparseable input {:?}", line.trim());
                    self.status_line = format!("Invalid coordinate: {}. Example: A5, P16", e);
                    true
                }
            };
            if !keep_going {
                break;
            }
        }
        if let Some(line) = crate::ui::final_score_line(&self.engine.snapshot()) {
            writeln!(out, "{}", line)?;
        }
        Ok(())
    }
}
