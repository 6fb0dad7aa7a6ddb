#![cfg_attr(not(feature = "std"), no_std)]

mod bitboard;
mod board;
#[cfg(feature = "std")]
pub mod cli;
mod common;
mod config;
mod fleet;
mod game;
#[cfg(feature = "std")]
mod logging;
#[cfg(feature = "std")]
pub mod ui;

pub use bitboard::{BitBoard, BitBoardError};
pub use board::*;
pub use common::*;
pub use config::*;
pub use fleet::*;
pub use game::*;
#[cfg(feature = "std")]
pub use cli::{parse_command, parse_coord, CliDriver, Command};
#[cfg(feature = "std")]
pub use logging::{accepts_target, init_logging, parse_level, short_target};
