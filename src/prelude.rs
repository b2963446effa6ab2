//! Commonly used types and utilities for ease of import.

pub use crate::{Board, FireResult, Game, GameConfig, GameStatus, Player, RandomPlayer, Side};

#[cfg(feature = "std")]
pub use crate::{cli::InputReader, CliPlayer};
