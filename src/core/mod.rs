//! Core battleship game engine (no_std compatible)
//!
//! Grid and board state, coordinate validation and the turn controller.
//! Needs only `alloc`; everything touching a terminal or a file lives
//! outside this module.

pub mod board;
pub mod common;
pub mod config;
pub mod game;
pub mod grid;
pub mod validate;

pub use board::Board;
pub use common::{BoardError, BoardRole, CellState, FireResult, NotOpenReason, Side};
pub use config::*;
pub use game::{setup, Game, GameStatus, Shot};
pub use grid::Grid;
pub use validate::{parse_coord, CoordError};
