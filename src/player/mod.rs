//! Player trait and implementations
//!
//! - RandomPlayer: uniform-random targeting over untried coordinates
//! - CliPlayer: interactive command-line player

use crate::core::{board::Board, common::FireResult};
use rand::rngs::SmallRng;

/// Interface implemented by different player types.
///
/// A Player is responsible for:
/// - Selecting targets to attack
/// - Handling feedback from shots in both directions
pub trait Player {
    /// Choose the next coordinate to fire at on `target`. `own` is the
    /// player's own board.
    fn select_target(
        &mut self,
        rng: &mut SmallRng,
        own: &Board,
        target: &Board,
    ) -> anyhow::Result<(usize, usize)>;

    /// Inform the player of the result of its last shot.
    fn handle_guess_result(&mut self, _coord: (usize, usize), _result: FireResult) {}

    /// Inform the player of an opponent shot against its board.
    fn handle_opponent_guess(&mut self, _coord: (usize, usize), _result: FireResult) {}

    /// Called once when the game ends.
    fn handle_game_over(&mut self, _own: &Board, _target: &Board, _won: bool) {}
}

pub mod random;
pub use random::RandomPlayer;

#[cfg(feature = "std")]
pub mod cli;
#[cfg(feature = "std")]
pub use cli::CliPlayer;
