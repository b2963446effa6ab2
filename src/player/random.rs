use alloc::vec::Vec;
use rand::rngs::SmallRng;
use rand::Rng;

use crate::core::board::Board;

use super::Player;

/// Opponent that fires at a uniformly random coordinate it has not tried yet.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomPlayer;

impl RandomPlayer {
    pub fn new() -> Self {
        Self
    }
}

impl Player for RandomPlayer {
    fn select_target(
        &mut self,
        rng: &mut SmallRng,
        _own: &Board,
        target: &Board,
    ) -> anyhow::Result<(usize, usize)> {
        let untried: Vec<(usize, usize)> = target.untargeted().collect();
        if untried.is_empty() {
            anyhow::bail!("no untargeted cells left on {}", target.name());
        }
        Ok(untried[rng.random_range(0..untried.len())])
    }
}
