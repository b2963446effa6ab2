#![cfg(feature = "std")]

use std::fmt::Display;
use std::io::{BufRead, Write};

use log::warn;
use rand::rngs::SmallRng;

use crate::cli::InputReader;
use crate::core::{board::Board, common::FireResult, config::COORD_DELIMITER};

use super::Player;

/// Human player driven through a terminal.
pub struct CliPlayer<B, W> {
    input: InputReader<B, W>,
}

impl<B: BufRead, W: Write> CliPlayer<B, W> {
    pub fn new(input: InputReader<B, W>) -> Self {
        Self { input }
    }

    /// Give back the underlying reader.
    pub fn into_inner(self) -> InputReader<B, W> {
        self.input
    }

    fn say(&mut self, msg: impl Display) {
        if let Err(e) = self.input.say(msg) {
            warn!("failed to write to terminal: {}", e);
        }
    }
}

impl<B: BufRead, W: Write> Player for CliPlayer<B, W> {
    fn select_target(
        &mut self,
        _rng: &mut SmallRng,
        own: &Board,
        target: &Board,
    ) -> anyhow::Result<(usize, usize)> {
        self.say(own.render());
        self.say(target.render());
        let prompt = format!(
            "Enter target row{}col (0-{}):",
            COORD_DELIMITER,
            target.size() - 1
        );
        Ok(self.input.prompt_and_parse(&prompt, target)?)
    }

    fn handle_guess_result(&mut self, coord: (usize, usize), result: FireResult) {
        match result {
            FireResult::Hit => self.say(format!(
                "HIT! Your shot at ({}, {}) struck an enemy ship.",
                coord.0, coord.1
            )),
            FireResult::Miss => self.say(format!(
                "Miss. Your shot at ({}, {}) hit only water.",
                coord.0, coord.1
            )),
        }
    }

    fn handle_opponent_guess(&mut self, coord: (usize, usize), result: FireResult) {
        match result {
            FireResult::Hit => self.say(format!(
                "The computer hit your ship at ({}, {})!",
                coord.0, coord.1
            )),
            FireResult::Miss => self.say(format!(
                "The computer missed at ({}, {}).",
                coord.0, coord.1
            )),
        }
    }

    fn handle_game_over(&mut self, own: &Board, target: &Board, won: bool) {
        self.say("\nGAME OVER");
        self.say(own.render_revealed());
        self.say(target.render_revealed());
        if won {
            self.say("You sank every enemy ship. You win!");
        } else {
            self.say("All your ships have been destroyed. You lose.");
        }
    }
}
