use log::{debug, info};
use rand::rngs::SmallRng;
use rand::Rng;

use crate::core::{
    board::Board,
    common::{BoardError, BoardRole, FireResult, Side},
    config::GameConfig,
};
use crate::player::Player;

/// Current status of a game, from the human player's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

/// A resolved shot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shot {
    /// Who fired.
    pub side: Side,
    pub x: usize,
    pub y: usize,
    pub result: FireResult,
}

/// Build both boards and fill each with `config.ship_count` randomly placed
/// ships. Returns `(human, computer)`.
pub fn setup<R: Rng + ?Sized>(
    config: &GameConfig,
    rng: &mut R,
) -> anyhow::Result<(Board, Board)> {
    config.validate().map_err(|e| anyhow::anyhow!(e))?;
    let mut human = Board::new(config.size, &config.human_name, BoardRole::Own)
        .map_err(|e| anyhow::anyhow!(e))?;
    let mut computer = Board::new(config.size, &config.opponent_name, BoardRole::Opponent)
        .map_err(|e| anyhow::anyhow!(e))?;
    human
        .place_random_ships(rng, config.ship_count)
        .map_err(|e| anyhow::anyhow!(e))?;
    computer
        .place_random_ships(rng, config.ship_count)
        .map_err(|e| anyhow::anyhow!(e))?;
    info!(
        "placed {} ships on each {}x{} board",
        config.ship_count, config.size, config.size
    );
    Ok((human, computer))
}

/// Turn controller: both boards, whose turn it is, and the shot count.
pub struct Game {
    human_board: Board,
    computer_board: Board,
    turn: Side,
    shots: usize,
}

impl Game {
    /// Set up a fresh game with random ship placement.
    pub fn new<R: Rng + ?Sized>(config: &GameConfig, rng: &mut R) -> anyhow::Result<Self> {
        let (human_board, computer_board) = setup(config, rng)?;
        Ok(Self::from_boards(human_board, computer_board, config.first))
    }

    /// Start a game from boards that are already populated.
    pub fn from_boards(human_board: Board, computer_board: Board, first: Side) -> Self {
        Self {
            human_board,
            computer_board,
            turn: first,
            shots: 0,
        }
    }

    /// The board owned by `side`.
    pub fn board(&self, side: Side) -> &Board {
        match side {
            Side::Human => &self.human_board,
            Side::Computer => &self.computer_board,
        }
    }

    fn board_mut(&mut self, side: Side) -> &mut Board {
        match side {
            Side::Human => &mut self.human_board,
            Side::Computer => &mut self.computer_board,
        }
    }

    /// Side that fires next.
    pub fn turn(&self) -> Side {
        self.turn
    }

    /// Total shots fired by both sides.
    pub fn shots(&self) -> usize {
        self.shots
    }

    /// The side whose opponent has no ships left. A human win takes
    /// precedence if both fleets are gone.
    pub fn winner(&self) -> Option<Side> {
        if self.computer_board.remaining_ships() == 0 {
            Some(Side::Human)
        } else if self.human_board.remaining_ships() == 0 {
            Some(Side::Computer)
        } else {
            None
        }
    }

    pub fn status(&self) -> GameStatus {
        match self.winner() {
            None => GameStatus::InProgress,
            Some(Side::Human) => GameStatus::Won,
            Some(Side::Computer) => GameStatus::Lost,
        }
    }

    /// Fire for the side whose turn it is and pass the turn on. A rejected
    /// shot leaves the turn unchanged.
    pub fn fire(&mut self, x: usize, y: usize) -> Result<Shot, BoardError> {
        let side = self.turn;
        let result = self.board_mut(side.opponent()).fire(x, y)?;
        self.shots += 1;
        self.turn = side.opponent();
        debug!("{:?} fired at ({}, {}): {}", side, x, y, result);
        Ok(Shot { side, x, y, result })
    }

    /// Ask the current player for a target, fire, and report the shot to
    /// both players.
    pub fn play_turn(
        &mut self,
        human: &mut dyn Player,
        computer: &mut dyn Player,
        rng: &mut SmallRng,
    ) -> anyhow::Result<Shot> {
        if self.winner().is_some() {
            anyhow::bail!("game is already over");
        }
        let side = self.turn;
        let own = self.board(side);
        let enemy = self.board(side.opponent());
        let coord = match side {
            Side::Human => human.select_target(rng, own, enemy)?,
            Side::Computer => computer.select_target(rng, own, enemy)?,
        };
        let shot = self
            .fire(coord.0, coord.1)
            .map_err(|e| anyhow::anyhow!(e))?;
        match side {
            Side::Human => {
                human.handle_guess_result(coord, shot.result);
                computer.handle_opponent_guess(coord, shot.result);
            }
            Side::Computer => {
                computer.handle_guess_result(coord, shot.result);
                human.handle_opponent_guess(coord, shot.result);
            }
        }
        Ok(shot)
    }

    /// Alternate turns until one fleet is destroyed. Returns the winner.
    pub fn run(
        &mut self,
        human: &mut dyn Player,
        computer: &mut dyn Player,
        rng: &mut SmallRng,
    ) -> anyhow::Result<Side> {
        let winner = loop {
            if let Some(winner) = self.winner() {
                break winner;
            }
            self.play_turn(human, computer, rng)?;
        };
        info!("{:?} won after {} shots", winner, self.shots);
        human.handle_game_over(&self.human_board, &self.computer_board, winner == Side::Human);
        computer.handle_game_over(
            &self.computer_board,
            &self.human_board,
            winner == Side::Computer,
        );
        Ok(winner)
    }
}
