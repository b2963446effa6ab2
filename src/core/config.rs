use core::ops::RangeInclusive;

use crate::core::common::Side;

pub const DEFAULT_BOARD_SIZE: usize = 5;
pub const DEFAULT_NUM_SHIPS: usize = 5;

/// Board sizes offered by the interactive front end.
pub const BOARD_SIZES: RangeInclusive<usize> = 5..=7;
/// Ship counts offered by the interactive front end.
pub const SHIP_COUNTS: RangeInclusive<usize> = 3..=5;

/// Minimum trimmed length of a username or password.
pub const MIN_CREDENTIAL_LEN: usize = 5;

/// Separator between the row and column of a typed coordinate.
pub const COORD_DELIMITER: char = ',';

pub const DEFAULT_HUMAN_NAME: &str = "Player";
pub const DEFAULT_OPPONENT_NAME: &str = "Computer";

/// Parameters of a single game.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct GameConfig {
    pub size: usize,
    pub ship_count: usize,
    pub first: Side,
    pub human_name: alloc::string::String,
    pub opponent_name: alloc::string::String,
}

/// Reasons a [`GameConfig`] cannot be played.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// Board size must be at least 1.
    InvalidSize(usize),
    /// Ship count must be in `1..=size*size`.
    InvalidShipCount { ship_count: usize, cells: usize },
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ConfigError::InvalidSize(size) => write!(f, "Board size {} is invalid", size),
            ConfigError::InvalidShipCount { ship_count, cells } => write!(
                f,
                "Cannot place {} ships on a board with {} cells",
                ship_count, cells
            ),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}

impl GameConfig {
    pub fn new(size: usize, ship_count: usize) -> Self {
        Self {
            size,
            ship_count,
            ..Self::default()
        }
    }

    /// Sets the label shown above the human's board.
    pub fn with_human_name(mut self, name: &str) -> Self {
        self.human_name = alloc::string::String::from(name);
        self
    }

    pub fn with_first(mut self, first: Side) -> Self {
        self.first = first;
        self
    }

    /// Check that the configuration describes a playable game.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.size < 1 {
            return Err(ConfigError::InvalidSize(self.size));
        }
        let cells = self
            .size
            .checked_mul(self.size)
            .ok_or(ConfigError::InvalidSize(self.size))?;
        if self.ship_count == 0 || self.ship_count > cells {
            return Err(ConfigError::InvalidShipCount {
                ship_count: self.ship_count,
                cells,
            });
        }
        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_BOARD_SIZE,
            ship_count: DEFAULT_NUM_SHIPS,
            first: Side::Human,
            human_name: alloc::string::String::from(DEFAULT_HUMAN_NAME),
            opponent_name: alloc::string::String::from(DEFAULT_OPPONENT_NAME),
        }
    }
}
