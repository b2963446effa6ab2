//! Common types for the game core: cell states, shot outcomes and board errors.

/// State of a single grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum CellState {
    #[default]
    Empty,
    Ship,
    Hit,
    Miss,
}

impl CellState {
    /// Character used when rendering the cell.
    pub const fn symbol(self) -> char {
        match self {
            CellState::Empty => '.',
            CellState::Ship => 'O',
            CellState::Hit => 'X',
            CellState::Miss => '-',
        }
    }

    /// Inverse of [`CellState::symbol`].
    pub fn from_symbol(ch: char) -> Option<Self> {
        match ch {
            '.' => Some(CellState::Empty),
            'O' => Some(CellState::Ship),
            'X' => Some(CellState::Hit),
            '-' => Some(CellState::Miss),
            _ => None,
        }
    }

    /// `true` once the cell has been fired at.
    pub const fn is_resolved(self) -> bool {
        matches!(self, CellState::Hit | CellState::Miss)
    }
}

/// Result of firing at a coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum FireResult {
    Hit,
    Miss,
}

impl core::fmt::Display for FireResult {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            FireResult::Hit => write!(f, "HIT"),
            FireResult::Miss => write!(f, "MISS"),
        }
    }
}

/// The two participants of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", serde(rename_all = "lowercase"))]
pub enum Side {
    Human,
    Computer,
}

impl Side {
    /// The other participant.
    pub const fn opponent(self) -> Side {
        match self {
            Side::Human => Side::Computer,
            Side::Computer => Side::Human,
        }
    }
}

/// Whose point of view a board is rendered from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardRole {
    /// The player's own board; ships are visible.
    Own,
    /// The enemy board; ships stay hidden until hit.
    Opponent,
}

impl BoardRole {
    pub const fn label(self) -> &'static str {
        match self {
            BoardRole::Own => "(your board)",
            BoardRole::Opponent => "(opponent board)",
        }
    }
}

/// Why a cell rejected a placement or a shot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotOpenReason {
    /// A ship already occupies the cell.
    Occupied,
    /// The cell was already fired at.
    AlreadyTargeted,
}

/// Errors returned by Grid and Board operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    /// Grid size must be at least 1.
    InvalidSize(usize),
    /// Coordinate lies outside `[0, size)`.
    OutOfBounds { x: usize, y: usize, size: usize },
    /// Cell cannot take a ship or a shot.
    CellNotOpen { x: usize, y: usize, reason: NotOpenReason },
    /// No open cell is left for a ship.
    UnableToPlaceShip,
    /// Rendered grid text could not be read back (1-based line number).
    Malformed { line: usize },
}

impl core::fmt::Display for BoardError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            BoardError::InvalidSize(size) => write!(f, "Grid size {} is invalid", size),
            BoardError::OutOfBounds { x, y, size } => write!(
                f,
                "Coordinate ({}, {}) is outside the {}x{} board",
                x, y, size, size
            ),
            BoardError::CellNotOpen {
                x,
                y,
                reason: NotOpenReason::Occupied,
            } => write!(f, "Coordinate ({}, {}) already holds a ship", x, y),
            BoardError::CellNotOpen {
                x,
                y,
                reason: NotOpenReason::AlreadyTargeted,
            } => write!(f, "Coordinate ({}, {}) was already targeted", x, y),
            BoardError::UnableToPlaceShip => write!(f, "Unable to place ship"),
            BoardError::Malformed { line } => write!(f, "Malformed grid at line {}", line),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BoardError {}
