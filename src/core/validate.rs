//! Parsing and checking of typed `row,col` coordinates.

use alloc::string::String;
use core::num::IntErrorKind;

use crate::core::board::Board;
use crate::core::config::COORD_DELIMITER;

/// Reasons a typed coordinate is rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoordError {
    /// Wrong number of tokens, or a token that is not an integer.
    Parse(String),
    /// The pair lies outside the board.
    OutOfBounds { x: i64, y: i64, size: usize },
    /// The cell was already targeted.
    CellNotOpen { x: usize, y: usize },
}

impl core::fmt::Display for CoordError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            CoordError::Parse(input) => write!(
                f,
                "'{}' is not a coordinate - enter two numbers as row{}col",
                input, COORD_DELIMITER
            ),
            CoordError::OutOfBounds { x, y, size } => write!(
                f,
                "({}, {}) is off the board - rows and columns run 0 to {}",
                x,
                y,
                size - 1
            ),
            CoordError::CellNotOpen { x, y } => {
                write!(f, "({}, {}) was already targeted - choose another", x, y)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for CoordError {}

/// Parse one axis. Integers too large for `i64` saturate so they are
/// reported as off the board rather than as garbage.
fn parse_axis(token: &str) -> Option<i64> {
    match token.trim().parse::<i64>() {
        Ok(v) => Some(v),
        Err(e) => match e.kind() {
            IntErrorKind::PosOverflow => Some(i64::MAX),
            IntErrorKind::NegOverflow => Some(i64::MIN),
            _ => None,
        },
    }
}

/// Parse `"row,col"` and check it is a cell of `board` that can still be
/// fired at.
pub fn parse_coord(input: &str, board: &Board) -> Result<(usize, usize), CoordError> {
    let trimmed = input.trim();
    let mut parts = trimmed.split(COORD_DELIMITER);
    let (Some(xs), Some(ys), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err(CoordError::Parse(String::from(trimmed)));
    };
    let (Some(x), Some(y)) = (parse_axis(xs), parse_axis(ys)) else {
        return Err(CoordError::Parse(String::from(trimmed)));
    };

    let size = board.size();
    let in_range = |v: i64| v >= 0 && (v as u64) < size as u64;
    if !in_range(x) || !in_range(y) {
        return Err(CoordError::OutOfBounds { x, y, size });
    }
    let (x, y) = (x as usize, y as usize);
    if !board.is_targetable(x, y) {
        return Err(CoordError::CellNotOpen { x, y });
    }
    Ok((x, y))
}
