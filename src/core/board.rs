//! One player's board: a [`Grid`] plus the set of un-hit ship coordinates.

use alloc::collections::BTreeSet;
use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;
use rand::Rng;

use crate::core::common::{BoardError, BoardRole, CellState, FireResult, NotOpenReason};
use crate::core::grid::Grid;

/// Rejection-sampling attempts before falling back to a scan of open cells.
const RANDOM_ATTEMPTS: usize = 100;

/// Main board state: ship placements, hits and misses.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    grid: Grid,
    name: String,
    role: BoardRole,
    ships: BTreeSet<(usize, usize)>,
}

impl Board {
    /// Create an empty `size × size` board labelled `name`.
    pub fn new(size: usize, name: &str, role: BoardRole) -> Result<Self, BoardError> {
        Ok(Board {
            grid: Grid::new(size)?,
            name: String::from(name),
            role,
            ships: BTreeSet::new(),
        })
    }

    pub fn size(&self) -> usize {
        self.grid.size()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn role(&self) -> BoardRole {
        self.role
    }

    /// Immutable view of the underlying grid.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// State of the cell at `(x, y)`.
    pub fn cell(&self, x: usize, y: usize) -> Result<CellState, BoardError> {
        self.grid.get(x, y)
    }

    /// Place a single-cell ship at `(x, y)`.
    pub fn place_ship(&mut self, x: usize, y: usize) -> Result<(), BoardError> {
        match self.grid.get(x, y)? {
            CellState::Empty => {}
            CellState::Ship => {
                return Err(BoardError::CellNotOpen {
                    x,
                    y,
                    reason: NotOpenReason::Occupied,
                })
            }
            CellState::Hit | CellState::Miss => {
                return Err(BoardError::CellNotOpen {
                    x,
                    y,
                    reason: NotOpenReason::AlreadyTargeted,
                })
            }
        }
        self.grid.set(x, y, CellState::Ship)?;
        self.ships.insert((x, y));
        Ok(())
    }

    /// `true` iff `(x, y)` is in bounds and the cell is still empty.
    pub fn is_open(&self, x: usize, y: usize) -> bool {
        matches!(self.grid.get(x, y), Ok(CellState::Empty))
    }

    /// `true` iff `(x, y)` is in bounds and has not been fired at.
    pub fn is_targetable(&self, x: usize, y: usize) -> bool {
        matches!(self.grid.get(x, y), Ok(state) if !state.is_resolved())
    }

    /// `true` iff an un-hit ship occupies `(x, y)`.
    pub fn has_ship(&self, x: usize, y: usize) -> bool {
        self.ships.contains(&(x, y))
    }

    /// Process a shot at `(x, y)`, marking a hit or a miss.
    pub fn fire(&mut self, x: usize, y: usize) -> Result<FireResult, BoardError> {
        if self.grid.get(x, y)?.is_resolved() {
            return Err(BoardError::CellNotOpen {
                x,
                y,
                reason: NotOpenReason::AlreadyTargeted,
            });
        }
        if self.ships.remove(&(x, y)) {
            self.grid.set(x, y, CellState::Hit)?;
            Ok(FireResult::Hit)
        } else {
            self.grid.set(x, y, CellState::Miss)?;
            Ok(FireResult::Miss)
        }
    }

    /// Number of ships not yet hit. Zero means this board's owner lost.
    pub fn remaining_ships(&self) -> usize {
        self.ships.len()
    }

    /// Coordinates of the un-hit ships, in row-major order.
    pub fn ships(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.ships.iter().copied()
    }

    /// Coordinates that have not been fired at yet, in row-major order.
    pub fn untargeted(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.grid
            .cells()
            .filter(|(_, state)| !state.is_resolved())
            .map(|(coord, _)| coord)
    }

    /// Returns a uniformly random open coordinate, or an error if none is left.
    pub fn random_open_cell<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
    ) -> Result<(usize, usize), BoardError> {
        let size = self.size();
        for _ in 0..RANDOM_ATTEMPTS {
            let x = rng.random_range(0..size);
            let y = rng.random_range(0..size);
            if self.is_open(x, y) {
                return Ok((x, y));
            }
        }
        // crowded board: pick among what is left
        let open: Vec<(usize, usize)> = self
            .grid
            .cells()
            .filter(|(_, state)| *state == CellState::Empty)
            .map(|(coord, _)| coord)
            .collect();
        if open.is_empty() {
            return Err(BoardError::UnableToPlaceShip);
        }
        Ok(open[rng.random_range(0..open.len())])
    }

    /// Place `count` ships on random open cells.
    pub fn place_random_ships<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        count: usize,
    ) -> Result<(), BoardError> {
        for _ in 0..count {
            let (x, y) = self.random_open_cell(rng)?;
            self.place_ship(x, y)?;
        }
        Ok(())
    }

    fn header(&self) -> String {
        format!("{} {}\n", self.name, self.role.label())
    }

    /// Render the board from its role's point of view. Opponent boards hide
    /// ships that have not been hit.
    pub fn render(&self) -> String {
        let role = self.role;
        let mut out = self.header();
        out.push_str(&self.grid.render_with(|state| match (role, state) {
            (BoardRole::Opponent, CellState::Ship) => CellState::Empty,
            _ => state,
        }));
        out
    }

    /// Render with every ship visible, regardless of role.
    pub fn render_revealed(&self) -> String {
        let mut out = self.header();
        out.push_str(&self.grid.render());
        out
    }
}
