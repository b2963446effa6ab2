//! Square matrix of cell states with bounds-checked access and text rendering.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt::Write;

use crate::core::common::{BoardError, CellState};

/// A `size × size` grid of [`CellState`], stored row-major.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    size: usize,
    cells: Vec<CellState>,
}

impl Grid {
    /// Allocate a grid with every cell [`CellState::Empty`].
    pub fn new(size: usize) -> Result<Self, BoardError> {
        let len = match size.checked_mul(size) {
            Some(len) if size >= 1 => len,
            _ => return Err(BoardError::InvalidSize(size)),
        };
        let mut cells = Vec::new();
        cells
            .try_reserve_exact(len)
            .map_err(|_| BoardError::InvalidSize(size))?;
        cells.resize(len, CellState::Empty);
        Ok(Grid { size, cells })
    }

    /// Side length of the grid.
    pub fn size(&self) -> usize {
        self.size
    }

    #[inline]
    fn index(&self, x: usize, y: usize) -> Result<usize, BoardError> {
        if self.in_bounds(x, y) {
            Ok(x * self.size + y)
        } else {
            Err(BoardError::OutOfBounds {
                x,
                y,
                size: self.size,
            })
        }
    }

    /// `true` if `(x, y)` addresses a cell of this grid.
    pub fn in_bounds(&self, x: usize, y: usize) -> bool {
        x < self.size && y < self.size
    }

    /// State of the cell at row `x`, column `y`.
    pub fn get(&self, x: usize, y: usize) -> Result<CellState, BoardError> {
        let idx = self.index(x, y)?;
        Ok(self.cells[idx])
    }

    /// Overwrite the cell at row `x`, column `y`.
    pub(crate) fn set(&mut self, x: usize, y: usize, state: CellState) -> Result<(), BoardError> {
        let idx = self.index(x, y)?;
        self.cells[idx] = state;
        Ok(())
    }

    /// Iterator over `((x, y), state)` in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = ((usize, usize), CellState)> + '_ {
        let size = self.size;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, &state)| ((i / size, i % size), state))
    }

    /// Number of cells currently in `state`.
    pub fn count(&self, state: CellState) -> usize {
        self.cells.iter().filter(|&&c| c == state).count()
    }

    /// Render the grid as labelled rows, e.g. `0 |.|O|X|`.
    pub fn render(&self) -> String {
        self.render_with(|state| state)
    }

    /// Render the grid, passing each cell through `view` first.
    pub fn render_with<F>(&self, view: F) -> String
    where
        F: Fn(CellState) -> CellState,
    {
        let mut out = String::new();
        out.push_str("  ");
        for c in 0..self.size {
            let _ = write!(out, " {}", c);
        }
        out.push('\n');
        for r in 0..self.size {
            let _ = write!(out, "{} |", r);
            for c in 0..self.size {
                out.push(view(self.cells[r * self.size + c]).symbol());
                out.push('|');
            }
            out.push('\n');
        }
        out
    }

    /// Read back a grid produced by [`Grid::render`].
    ///
    /// Only lines of the form `<digits> |...|` are rows; anything else (the
    /// column header, a board's name line) is skipped. Every row must carry
    /// exactly as many cells as there are rows.
    pub fn parse(text: &str) -> Result<Self, BoardError> {
        let mut rows: Vec<Vec<CellState>> = Vec::new();
        let mut last_line = 0;
        for (n, line) in text.lines().enumerate() {
            last_line = n + 1;
            let line = line.trim_end();
            let Some(start) = line.find('|') else {
                continue;
            };
            let label = line[..start].trim();
            let is_row = !label.is_empty()
                && label.bytes().all(|b| b.is_ascii_digit())
                && line.ends_with('|');
            if !is_row {
                continue;
            }
            let body = line[start..]
                .strip_prefix('|')
                .and_then(|b| b.strip_suffix('|'))
                .ok_or(BoardError::Malformed { line: n + 1 })?;
            let row = body
                .split('|')
                .map(|cell| {
                    let mut chars = cell.chars();
                    match (chars.next(), chars.next()) {
                        (Some(ch), None) => CellState::from_symbol(ch),
                        _ => None,
                    }
                })
                .collect::<Option<Vec<_>>>()
                .ok_or(BoardError::Malformed { line: n + 1 })?;
            rows.push(row);
        }
        let size = rows.len();
        if size == 0 {
            return Err(BoardError::Malformed { line: last_line });
        }
        let mut cells = Vec::with_capacity(size * size);
        for row in rows {
            if row.len() != size {
                return Err(BoardError::Malformed { line: last_line });
            }
            cells.extend(row);
        }
        Ok(Grid { size, cells })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_rejects_zero_size() {
        assert_eq!(Grid::new(0).unwrap_err(), BoardError::InvalidSize(0));
    }

    #[test]
    fn get_and_set_are_bounds_checked() {
        let mut grid = Grid::new(3).unwrap();
        assert_eq!(grid.get(2, 2).unwrap(), CellState::Empty);
        grid.set(1, 2, CellState::Ship).unwrap();
        assert_eq!(grid.get(1, 2).unwrap(), CellState::Ship);
        assert_eq!(
            grid.get(3, 0).unwrap_err(),
            BoardError::OutOfBounds { x: 3, y: 0, size: 3 }
        );
        assert!(grid.set(0, 3, CellState::Hit).is_err());
    }

    #[test]
    fn render_layout() {
        let mut grid = Grid::new(3).unwrap();
        grid.set(0, 1, CellState::Ship).unwrap();
        grid.set(2, 0, CellState::Miss).unwrap();
        grid.set(1, 1, CellState::Hit).unwrap();
        assert_eq!(grid.render(), "   0 1 2\n0 |.|O|.|\n1 |.|X|.|\n2 |-|.|.|\n");
    }

    #[test]
    fn parse_reads_render_back() {
        let mut grid = Grid::new(4).unwrap();
        grid.set(3, 3, CellState::Hit).unwrap();
        grid.set(0, 2, CellState::Ship).unwrap();
        assert_eq!(Grid::parse(&grid.render()).unwrap(), grid);
    }

    #[test]
    fn new_rejects_overflowing_size() {
        let size = usize::MAX / 2;
        assert_eq!(Grid::new(size).unwrap_err(), BoardError::InvalidSize(size));
    }

    #[test]
    fn parse_skips_name_lines_with_bars() {
        let mut grid = Grid::new(2).unwrap();
        grid.set(1, 0, CellState::Miss).unwrap();
        let text = alloc::format!("a|b|c (your board)\n{}", grid.render());
        assert_eq!(Grid::parse(&text).unwrap(), grid);
    }

    #[test]
    fn parse_rejects_ragged_rows() {
        assert!(Grid::parse("0 |.|.|\n1 |.|\n").is_err());
        assert!(Grid::parse("0 |?|.|\n1 |.|.|\n").is_err());
        assert!(Grid::parse("header only\n").is_err());
    }
}
