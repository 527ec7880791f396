// Mine layout: cell values and the random board generator

use rand::Rng;
use std::fmt;
use tracing::debug;

use crate::tms_error::{GameError, Result};
use crate::tms_grid::Grid;

/// A single cell on the minesweeper board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Mine,
    Safe(u8), // Adjacent mine count (0-8)
}

impl Cell {
    pub fn is_mine(self) -> bool {
        matches!(self, Cell::Mine)
    }
}

/// Immutable mine layout with precomputed adjacency counts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: Grid<Cell>,
    mines: usize,
}

impl Board {
    /// Build a board with mines at the given (row, col) positions.
    /// Adjacency counts are computed from the mine list.
    pub fn from_mines(size: usize, mines: &[(usize, usize)]) -> Result<Board> {
        if size == 0 {
            return Err(GameError::EmptyBoard);
        }
        if mines.len() >= size * size {
            return Err(GameError::TooManyMines {
                size,
                mines: mines.len(),
            });
        }
        let mut cells = Grid::filled(size, Cell::Safe(0));
        for &(row, col) in mines {
            match cells.get(row, col) {
                None => return Err(GameError::InvalidCoords { row, col }),
                Some(Cell::Mine) => return Err(GameError::DuplicateMine { row, col }),
                Some(Cell::Safe(_)) => plant(&mut cells, row, col),
            }
        }
        Ok(Board {
            cells,
            mines: mines.len(),
        })
    }

    /// Wrap hand-written cells as-is; counts are not recomputed
    pub fn from_cells(size: usize, cells: Vec<Cell>) -> Result<Board> {
        if size == 0 {
            return Err(GameError::EmptyBoard);
        }
        let actual = cells.len();
        let cells = Grid::from_vec(size, cells).map_err(|_| GameError::InvalidBoardShape {
            size,
            expected: size * size,
            actual,
        })?;
        let mines = cells.iter().filter(|c| c.is_mine()).count();
        Ok(Board { cells, mines })
    }

    pub fn size(&self) -> usize {
        self.cells.size()
    }

    /// Total mine count
    pub fn mines(&self) -> usize {
        self.mines
    }

    /// Number of safe cells a player has to open to win
    pub fn safe_cells(&self) -> usize {
        self.size() * self.size() - self.mines
    }

    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        self.cells.get(row, col).copied()
    }

    pub fn neighbors(&self, row: usize, col: usize) -> impl Iterator<Item = (usize, usize)> + use<> {
        self.cells.neighbors(row, col)
    }

    pub fn positions(&self) -> impl Iterator<Item = ((usize, usize), Cell)> + '_ {
        self.cells.positions().map(|(p, c)| (p, *c))
    }
}

/// One line per row: `*` for mines, `.` for zero, digits otherwise
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let last = self.size() - 1;
        for ((_, col), cell) in self.positions() {
            match cell {
                Cell::Mine => f.write_str("*")?,
                Cell::Safe(0) => f.write_str(".")?,
                Cell::Safe(n) => write!(f, "{n}")?,
            }
            if col == last {
                f.write_str("\n")?;
            }
        }
        Ok(())
    }
}

/// Mark (row, col) as a mine and bump the count of every safe neighbor
fn plant(cells: &mut Grid<Cell>, row: usize, col: usize) {
    if let Some(cell) = cells.get_mut(row, col) {
        *cell = Cell::Mine;
    }
    for (r, c) in cells.neighbors(row, col) {
        if let Some(Cell::Safe(adj)) = cells.get_mut(r, c) {
            *adj += 1;
        }
    }
}

/// Randomly place `mines` mines on a size x size board.
///
/// Draws uniformly random cells and retries on cells that already hold a mine,
/// so the expected number of draws stays close to `mines` as long as the board
/// is not nearly full.
pub fn generate<R: Rng + ?Sized>(size: usize, mines: usize, rng: &mut R) -> Result<Board> {
    if size == 0 {
        return Err(GameError::EmptyBoard);
    }
    if mines >= size * size {
        return Err(GameError::TooManyMines { size, mines });
    }
    let mut cells = Grid::filled(size, Cell::Safe(0));
    let mut placed = 0;
    let mut rejected = 0usize;
    while placed < mines {
        let row = rng.gen_range(0..size);
        let col = rng.gen_range(0..size);
        if cells.get(row, col).is_some_and(|c| c.is_mine()) {
            rejected += 1;
            continue;
        }
        plant(&mut cells, row, col);
        placed += 1;
    }
    debug!(size, mines, rejected, "mines placed");
    Ok(Board { cells, mines })
}
