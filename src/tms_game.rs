// Game session: difficulty presets, cursor, reveal bookkeeping and win/loss state

use rand::Rng;
use std::fmt;
use std::str::FromStr;
use tracing::{info, trace};

use crate::tms_board::{Board, Cell, generate};
use crate::tms_error::{GameError, Result};
use crate::tms_grid::Grid;
use crate::tms_reveal::{self, Mark};

/// Difficulty presets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Difficulty {
    Easy,    // 8x8, 10 mines
    Medium,  // 15x15, 40 mines
    Hard,    // 22x22, 99 mines
    Extreme, // 40x40, 320 mines
}

impl Difficulty {
    pub const ALL: [Difficulty; 4] = [
        Difficulty::Easy,
        Difficulty::Medium,
        Difficulty::Hard,
        Difficulty::Extreme,
    ];

    /// Board side length and mine count for this preset
    pub fn params(self) -> (usize, usize) {
        match self {
            Difficulty::Easy => (8, 10),
            Difficulty::Medium => (15, 40),
            Difficulty::Hard => (22, 99),
            Difficulty::Extreme => (40, 320),
        }
    }

    pub fn size(self) -> usize {
        self.params().0
    }

    pub fn name(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
            Difficulty::Extreme => "extreme",
        }
    }

    /// Look up the preset with the given board size
    pub fn from_size(size: usize) -> Result<Difficulty> {
        Difficulty::ALL
            .into_iter()
            .find(|d| d.size() == size)
            .ok_or(GameError::UnknownSize(size))
    }
}

impl FromStr for Difficulty {
    type Err = GameError;

    /// Accepts the preset index (0-3) or its name, case-insensitive
    fn from_str(s: &str) -> Result<Difficulty> {
        match s.trim().to_ascii_lowercase().as_str() {
            "0" | "easy" => Ok(Difficulty::Easy),
            "1" | "medium" => Ok(Difficulty::Medium),
            "2" | "hard" => Ok(Difficulty::Hard),
            "3" | "extreme" => Ok(Difficulty::Extreme),
            _ => Err(GameError::UnknownDifficulty(s.to_string())),
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let size = self.size();
        write!(f, "{} {size}x{size}", self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    InProgress,
    Lost,
    Won,
}

impl Status {
    pub fn is_over(self) -> bool {
        self != Status::InProgress
    }
}

/// Discrete player commands produced by the input layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Up,
    Down,
    Left,
    Right,
    Reveal,
    ToggleFlag,
    NewGame,
    Quit,
}

/// What the display should draw for one cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellView {
    Hidden,
    Flagged,
    Blank,
    Count(u8),
    Mine,      // Unflagged mine shown after a loss
    Detonated, // The mine that ended the game
    WrongFlag, // Flag on a safe cell, shown after a loss
}

/// Main game state
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    marks: Grid<Mark>,
    cursor: (usize, usize), // (row, col)
    remaining: usize,       // Safe cells still hidden or flagged
    status: Status,
    detonated: Option<(usize, usize)>,
}

impl Game {
    /// Create a new game for a preset with a freshly generated board
    pub fn new<R: Rng + ?Sized>(difficulty: Difficulty, rng: &mut R) -> Result<Self> {
        let (size, mines) = difficulty.params();
        let board = generate(size, mines, rng)?;
        trace!("layout:\n{board}");
        Ok(Game::from_board(board))
    }

    /// Start a game on an existing board
    pub fn from_board(board: Board) -> Self {
        let size = board.size();
        Game {
            remaining: board.safe_cells(),
            marks: Grid::filled(size, Mark::Hidden),
            board,
            cursor: (0, 0),
            status: Status::InProgress,
            detonated: None,
        }
    }

    pub fn size(&self) -> usize {
        self.board.size()
    }

    pub fn cursor(&self) -> (usize, usize) {
        self.cursor
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn remaining(&self) -> usize {
        self.remaining
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn mark(&self, row: usize, col: usize) -> Option<Mark> {
        self.marks.get(row, col).copied()
    }

    /// Mine counter for the status line (total mines - flags).
    /// Goes negative if the player places too many flags.
    pub fn mines_left(&self) -> isize {
        let flags = self.marks.iter().filter(|m| **m == Mark::Flagged).count();
        self.board.mines() as isize - flags as isize
    }

    /// Apply one command. Quit is left to the caller.
    /// Once the game is over only NewGame has an effect.
    pub fn apply<R: Rng + ?Sized>(&mut self, command: Command, rng: &mut R) -> Result<Status> {
        if command == Command::NewGame {
            self.reset(rng)?;
            return Ok(self.status);
        }
        if self.status.is_over() {
            return Ok(self.status);
        }
        let (row, col) = self.cursor;
        match command {
            Command::Up => self.step_cursor(-1, 0),
            Command::Down => self.step_cursor(1, 0),
            Command::Left => self.step_cursor(0, -1),
            Command::Right => self.step_cursor(0, 1),
            Command::Reveal => {
                self.reveal(row, col);
            }
            Command::ToggleFlag => self.toggle_flag(row, col),
            Command::NewGame | Command::Quit => {}
        }
        Ok(self.status)
    }

    /// Move the cursor one step, clamped to the board edges
    pub fn step_cursor(&mut self, drow: isize, dcol: isize) {
        let last = self.size().saturating_sub(1) as isize;
        let row = (self.cursor.0 as isize + drow).clamp(0, last) as usize;
        let col = (self.cursor.1 as isize + dcol).clamp(0, last) as usize;
        self.cursor = (row, col);
    }

    /// Reveal (row, col) and update the game status
    pub fn reveal(&mut self, row: usize, col: usize) -> Status {
        if self.status.is_over() {
            return self.status;
        }
        let out = tms_reveal::reveal(&self.board, &mut self.marks, row, col, &mut self.remaining);
        if out.hit_mine {
            info!(row, col, "stepped on a mine");
            self.detonated = Some((row, col));
            self.status = Status::Lost;
        } else if out.opened > 0 && self.remaining == 0 {
            info!("all safe cells revealed");
            self.status = Status::Won;
        }
        self.status
    }

    pub fn toggle_flag(&mut self, row: usize, col: usize) {
        if self.status.is_over() {
            return;
        }
        tms_reveal::toggle_flag(&mut self.marks, row, col);
    }

    /// Throw away both grids and deal a new board of the same size and mine count
    pub fn reset<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<()> {
        let board = generate(self.board.size(), self.board.mines(), rng)?;
        info!(size = board.size(), mines = board.mines(), "new game");
        *self = Game::from_board(board);
        Ok(())
    }

    /// Display projection for one cell. After a loss every mine is shown
    /// and wrong flags are marked; the reveal marks themselves are untouched.
    pub fn cell_view(&self, row: usize, col: usize) -> CellView {
        let (Some(cell), Some(mark)) = (self.board.get(row, col), self.mark(row, col)) else {
            return CellView::Hidden;
        };
        let lost = self.status == Status::Lost;
        match (mark, cell) {
            (Mark::Revealed, Cell::Mine) if self.detonated == Some((row, col)) => CellView::Detonated,
            (Mark::Revealed, Cell::Mine) => CellView::Mine,
            (Mark::Revealed, Cell::Safe(0)) => CellView::Blank,
            (Mark::Revealed, Cell::Safe(n)) => CellView::Count(n),
            (Mark::Flagged, Cell::Safe(_)) if lost => CellView::WrongFlag,
            (Mark::Flagged, _) => CellView::Flagged,
            (Mark::Hidden, Cell::Mine) if lost => CellView::Mine,
            (Mark::Hidden, _) => CellView::Hidden,
        }
    }
}
