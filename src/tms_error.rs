// Error types for board construction, difficulty selection and the config file

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("board size must be at least 1")]
    EmptyBoard,
    #[error("{mines} mines do not fit on a {size}x{size} board")]
    TooManyMines { size: usize, mines: usize },
    #[error("unknown difficulty `{0}` (expected 0|1|2|3 or easy|medium|hard|extreme)")]
    UnknownDifficulty(String),
    #[error("no difficulty preset has board size {0}")]
    UnknownSize(usize),
    #[error("coordinates ({row}, {col}) are outside the board")]
    InvalidCoords { row: usize, col: usize },
    #[error("mine at ({row}, {col}) is listed twice")]
    DuplicateMine { row: usize, col: usize },
    #[error("board has {actual} cells but a {size}x{size} board needs {expected}")]
    InvalidBoardShape {
        size: usize,
        expected: usize,
        actual: usize,
    },
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("cannot access config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config file: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("cannot serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

pub type Result<T> = core::result::Result<T, GameError>;
