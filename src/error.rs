//! Error types for the tic-tac-toe crate

use thiserror::Error;

use crate::board::Mark;

/// Main error type for the tic-tac-toe crate
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum GameError {
    #[error("cell {index} is out of bounds (must be 0-8)")]
    OutOfRange { index: usize },

    #[error("cell {index} is already occupied")]
    CellOccupied { index: usize },

    #[error("game already over")]
    GameAlreadyOver,

    #[error("not your turn")]
    NotYourTurn,

    #[error("computer is thinking")]
    ComputerThinking,

    #[error("no empty cells left to play")]
    NoEmptyCells,

    #[error("invalid sides: computer '{computer:?}' vs opponent '{opponent:?}' (need one X and one O)")]
    InvalidMarks { computer: Mark, opponent: Mark },

    #[error("no move #{index} in history of {len} snapshots")]
    NoSuchMove { index: usize, len: usize },

    #[error("board text must have 9 cells, got {got}")]
    InvalidBoardLength { got: usize },

    #[error("invalid character '{character}' at position {position} in board text")]
    InvalidCellCharacter { character: char, position: usize },
}

/// Convenience alias used across the crate
pub type Result<T> = std::result::Result<T, GameError>;
