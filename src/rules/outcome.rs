//! Outcome evaluation

use std::fmt;

use crate::board::{Board, Mark};

use super::win::check_winner;

/// State of a board: always derived, never stored on its own
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    Ongoing,
    Win(Mark),
    Draw,
}

impl Outcome {
    #[inline]
    pub fn is_over(self) -> bool {
        !matches!(self, Outcome::Ongoing)
    }

    #[inline]
    pub fn winner(self) -> Option<Mark> {
        match self {
            Outcome::Win(mark) => Some(mark),
            _ => None,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Ongoing => f.write_str("ongoing"),
            Outcome::Win(mark) => write!(f, "{mark} wins"),
            Outcome::Draw => f.write_str("draw"),
        }
    }
}

/// Evaluate a board: a complete line wins, a full board without one is a
/// draw, anything else is still being played.
pub fn evaluate(board: &Board) -> Outcome {
    if let Some(mark) = check_winner(board) {
        return Outcome::Win(mark);
    }
    if board.is_full() {
        return Outcome::Draw;
    }
    Outcome::Ongoing
}
