//! Move legality

use crate::board::{Board, TOTAL_CELLS};
use crate::error::{GameError, Result};

/// Check if a cell index is on the board and empty
#[inline]
pub fn is_valid_move(board: &Board, idx: usize) -> bool {
    idx < TOTAL_CELLS && board.is_empty(idx)
}

/// Like [`is_valid_move`], but says why a move is rejected
pub fn validate_move(board: &Board, idx: usize) -> Result<()> {
    if idx >= TOTAL_CELLS {
        return Err(GameError::OutOfRange { index: idx });
    }
    if !board.is_empty(idx) {
        return Err(GameError::CellOccupied { index: idx });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Mark;

    #[test]
    fn test_valid_moves() {
        let board = Board::new().with_mark(4, Mark::X);
        assert!(is_valid_move(&board, 0));
        assert!(!is_valid_move(&board, 4));
        assert!(!is_valid_move(&board, 9));
    }

    #[test]
    fn test_validate_move_errors() {
        let board = Board::new().with_mark(4, Mark::X);
        assert_eq!(validate_move(&board, 3), Ok(()));
        assert_eq!(
            validate_move(&board, 4),
            Err(GameError::CellOccupied { index: 4 })
        );
        assert_eq!(
            validate_move(&board, 12),
            Err(GameError::OutOfRange { index: 12 })
        );
    }
}
