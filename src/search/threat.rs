//! Line threat detection
//!
//! A threat is a line holding two marks of one side and one empty cell:
//! whoever owns the two marks wins by filling the empty cell. The engine
//! uses this twice before searching, once for its own marks (win now) and
//! once for the opponent's (block now).

use crate::board::{Board, Mark};
use crate::rules::{line_mask, LINES};

/// Empty cell completing the first threatened line for `mark`.
///
/// Lines are scanned in [`LINES`] order and the first hit is returned;
/// every immediate win is equally good, so no further lines are examined.
pub fn find_completing_cell(board: &Board, mark: Mark) -> Option<usize> {
    let own = board.marks(mark)?;
    LINES.iter().find_map(|&line| {
        let owned = own.bits() & line_mask(line);
        if owned.count_ones() != 2 {
            return None;
        }
        line.into_iter()
            .find(|&idx| owned & (1 << idx) == 0)
            .filter(|&idx| board.is_empty(idx))
    })
}
