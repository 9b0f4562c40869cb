//! Win condition checking
//!
//! A mark wins by filling all three cells of one of the eight fixed lines.
//! Lines are always scanned in the order of [`LINES`], so when a board has
//! more than one complete line the first one in that order is reported.

use crate::board::{Board, Mark};

/// Rows, then columns, then the two diagonals
pub const LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// Bit mask of a line's three cells
#[inline]
pub const fn line_mask(line: [usize; 3]) -> u16 {
    (1 << line[0]) | (1 << line[1]) | (1 << line[2])
}

/// First complete line and the mark that filled it
fn first_complete_line(board: &Board) -> Option<(Mark, [usize; 3])> {
    LINES.iter().find_map(|&line| {
        let mask = line_mask(line);
        if board.x.contains_all(mask) {
            Some((Mark::X, line))
        } else if board.o.contains_all(mask) {
            Some((Mark::O, line))
        } else {
            None
        }
    })
}

/// Winner of the board, if any line is complete
#[inline]
pub fn check_winner(board: &Board) -> Option<Mark> {
    first_complete_line(board).map(|(mark, _)| mark)
}

/// Cells of the first complete line, for highlighting
pub fn find_winning_line(board: &Board) -> Option<[usize; 3]> {
    first_complete_line(board).map(|(_, line)| line)
}
