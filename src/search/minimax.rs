//! Exhaustive minimax search
//!
//! The 3x3 game tree is small enough to search to the end from any
//! position, so there is no depth limit and no evaluation heuristic: a
//! finished board scores +1 (computer won), -1 (opponent won) or 0 (draw).
//!
//! The search backtracks on a private copy of the caller's board. Each
//! speculative mark is removed again before the next candidate is tried,
//! so the copy is back to its starting state when the search returns.
//!
//! Maximizing nodes stop at the first +1 since nothing beats a win.
//! Minimizing nodes have no matching cutoff and always try every cell.
//!
//! # Example
//!
//! ```
//! use tictactoe::board::{Board, Mark};
//! use tictactoe::search::Searcher;
//!
//! let board: Board = "XX./OO./X..".parse().unwrap();
//! let mut searcher = Searcher::new(Mark::O, Mark::X);
//! let result = searcher.search(&board);
//! assert_eq!(result.best_move, Some(5));
//! assert_eq!(result.score, 1);
//! ```

use tracing::trace;

use crate::board::{Board, Mark, TOTAL_CELLS};
use crate::rules::{evaluate, Outcome};

/// Score of a board the computer has won
pub const WIN: i32 = 1;
/// Score of a drawn board
pub const DRAW: i32 = 0;
/// Score of a board the opponent has won
pub const LOSS: i32 = -1;

/// Root search result
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    /// Best cell found, `None` when the board has no empty cell
    pub best_move: Option<usize>,
    /// Minimax value of the best cell
    pub score: i32,
    /// Positions scored during the search
    pub nodes: u64,
}

/// Minimax searcher for one pair of sides
#[derive(Debug, Clone)]
pub struct Searcher {
    computer: Mark,
    opponent: Mark,
    nodes: u64,
}

impl Searcher {
    /// Searcher playing `computer` against `opponent`
    pub fn new(computer: Mark, opponent: Mark) -> Self {
        Self {
            computer,
            opponent,
            nodes: 0,
        }
    }

    /// Nodes scored since the last root search started
    #[inline]
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    /// Pick the computer's best cell.
    ///
    /// Every empty cell is tried in index order; only a strictly greater
    /// score replaces the current best, so ties go to the lowest index.
    pub fn search(&mut self, board: &Board) -> SearchResult {
        self.nodes = 0;
        let mut scratch = *board;
        let mut best_move = None;
        let mut best_score = i32::MIN;

        for idx in 0..TOTAL_CELLS {
            if !scratch.is_empty(idx) {
                continue;
            }
            scratch.place(idx, self.computer);
            let score = self.score(&mut scratch, false);
            scratch.remove(idx);
            trace!(cell = idx, score, "root candidate");

            if score > best_score {
                best_score = score;
                best_move = Some(idx);
            }
        }
        debug_assert_eq!(scratch, *board);

        SearchResult {
            best_move,
            score: if best_move.is_some() { best_score } else { DRAW },
            nodes: self.nodes,
        }
    }

    /// Minimax value of `board` with the computer to move when
    /// `maximizing`, the opponent otherwise.
    ///
    /// `board` is returned to its original state before this returns.
    pub fn score(&mut self, board: &mut Board, maximizing: bool) -> i32 {
        self.nodes += 1;

        match evaluate(board) {
            Outcome::Win(mark) if mark == self.opponent => return LOSS,
            Outcome::Win(_) => return WIN,
            Outcome::Draw => return DRAW,
            Outcome::Ongoing => {}
        }

        let mover = if maximizing { self.computer } else { self.opponent };
        let mut best = if maximizing { i32::MIN } else { i32::MAX };

        for idx in 0..TOTAL_CELLS {
            if !board.is_empty(idx) {
                continue;
            }
            board.place(idx, mover);
            let score = self.score(board, !maximizing);
            board.remove(idx);

            best = if maximizing { best.max(score) } else { best.min(score) };

            if maximizing && best == WIN {
                break;
            }
        }

        best
    }
}

/// Minimax value of `board` for `computer` without keeping a searcher around
pub fn minimax_score(board: &Board, maximizing: bool, computer: Mark) -> i32 {
    let mut scratch = *board;
    Searcher::new(computer, computer.opponent()).score(&mut scratch, maximizing)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(s: &str) -> Board {
        s.parse().unwrap()
    }

    #[test]
    fn test_terminal_scores() {
        assert_eq!(minimax_score(&board("OOO/XX./X.."), true, Mark::O), WIN);
        assert_eq!(minimax_score(&board("XXX/OO./O.."), false, Mark::O), LOSS);
        assert_eq!(minimax_score(&board("XOX/XOO/OXX"), true, Mark::O), DRAW);
    }

    #[test]
    fn test_win_available_scores_win() {
        // O to move completes the middle row
        assert_eq!(minimax_score(&board("XX./OO./X.."), true, Mark::O), WIN);
    }

    #[test]
    fn test_double_threat_against_computer_scores_loss() {
        // X threatens 2 and 3, O can block only one
        assert_eq!(minimax_score(&board("XX./.O./X.O"), true, Mark::O), LOSS);
    }

    #[test]
    fn test_empty_board_is_a_draw() {
        assert_eq!(minimax_score(&Board::new(), true, Mark::O), DRAW);
    }

    #[test]
    fn test_search_ties_go_to_lowest_index() {
        let mut searcher = Searcher::new(Mark::O, Mark::X);
        let result = searcher.search(&Board::new());
        assert_eq!(result.best_move, Some(0));
        assert_eq!(result.score, DRAW);
        assert!(result.nodes > 0);
        assert_eq!(searcher.nodes(), result.nodes);
    }

    #[test]
    fn test_search_answers_corner_with_center() {
        // Every reply except the center loses against an opening corner
        let mut searcher = Searcher::new(Mark::O, Mark::X);
        let result = searcher.search(&board("X../.../..."));
        assert_eq!(result.best_move, Some(4));
        assert_eq!(result.score, DRAW);
    }

    #[test]
    fn test_search_full_board() {
        let mut searcher = Searcher::new(Mark::O, Mark::X);
        let result = searcher.search(&board("XOX/XOO/OXX"));
        assert_eq!(result.best_move, None);
        assert_eq!(result.nodes, 0);
    }

    #[test]
    fn test_score_restores_board() {
        let start = board("X../.O./..X");
        let mut scratch = start;
        let mut searcher = Searcher::new(Mark::O, Mark::X);
        searcher.score(&mut scratch, true);
        assert_eq!(scratch, start);
        searcher.score(&mut scratch, false);
        assert_eq!(scratch, start);
    }

    #[test]
    fn test_search_leaves_input_untouched() {
        let start = board("X.O/.X./...");
        let copy = start;
        Searcher::new(Mark::O, Mark::X).search(&start);
        assert_eq!(start, copy);
    }

    #[test]
    fn test_roles_can_be_swapped() {
        // Same position, X as the computer, X to move wins at 2
        assert_eq!(minimax_score(&board("XX./OO./..."), true, Mark::X), WIN);
    }
}
