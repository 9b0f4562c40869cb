//! Move selection for the computer player
//!
//! The engine picks a cell by trying, in order:
//!
//! 1. **Immediate win**: complete a line the computer already holds two of
//! 2. **Block**: fill the empty cell of a line the opponent holds two of
//! 3. **Minimax**: exhaustive search over every remaining empty cell
//!
//! # Example
//!
//! ```
//! use tictactoe::{AIEngine, Board, Mark, SearchType};
//!
//! let board: Board = "XX./.O./...".parse().unwrap();
//! let mut engine = AIEngine::new();
//!
//! let result = engine.get_move_with_stats(&board, Mark::O, Mark::X).unwrap();
//! assert_eq!(result.best_move, 2);
//! assert_eq!(result.search_type, SearchType::Block);
//! ```

use std::time::Instant;

use tracing::{debug, instrument};

use crate::board::{Board, Mark};
use crate::error::{GameError, Result};
use crate::rules::{evaluate, Outcome};
use crate::search::{find_completing_cell, Searcher};

/// Which step of the selection produced the move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchType {
    /// Completes one of the computer's lines
    ImmediateWin,
    /// Fills the empty cell of an opponent's line
    Block,
    /// Full minimax search
    Minimax,
}

/// Result of a move selection with search statistics
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveResult {
    /// Chosen cell index
    pub best_move: usize,
    /// Minimax value of the move, `None` when a shortcut picked it
    pub score: Option<i32>,
    /// Step that picked the move
    pub search_type: SearchType,
    /// Time taken in milliseconds
    pub time_ms: u64,
    /// Positions scored by minimax (0 for shortcuts)
    pub nodes: u64,
}

impl MoveResult {
    #[inline]
    fn shortcut(best_move: usize, search_type: SearchType, time_ms: u64) -> Self {
        Self {
            best_move,
            score: None,
            search_type,
            time_ms,
            nodes: 0,
        }
    }
}

/// Computer opponent.
///
/// Keeps running totals for diagnostics only. Selection itself is
/// deterministic: the same board always gives the same move.
#[derive(Debug, Default)]
pub struct AIEngine {
    /// Total positions scored across all selections
    total_nodes: u64,
    /// Number of selections made
    moves_selected: u64,
}

impl AIEngine {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the computer's move.
    ///
    /// See [`AIEngine::get_move_with_stats`] for the rules and errors.
    pub fn get_move(&mut self, board: &Board, computer: Mark, opponent: Mark) -> Result<usize> {
        self.get_move_with_stats(board, computer, opponent)
            .map(|result| result.best_move)
    }

    /// Get the computer's move with search statistics.
    ///
    /// # Errors
    ///
    /// - [`GameError::InvalidMarks`] unless the sides are one X and one O
    /// - [`GameError::GameAlreadyOver`] if the board is already won or drawn
    /// - [`GameError::NoEmptyCells`] if there is nowhere to play
    #[instrument(level = "debug", skip(self, board), fields(board = %board))]
    pub fn get_move_with_stats(
        &mut self,
        board: &Board,
        computer: Mark,
        opponent: Mark,
    ) -> Result<MoveResult> {
        let start = Instant::now();

        if computer == Mark::Empty || computer.opponent() != opponent {
            return Err(GameError::InvalidMarks { computer, opponent });
        }
        if board.empty_count() == 0 {
            return Err(GameError::NoEmptyCells);
        }
        if evaluate(board) != Outcome::Ongoing {
            return Err(GameError::GameAlreadyOver);
        }

        let result = if let Some(cell) = find_completing_cell(board, computer) {
            MoveResult::shortcut(cell, SearchType::ImmediateWin, elapsed_ms(start))
        } else if let Some(cell) = find_completing_cell(board, opponent) {
            MoveResult::shortcut(cell, SearchType::Block, elapsed_ms(start))
        } else {
            let mut searcher = Searcher::new(computer, opponent);
            let found = searcher.search(board);
            // Ongoing board with an empty cell always yields a move
            let best_move = found.best_move.ok_or(GameError::NoEmptyCells)?;
            MoveResult {
                best_move,
                score: Some(found.score),
                search_type: SearchType::Minimax,
                time_ms: elapsed_ms(start),
                nodes: found.nodes,
            }
        };

        self.total_nodes += result.nodes;
        self.moves_selected += 1;
        debug!(
            cell = result.best_move,
            search_type = ?result.search_type,
            nodes = result.nodes,
            time_ms = result.time_ms,
            "move selected"
        );

        Ok(result)
    }

    /// Total positions scored since this engine was created
    #[must_use]
    pub fn total_nodes(&self) -> u64 {
        self.total_nodes
    }

    /// Number of moves this engine has selected
    #[must_use]
    pub fn moves_selected(&self) -> u64 {
        self.moves_selected
    }
}

#[inline]
fn elapsed_ms(start: Instant) -> u64 {
    start.elapsed().as_millis() as u64
}

/// Select the computer's move with a fresh engine
pub fn select_move(board: &Board, computer: Mark, opponent: Mark) -> Result<usize> {
    AIEngine::new().get_move(board, computer, opponent)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::TOTAL_CELLS;

    fn board(s: &str) -> Board {
        s.parse().unwrap()
    }

    #[test]
    fn test_engine_finds_immediate_win() {
        let mut engine = AIEngine::new();
        let result = engine
            .get_move_with_stats(&board("XX./OO./..."), Mark::O, Mark::X)
            .unwrap();

        assert_eq!(result.best_move, 5);
        assert_eq!(result.search_type, SearchType::ImmediateWin);
        assert_eq!(result.score, None);
        assert_eq!(result.nodes, 0);
    }

    #[test]
    fn test_engine_blocks_opponent_win() {
        let mut engine = AIEngine::new();
        let result = engine
            .get_move_with_stats(&board("XX./.O./..."), Mark::O, Mark::X)
            .unwrap();

        assert_eq!(result.best_move, 2);
        assert_eq!(result.search_type, SearchType::Block);
    }

    #[test]
    fn test_win_takes_priority_over_block() {
        // X threatens 2, O completes the bottom row first
        let b = board("XX./.O./O.O");
        assert_eq!(select_move(&b, Mark::O, Mark::X), Ok(7));
    }

    #[test]
    fn test_engine_empty_board() {
        let mut engine = AIEngine::new();
        let result = engine
            .get_move_with_stats(&Board::new(), Mark::O, Mark::X)
            .unwrap();

        assert_eq!(result.best_move, 0);
        assert_eq!(result.search_type, SearchType::Minimax);
        assert_eq!(result.score, Some(0));
        assert!(result.nodes > 0);
    }

    #[test]
    fn test_engine_is_deterministic() {
        for text in ["...../....", "X../.../...", "X../.O./..X", "XO./.X./..."] {
            let b = board(text);
            let first = select_move(&b, Mark::O, Mark::X);
            assert!(first.is_ok());
            for _ in 0..3 {
                assert_eq!(select_move(&b, Mark::O, Mark::X), first);
            }
        }
    }

    #[test]
    fn test_engine_leaves_board_untouched() {
        let b = board("X../.O./..X");
        let copy = b;
        let mut engine = AIEngine::new();
        engine.get_move_with_stats(&b, Mark::O, Mark::X).unwrap();
        assert_eq!(b, copy);
    }

    #[test]
    fn test_engine_rejects_full_board() {
        assert_eq!(
            select_move(&board("XOX/XOO/OXX"), Mark::O, Mark::X),
            Err(GameError::NoEmptyCells)
        );
    }

    #[test]
    fn test_engine_rejects_finished_game() {
        assert_eq!(
            select_move(&board("XXX/OO./..."), Mark::O, Mark::X),
            Err(GameError::GameAlreadyOver)
        );
    }

    #[test]
    fn test_engine_rejects_bad_sides() {
        assert_eq!(
            select_move(&Board::new(), Mark::O, Mark::O),
            Err(GameError::InvalidMarks {
                computer: Mark::O,
                opponent: Mark::O
            })
        );
        assert!(select_move(&Board::new(), Mark::Empty, Mark::X).is_err());
    }

    #[test]
    fn test_engine_counts_selections() {
        let mut engine = AIEngine::new();
        engine.get_move(&board("X../.../..."), Mark::O, Mark::X).unwrap();
        engine.get_move(&board("XX./.O./..."), Mark::O, Mark::X).unwrap();
        assert_eq!(engine.moves_selected(), 2);
        assert!(engine.total_nodes() > 0);
    }

    /// Play every opponent reply against the engine and report the worst
    /// result for the computer.
    fn worst_outcome(board: &Board, computer: Mark, computer_to_move: bool) -> Outcome {
        match evaluate(board) {
            Outcome::Ongoing => {}
            done => return done,
        }
        if computer_to_move {
            let cell = select_move(board, computer, computer.opponent()).unwrap();
            assert!(board.is_empty(cell));
            return worst_outcome(&board.with_mark(cell, computer), computer, false);
        }

        let mut worst = Outcome::Win(computer);
        for cell in (0..TOTAL_CELLS).filter(|&c| board.is_empty(c)) {
            let next = board.with_mark(cell, computer.opponent());
            match worst_outcome(&next, computer, true) {
                Outcome::Win(m) if m != computer => return Outcome::Win(m),
                Outcome::Draw => worst = Outcome::Draw,
                _ => {}
            }
        }
        worst
    }

    #[test]
    fn test_computer_never_loses_moving_first() {
        let worst = worst_outcome(&Board::new(), Mark::O, true);
        assert_ne!(worst, Outcome::Win(Mark::X));
    }

    #[test]
    fn test_computer_never_loses_moving_second() {
        let worst = worst_outcome(&Board::new(), Mark::O, false);
        assert_ne!(worst, Outcome::Win(Mark::X));
    }

    #[test]
    fn test_optimal_self_play_is_a_draw() {
        let mut b = Board::new();
        let mut mover = Mark::O;
        while evaluate(&b) == Outcome::Ongoing {
            let cell = select_move(&b, mover, mover.opponent()).unwrap();
            b = b.with_mark(cell, mover);
            mover = mover.opponent();
        }
        assert_eq!(evaluate(&b), Outcome::Draw);
    }
}
