//! Tic-tac-toe against a computer that never loses
//!
//! The human plays X, the computer plays O on a 3x3 board. The computer
//! picks its move by taking an immediate win, else blocking the human's
//! immediate win, else running an exhaustive minimax search.
//!
//! # Architecture
//!
//! - [`board`]: Board representation with two 9-bit bitboards
//! - [`rules`]: Lines, winner detection and move validation
//! - [`search`]: Line threats and minimax
//! - [`engine`]: Move selection combining the shortcuts and the search
//! - [`config`]: Who moves first and how long the computer pauses
//! - [`ui`]: Game controller and the egui front end
//!
//! # Quick Start
//!
//! ```
//! use tictactoe::{evaluate, select_move, Board, Mark, Outcome};
//!
//! let mut board = Board::new();
//! board.place(0, Mark::X);
//!
//! // Computer answers as O
//! let cell = select_move(&board, Mark::O, Mark::X).unwrap();
//! assert_eq!(cell, 4);
//! board.place(cell, Mark::O);
//! assert_eq!(evaluate(&board), Outcome::Ongoing);
//! ```

pub mod board;
pub mod config;
pub mod engine;
pub mod error;
pub mod rules;
pub mod search;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{Board, Mark, Pos, BOARD_SIZE, TOTAL_CELLS};
pub use config::{GameConfig, Player};
pub use engine::{select_move, AIEngine, MoveResult, SearchType};
pub use error::{GameError, Result};
pub use rules::{evaluate, Outcome};
