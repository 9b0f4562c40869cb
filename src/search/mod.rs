//! Search module for the tic-tac-toe AI
//!
//! Contains:
//! - Line threat detection for the win-now / block-now shortcuts
//! - Exhaustive minimax over the remaining game tree

pub mod minimax;
pub mod threat;

pub use minimax::{minimax_score, SearchResult, Searcher, DRAW, LOSS, WIN};
pub use threat::find_completing_cell;
