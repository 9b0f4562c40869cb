//! Game rules for tic-tac-toe
//!
//! - Winning lines and winner detection
//! - Outcome evaluation (win / draw / ongoing)
//! - Move legality

pub mod moves;
pub mod outcome;
pub mod win;

// Re-exports for convenient access
pub use moves::{is_valid_move, validate_move};
pub use outcome::{evaluate, Outcome};
pub use win::{check_winner, find_winning_line, line_mask, LINES};
