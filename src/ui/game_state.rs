//! Game state management for the tic-tac-toe GUI
//!
//! Owns the snapshot history, whose turn it is, and the explicit game phase.
//! Nothing here touches egui; the app feeds in clicks and the frame time.

use tracing::{debug, info, warn};

use crate::config::{GameConfig, Player};
use crate::engine::{AIEngine, MoveResult};
use crate::error::{GameError, Result};
use crate::rules::{evaluate, find_winning_line, validate_move, Outcome};
use crate::{Board, Mark};

/// Mark played by the human
pub const HUMAN_MARK: Mark = Mark::X;
/// Mark played by the computer
pub const COMPUTER_MARK: Mark = Mark::O;

/// Mark a player puts on the board
#[inline]
pub fn mark_of(player: Player) -> Mark {
    match player {
        Player::Human => HUMAN_MARK,
        Player::Computer => COMPUTER_MARK,
    }
}

/// Whether play continues on the current snapshot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    Ongoing,
    Ended(Outcome),
}

impl GamePhase {
    /// Phase after a move produced `outcome`. An ended game stays ended.
    pub fn advance(self, outcome: Outcome) -> GamePhase {
        match self {
            GamePhase::Ended(_) => self,
            GamePhase::Ongoing if outcome.is_over() => GamePhase::Ended(outcome),
            GamePhase::Ongoing => GamePhase::Ongoing,
        }
    }

    /// Phase of a snapshot reached without playing through it
    pub fn of_board(board: &Board) -> GamePhase {
        GamePhase::Ongoing.advance(evaluate(board))
    }

    #[inline]
    pub fn is_ended(self) -> bool {
        matches!(self, GamePhase::Ended(_))
    }
}

/// Computer move state
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AiState {
    Idle,
    /// Waiting for the reply pause to run out (seconds, frame clock)
    Thinking { ready_at: f64 },
}

/// Main game state
pub struct GameState {
    config: GameConfig,
    /// One board per ply, starting with the empty board
    history: Vec<Board>,
    /// Index of the snapshot on screen
    current_move: usize,
    phase: GamePhase,
    ai_state: AiState,
    engine: AIEngine,
    pub last_ai_result: Option<MoveResult>,
    pub message: Option<String>,
}

impl GameState {
    pub fn new(config: GameConfig) -> Self {
        info!(first_player = ?config.first_player, "new game");
        Self {
            config,
            history: vec![Board::new()],
            current_move: 0,
            phase: GamePhase::Ongoing,
            ai_state: AiState::Idle,
            engine: AIEngine::new(),
            last_ai_result: None,
            message: None,
        }
    }

    /// Start over with the same configuration
    pub fn reset(&mut self) {
        *self = Self::new(self.config);
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn history(&self) -> &[Board] {
        &self.history
    }

    pub fn current_move(&self) -> usize {
        self.current_move
    }

    pub fn current_board(&self) -> &Board {
        &self.history[self.current_move]
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Player owning the next move on the current snapshot
    pub fn player_to_move(&self) -> Player {
        if self.current_move % 2 == 0 {
            self.config.first_player
        } else {
            self.config.first_player.other()
        }
    }

    pub fn mark_to_move(&self) -> Mark {
        mark_of(self.player_to_move())
    }

    pub fn is_human_turn(&self) -> bool {
        !self.phase.is_ended() && self.player_to_move() == Player::Human
    }

    pub fn is_computer_turn(&self) -> bool {
        !self.phase.is_ended() && self.player_to_move() == Player::Computer
    }

    pub fn is_computer_thinking(&self) -> bool {
        matches!(self.ai_state, AiState::Thinking { .. })
    }

    /// Seconds left before the computer plays
    pub fn thinking_remaining(&self, now: f64) -> Option<f64> {
        match self.ai_state {
            AiState::Thinking { ready_at } => Some((ready_at - now).max(0.0)),
            AiState::Idle => None,
        }
    }

    /// Attempt to place the human's mark on a cell
    pub fn try_place_mark(&mut self, idx: usize) -> Result<()> {
        if self.phase.is_ended() {
            return Err(GameError::GameAlreadyOver);
        }
        if self.is_computer_thinking() {
            return Err(GameError::ComputerThinking);
        }
        if !self.is_human_turn() {
            return Err(GameError::NotYourTurn);
        }
        validate_move(self.current_board(), idx)?;

        self.execute_move(idx, HUMAN_MARK);
        Ok(())
    }

    /// Advance the computer's turn.
    ///
    /// The first call on the computer's turn starts the reply pause; the call
    /// that finds the pause over runs the whole search and plays the move.
    /// `now` is the frame clock in seconds.
    pub fn tick(&mut self, now: f64) {
        if !self.is_computer_turn() {
            self.ai_state = AiState::Idle;
            return;
        }

        if self.ai_state == AiState::Idle {
            let ready_at = now + self.config.computer_delay_secs();
            debug!(ready_at, "computer thinking");
            self.ai_state = AiState::Thinking { ready_at };
        }

        if let AiState::Thinking { ready_at } = self.ai_state {
            if now >= ready_at {
                self.play_computer_move();
            }
        }
    }

    fn play_computer_move(&mut self) {
        self.ai_state = AiState::Idle;

        let board = *self.current_board();
        match self
            .engine
            .get_move_with_stats(&board, COMPUTER_MARK, HUMAN_MARK)
        {
            Ok(result) => {
                self.execute_move(result.best_move, COMPUTER_MARK);
                self.last_ai_result = Some(result);
            }
            Err(e) => {
                warn!(error = %e, "computer could not move");
                self.message = Some(e.to_string());
            }
        }
    }

    /// Execute a move (for both human and computer)
    fn execute_move(&mut self, idx: usize, mark: Mark) {
        let next = self.current_board().with_mark(idx, mark);

        // Playing from an earlier snapshot drops the snapshots after it
        self.history.truncate(self.current_move + 1);
        self.history.push(next);
        self.current_move += 1;
        self.message = None;

        self.phase = self.phase.advance(evaluate(&next));
        info!(cell = idx, mark = %mark, ply = self.current_move, "move played");

        if let GamePhase::Ended(outcome) = self.phase {
            info!(%outcome, "game over");
        }
    }

    /// Show an earlier (or later) snapshot and continue from it
    pub fn jump_to(&mut self, move_index: usize) -> Result<()> {
        if move_index >= self.history.len() {
            return Err(GameError::NoSuchMove {
                index: move_index,
                len: self.history.len(),
            });
        }

        self.current_move = move_index;
        self.ai_state = AiState::Idle;
        self.phase = GamePhase::of_board(self.current_board());
        self.message = None;
        info!(move_index, phase = ?self.phase, "jumped to snapshot");
        Ok(())
    }

    /// Status line: next player, winner or draw
    pub fn status_text(&self) -> String {
        match self.phase {
            GamePhase::Ended(Outcome::Win(mark)) => format!("Winner: {mark}"),
            GamePhase::Ended(_) => "It's a draw!".to_string(),
            GamePhase::Ongoing => format!("Next player: {}", self.mark_to_move()),
        }
    }

    /// Labels for the history list, one per snapshot
    pub fn move_labels(&self) -> Vec<String> {
        (0..self.history.len())
            .map(|m| {
                if m == 0 {
                    "Go to game start".to_string()
                } else {
                    format!("Go to move #{m}")
                }
            })
            .collect()
    }

    /// Cells of the winning line once the game is won
    pub fn winning_line(&self) -> Option<[usize; 3]> {
        match self.phase {
            GamePhase::Ended(Outcome::Win(_)) => find_winning_line(self.current_board()),
            _ => None,
        }
    }

    /// Cell filled by the move that produced the current snapshot
    pub fn last_move(&self) -> Option<usize> {
        let prev = self.history.get(self.current_move.checked_sub(1)?)?;
        let cur = self.current_board();
        let added = (cur.x | cur.o).bits() ^ (prev.x | prev.o).bits();
        (added != 0).then(|| added.trailing_zeros() as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::SearchType;

    fn computer_first() -> GameState {
        GameState::new(GameConfig::new().with_computer_delay_ms(0))
    }

    fn human_first() -> GameState {
        GameState::new(
            GameConfig::new()
                .with_first_player(Player::Human)
                .with_computer_delay_ms(0),
        )
    }

    /// Human plays `cell`, then the computer answers
    fn play(state: &mut GameState, cell: usize) {
        state.try_place_mark(cell).unwrap();
        state.tick(0.0);
    }

    #[test]
    fn test_computer_moves_first_by_default() {
        let mut state = computer_first();
        assert!(state.is_computer_turn());
        assert_eq!(state.try_place_mark(4), Err(GameError::NotYourTurn));

        state.tick(0.0);
        assert_eq!(state.history().len(), 2);
        assert_eq!(state.current_board().get(0), COMPUTER_MARK);
        assert!(state.is_human_turn());
        assert_eq!(state.status_text(), "Next player: X");
        assert_eq!(state.last_move(), Some(0));
    }

    #[test]
    fn test_computer_waits_for_delay() {
        let mut state = GameState::new(GameConfig::new());
        state.tick(10.0);
        assert!(state.is_computer_thinking());
        assert_eq!(state.history().len(), 1);
        assert_eq!(state.try_place_mark(4), Err(GameError::ComputerThinking));
        assert_eq!(state.thinking_remaining(10.5), Some(0.5));

        state.tick(10.5);
        assert_eq!(state.history().len(), 1);

        state.tick(11.0);
        assert!(!state.is_computer_thinking());
        assert_eq!(state.history().len(), 2);
    }

    #[test]
    fn test_invalid_clicks_rejected() {
        let mut state = computer_first();
        state.tick(0.0);

        assert_eq!(
            state.try_place_mark(0),
            Err(GameError::CellOccupied { index: 0 })
        );
        assert_eq!(
            state.try_place_mark(9),
            Err(GameError::OutOfRange { index: 9 })
        );
        assert_eq!(state.history().len(), 2);
    }

    #[test]
    fn test_scripted_game_ends_in_draw() {
        let mut state = human_first();

        play(&mut state, 0);
        assert_eq!(state.current_board().get(4), COMPUTER_MARK);

        play(&mut state, 8);
        assert_eq!(state.current_board().get(1), COMPUTER_MARK);

        play(&mut state, 7);
        assert_eq!(state.current_board().get(6), COMPUTER_MARK);
        assert_eq!(
            state.last_ai_result.as_ref().map(|r| r.search_type),
            Some(SearchType::Block)
        );

        play(&mut state, 2);
        assert_eq!(state.current_board().get(5), COMPUTER_MARK);

        play(&mut state, 3);
        assert_eq!(state.phase(), GamePhase::Ended(Outcome::Draw));
        assert_eq!(state.status_text(), "It's a draw!");
        assert_eq!(state.winning_line(), None);
        assert_eq!(state.history().len(), 10);
        assert_eq!(state.try_place_mark(0), Err(GameError::GameAlreadyOver));
    }

    #[test]
    fn test_computer_wins_when_threat_ignored() {
        let mut state = human_first();
        play(&mut state, 0); // O takes the center
        play(&mut state, 1); // O blocks at 2
        assert_eq!(state.current_board().get(2), COMPUTER_MARK);

        play(&mut state, 8); // ignores the diagonal threat
        assert_eq!(state.current_board().get(6), COMPUTER_MARK);
        assert_eq!(state.phase(), GamePhase::Ended(Outcome::Win(Mark::O)));
        assert_eq!(state.status_text(), "Winner: O");
        assert_eq!(state.winning_line(), Some([2, 4, 6]));

        // No further computer moves once ended
        let len = state.history().len();
        state.tick(100.0);
        assert_eq!(state.history().len(), len);
        assert!(!state.is_computer_turn());
        assert_eq!(state.try_place_mark(3), Err(GameError::GameAlreadyOver));
    }

    #[test]
    fn test_jump_back_and_branch() {
        let mut state = human_first();
        play(&mut state, 0);
        assert_eq!(state.history().len(), 3);

        state.jump_to(0).unwrap();
        assert_eq!(state.current_move(), 0);
        assert!(state.current_board().is_board_empty());
        assert!(state.is_human_turn());
        // Future snapshots are kept until a new move is made
        assert_eq!(state.history().len(), 3);

        state.try_place_mark(8).unwrap();
        assert_eq!(state.history().len(), 2);
        assert_eq!(state.current_move(), 1);
        assert_eq!(state.current_board().get(8), HUMAN_MARK);
        assert_eq!(state.current_board().get(0), Mark::Empty);

        state.tick(0.0);
        assert_eq!(state.history().len(), 3);
    }

    #[test]
    fn test_jump_reopens_finished_game() {
        let mut state = human_first();
        play(&mut state, 0);
        play(&mut state, 1);
        play(&mut state, 8);
        assert!(state.phase().is_ended());

        state.jump_to(3).unwrap();
        assert_eq!(state.phase(), GamePhase::Ongoing);
        assert!(state.is_computer_turn());
        assert_eq!(state.status_text(), "Next player: O");

        state.jump_to(6).unwrap();
        assert!(state.phase().is_ended());
    }

    #[test]
    fn test_jump_out_of_range() {
        let mut state = human_first();
        assert_eq!(
            state.jump_to(5),
            Err(GameError::NoSuchMove { index: 5, len: 1 })
        );
    }

    #[test]
    fn test_jump_cancels_pending_computer_move() {
        let mut state = GameState::new(GameConfig::new().with_first_player(Player::Human));
        state.try_place_mark(4).unwrap();
        state.tick(0.0);
        assert!(state.is_computer_thinking());

        state.jump_to(0).unwrap();
        assert!(!state.is_computer_thinking());
        assert!(state.is_human_turn());
    }

    #[test]
    fn test_move_labels() {
        let mut state = human_first();
        assert_eq!(state.move_labels(), vec!["Go to game start"]);
        play(&mut state, 4);
        assert_eq!(
            state.move_labels(),
            vec!["Go to game start", "Go to move #1", "Go to move #2"]
        );
    }

    #[test]
    fn test_reset_keeps_config() {
        let mut state = human_first();
        play(&mut state, 4);
        state.reset();
        assert_eq!(state.history().len(), 1);
        assert_eq!(state.config().first_player, Player::Human);
        assert!(state.is_human_turn());
    }

    #[test]
    fn test_phase_never_reopens_through_advance() {
        let ended = GamePhase::Ongoing.advance(Outcome::Draw);
        assert_eq!(ended, GamePhase::Ended(Outcome::Draw));
        assert_eq!(ended.advance(Outcome::Ongoing), ended);
        assert_eq!(
            GamePhase::Ongoing.advance(Outcome::Ongoing),
            GamePhase::Ongoing
        );
    }
}
