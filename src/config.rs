//! Game configuration.

/// Who makes the first move of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Player {
    Human,
    #[default]
    Computer,
}

impl Player {
    #[inline]
    pub fn other(self) -> Player {
        match self {
            Player::Human => Player::Computer,
            Player::Computer => Player::Human,
        }
    }
}

/// Default pause before the computer answers, in milliseconds
pub const DEFAULT_COMPUTER_DELAY_MS: u64 = 1000;

/// Configuration for a game session.
///
/// # Examples
///
/// ```
/// use tictactoe::config::{GameConfig, Player};
///
/// let config = GameConfig::new()
///     .with_first_player(Player::Human)
///     .with_computer_delay_ms(250);
/// assert_eq!(config.first_player, Player::Human);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    /// Player owning the first move
    pub first_player: Player,
    /// Pause before the computer plays, so its move reads as a reply
    pub computer_delay_ms: u64,
}

impl GameConfig {
    /// Computer moves first after a one second pause
    pub fn new() -> Self {
        Self {
            first_player: Player::default(),
            computer_delay_ms: DEFAULT_COMPUTER_DELAY_MS,
        }
    }

    /// Set who moves first.
    pub fn with_first_player(mut self, player: Player) -> Self {
        self.first_player = player;
        self
    }

    /// Set the computer's pause.
    pub fn with_computer_delay_ms(mut self, delay_ms: u64) -> Self {
        self.computer_delay_ms = delay_ms;
        self
    }

    /// Computer's pause in seconds
    pub fn computer_delay_secs(&self) -> f64 {
        self.computer_delay_ms as f64 / 1000.0
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}
