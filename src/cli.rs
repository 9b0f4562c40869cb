//! Command-line interface for tictactoe.

use clap::{Parser, Subcommand, ValueEnum};

use tictactoe::Mark;

/// Tic-tac-toe against a computer that never loses
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Tic-tac-toe against a computer that never loses", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, PartialEq)]
pub enum Command {
    /// Open the game window
    Play {
        /// Let the human (X) make the first move
        #[arg(long)]
        human_first: bool,

        /// Pause before the computer answers, in milliseconds
        #[arg(long, default_value_t = tictactoe::config::DEFAULT_COMPUTER_DELAY_MS)]
        delay_ms: u64,
    },

    /// Print the computer's move for a board and exit
    Suggest {
        /// Board as 9 cells in row order, e.g. "XX./.O./..." ('.', '_' or '-' for empty)
        board: String,

        /// Mark the computer plays
        #[arg(long, value_enum, ignore_case = true, default_value_t = Side::O)]
        computer: Side,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Play {
            human_first: false,
            delay_ms: tictactoe::config::DEFAULT_COMPUTER_DELAY_MS,
        }
    }
}

/// Mark accepted on the command line
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    X,
    O,
}

impl From<Side> for Mark {
    fn from(side: Side) -> Mark {
        match side {
            Side::X => Mark::X,
            Side::O => Mark::O,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_subcommand_means_play() {
        let cli = Cli::try_parse_from(["tictactoe"]).unwrap();
        assert_eq!(cli.command.unwrap_or_default(), Command::default());
    }

    #[test]
    fn test_play_flags() {
        let cli =
            Cli::try_parse_from(["tictactoe", "play", "--human-first", "--delay-ms", "0"]).unwrap();
        assert_eq!(
            cli.command,
            Some(Command::Play {
                human_first: true,
                delay_ms: 0
            })
        );
    }

    #[test]
    fn test_suggest_defaults_to_o() {
        let cli = Cli::try_parse_from(["tictactoe", "suggest", "XX./.O./..."]).unwrap();
        assert_eq!(
            cli.command,
            Some(Command::Suggest {
                board: "XX./.O./...".to_string(),
                computer: Side::O
            })
        );
    }

    #[test]
    fn test_suggest_side_is_case_insensitive() {
        let cli = Cli::try_parse_from(["tictactoe", "suggest", ".........", "--computer", "X"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Command::Suggest { computer: Side::X, .. })
        ));
    }

    #[test]
    fn test_suggest_rejects_unknown_side() {
        assert!(Cli::try_parse_from(["tictactoe", "suggest", ".........", "--computer", "Z"]).is_err());
    }
}
