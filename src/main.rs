//! Tic-tac-toe GUI and command line
//!
//! Opens the game window by default; `suggest` prints the computer's move
//! for a board instead.

mod cli;

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use tictactoe::config::{GameConfig, Player};
use tictactoe::ui::TicTacToeApp;
use tictactoe::{AIEngine, Board, Mark};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command.unwrap_or_default() {
        Command::Play {
            human_first,
            delay_ms,
        } => {
            let first_player = if human_first {
                Player::Human
            } else {
                Player::Computer
            };
            let config = GameConfig::new()
                .with_first_player(first_player)
                .with_computer_delay_ms(delay_ms);
            run_gui(config)
        }
        Command::Suggest { board, computer } => suggest(&board, computer.into()),
    }
}

/// Open the game window
fn run_gui(config: GameConfig) -> Result<()> {
    info!(?config, "starting GUI");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([820.0, 600.0])
            .with_min_inner_size([560.0, 420.0])
            .with_title("I Can't Lose!"),
        ..Default::default()
    };

    eframe::run_native(
        "tictactoe",
        options,
        Box::new(move |cc| Ok(Box::new(TicTacToeApp::new(cc, config)))),
    )
    .map_err(|e| anyhow!("GUI failed: {e}"))
}

/// Print the computer's move for `text`
fn suggest(text: &str, computer: Mark) -> Result<()> {
    let board: Board = text
        .parse()
        .with_context(|| format!("invalid board {text:?}"))?;

    let mut engine = AIEngine::new();
    let result = engine
        .get_move_with_stats(&board, computer, computer.opponent())
        .with_context(|| format!("no move for {computer} on {board}"))?;

    let score = result
        .score
        .map_or_else(|| "-".to_string(), |s| s.to_string());
    println!("board:       {board}");
    println!("move:        {}", result.best_move);
    println!("search type: {:?}", result.search_type);
    println!("score:       {score}");
    println!("nodes:       {}", result.nodes);
    println!("time:        {}ms", result.time_ms);
    println!("after:       {}", board.with_mark(result.best_move, computer));

    Ok(())
}
