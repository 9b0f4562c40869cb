//! Main application for the tic-tac-toe GUI

use eframe::egui;
use egui::{CentralPanel, Context, CornerRadius, Frame, RichText, SidePanel, TopBottomPanel};
use tracing::debug;

use super::board_view::BoardView;
use super::game_state::{GamePhase, GameState, HUMAN_MARK};
use super::theme::*;
use crate::config::{GameConfig, Player};
use crate::rules::Outcome;

/// Main tic-tac-toe application
pub struct TicTacToeApp {
    state: GameState,
    board_view: BoardView,
    show_debug: bool,
}

impl Default for TicTacToeApp {
    fn default() -> Self {
        Self::with_config(GameConfig::default())
    }
}

impl TicTacToeApp {
    /// Create the app for an eframe window
    pub fn new(_cc: &eframe::CreationContext<'_>, config: GameConfig) -> Self {
        Self::with_config(config)
    }

    pub fn with_config(config: GameConfig) -> Self {
        Self {
            state: GameState::new(config),
            board_view: BoardView::default(),
            show_debug: false,
        }
    }

    /// Start a new game with a different first player
    fn new_game(&mut self, first_player: Player) {
        let config = self.state.config().with_first_player(first_player);
        self.state = GameState::new(config);
    }

    /// Render the top menu bar
    fn render_menu_bar(&mut self, ctx: &Context) {
        TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("Game", |ui| {
                    if ui.button("New Game (Computer first)").clicked() {
                        self.new_game(Player::Computer);
                        ui.close_menu();
                    }
                    if ui.button("New Game (Human first)").clicked() {
                        self.new_game(Player::Human);
                        ui.close_menu();
                    }
                    ui.separator();
                    if ui.button("Restart (N)").clicked() {
                        self.state.reset();
                        ui.close_menu();
                    }
                });

                ui.menu_button("View", |ui| {
                    ui.checkbox(&mut self.show_debug, "Debug Panel (D)");
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(format!("You: {HUMAN_MARK}"));
                });
            });
        });
    }

    /// Render the side panel with status, history and debug
    fn render_side_panel(&mut self, ctx: &Context) {
        let now = ctx.input(|i| i.time);

        SidePanel::right("info_panel")
            .min_width(220.0)
            .max_width(260.0)
            .frame(Frame::new().fill(egui::Color32::from_rgb(25, 27, 31)))
            .show(ctx, |ui| {
                ui.add_space(12.0);
                self.render_title_card(ui);
                ui.add_space(12.0);

                self.render_status_card(ui, now);
                ui.add_space(10.0);

                self.render_history_card(ui);

                if self.show_debug {
                    ui.add_space(10.0);
                    self.render_debug_card(ui);
                }

                if let Some(msg) = &self.state.message {
                    ui.add_space(10.0);
                    Self::render_message_card(ui, msg);
                }
            });
    }

    /// Helper to create a card frame
    fn card_frame() -> Frame {
        Frame::new()
            .fill(egui::Color32::from_rgb(35, 38, 43))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(12.0)
    }

    fn render_title_card(&self, ui: &mut egui::Ui) {
        ui.vertical_centered(|ui| {
            ui.label(RichText::new("I Can't Lose!").size(22.0).strong().color(TEXT_PRIMARY));
            ui.label(RichText::new("(Try me!)").size(12.0).color(TEXT_MUTED));
        });
    }

    /// Render status line card
    fn render_status_card(&self, ui: &mut egui::Ui, now: f64) {
        Self::card_frame().show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(RichText::new("STATUS").size(10.0).color(TEXT_MUTED));
            ui.add_space(6.0);

            let color = match self.state.phase() {
                GamePhase::Ended(Outcome::Win(_)) => STATUS_WIN,
                _ => TEXT_PRIMARY,
            };
            ui.label(RichText::new(self.state.status_text()).size(18.0).strong().color(color));

            if let Some(left) = self.state.thinking_remaining(now) {
                ui.label(
                    RichText::new(format!("Computer thinking... {left:.1}s"))
                        .size(11.0)
                        .color(STATUS_THINKING),
                );
            }
        });
    }

    /// Render the "go to move" list
    fn render_history_card(&mut self, ui: &mut egui::Ui) {
        let labels = self.state.move_labels();
        let current = self.state.current_move();
        let mut jump = None;

        Self::card_frame().show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(RichText::new("HISTORY").size(10.0).color(TEXT_MUTED));
            ui.add_space(6.0);

            egui::ScrollArea::vertical().max_height(260.0).show(ui, |ui| {
                for (m, label) in labels.iter().enumerate() {
                    let text = if m == current {
                        RichText::new(label).strong().color(TEXT_PRIMARY)
                    } else {
                        RichText::new(label).color(TEXT_SECONDARY)
                    };
                    if ui.button(text).clicked() {
                        jump = Some(m);
                    }
                }
            });
        });

        if let Some(m) = jump {
            if let Err(e) = self.state.jump_to(m) {
                self.state.message = Some(e.to_string());
            }
        }
    }

    /// Render debug card
    fn render_debug_card(&self, ui: &mut egui::Ui) {
        Frame::new()
            .fill(egui::Color32::from_rgb(30, 33, 38))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(12.0)
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.label(RichText::new("AI DEBUG").size(10.0).color(TEXT_MUTED));
                ui.add_space(6.0);

                let Some(result) = &self.state.last_ai_result else {
                    ui.label(RichText::new("Waiting for AI...").size(10.0).color(TEXT_MUTED));
                    return;
                };

                ui.label(
                    RichText::new(format!("{:?}", result.search_type))
                        .size(11.0)
                        .strong()
                        .color(STATUS_WIN),
                );
                let score = result
                    .score
                    .map_or_else(|| "-".to_string(), |s| s.to_string());
                ui.label(RichText::new(format!("Score: {score}")).size(10.0).color(TEXT_SECONDARY));
                ui.label(
                    RichText::new(format!("{} nodes, {}ms", result.nodes, result.time_ms))
                        .size(10.0)
                        .color(TEXT_MUTED),
                );
                ui.add_space(4.0);
                ui.label(
                    RichText::new(format!("-> cell {}", result.best_move))
                        .size(12.0)
                        .strong()
                        .color(WIN_HIGHLIGHT),
                );
            });
    }

    /// Render status message card
    fn render_message_card(ui: &mut egui::Ui, msg: &str) {
        Frame::new()
            .fill(egui::Color32::from_rgb(80, 60, 30))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(10.0)
            .show(ui, |ui| {
                ui.label(RichText::new(msg).size(11.0).color(STATUS_ERROR));
            });
    }

    /// Render the main board
    fn render_board(&mut self, ctx: &Context) {
        CentralPanel::default().show(ctx, |ui| {
            let accept_input = self.state.is_human_turn() && !self.state.is_computer_thinking();

            let clicked = ui
                .vertical_centered(|ui| {
                    ui.add_space(10.0);
                    self.board_view.show(
                        ui,
                        self.state.current_board(),
                        self.state.last_move(),
                        self.state.winning_line(),
                        accept_input,
                    )
                })
                .inner;

            if let Some(idx) = clicked {
                if let Err(e) = self.state.try_place_mark(idx) {
                    debug!(cell = idx, error = %e, "click rejected");
                    self.state.message = Some(e.to_string());
                }
            }
        });
    }

    /// Handle keyboard shortcuts
    fn handle_input(&mut self, ctx: &Context) {
        let (new_game, toggle_debug) =
            ctx.input(|i| (i.key_pressed(egui::Key::N), i.key_pressed(egui::Key::D)));

        if new_game {
            self.state.reset();
        }
        if toggle_debug {
            self.show_debug = !self.show_debug;
        }
    }
}

impl eframe::App for TicTacToeApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_input(ctx);

        self.state.tick(ctx.input(|i| i.time));

        self.render_menu_bar(ctx);
        self.render_side_panel(ctx);
        self.render_board(ctx);

        if self.state.is_computer_thinking() {
            ctx.request_repaint();
        }
    }
}
