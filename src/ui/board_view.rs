//! Board rendering for the tic-tac-toe GUI

use egui::{Align2, CornerRadius, FontId, Painter, Pos2, Rect, Sense, Stroke, StrokeKind, Vec2};

use crate::rules::is_valid_move;
use crate::{Board, Mark, Pos, BOARD_SIZE};

use super::theme::*;

/// Board view handles rendering and input for the game board
pub struct BoardView {
    /// Side length of one square
    cell_size: f32,
    /// Board drawing area
    board_rect: Rect,
}

impl Default for BoardView {
    fn default() -> Self {
        Self {
            cell_size: 100.0,
            board_rect: Rect::NOTHING,
        }
    }
}

impl BoardView {
    /// Render the board and return the clicked cell index if any.
    ///
    /// Every click on a square is reported; the game state decides whether it
    /// is legal. `accept_input` only changes the shading.
    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        board: &Board,
        last_move: Option<usize>,
        winning_line: Option<[usize; 3]>,
        accept_input: bool,
    ) -> Option<usize> {
        let available_size = ui.available_size();
        let board_size = (available_size.x.min(available_size.y) - 20.0)
            .clamp(120.0, MAX_BOARD_SIZE);
        self.cell_size = (board_size - 2.0 * BOARD_MARGIN) / BOARD_SIZE as f32;

        let (response, painter) =
            ui.allocate_painter(Vec2::new(board_size, board_size), Sense::click());
        self.board_rect = response.rect;

        painter.rect_filled(self.board_rect, CornerRadius::same(6), BOARD_BG);

        for idx in 0..BOARD_SIZE * BOARD_SIZE {
            self.draw_square(&painter, idx, board.get(idx), accept_input);
        }

        if let Some(idx) = last_move {
            self.draw_last_move_marker(&painter, idx);
        }

        if let Some(line) = winning_line {
            self.draw_winning_line(&painter, &line);
        }

        let pointer = response.hover_pos()?;
        let idx = self.screen_to_board(pointer)?.to_index();

        if accept_input {
            let hover_color = if is_valid_move(board, idx) {
                hover_valid()
            } else {
                hover_invalid()
            };
            painter.rect_filled(self.square_rect(idx), CornerRadius::same(4), hover_color);
        }

        response.clicked().then_some(idx)
    }

    /// Draw one square and its mark
    fn draw_square(&self, painter: &Painter, idx: usize, mark: Mark, accept_input: bool) {
        let rect = self.square_rect(idx);
        let fill = if accept_input { SQUARE_BG } else { SQUARE_DISABLED };
        painter.rect(
            rect,
            CornerRadius::same(4),
            fill,
            Stroke::new(1.0, GRID_LINE),
            StrokeKind::Inside,
        );

        let color = match mark {
            Mark::X => X_MARK,
            Mark::O => O_MARK,
            Mark::Empty => return,
        };
        painter.text(
            rect.center(),
            Align2::CENTER_CENTER,
            mark.symbol(),
            FontId::proportional(self.cell_size * MARK_FONT_RATIO),
            color,
        );
    }

    fn draw_last_move_marker(&self, painter: &Painter, idx: usize) {
        let rect = self.square_rect(idx);
        let corner = rect.right_top() + Vec2::new(-10.0, 10.0);
        painter.circle_filled(corner, LAST_MOVE_MARKER_RADIUS, LAST_MOVE_MARKER);
    }

    /// Strike through the winning squares
    fn draw_winning_line(&self, painter: &Painter, line: &[usize; 3]) {
        let stroke = Stroke::new(5.0, WIN_HIGHLIGHT);

        for &idx in line {
            painter.rect_stroke(
                self.square_rect(idx).shrink(2.0),
                CornerRadius::same(4),
                Stroke::new(3.0, WIN_HIGHLIGHT),
                StrokeKind::Inside,
            );
        }

        let start = self.square_rect(line[0]).center();
        let end = self.square_rect(line[2]).center();
        painter.line_segment([start, end], stroke);
    }

    /// Screen area of a square, inside the grid gap
    fn square_rect(&self, idx: usize) -> Rect {
        let pos = Pos::from_index(idx);
        let min = self.board_rect.min
            + Vec2::new(
                BOARD_MARGIN + pos.col as f32 * self.cell_size,
                BOARD_MARGIN + pos.row as f32 * self.cell_size,
            );
        Rect::from_min_size(min, Vec2::splat(self.cell_size)).shrink(SQUARE_GAP / 2.0)
    }

    /// Convert screen coordinates to board position
    pub fn screen_to_board(&self, screen_pos: Pos2) -> Option<Pos> {
        let relative = screen_pos - self.board_rect.min;
        let col = ((relative.x - BOARD_MARGIN) / self.cell_size).floor() as i32;
        let row = ((relative.y - BOARD_MARGIN) / self.cell_size).floor() as i32;

        Pos::is_valid(row, col).then(|| Pos::new(row as u8, col as u8))
    }
}
