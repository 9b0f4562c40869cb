//! Theme constants for the tic-tac-toe GUI

use egui::Color32;

// Board colors
pub const BOARD_BG: Color32 = Color32::from_rgb(44, 47, 51);
pub const SQUARE_BG: Color32 = Color32::from_rgb(250, 248, 240);
pub const SQUARE_DISABLED: Color32 = Color32::from_rgb(225, 222, 212);
pub const GRID_LINE: Color32 = Color32::from_rgb(60, 62, 66);

// Marks
pub const X_MARK: Color32 = Color32::from_rgb(40, 90, 200);
pub const O_MARK: Color32 = Color32::from_rgb(210, 60, 60);

// Markers
pub const LAST_MOVE_MARKER: Color32 = Color32::from_rgb(255, 180, 50);
pub const WIN_HIGHLIGHT: Color32 = Color32::from_rgb(50, 220, 50);

pub fn hover_valid() -> Color32 {
    Color32::from_rgba_unmultiplied(40, 90, 200, 60)
}

pub fn hover_invalid() -> Color32 {
    Color32::from_rgba_unmultiplied(255, 50, 50, 60)
}

// Panel text
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(240, 240, 245);
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(160, 165, 175);
pub const TEXT_MUTED: Color32 = Color32::from_rgb(120, 125, 135);

// Status colors
pub const STATUS_THINKING: Color32 = Color32::from_rgb(255, 180, 50);
pub const STATUS_WIN: Color32 = Color32::from_rgb(80, 200, 120);
pub const STATUS_ERROR: Color32 = Color32::from_rgb(255, 70, 70);

// Sizes
pub const BOARD_MARGIN: f32 = 12.0;
pub const SQUARE_GAP: f32 = 6.0;
pub const MARK_FONT_RATIO: f32 = 0.6;
pub const LAST_MOVE_MARKER_RADIUS: f32 = 4.0;
pub const MAX_BOARD_SIZE: f32 = 480.0;
