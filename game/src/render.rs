use engine::graphics::{Color, Renderer2d};
use engine::surface::SurfaceSize;
use engine::ui::{Insets, Rect};

use crate::grid::{BOARD_HEIGHT, BOARD_WIDTH, Board, CELL_EMPTY};
use crate::piece::{ActivePiece, PIECE_COLORS, Rgb};
use crate::state::GameState;

pub const CELL_SIZE: u32 = 30;
pub const SIDE_PANEL_WIDTH: u32 = 160;

pub const BOARD_PIXEL_WIDTH: u32 = BOARD_WIDTH as u32 * CELL_SIZE;
pub const BOARD_PIXEL_HEIGHT: u32 = BOARD_HEIGHT as u32 * CELL_SIZE;

/// Board on the left, side panel on the right.
pub const CANVAS_SIZE: SurfaceSize =
    SurfaceSize::new(BOARD_PIXEL_WIDTH + SIDE_PANEL_WIDTH, BOARD_PIXEL_HEIGHT);

const COLOR_BACKGROUND: Color = [0, 0, 0, 255];
const COLOR_EMPTY_CELL: Color = [25, 25, 25, 255];
const COLOR_CELL_BORDER: Color = [40, 40, 40, 255];
const COLOR_PANEL: Color = [15, 15, 15, 255];
const COLOR_TITLE: Color = [0, 255, 255, 255];
const COLOR_TEXT: Color = [255, 255, 255, 255];
// Stored values with no catalog color (never produced by locking).
const COLOR_UNKNOWN: Color = [255, 255, 255, 255];

const PANEL_PADDING: u32 = 15;
const TITLE_TEXT: &str = "GLITCH FALL";
const TITLE_SCALE: u32 = 3;
const LABEL_SCALE: u32 = 2;
// Baselines of the three labels, measured from the top of the panel.
const TITLE_BASELINE: u32 = 60;
const SCORE_BASELINE: u32 = 120;
const LEVEL_BASELINE: u32 = 160;

fn opaque(rgb: Rgb) -> Color {
    [rgb[0], rgb[1], rgb[2], 255]
}

pub fn color_for_cell(cell: u8) -> Color {
    match cell {
        CELL_EMPTY => COLOR_EMPTY_CELL,
        n => PIECE_COLORS
            .get(n as usize - 1)
            .copied()
            .map_or(COLOR_UNKNOWN, opaque),
    }
}

pub fn cell_rect(col: u32, row: u32) -> Rect {
    Rect::new(col * CELL_SIZE, row * CELL_SIZE, CELL_SIZE, CELL_SIZE)
}

pub fn side_panel_rect() -> Rect {
    Rect::new(BOARD_PIXEL_WIDTH, 0, SIDE_PANEL_WIDTH, BOARD_PIXEL_HEIGHT)
}

/// Paints a whole frame for `state`: board, falling piece, then the side panel.
pub fn render_game(gfx: &mut dyn Renderer2d, state: &GameState) {
    gfx.clear(COLOR_BACKGROUND);
    draw_board(gfx, state.board());
    draw_active_piece(gfx, state.piece());
    draw_side_panel(gfx, state.score(), state.level());
}

pub fn draw_board(gfx: &mut dyn Renderer2d, board: &Board) {
    for (row, cells) in board.rows().iter().enumerate() {
        for (col, &cell) in cells.iter().enumerate() {
            let rect = cell_rect(col as u32, row as u32);
            gfx.fill_rect(rect, color_for_cell(cell));
            gfx.rect_outline(rect, COLOR_CELL_BORDER);
        }
    }
}

/// Cells still above the top edge are not drawn.
pub fn draw_active_piece(gfx: &mut dyn Renderer2d, piece: &ActivePiece) {
    let color = opaque(piece.rgb());
    for cell in piece.cells() {
        if cell.x < 0 || cell.y < 0 {
            continue;
        }
        gfx.fill_rect(cell_rect(cell.x as u32, cell.y as u32), color);
    }
}

pub fn draw_side_panel(gfx: &mut dyn Renderer2d, score: u32, level: u32) {
    let panel = side_panel_rect();
    gfx.fill_rect(panel, COLOR_PANEL);

    let content = panel.inset(Insets {
        left: PANEL_PADDING,
        ..Insets::default()
    });
    draw_label(gfx, content, TITLE_BASELINE, TITLE_TEXT, COLOR_TITLE, TITLE_SCALE);
    draw_label(
        gfx,
        content,
        SCORE_BASELINE,
        &format!("SCORE: {score}"),
        COLOR_TEXT,
        LABEL_SCALE,
    );
    draw_label(
        gfx,
        content,
        LEVEL_BASELINE,
        &format!("LEVEL: {level}"),
        COLOR_TEXT,
        LABEL_SCALE,
    );
}

fn draw_label(
    gfx: &mut dyn Renderer2d,
    area: Rect,
    baseline: u32,
    text: &str,
    color: Color,
    scale: u32,
) {
    let top = area
        .y
        .saturating_add(baseline)
        .saturating_sub(engine::graphics::GLYPH_H * scale);
    gfx.draw_text_scaled(area.x, top, text, color, scale);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canvas_is_board_plus_panel() {
        assert_eq!(CANVAS_SIZE, SurfaceSize::new(460, 600));
    }

    #[test]
    fn cell_colors_follow_catalog() {
        assert_eq!(color_for_cell(CELL_EMPTY), [25, 25, 25, 255]);
        assert_eq!(color_for_cell(1), [255, 80, 80, 255]);
        assert_eq!(color_for_cell(5), [255, 80, 255, 255]);
        assert_eq!(color_for_cell(42), COLOR_UNKNOWN);
    }

    #[test]
    fn title_fits_inside_panel() {
        let width = engine::graphics::text_width(TITLE_TEXT, TITLE_SCALE);
        assert!(PANEL_PADDING + width <= SIDE_PANEL_WIDTH);
    }
}
