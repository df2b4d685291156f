//! Board rendering for the Fanorona GUI

use crate::rules::{classify, Strength};
use crate::{Board, Cell, Player, Pos, COLS, ROWS};
use egui::{Color32, CornerRadius, Painter, Pos2, Rect, Sense, Stroke, Vec2};

use super::theme::*;

/// Everything the board needs to draw besides the pieces
#[derive(Default)]
pub struct Highlights<'a> {
    pub selected: Option<Pos>,
    pub last_move: Option<(Pos, Pos)>,
    /// Destinations of the selected piece as `(pos, captures)`
    pub destinations: Vec<(Pos, bool)>,
    pub chain_targets: &'a [Pos],
    pub approach: &'a [Pos],
    pub withdrawal: &'a [Pos],
    pub winner: Option<Player>,
}

/// Board view handles rendering and input for the game board
pub struct BoardView {
    /// Cached spacing between adjacent points
    cell_size: f32,
    /// Board drawing area
    board_rect: Rect,
}

impl Default for BoardView {
    fn default() -> Self {
        Self {
            cell_size: 60.0,
            board_rect: Rect::NOTHING,
        }
    }
}

impl BoardView {
    /// Render the board and return the clicked point if any
    pub fn show(&mut self, ui: &mut egui::Ui, board: &Board, highlights: &Highlights) -> Option<Pos> {
        let available = ui.available_size();

        // Fit a 9x5 lattice into the available space
        let span_x = (available.x - 2.0 * BOARD_MARGIN) / (COLS as f32 - 1.0);
        let span_y = (available.y - 2.0 * BOARD_MARGIN) / (ROWS as f32 - 1.0);
        self.cell_size = span_x.min(span_y).max(20.0);

        let size = Vec2::new(
            2.0 * BOARD_MARGIN + (COLS as f32 - 1.0) * self.cell_size,
            2.0 * BOARD_MARGIN + (ROWS as f32 - 1.0) * self.cell_size,
        );
        let (response, painter) = ui.allocate_painter(size, Sense::click());
        self.board_rect = response.rect;

        painter.rect_filled(self.board_rect, CornerRadius::same(4), BOARD_BG);

        self.draw_lines(&painter);
        self.draw_coordinates(&painter);

        if let Some((from, to)) = highlights.last_move {
            self.draw_last_move(&painter, from, to);
        }

        self.draw_pieces(&painter, board, highlights.winner);

        for &pos in highlights.approach {
            self.draw_ring(&painter, pos, APPROACH_RUN);
        }
        for &pos in highlights.withdrawal {
            self.draw_ring(&painter, pos, WITHDRAWAL_RUN);
        }
        for &pos in highlights.chain_targets {
            self.draw_dot(&painter, pos, CAPTURE_TARGET);
        }
        for &(pos, captures) in &highlights.destinations {
            let color = if captures { CAPTURE_TARGET } else { quiet_target() };
            self.draw_dot(&painter, pos, color);
        }
        if let Some(pos) = highlights.selected {
            self.draw_ring(&painter, pos, SELECTION);
        }

        if highlights.winner.is_some() {
            return None;
        }

        let hovered = response.hover_pos().and_then(|p| self.screen_to_board(p));
        if let Some(pos) = hovered {
            let center = self.board_to_screen(pos);
            painter.circle_stroke(
                center,
                self.cell_size * PIECE_RADIUS_RATIO + 4.0,
                Stroke::new(1.5, hover_valid()),
            );
        }

        if response.clicked() {
            hovered
        } else {
            None
        }
    }

    /// Draw the orthogonal grid plus the diagonals through strong points
    fn draw_lines(&self, painter: &Painter) {
        let stroke = Stroke::new(GRID_LINE_WIDTH, GRID_LINE);

        for row in 0..ROWS as i32 {
            let start = self.board_to_screen(Pos::new(row, 0));
            let end = self.board_to_screen(Pos::new(row, COLS as i32 - 1));
            painter.line_segment([start, end], stroke);
        }
        for col in 0..COLS as i32 {
            let start = self.board_to_screen(Pos::new(0, col));
            let end = self.board_to_screen(Pos::new(ROWS as i32 - 1, col));
            painter.line_segment([start, end], stroke);
        }

        // Each diagonal segment drawn once, downward from its strong end
        for pos in Pos::all().filter(|&p| classify(p) == Strength::Strong) {
            for dc in [-1, 1] {
                let next = pos.offset(1, dc);
                if next.is_valid() {
                    painter.line_segment([self.board_to_screen(pos), self.board_to_screen(next)], stroke);
                }
            }
        }
    }

    /// Draw row and column indices
    fn draw_coordinates(&self, painter: &Painter) {
        let font = egui::FontId::proportional(12.0);

        for col in 0..COLS as i32 {
            let x = self.board_to_screen(Pos::new(0, col)).x;
            let pos = Pos2::new(x, self.board_rect.min.y + 12.0);
            painter.text(pos, egui::Align2::CENTER_CENTER, col, font.clone(), GRID_LINE);
        }

        for row in 0..ROWS as i32 {
            let y = self.board_to_screen(Pos::new(row, 0)).y;
            let pos = Pos2::new(self.board_rect.min.x + 12.0, y);
            painter.text(pos, egui::Align2::CENTER_CENTER, row, font.clone(), GRID_LINE);
        }
    }

    fn draw_pieces(&self, painter: &Painter, board: &Board, winner: Option<Player>) {
        for pos in Pos::all() {
            match board.get(pos) {
                Cell::Empty => {}
                cell => self.draw_piece(painter, pos, cell),
            }
            if let Some(winner) = winner {
                if board.get(pos).is_owned_by(winner) {
                    self.draw_ring(painter, pos, WIN_HIGHLIGHT);
                }
            }
        }
    }

    /// Draw a single piece with visual polish
    fn draw_piece(&self, painter: &Painter, pos: Pos, cell: Cell) {
        let center = self.board_to_screen(pos);
        let radius = self.cell_size * PIECE_RADIUS_RATIO;
        let shadow_offset = Vec2::new(2.0, 2.0);

        match cell {
            Cell::Black => {
                painter.circle_filled(
                    center + shadow_offset,
                    radius,
                    Color32::from_rgba_unmultiplied(0, 0, 0, 60),
                );
                painter.circle_filled(center, radius, BLACK_PIECE);
                let highlight_offset = Vec2::new(-radius * 0.3, -radius * 0.3);
                painter.circle_filled(center + highlight_offset, radius * 0.2, BLACK_PIECE_HIGHLIGHT);
            }
            Cell::White => {
                painter.circle_filled(
                    center + shadow_offset,
                    radius,
                    Color32::from_rgba_unmultiplied(0, 0, 0, 40),
                );
                painter.circle_filled(center, radius, WHITE_PIECE);
                painter.circle_stroke(center, radius * 0.85, Stroke::new(radius * 0.1, WHITE_PIECE_SHADOW));
            }
            Cell::Empty => {}
        }
    }

    fn draw_last_move(&self, painter: &Painter, from: Pos, to: Pos) {
        let start = self.board_to_screen(from);
        let end = self.board_to_screen(to);
        painter.line_segment([start, end], Stroke::new(MARKER_WIDTH, LAST_MOVE_MARKER));
        painter.circle_filled(start, LAST_MOVE_MARKER_RADIUS, LAST_MOVE_MARKER);
    }

    fn draw_ring(&self, painter: &Painter, pos: Pos, color: Color32) {
        let center = self.board_to_screen(pos);
        let radius = self.cell_size * PIECE_RADIUS_RATIO + 3.0;
        painter.circle_stroke(center, radius, Stroke::new(MARKER_WIDTH, color));
    }

    fn draw_dot(&self, painter: &Painter, pos: Pos, color: Color32) {
        let center = self.board_to_screen(pos);
        painter.circle_filled(center, self.cell_size * 0.12, color);
    }

    /// Convert screen coordinates to the nearest board point
    pub fn screen_to_board(&self, screen_pos: Pos2) -> Option<Pos> {
        let relative = screen_pos - self.board_rect.min;
        let col = ((relative.x - BOARD_MARGIN) / self.cell_size).round() as i32;
        let row = ((relative.y - BOARD_MARGIN) / self.cell_size).round() as i32;

        let pos = Pos::new(row, col);
        if !pos.is_valid() {
            return None;
        }
        // Ignore clicks far from any point
        let distance = (self.board_to_screen(pos) - screen_pos).length();
        (distance <= self.cell_size * 0.45).then_some(pos)
    }

    /// Convert board position to screen coordinates
    pub fn board_to_screen(&self, pos: Pos) -> Pos2 {
        let x = self.board_rect.min.x + BOARD_MARGIN + pos.col as f32 * self.cell_size;
        let y = self.board_rect.min.y + BOARD_MARGIN + pos.row as f32 * self.cell_size;
        Pos2::new(x, y)
    }
}
