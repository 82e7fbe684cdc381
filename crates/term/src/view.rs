//! GameView: maps a `GameSession` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use slidepuzzle_core::GameSession;
use slidepuzzle_types::Phase;

use crate::fb::{CellStyle, FrameBuffer, Rgb};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Outcome of a score submission, shown in the side panel after a win.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreStatusView {
    /// 1-based leaderboard rank, when the submission was accepted.
    pub rank: Option<u32>,
    pub message: Option<String>,
}

/// A lightweight terminal view for the sliding puzzle.
pub struct GameView {
    /// Tile width in terminal columns.
    tile_w: u16,
    /// Tile height in terminal rows.
    tile_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 6x3 leaves room for three-digit tiles on large grids.
        Self {
            tile_w: 6,
            tile_h: 3,
        }
    }
}

impl GameView {
    pub fn new(tile_w: u16, tile_h: u16) -> Self {
        Self { tile_w, tile_h }
    }

    /// Render the session into an existing framebuffer.
    pub fn render_into(&self, session: &GameSession, fb: &mut FrameBuffer) {
        self.render_into_with_score(session, None, fb);
    }

    /// Render the session plus the submitted score's outcome, if any.
    pub fn render_into_with_score(
        &self,
        session: &GameSession,
        score: Option<&ScoreStatusView>,
        fb: &mut FrameBuffer,
    ) {
        fb.clear(CellStyle::default().into_cell(' '));

        match session.phase() {
            Phase::SelectingDifficulty => self.draw_menu(fb),
            Phase::Playing | Phase::Won => {
                let (start_x, start_y, frame_w, frame_h) = self.draw_board(session, fb);
                self.draw_side_panel(session, score, fb, start_x, frame_w);
                if session.phase() == Phase::Won {
                    self.draw_overlay_text(fb, start_x, start_y, frame_w, frame_h, " SOLVED! ");
                }
            }
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, session: &GameSession, viewport: Viewport) -> FrameBuffer {
        self.render_with_score(session, None, viewport)
    }

    pub fn render_with_score(
        &self,
        session: &GameSession,
        score: Option<&ScoreStatusView>,
        viewport: Viewport,
    ) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into_with_score(session, score, &mut fb);
        fb
    }

    fn draw_menu(&self, fb: &mut FrameBuffer) {
        let title = CellStyle {
            fg: Rgb::new(255, 255, 255),
            bg: Rgb::new(0, 0, 0),
            bold: true,
            dim: false,
        };
        let item = CellStyle::default();
        let dim = CellStyle {
            dim: true,
            ..CellStyle::default()
        };

        let x = fb.width().saturating_sub(20) / 2;
        let y = fb.height().saturating_sub(8) / 2;

        fb.put_str(x, y, "SLIDE PUZZLE", title);
        fb.put_str(x, y + 2, "1  easy", item);
        fb.put_str(x, y + 3, "2  hard", item);
        fb.put_str(x, y + 5, "arrows/wasd  slide", dim);
        fb.put_str(x, y + 6, "h hint  r restart", dim);
        fb.put_str(x, y + 7, "q quit", dim);
    }

    fn draw_board(&self, session: &GameSession, fb: &mut FrameBuffer) -> (u16, u16, u16, u16) {
        let board = session.board();
        let n = board.n() as u16;

        let board_px_w = n * self.tile_w;
        let board_px_h = n * self.tile_h;
        let frame_w = board_px_w + 2;
        let frame_h = board_px_h + 2;

        let start_x = fb.width().saturating_sub(frame_w + 18) / 2;
        let start_y = fb.height().saturating_sub(frame_h) / 2;

        let border = CellStyle {
            fg: Rgb::new(200, 200, 200),
            bg: Rgb::new(0, 0, 0),
            bold: false,
            dim: false,
        };
        self.draw_border(fb, start_x, start_y, frame_w, frame_h, border);

        for (index, cell) in board.cells().iter().enumerate() {
            let x = (index % board.n()) as u16;
            let y = (index / board.n()) as u16;
            match cell {
                Some(v) => {
                    let style = self.tile_style(session, index, *v);
                    self.draw_tile(fb, start_x, start_y, x, y, *v, style);
                }
                None => {
                    let blank = CellStyle {
                        fg: Rgb::new(60, 60, 70),
                        bg: Rgb::new(20, 20, 25),
                        bold: false,
                        dim: true,
                    };
                    self.fill_tile_rect(fb, start_x, start_y, x, y, ' ', blank);
                }
            }
        }

        (start_x, start_y, frame_w, frame_h)
    }

    fn tile_style(&self, session: &GameSession, index: usize, value: u8) -> CellStyle {
        let board = session.board();
        if session.hint_target() == Some(index) {
            return CellStyle {
                fg: Rgb::new(20, 20, 20),
                bg: Rgb::new(240, 200, 80),
                bold: true,
                dim: false,
            };
        }
        if board.goal_value(index) == Some(value) {
            return CellStyle {
                fg: Rgb::new(230, 255, 230),
                bg: Rgb::new(40, 110, 60),
                bold: false,
                dim: false,
            };
        }
        CellStyle {
            fg: Rgb::new(230, 230, 240),
            bg: Rgb::new(50, 55, 80),
            bold: false,
            dim: false,
        }
    }

    fn draw_tile(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        x: u16,
        y: u16,
        value: u8,
        style: CellStyle,
    ) {
        self.fill_tile_rect(fb, start_x, start_y, x, y, ' ', style);

        let text = value.to_string();
        let text_w = text.len() as u16;
        let px = start_x + 1 + x * self.tile_w + self.tile_w.saturating_sub(text_w) / 2;
        let py = start_y + 1 + y * self.tile_h + self.tile_h / 2;
        fb.put_str(px, py, &text, style);
    }

    fn fill_tile_rect(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        tile_x: u16,
        tile_y: u16,
        ch: char,
        style: CellStyle,
    ) {
        let px = start_x + 1 + tile_x * self.tile_w;
        let py = start_y + 1 + tile_y * self.tile_h;
        fb.fill_rect(px, py, self.tile_w, self.tile_h, ch, style);
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
        if w < 2 || h < 2 {
            return;
        }

        fb.put_char(x, y, '┌', style);
        fb.put_char(x + w - 1, y, '┐', style);
        fb.put_char(x, y + h - 1, '└', style);
        fb.put_char(x + w - 1, y + h - 1, '┘', style);

        for dx in 1..w - 1 {
            fb.put_char(x + dx, y, '─', style);
            fb.put_char(x + dx, y + h - 1, '─', style);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, '│', style);
            fb.put_char(x + w - 1, y + dy, '│', style);
        }
    }

    fn draw_side_panel(
        &self,
        session: &GameSession,
        score: Option<&ScoreStatusView>,
        fb: &mut FrameBuffer,
        start_x: u16,
        frame_w: u16,
    ) {
        let panel_x = start_x.saturating_add(frame_w).saturating_add(2);
        if panel_x >= fb.width() {
            return;
        }
        let panel_w = fb.width() - panel_x;
        if panel_w < 12 {
            return;
        }

        let label = CellStyle {
            fg: Rgb::new(220, 220, 220),
            bg: Rgb::new(0, 0, 0),
            bold: true,
            dim: false,
        };
        let value = CellStyle {
            fg: Rgb::new(200, 200, 200),
            bg: Rgb::new(0, 0, 0),
            bold: false,
            dim: false,
        };

        let mut y = 1;
        if let Some(d) = session.difficulty() {
            fb.put_str(panel_x, y, "MODE", label);
            y += 1;
            fb.put_str(panel_x, y, d.as_str(), value);
            y += 2;
        }

        fb.put_str(panel_x, y, "MOVES", label);
        y += 1;
        fb.put_str(panel_x, y, &session.moves().to_string(), value);
        y += 2;

        fb.put_str(panel_x, y, "PROGRESS", label);
        y += 1;
        let pct = session.progress();
        let bar_w = (panel_w.saturating_sub(6)).min(10) as usize;
        let filled = (pct as usize * bar_w) / 100;
        let mut bar = String::with_capacity(bar_w + 5);
        for i in 0..bar_w {
            bar.push(if i < filled { '█' } else { '░' });
        }
        fb.put_str(panel_x, y, &bar, value);
        fb.put_str(panel_x + bar_w as u16 + 1, y, &format!("{pct}%"), value);
        y += 2;

        fb.put_str(panel_x, y, "HINTS", label);
        y += 1;
        fb.put_str(panel_x, y, &session.hints_remaining().to_string(), value);
        y += 2;

        if let Some(score) = score {
            fb.put_str(panel_x, y, "RANK", label);
            y += 1;
            match score.rank {
                Some(rank) => fb.put_str(panel_x, y, &format!("#{rank}"), value),
                None => fb.put_str(panel_x, y, "-", value),
            }
            y += 1;
            if let Some(message) = &score.message {
                fb.put_str(panel_x, y, message, value);
            }
        }
    }

    fn draw_overlay_text(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
        frame_h: u16,
        text: &str,
    ) {
        let mid_y = start_y.saturating_add(frame_h / 2);
        let text_w = text.chars().count() as u16;
        let x = start_x.saturating_add(frame_w.saturating_sub(text_w) / 2);
        let style = CellStyle {
            fg: Rgb::new(20, 20, 20),
            bg: Rgb::new(240, 240, 240),
            bold: true,
            dim: false,
        };
        fb.put_str(x, mid_y, text, style);
    }
}
