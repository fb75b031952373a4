//! GameView: maps a [`GameSnapshot`] into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{GameSnapshot, NextSnapshot};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{Phase, PieceKind, COLS, EMPTY, ROWS};

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

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

const BLACK: Rgb = Rgb::new(0, 0, 0);
const WELL_BG: Rgb = Rgb::new(30, 30, 40);
const SIDE_PANEL_W: u16 = 18;
const HELP: [(&str, &str); 7] = [
    ("←/→ h/l", "move"),
    ("↑ k", "rotate"),
    ("↓ j", "soft drop"),
    ("space", "hard drop"),
    ("p", "pause"),
    ("r", "restart"),
    ("q", "quit"),
];

/// Foreground color used for a piece kind, on the board and in the preview.
pub fn piece_color(kind: PieceKind) -> Rgb {
    match kind {
        PieceKind::I => Rgb::new(80, 220, 220),
        PieceKind::O => Rgb::new(240, 220, 80),
        PieceKind::T => Rgb::new(200, 120, 220),
        PieceKind::S => Rgb::new(100, 220, 120),
        PieceKind::Z => Rgb::new(220, 80, 80),
        PieceKind::J => Rgb::new(80, 120, 220),
        PieceKind::L => Rgb::new(255, 165, 0),
    }
}

/// Where the board frame landed in the last render, in terminal cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Layout {
    x: u16,
    y: u16,
    w: u16,
    h: u16,
}

/// Lays out the well, the side panel and the overlays.
#[derive(Debug, Clone, Copy)]
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
    anchor_y: AnchorY,
    show_help: bool,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 roughly squares the cells on a typical terminal font.
        Self {
            cell_w: 2,
            cell_h: 1,
            anchor_y: AnchorY::Center,
            show_help: true,
        }
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
            ..Self::default()
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    pub fn with_help(mut self, show_help: bool) -> Self {
        self.show_help = show_help;
        self
    }

    /// Size of the bordered well in terminal cells.
    pub fn frame_size(&self) -> (u16, u16) {
        (
            COLS as u16 * self.cell_w + 2,
            ROWS as u16 * self.cell_h + 2,
        )
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    ///
    /// Callers can keep one framebuffer across frames; nothing here allocates
    /// unless the viewport grew.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().cell(' '));

        let (frame_w, frame_h) = self.frame_size();
        if viewport.width < frame_w || viewport.height < frame_h {
            let style = CellStyle::default().bold();
            fb.put_str_centered(
                0,
                viewport.width,
                viewport.height / 2,
                "terminal too small",
                style,
            );
            return;
        }

        let total_w = frame_w + 2 + SIDE_PANEL_W;
        let x = if viewport.width >= total_w {
            (viewport.width - total_w) / 2
        } else {
            (viewport.width - frame_w) / 2
        };
        let y = match self.anchor_y {
            AnchorY::Center => (viewport.height - frame_h) / 2,
            AnchorY::Top => 0,
        };
        let layout = Layout {
            x,
            y,
            w: frame_w,
            h: frame_h,
        };

        self.draw_well(fb, snap, layout);
        self.draw_side_panel(fb, snap, viewport, layout);

        match snap.phase {
            Phase::Playing => {}
            Phase::Paused => self.draw_paused(fb, layout),
            Phase::GameOver => self.draw_game_over(fb, snap, layout),
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_well(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, at: Layout) {
        let border = CellStyle::plain(Rgb::new(200, 200, 200), BLACK);
        let empty = CellStyle::plain(Rgb::new(90, 90, 100), WELL_BG).dim();

        fb.draw_box(at.x, at.y, at.w, at.h, border);
        for (row, cells) in snap.board.iter().enumerate() {
            for (col, &v) in cells.iter().enumerate() {
                let (ch, style) = match PieceKind::from_color_id(v) {
                    Some(kind) => ('█', CellStyle::plain(piece_color(kind), WELL_BG).bold()),
                    None => ('·', empty),
                };
                let px = at.x + 1 + col as u16 * self.cell_w;
                let py = at.y + 1 + row as u16 * self.cell_h;
                fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
            }
        }
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        viewport: Viewport,
        at: Layout,
    ) {
        let x = at.x + at.w + 2;
        if x.saturating_add(10) > viewport.width {
            return;
        }

        let label = CellStyle::plain(Rgb::new(220, 220, 220), BLACK).bold();
        let value = CellStyle::plain(Rgb::new(200, 200, 200), BLACK);

        let mut y = at.y;
        for (name, n) in [("SCORE", snap.score), ("LINES", snap.lines), ("LEVEL", snap.level)] {
            fb.put_str(x, y, name, label);
            fb.put_u32_grouped(x, y + 1, n, value);
            y += 3;
        }

        fb.put_str(x, y, "NEXT", label);
        y += 1;
        if let Some(next) = &snap.next {
            self.draw_preview(fb, x, y, next);
        }
        y += 5;

        if !self.show_help {
            return;
        }
        let help = value.dim();
        for (keys, what) in HELP {
            if y >= viewport.height {
                break;
            }
            let end = fb.put_str(x, y, keys, help);
            fb.put_str(end.max(x + 9) + 1, y, what, help);
            y += 1;
        }
    }

    /// Draw the look-ahead piece's matrix, skipping blank rows at the top.
    fn draw_preview(&self, fb: &mut FrameBuffer, x: u16, y: u16, next: &NextSnapshot) {
        let style = CellStyle::plain(piece_color(next.kind), BLACK).bold();
        let skip = next
            .matrix
            .rows()
            .take_while(|row| row.iter().all(|&c| c == EMPTY))
            .count();
        for (r, c, _) in next.matrix.filled() {
            let px = x + c as u16 * self.cell_w;
            let py = y + (r - skip) as u16;
            fb.fill_rect(px, py, self.cell_w, 1, '█', style);
        }
    }

    fn draw_paused(&self, fb: &mut FrameBuffer, at: Layout) {
        let title = CellStyle::plain(Rgb::new(255, 255, 255), BLACK).bold();
        let hint = CellStyle::plain(Rgb::new(200, 200, 200), BLACK);
        let mid = at.y + at.h / 2;
        fb.put_str_centered(at.x, at.w, mid, " PAUSED ", title);
        fb.put_str_centered(at.x, at.w, mid + 1, " p to resume ", hint);
    }

    fn draw_game_over(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, at: Layout) {
        let panel_w = at.w.saturating_sub(2).min(20);
        let panel_h = 8;
        let px = at.x + (at.w - panel_w) / 2;
        let py = at.y + (at.h.saturating_sub(panel_h)) / 2;

        let frame = CellStyle::plain(Rgb::new(220, 80, 80), BLACK).bold();
        let title = CellStyle::plain(Rgb::new(255, 255, 255), BLACK).bold();
        let text = CellStyle::plain(Rgb::new(200, 200, 200), BLACK);

        fb.fill_rect(px, py, panel_w, panel_h, ' ', text);
        fb.draw_box(px, py, panel_w, panel_h, frame);
        fb.put_str_centered(px, panel_w, py + 1, "GAME OVER", title);

        // Values end one blank short of the right border.
        let value_w = panel_w.saturating_sub(3);
        let mut y = py + 3;
        for (name, n) in [("Score", snap.score), ("Lines", snap.lines), ("Level", snap.level)] {
            let start = fb.put_u32_grouped_right(px + 1, value_w, y, n, title);
            // The label is dropped when the value leaves no room for it.
            if px + 2 + (name.len() as u16) < start {
                fb.put_str(px + 2, y, name, text);
            }
            y += 1;
        }
        fb.put_str_centered(px, panel_w, py + panel_h - 2, "r restart", text.dim());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row_text(fb: &FrameBuffer, y: u16) -> String {
        fb.row(y).iter().map(|c| c.ch).collect()
    }

    fn contains(fb: &FrameBuffer, needle: &str) -> bool {
        (0..fb.height()).any(|y| row_text(fb, y).contains(needle))
    }

    #[test]
    fn small_viewport_shows_message() {
        let fb = GameView::default().render(&GameSnapshot::default(), Viewport::new(20, 10));
        assert!(contains(&fb, "terminal too small"));
    }

    #[test]
    fn board_cells_use_piece_colors() {
        let mut snap = GameSnapshot::default();
        snap.board[ROWS - 1][0] = PieceKind::Z.color_id();

        let view = GameView::default().with_anchor_y(AnchorY::Top);
        let fb = view.render(&snap, Viewport::new(22, 22));

        let cell = fb.get(1, ROWS as u16).unwrap();
        assert_eq!(cell.ch, '█');
        assert_eq!(cell.style.fg, piece_color(PieceKind::Z));
        assert_eq!(fb.get(3, ROWS as u16).unwrap().ch, '·');
    }

    #[test]
    fn side_panel_groups_thousands() {
        let snap = GameSnapshot {
            score: 12_345,
            ..GameSnapshot::default()
        };
        let fb = GameView::default().render(&snap, Viewport::new(80, 24));
        assert!(contains(&fb, "SCORE"));
        assert!(contains(&fb, "12,345"));
    }

    #[test]
    fn overlays_follow_phase() {
        let view = GameView::default();
        let vp = Viewport::new(80, 24);

        let playing = view.render(&GameSnapshot::default(), vp);
        assert!(!contains(&playing, "PAUSED"));
        assert!(!contains(&playing, "GAME OVER"));

        let paused = GameSnapshot {
            phase: Phase::Paused,
            ..GameSnapshot::default()
        };
        assert!(contains(&view.render(&paused, vp), "PAUSED"));

        let over = GameSnapshot {
            phase: Phase::GameOver,
            score: 4_200,
            ..GameSnapshot::default()
        };
        let fb = view.render(&over, vp);
        assert!(contains(&fb, "GAME OVER"));
        assert!(contains(&fb, "4,200"));
    }

    #[test]
    fn game_over_values_stay_inside_panel() {
        let view = GameView::default();
        let vp = Viewport::new(80, 24);

        let over = GameSnapshot {
            phase: Phase::GameOver,
            score: 12_345_678,
            lines: 140,
            level: 14,
            ..GameSnapshot::default()
        };
        let fb = view.render(&over, vp);
        assert!(contains(&fb, "│ Score 12,345,678 │"));
        assert!(contains(&fb, "│ Lines        140 │"));
        assert!(contains(&fb, "│ Level         14 │"));

        let maxed = GameSnapshot {
            phase: Phase::GameOver,
            score: u32::MAX,
            ..GameSnapshot::default()
        };
        let fb = view.render(&maxed, vp);
        assert!(contains(&fb, "│    4,294,967,295 │"));
    }
}
