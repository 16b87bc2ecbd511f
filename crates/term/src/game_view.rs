//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{GameSnapshot, Piece};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{BlockColor, GamePhase, BOARD_HEIGHT, BOARD_WIDTH};

const BOARD_BG: Rgb = Rgb::new(30, 30, 40);
const SCREEN_BG: Rgb = Rgb::new(0, 0, 0);

/// Rows reserved for a piece preview in the side panel
const PREVIEW_ROWS: u16 = 4;

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

/// A lightweight terminal renderer for the game.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
    anchor_y: AnchorY,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

/// Screen rectangle of the bordered board frame
#[derive(Debug, Clone, Copy)]
struct Frame {
    x: u16,
    y: u16,
    w: u16,
    h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            cell_h: 1,
            anchor_y: AnchorY::Center,
        }
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
            anchor_y: AnchorY::Center,
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Render a snapshot into an existing framebuffer.
    ///
    /// Callers can reuse a framebuffer across frames and only resize when the
    /// terminal size changes.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().cell(' '));

        let frame = self.frame(viewport);
        let border = CellStyle::new(Rgb::new(200, 200, 200), SCREEN_BG);

        fb.fill_rect(
            frame.x + 1,
            frame.y + 1,
            frame.w - 2,
            frame.h - 2,
            ' ',
            CellStyle::new(Rgb::new(80, 80, 90), BOARD_BG),
        );
        draw_border(fb, frame, border);

        if !snap.phase.shows_board() {
            self.draw_menu(fb, snap, frame);
            return;
        }

        // Locked board cells.
        for y in 0..BOARD_HEIGHT as u16 {
            let flashing = snap.row_flashing(y as usize);
            for x in 0..BOARD_WIDTH as u16 {
                match snap.board[y as usize][x as usize] {
                    _ if flashing => {
                        let style = CellStyle::new(Rgb::new(255, 255, 255), BOARD_BG).bold();
                        self.fill_cell_rect(fb, frame, x, y, '█', style);
                    }
                    Some(color) => self.draw_block(fb, frame, x, y, color),
                    None => self.draw_empty_cell(fb, frame, x, y),
                }
            }
        }

        // Ghost first so the current piece wins where they overlap.
        if let Some(ghost) = &snap.ghost {
            let style = CellStyle::new(block_rgb(ghost.color).mix(BOARD_BG, 1, 2), BOARD_BG).dim();
            for (x, y) in visible_cells(ghost) {
                self.fill_cell_rect(fb, frame, x, y, '░', style);
            }
        }

        if let Some(current) = &snap.current {
            for (x, y) in visible_cells(current) {
                self.draw_block(fb, frame, x, y, current.color);
            }
        }

        self.draw_side_panel(fb, snap, viewport, frame);

        match snap.phase {
            GamePhase::Paused => {
                draw_overlay(fb, frame, &[Line::Title("PAUSED"), Line::Hint("Press P to Resume")]);
            }
            GamePhase::GameOver => {
                draw_overlay(
                    fb,
                    frame,
                    &[
                        Line::Title("GAME OVER"),
                        Line::Blank,
                        Line::Label("SCORE"),
                        Line::Number(snap.score),
                        Line::Blank,
                        Line::Hint("Press Enter to Play Again"),
                    ],
                );
            }
            _ => {}
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn frame(&self, viewport: Viewport) -> Frame {
        let w = (BOARD_WIDTH as u16) * self.cell_w + 2;
        let h = (BOARD_HEIGHT as u16) * self.cell_h + 2;

        // Leave room for the side panel when centering horizontally.
        let total_w = w + 2 + self.panel_width();
        let x = viewport.width.saturating_sub(total_w) / 2;
        let y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(h) / 2,
            AnchorY::Top => 0,
        };
        Frame { x, y, w, h }
    }

    fn panel_width(&self) -> u16 {
        (4 * self.cell_w).max(12)
    }

    fn draw_menu(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, frame: Frame) {
        draw_overlay(
            fb,
            frame,
            &[
                Line::Title("T E T R I S"),
                Line::Blank,
                Line::Label("HIGH SCORE"),
                Line::Number(snap.high_score),
                Line::Blank,
                Line::Hint("Press Enter to Start"),
            ],
        );
    }

    fn draw_empty_cell(&self, fb: &mut FrameBuffer, frame: Frame, x: u16, y: u16) {
        let style = CellStyle::new(Rgb::new(90, 90, 100), BOARD_BG).dim();
        self.fill_cell_rect(fb, frame, x, y, '·', style);
    }

    fn draw_block(&self, fb: &mut FrameBuffer, frame: Frame, x: u16, y: u16, color: BlockColor) {
        let style = CellStyle::new(block_rgb(color), BOARD_BG).bold();
        self.fill_cell_rect(fb, frame, x, y, '█', style);
    }

    fn fill_cell_rect(
        &self,
        fb: &mut FrameBuffer,
        frame: Frame,
        cell_x: u16,
        cell_y: u16,
        ch: char,
        style: CellStyle,
    ) {
        let px = frame.x + 1 + cell_x * self.cell_w;
        let py = frame.y + 1 + cell_y * self.cell_h;
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }

    fn draw_side_panel(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, viewport: Viewport, frame: Frame) {
        let panel_x = frame.x.saturating_add(frame.w).saturating_add(2);
        if panel_x >= viewport.width || viewport.width - panel_x < 10 {
            return;
        }

        let label = CellStyle::new(Rgb::new(220, 220, 220), SCREEN_BG).bold();
        let value = CellStyle::new(Rgb::new(200, 200, 200), SCREEN_BG);

        let mut y = frame.y;
        fb.put_str(panel_x, y, "SCORE", label);
        fb.put_u32(panel_x, y + 1, snap.score, value);
        y += 3;

        fb.put_str(panel_x, y, "HIGH SCORE", label);
        fb.put_u32(panel_x, y + 1, snap.high_score, value);
        y += 3;

        fb.put_str(panel_x, y, "HOLD", label);
        if let Some(held) = &snap.hold {
            // Greyed out until the next lock re-enables hold.
            self.draw_preview(fb, panel_x, y + 1, held, !snap.can_hold);
        }
        y += PREVIEW_ROWS + 2;

        fb.put_str(panel_x, y, "NEXT", label);
        if let Some(next) = &snap.next {
            self.draw_preview(fb, panel_x, y + 1, next, false);
        }
    }

    fn draw_preview(&self, fb: &mut FrameBuffer, x: u16, y: u16, piece: &Piece, dimmed: bool) {
        let mut style = CellStyle::new(block_rgb(piece.color), SCREEN_BG);
        if dimmed {
            style = style.dim();
        }
        for (dx, dy) in piece.shape.filled_cells() {
            let px = x + dx as u16 * self.cell_w;
            let py = y + dy as u16;
            fb.fill_rect(px, py, self.cell_w, 1, '█', style);
        }
    }
}

/// One line of centered overlay text
#[derive(Debug, Clone, Copy)]
enum Line<'a> {
    Title(&'a str),
    Label(&'a str),
    Hint(&'a str),
    Number(u32),
    Blank,
}

fn draw_overlay(fb: &mut FrameBuffer, frame: Frame, lines: &[Line<'_>]) {
    let n = lines.len() as u16;
    let mut y = frame.y + frame.h.saturating_sub(n) / 2;
    let inner_x = frame.x + 1;
    let inner_w = frame.w.saturating_sub(2);

    let title = CellStyle::new(Rgb::new(255, 255, 255), SCREEN_BG).bold();
    let label = CellStyle::new(Rgb::new(220, 220, 220), SCREEN_BG);
    let hint = CellStyle::new(Rgb::new(180, 180, 180), SCREEN_BG);

    for line in lines {
        match *line {
            Line::Title(s) => fb.put_str_centered(inner_x, inner_w, y, s, title),
            Line::Label(s) => fb.put_str_centered(inner_x, inner_w, y, s, label),
            Line::Hint(s) => fb.put_str_centered(inner_x, inner_w, y, s, hint),
            Line::Number(v) => {
                let left = inner_x + inner_w.saturating_sub(digit_count(v)) / 2;
                fb.put_u32(left, y, v, title);
            }
            Line::Blank => {}
        }
        y += 1;
    }
}

fn draw_border(fb: &mut FrameBuffer, frame: Frame, style: CellStyle) {
    let Frame { x, y, w, h } = frame;
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

/// Cells of `piece` that fall inside the board (pieces may poke out above row 0)
fn visible_cells(piece: &Piece) -> impl Iterator<Item = (u16, u16)> + '_ {
    piece.cells().filter_map(|(x, y)| {
        (x >= 0 && x < BOARD_WIDTH as i8 && y >= 0 && y < BOARD_HEIGHT as i8)
            .then_some((x as u16, y as u16))
    })
}

pub fn block_rgb(color: BlockColor) -> Rgb {
    match color {
        BlockColor::Cyan => Rgb::new(80, 220, 220),
        BlockColor::Yellow => Rgb::new(240, 220, 80),
        BlockColor::Magenta => Rgb::new(200, 120, 220),
        BlockColor::Orange => Rgb::new(255, 165, 0),
        BlockColor::Blue => Rgb::new(80, 120, 220),
        BlockColor::Green => Rgb::new(100, 220, 120),
        BlockColor::Red => Rgb::new(220, 80, 80),
    }
}

fn digit_count(mut v: u32) -> u16 {
    let mut n = 1;
    while v >= 10 {
        v /= 10;
        n += 1;
    }
    n
}
