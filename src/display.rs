//! Rendering layer — all terminal output lives here.
//!
//! `TerminalRenderer` implements `RenderSink` by scaling play-field pixels
//! down to terminal cells.  No game logic is performed; this module only
//! translates draw calls into terminal commands.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal,
    QueueableCommand,
};
use galaxy_wars::ports::{RenderSink, Rgb};
use galaxy_wars::sprites::{SpriteId, SpriteSheet};

// ── Colour palette ────────────────────────────────────────────────────────────

const C_PLAYER: Color = Color::White;
const C_ENEMY_1: Color = Color::Red;
const C_ENEMY_2: Color = Color::Green;
const C_ENEMY_3: Color = Color::Blue;
const C_LASER_PLAYER: Color = Color::Cyan;
const C_LASER_ENEMY: Color = Color::Magenta;
const C_TEXT: Color = Color::White;

fn sprite_color(id: SpriteId) -> Color {
    match id {
        SpriteId::MainCharacter => C_PLAYER,
        SpriteId::Enemy1 => C_ENEMY_1,
        SpriteId::Enemy2 => C_ENEMY_2,
        SpriteId::Enemy3 => C_ENEMY_3,
        SpriteId::MainCharacterLaser => C_LASER_PLAYER,
        SpriteId::EnemyLaser1 | SpriteId::EnemyLaser2 | SpriteId::EnemyLaser3 => C_LASER_ENEMY,
        SpriteId::Background => Color::Reset,
    }
}

// ── Renderer ──────────────────────────────────────────────────────────────────

pub struct TerminalRenderer<'a, W: Write> {
    out: &'a mut W,
    sprites: &'a SpriteSheet,
    field_w: i32,
    field_h: i32,
    cols: i32,
    rows: i32,
}

impl<'a, W: Write> TerminalRenderer<'a, W> {
    pub fn new(
        out: &'a mut W,
        sprites: &'a SpriteSheet,
        field: (i32, i32),
        terminal_size: (u16, u16),
    ) -> Self {
        TerminalRenderer {
            out,
            sprites,
            field_w: field.0.max(1),
            field_h: field.1.max(1),
            cols: terminal_size.0.max(1) as i32,
            rows: terminal_size.1.max(1) as i32,
        }
    }

    /// Terminal cell covering a play-field pixel, if it is on screen.
    fn cell(&self, x: i32, y: i32) -> Option<(u16, u16)> {
        if x < 0 || y < 0 || x >= self.field_w || y >= self.field_h {
            return None;
        }
        let col = x * self.cols / self.field_w;
        let row = y * self.rows / self.field_h;
        Some((col as u16, row as u16))
    }
}

impl<W: Write> RenderSink for TerminalRenderer<'_, W> {
    /// The background covers the whole field, so drawing it clears the frame.
    fn draw_sprite(&mut self, id: SpriteId, x: i32, y: i32) -> std::io::Result<()> {
        if id == SpriteId::Background {
            self.out.queue(terminal::Clear(terminal::ClearType::All))?;
            return Ok(());
        }
        let sprites = self.sprites;
        let sprite = sprites.get(id);
        self.out.queue(style::SetForegroundColor(sprite_color(id)))?;
        for (r, line) in sprite.art.iter().enumerate() {
            for (c, ch) in line.chars().enumerate() {
                if ch == ' ' {
                    continue;
                }
                let px = x + c as i32 * sprite.scale;
                let py = y + r as i32 * sprite.scale;
                if let Some((col, row)) = self.cell(px, py) {
                    self.out.queue(cursor::MoveTo(col, row))?;
                    self.out.queue(Print(ch))?;
                }
            }
        }
        Ok(())
    }

    fn draw_rect(&mut self, color: Rgb, x: i32, y: i32, w: i32, h: i32) -> std::io::Result<()> {
        if w <= 0 || h <= 0 {
            return Ok(());
        }
        let clamp_x = |v: i32| v.clamp(0, self.field_w - 1);
        let clamp_y = |v: i32| v.clamp(0, self.field_h - 1);
        let (Some((c0, r0)), Some((c1, r1))) = (
            self.cell(clamp_x(x), clamp_y(y)),
            self.cell(clamp_x(x + w - 1), clamp_y(y + h - 1)),
        ) else {
            return Ok(());
        };
        // Anything smaller than a cell reads better as a dot
        let glyph = if c0 == c1 && r0 == r1 { '.' } else { '█' };

        let Rgb(r, g, b) = color;
        self.out.queue(style::SetForegroundColor(Color::Rgb { r, g, b }))?;
        for row in r0..=r1 {
            self.out.queue(cursor::MoveTo(c0, row))?;
            self.out
                .queue(Print(glyph.to_string().repeat((c1 - c0 + 1) as usize)))?;
        }
        Ok(())
    }

    fn draw_text(&mut self, text: &str, x: i32, y: i32) -> std::io::Result<()> {
        let x = x.clamp(0, self.field_w - 1);
        if let Some((col, row)) = self.cell(x, y) {
            self.out.queue(cursor::MoveTo(col, row))?;
            self.out.queue(style::SetForegroundColor(C_TEXT))?;
            self.out.queue(Print(text))?;
        }
        Ok(())
    }

    /// Text is laid out in cells, so convert its length back to pixels.
    fn text_width(&self, text: &str) -> i32 {
        text.chars().count() as i32 * self.field_w / self.cols
    }

    fn present_frame(&mut self) -> std::io::Result<()> {
        // Park cursor in a harmless spot and flush
        self.out.queue(style::ResetColor)?;
        self.out
            .queue(cursor::MoveTo(0, (self.rows - 1).max(0) as u16))?;
        self.out.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn renderer<'a>(out: &'a mut Vec<u8>, sprites: &'a SpriteSheet) -> TerminalRenderer<'a, Vec<u8>> {
        TerminalRenderer::new(out, sprites, (800, 750), (80, 25))
    }

    #[test]
    fn pixels_scale_down_to_cells() {
        let sprites = SpriteSheet::builtin(800, 750);
        let mut out = Vec::new();
        let r = renderer(&mut out, &sprites);
        assert_eq!(r.cell(0, 0), Some((0, 0)));
        assert_eq!(r.cell(799, 749), Some((79, 24)));
        assert_eq!(r.cell(400, 375), Some((40, 12)));
        assert_eq!(r.cell(-1, 10), None);
        assert_eq!(r.cell(10, 750), None);
    }

    #[test]
    fn text_width_is_measured_in_pixels() {
        let sprites = SpriteSheet::builtin(800, 750);
        let mut out = Vec::new();
        let r = renderer(&mut out, &sprites);
        assert_eq!(r.text_width("GAME OVER!"), 100);
    }

    #[test]
    fn off_screen_sprite_writes_only_colour() {
        let sprites = SpriteSheet::builtin(800, 750);
        let mut out = Vec::new();
        renderer(&mut out, &sprites)
            .draw_sprite(SpriteId::Enemy1, 100, -500)
            .unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(!text.contains('#'));
    }

    #[test]
    fn sprite_art_reaches_the_terminal() {
        let sprites = SpriteSheet::builtin(800, 750);
        let mut out = Vec::new();
        renderer(&mut out, &sprites)
            .draw_sprite(SpriteId::MainCharacter, 300, 300)
            .unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains('^'));
        assert!(text.contains('<'));
    }

    #[test]
    fn empty_rect_draws_nothing() {
        let sprites = SpriteSheet::builtin(800, 750);
        let mut out = Vec::new();
        renderer(&mut out, &sprites)
            .draw_rect(Rgb::GREEN, 300, 700, 0, 10)
            .unwrap();
        assert!(out.is_empty());
    }
}
