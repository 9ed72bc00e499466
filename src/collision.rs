//! Pixel-accurate collision between positioned sprites.
//!
//! Ship and laser art is irregular, so overlap is decided on the opacity
//! masks rather than on bounding boxes.

use crate::sprites::{SpriteId, SpriteSheet};

// ── Mask ──────────────────────────────────────────────────────────────────────

/// Per-pixel opacity map, row-major.
#[derive(Clone, Debug, PartialEq)]
pub struct Mask {
    width: i32,
    height: i32,
    bits: Vec<bool>,
}

impl Mask {
    /// A fully transparent mask.
    pub fn new(width: i32, height: i32) -> Self {
        let width = width.max(0);
        let height = height.max(0);
        Mask {
            width,
            height,
            bits: vec![false; (width * height) as usize],
        }
    }

    /// Build from text art: every non-space character is an opaque
    /// `scale`×`scale` block. Ragged rows are padded with transparency.
    pub fn from_art(rows: &[String], scale: i32) -> Self {
        let cols = rows.iter().map(|r| r.chars().count()).max().unwrap_or(0) as i32;
        let mut mask = Mask::new(cols * scale, rows.len() as i32 * scale);
        for (row, line) in rows.iter().enumerate() {
            for (col, ch) in line.chars().enumerate() {
                if ch == ' ' {
                    continue;
                }
                let (bx, by) = (col as i32 * scale, row as i32 * scale);
                for y in by..by + scale {
                    for x in bx..bx + scale {
                        mask.set(x, y, true);
                    }
                }
            }
        }
        mask
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    /// Opacity at (x, y); anything outside the mask is transparent.
    pub fn get(&self, x: i32, y: i32) -> bool {
        if x < 0 || y < 0 || x >= self.width || y >= self.height {
            return false;
        }
        self.bits[(y * self.width + x) as usize]
    }

    pub fn set(&mut self, x: i32, y: i32, opaque: bool) {
        if x < 0 || y < 0 || x >= self.width || y >= self.height {
            return;
        }
        self.bits[(y * self.width + x) as usize] = opaque;
    }

    /// Number of opaque pixels.
    pub fn count(&self) -> usize {
        self.bits.iter().filter(|&&b| b).count()
    }

    /// First pixel (in this mask's coordinates) that is opaque here and in
    /// `other` when `other`'s origin sits at `offset`.
    pub fn overlap(&self, other: &Mask, offset: (i32, i32)) -> Option<(i32, i32)> {
        let (dx, dy) = offset;
        let x0 = dx.max(0);
        let y0 = dy.max(0);
        let x1 = (dx + other.width).min(self.width);
        let y1 = (dy + other.height).min(self.height);

        for y in y0..y1 {
            for x in x0..x1 {
                if self.get(x, y) && other.get(x - dx, y - dy) {
                    return Some((x, y));
                }
            }
        }
        None
    }
}

// ── Positioned sprites ────────────────────────────────────────────────────────

/// Anything drawn with a sprite at a screen position.
pub trait Collidable {
    fn sprite(&self) -> SpriteId;
    fn position(&self) -> (i32, i32);
}

/// True iff `a` and `b` share at least one opaque pixel.
pub fn collides(sprites: &SpriteSheet, a: &impl Collidable, b: &impl Collidable) -> bool {
    let (ax, ay) = a.position();
    let (bx, by) = b.position();
    let a_mask = &sprites.get(a.sprite()).mask;
    let b_mask = &sprites.get(b.sprite()).mask;
    a_mask.overlap(b_mask, (bx - ax, by - ay)).is_some()
}
