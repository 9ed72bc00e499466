//! Sprite handles and the sheet that resolves them.
//!
//! Sprites are text art: each character covers a `scale`×`scale` pixel
//! block of the 800×750 play field. The same art feeds the collision mask
//! and the terminal renderer.

use std::fmt;
use std::path::Path;

use crate::collision::Mask;
use crate::error::{GameError, Result};

// ── Handles ───────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SpriteId {
    MainCharacter,
    Enemy1,
    Enemy2,
    Enemy3,
    MainCharacterLaser,
    EnemyLaser1,
    EnemyLaser2,
    EnemyLaser3,
    Background,
}

impl SpriteId {
    pub const ALL: [SpriteId; 9] = [
        SpriteId::MainCharacter,
        SpriteId::Enemy1,
        SpriteId::Enemy2,
        SpriteId::Enemy3,
        SpriteId::MainCharacterLaser,
        SpriteId::EnemyLaser1,
        SpriteId::EnemyLaser2,
        SpriteId::EnemyLaser3,
        SpriteId::Background,
    ];

    fn index(self) -> usize {
        self as usize
    }

    /// File stem used when loading art from a sprite directory.
    pub fn name(self) -> &'static str {
        match self {
            SpriteId::MainCharacter => "main_character",
            SpriteId::Enemy1 => "enemy_1",
            SpriteId::Enemy2 => "enemy_2",
            SpriteId::Enemy3 => "enemy_3",
            SpriteId::MainCharacterLaser => "main_character_bullet",
            SpriteId::EnemyLaser1 => "enemy_1_bullet",
            SpriteId::EnemyLaser2 => "enemy_2_bullet",
            SpriteId::EnemyLaser3 => "enemy_3_bullet",
            SpriteId::Background => "galaxy_bg",
        }
    }

    /// Pixels per art character.
    pub fn scale(self) -> i32 {
        match self {
            SpriteId::MainCharacter
            | SpriteId::Enemy1
            | SpriteId::Enemy2
            | SpriteId::Enemy3 => 10,
            _ => 5,
        }
    }
}

impl fmt::Display for SpriteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ── Sprite ────────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Sprite {
    pub art: Vec<String>,
    pub scale: i32,
    pub mask: Mask,
}

impl Sprite {
    pub fn from_art(art: Vec<String>, scale: i32) -> Self {
        let mask = Mask::from_art(&art, scale);
        Sprite { art, scale, mask }
    }

    /// Transparent sprite covering the whole field (the background).
    pub fn blank(width: i32, height: i32) -> Self {
        Sprite {
            art: Vec::new(),
            scale: 1,
            mask: Mask::new(width, height),
        }
    }

    pub fn width(&self) -> i32 {
        self.mask.width()
    }

    pub fn height(&self) -> i32 {
        self.mask.height()
    }
}

// ── Built-in art ──────────────────────────────────────────────────────────────

// 90×60 px; the laser leaves from column 4 (x + 40).
const MAIN_CHARACTER: &[&str] = &[
    "    ^    ",
    "   /A\\   ",
    "  |[#]|  ",
    " /#####\\ ",
    "<#######>",
    "  V   V  ",
];

// 50×40 px enemies; lasers leave from x + 25.
const ENEMY_1: &[&str] = &[
    "\\###/",
    " #O# ",
    " /V\\ ",
    "  '  ",
];

const ENEMY_2: &[&str] = &[
    " (@) ",
    "<###>",
    " ) ( ",
    "  v  ",
];

const ENEMY_3: &[&str] = &[
    "/=#=\\",
    "|###|",
    " \\#/ ",
    "  V  ",
];

const MAIN_CHARACTER_LASER: &[&str] = &["||", "||", "||", "||"];
const ENEMY_LASER_1: &[&str] = &["!!", "!!", "''"];
const ENEMY_LASER_2: &[&str] = &["oo", "oo"];
const ENEMY_LASER_3: &[&str] = &["**", "**", "**"];

fn builtin_art(id: SpriteId) -> &'static [&'static str] {
    match id {
        SpriteId::MainCharacter => MAIN_CHARACTER,
        SpriteId::Enemy1 => ENEMY_1,
        SpriteId::Enemy2 => ENEMY_2,
        SpriteId::Enemy3 => ENEMY_3,
        SpriteId::MainCharacterLaser => MAIN_CHARACTER_LASER,
        SpriteId::EnemyLaser1 => ENEMY_LASER_1,
        SpriteId::EnemyLaser2 => ENEMY_LASER_2,
        SpriteId::EnemyLaser3 => ENEMY_LASER_3,
        SpriteId::Background => &[],
    }
}

// ── Sheet ─────────────────────────────────────────────────────────────────────

/// Every sprite the game draws, indexed by `SpriteId`.
///
/// Construction guarantees all handles resolve, so lookups are total.
#[derive(Clone, Debug)]
pub struct SpriteSheet {
    sprites: Vec<Sprite>,
}

impl SpriteSheet {
    /// The compiled-in art, with a background sized to the play field.
    pub fn builtin(width: i32, height: i32) -> Self {
        let sprites = SpriteId::ALL
            .iter()
            .map(|&id| match id {
                SpriteId::Background => Sprite::blank(width, height),
                _ => Sprite::from_art(
                    builtin_art(id).iter().map(|s| s.to_string()).collect(),
                    id.scale(),
                ),
            })
            .collect();
        SpriteSheet { sprites }
    }

    /// Assemble a sheet from explicit sprites; every handle must be present.
    pub fn from_sprites(mut entries: Vec<(SpriteId, Sprite)>) -> Result<Self> {
        let mut sprites = Vec::with_capacity(SpriteId::ALL.len());
        for id in SpriteId::ALL {
            let pos = entries.iter().position(|(e, _)| *e == id).ok_or_else(|| {
                GameError::InvalidSprite {
                    id,
                    reason: "not supplied".to_string(),
                }
            })?;
            sprites.push(entries.swap_remove(pos).1);
        }
        Ok(SpriteSheet { sprites })
    }

    /// Load `<name>.txt` art for every sprite except the background.
    pub fn load_dir(dir: &Path, width: i32, height: i32) -> Result<Self> {
        let mut entries = Vec::with_capacity(SpriteId::ALL.len());
        for id in SpriteId::ALL {
            if id == SpriteId::Background {
                entries.push((id, Sprite::blank(width, height)));
                continue;
            }
            let path = dir.join(format!("{}.txt", id.name()));
            let text = std::fs::read_to_string(&path).map_err(|source| GameError::MissingSprite {
                id,
                path: path.clone(),
                source,
            })?;
            let mut art: Vec<String> = text.lines().map(|l| l.trim_end().to_string()).collect();
            // Trailing blank rows would otherwise make the mask taller
            while art.last().is_some_and(|l| l.is_empty()) {
                art.pop();
            }
            let sprite = Sprite::from_art(art, id.scale());
            if sprite.mask.count() == 0 {
                return Err(GameError::InvalidSprite {
                    id,
                    reason: format!("{} has no opaque pixels", path.display()),
                });
            }
            log::debug!("Loaded sprite {} ({}x{})", id, sprite.width(), sprite.height());
            entries.push((id, sprite));
        }
        SpriteSheet::from_sprites(entries)
    }

    pub fn get(&self, id: SpriteId) -> &Sprite {
        &self.sprites[id.index()]
    }
}
