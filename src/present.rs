//! Presentation data: what a front end needs to draw one frame.
//!
//! Nothing here mutates game state. `Snapshot` is the read-only view of a
//! frame; `draw_frame` / `draw_menu` lay it out on any `RenderSink`.

use rand::Rng;

use crate::combat::Combatant;
use crate::context::GameContext;
use crate::entities::{GameState, GameStatus, Ship};
use crate::ports::{RenderSink, Rgb};
use crate::sprites::SpriteId;

const HUD_MARGIN: i32 = 10;
const HEALTH_BAR_GAP: i32 = 10;
const HEALTH_BAR_HEIGHT: i32 = 10;
const GAME_OVER_Y: i32 = 350;
const STAR_SIZE: i32 = 4;

const MENU_LINES: &[(&str, i32)] = &[
    ("Press the MOUSE to begin...", 200),
    ("Press W to move FORWARD", 300),
    ("Press D to move RIGHT", 350),
    ("Press A to move LEFT", 400),
    ("Press S to move BACKWARD", 450),
    ("Press SPACE BAR to SHOOT", 500),
];

// ── Snapshot ──────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct ShipView {
    pub sprite: SpriteId,
    pub x: i32,
    pub y: i32,
    /// (sprite, x, y) per live shot, in draw order
    pub projectiles: Vec<(SpriteId, i32, i32)>,
}

impl ShipView {
    fn of(ship: &Ship) -> Self {
        ShipView {
            sprite: ship.sprite,
            x: ship.x,
            y: ship.y,
            projectiles: ship
                .projectiles
                .iter()
                .map(|p| (p.sprite, p.x, p.y))
                .collect(),
        }
    }
}

/// Per-frame view handed to the front end.
#[derive(Clone, Debug, PartialEq)]
pub struct Snapshot {
    pub player: ShipView,
    pub health_ratio: f32,
    pub enemies: Vec<ShipView>,
    pub level: u32,
    pub lives: i32,
    pub game_over: bool,
}

impl Snapshot {
    pub fn capture(state: &GameState) -> Self {
        Snapshot {
            player: ShipView::of(state.player.ship()),
            health_ratio: state.player.health_ratio(),
            enemies: state.enemies.iter().map(|e| ShipView::of(&e.ship)).collect(),
            level: state.level,
            lives: state.lives,
            game_over: matches!(state.status, GameStatus::Lost | GameStatus::Over),
        }
    }
}

// ── Starfield ─────────────────────────────────────────────────────────────────

/// Background stars drifting down one pixel per frame.
#[derive(Clone, Debug)]
pub struct Starfield {
    stars: Vec<(i32, i32)>,
    width: i32,
    height: i32,
}

impl Starfield {
    pub fn new(count: usize, width: i32, height: i32, rng: &mut impl Rng) -> Self {
        let stars = (0..count)
            .map(|_| (rng.gen_range(0..width), rng.gen_range(0..height)))
            .collect();
        Starfield { stars, width, height }
    }

    /// Scroll one frame; stars that fall off the bottom re-enter above the top.
    pub fn scroll(&mut self, rng: &mut impl Rng) {
        for star in &mut self.stars {
            star.1 += 1;
            if star.1 > self.height {
                star.1 = rng.gen_range(-20..-5);
                star.0 = rng.gen_range(0..self.width);
            }
        }
    }

    pub fn stars(&self) -> &[(i32, i32)] {
        &self.stars
    }
}

// ── Layout ────────────────────────────────────────────────────────────────────

fn draw_ship<R: RenderSink>(sink: &mut R, ship: &ShipView) -> std::io::Result<()> {
    sink.draw_sprite(ship.sprite, ship.x, ship.y)?;
    for &(sprite, x, y) in &ship.projectiles {
        sink.draw_sprite(sprite, x, y)?;
    }
    Ok(())
}

/// Red full-width bar with a green overlay proportional to health.
fn draw_health_bar<R: RenderSink>(
    sink: &mut R,
    snap: &Snapshot,
    ctx: &GameContext,
) -> std::io::Result<()> {
    let sprite = ctx.sprites.get(snap.player.sprite);
    let (w, h) = (sprite.width(), sprite.height());
    let y = snap.player.y + h + HEALTH_BAR_GAP;

    sink.draw_rect(Rgb::RED, snap.player.x, y, w, HEALTH_BAR_HEIGHT)?;
    let fill = (w as f32 * snap.health_ratio) as i32;
    sink.draw_rect(Rgb::GREEN, snap.player.x, y, fill, HEALTH_BAR_HEIGHT)?;
    Ok(())
}

/// Draw one in-game frame and present it.
pub fn draw_frame<R: RenderSink>(
    sink: &mut R,
    snap: &Snapshot,
    stars: &Starfield,
    ctx: &GameContext,
) -> std::io::Result<()> {
    let width = ctx.config.width;
    sink.draw_sprite(SpriteId::Background, 0, 0)?;

    let half = STAR_SIZE / 2;
    for &(x, y) in stars.stars() {
        sink.draw_rect(Rgb::WHITE, x - half, y - half, STAR_SIZE, STAR_SIZE)?;
    }

    // HUD: hearts left, level right
    sink.draw_text(&format!("Hearts: {}", snap.lives), HUD_MARGIN, HUD_MARGIN)?;
    let level = format!("Level: {}", snap.level);
    let lx = width - sink.text_width(&level) - HUD_MARGIN;
    sink.draw_text(&level, lx, HUD_MARGIN)?;

    for enemy in &snap.enemies {
        draw_ship(sink, enemy)?;
    }
    draw_ship(sink, &snap.player)?;
    draw_health_bar(sink, snap, ctx)?;

    if snap.game_over {
        let label = "GAME OVER!";
        let x = width / 2 - sink.text_width(label) / 2;
        sink.draw_text(label, x, GAME_OVER_Y)?;
    }

    sink.present_frame()
}

/// Draw the start screen and present it.
pub fn draw_menu<R: RenderSink>(sink: &mut R, ctx: &GameContext) -> std::io::Result<()> {
    sink.draw_sprite(SpriteId::Background, 0, 0)?;
    for &(line, y) in MENU_LINES {
        let x = ctx.config.width / 2 - sink.text_width(line) / 2;
        sink.draw_text(line, x, y)?;
    }
    sink.present_frame()
}
