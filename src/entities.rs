//! All game entity types — plain data plus their static lookup tables.
//! Per-frame behaviour lives in `combat`, `wave` and `compute`.

use crate::error::{GameError, Result};
use crate::sprites::SpriteId;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EnemyKind {
    Interceptor,
    Saucer,
    Warbird,
}

impl EnemyKind {
    pub const ALL: [EnemyKind; 3] = [EnemyKind::Interceptor, EnemyKind::Saucer, EnemyKind::Warbird];

    /// Resolve a kind from its spawn-table key.
    pub fn from_key(key: &str) -> Result<Self> {
        match key {
            "enemy_1" => Ok(EnemyKind::Interceptor),
            "enemy_2" => Ok(EnemyKind::Saucer),
            "enemy_3" => Ok(EnemyKind::Warbird),
            other => Err(GameError::UnknownEnemyKind(other.to_string())),
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            EnemyKind::Interceptor => "enemy_1",
            EnemyKind::Saucer => "enemy_2",
            EnemyKind::Warbird => "enemy_3",
        }
    }

    /// (ship sprite, laser sprite)
    pub fn sprites(self) -> (SpriteId, SpriteId) {
        match self {
            EnemyKind::Interceptor => (SpriteId::Enemy1, SpriteId::EnemyLaser1),
            EnemyKind::Saucer => (SpriteId::Enemy2, SpriteId::EnemyLaser2),
            EnemyKind::Warbird => (SpriteId::Enemy3, SpriteId::EnemyLaser3),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    /// Waiting for the start click
    Menu,
    Playing,
    /// Showing GAME OVER until the delay runs out
    Lost,
    /// Lost delay elapsed; the front end returns to the menu
    Over,
    /// Player asked to quit
    Quit,
}

/// Cues the front end should play; emitted per frame, never awaited.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SoundEffect {
    Laser,
    Collision,
    GameOver,
}

// ── Projectiles ───────────────────────────────────────────────────────────────

/// A laser shot. Its owner is whichever ship's list holds it.
#[derive(Clone, Debug, PartialEq)]
pub struct Projectile {
    pub x: i32,
    pub y: i32,
    pub sprite: SpriteId,
}

// ── Ships ─────────────────────────────────────────────────────────────────────

/// State shared by every combatant.
#[derive(Clone, Debug, PartialEq)]
pub struct Ship {
    pub x: i32,
    pub y: i32,
    pub health: i32,
    /// 0 = ready to fire; 1..=limit = cooling down
    pub cooldown: u32,
    /// Insertion order doubles as draw order.
    pub projectiles: Vec<Projectile>,
    pub sprite: SpriteId,
    pub projectile_sprite: SpriteId,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Player {
    pub ship: Ship,
    pub max_health: i32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Enemy {
    pub ship: Ship,
    pub kind: EnemyKind,
}

// ── Input ─────────────────────────────────────────────────────────────────────

/// Everything the simulation reads from the player in one frame.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Controls {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
    pub fire: bool,
    /// Start trigger (mouse click) for the menu
    pub start: bool,
    pub quit: bool,
}

// ── Master game state ─────────────────────────────────────────────────────────

/// The entire game state.  Cloneable so `compute::tick` can return a new
/// copy without mutating the original.
#[derive(Clone, Debug)]
pub struct GameState {
    pub player: Player,
    /// Live enemy set; order carries no meaning.
    pub enemies: Vec<Enemy>,
    pub level: u32,
    pub wave_length: u32,
    pub lives: i32,
    pub status: GameStatus,
    /// Frames spent in `Lost`
    pub lost_frames: u32,
    pub frame: u64,
    /// Sound cues emitted by the most recent tick
    pub effects: Vec<SoundEffect>,
}
