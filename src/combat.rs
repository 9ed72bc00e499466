//! Combat behaviour: projectile motion, cooldown-gated firing and hit
//! resolution for the player and enemy ships.

use crate::collision::{collides, Collidable};
use crate::context::GameContext;
use crate::entities::{Enemy, EnemyKind, Player, Projectile, Ship};
use crate::error::Result;
use crate::sprites::{SpriteId, SpriteSheet};

pub const PLAYER_FIRE_OFFSET: i32 = 40;
pub const ENEMY_FIRE_OFFSET: i32 = 25;
pub const ENEMY_HEALTH: i32 = 100;

/// How a frame's projectile pass retired shots.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Retired {
    pub off_screen: usize,
    pub hits: usize,
}

// ── Projectile ────────────────────────────────────────────────────────────────

impl Projectile {
    pub fn new(x: i32, y: i32, sprite: SpriteId) -> Self {
        Projectile { x, y, sprite }
    }

    /// Move along y; the sign of `velocity` picks the direction.
    pub fn advance(&mut self, velocity: i32) {
        self.y += velocity;
    }

    pub fn is_off_screen(&self, screen_height: i32) -> bool {
        !(self.y >= 0 && self.y < screen_height)
    }

    pub fn overlaps(&self, sprites: &SpriteSheet, target: &impl Collidable) -> bool {
        collides(sprites, self, target)
    }
}

impl Collidable for Projectile {
    fn sprite(&self) -> SpriteId {
        self.sprite
    }

    fn position(&self) -> (i32, i32) {
        (self.x, self.y)
    }
}

// ── Ship (shared combatant state) ─────────────────────────────────────────────

impl Ship {
    pub fn new(x: i32, y: i32, health: i32, sprite: SpriteId, projectile_sprite: SpriteId) -> Self {
        Ship {
            x,
            y,
            health,
            cooldown: 0,
            projectiles: Vec::new(),
            sprite,
            projectile_sprite,
        }
    }

    /// Once a shot is fired the counter climbs to `limit`, then resets to 0.
    pub fn tick_cooldown(&mut self, limit: u32) {
        if self.cooldown >= limit {
            self.cooldown = 0;
        } else if self.cooldown > 0 {
            self.cooldown += 1;
        }
    }

    /// Spawn a shot `offset` px right of the ship if the cooldown allows it.
    pub fn fire(&mut self, offset: i32) -> Option<&Projectile> {
        if self.cooldown != 0 {
            return None;
        }
        self.projectiles
            .push(Projectile::new(self.x + offset, self.y, self.projectile_sprite));
        self.cooldown = 1;
        self.projectiles.last()
    }

    /// Move every shot, retiring those that leave the screen or hit
    /// `defender`. A hit costs the defender `config.damage` health.
    pub fn advance_projectiles<T: Combatant>(
        &mut self,
        velocity: i32,
        defender: &mut T,
        ctx: &GameContext,
    ) -> Retired {
        self.tick_cooldown(ctx.config.cooldown_frames);

        let mut retired = Retired::default();
        let sprites = &ctx.sprites;
        let (height, damage) = (ctx.config.height, ctx.config.damage);

        self.projectiles.retain_mut(|p| {
            p.advance(velocity);
            if p.is_off_screen(height) {
                retired.off_screen += 1;
                false
            } else if p.overlaps(sprites, &*defender) {
                defender.take_damage(damage);
                retired.hits += 1;
                false
            } else {
                true
            }
        });
        retired
    }
}

impl Collidable for Ship {
    fn sprite(&self) -> SpriteId {
        self.sprite
    }

    fn position(&self) -> (i32, i32) {
        (self.x, self.y)
    }
}

// ── Combatant capability ──────────────────────────────────────────────────────

/// A ship that fires from a fixed horizontal offset and can be damaged.
pub trait Combatant: Collidable {
    const FIRE_OFFSET: i32;

    fn ship(&self) -> &Ship;
    fn ship_mut(&mut self) -> &mut Ship;

    fn fire(&mut self) -> Option<&Projectile> {
        self.ship_mut().fire(Self::FIRE_OFFSET)
    }

    fn take_damage(&mut self, amount: i32) {
        self.ship_mut().health -= amount;
    }

    fn is_destroyed(&self) -> bool {
        self.ship().health <= 0
    }

    fn width(&self, sprites: &SpriteSheet) -> i32 {
        sprites.get(self.ship().sprite).width()
    }

    fn height(&self, sprites: &SpriteSheet) -> i32 {
        sprites.get(self.ship().sprite).height()
    }
}

// ── Player ────────────────────────────────────────────────────────────────────

impl Player {
    pub fn new(x: i32, y: i32, health: i32) -> Self {
        Player {
            ship: Ship::new(
                x,
                y,
                health,
                SpriteId::MainCharacter,
                SpriteId::MainCharacterLaser,
            ),
            max_health: health,
        }
    }

    /// Health-bar fill in [0, 1].
    pub fn health_ratio(&self) -> f32 {
        if self.max_health <= 0 {
            return 0.0;
        }
        (self.ship.health as f32 / self.max_health as f32).clamp(0.0, 1.0)
    }

    /// Move the player's shots against the whole live set. The first enemy
    /// a shot overlaps is destroyed outright.
    pub fn advance_projectiles(
        &mut self,
        velocity: i32,
        enemies: &mut Vec<Enemy>,
        ctx: &GameContext,
    ) -> Retired {
        self.ship.tick_cooldown(ctx.config.cooldown_frames);

        let mut retired = Retired::default();
        let sprites = &ctx.sprites;
        let height = ctx.config.height;

        self.ship.projectiles.retain_mut(|p| {
            p.advance(velocity);
            if p.is_off_screen(height) {
                retired.off_screen += 1;
                return false;
            }
            match enemies.iter().position(|e| p.overlaps(sprites, e)) {
                Some(hit) => {
                    enemies.remove(hit);
                    retired.hits += 1;
                    false
                }
                None => true,
            }
        });
        retired
    }
}

impl Collidable for Player {
    fn sprite(&self) -> SpriteId {
        self.ship.sprite
    }

    fn position(&self) -> (i32, i32) {
        (self.ship.x, self.ship.y)
    }
}

impl Combatant for Player {
    const FIRE_OFFSET: i32 = PLAYER_FIRE_OFFSET;

    fn ship(&self) -> &Ship {
        &self.ship
    }

    fn ship_mut(&mut self) -> &mut Ship {
        &mut self.ship
    }
}

// ── Enemy ─────────────────────────────────────────────────────────────────────

impl Enemy {
    pub fn new(x: i32, y: i32, kind: EnemyKind) -> Self {
        let (sprite, laser) = kind.sprites();
        Enemy {
            ship: Ship::new(x, y, ENEMY_HEALTH, sprite, laser),
            kind,
        }
    }

    /// Build from a spawn-table key such as `"enemy_2"`.
    pub fn from_key(x: i32, y: i32, key: &str) -> Result<Self> {
        Ok(Enemy::new(x, y, EnemyKind::from_key(key)?))
    }

    /// Straight descent; enemies never drift sideways.
    pub fn advance(&mut self, velocity: i32) {
        self.ship.y += velocity;
    }

    pub fn advance_projectiles(
        &mut self,
        velocity: i32,
        player: &mut Player,
        ctx: &GameContext,
    ) -> Retired {
        self.ship.advance_projectiles(velocity, player, ctx)
    }
}

impl Collidable for Enemy {
    fn sprite(&self) -> SpriteId {
        self.ship.sprite
    }

    fn position(&self) -> (i32, i32) {
        (self.ship.x, self.ship.y)
    }
}

impl Combatant for Enemy {
    const FIRE_OFFSET: i32 = ENEMY_FIRE_OFFSET;

    fn ship(&self) -> &Ship {
        &self.ship
    }

    fn ship_mut(&mut self) -> &mut Ship {
        &mut self.ship
    }
}
