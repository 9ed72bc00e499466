//! Game-logic functions.
//!
//! Every public function takes an immutable reference to the current
//! `GameState` (plus the startup context and, where needed, an RNG handle)
//! and returns a brand-new `GameState`.  Side effects are limited to the
//! injected RNG.

use rand::Rng;

use crate::collision::collides;
use crate::combat::Combatant;
use crate::config::GameConfig;
use crate::context::GameContext;
use crate::entities::{Controls, GameState, GameStatus, Player, SoundEffect};
use crate::wave;

// ── Constructors ─────────────────────────────────────────────────────────────

/// Fresh state sitting on the menu.
pub fn init_state(config: &GameConfig) -> GameState {
    GameState {
        player: Player::new(
            config.player_start_x,
            config.player_start_y,
            config.player_health,
        ),
        enemies: Vec::new(),
        level: 0,
        wave_length: config.initial_wave_length,
        lives: config.starting_lives,
        status: GameStatus::Menu,
        lost_frames: 0,
        frame: 0,
        effects: Vec::new(),
    }
}

// ── Input-driven state transitions (pure) ───────────────────────────────────

/// Apply one frame of held direction keys, clamped to the play field.
pub fn move_player(state: &GameState, controls: &Controls, ctx: &GameContext) -> GameState {
    let mut next = state.clone();
    steer(&mut next.player, controls, ctx);
    next
}

/// Pull the trigger. The laser cue plays even while the cooldown swallows
/// the shot.
pub fn player_fire(state: &GameState) -> GameState {
    let mut next = state.clone();
    fire(&mut next);
    next
}

fn steer(player: &mut Player, controls: &Controls, ctx: &GameContext) {
    let config = &ctx.config;
    let v = config.player_velocity;
    let w = player.width(&ctx.sprites);
    let h = player.height(&ctx.sprites);
    let ship = &mut player.ship;

    if controls.left && ship.x - v > 0 {
        ship.x -= v;
    }
    if controls.right && ship.x + v + w < config.width {
        ship.x += v;
    }
    if controls.up && ship.y - v > 0 {
        ship.y -= v;
    }
    // Keep the health bar band under the ship on screen
    if controls.down && ship.y + v + h + config.health_bar_band < config.height {
        ship.y += v;
    }
}

fn fire(state: &mut GameState) {
    state.player.fire();
    state.effects.push(SoundEffect::Laser);
}

/// Count a frame on the GAME OVER screen; past the delay the game is over.
fn count_lost_frame(state: &mut GameState, config: &GameConfig) {
    if state.status != GameStatus::Lost {
        log::info!(
            "Game lost at level {} (lives {}, health {})",
            state.level,
            state.lives,
            state.player.ship.health
        );
        state.status = GameStatus::Lost;
    }
    state.lost_frames += 1;
    if state.lost_frames > config.lost_delay_frames() {
        log::info!("Game over after {} frames", state.frame);
        state.status = GameStatus::Over;
        state.effects.push(SoundEffect::GameOver);
    }
}

// ── Per-frame tick (nearly pure — RNG is injected) ──────────────────────────

/// Advance the simulation by one frame.  All randomness comes through `rng`
/// so callers control determinism (useful for tests with a seeded RNG).
pub fn tick(
    state: &GameState,
    controls: &Controls,
    ctx: &GameContext,
    rng: &mut impl Rng,
) -> GameState {
    let config = &ctx.config;
    let mut next = state.clone();
    next.frame += 1;
    next.effects.clear();

    match next.status {
        GameStatus::Menu => {
            if controls.quit {
                next.status = GameStatus::Quit;
            } else if controls.start {
                log::info!("Game started");
                next.status = GameStatus::Playing;
            }
            return next;
        }
        GameStatus::Lost => {
            count_lost_frame(&mut next, config);
            return next;
        }
        GameStatus::Over | GameStatus::Quit => return next,
        GameStatus::Playing => {}
    }

    // ── 1. Loss check ────────────────────────────────────────────────────────
    if next.lives <= 0 || next.player.is_destroyed() {
        count_lost_frame(&mut next, config);
        return next;
    }

    // ── 2. Next wave once the sky is clear ──────────────────────────────────
    if next.enemies.is_empty() {
        wave::next_wave(&mut next, config, rng);
    }

    // ── 3. Quit skips the GAME OVER delay ───────────────────────────────────
    if controls.quit {
        log::info!("Quit at level {}", next.level);
        next.status = GameStatus::Quit;
        return next;
    }

    // ── 4. Player movement & fire ───────────────────────────────────────────
    steer(&mut next.player, controls, ctx);
    if controls.fire {
        fire(&mut next);
    }

    // ── 5. Enemies: descend, shoot, ram or escape ───────────────────────────
    // Take the live set out so enemies can be dropped while iterating.
    let wave = std::mem::take(&mut next.enemies);
    for mut enemy in wave {
        enemy.advance(config.enemy_velocity);
        enemy.advance_projectiles(config.projectile_velocity, &mut next.player, ctx);

        if rng.gen_ratio(1, config.enemy_fire_odds) {
            enemy.fire();
        }

        if collides(&ctx.sprites, &enemy, &next.player) {
            log::debug!("Rammed by {:?} at ({}, {})", enemy.kind, enemy.ship.x, enemy.ship.y);
            next.effects.push(SoundEffect::Collision);
            next.player.take_damage(config.damage);
            continue;
        }
        if enemy.ship.y + enemy.height(&ctx.sprites) > config.height {
            next.lives -= 1;
            log::debug!("{:?} escaped, {} lives left", enemy.kind, next.lives);
            continue;
        }
        next.enemies.push(enemy);
    }

    // ── 6. Player shots ─────────────────────────────────────────────────────
    next.player
        .advance_projectiles(-config.projectile_velocity, &mut next.enemies, ctx);

    next
}
