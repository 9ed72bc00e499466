//! Wave spawning: a fresh, larger batch each time the live set empties.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::config::GameConfig;
use crate::entities::{Enemy, EnemyKind, GameState};

/// Start the next wave: bump the level, grow the wave and spawn it.
/// Returns how many enemies were added.
pub fn next_wave(state: &mut GameState, config: &GameConfig, rng: &mut impl Rng) -> usize {
    state.level += 1;
    state.wave_length += config.wave_growth;

    let count = state.wave_length as usize;
    state
        .enemies
        .extend((0..count).map(|_| spawn_enemy(config, rng)));

    log::info!("Wave {}: {} enemies", state.level, count);
    count
}

/// A random enemy above the screen. The tall y range staggers arrivals.
pub fn spawn_enemy(config: &GameConfig, rng: &mut impl Rng) -> Enemy {
    let x = rng.gen_range(config.spawn_margin_left..config.width - config.spawn_margin_right);
    let y = rng.gen_range(config.spawn_y_min..config.spawn_y_max);
    let kind = *EnemyKind::ALL
        .choose(rng)
        .unwrap_or(&EnemyKind::Interceptor);
    Enemy::new(x, y, kind)
}
