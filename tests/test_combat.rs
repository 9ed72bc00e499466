use galaxy_wars::combat::*;
use galaxy_wars::entities::*;
use galaxy_wars::sprites::SpriteId;
use galaxy_wars::{GameContext, GameError};

fn ctx() -> GameContext {
    GameContext::default()
}

fn enemy_laser(x: i32, y: i32) -> Projectile {
    Projectile::new(x, y, SpriteId::EnemyLaser1)
}

// ── Projectile ────────────────────────────────────────────────────────────────

#[test]
fn projectile_advance_moves_only_vertically() {
    let mut p = Projectile::new(10, 100, SpriteId::MainCharacterLaser);
    p.advance(-6);
    assert_eq!((p.x, p.y), (10, 94));
    p.advance(6);
    assert_eq!((p.x, p.y), (10, 100));
}

#[test]
fn projectile_off_screen_bounds() {
    let at = |y| Projectile::new(0, y, SpriteId::EnemyLaser1);
    assert!(!at(0).is_off_screen(750));
    assert!(!at(749).is_off_screen(750));
    assert!(at(750).is_off_screen(750));
    assert!(at(-1).is_off_screen(750));
}

// ── Cooldown & firing ─────────────────────────────────────────────────────────

#[test]
fn fire_sets_cooldown_and_records_projectile() {
    let mut player = Player::new(300, 630, 100);
    let shot = player.fire().cloned();
    assert_eq!(
        shot,
        Some(Projectile::new(340, 630, SpriteId::MainCharacterLaser))
    );
    assert_eq!(player.ship.cooldown, 1);
    assert_eq!(player.ship.projectiles.len(), 1);
}

#[test]
fn second_fire_in_same_frame_is_ignored() {
    let mut player = Player::new(300, 630, 100);
    assert!(player.fire().is_some());
    assert!(player.fire().is_none());
    assert_eq!(player.ship.projectiles.len(), 1);
}

#[test]
fn enemy_fires_from_its_own_offset() {
    let mut enemy = Enemy::new(100, 200, EnemyKind::Saucer);
    let shot = enemy.fire().cloned();
    assert_eq!(shot, Some(Projectile::new(125, 200, SpriteId::EnemyLaser2)));
}

#[test]
fn cooldown_blocks_for_exactly_thirty_frames() {
    let mut ship = Ship::new(0, 0, 100, SpriteId::Enemy1, SpriteId::EnemyLaser1);
    assert!(ship.fire(0).is_some());
    for _ in 0..29 {
        ship.tick_cooldown(30);
        assert!(ship.fire(0).is_none());
    }
    assert_eq!(ship.cooldown, 30);
    ship.tick_cooldown(30);
    assert_eq!(ship.cooldown, 0);
    assert!(ship.fire(0).is_some());
}

#[test]
fn idle_cooldown_stays_at_zero() {
    let mut ship = Ship::new(0, 0, 100, SpriteId::Enemy1, SpriteId::EnemyLaser1);
    ship.tick_cooldown(30);
    assert_eq!(ship.cooldown, 0);
}

#[test]
fn at_most_one_shot_per_cooldown_window() {
    let ctx = ctx();
    let mut player = Player::new(300, 630, 100);
    let mut enemies = Vec::new();
    let mut fired = 0;
    // Hammer fire every frame for one window
    for _ in 0..30 {
        if player.fire().is_some() {
            fired += 1;
        }
        player.advance_projectiles(-6, &mut enemies, &ctx);
    }
    assert_eq!(fired, 1);
}

// ── Enemy projectiles vs the player ──────────────────────────────────────────

#[test]
fn enemy_projectile_hit_damages_player_and_retires() {
    let ctx = ctx();
    let mut player = Player::new(300, 630, 100);
    let mut enemy = Enemy::new(600, 100, EnemyKind::Interceptor);
    // Moves to y=656, reaching the player's solid wing row (y 670..680)
    enemy.ship.projectiles.push(enemy_laser(320, 650));

    let retired = enemy.advance_projectiles(6, &mut player, &ctx);
    assert_eq!(retired, Retired { off_screen: 0, hits: 1 });
    assert_eq!(player.ship.health, 90);
    assert!(enemy.ship.projectiles.is_empty());
}

#[test]
fn enemy_projectile_leaving_screen_does_no_damage() {
    let ctx = ctx();
    // Wing row at y 751..761 would be hit if an off-screen shot were tested
    let mut player = Player::new(300, 711, 100);
    let mut enemy = Enemy::new(600, 100, EnemyKind::Interceptor);
    enemy.ship.projectiles.push(enemy_laser(310, 745));

    let retired = enemy.advance_projectiles(6, &mut player, &ctx);
    assert_eq!(retired, Retired { off_screen: 1, hits: 0 });
    assert_eq!(player.ship.health, 100);
    assert!(enemy.ship.projectiles.is_empty());
}

#[test]
fn enemy_projectile_in_flight_is_kept() {
    let ctx = ctx();
    let mut player = Player::new(300, 630, 100);
    let mut enemy = Enemy::new(600, 100, EnemyKind::Warbird);
    enemy.ship.projectiles.push(enemy_laser(625, 140));

    let retired = enemy.advance_projectiles(6, &mut player, &ctx);
    assert_eq!(retired, Retired::default());
    assert_eq!(enemy.ship.projectiles[0].y, 146);
}

#[test]
fn advance_projectiles_ticks_cooldown_first() {
    let ctx = ctx();
    let mut player = Player::new(300, 630, 100);
    let mut enemy = Enemy::new(600, 100, EnemyKind::Interceptor);
    enemy.fire();
    enemy.advance_projectiles(6, &mut player, &ctx);
    assert_eq!(enemy.ship.cooldown, 2);
}

// ── Player projectiles vs the enemy set ──────────────────────────────────────

#[test]
fn player_shot_destroys_enemy_outright() {
    let ctx = ctx();
    let mut player = Player::new(300, 630, 100);
    player
        .ship
        .projectiles
        .push(Projectile::new(110, 315, SpriteId::MainCharacterLaser));
    let mut enemies = vec![
        Enemy::new(100, 300, EnemyKind::Interceptor),
        Enemy::new(500, 300, EnemyKind::Saucer),
    ];

    let retired = player.advance_projectiles(-6, &mut enemies, &ctx);
    assert_eq!(retired.hits, 1);
    assert_eq!(enemies.len(), 1);
    assert_eq!(enemies[0].kind, EnemyKind::Saucer);
    assert!(player.ship.projectiles.is_empty());
}

#[test]
fn player_shot_kills_only_the_first_overlapping_enemy() {
    let ctx = ctx();
    let mut player = Player::new(300, 630, 100);
    player
        .ship
        .projectiles
        .push(Projectile::new(110, 315, SpriteId::MainCharacterLaser));
    let mut enemies = vec![
        Enemy::new(100, 300, EnemyKind::Interceptor),
        Enemy::new(100, 300, EnemyKind::Warbird),
    ];

    player.advance_projectiles(-6, &mut enemies, &ctx);
    assert_eq!(enemies.len(), 1);
    assert_eq!(enemies[0].kind, EnemyKind::Warbird);
}

#[test]
fn player_shot_leaving_top_is_retired() {
    let ctx = ctx();
    let mut player = Player::new(300, 630, 100);
    player
        .ship
        .projectiles
        .push(Projectile::new(110, 3, SpriteId::MainCharacterLaser));
    let mut enemies = vec![Enemy::new(100, -20, EnemyKind::Interceptor)];

    let retired = player.advance_projectiles(-6, &mut enemies, &ctx);
    assert_eq!(retired, Retired { off_screen: 1, hits: 0 });
    assert_eq!(enemies.len(), 1);
}

// ── Enemy construction & movement ─────────────────────────────────────────────

#[test]
fn enemy_from_key_picks_sprites() {
    let enemy = Enemy::from_key(10, 20, "enemy_3").unwrap();
    assert_eq!(enemy.kind, EnemyKind::Warbird);
    assert_eq!(enemy.ship.sprite, SpriteId::Enemy3);
    assert_eq!(enemy.ship.projectile_sprite, SpriteId::EnemyLaser3);
    assert_eq!(enemy.ship.health, ENEMY_HEALTH);
}

#[test]
fn enemy_from_unknown_key_fails() {
    assert!(matches!(
        Enemy::from_key(10, 20, "boss"),
        Err(GameError::UnknownEnemyKind(_))
    ));
}

#[test]
fn enemy_advance_is_vertical_only() {
    let mut enemy = Enemy::new(100, -50, EnemyKind::Saucer);
    enemy.advance(1);
    assert_eq!((enemy.ship.x, enemy.ship.y), (100, -49));
}

#[test]
fn ship_dimensions_come_from_sprites() {
    let ctx = ctx();
    let player = Player::new(0, 0, 100);
    let enemy = Enemy::new(0, 0, EnemyKind::Interceptor);
    assert_eq!((player.width(&ctx.sprites), player.height(&ctx.sprites)), (90, 60));
    assert_eq!((enemy.width(&ctx.sprites), enemy.height(&ctx.sprites)), (50, 40));
}

// ── Health bar ratio ──────────────────────────────────────────────────────────

#[test]
fn health_ratio_tracks_damage() {
    let mut player = Player::new(0, 0, 100);
    assert_eq!(player.health_ratio(), 1.0);
    player.take_damage(10);
    assert!((player.health_ratio() - 0.9).abs() < 1e-6);
}

#[test]
fn health_ratio_stays_in_unit_interval() {
    let mut player = Player::new(0, 0, 100);
    for _ in 0..25 {
        player.take_damage(10);
        let r = player.health_ratio();
        assert!((0.0..=1.0).contains(&r), "ratio {r}");
    }
    assert!(player.is_destroyed());
    assert_eq!(player.health_ratio(), 0.0);

    player.ship.health = 250;
    assert_eq!(player.health_ratio(), 1.0);
}
