use galaxy_wars::collision::*;
use galaxy_wars::entities::Projectile;
use galaxy_wars::sprites::{SpriteId, SpriteSheet};

fn art(rows: &[&str]) -> Vec<String> {
    rows.iter().map(|s| s.to_string()).collect()
}

fn solid(width: i32, height: i32) -> Mask {
    let mut m = Mask::new(width, height);
    for y in 0..height {
        for x in 0..width {
            m.set(x, y, true);
        }
    }
    m
}

fn sheet() -> SpriteSheet {
    SpriteSheet::builtin(800, 750)
}

// ── Mask construction ─────────────────────────────────────────────────────────

#[test]
fn mask_from_art_scales_each_character() {
    let m = Mask::from_art(&art(&["# ", " #"]), 3);
    assert_eq!(m.width(), 6);
    assert_eq!(m.height(), 6);
    assert!(m.get(0, 0));
    assert!(m.get(2, 2));
    assert!(!m.get(3, 0)); // space column
    assert!(m.get(5, 5));
    assert_eq!(m.count(), 18);
}

#[test]
fn mask_from_ragged_art_pads_with_transparency() {
    let m = Mask::from_art(&art(&["###", "#"]), 1);
    assert_eq!(m.width(), 3);
    assert!(m.get(0, 1));
    assert!(!m.get(2, 1));
}

#[test]
fn mask_outside_bounds_is_transparent() {
    let m = solid(4, 4);
    assert!(!m.get(-1, 0));
    assert!(!m.get(0, 4));
    assert!(!m.get(4, 0));
}

// ── Mask overlap ──────────────────────────────────────────────────────────────

#[test]
fn overlap_of_touching_edges_is_none() {
    let a = solid(10, 10);
    let b = solid(10, 10);
    assert_eq!(a.overlap(&b, (10, 0)), None);
    assert_eq!(a.overlap(&b, (0, -10)), None);
}

#[test]
fn overlap_reports_first_shared_pixel() {
    let a = solid(10, 10);
    let b = solid(10, 10);
    assert_eq!(a.overlap(&b, (9, 9)), Some((9, 9)));
    assert_eq!(a.overlap(&b, (-5, -5)), Some((0, 0)));
}

#[test]
fn overlap_ignores_transparent_pixels_inside_bounding_box() {
    // Two hollow boxes whose bounding boxes overlap but whose outlines don't
    let ring = Mask::from_art(&art(&["###", "# #", "###"]), 1);
    let dot = Mask::from_art(&art(&["#"]), 1);
    assert_eq!(ring.overlap(&dot, (1, 1)), None);
    assert_eq!(ring.overlap(&dot, (0, 1)), Some((0, 1)));
}

#[test]
fn overlap_is_symmetric_with_negated_offset() {
    let a = Mask::from_art(&art(&["#  ", " # ", "  #"]), 2);
    let b = Mask::from_art(&art(&["##"]), 2);
    for dx in -6..8 {
        for dy in -4..8 {
            assert_eq!(
                a.overlap(&b, (dx, dy)).is_some(),
                b.overlap(&a, (-dx, -dy)).is_some(),
                "offset ({dx}, {dy})"
            );
        }
    }
}

// ── collides() on positioned sprites ──────────────────────────────────────────

#[test]
fn collides_is_symmetric() {
    let sprites = sheet();
    let a = Projectile { x: 100, y: 100, sprite: SpriteId::MainCharacterLaser };
    let b = Projectile { x: 105, y: 110, sprite: SpriteId::EnemyLaser2 };
    assert!(collides(&sprites, &a, &b));
    assert!(collides(&sprites, &b, &a));

    let far = Projectile { x: 300, y: 100, sprite: SpriteId::EnemyLaser2 };
    assert!(!collides(&sprites, &a, &far));
    assert!(!collides(&sprites, &far, &a));
}

#[test]
fn collides_uses_pixels_not_bounding_boxes() {
    let sprites = sheet();
    // Player tip is only the middle column of the top row, so a laser in
    // the top-left corner of the bounding box misses.
    let player = Projectile { x: 0, y: 0, sprite: SpriteId::MainCharacter };
    let corner = Projectile { x: 0, y: 0, sprite: SpriteId::EnemyLaser2 };
    assert!(!collides(&sprites, &player, &corner));

    let tip = Projectile { x: 40, y: 0, sprite: SpriteId::EnemyLaser2 };
    assert!(collides(&sprites, &player, &tip));
}
