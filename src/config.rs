//! Game tuning, loaded from `~/.galaxy_wars.json`.
//!
//! Every field has a default so a partial file only overrides what it names.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{GameError, Result};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    // === Screen ===
    pub width: i32,
    pub height: i32,
    /// Target frame rate; also converts the Lost delay to frames
    pub fps: u32,

    // === Movement (px per frame) ===
    pub player_velocity: i32,
    pub enemy_velocity: i32,
    /// Projectile speed; player shots travel with the negated value
    pub projectile_velocity: i32,

    // === Combat ===
    /// Frames a ship must wait between shots
    pub cooldown_frames: u32,
    pub damage: i32,
    /// Enemies fire with probability 1 / enemy_fire_odds per frame
    pub enemy_fire_odds: u32,

    // === Player ===
    pub starting_lives: i32,
    pub player_health: i32,
    pub player_start_x: i32,
    pub player_start_y: i32,
    /// Space kept free under the player for the health bar
    pub health_bar_band: i32,

    // === Waves ===
    pub initial_wave_length: u32,
    pub wave_growth: u32,
    pub spawn_margin_left: i32,
    pub spawn_margin_right: i32,
    pub spawn_y_min: i32,
    pub spawn_y_max: i32,

    // === Presentation ===
    pub lost_delay_secs: u32,
    pub star_count: usize,
    pub terminal_bell: bool,
    /// Directory of `<sprite>.txt` art files replacing the built-in sprites
    pub sprite_dir: Option<PathBuf>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 750,
            fps: 60,

            player_velocity: 5,
            enemy_velocity: 1,
            projectile_velocity: 6,

            cooldown_frames: 30,
            damage: 10,
            enemy_fire_odds: 120,

            starting_lives: 5,
            player_health: 100,
            player_start_x: 300,
            player_start_y: 630,
            health_bar_band: 20,

            initial_wave_length: 5,
            wave_growth: 5,
            spawn_margin_left: 50,
            spawn_margin_right: 100,
            spawn_y_min: -1500,
            spawn_y_max: -100,

            lost_delay_secs: 3,
            star_count: 200,
            terminal_bell: true,
            sprite_dir: None,
        }
    }
}

impl GameConfig {
    /// `$HOME/.galaxy_wars.json`, falling back to the working directory
    pub fn default_path() -> PathBuf {
        let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
        PathBuf::from(home).join(".galaxy_wars.json")
    }

    /// Load and validate a config file. A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let config = match std::fs::read_to_string(path) {
            Ok(json) => {
                let config: GameConfig = serde_json::from_str(&json)?;
                log::info!("Loaded config from {}", path.display());
                config
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::warn!("No config at {}, using defaults", path.display());
                GameConfig::default()
            }
            Err(e) => return Err(e.into()),
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.width <= 0 || self.height <= 0 {
            return Err(GameError::Config(format!(
                "screen size must be positive, got {}x{}",
                self.width, self.height
            )));
        }
        if self.fps == 0 {
            return Err(GameError::Config("fps must be at least 1".into()));
        }
        if self.enemy_fire_odds == 0 {
            return Err(GameError::Config("enemy_fire_odds must be at least 1".into()));
        }
        if self.spawn_margin_left >= self.width - self.spawn_margin_right {
            return Err(GameError::Config(format!(
                "empty horizontal spawn range [{}, {})",
                self.spawn_margin_left,
                self.width - self.spawn_margin_right
            )));
        }
        if self.spawn_y_min >= self.spawn_y_max {
            return Err(GameError::Config(format!(
                "empty vertical spawn range [{}, {})",
                self.spawn_y_min, self.spawn_y_max
            )));
        }
        Ok(())
    }

    /// Frames the Lost screen stays up before the game ends
    pub fn lost_delay_frames(&self) -> u32 {
        self.fps * self.lost_delay_secs
    }
}
