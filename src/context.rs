//! Startup-built context shared by the simulation and the front end.

use crate::config::GameConfig;
use crate::error::Result;
use crate::sprites::SpriteSheet;

/// Config plus resolved sprites. Built once, then borrowed by every frame.
#[derive(Clone, Debug)]
pub struct GameContext {
    pub config: GameConfig,
    pub sprites: SpriteSheet,
}

impl GameContext {
    /// Validate `config` and resolve its sprites. Missing art is fatal here
    /// so the simulation never runs with a partial sheet.
    pub fn new(config: GameConfig) -> Result<Self> {
        config.validate()?;
        let sprites = match &config.sprite_dir {
            Some(dir) => SpriteSheet::load_dir(dir, config.width, config.height)?,
            None => SpriteSheet::builtin(config.width, config.height),
        };
        Ok(GameContext { config, sprites })
    }
}

impl Default for GameContext {
    fn default() -> Self {
        let config = GameConfig::default();
        let sprites = SpriteSheet::builtin(config.width, config.height);
        GameContext { config, sprites }
    }
}
