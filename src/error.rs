//! Error types for startup and entity construction.
//!
//! The per-frame simulation never fails; everything here happens before the
//! first frame (bad config, missing sprite art) or while building entities
//! from caller-supplied keys.

use std::path::PathBuf;

use crate::sprites::SpriteId;

#[derive(thiserror::Error, Debug)]
pub enum GameError {
    /// Enemy construction with a key outside the three known kinds
    #[error("unknown enemy kind: {0:?}")]
    UnknownEnemyKind(String),

    /// Sprite art file could not be read
    #[error("missing sprite {id} at {}: {source}", .path.display())]
    MissingSprite {
        id: SpriteId,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Sprite art that cannot produce a usable mask
    #[error("invalid sprite {id}: {reason}")]
    InvalidSprite { id: SpriteId, reason: String },

    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("config parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, GameError>;
