//! Galaxy Wars - a vertical arcade shooter
//!
//! Core modules:
//! - `entities`: plain game data (ships, projectiles, state)
//! - `collision`: pixel-mask overlap tests
//! - `combat`: firing, cooldowns and projectile hits
//! - `wave`: enemy wave spawning
//! - `compute`: the per-frame state machine
//! - `ports` / `frame`: I/O contracts and the frame driver
//! - `present`: snapshot and layout for front ends

pub mod collision;
pub mod combat;
pub mod compute;
pub mod config;
pub mod context;
pub mod entities;
pub mod error;
pub mod frame;
pub mod ports;
pub mod present;
pub mod sprites;
pub mod wave;

pub use config::GameConfig;
pub use context::GameContext;
pub use error::{GameError, Result};
