//! Boundary contracts between the simulation and its I/O collaborators.
//!
//! The binary implements these for the terminal; tests implement them with
//! recording fakes.

use std::collections::HashSet;
use std::time::Duration;

use crate::entities::{Controls, SoundEffect};
use crate::sprites::SpriteId;

/// 24-bit colour for rectangles.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const RED: Rgb = Rgb(255, 0, 0);
    pub const GREEN: Rgb = Rgb(0, 255, 0);
    pub const WHITE: Rgb = Rgb(255, 255, 255);
}

/// Where frames are drawn. Coordinates are play-field pixels.
pub trait RenderSink {
    fn draw_sprite(&mut self, sprite: SpriteId, x: i32, y: i32) -> std::io::Result<()>;
    fn draw_rect(&mut self, color: Rgb, x: i32, y: i32, w: i32, h: i32) -> std::io::Result<()>;
    fn draw_text(&mut self, text: &str, x: i32, y: i32) -> std::io::Result<()>;
    fn present_frame(&mut self) -> std::io::Result<()>;

    /// Rendered width of `text` in pixels, for alignment.
    fn text_width(&self, text: &str) -> i32 {
        text.chars().count() as i32 * 10
    }
}

/// Fire-and-forget sound output.
pub trait AudioSink {
    fn play_effect(&mut self, effect: SoundEffect);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
    Fire,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputEvent {
    Quit,
    MouseDown,
}

pub trait InputSource {
    /// Discrete events since the last poll.
    fn poll_events(&mut self) -> Vec<InputEvent>;
    /// Keys currently held down.
    fn held_keys(&mut self) -> HashSet<Key>;
}

/// Frame pacing. Blocks until the next frame is due and returns the time
/// since the previous call.
pub trait Clock {
    fn tick(&mut self, target_fps: u32) -> Duration;
}

/// Fold one frame of input into the simulation's `Controls`.
pub fn read_controls(input: &mut impl InputSource) -> Controls {
    let mut controls = Controls::default();
    for event in input.poll_events() {
        match event {
            InputEvent::Quit => controls.quit = true,
            InputEvent::MouseDown => controls.start = true,
        }
    }
    let held = input.held_keys();
    controls.up = held.contains(&Key::Up);
    controls.down = held.contains(&Key::Down);
    controls.left = held.contains(&Key::Left);
    controls.right = held.contains(&Key::Right);
    controls.fire = held.contains(&Key::Fire);
    controls
}
