//! One frame of the game loop wired to its I/O ports.

use rand::Rng;

use crate::compute::tick;
use crate::context::GameContext;
use crate::entities::GameState;
use crate::ports::{read_controls, AudioSink, InputSource};

/// Read input, advance the simulation and hand emitted cues to `audio`.
pub fn run_frame(
    state: &GameState,
    ctx: &GameContext,
    input: &mut impl InputSource,
    audio: &mut impl AudioSink,
    rng: &mut impl Rng,
) -> GameState {
    let controls = read_controls(input);
    let next = tick(state, &controls, ctx, rng);
    for &effect in &next.effects {
        audio.play_effect(effect);
    }
    next
}
