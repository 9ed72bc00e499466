mod display;

use std::collections::{HashMap, HashSet};
use std::io::{stdout, BufWriter, Write};
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

use crossterm::{
    cursor,
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers, KeyboardEnhancementFlags, MouseEventKind, PopKeyboardEnhancementFlags,
        PushKeyboardEnhancementFlags,
    },
    terminal, ExecutableCommand,
};
use rand::thread_rng;

use galaxy_wars::compute::init_state;
use galaxy_wars::entities::{GameStatus, SoundEffect};
use galaxy_wars::frame::run_frame;
use galaxy_wars::ports::{AudioSink, Clock, InputEvent, InputSource, Key};
use galaxy_wars::present::{draw_frame, draw_menu, Snapshot, Starfield};
use galaxy_wars::{GameConfig, GameContext, Result};

use display::TerminalRenderer;

// ── Input ─────────────────────────────────────────────────────────────────────

/// A key is considered "held" if its last press/repeat event arrived within
/// this many frames.  Covers terminals that don't emit key-release events:
/// the OS key-repeat rate is ≥ 15 Hz, so a window of 8 frames (≈133 ms at
/// 60 FPS) is always refreshed before expiry.
const HOLD_WINDOW: u64 = 8;

/// Input model: instead of acting on each key event individually, we keep a
/// `key_frame` map recording the frame of the last press/repeat event for
/// every key.  Each frame the keys still "fresh" (within `HOLD_WINDOW`
/// frames) count as held, so Space + W/A/S/D can be held together.
///
/// Works on two classes of terminal:
/// * **Keyboard-enhancement capable** (Ghostty, kitty, etc.): proper
///   `Press` / `Repeat` / `Release` events → keys are removed on release.
/// * **Classic terminals**: only `Press` events (OS key-repeat shows as
///   repeated `Press`).  Keys expire after `HOLD_WINDOW` frames of silence.
struct TerminalInput<'a> {
    rx: &'a mpsc::Receiver<Event>,
    key_frame: HashMap<KeyCode, u64>,
    frame: u64,
}

impl<'a> TerminalInput<'a> {
    fn new(rx: &'a mpsc::Receiver<Event>) -> Self {
        TerminalInput {
            rx,
            key_frame: HashMap::new(),
            frame: 0,
        }
    }

    fn is_held(&self, key: &KeyCode) -> bool {
        self.key_frame
            .get(key)
            .map(|&last| self.frame.saturating_sub(last) <= HOLD_WINDOW)
            .unwrap_or(false)
    }

    fn any_held(&self, keys: &[KeyCode]) -> bool {
        keys.iter().any(|k| self.is_held(k))
    }
}

impl InputSource for TerminalInput<'_> {
    /// Drain all pending terminal events (non-blocking).
    fn poll_events(&mut self) -> Vec<InputEvent> {
        self.frame += 1;
        let mut events = Vec::new();

        while let Ok(ev) = self.rx.try_recv() {
            match ev {
                Event::Key(KeyEvent { code, kind, modifiers, .. }) => match kind {
                    // Press: record key + handle one-shot actions
                    KeyEventKind::Press => {
                        self.key_frame.insert(code, self.frame);
                        match code {
                            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                                events.push(InputEvent::Quit);
                            }
                            KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                                events.push(InputEvent::Quit);
                            }
                            KeyCode::Enter => events.push(InputEvent::MouseDown),
                            _ => {}
                        }
                    }
                    // Repeat: refresh timestamp so key stays "held"
                    KeyEventKind::Repeat => {
                        self.key_frame.insert(code, self.frame);
                    }
                    // Release: remove key immediately (keyboard-enhancement path)
                    KeyEventKind::Release => {
                        self.key_frame.remove(&code);
                    }
                },
                Event::Mouse(mouse) if matches!(mouse.kind, MouseEventKind::Down(_)) => {
                    events.push(InputEvent::MouseDown);
                }
                _ => {}
            }
        }
        events
    }

    fn held_keys(&mut self) -> HashSet<Key> {
        let bindings: [(Key, &[KeyCode]); 5] = [
            (Key::Up, &[KeyCode::Up, KeyCode::Char('w'), KeyCode::Char('W')]),
            (Key::Down, &[KeyCode::Down, KeyCode::Char('s'), KeyCode::Char('S')]),
            (Key::Left, &[KeyCode::Left, KeyCode::Char('a'), KeyCode::Char('A')]),
            (Key::Right, &[KeyCode::Right, KeyCode::Char('d'), KeyCode::Char('D')]),
            (Key::Fire, &[KeyCode::Char(' ')]),
        ];
        bindings
            .iter()
            .filter(|(_, codes)| self.any_held(codes))
            .map(|(key, _)| *key)
            .collect()
    }
}

// ── Audio ─────────────────────────────────────────────────────────────────────

/// The terminal has no mixer; impacts and game over ring the bell.
struct TerminalAudio {
    bell: bool,
}

impl AudioSink for TerminalAudio {
    fn play_effect(&mut self, effect: SoundEffect) {
        log::debug!("sfx: {:?}", effect);
        if !self.bell || effect == SoundEffect::Laser {
            return;
        }
        let mut out = stdout();
        // Fire-and-forget: a failed bell never affects the game
        let _ = out.write_all(b"\x07").and_then(|_| out.flush());
    }
}

// ── Frame pacing ──────────────────────────────────────────────────────────────

struct FrameClock {
    last: Instant,
}

impl Clock for FrameClock {
    fn tick(&mut self, target_fps: u32) -> Duration {
        let frame = Duration::from_secs(1) / target_fps.max(1);
        let elapsed = self.last.elapsed();
        if elapsed < frame {
            thread::sleep(frame - elapsed);
        }
        let now = Instant::now();
        let delta = now - self.last;
        self.last = now;
        delta
    }
}

// ── Game loop ─────────────────────────────────────────────────────────────────

/// Menu → game → menu until the player quits.
fn run<W: Write>(out: &mut W, rx: &mpsc::Receiver<Event>, ctx: &GameContext) -> Result<()> {
    let config = &ctx.config;
    let mut rng = thread_rng();
    let mut input = TerminalInput::new(rx);
    let mut audio = TerminalAudio {
        bell: config.terminal_bell,
    };
    let mut clock = FrameClock {
        last: Instant::now(),
    };
    let mut stars = Starfield::new(config.star_count, config.width, config.height, &mut rng);
    let mut state = init_state(config);

    loop {
        clock.tick(config.fps);
        state = run_frame(&state, ctx, &mut input, &mut audio, &mut rng);

        match state.status {
            GameStatus::Quit => return Ok(()),
            // Back to the menu
            GameStatus::Over => state = init_state(config),
            _ => {}
        }

        let size = terminal::size()?;
        let mut renderer =
            TerminalRenderer::new(out, &ctx.sprites, (config.width, config.height), size);
        if state.status == GameStatus::Menu {
            draw_menu(&mut renderer, ctx)?;
        } else {
            stars.scroll(&mut rng);
            draw_frame(&mut renderer, &Snapshot::capture(&state), &stars, ctx)?;
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    // Logs go to stderr; run with RUST_LOG=info 2>galaxy_wars.log to keep them
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("off")).init();

    let config = GameConfig::load(&GameConfig::default_path())?;
    let ctx = GameContext::new(config)?;

    let raw_out = stdout();
    let mut out = BufWriter::new(raw_out);

    terminal::enable_raw_mode()?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(cursor::Hide)?;
    out.execute(EnableMouseCapture)?;

    // Request key-release (and key-repeat) events from the terminal.
    // Ghostty / kitty-protocol terminals support this; others fall back gracefully.
    let keyboard_enhanced = out
        .execute(PushKeyboardEnhancementFlags(
            KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
        ))
        .is_ok();

    // Dedicate a thread exclusively to blocking event reads, sending them
    // through a channel so the game loop never has to block on I/O.
    let (tx, rx) = mpsc::channel::<Event>();
    thread::spawn(move || {
        while let Ok(ev) = event::read() {
            if tx.send(ev).is_err() {
                break; // receiver dropped → program exiting
            }
        }
    });

    let result = run(&mut out, &rx, &ctx);

    // Always restore the terminal
    if keyboard_enhanced {
        let _ = out.execute(PopKeyboardEnhancementFlags);
    }
    let _ = out.execute(DisableMouseCapture);
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    if let Err(e) = &result {
        log::error!("{}", e);
    }
    result
}
