mod audio;
mod display;

use std::collections::HashMap;
use std::fs::File;
use std::io::{stdout, BufWriter, Write};
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

use crossterm::{
    cursor,
    event::{
        self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers,
        KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
    },
    terminal,
    ExecutableCommand,
};
use env_logger::{Builder, Env, Target};
use rand::thread_rng;

use display::Viewport;
use laser_dodger::compute::{advance, init_game};
use laser_dodger::consts::TARGET_FPS;
use laser_dodger::entities::FrameInput;
use laser_dodger::GameError;

const FRAME: Duration = Duration::from_micros(1_000_000 / TARGET_FPS as u64);

const LOG_FILE: &str = "laser_dodger.log";

const MIN_COLS: u16 = 20;
const MIN_ROWS: u16 = 12;

/// A key is considered "held" if its last press/repeat event arrived within
/// this many frames. Covers terminals that don't emit key-release events:
/// the OS key-repeat rate is ≥ 15 Hz, so 8 frames (≈133 ms) is always
/// refreshed before expiry.
const HOLD_WINDOW: u64 = 8;

/// Returns true if `key` was seen within the last `HOLD_WINDOW` frames.
fn is_held(key_frame: &HashMap<KeyCode, u64>, key: &KeyCode, frame: u64) -> bool {
    key_frame
        .get(key)
        .map(|&last| frame.saturating_sub(last) <= HOLD_WINDOW)
        .unwrap_or(false)
}

fn any_held(key_frame: &HashMap<KeyCode, u64>, keys: &[KeyCode], frame: u64) -> bool {
    keys.iter().any(|k| is_held(key_frame, k, frame))
}

// ── Logging ───────────────────────────────────────────────────────────────────

/// The game owns the screen, so log lines go to a file.
fn init_logging() -> Result<(), GameError> {
    let file = File::create(LOG_FILE)
        .map_err(|e| GameError::Logger(format!("cannot create {LOG_FILE}: {e}")))?;
    Builder::from_env(Env::default().default_filter_or("info"))
        .target(Target::Pipe(Box::new(file)))
        .try_init()?;
    Ok(())
}

// ── Game loop ─────────────────────────────────────────────────────────────────

/// What the event drain saw this frame.
#[derive(Default)]
struct Pressed {
    quit: bool,
    start: bool,
    restart: bool,
}

/// Drain all pending input events (non-blocking), updating the held-key map.
fn drain_events(
    rx: &mpsc::Receiver<Event>,
    key_frame: &mut HashMap<KeyCode, u64>,
    frame: u64,
) -> Pressed {
    let mut pressed = Pressed::default();
    while let Ok(ev) = rx.try_recv() {
        let Event::Key(KeyEvent { code, kind, modifiers, .. }) = ev else {
            continue;
        };
        match kind {
            KeyEventKind::Press => {
                key_frame.insert(code, frame);
                match code {
                    KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => pressed.quit = true,
                    KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                        pressed.quit = true
                    }
                    KeyCode::Char(' ') => pressed.start = true,
                    KeyCode::Char('r') | KeyCode::Char('R') => pressed.restart = true,
                    _ => {}
                }
            }
            // Repeat: refresh timestamp so key stays "held"
            KeyEventKind::Repeat => {
                key_frame.insert(code, frame);
            }
            // Release: remove key immediately (keyboard-enhancement path)
            KeyEventKind::Release => {
                key_frame.remove(&code);
            }
        }
    }
    pressed
}

/// Runs until the close signal. One `advance` and one render per frame.
fn game_loop<W: Write>(out: &mut W, rx: &mpsc::Receiver<Event>) -> Result<(), GameError> {
    let mut rng = thread_rng();
    let mut game = init_game(&mut rng);

    let left_keys = [KeyCode::Left, KeyCode::Char('a'), KeyCode::Char('A')];
    let right_keys = [KeyCode::Right, KeyCode::Char('d'), KeyCode::Char('D')];

    let mut key_frame: HashMap<KeyCode, u64> = HashMap::new();
    let started = Instant::now();
    let mut last_frame = started;
    let mut frame: u64 = 0;

    loop {
        let frame_start = Instant::now();
        frame += 1;

        let pressed = drain_events(rx, &mut key_frame, frame);
        if pressed.quit {
            log::info!("close requested");
            return Ok(());
        }

        let input = FrameInput {
            frame_ms: frame_start.duration_since(last_frame).as_secs_f32() * 1000.0,
            now: frame_start.duration_since(started).as_secs_f64(),
            move_left: any_held(&key_frame, &left_keys, frame),
            move_right: any_held(&key_frame, &right_keys, frame),
            start: pressed.start,
            restart: pressed.restart,
        };
        last_frame = frame_start;

        game = advance(game, &input, &mut rng);

        let (cols, rows) = terminal::size()?;
        audio::play_all(out, &game.sounds)?;
        display::render(out, &game, Viewport { cols, rows })?;

        let elapsed = frame_start.elapsed();
        if elapsed < FRAME {
            thread::sleep(FRAME - elapsed);
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> Result<(), GameError> {
    init_logging()?;
    log::info!("laser dodger starting");

    let (cols, rows) = terminal::size()?;
    if cols < MIN_COLS || rows < MIN_ROWS {
        return Err(GameError::TerminalTooSmall {
            cols,
            rows,
            min_cols: MIN_COLS,
            min_rows: MIN_ROWS,
        });
    }

    let mut out = BufWriter::new(stdout());

    terminal::enable_raw_mode()?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(cursor::Hide)?;

    // Request key-release (and key-repeat) events from the terminal.
    // Kitty-protocol terminals support this; others fall back gracefully.
    let keyboard_enhanced = out
        .execute(PushKeyboardEnhancementFlags(
            KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
        ))
        .is_ok();
    log::debug!("keyboard enhancement: {keyboard_enhanced}");

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

    let result = game_loop(&mut out, &rx);

    // Always restore the terminal
    if keyboard_enhanced {
        let _ = out.execute(PopKeyboardEnhancementFlags);
    }
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    match &result {
        Ok(()) => log::info!("laser dodger exiting"),
        Err(e) => log::error!("laser dodger failed: {e}"),
    }
    result
}
