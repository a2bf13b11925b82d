use std::io::{stdout, BufWriter, Write};
use std::thread;
use std::time::{Duration, Instant};

use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    terminal, ExecutableCommand,
};
use rand::thread_rng;

use term_invaders::compute::{init_state, move_player_left, move_player_right, player_fire, tick};
use term_invaders::display;
use term_invaders::entities::GameStatus;

const FRAME: Duration = Duration::from_millis(16); // ≈60 FPS

// ── Input ─────────────────────────────────────────────────────────────────────

enum Action {
    Left,
    Right,
    Fire,
    Quit,
    Restart,
}

/// Non-blocking poll for one key. Consumes at most one event per tick;
/// unrecognized keys are a silent no-op.
fn read_action(game_over: bool) -> std::io::Result<Option<Action>> {
    if !event::poll(Duration::ZERO)? {
        return Ok(None);
    }
    let Event::Key(KeyEvent {
        code,
        kind,
        modifiers,
        ..
    }) = event::read()?
    else {
        return Ok(None);
    };
    if kind != KeyEventKind::Press {
        return Ok(None);
    }
    let action = match code {
        KeyCode::Char('a') | KeyCode::Char('A') | KeyCode::Left => Some(Action::Left),
        KeyCode::Char('d') | KeyCode::Char('D') | KeyCode::Right => Some(Action::Right),
        KeyCode::Char(' ') => Some(Action::Fire),
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(Action::Quit),
        KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => Some(Action::Quit),
        KeyCode::Char('r') | KeyCode::Char('R') if game_over => Some(Action::Restart),
        _ => None,
    };
    Ok(action)
}

// ── Game loop ─────────────────────────────────────────────────────────────────

/// Returns `true` → quit program, `false` → restart with a fresh game.
fn game_loop<W: Write>(out: &mut W) -> std::io::Result<bool> {
    let mut rng = thread_rng();
    let mut state = init_state();
    let mut last = Instant::now();

    loop {
        let frame_start = Instant::now();
        let playing = state.status == GameStatus::Playing;

        match read_action(!playing)? {
            Some(Action::Quit) => return Ok(true),
            Some(Action::Restart) => return Ok(false),
            Some(Action::Left) if playing => state = move_player_left(&state),
            Some(Action::Right) if playing => state = move_player_right(&state),
            Some(Action::Fire) if playing => state = player_fire(&state),
            _ => {}
        }

        let now = Instant::now();
        let dt = now.duration_since(last).as_secs_f32();
        last = now;

        if state.status == GameStatus::Playing {
            state = tick(&state, dt, &mut rng);
        }

        display::render(out, &state)?;

        let elapsed = frame_start.elapsed();
        if elapsed < FRAME {
            thread::sleep(FRAME - elapsed);
        }
    }
}

// ── Terminal setup / teardown ─────────────────────────────────────────────────

/// Raw-mode guard: restores the cursor, screen, and cooked mode on every
/// exit path, panics included.
struct TerminalGuard;

impl TerminalGuard {
    fn enter() -> std::io::Result<Self> {
        terminal::enable_raw_mode()?;
        let mut out = stdout();
        out.execute(terminal::EnterAlternateScreen)?;
        out.execute(cursor::Hide)?;
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let mut out = stdout();
        let _ = out.execute(cursor::Show);
        let _ = out.execute(terminal::LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> std::io::Result<()> {
    let _guard = TerminalGuard::enter()?;
    let mut out = BufWriter::new(stdout());

    loop {
        out.execute(terminal::Clear(terminal::ClearType::All))?;
        if game_loop(&mut out)? {
            break;
        }
        // Otherwise fall through and start a fresh game
    }
    Ok(())
}
