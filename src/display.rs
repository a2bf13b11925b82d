//! Rendering layer — all terminal output lives here.
//!
//! Each function receives a mutable writer and an immutable view of the
//! game state. No game logic is performed; this module only translates
//! the frame buffer and HUD into terminal commands. Monochrome by design.

use std::io::Write;

use crossterm::{cursor, style::Print, QueueableCommand};

use crate::entities::{GameState, GameStatus, HEIGHT, WIDTH};

/// Render one complete frame: home the cursor, repaint every grid row,
/// then the HUD line. The full-width rewrite makes a per-frame screen
/// clear unnecessary, which keeps the output flicker-free.
pub fn render<W: Write>(out: &mut W, state: &GameState) -> std::io::Result<()> {
    out.queue(cursor::MoveTo(0, 0))?;
    for (y, row) in state.frame.rows().enumerate() {
        out.queue(cursor::MoveTo(0, y as u16))?;
        out.queue(Print(row.iter().collect::<String>()))?;
    }

    draw_hud(out, state)?;

    if state.status == GameStatus::GameOver {
        draw_game_over(out, state)?;
    }

    out.flush()?;
    Ok(())
}

// ── HUD (row below the grid) ──────────────────────────────────────────────────

fn draw_hud<W: Write>(out: &mut W, state: &GameState) -> std::io::Result<()> {
    let hud = format!(
        "Score: {:>3}   Lives: {}   A/D move  SPACE shoot  Q quit",
        state.score, state.player.life
    );
    out.queue(cursor::MoveTo(0, HEIGHT as u16))?;
    out.queue(Print(format!("{:<width$}", hud, width = WIDTH as usize)))?;
    Ok(())
}

// ── Game-over overlay ─────────────────────────────────────────────────────────

fn draw_game_over<W: Write>(out: &mut W, state: &GameState) -> std::io::Result<()> {
    let score_line = format!("Final Score: {}", state.score);
    let lines: &[&str] = &[
        "+--------------------+",
        "|     GAME  OVER     |",
        "+--------------------+",
        &score_line,
        "R - Play Again  Q - Quit",
    ];

    let start_row = (HEIGHT / 2 - lines.len() as i32 / 2).max(0) as u16;
    for (i, msg) in lines.iter().enumerate() {
        let col = (WIDTH / 2 - msg.chars().count() as i32 / 2).max(0) as u16;
        out.queue(cursor::MoveTo(col, start_row + i as u16))?;
        out.queue(Print(*msg))?;
    }
    Ok(())
}
