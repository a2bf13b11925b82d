//! All game entity types — pure data, no logic — plus the named
//! gameplay constants.

use crate::frame::FrameBuffer;

// ── Grid ──────────────────────────────────────────────────────────────────────

pub const WIDTH: i32 = 60;
pub const HEIGHT: i32 = 20;

// ── Player ────────────────────────────────────────────────────────────────────

pub const PLAYER_LIVES: u32 = 3;
/// The player sits on the second-to-last grid row.
pub const PLAYER_ROW: i32 = HEIGHT - 2;
/// Horizontal clamp for the player column; the 3-cell sprite keeps both
/// wings inside the grid at either extreme.
pub const PLAYER_MIN_X: i32 = 1;
pub const PLAYER_MAX_X: i32 = WIDTH - 2;

// ── Enemy formation ───────────────────────────────────────────────────────────

pub const ENEMY_COLS: usize = 11;
pub const ENEMY_ROWS: usize = 5;
/// Top-left enemy of the initial formation.
pub const FORMATION_X0: i32 = 4;
pub const FORMATION_Y0: i32 = 2;
/// Column / row spacing between adjacent enemies.
pub const FORMATION_PAD_X: i32 = 3;
pub const FORMATION_PAD_Y: i32 = 2;
/// Accumulated seconds between formation marches.
pub const STEP_INTERVAL: f32 = 0.5;
/// Footsteps in one direction before the formation reverses.
pub const MAX_FOOTSTEPS: u32 = 4;

// ── Projectiles ───────────────────────────────────────────────────────────────

/// Vertical projectile speed in cells per second.
pub const PROJECTILE_SPEED: i32 = 8;

// ── Glyphs ────────────────────────────────────────────────────────────────────

pub const BLANK_CHAR: char = ' ';
pub const ENEMY_CHAR: char = 'W';
pub const PLAYER_SHOT_CHAR: char = '|';
pub const ENEMY_SHOT_CHAR: char = '!';
/// 3-cell player sprite: left wing, body, right wing.
pub const PLAYER_SPRITE: [char; 3] = ['/', 'A', '\\'];

// ── Types ─────────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub enum GameStatus {
    Playing,
    GameOver,
}

/// A single in-flight shot. Vertical position is fractional so sub-row
/// motion integrates smoothly; collision and rendering use the truncated
/// row only.
#[derive(Clone, Copy, Debug)]
pub struct Projectile {
    pub x: i32,
    pub y: f32,
    /// Cells per second; positive travels upward (row decreases).
    pub velocity: i32,
}

impl Projectile {
    /// Grid row, truncated toward zero. Truncation (not rounding) is
    /// load-bearing: a shot at y = -0.5 still occupies row 0.
    pub fn row(&self) -> i32 {
        self.y as i32
    }
}

/// The player or one enemy. At most one shot may be in flight per entity;
/// `projectile` being `Some` is the "active" state.
#[derive(Clone, Debug)]
pub struct Entity {
    pub x: i32,
    pub y: i32,
    pub life: u32,
    pub projectile: Option<Projectile>,
}

// ── Master game state ─────────────────────────────────────────────────────────

/// The entire world. Cloneable so the pure update functions can return a
/// new copy without mutating the original.
#[derive(Clone, Debug)]
pub struct GameState {
    /// Render-only: fully rewritten from entity positions every tick.
    pub frame: FrameBuffer,
    pub player: Entity,
    /// Fixed 11×5 roster, row-major (`row * ENEMY_COLS + col`). Dead
    /// enemies keep their slot so indices stay stable for the whole game.
    pub enemies: Vec<Entity>,
    pub score: u32,
    pub status: GameStatus,
    /// Elapsed seconds since the formation last marched.
    pub step_accum: f32,
    /// Completed marches since the last direction reversal.
    pub footsteps: u32,
    /// Horizontal march direction, ±1.
    pub direction: i32,
}
