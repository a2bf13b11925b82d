//! Pure game-logic functions.
//!
//! Every public state transition takes an immutable reference to the
//! current `GameState` (plus the frame delta time and an RNG handle where
//! needed) and returns a brand-new `GameState`. Side effects are limited
//! to the injected RNG, so a seeded RNG makes every run reproducible.

use rand::Rng;

use crate::entities::{
    Entity, GameState, GameStatus, Projectile, ENEMY_CHAR, ENEMY_COLS, ENEMY_ROWS,
    ENEMY_SHOT_CHAR, FORMATION_PAD_X, FORMATION_PAD_Y, FORMATION_X0, FORMATION_Y0, HEIGHT,
    MAX_FOOTSTEPS, PLAYER_LIVES, PLAYER_MAX_X, PLAYER_MIN_X, PLAYER_ROW, PLAYER_SHOT_CHAR,
    PLAYER_SPRITE, PROJECTILE_SPEED, STEP_INTERVAL, WIDTH,
};
use crate::frame::FrameBuffer;

// ── Constructors ─────────────────────────────────────────────────────────────

/// Build the initial game state: player centered on the bottom row, the
/// full enemy formation laid out row-major from its top-left origin.
pub fn init_state() -> GameState {
    let mut enemies = Vec::with_capacity(ENEMY_ROWS * ENEMY_COLS);
    for row in 0..ENEMY_ROWS {
        for col in 0..ENEMY_COLS {
            enemies.push(Entity {
                x: FORMATION_X0 + col as i32 * FORMATION_PAD_X,
                y: FORMATION_Y0 + row as i32 * FORMATION_PAD_Y,
                life: 1,
                projectile: None,
            });
        }
    }
    GameState {
        frame: FrameBuffer::new(),
        player: Entity {
            x: WIDTH / 2,
            y: PLAYER_ROW,
            life: PLAYER_LIVES,
            projectile: None,
        },
        enemies,
        score: 0,
        status: GameStatus::Playing,
        step_accum: 0.0,
        footsteps: 0,
        direction: 1,
    }
}

// ── Entity-level helpers ─────────────────────────────────────────────────────

/// Spawn a shot one row ahead of `entity` in its direction of travel
/// (`+1` = upward / decreasing row, `-1` = downward). Silent no-op while
/// the entity already has a shot in flight — at most one per entity.
pub fn fire_projectile(entity: &mut Entity, direction: i32) {
    if entity.projectile.is_some() {
        return;
    }
    entity.projectile = Some(Projectile {
        x: entity.x,
        y: (entity.y - direction) as f32,
        velocity: PROJECTILE_SPEED * direction,
    });
}

/// Integrate the entity's shot by `dt` seconds, retire it once its
/// truncated row leaves the grid, and otherwise trace it into `frame`.
pub fn advance_projectile(entity: &mut Entity, dt: f32, trace: char, frame: &mut FrameBuffer) {
    let Some(shot) = entity.projectile.as_mut() else {
        return;
    };
    shot.y -= shot.velocity as f32 * dt;
    let row = shot.row();
    if row < 0 || row > HEIGHT - 1 {
        entity.projectile = None;
        return;
    }
    frame.set(shot.x, row, trace);
}

/// Pick the enemy that fires next: the lowest formation row with a
/// survivor is the candidate pool, and the pick is uniform within it.
/// `None` once the whole formation is dead.
pub fn choose_shooter(enemies: &[Entity], rng: &mut impl Rng) -> Option<usize> {
    for row in (0..ENEMY_ROWS).rev() {
        let living: Vec<usize> = (0..ENEMY_COLS)
            .map(|col| row * ENEMY_COLS + col)
            .filter(|&i| enemies[i].life > 0)
            .collect();
        if !living.is_empty() {
            return Some(living[rng.gen_range(0..living.len())]);
        }
    }
    None
}

// ── Input-driven state transitions (pure) ────────────────────────────────────

pub fn move_player_left(state: &GameState) -> GameState {
    let mut next = state.clone();
    next.player.x = (state.player.x - 1).max(PLAYER_MIN_X);
    next
}

pub fn move_player_right(state: &GameState) -> GameState {
    let mut next = state.clone();
    next.player.x = (state.player.x + 1).min(PLAYER_MAX_X);
    next
}

/// Fire the player's shot upward — a no-op while one is in flight.
pub fn player_fire(state: &GameState) -> GameState {
    let mut next = state.clone();
    fire_projectile(&mut next.player, 1);
    next
}

// ── Per-tick update (nearly pure — RNG is injected) ──────────────────────────

/// Advance the simulation by one tick of `dt` seconds.
///
/// Shot motion integrates raw `dt` directly (frame-rate dependent, kept
/// for fidelity with the original); only the formation march runs off the
/// accumulated-time cadence.
pub fn tick(state: &GameState, dt: f32, rng: &mut impl Rng) -> GameState {
    let mut next = state.clone();

    // ── 1. Repaint from scratch: clear, then stamp the player sprite ─────────
    next.frame.clear();
    for (i, ch) in PLAYER_SPRITE.iter().enumerate() {
        next.frame.set(next.player.x - 1 + i as i32, next.player.y, *ch);
    }

    // ── 2. Advance the player's shot ──────────────────────────────────────────
    advance_projectile(&mut next.player, dt, PLAYER_SHOT_CHAR, &mut next.frame);

    // ── 3. March cadence: does the formation shift this tick? ─────────────────
    next.step_accum += dt;
    let marching = next.step_accum > STEP_INTERVAL;

    // ── 4. Per enemy: combat, shot motion, march, glyph ───────────────────────
    for i in 0..next.enemies.len() {
        // Player shot vs this enemy. Dead slots are not targets.
        if let Some(shot) = next.player.projectile {
            let enemy = &mut next.enemies[i];
            if enemy.life > 0 && shot.row() == enemy.y && shot.x == enemy.x {
                enemy.life -= 1;
                next.score += 1;
                next.player.projectile = None;
            }
        }

        // This enemy's shot vs the player: row match, column within the
        // 3-cell sprite span.
        if let Some(shot) = next.enemies[i].projectile {
            if shot.row() == next.player.y && (shot.x - next.player.x).abs() <= 1 {
                next.enemies[i].projectile = None;
                next.player.life = next.player.life.saturating_sub(1);
                if next.player.life == 0 {
                    next.status = GameStatus::GameOver;
                }
            }
        }

        advance_projectile(&mut next.enemies[i], dt, ENEMY_SHOT_CHAR, &mut next.frame);

        // Dead slots keep marching so the formation never deforms.
        if marching {
            next.enemies[i].x += next.direction;
        }

        let enemy = &next.enemies[i];
        if enemy.life > 0 {
            next.frame.set(enemy.x, enemy.y, ENEMY_CHAR);
        }
    }

    // ── 5. At most one enemy shot in flight across the whole formation ────────
    if !next.enemies.iter().any(|e| e.projectile.is_some()) {
        if let Some(i) = choose_shooter(&next.enemies, rng) {
            fire_projectile(&mut next.enemies[i], -1);
        }
    }

    // ── 6. Close out the march: reverse after MAX_FOOTSTEPS ───────────────────
    if marching {
        next.step_accum = 0.0;
        next.footsteps += 1;
        if next.footsteps >= MAX_FOOTSTEPS {
            next.footsteps = 0;
            next.direction = -next.direction;
        }
    }

    next
}
