use term_invaders::entities::*;
use term_invaders::frame::FrameBuffer;

// ── Entity / projectile data ──────────────────────────────────────────────────

#[test]
fn projectile_row_truncates_toward_zero() {
    let up = Projectile { x: 0, y: 2.9, velocity: PROJECTILE_SPEED };
    assert_eq!(up.row(), 2);
    // The forgiveness window: a shot just past the top edge still reads row 0
    let edge = Projectile { x: 0, y: -0.5, velocity: PROJECTILE_SPEED };
    assert_eq!(edge.row(), 0);
    let gone = Projectile { x: 0, y: -1.2, velocity: PROJECTILE_SPEED };
    assert_eq!(gone.row(), -1);
}

#[test]
fn game_state_clone_is_independent() {
    let original = GameState {
        frame: FrameBuffer::new(),
        player: Entity { x: 30, y: PLAYER_ROW, life: PLAYER_LIVES, projectile: None },
        enemies: Vec::new(),
        score: 0,
        status: GameStatus::Playing,
        step_accum: 0.0,
        footsteps: 0,
        direction: 1,
    };
    let mut cloned = original.clone();

    // Mutating the clone must not affect the original
    cloned.player.x = 99;
    cloned.score = 999;
    cloned.frame.set(0, 0, 'X');
    cloned.enemies.push(Entity { x: 5, y: 5, life: 1, projectile: None });

    assert_eq!(original.player.x, 30);
    assert_eq!(original.score, 0);
    assert_eq!(original.frame.get(0, 0), BLANK_CHAR);
    assert!(original.enemies.is_empty());
}

// ── Frame buffer ──────────────────────────────────────────────────────────────

#[test]
fn frame_starts_blank_with_full_dimensions() {
    let f = FrameBuffer::new();
    let rows: Vec<&[char]> = f.rows().collect();
    assert_eq!(rows.len(), HEIGHT as usize);
    for row in rows {
        assert_eq!(row.len(), WIDTH as usize);
        assert!(row.iter().all(|&c| c == BLANK_CHAR));
    }
}

#[test]
fn frame_set_and_get_round_trip() {
    let mut f = FrameBuffer::new();
    f.set(0, 0, 'W');
    f.set(WIDTH - 1, HEIGHT - 1, '|');
    assert_eq!(f.get(0, 0), 'W');
    assert_eq!(f.get(WIDTH - 1, HEIGHT - 1), '|');
}

#[test]
fn frame_ignores_out_of_grid_writes() {
    let mut f = FrameBuffer::new();
    f.set(-1, 0, 'X');
    f.set(0, -1, 'X');
    f.set(WIDTH, 0, 'X');
    f.set(0, HEIGHT, 'X');
    let untouched = FrameBuffer::new();
    assert_eq!(f, untouched);
    assert_eq!(f.get(-1, 0), BLANK_CHAR);
}

#[test]
fn frame_clear_resets_every_cell() {
    let mut f = FrameBuffer::new();
    f.set(10, 10, 'W');
    f.set(3, 7, '!');
    f.clear();
    assert_eq!(f, FrameBuffer::new());
}
