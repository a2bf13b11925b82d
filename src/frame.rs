//! The frame buffer: one rendered frame as a HEIGHT×WIDTH character grid.
//!
//! Purely derived state — cleared and repainted from entity positions on
//! every tick. Stored as a flat row-major `Vec<char>`.

use crate::entities::{BLANK_CHAR, HEIGHT, WIDTH};

#[derive(Clone, Debug, PartialEq)]
pub struct FrameBuffer {
    cells: Vec<char>,
}

impl FrameBuffer {
    pub fn new() -> Self {
        Self {
            cells: vec![BLANK_CHAR; (WIDTH * HEIGHT) as usize],
        }
    }

    /// Reset every cell to blank.
    pub fn clear(&mut self) {
        self.cells.fill(BLANK_CHAR);
    }

    /// Write one glyph. Out-of-grid coordinates are silently dropped so
    /// callers never have to pre-clamp.
    pub fn set(&mut self, x: i32, y: i32, ch: char) {
        if (0..WIDTH).contains(&x) && (0..HEIGHT).contains(&y) {
            self.cells[(y * WIDTH + x) as usize] = ch;
        }
    }

    /// Read one glyph; blank outside the grid.
    pub fn get(&self, x: i32, y: i32) -> char {
        if (0..WIDTH).contains(&x) && (0..HEIGHT).contains(&y) {
            self.cells[(y * WIDTH + x) as usize]
        } else {
            BLANK_CHAR
        }
    }

    /// The grid as HEIGHT rows of WIDTH cells, top row first.
    pub fn rows(&self) -> impl Iterator<Item = &[char]> {
        self.cells.chunks(WIDTH as usize)
    }
}

impl Default for FrameBuffer {
    fn default() -> Self {
        Self::new()
    }
}
