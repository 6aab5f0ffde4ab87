//! Row and column shifting
//!
//! Wrap mode rotates the bitmap. Buffer mode pushes the evicted edge onto a
//! per-direction stack (at most `size` entries deep) and restores the vacated
//! edge from the opposite stack, so shifting back returns what fell off.

use serde::{Deserialize, Serialize};
use sprite_engine::Sprite;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShiftDirection {
    Left,
    Right,
    Up,
    Down,
}

impl ShiftDirection {
    pub fn opposite(self) -> Self {
        match self {
            ShiftDirection::Left => ShiftDirection::Right,
            ShiftDirection::Right => ShiftDirection::Left,
            ShiftDirection::Up => ShiftDirection::Down,
            ShiftDirection::Down => ShiftDirection::Up,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShiftMode {
    #[default]
    Wrap,
    Buffer,
}

/// Eviction stacks of one sprite. Column entries are packed top to bottom, MSB first.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ShiftBuffers {
    left: Vec<u16>,
    right: Vec<u16>,
    up: Vec<u16>,
    down: Vec<u16>,
}

impl ShiftBuffers {
    pub fn stack(&self, direction: ShiftDirection) -> &[u16] {
        match direction {
            ShiftDirection::Left => &self.left,
            ShiftDirection::Right => &self.right,
            ShiftDirection::Up => &self.up,
            ShiftDirection::Down => &self.down,
        }
    }

    fn stack_mut(&mut self, direction: ShiftDirection) -> &mut Vec<u16> {
        match direction {
            ShiftDirection::Left => &mut self.left,
            ShiftDirection::Right => &mut self.right,
            ShiftDirection::Up => &mut self.up,
            ShiftDirection::Down => &mut self.down,
        }
    }

    /// Push an evicted edge, dropping the oldest entries beyond `depth`.
    pub fn push(&mut self, direction: ShiftDirection, value: u16, depth: usize) {
        let stack = self.stack_mut(direction);
        stack.push(value);
        if stack.len() > depth {
            let excess = stack.len() - depth;
            stack.drain(..excess);
        }
    }

    pub fn pop(&mut self, direction: ShiftDirection) -> Option<u16> {
        self.stack_mut(direction).pop()
    }

    pub fn is_empty(&self) -> bool {
        self.left.is_empty() && self.right.is_empty() && self.up.is_empty() && self.down.is_empty()
    }
}

/// Rotate the sprite one cell in `direction`.
pub fn shift_wrap(sprite: &mut Sprite, direction: ShiftDirection) {
    let size = sprite.width();
    let mut rows = sprite.rows().to_vec();
    match direction {
        ShiftDirection::Left => {
            for row in &mut rows {
                let msb = (*row >> (size - 1)) & 1;
                *row = (*row << 1) | msb;
            }
        }
        ShiftDirection::Right => {
            for row in &mut rows {
                let lsb = *row & 1;
                *row = (*row >> 1) | (lsb << (size - 1));
            }
        }
        ShiftDirection::Up => rows.rotate_left(1),
        ShiftDirection::Down => rows.rotate_right(1),
    }
    for (y, row) in rows.into_iter().enumerate() {
        sprite.set_row(y as i32, row);
    }
}

/// Shift one cell in `direction` through the eviction stacks.
pub fn shift_buffer(sprite: &mut Sprite, buffers: &mut ShiftBuffers, direction: ShiftDirection) {
    let size = sprite.width();
    let depth = size as usize;
    let last = size - 1;

    let evicted = match direction {
        ShiftDirection::Left => sprite.column(0),
        ShiftDirection::Right => sprite.column(last),
        ShiftDirection::Up => sprite.row(0),
        ShiftDirection::Down => sprite.row(last),
    };
    buffers.push(direction, evicted, depth);

    let mut rows = sprite.rows().to_vec();
    match direction {
        ShiftDirection::Left => rows.iter_mut().for_each(|row| *row <<= 1),
        ShiftDirection::Right => rows.iter_mut().for_each(|row| *row >>= 1),
        ShiftDirection::Up => {
            rows.rotate_left(1);
            rows[depth - 1] = 0;
        }
        ShiftDirection::Down => {
            rows.rotate_right(1);
            rows[0] = 0;
        }
    }
    for (y, row) in rows.into_iter().enumerate() {
        sprite.set_row(y as i32, row);
    }

    if let Some(restored) = buffers.pop(direction.opposite()) {
        match direction {
            ShiftDirection::Left => sprite.set_column(last, restored),
            ShiftDirection::Right => sprite.set_column(0, restored),
            ShiftDirection::Up => sprite.set_row(last, restored),
            ShiftDirection::Down => sprite.set_row(0, restored),
        }
    }
}
