//! Shared test helpers for edit state tests

#![allow(dead_code)]

use sprite_engine_edit::{Position, Sprite, SpriteEditState, SpriteSize};

/// Fresh 8×8 project
pub fn create_test_state() -> SpriteEditState {
    SpriteEditState::new(SpriteSize::Size8)
}

pub fn create_state(size: SpriteSize) -> SpriteEditState {
    SpriteEditState::new(size)
}

/// Pixel positions set in a sprite
pub fn set_pixels(state: &SpriteEditState, index: usize) -> Vec<Position> {
    state.sprite(index).map(Sprite::set_pixels).unwrap_or_default()
}

pub fn count_pixels(state: &SpriteEditState, index: usize) -> usize {
    state.sprite(index).map_or(0, Sprite::count_pixels)
}

/// Sprite rows with a few pixels in distinct rows and columns
pub fn draw_pattern(state: &mut SpriteEditState) {
    for (x, y) in [(0, 0), (1, 2), (7, 3), (4, 6)] {
        state.press(Position::new(x, y), true).unwrap();
        state.release();
    }
}
