use pretty_assertions::assert_eq;
use sprite_engine_edit::{EditMode, Position, ShiftDirection, ShiftMode, SpriteUndoState};

use crate::helpers::{count_pixels, create_test_state, draw_pattern, set_pixels};

#[test]
fn test_wrap_full_cycle_is_identity() {
    let mut state = create_test_state();
    draw_pattern(&mut state);
    let before = state.sprite(0).unwrap().clone();
    for direction in [ShiftDirection::Left, ShiftDirection::Right, ShiftDirection::Up, ShiftDirection::Down] {
        for _ in 0..8 {
            state.shift(direction).unwrap();
        }
        assert_eq!(state.sprite(0).unwrap(), &before, "{direction:?}");
    }
}

#[test]
fn test_wrap_moves_edge_to_opposite_side() {
    let mut state = create_test_state();
    state.paint_brush(Position::new(0, 0), true).unwrap();
    state.shift(ShiftDirection::Left).unwrap();
    assert_eq!(set_pixels(&state, 0), vec![Position::new(7, 0)]);
    state.shift(ShiftDirection::Down).unwrap();
    assert_eq!(set_pixels(&state, 0), vec![Position::new(7, 1)]);
}

#[test]
fn test_buffer_shift_back_restores() {
    let mut state = create_test_state();
    state.set_shift_mode(ShiftMode::Buffer);
    draw_pattern(&mut state);
    let before = state.sprite(0).unwrap().clone();

    state.shift(ShiftDirection::Left).unwrap();
    assert_eq!(count_pixels(&state, 0), 3);
    assert_eq!(state.shift_buffers(0).unwrap().stack(ShiftDirection::Left), &[0b1000_0000]);

    state.shift(ShiftDirection::Right).unwrap();
    assert_eq!(state.sprite(0).unwrap(), &before);
    assert!(state.shift_buffers(0).unwrap().stack(ShiftDirection::Left).is_empty());
}

#[test]
fn test_buffer_shift_vertical() {
    let mut state = create_test_state();
    state.set_shift_mode(ShiftMode::Buffer);
    draw_pattern(&mut state);
    let before = state.sprite(0).unwrap().clone();
    for _ in 0..3 {
        state.shift(ShiftDirection::Down).unwrap();
    }
    for _ in 0..3 {
        state.shift(ShiftDirection::Up).unwrap();
    }
    assert_eq!(state.sprite(0).unwrap(), &before);
}

#[test]
fn test_buffers_are_per_sprite() {
    let mut state = create_test_state();
    state.set_shift_mode(ShiftMode::Buffer);
    state.paint_brush(Position::new(0, 0), true).unwrap();
    state.shift(ShiftDirection::Left).unwrap();

    state.select_sprite(1).unwrap();
    state.shift(ShiftDirection::Right).unwrap();
    assert!(state.sprite(1).unwrap().is_blank());
    assert_eq!(state.shift_buffers(0).unwrap().stack(ShiftDirection::Left).len(), 1);
}

#[test]
fn test_shift_block_moves_each_sprite() {
    let mut state = create_test_state();
    state.set_edit_mode(EditMode::Block2x2);
    state.paint_brush(Position::new(0, 0), true).unwrap();
    state.paint_brush(Position::new(8, 8), true).unwrap();
    state.shift(ShiftDirection::Right).unwrap();
    assert_eq!(set_pixels(&state, 0), vec![Position::new(1, 0)]);
    assert_eq!(set_pixels(&state, 17), vec![Position::new(1, 0)]);
}

#[test]
fn test_shift_undo_restores_buffers() {
    let mut state = create_test_state();
    state.set_shift_mode(ShiftMode::Buffer);
    state.paint_brush(Position::new(0, 3), true).unwrap();
    state.shift(ShiftDirection::Left).unwrap();
    assert!(state.undo().unwrap());

    assert_eq!(set_pixels(&state, 0), vec![Position::new(0, 3)]);
    assert!(state.shift_buffers(0).is_none_or(|buffers| buffers.is_empty()));
}
