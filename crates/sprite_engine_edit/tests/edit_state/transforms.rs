use pretty_assertions::assert_eq;
use sprite_engine_edit::{EditMode, EditOutcome, Position, SpriteUndoState};

use crate::helpers::{count_pixels, create_test_state, set_pixels};

#[test]
fn test_flip_horizontal_is_top_bottom() {
    let mut state = create_test_state();
    state.paint_brush(Position::new(1, 0), true).unwrap();
    assert_eq!(state.flip_horizontal().unwrap(), EditOutcome::Applied);
    assert_eq!(set_pixels(&state, 0), vec![Position::new(1, 7)]);
}

#[test]
fn test_flip_vertical_is_left_right() {
    let mut state = create_test_state();
    state.paint_brush(Position::new(1, 0), true).unwrap();
    state.flip_vertical().unwrap();
    assert_eq!(set_pixels(&state, 0), vec![Position::new(6, 0)]);
}

#[test]
fn test_flip_twice_is_identity() {
    let mut state = create_test_state();
    crate::helpers::draw_pattern(&mut state);
    let before = state.sprite(0).unwrap().clone();
    state.flip_vertical().unwrap();
    state.flip_vertical().unwrap();
    state.flip_horizontal().unwrap();
    state.flip_horizontal().unwrap();
    assert_eq!(state.sprite(0).unwrap(), &before);
}

#[test]
fn test_flip_mirrors_whole_block() {
    let mut state = create_test_state();
    state.set_edit_mode(EditMode::Block2x2);
    state.paint_brush(Position::new(0, 0), true).unwrap();
    state.flip_vertical().unwrap();
    assert_eq!(count_pixels(&state, 0), 0);
    assert_eq!(set_pixels(&state, 1), vec![Position::new(7, 0)]);

    state.flip_horizontal().unwrap();
    assert_eq!(set_pixels(&state, 17), vec![Position::new(7, 7)]);
}

#[test]
fn test_invert() {
    let mut state = create_test_state();
    state.paint_brush(Position::new(0, 0), true).unwrap();
    state.invert().unwrap();
    assert_eq!(count_pixels(&state, 0), 63);
    assert!(!state.pixel_at(Position::new(0, 0)));
}

#[test]
fn test_fill_all_sets_color_and_clear_keeps_it() {
    let mut state = create_test_state();
    state.set_color(3).unwrap();
    state.fill_all().unwrap();
    assert_eq!(count_pixels(&state, 0), 64);
    assert_eq!(state.sprite(0).unwrap().color_index(), 3);

    state.clear().unwrap();
    assert!(state.sprite(0).unwrap().is_blank());
    assert_eq!(state.sprite(0).unwrap().color_index(), 3);
}

#[test]
fn test_transform_is_undoable() {
    let mut state = create_test_state();
    state.paint_brush(Position::new(2, 2), true).unwrap();
    state.invert().unwrap();
    assert_eq!(state.undo_description().as_deref(), Some("Invert"));
    assert!(state.undo().unwrap());
    assert_eq!(set_pixels(&state, 0), vec![Position::new(2, 2)]);
}
