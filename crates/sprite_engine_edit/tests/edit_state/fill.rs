use pretty_assertions::assert_eq;
use sprite_engine_edit::{EditMode, EditOutcome, MirrorAxes, Position, SpriteSize, SpriteUndoState, Tool};

use crate::helpers::{count_pixels, create_state, create_test_state};

fn draw_wall(state: &mut sprite_engine_edit::SpriteEditState, x: i32) {
    for y in 0..8 {
        state.paint_brush(Position::new(x, y), true).unwrap();
    }
}

#[test]
fn test_fill_blank_sprite_covers_all_cells() {
    let mut state = create_test_state();
    state.set_tool(Tool::Fill);
    assert_eq!(state.press(Position::new(3, 4), true).unwrap(), EditOutcome::Filled { changed: 64 });
    assert_eq!(count_pixels(&state, 0), 64);
}

#[test]
fn test_fill_size16_sprite() {
    let mut state = create_state(SpriteSize::Size16);
    state.set_tool(Tool::Fill);
    assert_eq!(state.press(Position::new(15, 15), true).unwrap(), EditOutcome::Filled { changed: 256 });
    assert!(state.sprite(0).unwrap().rows().iter().all(|&row| row == 0xFFFF));
}

#[test]
fn test_fill_block_crosses_quadrants() {
    let mut state = create_test_state();
    state.set_edit_mode(EditMode::Block2x2);
    state.set_tool(Tool::Fill);
    assert_eq!(state.press(Position::new(5, 5), true).unwrap(), EditOutcome::Filled { changed: 256 });
    for index in [0, 1, 16, 17] {
        assert_eq!(count_pixels(&state, index), 64, "sprite #{index}");
    }
    assert_eq!(count_pixels(&state, 2), 0);
}

#[test]
fn test_fill_is_bounded_by_wall() {
    let mut state = create_test_state();
    draw_wall(&mut state, 3);
    state.set_tool(Tool::Fill);
    assert_eq!(state.press(Position::new(0, 0), true).unwrap(), EditOutcome::Filled { changed: 24 });
    assert_eq!(state.sprite(0).unwrap().rows()[5], 0b1111_0000);
}

#[test]
fn test_fill_same_value_is_noop() {
    let mut state = create_test_state();
    state.set_tool(Tool::Fill);
    state.press(Position::new(0, 0), true).unwrap();
    let before = state.sprite(0).unwrap().clone();
    assert_eq!(state.press(Position::new(0, 0), true).unwrap(), EditOutcome::Filled { changed: 0 });
    assert_eq!(state.sprite(0).unwrap(), &before);

    // the previous fill is still the undo step
    assert_eq!(state.undo_description().as_deref(), Some("Fill"));
    assert!(state.undo().unwrap());
    assert!(state.sprite(0).unwrap().is_blank());
}

#[test]
fn test_fill_zero_clears_region() {
    let mut state = create_test_state();
    state.fill_all().unwrap();
    state.set_tool(Tool::Fill);
    assert_eq!(state.press(Position::new(7, 7), false).unwrap(), EditOutcome::Filled { changed: 64 });
    assert!(state.sprite(0).unwrap().is_blank());
}

#[test]
fn test_fill_zero_keeps_color() {
    let mut state = create_test_state();
    state.fill_all().unwrap();
    state.select_sprite(1).unwrap();
    state.set_color(4).unwrap();
    state.select_sprite(0).unwrap();
    state.set_tool(Tool::Fill);
    state.press(Position::new(0, 0), false).unwrap();
    assert_eq!(state.sprite(0).unwrap().color_index(), 15);
}

#[test]
fn test_fill_through_mirror() {
    let mut state = create_test_state();
    draw_wall(&mut state, 3);
    state.set_mirror(MirrorAxes::VERTICAL);
    state.set_tool(Tool::Fill);
    state.press(Position::new(0, 0), true).unwrap();

    // left region plus its left/right image, column 4 stays open
    for y in 0..8 {
        assert_eq!(state.sprite(0).unwrap().rows()[y], 0b1111_0111, "row {y}");
    }
}
