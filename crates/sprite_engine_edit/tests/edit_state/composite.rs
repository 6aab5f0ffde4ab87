use pretty_assertions::assert_eq;
use sprite_engine_edit::{CompositeLayer, EditMode, EditOutcome, EngineError, Position, SpriteSize};

use crate::helpers::{count_pixels, create_state, create_test_state, set_pixels};

#[test]
fn test_block_canvas_routes_to_quadrants() {
    let mut state = create_test_state();
    state.set_edit_mode(EditMode::Block2x2);
    assert_eq!(state.canvas_dimensions(), (16, 16));

    state.press(Position::new(8, 8), true).unwrap();
    state.release();
    state.press(Position::new(15, 0), true).unwrap();
    assert_eq!(set_pixels(&state, 17), vec![Position::new(0, 0)]);
    assert_eq!(set_pixels(&state, 1), vec![Position::new(7, 0)]);
    assert_eq!(count_pixels(&state, 0), 0);
}

#[test]
fn test_block_unavailable_at_grid_edge() {
    let mut state = create_test_state();
    state.select_sprite(255).unwrap();
    state.set_edit_mode(EditMode::Block2x2);
    assert!(state.composite_view().is_unavailable());
    assert_eq!(state.press(Position::new(0, 0), true).unwrap(), EditOutcome::BlockUnavailable);
    assert_eq!(state.flip_vertical().unwrap(), EditOutcome::BlockUnavailable);
    assert_eq!(state.fill_all().unwrap(), EditOutcome::BlockUnavailable);
    assert!(state.sprites().iter().all(|s| s.is_blank()));
}

#[test]
fn test_block_unavailable_size16_last_column() {
    let mut state = create_state(SpriteSize::Size16);
    state.select_sprite(7).unwrap();
    state.set_edit_mode(EditMode::Block2x2);
    assert!(state.composite_view().is_unavailable());

    state.select_sprite(6).unwrap();
    assert_eq!(state.composite_view().block(), Some([6, 7, 14, 15]));
}

#[test]
fn test_overlay_edits_active_layer() {
    let mut state = create_test_state();
    state.set_edit_mode(EditMode::Overlay);
    state.set_overlay_layer(2);
    assert_eq!(state.canvas_dimensions(), (8, 8));
    state.press(Position::new(1, 1), true).unwrap();
    assert_eq!(set_pixels(&state, 16), vec![Position::new(1, 1)]);
    assert_eq!(count_pixels(&state, 0), 0);
}

#[test]
fn test_overlay_layer_is_clamped() {
    let mut state = create_test_state();
    state.set_overlay_layer(9);
    assert_eq!(state.overlay_layer(), 3);
}

#[test]
fn test_color_applies_to_block() {
    let mut state = create_test_state();
    state.set_edit_mode(EditMode::Overlay);
    state.set_color(5).unwrap();
    for index in [0, 1, 16, 17] {
        assert_eq!(state.sprite(index).unwrap().color_index(), 5);
    }
    assert_eq!(state.sprite(2).unwrap().color_index(), 15);
}

#[test]
fn test_invalid_color_is_rejected() {
    let mut state = create_test_state();
    assert!(state.set_color(16).is_err());
    assert_eq!(state.current_color(), 15);
}

#[test]
fn test_composite_preview_offsets() {
    let mut state = create_test_state();
    state.select_sprite(2).unwrap();
    state.set_edit_mode(EditMode::Block2x2);
    assert_eq!(
        state.composite_preview(),
        vec![
            CompositeLayer { index: 2, offset: Position::new(0, 0) },
            CompositeLayer { index: 3, offset: Position::new(8, 0) },
            CompositeLayer { index: 18, offset: Position::new(0, 8) },
            CompositeLayer { index: 19, offset: Position::new(8, 8) },
        ]
    );

    state.set_edit_mode(EditMode::Single);
    assert_eq!(state.composite_preview(), vec![CompositeLayer { index: 2, offset: Position::new(0, 0) }]);
}

#[test]
fn test_select_out_of_range() {
    let mut state = create_state(SpriteSize::Size16);
    assert!(matches!(state.select_sprite(64), Err(EngineError::SpriteIndex { index: 64, count: 64 })));
    assert_eq!(state.selected(), 0);
}
