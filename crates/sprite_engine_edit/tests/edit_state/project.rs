use pretty_assertions::assert_eq;
use sprite_engine_edit::{
    EditMode, FileStore, MirrorAxes, Position, Project, ShiftDirection, ShiftMode, SpriteSize, SpriteStore, SpriteUndoState, Tool,
};

use crate::helpers::create_test_state;

#[test]
fn test_demo_scenario_round_trip() {
    let mut store = FileStore::in_memory();
    let mut state = create_test_state();
    state.select_sprite(0).unwrap();
    state.set_color(2).unwrap();
    state.press(Position::new(0, 0), true).unwrap();
    state.release();
    state.save_project(&mut store, "demo").unwrap();

    let id = store.project_id_by_name("demo").unwrap().unwrap();
    let mut loaded = create_test_state();
    loaded.load_project(&store, id).unwrap();

    let sprite = loaded.sprite(0).unwrap();
    assert_eq!(sprite.rows()[0], 0x80);
    assert_eq!(sprite.color_index(), 2);
    assert_eq!(loaded.sprites().len(), 256);
    assert!(loaded.sprites()[1..].iter().all(|s| s.is_blank() && s.color_index() == 15));
    assert_eq!(loaded.last_loaded(), Some((id, "demo")));
}

#[test]
fn test_dirty_tracking() {
    let mut store = FileStore::in_memory();
    let mut state = create_test_state();
    assert!(!state.is_dirty());

    state.press(Position::new(1, 1), true).unwrap();
    assert!(state.is_dirty());

    state.save_project(&mut store, "dirty").unwrap();
    assert!(!state.is_dirty());

    state.shift(ShiftDirection::Up).unwrap();
    assert!(state.is_dirty());
}

#[test]
fn test_load_missing_project_keeps_session() {
    let store = FileStore::in_memory();
    let mut state = create_test_state();
    state.press(Position::new(1, 1), true).unwrap();
    assert!(state.load_project(&store, 42).is_err());
    assert!(state.pixel_at(Position::new(1, 1)));
}

#[test]
fn test_open_project_resets_session() {
    let mut state = create_test_state();
    state.set_shift_mode(ShiftMode::Buffer);
    state.paint_brush(Position::new(0, 0), true).unwrap();
    state.shift(ShiftDirection::Left).unwrap();
    state.select_sprite(40).unwrap();

    state.open_project(Project::new("fresh", SpriteSize::Size16));
    assert_eq!(state.sprite_size(), SpriteSize::Size16);
    assert_eq!(state.sprites().len(), 64);
    assert_eq!(state.selected(), 0);
    assert!(state.shift_buffers(0).is_none());
    assert!(!state.can_undo());
}

#[test]
fn test_reset() {
    let mut state = create_test_state();
    state.set_edit_mode(EditMode::Overlay);
    state.set_mirror(MirrorAxes::VERTICAL);
    state.set_color(7).unwrap();
    state.set_tool(Tool::Line);
    state.press(Position::new(0, 0), true).unwrap();

    state.reset(SpriteSize::Size16);
    assert_eq!(state.sprites().len(), 64);
    assert!(state.sprites().iter().all(|s| s.is_blank() && s.color_index() == 15));
    assert_eq!(state.tool(), Tool::Pencil);
    assert_eq!(state.current_color(), 15);
    assert_eq!(state.canvas_dimensions(), (16, 16));
    assert!(state.shape_preview(Position::new(3, 3)).is_empty());
    assert!(!state.can_undo());
    assert!(!state.is_dirty());

    // mode and mirror survive a reset
    assert_eq!(state.edit_mode(), EditMode::Overlay);
    assert_eq!(state.mirror(), MirrorAxes::VERTICAL);
}

#[test]
fn test_render_sprite_uses_palette() {
    let mut state = create_test_state();
    state.set_color(8).unwrap();
    state.press(Position::new(0, 0), true).unwrap();
    let rgba = state.render_sprite(0).unwrap();
    assert_eq!(rgba.len(), 8 * 8 * 4);
    let color = sprite_engine_edit::MSX1_PALETTE[8];
    assert_eq!(&rgba[0..4], &[color.r, color.g, color.b, 255]);
    assert_eq!(rgba[7], 0);
    assert!(state.render_sprite(256).is_none());
}
