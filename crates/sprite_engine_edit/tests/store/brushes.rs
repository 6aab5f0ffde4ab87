use pretty_assertions::assert_eq;
use sprite_engine_edit::{Brush, FileStore, SpriteStore};

use crate::temp_db;

#[test]
fn test_store_is_seeded_with_predefined_brushes() {
    let store = FileStore::in_memory();
    let brushes = store.list_brushes().unwrap();
    assert_eq!(brushes.len(), Brush::predefined().len());
    assert!(brushes.iter().all(|b| !b.user_defined && b.id.is_some()));
    assert!(brushes.iter().any(|b| b.name == "Round 5x5"));
}

#[test]
fn test_user_brushes_sort_after_builtins() {
    let mut store = FileStore::in_memory();
    store.save_brush("A dot", 1, 1, &[0b1], true).unwrap();
    let brushes = store.list_brushes().unwrap();
    let last = brushes.last().unwrap();
    assert_eq!(last.name, "A dot");
    assert!(last.user_defined);

    let builtin: Vec<&str> = brushes.iter().filter(|b| !b.user_defined).map(|b| b.name.as_str()).collect();
    let mut sorted = builtin.clone();
    sorted.sort_unstable();
    assert_eq!(builtin, sorted);
}

#[test]
fn test_saved_brush_round_trips() {
    let mut store = FileStore::in_memory();
    let rows = vec![0b101, 0b010, 0b101];
    store.save_brush("cross", 3, 3, &rows, true).unwrap();
    let brush = store.list_brushes().unwrap().into_iter().find(|b| b.name == "cross").unwrap();
    assert_eq!(brush.width(), 3);
    assert_eq!(brush.height(), 3);
    assert_eq!(brush.rows(), rows.as_slice());
}

#[test]
fn test_duplicate_brush_name_is_rejected() {
    let mut store = FileStore::in_memory();
    store.save_brush("mine", 2, 2, &[0b11, 0b11], true).unwrap();
    let err = store.save_brush("mine", 1, 1, &[0b1], true).unwrap_err();
    assert!(err.is_duplicate_name());
    assert!(store.save_brush("1x1 (pixel)", 1, 1, &[0b1], true).unwrap_err().is_duplicate_name());
}

#[test]
fn test_invalid_brush_is_rejected() {
    let mut store = FileStore::in_memory();
    assert!(store.save_brush("wide", 9, 1, &[0xFF], true).is_err());
    assert!(store.save_brush("short", 2, 2, &[0b11], true).is_err());
    assert!(store.save_brush("stray", 2, 1, &[0b100], true).is_err());
    assert_eq!(store.list_brushes().unwrap().len(), Brush::predefined().len());
}

#[test]
fn test_seeding_happens_once() {
    let path = temp_db("brushes");
    {
        let mut store = FileStore::open(&path).unwrap();
        store.save_brush("kept", 2, 1, &[0b11], true).unwrap();
    }
    let store = FileStore::open(&path).unwrap();
    let brushes = store.list_brushes().unwrap();
    assert_eq!(brushes.len(), Brush::predefined().len() + 1);
    assert_eq!(store.path(), Some(path.as_path()));
}
