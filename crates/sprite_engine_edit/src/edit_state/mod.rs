//! Sprite edit state module structure
//!
//! Split into multiple files by operation category:
//! - `state.rs` - Struct definition, constructors, getters, setters, reset
//! - `paint_operations.rs` - Press/drag/release, brush and eraser stamps, flood fill
//! - `shape_operations.rs` - Two-click shapes and preview
//! - `transform_operations.rs` - Flip, invert, clear, fill-all, shift
//! - `undo.rs` - Single level undo
//! - `project_operations.rs` - Store load/save, dirty tracking

mod state;

mod paint_operations;
mod project_operations;
mod shape_operations;
mod transform_operations;
mod undo;

pub use state::{EditOutcome, SpriteEditState};
