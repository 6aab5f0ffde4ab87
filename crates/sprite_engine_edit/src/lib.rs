#![warn(clippy::all, clippy::pedantic)]
#![allow(
    clippy::cast_sign_loss,
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap,
    clippy::cast_lossless,
    clippy::must_use_candidate,
    clippy::module_name_repetitions,
    clippy::missing_errors_doc
)]
//! Editing engine for retro console sprite tables.
//!
//! `SpriteEditState` owns the sprite collection of one session and routes
//! every edit through the composite view and the symmetry mirror. Raster
//! primitives live in [`brushes`], persistence behind [`SpriteStore`].

pub mod brushes;

mod composite;
pub use composite::*;

mod edit_state;
pub use edit_state::*;

mod mirror;
pub use mirror::MirrorAxes;

pub mod options;
pub use options::EditorOptions;

mod shift;
pub use shift::*;

mod store;
pub use store::{FileStore, SpriteStore};

pub mod tools;
pub use tools::{ShapeKind, ShapeState, Tool};

mod undo;
pub use undo::{SpriteUndoState, UndoSnapshot};

// Re-export the model types the editor works with
pub use sprite_engine::{
    Brush, EngineError, EraserShape, MSX1_PALETTE, Position, Project, ProjectInfo, Result, Rgb, Sprite, SpriteSize, codec, palette,
};
