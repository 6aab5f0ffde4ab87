#![warn(clippy::all, clippy::pedantic)]
#![allow(
    clippy::cast_sign_loss,
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap,
    clippy::cast_lossless,
    clippy::cast_precision_loss,
    clippy::must_use_candidate,
    clippy::return_self_not_must_use,
    clippy::module_name_repetitions
)]
//! Data model for 1-bit-per-pixel retro console sprites.
//!
//! Sprites are 8×8 or 16×16 bitmaps stored as one integer per row, with a
//! single palette colour per sprite. This crate holds the model types, the
//! fixed MSX1 palette and the bit-exact persistence codec. Editing lives in
//! `sprite_engine_edit`.

mod error;
pub use error::*;

mod position;
pub use position::*;

mod sprite;
pub use sprite::*;

mod brush;
pub use brush::*;

pub mod palette;
pub use palette::{Rgb, MSX1_PALETTE};

pub mod codec;

mod project;
pub use project::*;
