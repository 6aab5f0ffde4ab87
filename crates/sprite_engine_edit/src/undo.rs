//! Single level undo
//!
//! Every destructive operation captures the sprites it is about to touch,
//! replacing whatever was captured before. Undo restores that capture once.

use std::collections::BTreeMap;

use sprite_engine::Sprite;

use crate::Result;
use crate::shift::ShiftBuffers;

/// Trait for types that support undo
pub trait SpriteUndoState {
    /// Get description of the pending undo
    fn undo_description(&self) -> Option<String>;

    /// Check if undo is available
    fn can_undo(&self) -> bool;

    /// Restore the captured sprites. Returns false when there was nothing to undo.
    fn undo(&mut self) -> Result<bool>;
}

/// Captured state of one sprite.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SpriteCapture {
    pub rows: Vec<u16>,
    pub color_index: u8,
    pub buffers: ShiftBuffers,
}

/// The one retained undo step.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UndoSnapshot {
    description: String,
    captures: BTreeMap<usize, SpriteCapture>,
}

impl UndoSnapshot {
    /// Capture `indices` from the sprite table and their shift buffers.
    pub fn capture(description: impl Into<String>, sprites: &[Sprite], buffers: &BTreeMap<usize, ShiftBuffers>, indices: &[usize]) -> Self {
        let captures = indices
            .iter()
            .filter_map(|&index| {
                sprites.get(index).map(|sprite| {
                    (
                        index,
                        SpriteCapture {
                            rows: sprite.rows().to_vec(),
                            color_index: sprite.color_index(),
                            buffers: buffers.get(&index).cloned().unwrap_or_default(),
                        },
                    )
                })
            })
            .collect();
        Self {
            description: description.into(),
            captures,
        }
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.captures.keys().copied()
    }

    /// Write the captured rows, colours and buffers back.
    pub fn restore(self, sprites: &mut [Sprite], buffers: &mut BTreeMap<usize, ShiftBuffers>) -> Result<()> {
        for (index, capture) in self.captures {
            let Some(sprite) = sprites.get_mut(index) else {
                continue;
            };
            sprite.replace_rows(capture.rows)?;
            sprite.set_color_index(capture.color_index)?;
            buffers.insert(index, capture.buffers);
        }
        Ok(())
    }
}
