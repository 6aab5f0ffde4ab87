//! Single level undo for the edit state

use sprite_engine::Result;

use crate::{ShapeState, SpriteUndoState, UndoSnapshot};

use super::SpriteEditState;

impl SpriteEditState {
    /// Replace the undo snapshot with the current state of `indices`.
    pub(crate) fn capture_undo(&mut self, description: impl Into<String>, indices: &[usize]) {
        self.undo_snapshot = Some(UndoSnapshot::capture(description, &self.sprites, &self.shift_buffers, indices));
    }

    pub fn undo_snapshot(&self) -> Option<&UndoSnapshot> {
        self.undo_snapshot.as_ref()
    }
}

impl SpriteUndoState for SpriteEditState {
    fn undo_description(&self) -> Option<String> {
        self.undo_snapshot.as_ref().map(|snapshot| snapshot.description().to_string())
    }

    fn can_undo(&self) -> bool {
        self.undo_snapshot.is_some()
    }

    fn undo(&mut self) -> Result<bool> {
        let Some(snapshot) = self.undo_snapshot.take() else {
            log::debug!("Nothing to undo");
            return Ok(false);
        };
        log::debug!("Undo '{}' on sprites {:?}", snapshot.description(), snapshot.indices().collect::<Vec<_>>());
        snapshot.restore(&mut self.sprites, &mut self.shift_buffers)?;
        self.shape_state = ShapeState::Idle;
        self.stroke = None;
        self.is_dirty = true;
        Ok(true)
    }
}
