//! Shape drawing operations
//!
//! Lines, rectangles and ellipses are placed with two clicks. The commit
//! plots every shape point through the mirror; points outside the canvas are
//! skipped one by one.

use sprite_engine::{Position, Result};

use crate::{ShapeKind, ShapeState};

use super::{EditOutcome, SpriteEditState};

impl SpriteEditState {
    /// Draw a shape between two canvas cells as one undo step.
    ///
    /// Both cells must lie on the canvas, otherwise nothing is drawn.
    pub fn draw_shape(&mut self, kind: ShapeKind, start: Position, end: Position, value: bool) -> Result<EditOutcome> {
        let view = self.composite_view();
        if view.is_unavailable() {
            return Ok(EditOutcome::BlockUnavailable);
        }
        if !view.contains(start) || !view.contains(end) {
            return Ok(EditOutcome::OutOfBounds);
        }

        self.capture_undo(format!("{kind:?}"), &view.target_indices());
        for point in kind.points(start, end) {
            if view.contains(point) {
                self.apply_mirrored(&view, point, value, true)?;
            }
        }
        self.is_dirty = true;
        Ok(EditOutcome::Applied)
    }

    /// Cells the pending shape would cover if the second click landed on `hover`.
    ///
    /// Empty when no shape is pending or either end is off the canvas.
    pub fn shape_preview(&self, hover: Position) -> Vec<Position> {
        let ShapeState::PendingStart { start, .. } = self.shape_state else {
            return Vec::new();
        };
        let Some(kind) = self.tool.shape_kind() else {
            return Vec::new();
        };
        let view = self.composite_view();
        if !view.contains(start) || !view.contains(hover) {
            return Vec::new();
        }
        kind.points(start, hover)
    }

    /// Drop a pending first click.
    pub fn cancel_shape(&mut self) {
        self.shape_state = ShapeState::Idle;
    }
}
