//! Pointer driven painting
//!
//! - Pencil stamps the active brush centred on the cursor
//! - Eraser stamps a square or round mask with value 0
//! - Drags join consecutive positions with a Bresenham line
//! - Fill flood fills through the mirror
//!
//! Every stamped cell is routed through the symmetry mirror and the
//! composite view. One undo capture is taken per press, and per single
//! `paint_brush` or `erase` call.

use sprite_engine::{Brush, Position, Result};

use crate::brushes::{PixelCanvas, flood_fill, get_line_points};
use crate::{CompositeView, ShapeState, Tool};

use super::state::Stroke;
use super::{EditOutcome, SpriteEditState};

/// Flood fill surface over the composite canvas, plotting through the mirror.
struct MirroredCanvas<'a> {
    state: &'a mut SpriteEditState,
    view: CompositeView,
    set_color: bool,
}

impl PixelCanvas for MirroredCanvas<'_> {
    fn width(&self) -> i32 {
        self.view.dimensions().0
    }

    fn height(&self) -> i32 {
        self.view.dimensions().1
    }

    fn get_pixel(&self, pos: Position) -> bool {
        self.state.view_pixel(&self.view, pos)
    }

    fn plot(&mut self, pos: Position, value: bool) -> Result<()> {
        self.state.apply_mirrored(&self.view, pos, value, self.set_color)
    }
}

impl SpriteEditState {
    // ═══════════════════════════════════════════════════════════════════════
    // Pointer Events
    // ═══════════════════════════════════════════════════════════════════════

    /// Pointer pressed on the canvas. `value` is the pixel value of the button
    /// (primary paints 1, secondary paints 0).
    pub fn press(&mut self, pos: Position, value: bool) -> Result<EditOutcome> {
        let view = self.composite_view();
        if view.is_unavailable() {
            log::warn!("2x2 block unavailable at sprite #{}", self.selected);
            return Ok(EditOutcome::BlockUnavailable);
        }
        if !view.contains(pos) {
            return Ok(EditOutcome::OutOfBounds);
        }

        if let Some(kind) = self.tool.shape_kind() {
            return match self.shape_state {
                ShapeState::Idle => {
                    self.shape_state = ShapeState::PendingStart { start: pos, value };
                    Ok(EditOutcome::ShapeStarted)
                }
                ShapeState::PendingStart { start, value } => {
                    self.shape_state = ShapeState::Idle;
                    self.draw_shape(kind, start, pos, value)
                }
            };
        }

        match self.tool {
            Tool::Fill => self.flood_fill(pos, value),
            Tool::Pencil => {
                self.capture_undo("Pencil", &view.target_indices());
                self.stroke = Some(Stroke { last: pos, value });
                self.stamp_brush(pos, value)?;
                self.is_dirty = true;
                Ok(EditOutcome::Applied)
            }
            Tool::Eraser { .. } => {
                self.capture_undo("Eraser", &view.target_indices());
                self.stroke = Some(Stroke { last: pos, value: false });
                self.stamp_eraser(pos)?;
                self.is_dirty = true;
                Ok(EditOutcome::Applied)
            }
            Tool::Line | Tool::Rect | Tool::RectFill | Tool::Ellipse | Tool::EllipseFill => Ok(EditOutcome::NoChange),
        }
    }

    /// Pointer dragged with the button held. Only pencil and eraser react.
    pub fn drag(&mut self, pos: Position) -> Result<EditOutcome> {
        if !self.tool.is_freehand() {
            return Ok(EditOutcome::NoChange);
        }
        let Some(stroke) = self.stroke else {
            return Ok(EditOutcome::NoChange);
        };
        if !self.composite_view().contains(pos) {
            return Ok(EditOutcome::OutOfBounds);
        }
        if pos == stroke.last {
            return Ok(EditOutcome::NoChange);
        }

        for point in get_line_points(stroke.last, pos) {
            if matches!(self.tool, Tool::Eraser { .. }) {
                self.stamp_eraser(point)?;
            } else {
                self.stamp_brush(point, stroke.value)?;
            }
        }
        self.stroke = Some(Stroke { last: pos, ..stroke });
        self.is_dirty = true;
        Ok(EditOutcome::Applied)
    }

    /// Pointer released, ends a pencil or eraser stroke.
    pub fn release(&mut self) {
        self.stroke = None;
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Stamps
    // ═══════════════════════════════════════════════════════════════════════

    /// Stamp the active brush centred on `pos` as one undo step, assigning the current colour.
    pub fn paint_brush(&mut self, pos: Position, value: bool) -> Result<EditOutcome> {
        self.single_stamp("Brush", pos, |state| state.stamp_brush(pos, value))
    }

    /// Stamp the configured eraser centred on `pos` as one undo step. The colour is left alone.
    pub fn erase(&mut self, pos: Position) -> Result<EditOutcome> {
        self.single_stamp("Eraser", pos, |state| state.stamp_eraser(pos))
    }

    fn single_stamp(&mut self, description: &str, pos: Position, apply: impl FnOnce(&mut Self) -> Result<()>) -> Result<EditOutcome> {
        let view = self.composite_view();
        if view.is_unavailable() {
            log::warn!("2x2 block unavailable at sprite #{}", self.selected);
            return Ok(EditOutcome::BlockUnavailable);
        }
        if !view.contains(pos) {
            return Ok(EditOutcome::OutOfBounds);
        }
        self.capture_undo(description, &view.target_indices());
        apply(self)?;
        self.is_dirty = true;
        Ok(EditOutcome::Applied)
    }

    fn stamp_brush(&mut self, pos: Position, value: bool) -> Result<()> {
        let brush = self.active_brush.clone();
        self.stamp(&brush, pos, value, true)
    }

    fn stamp_eraser(&mut self, pos: Position) -> Result<()> {
        let brush = match self.tool {
            Tool::Eraser { shape, size } => Brush::eraser(shape, size),
            _ => Brush::pixel(),
        };
        self.stamp(&brush, pos, false, false)
    }

    fn stamp(&mut self, brush: &Brush, pos: Position, value: bool, set_color: bool) -> Result<()> {
        let view = self.composite_view();
        for offset in brush.points_centered() {
            let point = pos + offset;
            if view.contains(point) {
                self.apply_mirrored(&view, point, value, set_color)?;
            }
        }
        Ok(())
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Flood Fill
    // ═══════════════════════════════════════════════════════════════════════

    /// Flood fill the 4-connected region at `pos` through the current mode.
    ///
    /// The colour is assigned only when painting 1s. Filling a region that
    /// already holds `value` changes nothing and keeps the previous undo step.
    pub fn flood_fill(&mut self, pos: Position, value: bool) -> Result<EditOutcome> {
        let view = self.composite_view();
        if view.is_unavailable() {
            return Ok(EditOutcome::BlockUnavailable);
        }
        if !view.contains(pos) {
            return Ok(EditOutcome::OutOfBounds);
        }
        if self.view_pixel(&view, pos) == value {
            return Ok(EditOutcome::Filled { changed: 0 });
        }

        self.capture_undo("Fill", &view.target_indices());
        let mut canvas = MirroredCanvas {
            state: self,
            view,
            set_color: value,
        };
        let changed = flood_fill(&mut canvas, pos, value)?;
        log::debug!("Flood fill at {pos} changed {changed} cells");
        if changed > 0 {
            self.is_dirty = true;
        }
        Ok(EditOutcome::Filled { changed })
    }
}
