//! Whole canvas operations
//!
//! Flip, invert, clear and fill-all read the canvas as the current mode shows
//! it and write every cell back, so in 2×2 mode a flip mirrors the whole
//! block. Shifts work per target sprite.

use sprite_engine::{Position, Result};

use crate::shift::{ShiftDirection, ShiftMode, shift_buffer, shift_wrap};
use crate::ShapeState;

use super::{EditOutcome, SpriteEditState};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum PixelTransform {
    /// Top/bottom
    FlipHorizontal,
    /// Left/right
    FlipVertical,
    Invert,
    Clear,
    Fill,
}

impl PixelTransform {
    fn description(self) -> &'static str {
        match self {
            PixelTransform::FlipHorizontal => "Flip horizontal",
            PixelTransform::FlipVertical => "Flip vertical",
            PixelTransform::Invert => "Invert",
            PixelTransform::Clear => "Clear",
            PixelTransform::Fill => "Fill all",
        }
    }
}

impl SpriteEditState {
    /// Mirror the canvas top to bottom.
    pub fn flip_horizontal(&mut self) -> Result<EditOutcome> {
        self.apply_pixel_transform(PixelTransform::FlipHorizontal)
    }

    /// Mirror the canvas left to right.
    pub fn flip_vertical(&mut self) -> Result<EditOutcome> {
        self.apply_pixel_transform(PixelTransform::FlipVertical)
    }

    pub fn invert(&mut self) -> Result<EditOutcome> {
        self.apply_pixel_transform(PixelTransform::Invert)
    }

    pub fn clear(&mut self) -> Result<EditOutcome> {
        self.apply_pixel_transform(PixelTransform::Clear)
    }

    /// Set every pixel and assign the current colour.
    pub fn fill_all(&mut self) -> Result<EditOutcome> {
        self.apply_pixel_transform(PixelTransform::Fill)
    }

    fn apply_pixel_transform(&mut self, transform: PixelTransform) -> Result<EditOutcome> {
        let view = self.composite_view();
        if view.is_unavailable() {
            log::warn!("2x2 block unavailable at sprite #{}", self.selected);
            return Ok(EditOutcome::BlockUnavailable);
        }
        self.capture_undo(transform.description(), &view.target_indices());

        let (width, height) = view.dimensions();
        let source: Vec<Vec<bool>> = (0..height)
            .map(|y| (0..width).map(|x| self.view_pixel(&view, Position::new(x, y))).collect())
            .collect();

        let set_color = transform == PixelTransform::Fill;
        for y in 0..height {
            for x in 0..width {
                let value = match transform {
                    PixelTransform::FlipHorizontal => source[(height - 1 - y) as usize][x as usize],
                    PixelTransform::FlipVertical => source[y as usize][(width - 1 - x) as usize],
                    PixelTransform::Invert => !source[y as usize][x as usize],
                    PixelTransform::Clear => false,
                    PixelTransform::Fill => true,
                };
                self.apply_point(&view, Position::new(x, y), value, set_color)?;
            }
        }
        self.shape_state = ShapeState::Idle;
        self.is_dirty = true;
        Ok(EditOutcome::Applied)
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Shift
    // ═══════════════════════════════════════════════════════════════════════

    /// Shift every transform target one cell, wrapping or through the eviction stacks.
    pub fn shift(&mut self, direction: ShiftDirection) -> Result<EditOutcome> {
        let indices = self.composite_view().target_indices();
        self.capture_undo(format!("Shift {direction:?}"), &indices);

        for &index in &indices {
            let sprite = &mut self.sprites[index];
            match self.shift_mode {
                ShiftMode::Wrap => shift_wrap(sprite, direction),
                ShiftMode::Buffer => {
                    let buffers = self.shift_buffers.entry(index).or_default();
                    shift_buffer(sprite, buffers, direction);
                }
            }
        }
        log::debug!("Shifted {indices:?} {direction:?} ({:?})", self.shift_mode);
        self.shape_state = ShapeState::Idle;
        self.is_dirty = true;
        Ok(EditOutcome::Applied)
    }
}
