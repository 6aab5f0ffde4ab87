//! Sprite Edit State
//!
//! The session context of the sprite editor. It owns the sprite table and
//! every setting an edit depends on, so the presentation layer only forwards
//! canvas coordinates and reads the result back.
//!
//! # Editing canvas
//!
//! The canvas depends on the composite mode:
//!
//! | Mode    | Canvas          | Pixel edits go to                     |
//! |---------|-----------------|---------------------------------------|
//! | Single  | size × size     | selected sprite                       |
//! | 2×2     | 2size × 2size   | block quadrant under the cursor       |
//! | Overlay | size × size     | active layer of the block             |
//!
//! 2×2 mode at the right or bottom grid edge has no block: edits report
//! [`EditOutcome::BlockUnavailable`] and change nothing.
//!
//! # Module Organization
//!
//! - `state.rs` - Struct definition, constructors, getters, setters, reset
//! - `paint_operations.rs` - Pointer handling, brush and eraser stamps, flood fill
//! - `shape_operations.rs` - Two-click shapes and their preview
//! - `transform_operations.rs` - Flip, invert, clear, fill-all, shift
//! - `undo.rs` - Single level undo
//! - `project_operations.rs` - Store load/save and dirty tracking

use std::collections::BTreeMap;

use sprite_engine::{Brush, DEFAULT_COLOR_INDEX, EngineError, Position, Result, Sprite, SpriteSize, empty_sprites, palette};

use crate::{CompositeLayer, CompositeView, EditMode, MirrorAxes, ShapeState, ShiftBuffers, ShiftMode, Tool, UndoSnapshot, composite::OVERLAY_LAYERS};

/// Result of an editing request that did not fail.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EditOutcome {
    /// Sprites were modified
    Applied,
    /// Flood fill finished, `changed` cells were plotted
    Filled { changed: usize },
    /// First click of a shape was recorded
    ShapeStarted,
    /// Nothing to do
    NoChange,
    /// The position lies outside the editing canvas
    OutOfBounds,
    /// 2×2 mode without a block at the current selection
    BlockUnavailable,
}

impl EditOutcome {
    pub fn changed_sprites(self) -> bool {
        matches!(self, EditOutcome::Applied) || matches!(self, EditOutcome::Filled { changed } if changed > 0)
    }
}

/// A pencil or eraser drag in progress.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Stroke {
    pub last: Position,
    pub value: bool,
}

// ═══════════════════════════════════════════════════════════════════════════
// Sprite Edit State
// ═══════════════════════════════════════════════════════════════════════════

pub struct SpriteEditState {
    // ═══════════════════════════════════════════════════════════════════════
    // Sprite Data
    // ═══════════════════════════════════════════════════════════════════════
    pub(crate) sprite_size: SpriteSize,

    /// Always `sprite_size.sprite_count()` sprites
    pub(crate) sprites: Vec<Sprite>,

    // ═══════════════════════════════════════════════════════════════════════
    // Selection & Mode
    // ═══════════════════════════════════════════════════════════════════════
    pub(crate) selected: usize,
    pub(crate) edit_mode: EditMode,

    /// Active overlay layer (0-3)
    pub(crate) overlay_layer: usize,

    // ═══════════════════════════════════════════════════════════════════════
    // Tool Configuration
    // ═══════════════════════════════════════════════════════════════════════
    pub(crate) current_color: u8,
    pub(crate) mirror: MirrorAxes,
    pub(crate) shift_mode: ShiftMode,
    pub(crate) tool: Tool,
    pub(crate) active_brush: Brush,
    pub(crate) shape_state: ShapeState,
    pub(crate) stroke: Option<Stroke>,

    // ═══════════════════════════════════════════════════════════════════════
    // Shift & Undo
    // ═══════════════════════════════════════════════════════════════════════
    /// Eviction stacks per sprite index, created on first buffered shift
    pub(crate) shift_buffers: BTreeMap<usize, ShiftBuffers>,
    pub(crate) undo_snapshot: Option<UndoSnapshot>,

    // ═══════════════════════════════════════════════════════════════════════
    // Project State
    // ═══════════════════════════════════════════════════════════════════════
    pub(crate) is_dirty: bool,
    pub(crate) last_loaded: Option<(i64, String)>,
}

impl Default for SpriteEditState {
    fn default() -> Self {
        Self::new(SpriteSize::Size8)
    }
}

impl SpriteEditState {
    // ═══════════════════════════════════════════════════════════════════════
    // Constructors
    // ═══════════════════════════════════════════════════════════════════════

    /// Blank project: every sprite empty in colour 15, pencil with the pixel brush
    pub fn new(sprite_size: SpriteSize) -> Self {
        Self {
            sprite_size,
            sprites: empty_sprites(sprite_size),
            selected: 0,
            edit_mode: EditMode::Single,
            overlay_layer: 0,
            current_color: DEFAULT_COLOR_INDEX,
            mirror: MirrorAxes::empty(),
            shift_mode: ShiftMode::Wrap,
            tool: Tool::Pencil,
            active_brush: Brush::pixel(),
            shape_state: ShapeState::Idle,
            stroke: None,
            shift_buffers: BTreeMap::new(),
            undo_snapshot: None,
            is_dirty: false,
            last_loaded: None,
        }
    }

    /// Start over with a blank project of `sprite_size`.
    ///
    /// Clears shift buffers, the undo snapshot and any pending shape, and
    /// restores the pencil tool and the default colour. Mode, mirror axes and
    /// the active brush are kept.
    pub fn reset(&mut self, sprite_size: SpriteSize) {
        log::info!("Resetting project to {sprite_size} sprites");
        self.sprite_size = sprite_size;
        self.sprites = empty_sprites(sprite_size);
        self.selected = 0;
        self.current_color = DEFAULT_COLOR_INDEX;
        self.tool = Tool::Pencil;
        self.shape_state = ShapeState::Idle;
        self.stroke = None;
        self.shift_buffers.clear();
        self.undo_snapshot = None;
        self.is_dirty = false;
        self.last_loaded = None;
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Getters
    // ═══════════════════════════════════════════════════════════════════════

    pub fn sprite_size(&self) -> SpriteSize {
        self.sprite_size
    }

    pub fn sprites(&self) -> &[Sprite] {
        &self.sprites
    }

    pub fn sprite(&self, index: usize) -> Option<&Sprite> {
        self.sprites.get(index)
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn edit_mode(&self) -> EditMode {
        self.edit_mode
    }

    pub fn overlay_layer(&self) -> usize {
        self.overlay_layer
    }

    pub fn current_color(&self) -> u8 {
        self.current_color
    }

    pub fn mirror(&self) -> MirrorAxes {
        self.mirror
    }

    pub fn shift_mode(&self) -> ShiftMode {
        self.shift_mode
    }

    pub fn tool(&self) -> Tool {
        self.tool
    }

    pub fn active_brush(&self) -> &Brush {
        &self.active_brush
    }

    pub fn shape_state(&self) -> ShapeState {
        self.shape_state
    }

    pub fn shift_buffers(&self, index: usize) -> Option<&ShiftBuffers> {
        self.shift_buffers.get(&index)
    }

    /// Address mapping for the current selection and mode.
    pub fn composite_view(&self) -> CompositeView {
        CompositeView::new(self.sprite_size, self.edit_mode, self.selected, self.overlay_layer)
    }

    /// Editing canvas width and height.
    pub fn canvas_dimensions(&self) -> (i32, i32) {
        self.composite_view().dimensions()
    }

    /// Pixel value at a canvas cell as the current mode sees it.
    pub fn pixel_at(&self, pos: Position) -> bool {
        self.view_pixel(&self.composite_view(), pos)
    }

    /// Sprites to draw for the preview of the current mode, with their offsets.
    pub fn composite_preview(&self) -> Vec<CompositeLayer> {
        self.composite_view().layers()
    }

    /// RGBA bytes of one sprite for the render layer.
    pub fn render_sprite(&self, index: usize) -> Option<Vec<u8>> {
        self.sprites.get(index).map(palette::render_rgba)
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Setters
    // ═══════════════════════════════════════════════════════════════════════

    /// Select a sprite of the table. Cancels a pending shape.
    pub fn select_sprite(&mut self, index: usize) -> Result<()> {
        if index >= self.sprites.len() {
            return Err(EngineError::SpriteIndex {
                index,
                count: self.sprites.len(),
            });
        }
        self.selected = index;
        self.shape_state = ShapeState::Idle;
        self.stroke = None;
        Ok(())
    }

    pub fn set_edit_mode(&mut self, mode: EditMode) {
        self.edit_mode = mode;
        self.shape_state = ShapeState::Idle;
        self.stroke = None;
        if self.composite_view().is_unavailable() {
            log::warn!("2x2 block unavailable at sprite #{}", self.selected);
        }
    }

    /// Active overlay layer, clamped to 0..=3.
    pub fn set_overlay_layer(&mut self, layer: usize) {
        self.overlay_layer = layer.min(OVERLAY_LAYERS - 1);
    }

    /// Pick a palette colour and assign it to the colour targets of the mode.
    pub fn set_color(&mut self, color_index: u8) -> Result<()> {
        palette::color(color_index)?;
        self.current_color = color_index;
        for index in self.composite_view().color_target_indices() {
            self.sprites[index].set_color_index(color_index)?;
        }
        self.is_dirty = true;
        Ok(())
    }

    pub fn set_mirror(&mut self, mirror: MirrorAxes) {
        self.mirror = mirror;
    }

    /// Toggle one or more mirror axes.
    pub fn toggle_mirror(&mut self, axes: MirrorAxes) {
        self.mirror.toggle(axes);
    }

    pub fn set_shift_mode(&mut self, mode: ShiftMode) {
        self.shift_mode = mode;
    }

    /// Switch tools. Any pending shape or stroke is dropped.
    pub fn set_tool(&mut self, tool: Tool) {
        self.tool = match tool {
            Tool::Eraser { shape, size } => Tool::eraser(shape, size),
            other => other,
        };
        self.shape_state = ShapeState::Idle;
        self.stroke = None;
    }

    /// Brush used by the pencil.
    pub fn set_active_brush(&mut self, brush: Brush) -> Result<()> {
        brush.validate()?;
        self.active_brush = brush;
        Ok(())
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Canvas access
    // ═══════════════════════════════════════════════════════════════════════

    pub(crate) fn view_pixel(&self, view: &CompositeView, pos: Position) -> bool {
        view.map(pos).is_some_and(|(index, local)| self.sprites[index].get_pixel(local.x, local.y))
    }

    /// Write one canvas cell without mirroring. Cells that do not map are ignored.
    pub(crate) fn apply_point(&mut self, view: &CompositeView, pos: Position, value: bool, set_color: bool) -> Result<()> {
        let Some((index, local)) = view.map(pos) else {
            return Ok(());
        };
        let sprite = &mut self.sprites[index];
        if set_color {
            sprite.set_color_index(self.current_color)?;
        }
        sprite.set_pixel(local.x, local.y, value);
        Ok(())
    }

    /// Write a canvas cell and all its in-bounds mirror images.
    pub(crate) fn apply_mirrored(&mut self, view: &CompositeView, pos: Position, value: bool, set_color: bool) -> Result<()> {
        let (width, height) = view.dimensions();
        for point in self.mirror.expand(pos, width, height) {
            if point.is_inside(width, height) {
                self.apply_point(view, point, value, set_color)?;
            }
        }
        Ok(())
    }
}
