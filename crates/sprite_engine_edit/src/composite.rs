//! Composite editing modes
//!
//! The sprite table is a fixed grid (16×16 for 8 pixel sprites, 8×8 for 16
//! pixel sprites). Besides editing a single sprite, the editor can address the
//! 2×2 block anchored at the selection either as one large canvas or as four
//! stacked layers. The block is `[idx, idx+1, idx+stride, idx+stride+1]` and
//! does not exist when the selection sits in the last grid row or column.

use serde::{Deserialize, Serialize};
use sprite_engine::{Position, SpriteSize};

/// Number of layers of a 2×2 block in overlay mode.
pub const OVERLAY_LAYERS: usize = 4;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EditMode {
    /// Canvas is the selected sprite
    #[default]
    Single,
    /// Canvas is the 2×2 block, twice the sprite size
    Block2x2,
    /// Canvas is one sprite, edits go to the active layer of the block
    Overlay,
}

/// Topology of the sprite table for one sprite size.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SpriteGrid {
    size: SpriteSize,
}

impl SpriteGrid {
    pub fn new(size: SpriteSize) -> Self {
        Self { size }
    }

    /// Sprites per grid row.
    pub fn stride(self) -> usize {
        self.size.grid_columns()
    }

    /// The 2×2 block anchored at `index`, `None` at the right or bottom edge.
    pub fn block_indices(self, index: usize) -> Option<[usize; 4]> {
        let stride = self.stride();
        if index >= self.size.sprite_count() {
            return None;
        }
        let col = index % stride;
        let row = index / stride;
        if col + 1 >= stride || row + 1 >= stride {
            return None;
        }
        Some([index, index + 1, index + stride, index + stride + 1])
    }
}

/// One sprite drawn by the composite preview, placed at `offset` pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CompositeLayer {
    pub index: usize,
    pub offset: Position,
}

/// How editor canvas coordinates resolve to sprites for the current selection.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CompositeView {
    size: SpriteSize,
    mode: EditMode,
    selected: usize,
    layer: usize,
    block: Option<[usize; 4]>,
}

impl CompositeView {
    pub fn new(size: SpriteSize, mode: EditMode, selected: usize, layer: usize) -> Self {
        Self {
            size,
            mode,
            selected,
            layer: layer.min(OVERLAY_LAYERS - 1),
            block: SpriteGrid::new(size).block_indices(selected),
        }
    }

    pub fn mode(&self) -> EditMode {
        self.mode
    }

    pub fn block(&self) -> Option<[usize; 4]> {
        self.block
    }

    /// 2×2 mode without a block: edits are skipped and the user is told.
    pub fn is_unavailable(&self) -> bool {
        self.mode == EditMode::Block2x2 && self.block.is_none()
    }

    /// Canvas width and height in cells.
    pub fn dimensions(&self) -> (i32, i32) {
        let px = self.size.pixels();
        match self.mode {
            EditMode::Block2x2 => (px * 2, px * 2),
            EditMode::Single | EditMode::Overlay => (px, px),
        }
    }

    pub fn contains(&self, pos: Position) -> bool {
        let (w, h) = self.dimensions();
        pos.is_inside(w, h)
    }

    /// Resolve a canvas cell to a sprite index and sprite-local cell.
    pub fn map(&self, pos: Position) -> Option<(usize, Position)> {
        if !self.contains(pos) {
            return None;
        }
        let px = self.size.pixels();
        match self.mode {
            EditMode::Single => Some((self.selected, pos)),
            EditMode::Overlay => match self.block {
                Some(block) => Some((block[self.layer], pos)),
                None => Some((self.selected, pos)),
            },
            EditMode::Block2x2 => {
                let block = self.block?;
                let col = usize::from(pos.x >= px);
                let row = usize::from(pos.y >= px);
                Some((block[row * 2 + col], Position::new(pos.x % px, pos.y % px)))
            }
        }
    }

    /// Sprites touched by pixel transforms, shifts and undo.
    pub fn target_indices(&self) -> Vec<usize> {
        match (self.mode, self.block) {
            (EditMode::Single, _) | (_, None) => vec![self.selected],
            (EditMode::Overlay, Some(block)) => vec![block[self.layer]],
            (EditMode::Block2x2, Some(block)) => block.to_vec(),
        }
    }

    /// Sprites that take the palette colour when it is picked.
    pub fn color_target_indices(&self) -> Vec<usize> {
        match (self.mode, self.block) {
            (EditMode::Single, _) | (_, None) => vec![self.selected],
            (EditMode::Overlay | EditMode::Block2x2, Some(block)) => block.to_vec(),
        }
    }

    /// Sprites to draw for a preview of the current mode, back to front.
    pub fn layers(&self) -> Vec<CompositeLayer> {
        let px = self.size.pixels();
        match (self.mode, self.block) {
            (EditMode::Single, _) | (_, None) => vec![CompositeLayer {
                index: self.selected,
                offset: Position::default(),
            }],
            (EditMode::Block2x2, Some(block)) => block
                .iter()
                .enumerate()
                .map(|(i, &index)| CompositeLayer {
                    index,
                    offset: Position::new((i % 2) as i32 * px, (i / 2) as i32 * px),
                })
                .collect(),
            (EditMode::Overlay, Some(block)) => block
                .iter()
                .map(|&index| CompositeLayer {
                    index,
                    offset: Position::default(),
                })
                .collect(),
        }
    }
}
