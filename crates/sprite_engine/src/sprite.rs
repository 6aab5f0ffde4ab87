//! Sprite bitmap model
//!
//! A sprite is a square 1-bit bitmap stored as one integer per row. Bit
//! `size - 1 - x` of a row holds the pixel at column `x`, so bit 0 is the
//! rightmost column. Every sprite carries exactly one palette colour.

use serde::{Deserialize, Serialize};

use crate::{EngineError, Position, Result};

/// Palette index new and reset sprites start with (white).
pub const DEFAULT_COLOR_INDEX: u8 = 15;

/// Number of entries in the fixed palette.
pub const PALETTE_SIZE: u8 = 16;

/// The two hardware sprite sizes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum SpriteSize {
    /// 8×8 pixels, 256 sprites on a 16×16 grid
    #[default]
    Size8,
    /// 16×16 pixels, 64 sprites on an 8×8 grid
    Size16,
}

impl SpriteSize {
    /// Edge length in pixels.
    pub const fn pixels(self) -> i32 {
        match self {
            SpriteSize::Size8 => 8,
            SpriteSize::Size16 => 16,
        }
    }

    pub const fn as_u8(self) -> u8 {
        self.pixels() as u8
    }

    /// Bits used by a single row.
    pub const fn row_mask(self) -> u16 {
        match self {
            SpriteSize::Size8 => 0x00FF,
            SpriteSize::Size16 => 0xFFFF,
        }
    }

    /// Number of sprites a project of this size always holds.
    pub const fn sprite_count(self) -> usize {
        match self {
            SpriteSize::Size8 => 256,
            SpriteSize::Size16 => 64,
        }
    }

    /// Columns (and rows) of the sprite table grid.
    pub const fn grid_columns(self) -> usize {
        match self {
            SpriteSize::Size8 => 16,
            SpriteSize::Size16 => 8,
        }
    }

    /// Length of a packed bitmap blob.
    pub const fn bitmap_len(self) -> usize {
        match self {
            SpriteSize::Size8 => 8,
            SpriteSize::Size16 => 32,
        }
    }
}

impl TryFrom<u8> for SpriteSize {
    type Error = EngineError;

    fn try_from(value: u8) -> Result<Self> {
        match value {
            8 => Ok(SpriteSize::Size8),
            16 => Ok(SpriteSize::Size16),
            _ => Err(EngineError::invalid_shape(format!("sprite size must be 8 or 16, got {value}"))),
        }
    }
}

impl From<SpriteSize> for u8 {
    fn from(size: SpriteSize) -> Self {
        size.as_u8()
    }
}

impl std::fmt::Display for SpriteSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let px = self.pixels();
        write!(f, "{px}x{px}")
    }
}

/// A single 1-bit sprite with its palette colour.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Sprite {
    size: SpriteSize,
    color_index: u8,
    rows: Vec<u16>,
}

impl Sprite {
    /// All-zero sprite in the default colour.
    pub fn empty(size: SpriteSize) -> Self {
        Self {
            size,
            color_index: DEFAULT_COLOR_INDEX,
            rows: vec![0; size.pixels() as usize],
        }
    }

    /// Build a sprite from raw rows, validating count, bit width and colour.
    pub fn new(size: SpriteSize, color_index: u8, rows: Vec<u16>) -> Result<Self> {
        validate_color(color_index)?;
        validate_rows(size, &rows)?;
        Ok(Self { size, color_index, rows })
    }

    pub fn size(&self) -> SpriteSize {
        self.size
    }

    /// Edge length in pixels.
    pub fn width(&self) -> i32 {
        self.size.pixels()
    }

    pub fn color_index(&self) -> u8 {
        self.color_index
    }

    pub fn set_color_index(&mut self, color_index: u8) -> Result<()> {
        validate_color(color_index)?;
        self.color_index = color_index;
        Ok(())
    }

    pub fn rows(&self) -> &[u16] {
        &self.rows
    }

    /// Replace all rows at once (validated, nothing is written on failure).
    pub fn replace_rows(&mut self, rows: Vec<u16>) -> Result<()> {
        validate_rows(self.size, &rows)?;
        self.rows = rows;
        Ok(())
    }

    pub fn row(&self, y: i32) -> u16 {
        if y < 0 || y >= self.width() {
            return 0;
        }
        self.rows[y as usize]
    }

    /// Overwrite one row; bits beyond the sprite width are dropped.
    pub fn set_row(&mut self, y: i32, value: u16) {
        if y < 0 || y >= self.width() {
            return;
        }
        self.rows[y as usize] = value & self.size.row_mask();
    }

    fn bit(&self, x: i32) -> u16 {
        1 << (self.width() - 1 - x)
    }

    pub fn get_pixel(&self, x: i32, y: i32) -> bool {
        if !Position::new(x, y).is_inside(self.width(), self.width()) {
            return false;
        }
        self.rows[y as usize] & self.bit(x) != 0
    }

    /// Set one pixel. Out of bounds coordinates are ignored.
    pub fn set_pixel(&mut self, x: i32, y: i32, value: bool) {
        if !Position::new(x, y).is_inside(self.width(), self.width()) {
            return;
        }
        let mask = self.bit(x);
        let row = &mut self.rows[y as usize];
        if value {
            *row |= mask;
        } else {
            *row &= !mask;
        }
    }

    /// Column `x` read top to bottom, packed MSB-first like a row.
    pub fn column(&self, x: i32) -> u16 {
        let size = self.width();
        let mut out = 0u16;
        for y in 0..size {
            if self.get_pixel(x, y) {
                out |= 1 << (size - 1 - y);
            }
        }
        out
    }

    pub fn set_column(&mut self, x: i32, bits: u16) {
        let size = self.width();
        for y in 0..size {
            let bit = (bits >> (size - 1 - y)) & 1;
            self.set_pixel(x, y, bit != 0);
        }
    }

    pub fn clear(&mut self) {
        self.rows.iter_mut().for_each(|row| *row = 0);
    }

    pub fn is_blank(&self) -> bool {
        self.rows.iter().all(|&row| row == 0)
    }

    pub fn count_pixels(&self) -> usize {
        self.rows.iter().map(|row| row.count_ones() as usize).sum()
    }

    /// Positions of all set pixels in row-major order.
    pub fn set_pixels(&self) -> Vec<Position> {
        let size = self.width();
        let mut result = Vec::new();
        for y in 0..size {
            for x in 0..size {
                if self.get_pixel(x, y) {
                    result.push(Position::new(x, y));
                }
            }
        }
        result
    }
}

fn validate_color(color_index: u8) -> Result<()> {
    if color_index >= PALETTE_SIZE {
        return Err(EngineError::InvalidColor { index: color_index });
    }
    Ok(())
}

fn validate_rows(size: SpriteSize, rows: &[u16]) -> Result<()> {
    if rows.len() != size.pixels() as usize {
        return Err(EngineError::invalid_shape(format!(
            "sprite of size {size} needs {} rows, got {}",
            size.pixels(),
            rows.len()
        )));
    }
    if let Some(row) = rows.iter().find(|&&row| row & !size.row_mask() != 0) {
        return Err(EngineError::invalid_shape(format!("row value {row:#06x} exceeds {} bits", size.pixels())));
    }
    Ok(())
}
