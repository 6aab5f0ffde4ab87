//! The fixed 16 colour MSX1 (TMS9918) palette
//!
//! Index 0 is transparent on the hardware and renders as black here.

use serde::{Deserialize, Serialize};

use crate::{EngineError, Result, Sprite, PALETTE_SIZE};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// `#RRGGBB` notation.
    pub fn to_hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

pub const MSX1_PALETTE: [Rgb; PALETTE_SIZE as usize] = [
    Rgb::new(0x00, 0x00, 0x00), // transparent
    Rgb::new(0x00, 0x00, 0x00),
    Rgb::new(0x21, 0xC8, 0x42),
    Rgb::new(0x5E, 0xDC, 0x78),
    Rgb::new(0x54, 0x55, 0xED),
    Rgb::new(0x7D, 0x76, 0xFC),
    Rgb::new(0xD4, 0x52, 0x4D),
    Rgb::new(0x42, 0xEB, 0xF5),
    Rgb::new(0xFC, 0x55, 0x54),
    Rgb::new(0xFF, 0x79, 0x78),
    Rgb::new(0xD4, 0xC1, 0x54),
    Rgb::new(0xE6, 0xCE, 0x80),
    Rgb::new(0x21, 0xB0, 0x3B),
    Rgb::new(0xC9, 0x5B, 0xBA),
    Rgb::new(0xCC, 0xCC, 0xCC),
    Rgb::new(0xFF, 0xFF, 0xFF),
];

/// Look up a palette entry.
pub fn color(index: u8) -> Result<Rgb> {
    MSX1_PALETTE.get(index as usize).copied().ok_or(EngineError::InvalidColor { index })
}

/// Rasterise a sprite to `size * size * 4` RGBA bytes.
///
/// Set pixels take the sprite colour, clear pixels are fully transparent.
pub fn render_rgba(sprite: &Sprite) -> Vec<u8> {
    let size = sprite.width();
    let rgb = MSX1_PALETTE[sprite.color_index() as usize];
    let mut pixels = Vec::with_capacity((size * size * 4) as usize);
    for y in 0..size {
        for x in 0..size {
            if sprite.get_pixel(x, y) {
                pixels.extend_from_slice(&[rgb.r, rgb.g, rgb.b, 0xFF]);
            } else {
                pixels.extend_from_slice(&[0, 0, 0, 0]);
            }
        }
    }
    pixels
}
