//! Bit-exact packing of sprite bitmaps and brush masks
//!
//! Layouts:
//! - 8×8 sprite: 8 bytes, one byte per row
//! - 16×16 sprite: 32 bytes, one big-endian u16 per row
//! - brush: `height` bytes, one byte per row, low `width` bits used
//!
//! Text stores carry these blobs base64 encoded, see [`encode_blob`].

use base64::{Engine, engine::general_purpose};
use byteorder::{BigEndian, ReadBytesExt, WriteBytesExt};

use crate::{Brush, EngineError, Result, Sprite, SpriteSize, brush::validate_mask};

/// Pack sprite rows into their binary layout.
pub fn pack_rows(size: SpriteSize, rows: &[u16]) -> Result<Vec<u8>> {
    if rows.len() != size.pixels() as usize {
        return Err(EngineError::invalid_shape(format!("expected {} rows, got {}", size.pixels(), rows.len())));
    }
    let mut data = Vec::with_capacity(size.bitmap_len());
    for &row in rows {
        if row & !size.row_mask() != 0 {
            return Err(EngineError::invalid_shape(format!("row value {row:#06x} exceeds {} bits", size.pixels())));
        }
        match size {
            SpriteSize::Size8 => data.write_u8(row as u8)?,
            SpriteSize::Size16 => data.write_u16::<BigEndian>(row)?,
        }
    }
    Ok(data)
}

/// Unpack a bitmap blob, failing with `Decode` when the length does not match the size.
pub fn unpack_rows(size: SpriteSize, data: &[u8]) -> Result<Vec<u16>> {
    if data.len() != size.bitmap_len() {
        return Err(EngineError::decode(size.bitmap_len(), data.len()));
    }
    let mut reader = data;
    let mut rows = Vec::with_capacity(size.pixels() as usize);
    for _ in 0..size.pixels() {
        let row = match size {
            SpriteSize::Size8 => u16::from(reader.read_u8()?),
            SpriteSize::Size16 => reader.read_u16::<BigEndian>()?,
        };
        rows.push(row);
    }
    Ok(rows)
}

pub fn pack_sprite(sprite: &Sprite) -> Result<Vec<u8>> {
    pack_rows(sprite.size(), sprite.rows())
}

pub fn unpack_sprite(size: SpriteSize, color_index: u8, data: &[u8]) -> Result<Sprite> {
    Sprite::new(size, color_index, unpack_rows(size, data)?)
}

/// Pack a brush mask, one byte per row.
pub fn pack_brush(brush: &Brush) -> Vec<u8> {
    brush.rows().to_vec()
}

/// Validate and unpack a brush mask.
pub fn unpack_brush_rows(width: u8, height: u8, data: &[u8]) -> Result<Vec<u8>> {
    if data.len() != height as usize {
        return Err(EngineError::decode(height as usize, data.len()));
    }
    validate_mask(width, height, data)?;
    Ok(data.to_vec())
}

pub fn unpack_brush(name: impl Into<String>, width: u8, height: u8, data: &[u8]) -> Result<Brush> {
    Brush::new(name, width, height, unpack_brush_rows(width, height, data)?)
}

/// Base64 text form of a binary blob.
pub fn encode_blob(data: &[u8]) -> String {
    general_purpose::STANDARD.encode(data)
}

pub fn decode_blob(text: &str) -> Result<Vec<u8>> {
    Ok(general_purpose::STANDARD.decode(text.as_bytes())?)
}
