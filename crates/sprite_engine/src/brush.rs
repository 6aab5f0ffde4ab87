//! Brush stamps
//!
//! A brush is a small (at most 8×8) 1-bit mask. Row `y` stores column `x` in
//! bit `width - 1 - x`. Brushes are applied centred on the cursor: the origin
//! sits at `(width / 2, height / 2)`.

use serde::{Deserialize, Serialize};

use crate::{EngineError, Position, Result};

/// Largest brush edge in cells.
pub const MAX_BRUSH_SIZE: u8 = 8;

/// Largest eraser edge in cells.
pub const MAX_ERASER_SIZE: u8 = 4;

/// Shape of the eraser stamp.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EraserShape {
    #[default]
    Square,
    Round,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Brush {
    /// Store id, `None` until the brush has been saved
    pub id: Option<i64>,
    pub name: String,
    width: u8,
    height: u8,
    rows: Vec<u8>,
    /// Built-in brushes are seeded by the store, everything else is user defined
    pub user_defined: bool,
}

impl Brush {
    /// Create a user defined brush, failing with `InvalidShape` on bad dimensions or rows.
    pub fn new(name: impl Into<String>, width: u8, height: u8, rows: Vec<u8>) -> Result<Self> {
        let brush = Self {
            id: None,
            name: name.into(),
            width,
            height,
            rows,
            user_defined: true,
        };
        brush.validate()?;
        Ok(brush)
    }

    /// Checks `1 <= width, height <= 8`, one row per line and no bits beyond `width`.
    pub fn validate(&self) -> Result<()> {
        validate_mask(self.width, self.height, &self.rows)
    }

    pub fn width(&self) -> u8 {
        self.width
    }

    pub fn height(&self) -> u8 {
        self.height
    }

    pub fn rows(&self) -> &[u8] {
        &self.rows
    }

    /// Cell offset of the stamp origin.
    pub fn origin(&self) -> Position {
        Position::new(i32::from(self.width / 2), i32::from(self.height / 2))
    }

    pub fn get_pixel(&self, x: i32, y: i32) -> bool {
        if !Position::new(x, y).is_inside(i32::from(self.width), i32::from(self.height)) {
            return false;
        }
        self.rows[y as usize] & (1 << (i32::from(self.width) - 1 - x)) != 0
    }

    /// Offsets of every active cell relative to the brush origin.
    pub fn points_centered(&self) -> Vec<Position> {
        let origin = self.origin();
        let mut points = Vec::new();
        for y in 0..i32::from(self.height) {
            for x in 0..i32::from(self.width) {
                if self.get_pixel(x, y) {
                    points.push(Position::new(x, y) - origin);
                }
            }
        }
        points
    }

    /// Build a brush from active cell coordinates; cells outside the box are skipped.
    pub fn from_points(name: impl Into<String>, width: u8, height: u8, points: &[Position]) -> Result<Self> {
        validate_dimensions(width, height)?;
        let mut rows = vec![0u8; height as usize];
        for p in points {
            if p.is_inside(i32::from(width), i32::from(height)) {
                rows[p.y as usize] |= 1 << (i32::from(width) - 1 - p.x);
            }
        }
        Brush::new(name, width, height, rows)
    }

    /// Single cell brush.
    pub fn pixel() -> Self {
        Self::builtin("1x1 (pixel)", 1, 1, vec![0b1])
    }

    /// Solid `size`×`size` brush, size clamped to `1..=8`.
    pub fn square(name: impl Into<String>, size: u8) -> Self {
        let size = size.clamp(1, MAX_BRUSH_SIZE);
        Self::rect(name, size, size)
    }

    /// Solid rectangle, dimensions clamped to `1..=8`.
    pub fn rect(name: impl Into<String>, width: u8, height: u8) -> Self {
        let width = width.clamp(1, MAX_BRUSH_SIZE);
        let height = height.clamp(1, MAX_BRUSH_SIZE);
        let row = full_row(width);
        Self::builtin(name, width, height, vec![row; height as usize])
    }

    /// Disc inscribed in a `diameter`×`diameter` box.
    ///
    /// Cells whose distance from the box centre is within the radius are set.
    /// Even diameters can leave no cell inside, in that case the centre cell is used.
    pub fn round(name: impl Into<String>, diameter: u8) -> Self {
        let d = diameter.clamp(1, MAX_BRUSH_SIZE);
        let r = (f64::from(d) - 1.0) / 2.0;
        let mut rows = vec![0u8; d as usize];
        for y in 0..d {
            for x in 0..d {
                if (f64::from(x) - r).hypot(f64::from(y) - r) <= r + 0.001 {
                    rows[y as usize] |= 1 << (d - 1 - x);
                }
            }
        }
        if rows.iter().all(|&row| row == 0) {
            let c = d / 2;
            rows[c as usize] = 1 << (d - 1 - c);
        }
        Self::builtin(name, d, d, rows)
    }

    /// Eraser stamp, size clamped to `1..=4`.
    pub fn eraser(shape: EraserShape, size: u8) -> Self {
        let size = size.clamp(1, MAX_ERASER_SIZE);
        match shape {
            EraserShape::Square => Self::square(format!("Eraser square {size}x{size}"), size),
            EraserShape::Round => Self::round(format!("Eraser round {size}x{size}"), size),
        }
    }

    /// Brushes seeded into an empty store.
    pub fn predefined() -> Vec<Brush> {
        vec![
            Brush::pixel(),
            Brush::square("Square 2x2", 2),
            Brush::round("Round 3x3", 3),
            Brush::rect("Rect 4x2", 4, 2),
            Brush::rect("Rect 2x4", 2, 4),
            Brush::round("Round 5x5", 5),
        ]
    }

    fn builtin(name: impl Into<String>, width: u8, height: u8, rows: Vec<u8>) -> Self {
        Self {
            id: None,
            name: name.into(),
            width,
            height,
            rows,
            user_defined: false,
        }
    }
}

impl Default for Brush {
    fn default() -> Self {
        Brush::pixel()
    }
}

fn full_row(width: u8) -> u8 {
    ((1u16 << width) - 1) as u8
}

fn validate_dimensions(width: u8, height: u8) -> Result<()> {
    if !(1..=MAX_BRUSH_SIZE).contains(&width) || !(1..=MAX_BRUSH_SIZE).contains(&height) {
        return Err(EngineError::invalid_shape(format!("brush must be 1..8 wide and high, got {width}x{height}")));
    }
    Ok(())
}

/// Validate a brush mask without building a brush.
pub fn validate_mask(width: u8, height: u8, rows: &[u8]) -> Result<()> {
    validate_dimensions(width, height)?;
    if rows.len() != height as usize {
        return Err(EngineError::invalid_shape(format!("brush needs {height} rows, got {}", rows.len())));
    }
    let limit = full_row(width);
    if let Some(row) = rows.iter().find(|&&row| row & !limit != 0) {
        return Err(EngineError::invalid_shape(format!("brush row {row:#04x} exceeds {width} bits")));
    }
    Ok(())
}
