//! Tool definitions for sprite editing
//!
//! Shape tools commit on the second click. The pending first click is kept in
//! [`ShapeState`].

use serde::{Deserialize, Serialize};
use sprite_engine::{EraserShape, MAX_ERASER_SIZE, Position};

use crate::brushes::{get_ellipse_points, get_line_points, get_rectangle_points};

/// Available editing tools
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tool {
    // === Freehand ===
    /// Stamp the active brush
    #[default]
    Pencil,
    /// Stamp a square or round eraser, never changes the sprite colour
    Eraser { shape: EraserShape, size: u8 },

    // === Region ===
    /// Flood fill area
    Fill,

    // === Two-click shapes ===
    /// Draw straight lines
    Line,
    /// Draw rectangle outline
    Rect,
    /// Draw filled rectangle
    RectFill,
    /// Draw ellipse outline
    Ellipse,
    /// Draw filled ellipse
    EllipseFill,
}

impl Tool {
    /// Eraser with the size clamped to `1..=4`.
    pub fn eraser(shape: EraserShape, size: u8) -> Self {
        Tool::Eraser {
            shape,
            size: size.clamp(1, MAX_ERASER_SIZE),
        }
    }

    pub fn shape_kind(self) -> Option<ShapeKind> {
        match self {
            Tool::Line => Some(ShapeKind::Line),
            Tool::Rect => Some(ShapeKind::Rect),
            Tool::RectFill => Some(ShapeKind::RectFill),
            Tool::Ellipse => Some(ShapeKind::Ellipse),
            Tool::EllipseFill => Some(ShapeKind::EllipseFill),
            Tool::Pencil | Tool::Eraser { .. } | Tool::Fill => None,
        }
    }

    /// Pencil and eraser paint while the pointer is dragged.
    pub fn is_freehand(self) -> bool {
        matches!(self, Tool::Pencil | Tool::Eraser { .. })
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Line,
    Rect,
    RectFill,
    Ellipse,
    EllipseFill,
}

impl ShapeKind {
    /// Raster points between the two corners or endpoints.
    pub fn points(self, start: Position, end: Position) -> Vec<Position> {
        match self {
            ShapeKind::Line => get_line_points(start, end),
            ShapeKind::Rect => get_rectangle_points(start, end, false),
            ShapeKind::RectFill => get_rectangle_points(start, end, true),
            ShapeKind::Ellipse => get_ellipse_points(start, end, false),
            ShapeKind::EllipseFill => get_ellipse_points(start, end, true),
        }
    }
}

/// Two-click shape machine: `Idle -> PendingStart -> Idle`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ShapeState {
    #[default]
    Idle,
    /// First click placed, `value` is the pixel value of the pressed button
    PendingStart { start: Position, value: bool },
}
