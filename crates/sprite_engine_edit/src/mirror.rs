//! Symmetry mirror
//!
//! Expands one edited cell into its mirror images. The enabled axes are
//! applied in a fixed order (horizontal, vertical, diagonal, anti-diagonal),
//! each one adding the reflection of every point collected so far, which
//! yields at most 8 distinct cells.

use bitflags::bitflags;
use sprite_engine::Position;

bitflags! {
    /// Toggleable reflection axes of the editing canvas.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct MirrorAxes: u8 {
        /// Flip top/bottom: `(x, y) -> (x, H-1-y)`
        const HORIZONTAL = 1 << 0;
        /// Flip left/right: `(x, y) -> (W-1-x, y)`
        const VERTICAL = 1 << 1;
        /// "\" diagonal: `(x, y) -> (y, x)`
        const DIAGONAL = 1 << 2;
        /// "/" diagonal: `(x, y) -> (H-1-y, W-1-x)`
        const ANTI_DIAGONAL = 1 << 3;
    }
}

impl MirrorAxes {
    fn reflect(axis: MirrorAxes, p: Position, width: i32, height: i32) -> Position {
        if axis == MirrorAxes::HORIZONTAL {
            Position::new(p.x, height - 1 - p.y)
        } else if axis == MirrorAxes::VERTICAL {
            Position::new(width - 1 - p.x, p.y)
        } else if axis == MirrorAxes::DIAGONAL {
            Position::new(p.y, p.x)
        } else {
            Position::new(height - 1 - p.y, width - 1 - p.x)
        }
    }

    /// Mirror closure of `pos` on a `width`×`height` canvas.
    ///
    /// The source point comes first. Points are not clipped: on non-square
    /// canvases the diagonal images can fall outside.
    pub fn expand(self, pos: Position, width: i32, height: i32) -> Vec<Position> {
        let mut points = vec![pos];
        for axis in [MirrorAxes::HORIZONTAL, MirrorAxes::VERTICAL, MirrorAxes::DIAGONAL, MirrorAxes::ANTI_DIAGONAL] {
            if !self.contains(axis) {
                continue;
            }
            let images: Vec<Position> = points.iter().map(|&p| Self::reflect(axis, p, width, height)).collect();
            for image in images {
                if !points.contains(&image) {
                    points.push(image);
                }
            }
        }
        points
    }
}
