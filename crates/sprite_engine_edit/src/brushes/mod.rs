//! Raster primitives for sprite editing
//!
//! Every primitive works on integer cells of a bounded canvas and returns a
//! point list. Callers clip against the canvas before applying. Flood fill is
//! the exception: it reads and writes through a [`PixelCanvas`] because each
//! step depends on the pixels written by the previous ones.
//!
//! - Line drawing (Bresenham algorithm)
//! - Rectangle outline and fill
//! - Ellipse outline and fill (pixel centre test)
//! - Flood fill (4-connected BFS)

pub mod ellipse;
pub mod flood_fill;
pub mod line;
pub mod rectangle;

pub use ellipse::get_ellipse_points;
pub use flood_fill::flood_fill;
pub use line::get_line_points;
pub use rectangle::get_rectangle_points;

use sprite_engine::{Position, Result};

/// A 1-bit surface the flood fill can read and plot on
///
/// Plotting is allowed to touch more than the given cell (mirrored edits do),
/// which is why flood fill re-reads every cell when it is visited.
pub trait PixelCanvas {
    /// Get the width of the drawable area
    fn width(&self) -> i32;

    /// Get the height of the drawable area
    fn height(&self) -> i32;

    fn get_pixel(&self, pos: Position) -> bool;

    /// Write a cell, possibly along with its mirror images
    fn plot(&mut self, pos: Position, value: bool) -> Result<()>;

    /// Check if a position is within bounds
    fn is_valid(&self, pos: Position) -> bool {
        pos.is_inside(self.width(), self.height())
    }
}
