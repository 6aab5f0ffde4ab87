//! Line drawing algorithms
//!
//! Implements Bresenham's line algorithm for drawing lines between two points.

use sprite_engine::Position;

/// Generate all points on a line from p0 to p1 using Bresenham's algorithm
///
/// Both endpoints are included and every step is 8-connected. The walk always
/// starts at the smaller endpoint, so swapping the endpoints yields the same
/// cells in reverse order.
pub fn get_line_points(p0: Position, p1: Position) -> Vec<Position> {
    if p1 < p0 {
        let mut points = bresenham(p1, p0);
        points.reverse();
        return points;
    }
    bresenham(p0, p1)
}

fn bresenham(p0: Position, p1: Position) -> Vec<Position> {
    let dx = (p1.x - p0.x).abs();
    let dy = -(p1.y - p0.y).abs();
    let sx = if p0.x < p1.x { 1 } else { -1 };
    let sy = if p0.y < p1.y { 1 } else { -1 };
    let mut err = dx + dy;

    let mut x = p0.x;
    let mut y = p0.y;
    let mut points = Vec::new();

    loop {
        points.push(Position::new(x, y));

        if x == p1.x && y == p1.y {
            break;
        }

        let e2 = 2 * err;
        if e2 >= dy {
            if x == p1.x {
                break;
            }
            err += dy;
            x += sx;
        }
        if e2 <= dx {
            if y == p1.y {
                break;
            }
            err += dx;
            y += sy;
        }
    }

    points
}
