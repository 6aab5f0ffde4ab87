//! Ellipse point sets
//!
//! The ellipse is inscribed in the box spanned by two corners. A cell belongs
//! to it when its pixel centre lies inside the normalised ellipse.

use std::collections::HashSet;

use sprite_engine::Position;

const RADIUS_EPSILON: f64 = 1e-6;
const INSIDE_EPSILON: f64 = 1e-9;

/// Inside cells (filled) or the boundary cells of that region (outline).
///
/// A boundary cell is an inside cell with a 4-neighbour that is outside the
/// ellipse or outside the box.
pub fn get_ellipse_points(p0: Position, p1: Position, filled: bool) -> Vec<Position> {
    let min = p0.min(p1);
    let max = p0.max(p1);
    let w = f64::from(max.x - min.x + 1);
    let h = f64::from(max.y - min.y + 1);

    let cx = f64::from(min.x) + (w - 1.0) / 2.0;
    let cy = f64::from(min.y) + (h - 1.0) / 2.0;
    let rx = if w > 1.0 { (w - 1.0) / 2.0 } else { 0.5 };
    let ry = if h > 1.0 { (h - 1.0) / 2.0 } else { 0.5 };

    let is_inside = |x: i32, y: i32| {
        let nx = (f64::from(x) + 0.5 - (cx + 0.5)) / (rx + RADIUS_EPSILON);
        let ny = (f64::from(y) + 0.5 - (cy + 0.5)) / (ry + RADIUS_EPSILON);
        nx * nx + ny * ny <= 1.0 + INSIDE_EPSILON
    };

    let mut inside = Vec::new();
    for y in min.y..=max.y {
        for x in min.x..=max.x {
            if is_inside(x, y) {
                inside.push(Position::new(x, y));
            }
        }
    }
    if filled {
        return inside;
    }

    let lookup: HashSet<Position> = inside.iter().copied().collect();
    inside
        .into_iter()
        .filter(|p| {
            [(-1, 0), (1, 0), (0, -1), (0, 1)].iter().any(|&(dx, dy)| {
                let n = Position::new(p.x + dx, p.y + dy);
                n.x < min.x || n.x > max.x || n.y < min.y || n.y > max.y || !lookup.contains(&n)
            })
        })
        .collect()
}
