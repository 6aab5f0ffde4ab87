//! Rectangle point sets

use sprite_engine::Position;

/// Cells of the box spanned by two corners, in any order.
///
/// The outline variant degenerates to a single row or column when the box is
/// one cell high or wide; no cell is reported twice.
pub fn get_rectangle_points(p0: Position, p1: Position, filled: bool) -> Vec<Position> {
    let min = p0.min(p1);
    let max = p0.max(p1);
    let mut points = Vec::new();

    if filled {
        for y in min.y..=max.y {
            for x in min.x..=max.x {
                points.push(Position::new(x, y));
            }
        }
        return points;
    }

    for x in min.x..=max.x {
        points.push(Position::new(x, min.y));
    }
    if max.y > min.y {
        for x in min.x..=max.x {
            points.push(Position::new(x, max.y));
        }
    }
    for y in (min.y + 1)..max.y {
        points.push(Position::new(min.x, y));
        if max.x > min.x {
            points.push(Position::new(max.x, y));
        }
    }
    points
}
