//! Flood fill (4-connected BFS)

use std::collections::{HashSet, VecDeque};

use sprite_engine::{Position, Result};

use super::PixelCanvas;

/// Fill the 4-connected region around `start` with `value`.
///
/// The target value is read at `start` before anything is written. Cells are
/// re-read when visited since plotting may already have changed them. Returns
/// the number of visited cells that were plotted, 0 when the start is out of
/// bounds or already holds `value`.
pub fn flood_fill<T: PixelCanvas>(target: &mut T, start: Position, value: bool) -> Result<usize> {
    if !target.is_valid(start) {
        return Ok(0);
    }
    let target_value = target.get_pixel(start);
    if target_value == value {
        return Ok(0);
    }

    let mut visited = HashSet::new();
    let mut queue = VecDeque::new();
    queue.push_back(start);
    let mut changed = 0;

    while let Some(pos) = queue.pop_front() {
        if !visited.insert(pos) {
            continue;
        }
        if target.get_pixel(pos) != target_value {
            continue;
        }
        target.plot(pos, value)?;
        changed += 1;

        for (dx, dy) in [(-1, 0), (1, 0), (0, -1), (0, 1)] {
            let next = Position::new(pos.x + dx, pos.y + dy);
            if target.is_valid(next) && !visited.contains(&next) {
                queue.push_back(next);
            }
        }
    }
    Ok(changed)
}
