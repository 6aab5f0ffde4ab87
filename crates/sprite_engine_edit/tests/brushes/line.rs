use pretty_assertions::assert_eq;
use sprite_engine_edit::{Position, brushes::get_line_points};

#[test]
fn test_line_horizontal() {
    let points = get_line_points(Position::new(0, 2), Position::new(4, 2));
    assert_eq!(points, (0..=4).map(|x| Position::new(x, 2)).collect::<Vec<_>>());
}

#[test]
fn test_line_diagonal() {
    let points = get_line_points(Position::new(0, 0), Position::new(3, 3));
    assert_eq!(points, vec![Position::new(0, 0), Position::new(1, 1), Position::new(2, 2), Position::new(3, 3)]);
}

#[test]
fn test_line_reverse_has_same_point_set() {
    let endpoints = [
        (Position::new(0, 0), Position::new(7, 3)),
        (Position::new(1, 6), Position::new(5, 0)),
        (Position::new(0, 0), Position::new(15, 15)),
        (Position::new(2, 9), Position::new(2, 1)),
    ];
    for (a, b) in endpoints {
        let forward = get_line_points(a, b);
        let mut backward = get_line_points(b, a);
        backward.reverse();
        assert_eq!(forward, backward, "line {a} -> {b}");
    }
}

#[test]
fn test_line_includes_both_endpoints() {
    let points = get_line_points(Position::new(6, 1), Position::new(0, 4));
    assert_eq!(points.first(), Some(&Position::new(6, 1)));
    assert_eq!(points.last(), Some(&Position::new(0, 4)));
    assert_eq!(points.len(), 7);
}
