//! Match detection tests - observable run-scan behavior

use dragonglyph::core::{find_matches, Grid};
use dragonglyph::types::GlyphKind::*;
use dragonglyph::types::GridPos;

#[test]
fn test_no_match_board_returns_empty_set() {
    let grid = Grid::from_rows(vec![
        vec![Fire, Frost, Storm, Fire],
        vec![Frost, Storm, Fire, Frost],
        vec![Storm, Fire, Frost, Storm],
        vec![Fire, Frost, Storm, Fire],
    ]);
    assert!(find_matches(&grid).is_empty());
}

#[test]
fn test_row_of_three_returns_exactly_those_positions() {
    // [Fire, Fire, Fire, Frost] in row 0.
    let grid = Grid::from_rows(vec![
        vec![Fire, Fire, Fire, Frost],
        vec![Frost, Storm, Earth, Shadow],
        vec![Storm, Earth, Shadow, Light],
        vec![Earth, Shadow, Light, Fire],
    ]);
    let matches = find_matches(&grid);
    assert_eq!(
        matches.as_slice(),
        &[GridPos::new(0, 0), GridPos::new(0, 1), GridPos::new(0, 2)]
    );
}

#[test]
fn test_row_of_four_returns_all_four() {
    let grid = Grid::from_rows(vec![
        vec![Fire, Fire, Fire, Fire],
        vec![Frost, Storm, Earth, Shadow],
        vec![Storm, Earth, Shadow, Light],
        vec![Earth, Shadow, Light, Fire],
    ]);
    let matches = find_matches(&grid);
    assert_eq!(matches.len(), 4);
    for col in 0..4 {
        assert!(matches.contains(&GridPos::new(0, col)));
    }
}

#[test]
fn test_horizontal_and_vertical_union_without_duplicates() {
    // T shape of Storm: full row 1 plus a vertical run through column 1.
    let grid = Grid::from_rows(vec![
        vec![Fire, Storm, Earth, Shadow, Light],
        vec![Storm, Storm, Storm, Storm, Storm],
        vec![Fire, Storm, Earth, Shadow, Light],
        vec![Earth, Storm, Light, Fire, Frost],
        vec![Shadow, Light, Fire, Frost, Earth],
    ]);
    let matches = find_matches(&grid);

    // 5 in the row + 3 extra in the column, the shared cell counted once.
    assert_eq!(matches.len(), 8);
    let mut sorted: Vec<GridPos> = matches.iter().copied().collect();
    sorted.dedup();
    assert_eq!(sorted.len(), 8);
    assert!(matches.contains(&GridPos::new(1, 1)));
    assert!(matches.contains(&GridPos::new(0, 1)));
    assert!(matches.contains(&GridPos::new(3, 1)));
}

#[test]
fn test_runs_of_two_never_match() {
    let grid = Grid::from_rows(vec![
        vec![Fire, Fire, Storm, Storm],
        vec![Frost, Frost, Earth, Earth],
        vec![Storm, Storm, Fire, Fire],
        vec![Earth, Earth, Frost, Frost],
    ]);
    assert!(find_matches(&grid).is_empty());
}

#[test]
fn test_detection_is_pure() {
    let grid = Grid::from_rows(vec![
        vec![Fire, Fire, Fire, Frost],
        vec![Frost, Storm, Earth, Shadow],
        vec![Storm, Earth, Shadow, Light],
        vec![Earth, Shadow, Light, Fire],
    ]);
    let before = grid.clone();
    let first = find_matches(&grid);
    let second = find_matches(&grid);
    assert_eq!(first, second);
    assert_eq!(grid, before);
}
