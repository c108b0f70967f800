//! Hint search - find a swap that produces an immediate match
//!
//! Exhaustive trial over the board: cells in row-major order, each cell's
//! four neighbors in fixed up/down/left/right order, trial swap on a
//! scratch copy, first hit wins. The fixed iteration order makes the result
//! deterministic for a given grid.
//!
//! `None` means no single swap anywhere produces a match. That is a
//! legitimate dead-board state the caller must handle; the engine does not
//! reshuffle.

use dragonglyph_core::{find_matches, Grid};
use dragonglyph_types::GridPos;

/// Return the first `(from, to)` pair whose trial swap yields a non-empty
/// match set, or `None` if the board has no legal move.
pub fn find_best_move(grid: &Grid) -> Option<(GridPos, GridPos)> {
    let n = grid.size();
    let mut scratch = grid.clone();

    for row in 0..n {
        for col in 0..n {
            let from = GridPos { row, col };
            let neighbors = [
                (row > 0).then(|| GridPos::new(row - 1, col)),
                (row + 1 < n).then(|| GridPos::new(row + 1, col)),
                (col > 0).then(|| GridPos::new(row, col - 1)),
                (col + 1 < n).then(|| GridPos::new(row, col + 1)),
            ];
            for to in neighbors.into_iter().flatten() {
                scratch.swap(from, to);
                let hit = !find_matches(&scratch).is_empty();
                scratch.swap(from, to);
                if hit {
                    return Some((from, to));
                }
            }
        }
    }

    None
}

/// Whether any legal move exists. `false` is the deadlock condition.
pub fn has_any_move(grid: &Grid) -> bool {
    find_best_move(grid).is_some()
}
