//! Match detection - maximal run scanning
//!
//! Every row and every column is scanned independently for maximal runs of
//! three or more equal kinds. The result is the union of all qualifying
//! runs: an L or T shaped intersection of a horizontal and a vertical run
//! contributes its shared cell once. Detection is pure and must be re-run
//! after every board mutation; cascades rely on fresh scans.

use arrayvec::ArrayVec;

use dragonglyph_types::{GridPos, MATCH_RUN, MAX_CELLS};

use crate::grid::Grid;

/// Matched positions in row-major order, no duplicates. Bounded by the
/// board itself, so the set never allocates.
pub type MatchSet = ArrayVec<GridPos, MAX_CELLS>;

/// Find every cell that belongs to a run of [`MATCH_RUN`] or more equal
/// kinds in its row or column. Runs of one or two never match.
pub fn find_matches(grid: &Grid) -> MatchSet {
    let n = grid.size();
    let mut marked = [false; MAX_CELLS];

    // Horizontal runs.
    for row in 0..n {
        let mut streak = 1;
        let mut current = grid.kind_at(GridPos { row, col: 0 });
        for col in 1..=n {
            let kind = (col < n).then(|| grid.kind_at(GridPos { row, col }));
            if kind == Some(current) {
                streak += 1;
            } else {
                if streak >= MATCH_RUN {
                    for c in (col - streak)..col {
                        marked[row * n + c] = true;
                    }
                }
                if let Some(kind) = kind {
                    streak = 1;
                    current = kind;
                }
            }
        }
    }

    // Vertical runs.
    for col in 0..n {
        let mut streak = 1;
        let mut current = grid.kind_at(GridPos { row: 0, col });
        for row in 1..=n {
            let kind = (row < n).then(|| grid.kind_at(GridPos { row, col }));
            if kind == Some(current) {
                streak += 1;
            } else {
                if streak >= MATCH_RUN {
                    for r in (row - streak)..row {
                        marked[r * n + col] = true;
                    }
                }
                if let Some(kind) = kind {
                    streak = 1;
                    current = kind;
                }
            }
        }
    }

    let mut matches = MatchSet::new();
    for row in 0..n {
        for col in 0..n {
            if marked[row * n + col] {
                matches.push(GridPos { row, col });
            }
        }
    }
    matches
}
