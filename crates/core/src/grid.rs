//! Grid module - the square glyph board
//!
//! The grid is an N x N board (N in 4..=8) where every cell always holds
//! exactly one glyph; no engine operation leaves a gap behind. Storage is a
//! flat row-major vector for cache locality. Coordinates are (row, col) with
//! row 0 at the top; refill gravity pulls survivors toward the highest row
//! index.
//!
//! Positions handed to grid methods must be in bounds. That is a documented
//! precondition, not a checked error: a violation is a programming error and
//! panics rather than corrupting the board.

use dragonglyph_types::{GlyphKind, GridPos, MAX_CELLS, MAX_GRID_SIZE, MIN_GRID_SIZE};

use crate::rng::GlyphSource;

/// One glyph on the board. The id is a grid-scoped monotonic counter that
/// survives moves, so renderers can track a glyph across collapse and swap
/// animations; game logic keys on position alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyph {
    pub id: u64,
    pub kind: GlyphKind,
    pub pos: GridPos,
}

/// The puzzle board - N x N glyphs in flat row-major storage.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    size: usize,
    cells: Vec<Glyph>,
    next_id: u64,
}

impl Grid {
    /// Fill every cell with a uniformly random base glyph drawn from
    /// `source`. Pre-existing runs are not filtered out; a fresh board may
    /// start with an incidental match.
    pub fn generate(size: usize, source: &mut impl GlyphSource) -> Self {
        assert!(
            (MIN_GRID_SIZE..=MAX_GRID_SIZE).contains(&size),
            "grid size {size} outside supported range"
        );

        let mut cells = Vec::with_capacity(size * size);
        let mut next_id = 0u64;
        for row in 0..size {
            for col in 0..size {
                cells.push(Glyph {
                    id: next_id,
                    kind: source.next_base(),
                    pos: GridPos { row, col },
                });
                next_id += 1;
            }
        }
        Self {
            size,
            cells,
            next_id,
        }
    }

    /// Build a board from explicit rows of kinds, for scripted scenarios
    /// and replays. Panics unless `rows` is square and within the supported
    /// size range.
    pub fn from_rows(rows: Vec<Vec<GlyphKind>>) -> Self {
        let size = rows.len();
        assert!(
            (MIN_GRID_SIZE..=MAX_GRID_SIZE).contains(&size),
            "grid size {size} outside supported range"
        );
        assert!(rows.iter().all(|r| r.len() == size), "rows must be square");

        let mut cells = Vec::with_capacity(size * size);
        let mut next_id = 0u64;
        for (row, kinds) in rows.into_iter().enumerate() {
            for (col, kind) in kinds.into_iter().enumerate() {
                cells.push(Glyph {
                    id: next_id,
                    kind,
                    pos: GridPos { row, col },
                });
                next_id += 1;
            }
        }
        Self {
            size,
            cells,
            next_id,
        }
    }

    /// Board side length.
    pub fn size(&self) -> usize {
        self.size
    }

    #[inline(always)]
    fn index(&self, pos: GridPos) -> usize {
        debug_assert!(pos.row < self.size && pos.col < self.size);
        pos.row * self.size + pos.col
    }

    /// Whether a position lies on the board.
    pub fn contains(&self, pos: GridPos) -> bool {
        pos.row < self.size && pos.col < self.size
    }

    /// Glyph at `pos`. Precondition: `pos` is in bounds.
    pub fn glyph(&self, pos: GridPos) -> &Glyph {
        &self.cells[self.index(pos)]
    }

    /// Kind at `pos`. Precondition: `pos` is in bounds.
    #[inline(always)]
    pub fn kind_at(&self, pos: GridPos) -> GlyphKind {
        self.cells[self.index(pos)].kind
    }

    /// All glyphs in row-major order.
    pub fn cells(&self) -> &[Glyph] {
        &self.cells
    }

    /// Exchange the glyphs at `a` and `b` in place, keeping both position
    /// fields in sync with their new cells. Adjacency is not checked here;
    /// see [`is_valid_swap`].
    pub fn swap(&mut self, a: GridPos, b: GridPos) {
        let ia = self.index(a);
        let ib = self.index(b);
        self.cells.swap(ia, ib);
        self.cells[ia].pos = a;
        self.cells[ib].pos = b;
    }

    /// Remove the glyphs at `removed`, drop each column's survivors down
    /// preserving their relative order, and fill the vacated top cells with
    /// fresh base glyphs from `source`. Collapse and refill are one atomic
    /// step: on return every cell is populated and every glyph's position
    /// field matches its cell. Duplicate positions in `removed` are
    /// tolerated; columns are independent.
    pub fn refill(&mut self, removed: &[GridPos], source: &mut impl GlyphSource) {
        let n = self.size;
        let mut dead = [false; MAX_CELLS];
        for &pos in removed {
            dead[self.index(pos)] = true;
        }

        for col in 0..n {
            // Two-pointer pass from the bottom: survivors slide down to the
            // write cursor, then everything above it is newly drawn.
            let mut write = n;
            for read in (0..n).rev() {
                if dead[read * n + col] {
                    continue;
                }
                write -= 1;
                if write != read {
                    let mut glyph = self.cells[read * n + col];
                    glyph.pos = GridPos { row: write, col };
                    self.cells[write * n + col] = glyph;
                }
            }
            for row in 0..write {
                let id = self.next_id;
                self.next_id += 1;
                self.cells[row * n + col] = Glyph {
                    id,
                    kind: source.next_base(),
                    pos: GridPos { row, col },
                };
            }
        }
    }

    /// Every cell populated and every glyph's position field consistent
    /// with its cell. Used by tests to assert the occupancy invariant.
    pub fn positions_consistent(&self) -> bool {
        self.cells.len() == self.size * self.size
            && self.cells.iter().enumerate().all(|(i, glyph)| {
                glyph.pos.row * self.size + glyph.pos.col == i
            })
    }
}

/// True iff `from` and `to` are 4-directionally adjacent (Manhattan distance
/// exactly 1; diagonals never qualify). Both positions are assumed in
/// bounds - out-of-bounds inputs are the caller's responsibility.
pub fn is_valid_swap(from: GridPos, to: GridPos) -> bool {
    let row_diff = from.row.abs_diff(to.row);
    let col_diff = from.col.abs_diff(to.col);
    (row_diff == 1 && col_diff == 0) || (row_diff == 0 && col_diff == 1)
}
