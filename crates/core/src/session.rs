//! Session module - one chamber attempt from first swap to win or loss
//!
//! Ties the core pieces together: grid, match detection, scoring, and
//! refill. A session owns its grid exclusively for the duration of an
//! attempt and resolves every swap synchronously to a fixed point; there is
//! no internal clock and no deferred work. The host drives time by calling
//! [`PuzzleSession::tick`] from its own timer and renders from snapshots
//! between calls.
//!
//! The cascade loop is also exposed as [`resolve_cascades`] so replays and
//! tests can run the turn protocol over a scripted refill stream.

use dragonglyph_types::{Chamber, Difficulty, GridPos};

use crate::grid::{is_valid_swap, Grid};
use crate::matches::find_matches;
use crate::rng::{GlyphSource, SimpleRng};
use crate::scoring::{energy_gain, score_matches};
use crate::snapshot::SessionSnapshot;

/// Dragon's Fury: fixed score multiplier applied in place of the combo
/// multiplier, for this many match-producing swaps.
pub const FURY_MULTIPLIER: u32 = 2;
pub const FURY_SWAP_COUNT: u8 = 3;

/// Aggregate result of one swap's full cascade resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SwapOutcome {
    /// Total glyphs cleared across all cascade iterations.
    pub glyphs_matched: u32,
    /// Number of detection passes that found matches.
    pub cascades: u32,
    pub score_gained: u32,
    pub energy_gained: u32,
}

impl SwapOutcome {
    pub fn matched_any(&self) -> bool {
        self.cascades > 0
    }
}

/// Run the turn protocol on `grid` until detection comes up empty: detect,
/// score at the current combo multiplier, refill, increment the multiplier,
/// repeat. The terminating empty pass resets the multiplier to 1. There is
/// no cap on cascade depth; a long chain resolves fully before returning.
///
/// `multiplier_override` replaces the combo multiplier in scoring while
/// active (Dragon's Fury); the combo still advances underneath it.
pub fn resolve_cascades(
    grid: &mut Grid,
    difficulty: Difficulty,
    combo_multiplier: &mut u32,
    multiplier_override: Option<u32>,
    source: &mut impl GlyphSource,
) -> SwapOutcome {
    let mut outcome = SwapOutcome::default();

    loop {
        let matches = find_matches(grid);
        if matches.is_empty() {
            *combo_multiplier = 1;
            return outcome;
        }

        let multiplier = multiplier_override.unwrap_or(*combo_multiplier);
        let score = score_matches(grid, &matches, difficulty, multiplier);
        let energy = energy_gain(matches.len());

        outcome.glyphs_matched += matches.len() as u32;
        outcome.cascades += 1;
        outcome.score_gained = outcome.score_gained.saturating_add(score.total);
        outcome.energy_gained = outcome.energy_gained.saturating_add(energy);

        grid.refill(&matches, source);
        *combo_multiplier += 1;
    }
}

/// State of one chamber attempt. The type parameter is the refill stream;
/// hosts use the seeded default, replays script it.
#[derive(Debug, Clone)]
pub struct PuzzleSession<S: GlyphSource = SimpleRng> {
    grid: Grid,
    chamber: Chamber,
    difficulty: Difficulty,
    source: S,
    score: u32,
    energy: u32,
    moves: u32,
    combo_multiplier: u32,
    time_remaining_ms: u32,
    untimed: bool,
    fury_swaps_remaining: u8,
    paused: bool,
    game_over: bool,
    victory: bool,
}

impl PuzzleSession<SimpleRng> {
    /// Start a fresh attempt: a newly generated grid and a timer scaled by
    /// the difficulty. A retry is simply a new session.
    pub fn new(chamber: Chamber, difficulty: Difficulty, seed: u32) -> Self {
        let mut source = SimpleRng::new(seed);
        let grid = Grid::generate(chamber.grid_size, &mut source);
        Self::from_parts(chamber, difficulty, grid, source)
    }
}

impl<S: GlyphSource> PuzzleSession<S> {
    /// Start an attempt over an explicit grid and refill stream, for
    /// replays and scripted scenarios. Panics if the grid size does not
    /// match the chamber's.
    pub fn with_source(chamber: Chamber, difficulty: Difficulty, grid: Grid, source: S) -> Self {
        Self::from_parts(chamber, difficulty, grid, source)
    }

    fn from_parts(chamber: Chamber, difficulty: Difficulty, grid: Grid, source: S) -> Self {
        assert_eq!(
            grid.size(),
            chamber.grid_size,
            "grid size must match the chamber"
        );
        let scaled_secs = (chamber.time_limit_secs as f64 * difficulty.time_scale()) as u32;
        let untimed = chamber.time_limit_secs == 0;
        Self {
            grid,
            chamber,
            difficulty,
            source,
            score: 0,
            energy: 0,
            moves: 0,
            combo_multiplier: 1,
            time_remaining_ms: scaled_secs * 1000,
            untimed,
            fury_swaps_remaining: 0,
            paused: false,
            game_over: false,
            victory: false,
        }
    }

    /// Attempt a swap. Returns `None` and leaves the grid untouched when
    /// the pair is not 4-directionally adjacent or the session is over or
    /// paused. A valid swap is applied and resolved to a fixed point even
    /// when it produces no match; the swap is not reverted.
    pub fn try_swap(&mut self, from: GridPos, to: GridPos) -> Option<SwapOutcome> {
        if self.paused || self.game_over {
            return None;
        }
        if !is_valid_swap(from, to) {
            return None;
        }

        self.grid.swap(from, to);
        self.moves += 1;

        let fury = (self.fury_swaps_remaining > 0).then_some(FURY_MULTIPLIER);
        let outcome = resolve_cascades(
            &mut self.grid,
            self.difficulty,
            &mut self.combo_multiplier,
            fury,
            &mut self.source,
        );

        self.score = self.score.saturating_add(outcome.score_gained);
        self.energy = self.energy.saturating_add(outcome.energy_gained);
        if outcome.matched_any() && self.fury_swaps_remaining > 0 {
            self.fury_swaps_remaining -= 1;
        }
        if self.score >= self.chamber.target_score {
            self.victory = true;
            self.game_over = true;
        }

        Some(outcome)
    }

    /// Advance the external clock. Defeat triggers when the timer reaches
    /// zero; untimed chambers ignore ticks entirely.
    pub fn tick(&mut self, elapsed_ms: u32) {
        if self.paused || self.game_over || self.untimed {
            return;
        }
        self.time_remaining_ms = self.time_remaining_ms.saturating_sub(elapsed_ms);
        if self.time_remaining_ms == 0 {
            self.game_over = true;
        }
    }

    pub fn pause(&mut self) {
        self.paused = true;
    }

    pub fn resume(&mut self) {
        self.paused = false;
    }

    /// Timewyrm's Patience: extend the remaining time.
    pub fn extend_time(&mut self, secs: u32) {
        if self.untimed || self.game_over {
            return;
        }
        self.time_remaining_ms = self.time_remaining_ms.saturating_add(secs * 1000);
    }

    /// Scale Shatter: remove one glyph and refill its column. No scoring
    /// and no match pass; whatever the refill leaves behind waits for the
    /// next swap. Precondition: `pos` is in bounds.
    pub fn shatter(&mut self, pos: GridPos) {
        if self.paused || self.game_over {
            return;
        }
        self.grid.refill(&[pos], &mut self.source);
    }

    /// Dragon's Fury: the next [`FURY_SWAP_COUNT`] match-producing swaps
    /// score with a fixed x2 multiplier in place of the combo multiplier.
    pub fn ignite_fury(&mut self) {
        self.fury_swaps_remaining = FURY_SWAP_COUNT;
    }

    pub fn fury_active(&self) -> bool {
        self.fury_swaps_remaining > 0
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn chamber(&self) -> &Chamber {
        &self.chamber
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn energy(&self) -> u32 {
        self.energy
    }

    pub fn moves(&self) -> u32 {
        self.moves
    }

    pub fn combo_multiplier(&self) -> u32 {
        self.combo_multiplier
    }

    pub fn time_remaining_ms(&self) -> u32 {
        self.time_remaining_ms
    }

    pub fn untimed(&self) -> bool {
        self.untimed
    }

    pub fn paused(&self) -> bool {
        self.paused
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn victory(&self) -> bool {
        self.victory
    }

    pub fn snapshot_into(&self, out: &mut SessionSnapshot) {
        out.clear();
        out.size = self.grid.size() as u8;
        for glyph in self.grid.cells() {
            out.kinds[glyph.pos.row][glyph.pos.col] = glyph.kind.code();
            out.ids[glyph.pos.row][glyph.pos.col] = glyph.id;
        }
        out.score = self.score;
        out.energy = self.energy;
        out.moves = self.moves;
        out.combo_multiplier = self.combo_multiplier;
        out.time_remaining_ms = self.time_remaining_ms;
        out.paused = self.paused;
        out.game_over = self.game_over;
        out.victory = self.victory;
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        let mut snapshot = SessionSnapshot::default();
        self.snapshot_into(&mut snapshot);
        snapshot
    }
}
