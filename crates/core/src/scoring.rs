//! Scoring module - match scoring, energy, and Dragon's Favor
//!
//! Match points are 10 per power level of every matched glyph, a flat +50
//! when a single detection pass matched 5 or more, then the difficulty and
//! combo multipliers applied to the sum and floored. The combo multiplier is
//! caller-owned state (see the session module); this module is pure
//! arithmetic.

use dragonglyph_types::{
    Difficulty, GridPos, BIG_MATCH_BONUS, BIG_MATCH_THRESHOLD, ENERGY_PER_GLYPH, POWER_SCORE_UNIT,
};

use crate::grid::Grid;

/// Score breakdown for one detection pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MatchScore {
    /// Sum of power level x 10 over the matched glyphs.
    pub base: u32,
    /// Flat bonus for matching [`BIG_MATCH_THRESHOLD`] or more at once.
    pub big_match_bonus: u32,
    /// `(base + bonus) x difficulty multiplier x combo`, floored.
    pub total: u32,
}

/// Score the glyphs at `matches` under `difficulty` and the current combo
/// multiplier.
pub fn score_matches(
    grid: &Grid,
    matches: &[GridPos],
    difficulty: Difficulty,
    combo_multiplier: u32,
) -> MatchScore {
    let base: u32 = matches
        .iter()
        .map(|&pos| grid.kind_at(pos).power_level() * POWER_SCORE_UNIT)
        .sum();
    let big_match_bonus = if matches.len() >= BIG_MATCH_THRESHOLD {
        BIG_MATCH_BONUS
    } else {
        0
    };
    let total = ((base + big_match_bonus) as f64
        * difficulty.score_multiplier()
        * combo_multiplier as f64)
        .floor() as u32;
    MatchScore {
        base,
        big_match_bonus,
        total,
    }
}

/// Energy awarded for a detection pass: 5 per matched glyph.
pub fn energy_gain(matched: usize) -> u32 {
    matched as u32 * ENERGY_PER_GLYPH
}

/// Dragon's Favor: the cross-session ranking aggregate.
/// `score + energy x 2 + chambers completed x 100`.
pub fn dragons_favor(score: u32, energy: u32, chambers_completed: u32) -> u32 {
    score
        .saturating_add(energy.saturating_mul(2))
        .saturating_add(chambers_completed.saturating_mul(100))
}
