//! RNG module - deterministic glyph generation
//!
//! Grid generation and refill draw base glyphs through the [`GlyphSource`]
//! trait. The default source is a simple LCG so a seeded session replays
//! identically; tests and replays can script the exact stream instead.

use std::collections::VecDeque;

use dragonglyph_types::GlyphKind;

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        // Multiply-shift keeps only the high bits; the low bits of an LCG
        // cycle with tiny periods and must not reach a modulus.
        ((self.next_u32() as u64 * max as u64) >> 32) as u32
    }

    /// Get the current RNG state (for restarting a session with the same stream)
    pub fn seed(&self) -> u32 {
        self.state
    }
}

/// A stream of base glyphs consumed by generation and refill.
pub trait GlyphSource {
    fn next_base(&mut self) -> GlyphKind;
}

impl GlyphSource for SimpleRng {
    fn next_base(&mut self) -> GlyphKind {
        GlyphKind::BASE[self.next_range(GlyphKind::BASE.len() as u32) as usize]
    }
}

/// A scripted glyph stream for deterministic replays and tests.
/// Panics when the script runs dry; callers supply exactly what a scenario
/// consumes.
#[derive(Debug, Clone)]
pub struct ScriptedSource {
    queue: VecDeque<GlyphKind>,
}

impl ScriptedSource {
    pub fn new(kinds: impl IntoIterator<Item = GlyphKind>) -> Self {
        Self {
            queue: kinds.into_iter().collect(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.queue.len()
    }
}

impl GlyphSource for ScriptedSource {
    fn next_base(&mut self) -> GlyphKind {
        self.queue.pop_front().expect("scripted glyph source exhausted")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rng_deterministic() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(12345);

        // Same seed should produce same sequence
        for _ in 0..100 {
            assert_eq!(rng1.next_u32(), rng2.next_u32());
        }
    }

    #[test]
    fn test_rng_different_seeds() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(54321);

        let v1 = rng1.next_u32();
        let v2 = rng2.next_u32();
        assert_ne!(v1, v2);
    }

    #[test]
    fn test_rng_draws_base_kinds_only() {
        let mut rng = SimpleRng::new(7);
        for _ in 0..200 {
            assert!(rng.next_base().is_base());
        }
    }

    #[test]
    fn test_rng_reaches_every_base_kind() {
        let mut rng = SimpleRng::new(3);
        let mut seen = [false; 6];
        for _ in 0..600 {
            let kind = rng.next_base();
            let idx = GlyphKind::BASE.iter().position(|&k| k == kind).unwrap();
            seen[idx] = true;
        }
        assert!(seen.iter().all(|&s| s), "a base kind never appeared: {seen:?}");
    }

    #[test]
    fn test_scripted_source_in_order() {
        let mut source =
            ScriptedSource::new([GlyphKind::Fire, GlyphKind::Frost, GlyphKind::Storm]);
        assert_eq!(source.next_base(), GlyphKind::Fire);
        assert_eq!(source.next_base(), GlyphKind::Frost);
        assert_eq!(source.remaining(), 1);
        assert_eq!(source.next_base(), GlyphKind::Storm);
    }

    #[test]
    #[should_panic(expected = "exhausted")]
    fn test_scripted_source_panics_when_dry() {
        let mut source = ScriptedSource::new([]);
        source.next_base();
    }
}
