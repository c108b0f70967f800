//! Core puzzle logic - pure, deterministic, and testable
//!
//! This crate contains the whole match-3 engine: grid generation, swap
//! validation, match detection, scoring, collapse/refill, fusion rules, and
//! the session state machine that drives one chamber attempt. It has
//! **zero dependencies** on UI, networking, or I/O, making it:
//!
//! - **Deterministic**: a seeded session replays identically
//! - **Testable**: every rule is a pure function over the grid
//! - **Portable**: runs anywhere a host can call into it
//! - **Synchronous**: every operation runs to completion before returning
//!
//! # Module Structure
//!
//! - [`grid`]: the N x N glyph board with swap, collapse, and refill
//! - [`matches`]: maximal-run match detection over rows and columns
//! - [`scoring`]: match scoring, energy, and the Dragon's Favor aggregate
//! - [`fusion`]: the fixed glyph fusion table
//! - [`rng`]: seeded LCG and scriptable glyph streams
//! - [`session`]: one chamber attempt - swaps, cascades, timer, blessings
//! - [`snapshot`]: fixed-size copies for renderers
//!
//! # Turn protocol
//!
//! A turn is: validate adjacency, swap in place, then detect-score-refill
//! in a loop until detection comes up empty. The combo multiplier advances
//! once per cascade iteration and resets when the loop terminates. Cascade
//! depth is unbounded; the loop runs to its natural fixed point.
//!
//! # Example
//!
//! ```
//! use dragonglyph_core::PuzzleSession;
//! use dragonglyph_types::{default_chambers, Difficulty, GridPos};
//!
//! let chamber = default_chambers().remove(0);
//! let mut session = PuzzleSession::new(chamber, Difficulty::Hatchling, 12345);
//!
//! // Diagonal pairs are never a legal swap.
//! assert!(session
//!     .try_swap(GridPos::new(0, 0), GridPos::new(1, 1))
//!     .is_none());
//!
//! // An adjacent pair is applied and resolved synchronously.
//! let outcome = session
//!     .try_swap(GridPos::new(0, 0), GridPos::new(0, 1))
//!     .unwrap();
//! assert_eq!(session.moves(), 1);
//! assert_eq!(session.score(), outcome.score_gained);
//! ```

pub mod fusion;
pub mod grid;
pub mod matches;
pub mod rng;
pub mod scoring;
pub mod session;
pub mod snapshot;

pub use dragonglyph_types as types;

// Re-export commonly used items for convenience
pub use fusion::{can_fuse, fuse};
pub use grid::{is_valid_swap, Glyph, Grid};
pub use matches::{find_matches, MatchSet};
pub use rng::{GlyphSource, ScriptedSource, SimpleRng};
pub use scoring::{dragons_favor, energy_gain, score_matches, MatchScore};
pub use session::{resolve_cascades, PuzzleSession, SwapOutcome};
pub use snapshot::SessionSnapshot;
