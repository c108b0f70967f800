//! DragonGlyph (workspace facade crate).
//!
//! This package keeps the `dragonglyph::{core,engine,persist,types}` public
//! API stable while the implementation lives in dedicated crates under `crates/`.

pub use dragonglyph_core as core;
pub use dragonglyph_engine as engine;
pub use dragonglyph_persist as persist;
pub use dragonglyph_types as types;
