//! Search that drives the core engine from outside: hint lookup over trial
//! swaps. Pure and read-only with respect to the caller's grid.

pub mod hint;

pub use hint::{find_best_move, has_any_move};
