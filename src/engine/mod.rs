//! Constraint-based solving engine
//!
//! The candidate-pruning core: constraint accumulation, pool filtering,
//! stochastic guess selection, and the per-game simulation loop.

mod constraints;
mod game;
mod pruner;
mod selector;

pub use constraints::ConstraintSet;
pub use game::{GameResult, MAX_ROUNDS, Outcome, RoundRecord, play};
pub use pruner::prune;
pub use selector::{SAMPLE_DRAWS, select_guess};
