//! Command implementations

pub mod batch;
pub mod score;
pub mod solve;

pub use batch::{BatchConfig, BatchStatistics, DEFAULT_BATCH_GAMES, run_batch};
pub use score::{ScoreResult, score_pair};
pub use solve::solve_word;
