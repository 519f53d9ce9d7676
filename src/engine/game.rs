//! Single-game simulation loop
//!
//! Drives up to six rounds of select -> evaluate -> accumulate -> prune
//! against one secret word, recording each round so callers can render the
//! whole game without the engine doing any I/O.

use super::{ConstraintSet, prune, select_guess};
use crate::core::{Feedback, Word};
use rand::Rng;

/// Maximum rounds before a game counts as failed.
pub const MAX_ROUNDS: usize = 6;

/// One round of a simulated game
#[derive(Debug, Clone)]
pub struct RoundRecord {
    pub guess: Word,
    pub feedback: Feedback,
    /// Candidate pool size before this round's pruning
    pub pool_before: usize,
    /// Candidate pool size after this round's pruning (unchanged on a win)
    pub pool_after: usize,
}

/// Terminal state of a simulated game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The guess matched the secret on the given round (1-6)
    Solved { round: usize },
    /// Six rounds elapsed without a match
    Exhausted,
    /// The candidate pool emptied before the given round could guess
    OutOfCandidates { round: usize },
}

impl Outcome {
    /// Check whether the game ended in a win
    #[inline]
    #[must_use]
    pub const fn is_solved(self) -> bool {
        matches!(self, Self::Solved { .. })
    }

    /// The winning round, if any
    #[inline]
    #[must_use]
    pub const fn solved_round(self) -> Option<usize> {
        match self {
            Self::Solved { round } => Some(round),
            _ => None,
        }
    }
}

/// Full record of one simulated game
#[derive(Debug, Clone)]
pub struct GameResult {
    pub secret: Word,
    pub outcome: Outcome,
    pub rounds: Vec<RoundRecord>,
}

/// Simulate one game against `secret`
///
/// Starts from the full word list as the candidate pool and an empty
/// constraint set, both owned by this game alone. Each round the selector
/// proposes a guess from the surviving pool; an all-green evaluation ends the
/// game as [`Outcome::Solved`], otherwise the feedback folds into the
/// constraints and the pool is pruned. An empty pool is an ordinary terminal
/// outcome, not an error.
pub fn play<R: Rng>(secret: &Word, words: &[Word], rng: &mut R) -> GameResult {
    let mut constraints = ConstraintSet::new();
    let mut pool: Vec<Word> = words.to_vec();
    let mut rounds = Vec::with_capacity(MAX_ROUNDS);

    for round in 1..=MAX_ROUNDS {
        let pool_before = pool.len();

        let Some(guess) = select_guess(&pool, rng).cloned() else {
            return GameResult {
                secret: secret.clone(),
                outcome: Outcome::OutOfCandidates { round },
                rounds,
            };
        };

        let feedback = Feedback::evaluate(secret, &guess);

        if feedback.is_win() {
            rounds.push(RoundRecord {
                guess,
                feedback,
                pool_before,
                pool_after: pool_before,
            });
            return GameResult {
                secret: secret.clone(),
                outcome: Outcome::Solved { round },
                rounds,
            };
        }

        constraints.update(&guess, &feedback);
        pool = prune(&pool, &constraints);

        rounds.push(RoundRecord {
            guess,
            feedback,
            pool_before,
            pool_after: pool.len(),
        });
    }

    GameResult {
        secret: secret.clone(),
        outcome: Outcome::Exhausted,
        rounds,
    }
}
