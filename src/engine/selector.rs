//! Stochastic guess selection
//!
//! Draws a handful of random samples from the candidate pool and keeps the
//! one with the most distinct letters. Intentionally a cheap heuristic: the
//! winner is the best of the sampled set, not of the whole pool.

use crate::core::Word;
use rand::Rng;

/// Number of samples drawn (with replacement) per selection.
pub const SAMPLE_DRAWS: usize = 5;

/// Pick the next guess from the candidate pool
///
/// Returns `None` when the pool is empty. Otherwise draws up to
/// [`SAMPLE_DRAWS`] uniform samples with replacement, scores each sampled
/// word by its distinct-letter count, and returns the first sampled word
/// achieving the maximum score.
///
/// Samples are kept as an ordered list keyed by word: re-sampling a word
/// overwrites its score in place rather than appending, so the first-max
/// tie-break is deterministic for a fixed seed.
pub fn select_guess<'a, R: Rng>(pool: &'a [Word], rng: &mut R) -> Option<&'a Word> {
    if pool.is_empty() {
        return None;
    }

    let mut samples: Vec<(&Word, usize)> = Vec::with_capacity(SAMPLE_DRAWS);
    for _ in 0..SAMPLE_DRAWS {
        let sampled = &pool[rng.random_range(0..pool.len())];
        let score = sampled.distinct_letters();
        match samples.iter_mut().find(|(word, _)| *word == sampled) {
            Some(entry) => entry.1 = score,
            None => samples.push((sampled, score)),
        }
    }

    let best = samples.iter().map(|&(_, score)| score).max()?;
    samples
        .iter()
        .find(|&&(_, score)| score == best)
        .map(|&(word, _)| word)
}
