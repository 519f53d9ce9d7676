//! Single-game solve command
//!
//! Simulates solving one named secret word and returns the full game record.

use crate::core::Word;
use crate::engine::{GameResult, play};
use rand::Rng;

/// Simulate a game against a specific secret word
///
/// The secret must validate as a five-letter word and appear in the word
/// list; the simulation itself then runs against the whole list as the
/// initial candidate pool.
///
/// # Errors
///
/// Returns an error if:
/// - The target word is invalid (not 5 letters or contains non-letters)
/// - The target word is not in the word list
pub fn solve_word<R: Rng>(
    target: &str,
    words: &[Word],
    rng: &mut R,
) -> Result<GameResult, String> {
    let secret = Word::new(target).map_err(|e| format!("Invalid target word: {e}"))?;

    if !words.contains(&secret) {
        return Err(format!("Word '{target}' not in word list"));
    }

    Ok(play(&secret, words, rng))
}
