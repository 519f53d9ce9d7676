//! Guess scoring command
//!
//! Evaluates a single guess against a secret and returns the feedback,
//! a direct window onto the evaluator from the CLI.

use crate::core::{Feedback, Word};

/// Result of scoring one guess against one secret
pub struct ScoreResult {
    pub secret: Word,
    pub guess: Word,
    pub feedback: Feedback,
}

/// Score `guess` against `secret`
///
/// # Errors
///
/// Returns an error if either word is invalid (not 5 letters or contains
/// non-letters). Neither word needs to be in the word list.
pub fn score_pair(secret: &str, guess: &str) -> Result<ScoreResult, String> {
    let secret = Word::new(secret).map_err(|e| format!("Invalid secret word: {e}"))?;
    let guess = Word::new(guess).map_err(|e| format!("Invalid guess word: {e}"))?;

    let feedback = Feedback::evaluate(&secret, &guess);

    Ok(ScoreResult {
        secret,
        guess,
        feedback,
    })
}
