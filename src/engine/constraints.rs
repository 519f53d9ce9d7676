//! Accumulated constraint knowledge for one game
//!
//! Each round's feedback folds into three monotonically growing fields:
//! green positions, yellow letters with their forbidden positions, and gray
//! letters confirmed absent. A green position is never contradicted and a
//! gray letter is never later required.

use crate::core::{Feedback, LetterColor, Word};
use rustc_hash::{FxHashMap, FxHashSet};

/// Constraint set built up across the rounds of a single game
///
/// All fields are initialized empty up front; nothing is created on access.
/// Exclusively owned by one game and discarded when it ends.
#[derive(Debug, Clone, Default)]
pub struct ConstraintSet {
    /// Position -> letter required at that position
    greens: FxHashMap<usize, u8>,
    /// Letter known present -> positions where it is known not to be
    yellows: FxHashMap<u8, FxHashSet<usize>>,
    /// Letters confirmed absent from the secret
    grays: FxHashSet<u8>,
}

impl ConstraintSet {
    /// Create an empty constraint set
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one round's feedback into the set
    ///
    /// Positions are processed in order. Green records the required letter,
    /// yellow adds a forbidden position for the letter, and gray adds the
    /// letter to the absent set only when three conditions hold: the letter
    /// is not already required by a green, it is not tracked in yellows, and
    /// it occurs exactly once in the current guess.
    ///
    /// The exactly-once guard keeps a letter that is simultaneously
    /// green or yellow at another occurrence in the same guess from being
    /// grayed out. It is a per-guess-occurrence heuristic: a letter repeated
    /// 2+ times in one guess with only some occurrences credited is left out
    /// of `grays` entirely rather than tracked by remaining count.
    pub fn update(&mut self, guess: &Word, feedback: &Feedback) {
        for (i, color) in feedback.iter().enumerate() {
            let letter = guess.char_at(i);
            match color {
                LetterColor::Green => {
                    self.greens.insert(i, letter);
                }
                LetterColor::Yellow => {
                    self.yellows.entry(letter).or_default().insert(i);
                }
                LetterColor::Gray => {
                    let required = self.greens.values().any(|&g| g == letter)
                        || self.yellows.contains_key(&letter);
                    if !required && guess.count_of(letter) == 1 {
                        self.grays.insert(letter);
                    }
                }
            }
        }
    }

    /// Check whether a word is consistent with every accumulated constraint
    ///
    /// A word passes iff it matches all green positions, contains every
    /// yellow letter away from all of that letter's forbidden positions, and
    /// contains no gray letter. Pure conjunction; check order is irrelevant.
    #[must_use]
    pub fn allows(&self, word: &Word) -> bool {
        for (&position, &letter) in &self.greens {
            if word.char_at(position) != letter {
                return false;
            }
        }

        for (&letter, bad_positions) in &self.yellows {
            if !word.has_letter(letter) {
                return false;
            }
            if bad_positions.iter().any(|&p| word.char_at(p) == letter) {
                return false;
            }
        }

        for &letter in &self.grays {
            if word.has_letter(letter) {
                return false;
            }
        }

        true
    }

    /// Required letters by position
    #[must_use]
    pub const fn greens(&self) -> &FxHashMap<usize, u8> {
        &self.greens
    }

    /// Known-present letters and their forbidden positions
    #[must_use]
    pub const fn yellows(&self) -> &FxHashMap<u8, FxHashSet<usize>> {
        &self.yellows
    }

    /// Letters confirmed absent
    #[must_use]
    pub const fn grays(&self) -> &FxHashSet<u8> {
        &self.grays
    }
}
