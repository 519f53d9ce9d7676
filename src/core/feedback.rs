//! Wordle feedback evaluation and representation
//!
//! Feedback classifies each guess position as:
//! - Green (correct letter, correct position)
//! - Yellow (letter in word, wrong position)
//! - Gray (letter absent, accounting for multiplicity)
//!
//! Console symbols are `G`, `Y`, and `.` respectively.

use super::{WORD_LEN, Word};

/// Per-position classification of a guessed letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LetterColor {
    Green,
    Yellow,
    Gray,
}

impl LetterColor {
    /// Single-character console symbol for this color
    #[inline]
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Green => 'G',
            Self::Yellow => 'Y',
            Self::Gray => '.',
        }
    }
}

/// Feedback for one guess against one secret
///
/// An ordered sequence of 5 colors, one per guess position. Produced fresh
/// each round and never mutated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Feedback {
    colors: [LetterColor; WORD_LEN],
}

impl Feedback {
    /// All greens (winning guess)
    pub const PERFECT: Self = Self {
        colors: [LetterColor::Green; WORD_LEN],
    };

    /// Create feedback from an explicit color array
    #[inline]
    #[must_use]
    pub const fn new(colors: [LetterColor; WORD_LEN]) -> Self {
        Self { colors }
    }

    /// Score `guess` against `secret`
    ///
    /// Implements Wordle's exact feedback rules, including proper handling
    /// of duplicate letters.
    ///
    /// # Algorithm
    /// 1. First pass: mark exact position matches green and decrement the
    ///    secret's remaining-count pool for each
    /// 2. Second pass: mark yellow only while the guessed letter still has a
    ///    positive remaining count (then decrement), else gray
    ///
    /// The remaining-count pool guarantees that green plus yellow marks for a
    /// repeated letter never exceed its occurrence count in the secret.
    /// Pure function of its two inputs.
    ///
    /// # Examples
    /// ```
    /// use wordle_sim::core::{Feedback, Word};
    ///
    /// let secret = Word::new("slate").unwrap();
    /// let guess = Word::new("crane").unwrap();
    /// let feedback = Feedback::evaluate(&secret, &guess);
    ///
    /// // C(gray) R(gray) A(green) N(gray) E(green)
    /// assert_eq!(feedback.symbols(), "..G.G");
    /// ```
    #[must_use]
    pub fn evaluate(secret: &Word, guess: &Word) -> Self {
        let mut colors = [LetterColor::Gray; WORD_LEN];
        let mut remaining = secret.letter_counts();

        // First pass: greens consume from the remaining pool
        // Allow: index needed to compare guess[i] and secret[i] and set colors[i]
        #[allow(clippy::needless_range_loop)]
        for i in 0..WORD_LEN {
            if guess.char_at(i) == secret.char_at(i) {
                colors[i] = LetterColor::Green;

                if let Some(count) = remaining.get_mut(&guess.char_at(i)) {
                    *count = count.saturating_sub(1);
                }
            }
        }

        // Second pass: yellows only while the pool still has that letter
        #[allow(clippy::needless_range_loop)]
        for i in 0..WORD_LEN {
            if colors[i] != LetterColor::Green {
                let letter = guess.char_at(i);
                if let Some(count) = remaining.get_mut(&letter)
                    && *count > 0
                {
                    colors[i] = LetterColor::Yellow;
                    *count -= 1;
                }
            }
        }

        Self { colors }
    }

    /// The per-position colors
    #[inline]
    #[must_use]
    pub const fn colors(&self) -> &[LetterColor; WORD_LEN] {
        &self.colors
    }

    /// Color at a specific position (0-4)
    ///
    /// # Panics
    /// Panics if position >= 5
    #[inline]
    #[must_use]
    pub const fn color_at(&self, position: usize) -> LetterColor {
        self.colors[position]
    }

    /// Check if this is a winning result (all greens)
    #[inline]
    #[must_use]
    pub fn is_win(&self) -> bool {
        self.colors.iter().all(|&c| c == LetterColor::Green)
    }

    /// Iterate over the colors in position order
    pub fn iter(&self) -> impl Iterator<Item = LetterColor> + '_ {
        self.colors.iter().copied()
    }

    /// Compact symbol string, e.g. `"GY..G"`
    #[must_use]
    pub fn symbols(&self) -> String {
        self.colors.iter().map(|c| c.symbol()).collect()
    }

    /// Count of green positions
    #[must_use]
    pub fn count_greens(&self) -> usize {
        self.colors
            .iter()
            .filter(|&&c| c == LetterColor::Green)
            .count()
    }

    /// Count of yellow positions
    #[must_use]
    pub fn count_yellows(&self) -> usize {
        self.colors
            .iter()
            .filter(|&&c| c == LetterColor::Yellow)
            .count()
    }
}
