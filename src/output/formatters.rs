//! Formatting utilities for terminal output

use crate::core::{Feedback, LetterColor, Word};
use colored::Colorize;

/// Uppercase the guess and space the letters out, e.g. `"C R A N E"`
#[must_use]
pub fn spaced_letters(word: &Word) -> String {
    word.text()
        .to_uppercase()
        .chars()
        .map(String::from)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Space the feedback symbols to align under the letters, e.g. `"G Y . . G"`
#[must_use]
pub fn spaced_symbols(feedback: &Feedback) -> String {
    feedback
        .iter()
        .map(|c| c.symbol().to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Color each guess letter by its feedback
#[must_use]
pub fn colorize_guess(word: &Word, feedback: &Feedback) -> String {
    word.text()
        .to_uppercase()
        .chars()
        .zip(feedback.iter())
        .map(|(letter, color)| {
            let letter = letter.to_string();
            match color {
                LetterColor::Green => letter.green().bold().to_string(),
                LetterColor::Yellow => letter.yellow().bold().to_string(),
                LetterColor::Gray => letter.bright_black().to_string(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(s: &str) -> Word {
        Word::new(s).unwrap()
    }

    #[test]
    fn spaced_letters_uppercase() {
        assert_eq!(spaced_letters(&word("crane")), "C R A N E");
    }

    #[test]
    fn spaced_symbols_align_with_letters() {
        let feedback = Feedback::evaluate(&word("slate"), &word("crane"));
        assert_eq!(spaced_symbols(&feedback), ". . G . G");
    }

    #[test]
    fn spaced_symbols_all_green() {
        assert_eq!(spaced_symbols(&Feedback::PERFECT), "G G G G G");
    }

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }
}
