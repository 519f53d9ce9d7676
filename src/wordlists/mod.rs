//! Word lists for the simulation
//!
//! Ships a built-in five-letter word list embedded in the binary and a
//! loader for custom lists. The list is loaded once per process and shared
//! read-only across every simulated game.

pub mod loader;

/// Built-in word list, one word per line.
pub const BUILTIN: &str = include_str!("../../data/words.txt");

/// Parse the built-in word list
#[must_use]
pub fn builtin_words() -> Vec<crate::core::Word> {
    loader::words_from_str(BUILTIN)
}
