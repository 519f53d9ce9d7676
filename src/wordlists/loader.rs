//! Word list loading utilities
//!
//! Parses word lists from files or in-memory text, silently discarding any
//! line that is not a valid five-letter word.

use crate::core::Word;
use std::fs;
use std::io;
use std::path::Path;

/// Parse words from newline-separated text
///
/// Lines are trimmed; anything that fails `Word` validation (wrong length,
/// non-letters) is dropped without comment.
///
/// # Examples
/// ```
/// use wordle_sim::wordlists::loader::words_from_str;
///
/// let words = words_from_str("crane\ntoolong\nslate\n");
/// assert_eq!(words.len(), 2);
/// ```
#[must_use]
pub fn words_from_str(content: &str) -> Vec<Word> {
    content
        .lines()
        .filter_map(|line| {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                None
            } else {
                Word::new(trimmed).ok()
            }
        })
        .collect()
}

/// Load words from a file
///
/// Returns a vector of valid `Word` instances, skipping any invalid entries.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use wordle_sim::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<Word>> {
    let content = fs::read_to_string(path)?;
    Ok(words_from_str(&content))
}
