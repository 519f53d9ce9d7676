//! Core domain types for the simulation
//!
//! This module contains the fundamental domain types. All types here are
//! pure, testable, and have clear mathematical properties.

mod feedback;
mod word;

pub use feedback::{Feedback, LetterColor};
pub use word::{WORD_LEN, Word, WordError};
