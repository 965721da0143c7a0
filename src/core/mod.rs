//! Core domain types for the game
//!
//! Pure types and functions with no I/O: words, verdicts, scoring, board rows
//! and the keyboard letter aggregation.

mod letters;
mod record;
mod score;
mod verdict;
mod word;

pub use letters::LetterSets;
pub use record::GuessRecord;
pub use score::score;
pub use verdict::{UNSCORED, Verdict, Verdicts, is_perfect, to_emoji};
pub use word::{WORD_LENGTH, Word, WordError};
