//! One-shot scoring command
//!
//! Scores a single guess against a given secret without starting a game.

use crate::core::{GuessRecord, Word, WordError};

/// Score `guess` against `secret`
///
/// # Errors
///
/// Returns a `WordError` if either input is not a valid five-letter word.
///
/// # Examples
/// ```
/// use hordle::commands::score_words;
/// use hordle::core::to_emoji;
///
/// let record = score_words("rodeo", "hodor").unwrap();
/// assert_eq!(to_emoji(record.verdicts()), "🟨🟩🟩⬛🟨");
/// ```
pub fn score_words(guess: &str, secret: &str) -> Result<GuessRecord, WordError> {
    let guess = Word::new(guess)?;
    let secret = Word::new(secret)?;
    Ok(GuessRecord::scored(&guess, &secret))
}
