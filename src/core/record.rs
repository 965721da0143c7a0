//! One row of the board
//!
//! A record pairs the letters typed into a row with their verdicts. Unused
//! rows are empty placeholders, the row being typed holds a partial word, and
//! submitted rows hold a full word plus its scored verdicts.

use super::{UNSCORED, Verdict, Verdicts, WORD_LENGTH, Word, score};

/// A row of the board
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GuessRecord {
    word: String,
    verdicts: Verdicts,
}

impl GuessRecord {
    /// Empty placeholder row
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            word: String::new(),
            verdicts: UNSCORED,
        }
    }

    /// Unscored row holding partially typed input
    pub(crate) fn pending(word: impl Into<String>) -> Self {
        Self {
            word: word.into(),
            verdicts: UNSCORED,
        }
    }

    /// Score `guess` against `secret` and build the resulting row
    #[must_use]
    pub fn scored(guess: &Word, secret: &Word) -> Self {
        Self {
            word: guess.text().to_string(),
            verdicts: score(guess, secret),
        }
    }

    /// Letters typed into this row (0 to 5 of them)
    #[inline]
    #[must_use]
    pub fn word(&self) -> &str {
        &self.word
    }

    /// Verdicts, index-aligned with the letters
    #[inline]
    #[must_use]
    pub const fn verdicts(&self) -> &Verdicts {
        &self.verdicts
    }

    /// Letter at `index`, if one has been typed there
    #[must_use]
    pub fn letter_at(&self, index: usize) -> Option<char> {
        self.word.as_bytes().get(index).map(|&b| char::from(b))
    }

    /// Pairs of (letter, verdict) for every typed letter
    pub fn cells(&self) -> impl Iterator<Item = (char, Verdict)> + '_ {
        self.word
            .bytes()
            .map(char::from)
            .zip(self.verdicts.iter().copied())
    }

    /// Whether the row holds a full-length word
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.word.len() == WORD_LENGTH
    }

    /// Advance the verdict at `index` one step through the correction cycle
    ///
    /// Returns the new verdict, or `None` if `index` is out of range.
    pub fn cycle_verdict(&mut self, index: usize) -> Option<Verdict> {
        let verdict = self.verdicts.get_mut(index)?;
        *verdict = verdict.cycled();
        Some(*verdict)
    }
}
