//! Letter states aggregated over the board
//!
//! Used to color the keyboard. Every scored letter of every row is bucketed
//! by its verdict; a letter can land in several buckets when rows disagree
//! (or when a verdict was cycled by hand), and `verdict_for` picks the one
//! with the highest precedence.

use super::{GuessRecord, Verdict};
use rustc_hash::FxHashSet;

/// Letters seen on the board, grouped by verdict
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LetterSets {
    pub absent: FxHashSet<char>,
    pub misplaced: FxHashSet<char>,
    pub correct: FxHashSet<char>,
}

impl LetterSets {
    /// Collect letter states from every record
    ///
    /// # Examples
    /// ```
    /// use hordle::core::{GuessRecord, LetterSets, Verdict, Word};
    ///
    /// let secret = Word::new("hodor").unwrap();
    /// let rows = [GuessRecord::scored(&Word::new("rodeo").unwrap(), &secret)];
    /// let sets = LetterSets::from_records(&rows);
    ///
    /// assert!(sets.correct.contains(&'d'));
    /// assert!(sets.absent.contains(&'e'));
    /// assert_eq!(sets.verdict_for('o'), Verdict::Correct);
    /// assert_eq!(sets.verdict_for('z'), Verdict::NotGuessed);
    /// ```
    #[must_use]
    pub fn from_records(records: &[GuessRecord]) -> Self {
        let mut sets = Self::default();

        for (letter, verdict) in records.iter().flat_map(GuessRecord::cells) {
            match verdict {
                Verdict::Absent => sets.absent.insert(letter),
                Verdict::Misplaced => sets.misplaced.insert(letter),
                Verdict::Correct => sets.correct.insert(letter),
                Verdict::NotGuessed => continue,
            };
        }

        sets
    }

    /// Single display verdict for `letter`
    ///
    /// `Correct` beats `Misplaced` beats `Absent`; letters never scored are
    /// `NotGuessed`.
    #[must_use]
    pub fn verdict_for(&self, letter: char) -> Verdict {
        let letter = letter.to_ascii_lowercase();
        if self.correct.contains(&letter) {
            Verdict::Correct
        } else if self.misplaced.contains(&letter) {
            Verdict::Misplaced
        } else if self.absent.contains(&letter) {
            Verdict::Absent
        } else {
            Verdict::NotGuessed
        }
    }

    /// Whether `letter` has been scored at least once
    #[must_use]
    pub fn contains(&self, letter: char) -> bool {
        self.verdict_for(letter).is_scored()
    }
}
