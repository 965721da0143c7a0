//! Per-letter feedback
//!
//! Variants are declared in display-precedence order, so the derived `Ord`
//! gives `Correct > Misplaced > Absent > NotGuessed`. Whenever the same letter
//! carries different verdicts across guesses, the greatest one is shown.

use super::WORD_LENGTH;

/// Feedback for a single letter of a guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Verdict {
    /// Slot not scored yet
    #[default]
    NotGuessed,
    /// Letter does not occur in the secret
    Absent,
    /// Letter occurs in the secret at another position
    Misplaced,
    /// Letter is at the right position
    Correct,
}

/// Verdicts for a whole guess, index-aligned with its letters
pub type Verdicts = [Verdict; WORD_LENGTH];

/// Verdicts of an unscored slot
pub const UNSCORED: Verdicts = [Verdict::NotGuessed; WORD_LENGTH];

impl Verdict {
    /// Next verdict in the manual correction cycle
    ///
    /// `Correct -> Absent -> Misplaced -> Correct`. `NotGuessed` has no place
    /// in the cycle and is returned unchanged.
    ///
    /// # Examples
    /// ```
    /// use hordle::core::Verdict;
    ///
    /// assert_eq!(Verdict::Correct.cycled(), Verdict::Absent);
    /// assert_eq!(Verdict::Absent.cycled(), Verdict::Misplaced);
    /// assert_eq!(Verdict::Misplaced.cycled(), Verdict::Correct);
    /// ```
    #[must_use]
    pub const fn cycled(self) -> Self {
        match self {
            Self::Correct => Self::Absent,
            Self::Absent => Self::Misplaced,
            Self::Misplaced => Self::Correct,
            Self::NotGuessed => Self::NotGuessed,
        }
    }

    /// Whether this slot has been scored
    #[inline]
    #[must_use]
    pub const fn is_scored(self) -> bool {
        !matches!(self, Self::NotGuessed)
    }

    /// Emoji square used in share summaries
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Misplaced => '🟨',
            Self::Absent => '⬛',
            Self::NotGuessed => '⬜',
        }
    }
}

/// Render a row of verdicts as emoji squares
///
/// # Examples
/// ```
/// use hordle::core::{to_emoji, Verdict::*};
///
/// assert_eq!(to_emoji(&[Correct, Misplaced, Absent, Correct, Misplaced]), "🟩🟨⬛🟩🟨");
/// ```
#[must_use]
pub fn to_emoji(verdicts: &Verdicts) -> String {
    verdicts.iter().map(|v| v.emoji()).collect()
}

/// Whether every letter of the row is `Correct`
#[must_use]
pub fn is_perfect(verdicts: &Verdicts) -> bool {
    verdicts.iter().all(|&v| v == Verdict::Correct)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn precedence_order() {
        assert!(Verdict::Correct > Verdict::Misplaced);
        assert!(Verdict::Misplaced > Verdict::Absent);
        assert!(Verdict::Absent > Verdict::NotGuessed);
        assert_eq!(
            [Verdict::Absent, Verdict::Correct, Verdict::Misplaced]
                .into_iter()
                .max(),
            Some(Verdict::Correct)
        );
    }

    #[test]
    fn cycle_returns_to_start_after_three_steps() {
        for start in [Verdict::Correct, Verdict::Absent, Verdict::Misplaced] {
            assert_eq!(start.cycled().cycled().cycled(), start);
            assert_ne!(start.cycled(), start);
        }
    }

    #[test]
    fn not_guessed_is_outside_the_cycle() {
        assert_eq!(Verdict::NotGuessed.cycled(), Verdict::NotGuessed);
        assert!(!Verdict::NotGuessed.is_scored());
        assert!(Verdict::Absent.is_scored());
    }

    #[test]
    fn default_is_unscored() {
        assert_eq!(Verdict::default(), Verdict::NotGuessed);
        assert!(UNSCORED.iter().all(|v| !v.is_scored()));
    }

    #[test]
    fn emoji_row() {
        assert_eq!(to_emoji(&UNSCORED), "⬜⬜⬜⬜⬜");
        assert_eq!(to_emoji(&[Verdict::Correct; WORD_LENGTH]), "🟩🟩🟩🟩🟩");
    }

    #[test]
    fn perfect_row() {
        assert!(is_perfect(&[Verdict::Correct; WORD_LENGTH]));
        assert!(!is_perfect(&UNSCORED));
    }
}
