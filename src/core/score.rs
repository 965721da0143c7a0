//! Guess scoring
//!
//! Each position of the guess is judged on its own:
//! - same letter as the secret at that position → `Correct`
//! - letter occurs anywhere in the secret → `Misplaced`
//! - otherwise → `Absent`
//!
//! Presence is a set-membership test, not a letter count. A guess repeating a
//! letter the secret holds once marks every extra copy `Misplaced` instead of
//! `Absent`. Boards scored here therefore differ from the official game on
//! words with repeated letters.

use super::{Verdict, Verdicts, WORD_LENGTH, Word};

/// Score `guess` against `secret`
///
/// # Examples
/// ```
/// use hordle::core::{score, Verdict::*, Word};
///
/// let guess = Word::new("rodeo").unwrap();
/// let secret = Word::new("hodor").unwrap();
///
/// assert_eq!(
///     score(&guess, &secret),
///     [Misplaced, Correct, Correct, Absent, Misplaced]
/// );
/// ```
#[must_use]
pub fn score(guess: &Word, secret: &Word) -> Verdicts {
    let present = secret.letter_set();
    let mut verdicts = [Verdict::Absent; WORD_LENGTH];

    for (i, (&g, &s)) in guess.letters().iter().zip(secret.letters()).enumerate() {
        verdicts[i] = if g == s {
            Verdict::Correct
        } else if present.contains(&g) {
            Verdict::Misplaced
        } else {
            Verdict::Absent
        };
    }

    verdicts
}
