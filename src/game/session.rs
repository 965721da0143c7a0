//! Session state machine
//!
//! A session owns a fixed number of rows, a cursor pointing at the row being
//! typed, and the secret. Whether the game is won or lost is derived from the
//! rows every time it is asked for; nothing about the outcome is stored.

use crate::core::{GuessRecord, LetterSets, Verdict, Verdicts, WORD_LENGTH, Word, to_emoji};
use crate::wordlists::Dictionary;
use thiserror::Error;
use tracing::{debug, info};

/// Attempts per game unless configured otherwise
pub const DEFAULT_ATTEMPTS: usize = 6;

/// Where the game stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

impl GameStatus {
    /// Whether no more input is accepted
    #[must_use]
    pub const fn is_finished(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

/// Result of submitting the current row
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Row was not a full word; nothing happened
    Ignored,
    /// Row was a full word missing from the dictionary; the row was cleared
    NotInDictionary(String),
    /// Row was scored and the game goes on
    Accepted(Verdicts),
    /// Row matched the secret
    Won(Verdicts),
    /// Row was scored and it was the last attempt
    Lost(Verdicts),
    /// Game already over; nothing happened
    Finished,
}

/// Errors raised by session operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("a game needs at least one attempt")]
    NoAttempts,
    #[error("row {index} is out of range (board has {len} rows)")]
    RowOutOfRange { index: usize, len: usize },
    #[error("letter {index} is out of range (words have {WORD_LENGTH} letters)")]
    LetterOutOfRange { index: usize },
}

/// One play-through
#[derive(Debug, Clone)]
pub struct Session {
    secret: Word,
    records: Vec<GuessRecord>,
    cursor: usize,
}

impl Session {
    /// Start a game with `attempts` rows
    ///
    /// # Errors
    /// Returns `GameError::NoAttempts` if `attempts` is zero.
    pub fn new(secret: Word, attempts: usize) -> Result<Self, GameError> {
        if attempts == 0 {
            return Err(GameError::NoAttempts);
        }
        Ok(Self::with_rows(secret, attempts))
    }

    /// Start a game with the default six rows
    #[must_use]
    pub fn with_default_attempts(secret: Word) -> Self {
        Self::with_rows(secret, DEFAULT_ATTEMPTS)
    }

    fn with_rows(secret: Word, attempts: usize) -> Self {
        info!(attempts, "new game");
        Self {
            secret,
            records: vec![GuessRecord::empty(); attempts],
            cursor: 0,
        }
    }

    #[must_use]
    pub const fn secret(&self) -> &Word {
        &self.secret
    }

    /// All rows, including placeholders
    #[must_use]
    pub fn records(&self) -> &[GuessRecord] {
        &self.records
    }

    /// Rows submitted so far
    #[must_use]
    pub fn guesses(&self) -> &[GuessRecord] {
        &self.records[..self.cursor]
    }

    /// Index of the next row to fill; also the number of guesses made
    #[must_use]
    pub const fn cursor(&self) -> usize {
        self.cursor
    }

    /// Number of rows
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.records.len()
    }

    /// Letters typed into the current row (empty once the board is full)
    #[must_use]
    pub fn current_word(&self) -> &str {
        self.records.get(self.cursor).map_or("", GuessRecord::word)
    }

    /// Derived game status
    ///
    /// Won when the last submitted row is the secret, lost when every row is
    /// used without that, in progress otherwise.
    #[must_use]
    pub fn status(&self) -> GameStatus {
        let won = self
            .cursor
            .checked_sub(1)
            .is_some_and(|last| self.records[last].word() == self.secret.text());

        if won {
            GameStatus::Won
        } else if self.cursor == self.capacity() {
            GameStatus::Lost
        } else {
            GameStatus::InProgress
        }
    }

    /// Replace the current row's letters
    ///
    /// Accepts up to five ASCII letters (case is normalized). Returns `false`
    /// and leaves the row alone for anything else, or once the game is over.
    pub fn edit_current(&mut self, partial: &str) -> bool {
        if self.status().is_finished() {
            return false;
        }

        let partial = partial.to_ascii_lowercase();
        if partial.len() > WORD_LENGTH || !partial.bytes().all(|b| b.is_ascii_lowercase()) {
            return false;
        }

        self.records[self.cursor] = GuessRecord::pending(partial);
        true
    }

    /// Append a letter to the current row
    pub fn push_letter(&mut self, letter: char) -> bool {
        let mut word = self.current_word().to_string();
        if word.len() >= WORD_LENGTH {
            return false;
        }
        word.push(letter);
        self.edit_current(&word)
    }

    /// Remove the last letter of the current row
    pub fn pop_letter(&mut self) -> bool {
        let mut word = self.current_word().to_string();
        if word.pop().is_none() {
            return false;
        }
        self.edit_current(&word)
    }

    /// Submit the current row
    ///
    /// The secret always goes through, even when the dictionary lacks it. A
    /// full word missing from the dictionary clears the row without using up
    /// an attempt. Anything shorter than five letters is ignored.
    pub fn submit(&mut self, dictionary: &Dictionary) -> SubmitOutcome {
        if self.status().is_finished() {
            return SubmitOutcome::Finished;
        }

        let Ok(guess) = Word::new(self.current_word()) else {
            return SubmitOutcome::Ignored;
        };

        let is_secret = guess == self.secret;
        if !is_secret && !dictionary.is_accepted(guess.text()) {
            debug!(guess = %guess, "rejected: not in dictionary");
            self.records[self.cursor] = GuessRecord::empty();
            return SubmitOutcome::NotInDictionary(guess.text().to_string());
        }

        let record = GuessRecord::scored(&guess, &self.secret);
        let verdicts = *record.verdicts();
        debug!(guess = %guess, row = self.cursor, verdicts = %to_emoji(&verdicts), "guess scored");

        self.records[self.cursor] = record;
        self.cursor += 1;

        match self.status() {
            GameStatus::Won => {
                info!(guesses = self.cursor, "game won");
                SubmitOutcome::Won(verdicts)
            }
            GameStatus::Lost => {
                info!(secret = %self.secret, "game lost");
                SubmitOutcome::Lost(verdicts)
            }
            GameStatus::InProgress => SubmitOutcome::Accepted(verdicts),
        }
    }

    /// Cycle one cell's verdict by hand
    ///
    /// Manual correction aid: `Correct -> Absent -> Misplaced -> Correct`.
    /// Unscored cells stay unscored. Allowed in any state; it never moves the
    /// cursor, and the status is still derived from the submitted words.
    ///
    /// # Errors
    /// Returns a `GameError` when either index is out of range.
    pub fn toggle_verdict(&mut self, row: usize, letter: usize) -> Result<Verdict, GameError> {
        let len = self.records.len();
        let record = self
            .records
            .get_mut(row)
            .ok_or(GameError::RowOutOfRange { index: row, len })?;

        let verdict = record
            .cycle_verdict(letter)
            .ok_or(GameError::LetterOutOfRange { index: letter })?;

        debug!(row, letter, ?verdict, "verdict cycled");
        Ok(verdict)
    }

    /// Keyboard letter states for the whole board
    #[must_use]
    pub fn letter_sets(&self) -> LetterSets {
        LetterSets::from_records(&self.records)
    }

    /// Emoji grid of the submitted rows, e.g. for sharing a finished game
    #[must_use]
    pub fn share_summary(&self) -> String {
        let score = match self.status() {
            GameStatus::Won => self.cursor.to_string(),
            _ => "X".to_string(),
        };

        let mut summary = format!("HORDLE {score}/{}", self.capacity());
        for record in self.guesses() {
            summary.push('\n');
            summary.push_str(&to_emoji(record.verdicts()));
        }
        summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Verdict::{Absent, Correct, Misplaced, NotGuessed};
    use pretty_assertions::assert_eq;

    fn hodor_session() -> Session {
        Session::with_default_attempts(Word::new("hodor").unwrap())
    }

    fn submit_word(session: &mut Session, dictionary: &Dictionary, word: &str) -> SubmitOutcome {
        assert!(session.edit_current(word), "could not type {word}");
        session.submit(dictionary)
    }

    #[test]
    fn fresh_session_is_in_progress() {
        let session = hodor_session();
        assert_eq!(session.status(), GameStatus::InProgress);
        assert_eq!(session.cursor(), 0);
        assert_eq!(session.capacity(), DEFAULT_ATTEMPTS);
        assert!(session.guesses().is_empty());
        assert!(session.records().iter().all(|r| *r == GuessRecord::empty()));
    }

    #[test]
    fn default_attempts_matches_explicit_six() {
        let explicit = Session::new(Word::new("hodor").unwrap(), DEFAULT_ATTEMPTS).unwrap();
        let default = hodor_session();
        assert_eq!(default.secret(), explicit.secret());
        assert_eq!(default.records(), explicit.records());
        assert_eq!(default.cursor(), explicit.cursor());
    }

    #[test]
    fn zero_attempts_is_rejected() {
        let err = Session::new(Word::new("hodor").unwrap(), 0).unwrap_err();
        assert_eq!(err, GameError::NoAttempts);
    }

    #[test]
    fn scored_guess_advances_cursor() {
        let dictionary = Dictionary::embedded();
        let mut session = hodor_session();

        let outcome = submit_word(&mut session, &dictionary, "rodeo");

        assert_eq!(
            outcome,
            SubmitOutcome::Accepted([Misplaced, Correct, Correct, Absent, Misplaced])
        );
        assert_eq!(session.cursor(), 1);
        assert_eq!(session.guesses()[0].word(), "rodeo");
        assert_eq!(session.current_word(), "");
        assert_eq!(session.status(), GameStatus::InProgress);
    }

    #[test]
    fn secret_wins_and_locks_the_board() {
        let dictionary = Dictionary::embedded();
        let mut session = hodor_session();

        let outcome = submit_word(&mut session, &dictionary, "hodor");

        assert_eq!(outcome, SubmitOutcome::Won([Correct; WORD_LENGTH]));
        assert_eq!(session.status(), GameStatus::Won);
        assert!(!session.edit_current("crane"));
        assert_eq!(session.submit(&dictionary), SubmitOutcome::Finished);
        assert_eq!(session.cursor(), 1);
    }

    #[test]
    fn secret_wins_even_when_not_in_dictionary() {
        let dictionary = Dictionary::new(Vec::new(), Vec::new());
        let mut session = Session::new(Word::new("xyzzy").unwrap(), 3).unwrap();

        let outcome = submit_word(&mut session, &dictionary, "xyzzy");

        assert!(matches!(outcome, SubmitOutcome::Won(_)));
        assert_eq!(session.status(), GameStatus::Won);
    }

    #[test]
    fn unknown_word_clears_row_without_using_an_attempt() {
        let dictionary = Dictionary::embedded();
        let mut session = hodor_session();

        let outcome = submit_word(&mut session, &dictionary, "xyzzy");

        assert_eq!(outcome, SubmitOutcome::NotInDictionary("xyzzy".to_string()));
        assert_eq!(session.status(), GameStatus::InProgress);
        assert_eq!(session.cursor(), 0);
        assert_eq!(session.current_word(), "");
        assert_eq!(session.records()[0].verdicts(), &[NotGuessed; WORD_LENGTH]);
    }

    #[test]
    fn short_rows_are_ignored_silently() {
        let dictionary = Dictionary::embedded();
        let mut session = hodor_session();

        let outcome = submit_word(&mut session, &dictionary, "hod");

        assert_eq!(outcome, SubmitOutcome::Ignored);
        assert_eq!(session.cursor(), 0);
        assert_eq!(session.current_word(), "hod");
    }

    #[test]
    fn six_misses_lose_the_game() {
        let dictionary = Dictionary::embedded();
        let mut session = hodor_session();
        let misses = ["crane", "slate", "audio", "ghost", "lucky"];

        for word in misses {
            assert!(matches!(
                submit_word(&mut session, &dictionary, word),
                SubmitOutcome::Accepted(_)
            ));
        }
        let last = submit_word(&mut session, &dictionary, "nymph");

        assert!(matches!(last, SubmitOutcome::Lost(_)));
        assert_eq!(session.status(), GameStatus::Lost);
        assert_eq!(session.cursor(), session.capacity());
        assert_eq!(session.current_word(), "");
        assert!(!session.push_letter('a'));
        assert_eq!(session.submit(&dictionary), SubmitOutcome::Finished);
    }

    #[test]
    fn winning_on_the_last_row_is_a_win() {
        let dictionary = Dictionary::embedded();
        let mut session = Session::new(Word::new("hodor").unwrap(), 2).unwrap();

        submit_word(&mut session, &dictionary, "crane");
        let outcome = submit_word(&mut session, &dictionary, "hodor");

        assert!(matches!(outcome, SubmitOutcome::Won(_)));
        assert_eq!(session.status(), GameStatus::Won);
    }

    #[test]
    fn typing_and_backspace() {
        let mut session = hodor_session();

        for letter in "hodorx".chars() {
            session.push_letter(letter);
        }
        assert_eq!(session.current_word(), "hodor");

        assert!(session.pop_letter());
        assert!(session.pop_letter());
        assert_eq!(session.current_word(), "hod");

        session.edit_current("");
        assert!(!session.pop_letter());
        assert_eq!(session.current_word(), "");
    }

    #[test]
    fn edit_rejects_bad_partials() {
        let mut session = hodor_session();
        assert!(session.edit_current("HoD"));
        assert_eq!(session.current_word(), "hod");

        assert!(!session.edit_current("hodors"));
        assert!(!session.edit_current("h0d"));
        assert!(!session.push_letter('1'));
        assert_eq!(session.current_word(), "hod");
    }

    #[test]
    fn toggling_changes_verdicts_but_not_progress() {
        let dictionary = Dictionary::embedded();
        let mut session = hodor_session();
        submit_word(&mut session, &dictionary, "rodeo");

        assert_eq!(session.toggle_verdict(0, 1), Ok(Absent));
        assert_eq!(session.toggle_verdict(0, 3), Ok(Misplaced));
        assert_eq!(session.records()[0].verdicts()[1], Absent);
        assert_eq!(session.cursor(), 1);
        assert_eq!(session.status(), GameStatus::InProgress);
    }

    #[test]
    fn toggling_a_winning_row_keeps_the_win() {
        let dictionary = Dictionary::embedded();
        let mut session = hodor_session();
        submit_word(&mut session, &dictionary, "hodor");

        session.toggle_verdict(0, 0).unwrap();
        assert_eq!(session.status(), GameStatus::Won);
    }

    #[test]
    fn toggling_out_of_range() {
        let mut session = hodor_session();
        assert_eq!(
            session.toggle_verdict(6, 0),
            Err(GameError::RowOutOfRange { index: 6, len: 6 })
        );
        assert_eq!(
            session.toggle_verdict(0, 5),
            Err(GameError::LetterOutOfRange { index: 5 })
        );
        assert_eq!(session.toggle_verdict(0, 0), Ok(NotGuessed));
    }

    #[test]
    fn letter_sets_follow_the_board() {
        let dictionary = Dictionary::embedded();
        let mut session = hodor_session();
        submit_word(&mut session, &dictionary, "rodeo");
        session.edit_current("zz");

        let sets = session.letter_sets();
        assert_eq!(sets.verdict_for('o'), Verdict::Correct);
        assert_eq!(sets.verdict_for('e'), Verdict::Absent);
        assert_eq!(sets.verdict_for('z'), Verdict::NotGuessed);
    }

    #[test]
    fn share_summary_lists_rows() {
        let dictionary = Dictionary::embedded();
        let mut session = hodor_session();
        submit_word(&mut session, &dictionary, "rodeo");
        submit_word(&mut session, &dictionary, "hodor");

        assert_eq!(
            session.share_summary(),
            "HORDLE 2/6\n🟨🟩🟩⬛🟨\n🟩🟩🟩🟩🟩"
        );
    }
}
