//! Input events and notifications
//!
//! Front ends translate their raw input into [`Key`]s and cell clicks and hand
//! them to [`handle_key`] / [`cell_clicked`]. Messages for the player come back
//! through a [`Notifier`].

use super::session::{GameError, Session, SubmitOutcome};
use crate::core::Verdict;
use crate::wordlists::Dictionary;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A key of the on-screen keyboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Letter(char),
    Enter,
    Delete,
}

/// Error for strings that name no key
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown key: {0:?}")]
pub struct KeyError(String);

impl Key {
    /// Text shown on the key cap
    #[must_use]
    pub fn label(self) -> String {
        match self {
            Self::Letter(c) => c.to_ascii_uppercase().to_string(),
            Self::Enter => "ENTER".to_string(),
            Self::Delete => "DELETE".to_string(),
        }
    }
}

impl FromStr for Key {
    type Err = KeyError;

    /// Parse `"ENTER"`, `"DELETE"` or a single letter, ignoring case
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let mut chars = trimmed.chars();

        match (chars.next(), chars.next()) {
            (Some(c), None) if c.is_ascii_alphabetic() => {
                Ok(Self::Letter(c.to_ascii_lowercase()))
            }
            _ if trimmed.eq_ignore_ascii_case("enter") => Ok(Self::Enter),
            _ if trimmed.eq_ignore_ascii_case("delete") => Ok(Self::Delete),
            _ => Err(KeyError(s.to_string())),
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

/// The three keyboard rows, top to bottom
#[must_use]
pub fn keyboard_rows() -> [Vec<Key>; 3] {
    let letters = |row: &str| row.chars().map(Key::Letter).collect::<Vec<_>>();

    let mut bottom = vec![Key::Enter];
    bottom.extend(letters("zxcvbnm"));
    bottom.push(Key::Delete);

    [letters("qwertyuiop"), letters("asdfghjkl"), bottom]
}

/// Receiver of player-facing messages
pub trait Notifier {
    fn notify(&mut self, message: &str);
}

/// Collects messages in order; handy for tests and logs
impl Notifier for Vec<String> {
    fn notify(&mut self, message: &str) {
        self.push(message.to_string());
    }
}

/// What a key press did to the session
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyEffect {
    /// Current row changed
    Edited,
    /// Nothing changed
    Unchanged,
    /// Enter was pressed
    Submitted(SubmitOutcome),
}

/// Message for a submit outcome, if the player should hear about it
#[must_use]
pub fn outcome_message(outcome: &SubmitOutcome, session: &Session) -> Option<String> {
    match outcome {
        SubmitOutcome::NotInDictionary(word) => Some(format!(
            "{} was not found in our dictionary.",
            word.to_uppercase()
        )),
        SubmitOutcome::Won(_) => Some("You won!".to_string()),
        SubmitOutcome::Lost(_) => Some(format!(
            "You lost! The word was {}.",
            session.secret().text().to_uppercase()
        )),
        SubmitOutcome::Ignored | SubmitOutcome::Accepted(_) | SubmitOutcome::Finished => None,
    }
}

/// Apply a key press to the session
///
/// Letters extend the current row, Delete removes its last letter, Enter
/// submits it. The notifier hears about rejected words, wins and losses.
pub fn handle_key<N: Notifier + ?Sized>(
    session: &mut Session,
    dictionary: &Dictionary,
    key: Key,
    notifier: &mut N,
) -> KeyEffect {
    let changed = match key {
        Key::Letter(c) => session.push_letter(c),
        Key::Delete => session.pop_letter(),
        Key::Enter => {
            let outcome = session.submit(dictionary);
            if let Some(message) = outcome_message(&outcome, session) {
                notifier.notify(&message);
            }
            return KeyEffect::Submitted(outcome);
        }
    };

    if changed {
        KeyEffect::Edited
    } else {
        KeyEffect::Unchanged
    }
}

/// A click on the cell at (`row`, `letter`) of the board
///
/// # Errors
/// Returns a `GameError` when the click is outside the board.
pub fn cell_clicked(
    session: &mut Session,
    row: usize,
    letter: usize,
) -> Result<Verdict, GameError> {
    session.toggle_verdict(row, letter)
}
