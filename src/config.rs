//! Game configuration
//!
//! Collected from the command line once at startup and used to start every
//! session of the run.

use crate::core::Word;
use crate::game::{DEFAULT_ATTEMPTS, GameError, Session};
use crate::wordlists::Dictionary;
use rand::Rng;
use thiserror::Error;

/// Settings shared by every game of a run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    /// Fixed secret; a random common word is drawn per game when `None`
    pub secret: Option<Word>,
    /// Rows on the board
    pub attempts: usize,
}

/// Errors raised while starting a session
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("no secret given and the common word list is empty")]
    NoSecretAvailable,
    #[error(transparent)]
    Game(#[from] GameError),
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            secret: None,
            attempts: DEFAULT_ATTEMPTS,
        }
    }
}

impl GameConfig {
    /// Start a new session with these settings
    ///
    /// # Errors
    /// Fails if no secret can be chosen or if `attempts` is zero.
    pub fn new_session<R: Rng + ?Sized>(
        &self,
        dictionary: &Dictionary,
        rng: &mut R,
    ) -> Result<Session, ConfigError> {
        let secret = match &self.secret {
            Some(secret) => secret.clone(),
            None => dictionary
                .random_secret(rng)
                .cloned()
                .ok_or(ConfigError::NoSecretAvailable)?,
        };

        Ok(Session::new(secret, self.attempts)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_secret_is_used() {
        let config = GameConfig {
            secret: Some(Word::new("hodor").unwrap()),
            attempts: 4,
        };
        let session = config
            .new_session(&Dictionary::embedded(), &mut rand::rng())
            .unwrap();

        assert_eq!(session.secret().text(), "hodor");
        assert_eq!(session.capacity(), 4);
    }

    #[test]
    fn random_secret_comes_from_dictionary() {
        let dictionary = Dictionary::embedded();
        let session = GameConfig::default()
            .new_session(&dictionary, &mut rand::rng())
            .unwrap();

        assert!(dictionary.common().contains(session.secret()));
        assert_eq!(session.capacity(), DEFAULT_ATTEMPTS);
    }

    #[test]
    fn empty_dictionary_without_secret_fails() {
        let dictionary = Dictionary::new(Vec::new(), Vec::new());
        let err = GameConfig::default()
            .new_session(&dictionary, &mut rand::rng())
            .unwrap_err();
        assert!(matches!(err, ConfigError::NoSecretAvailable));
    }

    #[test]
    fn zero_attempts_fails() {
        let config = GameConfig {
            secret: Some(Word::new("hodor").unwrap()),
            attempts: 0,
        };
        let err = config
            .new_session(&Dictionary::embedded(), &mut rand::rng())
            .unwrap_err();
        assert!(matches!(err, ConfigError::Game(GameError::NoAttempts)));
    }
}
