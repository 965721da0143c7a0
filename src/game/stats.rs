//! Tally of finished games within one run of the program

use super::session::{GameStatus, Session};

/// Win/loss counts and guess distribution
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    /// `guess_distribution[n]` counts games won in `n` guesses
    pub guess_distribution: Vec<usize>,
}

impl Statistics {
    /// Count a session if it has finished
    ///
    /// Returns `false` for a session still in progress.
    pub fn record(&mut self, session: &Session) -> bool {
        match session.status() {
            GameStatus::InProgress => return false,
            GameStatus::Won => {
                let guesses = session.cursor();
                if self.guess_distribution.len() <= guesses {
                    self.guess_distribution.resize(guesses + 1, 0);
                }
                self.guess_distribution[guesses] += 1;
                self.games_won += 1;
            }
            GameStatus::Lost => {}
        }

        self.total_games += 1;
        true
    }

    /// Count a session the player walked away from
    ///
    /// A game with at least one guess counts as played but not won. Finished
    /// games were already counted by [`Statistics::record`] and untouched
    /// boards are not games at all; both return `false`.
    pub fn record_abandoned(&mut self, session: &Session) -> bool {
        if session.status() != GameStatus::InProgress || session.cursor() == 0 {
            return false;
        }

        self.total_games += 1;
        true
    }

    /// Share of games won, as a percentage
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.total_games == 0 {
            0.0
        } else {
            self.games_won as f64 / self.total_games as f64 * 100.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;
    use crate::wordlists::Dictionary;

    fn play(secret: &str, attempts: usize, guesses: &[&str]) -> Session {
        let dictionary = Dictionary::embedded();
        let mut session = Session::new(Word::new(secret).unwrap(), attempts).unwrap();
        for guess in guesses {
            session.edit_current(guess);
            session.submit(&dictionary);
        }
        session
    }

    #[test]
    fn unfinished_games_are_not_counted() {
        let mut stats = Statistics::default();
        assert!(!stats.record(&play("hodor", 6, &["crane"])));
        assert_eq!(stats, Statistics::default());
    }

    #[test]
    fn counts_wins_losses_and_distribution() {
        let mut stats = Statistics::default();
        stats.record(&play("hodor", 6, &["crane", "hodor"]));
        stats.record(&play("hodor", 6, &["hodor"]));
        stats.record(&play("hodor", 1, &["crane"]));

        assert_eq!(stats.total_games, 3);
        assert_eq!(stats.games_won, 2);
        assert_eq!(stats.guess_distribution, vec![0, 1, 1]);
        assert!((stats.win_rate() - 200.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn win_rate_of_nothing_is_zero() {
        assert!(Statistics::default().win_rate().abs() < f64::EPSILON);
    }

    #[test]
    fn abandoned_games_count_as_played() {
        let mut stats = Statistics::default();
        assert!(stats.record_abandoned(&play("hodor", 6, &["crane"])));
        assert!(!stats.record_abandoned(&play("hodor", 6, &[])));
        assert!(!stats.record_abandoned(&play("hodor", 6, &["hodor"])));

        assert_eq!(stats.total_games, 1);
        assert_eq!(stats.games_won, 0);
    }
}
