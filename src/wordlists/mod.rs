//! Word lists for the game
//!
//! The embedded lists are compiled into the binary. A [`Dictionary`] is built
//! from them once at startup and then shared read-only by reference.

mod embedded;
pub mod loader;

pub use embedded::{ACCEPTED, ACCEPTED_COUNT, COMMON, COMMON_COUNT};

use crate::core::Word;
use loader::words_from_slice;
use rand::Rng;
use rand::prelude::IndexedRandom;
use rustc_hash::FxHashSet;

/// Read-only word configuration for a run of the game
///
/// `common` is the secret pool. `accepted` decides whether a submitted guess
/// is a real word. The two lists are independent: a common word is only
/// accepted as a guess if the accepted list holds it too.
#[derive(Debug, Clone)]
pub struct Dictionary {
    common: Vec<Word>,
    accepted: FxHashSet<String>,
}

impl Dictionary {
    /// Build a dictionary from explicit lists
    #[must_use]
    pub fn new(common: Vec<Word>, accepted: impl IntoIterator<Item = Word>) -> Self {
        let accepted = accepted.into_iter().map(|w| w.text().to_string()).collect();

        Self { common, accepted }
    }

    /// Dictionary from the lists embedded at build time
    #[must_use]
    pub fn embedded() -> Self {
        Self::new(words_from_slice(COMMON), words_from_slice(ACCEPTED))
    }

    /// Embedded common words with a replacement accepted list
    #[must_use]
    pub fn with_accepted(accepted: Vec<Word>) -> Self {
        Self::new(words_from_slice(COMMON), accepted)
    }

    /// Whether `word` may be submitted as a guess
    ///
    /// # Examples
    /// ```
    /// use hordle::wordlists::Dictionary;
    ///
    /// let dictionary = Dictionary::embedded();
    /// assert!(dictionary.is_accepted("rodeo"));
    /// assert!(!dictionary.is_accepted("xyzzy"));
    /// ```
    #[must_use]
    pub fn is_accepted(&self, word: &str) -> bool {
        self.accepted.contains(word)
    }

    /// Words secrets are drawn from
    #[must_use]
    pub fn common(&self) -> &[Word] {
        &self.common
    }

    /// Number of accepted guesses
    #[must_use]
    pub fn accepted_len(&self) -> usize {
        self.accepted.len()
    }

    /// Pick a random secret from the common list
    ///
    /// Returns `None` only if the common list is empty.
    pub fn random_secret<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&Word> {
        self.common.choose(rng)
    }
}

impl Default for Dictionary {
    fn default() -> Self {
        Self::embedded()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn common_count_matches_const() {
        assert_eq!(COMMON.len(), COMMON_COUNT);
    }

    #[test]
    fn accepted_count_matches_const() {
        assert_eq!(ACCEPTED.len(), ACCEPTED_COUNT);
    }

    #[test]
    fn embedded_entries_are_valid_words() {
        for &word in COMMON.iter().chain(ACCEPTED) {
            assert_eq!(word.len(), 5, "Word '{word}' is not 5 letters");
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "Word '{word}' contains non-lowercase chars"
            );
        }
    }

    #[test]
    fn common_subset_of_accepted() {
        let dictionary = Dictionary::embedded();
        for word in dictionary.common() {
            assert!(dictionary.is_accepted(word.text()), "{word} not accepted");
        }
        assert!(dictionary.is_accepted("hodor"));
    }

    #[test]
    fn replacement_list_is_the_only_accepted_list() {
        let dictionary = Dictionary::with_accepted(vec![Word::new("zzzzz").unwrap()]);
        assert!(dictionary.is_accepted("zzzzz"));
        assert!(dictionary.common().iter().any(|w| w == "about"));
        assert!(!dictionary.is_accepted("about"));
        assert!(!dictionary.is_accepted("hodor"));
        assert_eq!(dictionary.accepted_len(), 1);
    }

    #[test]
    fn random_secret_comes_from_common_list() {
        let dictionary = Dictionary::embedded();
        let mut rng = rand::rng();
        for _ in 0..20 {
            let secret = dictionary.random_secret(&mut rng).unwrap();
            assert!(dictionary.common().contains(secret));
        }
    }

    #[test]
    fn empty_common_list_has_no_secret() {
        let dictionary = Dictionary::new(Vec::new(), Vec::new());
        assert!(dictionary.random_secret(&mut rand::rng()).is_none());
        assert_eq!(dictionary.accepted_len(), 0);
    }
}
