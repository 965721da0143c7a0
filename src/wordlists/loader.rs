//! Word list loading utilities
//!
//! Provides functions to normalize newline-delimited word lists, load them
//! from files, or convert the embedded constants.

use crate::core::Word;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Normalize a newline-delimited word list
///
/// Each line is trimmed and lowercased; only valid five-letter words survive.
///
/// # Examples
/// ```
/// use hordle::wordlists::loader::wordify;
///
/// let words = wordify("  Hodor\nrodeo\nhodors\n\nCRANE ");
/// let texts: Vec<&str> = words.iter().map(|w| w.text()).collect();
/// assert_eq!(texts, ["hodor", "rodeo", "crane"]);
/// ```
#[must_use]
pub fn wordify(content: &str) -> Vec<Word> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter_map(|line| Word::new(line).ok())
        .collect()
}

/// Load words from a file
///
/// Returns the valid `Word` instances, skipping any invalid entries.
///
/// # Errors
///
/// Returns an error if the file cannot be read.
///
/// # Examples
/// ```no_run
/// use hordle::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/accepted.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<Word>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read word list {}", path.display()))?;

    Ok(wordify(&content))
}

/// Convert embedded string slice to Word vector
///
/// # Examples
/// ```
/// use hordle::wordlists::loader::words_from_slice;
/// use hordle::wordlists::COMMON;
///
/// let words = words_from_slice(COMMON);
/// assert_eq!(words.len(), COMMON.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice
        .iter()
        .filter_map(|&s| Word::new(s.trim()).ok())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_from_slice_converts_valid_words() {
        let input = &["hodor", "rodeo", "crane"];
        let words = words_from_slice(input);

        assert_eq!(words.len(), 3);
        assert_eq!(words[0].text(), "hodor");
        assert_eq!(words[2].text(), "crane");
    }

    #[test]
    fn words_from_slice_skips_invalid() {
        let input = &["hodor", "toolong", "abc", "rodeo"];
        let words = words_from_slice(input);

        assert_eq!(words.len(), 2);
        assert_eq!(words[0].text(), "hodor");
        assert_eq!(words[1].text(), "rodeo");
    }

    #[test]
    fn wordify_trims_and_lowercases() {
        let words = wordify("\tSLATE \r\nAudio\n");
        assert_eq!(words.len(), 2);
        assert_eq!(words[0].text(), "slate");
        assert_eq!(words[1].text(), "audio");
    }

    #[test]
    fn wordify_drops_wrong_lengths_and_symbols() {
        let words = wordify("four\nsixsix\nab-cd\nvalid\n");
        assert_eq!(words.len(), 1);
        assert_eq!(words[0].text(), "valid");
    }

    #[test]
    fn load_from_missing_file_fails_with_path() {
        let err = load_from_file("/definitely/not/here.txt").unwrap_err();
        assert!(err.to_string().contains("/definitely/not/here.txt"));
    }
}
